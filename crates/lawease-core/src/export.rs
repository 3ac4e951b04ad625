//! Export formatter — lays the ordered message list out into a paginated
//! text document.
//!
//! Pure function of its input: no state between invocations. Each message
//! renders as a role-labelled block, word-wrapped to a fixed column
//! width; a block that reaches the bottom of a page continues on the next
//! one, so content is never truncated.

use lawease_types::message::{Message, Sender};

pub const EXPORT_TITLE: &str = "LawEase Conversation";

/// Wrap column for message text.
pub const WRAP_COLS: usize = 90;

/// Usable lines per page.
pub const PAGE_LINES: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub title: String,
    pub pages: Vec<Vec<String>>,
}

impl ExportDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every laid-out line in order, ignoring page boundaries.
    pub fn all_lines(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flatten().map(String::as_str)
    }
}

fn role_label(from: Sender) -> &'static str {
    match from {
        Sender::User => "User: ",
        Sender::Bot => "LawEase: ",
    }
}

/// Lay out messages with the default geometry. An empty input yields a
/// single title-only page.
pub fn paginate(messages: &[Message]) -> ExportDocument {
    paginate_with(messages, WRAP_COLS, PAGE_LINES)
}

pub fn paginate_with(messages: &[Message], cols: usize, page_lines: usize) -> ExportDocument {
    let mut pages: Vec<Vec<String>> = Vec::new();
    let mut page: Vec<String> = Vec::new();
    for msg in messages {
        let block = wrap(&format!("{}{}", role_label(msg.from), msg.text), cols);

        // Blank separator between blocks, never at the top of a page.
        if !page.is_empty() {
            if page.len() + 1 >= page_lines {
                pages.push(std::mem::take(&mut page));
            } else {
                page.push(String::new());
            }
        }

        for line in block {
            if page.len() >= page_lines {
                pages.push(std::mem::take(&mut page));
            }
            page.push(line);
        }
    }
    pages.push(page);
    ExportDocument {
        title: EXPORT_TITLE.to_string(),
        pages,
    }
}

/// Word-wrap `text` to `cols` columns. Paragraph breaks are preserved as
/// line breaks; a paragraph without words becomes an empty line; tokens
/// wider than a full line are hard-split.
pub fn wrap(text: &str, cols: usize) -> Vec<String> {
    debug_assert!(cols > 0);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0usize;
        let mut wrote = false;
        for word in paragraph.split_whitespace() {
            let mut rest: Vec<char> = word.chars().collect();
            while rest.len() > cols {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                lines.push(rest[..cols].iter().collect());
                rest.drain(..cols);
                wrote = true;
            }
            if rest.is_empty() {
                continue;
            }
            let word_len = rest.len();
            if current_len > 0 && current_len + 1 + word_len > cols {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(rest.iter());
            current_len += word_len;
            wrote = true;
        }
        if current_len > 0 {
            lines.push(current);
        } else if !wrote {
            lines.push(String::new());
        }
    }
    lines
}
