//! Minimal PDF writer for conversation exports.
//!
//! Serializes a laid-out [`ExportDocument`] as a single-font PDF 1.4
//! file: a catalog, a page tree, Helvetica, and one page plus content
//! stream per export page. Text is emitted as Latin-1; characters
//! outside that range degrade to '?'.

use lawease_core::export::ExportDocument;

// A4 portrait geometry, in points.
const MARGIN_X: u32 = 40;
const TITLE_Y: u32 = 800;
const TITLE_GAP: u32 = 28;
const BODY_TOP: u32 = 800;
const LEADING: u32 = 14;
const TITLE_SIZE: u32 = 14;
const BODY_SIZE: u32 = 11;

/// Render the export into PDF bytes.
pub fn render_pdf(doc: &ExportDocument) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::new();
    let mut offsets: Vec<usize> = Vec::new();

    out.extend_from_slice(b"%PDF-1.4\n");

    let page_count = doc.pages.len().max(1);
    // Object layout: 1 catalog, 2 page tree, 3 font, then a page object
    // and a content stream per page.
    let page_obj = |i: usize| 4 + 2 * i;
    let content_obj = |i: usize| 5 + 2 * i;

    let kids: Vec<String> = (0..page_count)
        .map(|i| format!("{} 0 R", page_obj(i)))
        .collect();

    push_obj(
        &mut out,
        &mut offsets,
        1,
        "<< /Type /Catalog /Pages 2 0 R >>",
    );
    push_obj(
        &mut out,
        &mut offsets,
        2,
        &format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            page_count
        ),
    );
    push_obj(
        &mut out,
        &mut offsets,
        3,
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>",
    );

    let no_lines: Vec<String> = Vec::new();
    for i in 0..page_count {
        let lines = doc.pages.get(i).unwrap_or(&no_lines);
        let content = page_content(doc, i, lines);
        push_obj(
            &mut out,
            &mut offsets,
            page_obj(i),
            &format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 595 842] \
                 /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                content_obj(i)
            ),
        );
        push_stream_obj(&mut out, &mut offsets, content_obj(i), &content);
    }

    let xref_offset = out.len();
    let total = offsets.len() + 1;
    out.extend(format!("xref\n0 {}\n", total).bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for off in &offsets {
        out.extend(format!("{:010} 00000 n \n", off).bytes());
    }
    out.extend(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            total, xref_offset
        )
        .bytes(),
    );
    out
}

fn push_obj(out: &mut Vec<u8>, offsets: &mut Vec<usize>, num: usize, body: &str) {
    debug_assert_eq!(num, offsets.len() + 1);
    offsets.push(out.len());
    out.extend(format!("{} 0 obj\n{}\nendobj\n", num, body).bytes());
}

fn push_stream_obj(out: &mut Vec<u8>, offsets: &mut Vec<usize>, num: usize, content: &[u8]) {
    debug_assert_eq!(num, offsets.len() + 1);
    offsets.push(out.len());
    out.extend(format!("{} 0 obj\n<< /Length {} >>\nstream\n", num, content.len()).bytes());
    out.extend_from_slice(content);
    out.extend_from_slice(b"\nendstream\nendobj\n");
}

/// Content stream for one page: the title block on the first page, then
/// the laid-out lines at a fixed leading. Blank lines advance the
/// cursor without drawing.
fn page_content(doc: &ExportDocument, page: usize, lines: &[String]) -> Vec<u8> {
    let mut content = Vec::new();
    content.extend_from_slice(b"BT\n");

    if page == 0 {
        content.extend(format!("/F1 {} Tf\n{} {} Td\n", TITLE_SIZE, MARGIN_X, TITLE_Y).bytes());
        content.extend_from_slice(b"(");
        content.extend(escape_text(&doc.title));
        content.extend_from_slice(b") Tj\n");
        content.extend(format!("/F1 {} Tf\n{} TL\n0 -{} Td\n", BODY_SIZE, LEADING, TITLE_GAP).bytes());
    } else {
        content.extend(
            format!("/F1 {} Tf\n{} TL\n{} {} Td\n", BODY_SIZE, LEADING, MARGIN_X, BODY_TOP).bytes(),
        );
    }

    let mut first = true;
    for line in lines {
        if !first {
            content.extend_from_slice(b"T*\n");
        }
        first = false;
        if line.is_empty() {
            continue;
        }
        content.extend_from_slice(b"(");
        content.extend(escape_text(line));
        content.extend_from_slice(b") Tj\n");
    }

    content.extend_from_slice(b"ET");
    content
}

/// Escape a text line for a PDF literal string. Parentheses and
/// backslashes are escaped, control characters become spaces, and
/// anything beyond Latin-1 becomes '?'.
fn escape_text(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push(b'\\');
                out.push(c as u8);
            }
            c if (c as u32) < 0x20 => out.push(b' '),
            c if (c as u32) <= 0xFF => out.push(c as u8),
            _ => out.push(b'?'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lawease_core::export::paginate;
    use lawease_types::message::Message;

    fn as_text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    #[test]
    fn test_pdf_header_and_trailer() {
        let bytes = render_pdf(&paginate(&[]));
        let text = as_text(&bytes);
        assert!(text.starts_with("%PDF-1.4"));
        assert!(text.ends_with("%%EOF\n"));
    }

    #[test]
    fn test_pdf_empty_export_has_one_page() {
        let bytes = render_pdf(&paginate(&[]));
        let text = as_text(&bytes);
        assert!(text.contains("/Count 1"));
        assert!(text.contains("(LawEase Conversation) Tj"));
    }

    #[test]
    fn test_pdf_page_count_matches_layout() {
        let long_text = "word ".repeat(4000);
        let doc = paginate(&[Message::bot(1, long_text)]);
        assert!(doc.page_count() >= 2);

        let text = as_text(&render_pdf(&doc));
        assert!(text.contains(&format!("/Count {}", doc.page_count())));
    }

    #[test]
    fn test_pdf_contains_message_lines() {
        let doc = paginate(&[Message::user(1, "Is a verbal contract binding?")]);
        let text = as_text(&render_pdf(&doc));
        assert!(text.contains("(User: Is a verbal contract binding?) Tj"));
    }

    #[test]
    fn test_pdf_startxref_points_at_xref() {
        let bytes = render_pdf(&paginate(&[Message::user(1, "q")]));
        let text = as_text(&bytes);
        let start = text
            .rsplit("startxref\n")
            .next()
            .and_then(|tail| tail.lines().next())
            .and_then(|n| n.parse::<usize>().ok())
            .unwrap();
        assert_eq!(&bytes[start..start + 4], b"xref");
    }

    #[test]
    fn test_escape_text_specials() {
        assert_eq!(escape_text(r"a(b)c\d"), b"a\\(b\\)c\\\\d".to_vec());
        assert_eq!(escape_text("tab\there"), b"tab here".to_vec());
        assert_eq!(escape_text("caf\u{e9}"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(escape_text("\u{0b95}"), b"?".to_vec());
    }
}
