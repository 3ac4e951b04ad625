use serde::{Deserialize, Serialize};

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single message in the active conversation.
///
/// `id` is a millisecond timestamp. It is not globally unique; within a
/// session ids are monotonically non-decreasing and ties are broken by
/// array position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub from: Sender,
    pub text: String,
}

impl Message {
    pub fn new(id: i64, from: Sender, text: impl Into<String>) -> Self {
        Self {
            id,
            from,
            text: text.into(),
        }
    }

    pub fn user(id: i64, text: impl Into<String>) -> Self {
        Self::new(id, Sender::User, text)
    }

    pub fn bot(id: i64, text: impl Into<String>) -> Self {
        Self::new(id, Sender::Bot, text)
    }

    pub fn is_user(&self) -> bool {
        self.from == Sender::User
    }
}
