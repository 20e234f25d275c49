use chrono::NaiveDate;
use serde::Deserialize;

/// Tag that replaces the sender name at the start of every message body.
pub const MESSAGE_TAG: &str = "MESSAGE: ";

/// One parsed transcript entry: the local calendar date it was sent on and its
/// cleaned body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub date: NaiveDate,
    pub body: String,
}

impl Message {
    #[must_use]
    pub fn new(date: NaiveDate, body: impl Into<String>) -> Self {
        Self {
            date,
            body: body.into(),
        }
    }
}

/// What to do with a message body that has no `": "` sender separator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderFallback {
    /// Keep the whole body behind the tag.
    #[default]
    Passthrough,
    /// Drop the first two characters of the body, as older exports expect.
    Offset,
}
