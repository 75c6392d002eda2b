use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One message in the user-center chat room.
///
/// No delivery semantics are attached to this type: the console appends
/// messages locally and never guarantees ordering across clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub author: String,
    pub content: String,
    #[serde(rename = "sentAt")]
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(author: impl Into<String>, content: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: author.into(),
            content: content.into(),
            sent_at,
        }
    }
}
