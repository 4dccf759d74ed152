use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatPeer {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

/// The chat list serializes `last_message` in three shapes: an object
/// carrying `content`, a bare string, or null.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LastMessage {
    Object { content: String },
    Text(String),
}

impl LastMessage {
    pub fn content(&self) -> &str {
        match self {
            LastMessage::Object { content } => content,
            LastMessage::Text(content) => content,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub other_user: ChatPeer,
    #[serde(default)]
    pub last_message: Option<LastMessage>,
    #[serde(default)]
    pub last_message_time: Option<String>,
    #[serde(default)]
    pub unread_count: i64,
    #[serde(default)]
    pub last_message_sender_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub sender: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /chats/{id}/messages`.
#[derive(Debug, Clone, Serialize)]
pub struct NewMessage {
    pub content: String,
}

/// Body of `POST /chats/start`.
#[derive(Debug, Clone, Serialize)]
pub struct StartChat {
    pub user_id: i64,
}
