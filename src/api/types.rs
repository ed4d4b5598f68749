//! Wire shapes of Slack API responses

use serde::Deserialize;

use crate::models::{Message, RoomText, User};

/// Fields every Slack response carries
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMetadata {
    #[serde(default)]
    pub next_cursor: String,
}

/// Public channel as listed by the API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PublicRoom {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub is_channel: bool,
    #[serde(default)]
    pub is_general: bool,
    #[serde(default)]
    pub is_member: bool,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub num_members: i64,
    #[serde(default)]
    pub topic: RoomText,
    #[serde(default)]
    pub purpose: RoomText,
    #[serde(default)]
    pub last_read: Option<String>,
    #[serde(default)]
    pub latest: Option<Message>,
    #[serde(default)]
    pub unread_count: i64,
    #[serde(default)]
    pub unread_count_display: i64,
}

/// Private group as listed by the API
///
/// Groups are only ever listed for members, so membership defaults to true.
#[derive(Debug, Clone, Deserialize)]
pub struct PrivateRoom {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub is_group: bool,
    #[serde(default = "default_true")]
    pub is_member: bool,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub num_members: i64,
    #[serde(default)]
    pub topic: RoomText,
    #[serde(default)]
    pub purpose: RoomText,
    #[serde(default)]
    pub last_read: Option<String>,
    #[serde(default)]
    pub latest: Option<Message>,
    #[serde(default)]
    pub unread_count: i64,
    #[serde(default)]
    pub unread_count_display: i64,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct UsersListResponse {
    #[serde(default)]
    pub members: Vec<User>,
    #[serde(default)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Deserialize)]
pub struct ConversationsListResponse<T> {
    #[serde(default = "Vec::new")]
    pub channels: Vec<T>,
    #[serde(default)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub has_more: bool,
}
