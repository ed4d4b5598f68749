use serde::{Deserialize, Serialize};

use super::message::Message;

/// Topic or purpose text block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomText {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub last_set: i64,
}

/// Channel record as it appears in `channels.json`
///
/// Both public channels and private groups end up in this shape, see
/// [`crate::rooms::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Room {
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_read: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest: Option<Message>,
    #[serde(default)]
    pub unread_count: i64,
    #[serde(default)]
    pub unread_count_display: i64,
}
