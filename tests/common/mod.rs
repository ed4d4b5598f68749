//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value, json};
use slack_dump::api::{HistoryRequest, PrivateRoom, PublicRoom, RoomKind, SlackApi};
use slack_dump::error::ApiError;
use slack_dump::models::{HistoryPage, Message, User};

/// One history call as seen by the fake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryCall {
    pub kind: RoomKind,
    pub room_id: String,
    pub latest: Option<String>,
}

enum RoomHistory {
    /// Served like the real API: newest first, bounded by `latest`
    Stored(Vec<Message>),
    /// Canned pages returned in order regardless of the request
    Scripted(Vec<HistoryPage>),
    Failing(String),
}

/// In-memory [`SlackApi`] built up fluently
pub struct FakeSlackApi {
    auth_error: Option<String>,
    users: Vec<User>,
    public: Vec<PublicRoom>,
    private: Vec<PrivateRoom>,
    histories: HashMap<String, RoomHistory>,
    page_size: Option<usize>,
    calls: RefCell<Vec<HistoryCall>>,
    scripted_cursor: RefCell<HashMap<String, usize>>,
}

impl FakeSlackApi {
    pub fn new() -> Self {
        Self {
            auth_error: None,
            users: Vec::new(),
            public: Vec::new(),
            private: Vec::new(),
            histories: HashMap::new(),
            page_size: None,
            calls: RefCell::new(Vec::new()),
            scripted_cursor: RefCell::new(HashMap::new()),
        }
    }

    /// Make `auth.test` fail with the given Slack error
    pub fn with_auth_error(mut self, error: &str) -> Self {
        self.auth_error = Some(error.to_string());
        self
    }

    pub fn with_user(mut self, id: &str, name: &str) -> Self {
        self.users.push(user(id, name));
        self
    }

    /// Cap pages below the requested count to force pagination
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_channel(mut self, id: &str, name: &str, messages: Vec<Message>) -> Self {
        self.public.push(public_room(id, name));
        self.histories.insert(id.to_string(), RoomHistory::Stored(messages));
        self
    }

    pub fn with_group(mut self, id: &str, name: &str, messages: Vec<Message>) -> Self {
        self.private.push(private_room(id, name));
        self.histories.insert(id.to_string(), RoomHistory::Stored(messages));
        self
    }

    pub fn with_scripted_channel(mut self, id: &str, name: &str, pages: Vec<HistoryPage>) -> Self {
        self.public.push(public_room(id, name));
        self.histories.insert(id.to_string(), RoomHistory::Scripted(pages));
        self
    }

    pub fn with_failing_channel(mut self, id: &str, name: &str, error: &str) -> Self {
        self.public.push(public_room(id, name));
        self.histories.insert(id.to_string(), RoomHistory::Failing(error.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<HistoryCall> {
        self.calls.borrow().clone()
    }

    pub fn calls_for(&self, room_id: &str) -> Vec<HistoryCall> {
        self.calls.borrow().iter().filter(|c| c.room_id == room_id).cloned().collect()
    }

    fn serve_stored(&self, messages: &[Message], request: &HistoryRequest) -> HistoryPage {
        let mut older: Vec<&Message> = messages
            .iter()
            .filter(|m| request.latest.as_deref().is_none_or(|latest| m.ts() < latest))
            .collect();
        older.sort_by(|a, b| b.ts().cmp(a.ts()));

        let limit = self.page_size.map_or(request.count, |size| size.min(request.count));
        let has_more = older.len() > limit;
        HistoryPage { messages: older.into_iter().take(limit).cloned().collect(), has_more }
    }
}

impl Default for FakeSlackApi {
    fn default() -> Self {
        Self::new()
    }
}

impl SlackApi for FakeSlackApi {
    fn auth_test(&self) -> Result<(), ApiError> {
        match &self.auth_error {
            Some(error) => Err(ApiError::Slack { method: "auth.test", error: error.clone() }),
            None => Ok(()),
        }
    }

    fn list_users(&self) -> Result<Vec<User>, ApiError> {
        Ok(self.users.clone())
    }

    fn list_rooms(&self, _exclude_archived: bool) -> Result<Vec<PublicRoom>, ApiError> {
        Ok(self.public.clone())
    }

    fn list_private_rooms(&self, _exclude_archived: bool) -> Result<Vec<PrivateRoom>, ApiError> {
        Ok(self.private.clone())
    }

    fn fetch_history(
        &self,
        kind: RoomKind,
        room_id: &str,
        request: &HistoryRequest,
    ) -> Result<HistoryPage, ApiError> {
        self.calls.borrow_mut().push(HistoryCall {
            kind,
            room_id: room_id.to_string(),
            latest: request.latest.clone(),
        });

        match self.histories.get(room_id) {
            None => Err(ApiError::Slack {
                method: "conversations.history",
                error: "channel_not_found".to_string(),
            }),
            Some(RoomHistory::Stored(messages)) => Ok(self.serve_stored(messages, request)),
            Some(RoomHistory::Scripted(pages)) => {
                let mut cursor = self.scripted_cursor.borrow_mut();
                let index = cursor.entry(room_id.to_string()).or_insert(0);
                let page = pages.get(*index).cloned().unwrap_or_default();
                *index += 1;
                Ok(page)
            }
            Some(RoomHistory::Failing(error)) => Err(ApiError::Slack {
                method: "conversations.history",
                error: error.clone(),
            }),
        }
    }
}

pub fn user(id: &str, name: &str) -> User {
    let mut payload = Map::new();
    payload.insert("real_name".to_string(), json!(format!("{} Example", name)));
    payload.insert("profile".to_string(), json!({"image_24": "https://example.com/a.png"}));
    User { id: id.to_string(), name: name.to_string(), payload }
}

pub fn public_room(id: &str, name: &str) -> PublicRoom {
    PublicRoom {
        id: id.to_string(),
        name: name.to_string(),
        is_channel: true,
        is_general: name == "general",
        is_member: true,
        ..Default::default()
    }
}

pub fn private_room(id: &str, name: &str) -> PrivateRoom {
    serde_json::from_value(json!({"id": id, "name": name, "is_group": true}))
        .expect("valid private room")
}

/// A plain user message
pub fn message(ts: &str, text: &str) -> Message {
    let mut message = Message::new(ts);
    message.insert("type", json!("message"));
    message.insert("user", json!("U0001"));
    message.insert("text", json!(text));
    message
}

/// `count` messages one minute apart starting at `start`
pub fn minute_messages(start: i64, count: usize) -> Vec<Message> {
    (0..count)
        .map(|i| message(&format!("{}.{:06}", start + 60 * i as i64, i), &format!("message {}", i)))
        .collect()
}

pub fn read_json(path: &Path) -> Value {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    serde_json::from_str(&content).expect("valid JSON")
}

/// Texts of the messages stored in a day file
pub fn day_texts(path: &Path) -> Vec<String> {
    read_json(path)
        .as_array()
        .expect("day file is an array")
        .iter()
        .map(|m| m["text"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// Sorted file names inside a directory
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("readable dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
