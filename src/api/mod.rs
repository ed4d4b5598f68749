//! Slack Web API access
//!
//! The exporter only talks to Slack through the [`SlackApi`] trait. [`HttpSlackApi`] is the
//! real client; tests drive the pipeline with in-memory fakes.

pub mod client;
pub mod types;

pub use client::HttpSlackApi;
pub use types::{PrivateRoom, PublicRoom};

use crate::error::ApiError;
use crate::models::{HistoryPage, User};

/// Page size requested from the history endpoint
pub const HISTORY_PAGE_SIZE: usize = 1000;

/// Which history variant a room is fetched through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomKind {
    Public,
    Private,
}

impl RoomKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RoomKind::Public => "channel",
            RoomKind::Private => "group",
        }
    }
}

/// Parameters of one history request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub count: usize,
    /// Exclusive upper bound; `None` asks for the newest messages
    pub latest: Option<String>,
}

impl Default for HistoryRequest {
    fn default() -> Self {
        Self { count: HISTORY_PAGE_SIZE, latest: None }
    }
}

pub trait SlackApi {
    /// Verify the token before any fetching starts
    fn auth_test(&self) -> Result<(), ApiError>;

    fn list_users(&self) -> Result<Vec<User>, ApiError>;

    fn list_rooms(&self, exclude_archived: bool) -> Result<Vec<PublicRoom>, ApiError>;

    fn list_private_rooms(&self, exclude_archived: bool) -> Result<Vec<PrivateRoom>, ApiError>;

    fn fetch_history(
        &self,
        kind: RoomKind,
        room_id: &str,
        request: &HistoryRequest,
    ) -> Result<HistoryPage, ApiError>;
}
