//! Data models for a Slack workspace export.
//!
//! - [`Room`] - Unified channel record written to `channels.json`
//! - [`Message`] - One history message, carried through unmodified
//! - [`User`] - Workspace member written to `users.json`
//! - [`HistoryPage`] / [`DayBatch`] - Pagination and partitioning units
//!
//! Payload fields the exporter does not interpret are kept in flattened JSON maps so that
//! whatever the API returned is written back out as-is.

pub mod message;
pub mod room;
pub mod user;

pub use message::{DayBatch, HistoryPage, Message};
pub use room::{Room, RoomText};
pub use user::User;
