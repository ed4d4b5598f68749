//! History retrieval and partitioning pipeline
//!
//! For each room the exporter runs three stages in sequence:
//!
//! 1. [`pagination`] - walk `conversations.history` from newest to oldest until the API
//!    reports no further pages, concatenating every page
//! 2. [`ordering`] - stable sort of the merged messages by raw `ts`, oldest first
//! 3. [`partition`] - split the ordered stream into one [`DayBatch`](crate::models::DayBatch)
//!    per local calendar day
//!
//! Each stage is a plain function over owned data so a room's full history is the only
//! thing held in memory at a time.

pub mod ordering;
pub mod pagination;
pub mod partition;

pub use ordering::order_history;
pub use pagination::fetch_all_pages;
pub use partition::{UNKNOWN_DAY, for_each_day_batch, partition_by_day, partition_by_day_in};
