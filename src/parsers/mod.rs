//! Parsers for values the Slack API hands back as strings
//!
//! # Error Handling Strategy
//!
//! Parsing is strict: a malformed value is an error for the caller to propagate, never a
//! silent default. The one tolerated case is the day partitioner, which maps an unparseable
//! timestamp to a sentinel day instead of aborting (see [`crate::history::partition`]).

pub mod timestamp;

pub use timestamp::{day_key, parse_timestamp, parse_timestamp_in};
