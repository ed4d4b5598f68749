use std::mem;

use anyhow::Result;
use chrono::{Local, TimeZone};
use tracing::warn;

use crate::models::{DayBatch, Message};
use crate::parsers::{day_key, parse_timestamp_in};

/// Day key for messages whose `ts` is empty or malformed
pub const UNKNOWN_DAY: &str = "unknown";

/// Split an ordered message stream into per-day batches using the local time zone
pub fn partition_by_day(room: &str, messages: Vec<Message>) -> Vec<DayBatch> {
    partition_by_day_in(room, messages, &Local)
}

/// Same as [`partition_by_day`] for an explicit time zone
pub fn partition_by_day_in<Tz: TimeZone>(
    room: &str,
    messages: Vec<Message>,
    tz: &Tz,
) -> Vec<DayBatch> {
    let mut batches = Vec::new();
    let result = for_each_day_batch(room, messages, tz, |batch| {
        batches.push(batch);
        Ok(())
    });
    debug_assert!(result.is_ok());
    batches
}

/// Walk `messages` once, handing each completed day to `emit` as soon as the day changes
///
/// Consecutive messages sharing a calendar day form one batch; a batch is emitted exactly
/// once and never empty. Returns the number of batches emitted. An error from `emit`
/// stops the walk.
pub fn for_each_day_batch<Tz, F>(
    room: &str,
    messages: Vec<Message>,
    tz: &Tz,
    mut emit: F,
) -> Result<usize>
where
    Tz: TimeZone,
    F: FnMut(DayBatch) -> Result<()>,
{
    let mut emitted = 0;
    let mut current_day = String::new();
    let mut current: Vec<Message> = Vec::new();

    for message in messages {
        let day = message_day(room, &message, tz);
        if day != current_day {
            if !current.is_empty() {
                emit(DayBatch {
                    room: room.to_string(),
                    day: mem::take(&mut current_day),
                    messages: mem::take(&mut current),
                })?;
                emitted += 1;
            }
            current_day = day;
        }
        current.push(message);
    }

    if !current.is_empty() {
        emit(DayBatch { room: room.to_string(), day: current_day, messages: current })?;
        emitted += 1;
    }

    Ok(emitted)
}

fn message_day<Tz: TimeZone>(room: &str, message: &Message, tz: &Tz) -> String {
    match parse_timestamp_in(message.ts(), tz) {
        Ok(Some(timestamp)) => day_key(&timestamp),
        Ok(None) => {
            warn!(room, "message without timestamp, filing under {}", UNKNOWN_DAY);
            UNKNOWN_DAY.to_string()
        }
        Err(e) => {
            warn!(room, error = %e, "unparseable timestamp, filing under {}", UNKNOWN_DAY);
            UNKNOWN_DAY.to_string()
        }
    }
}
