use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::api::HistoryRequest;
use crate::models::{HistoryPage, Message};

/// Fetch a room's complete history by walking pages from newest to oldest
///
/// `fetch` is called with the first request unbounded, then with `latest` set to the oldest
/// `ts` of the previous page. Paging stops when a page reports `has_more == false` or comes
/// back empty; an empty page with `has_more` set is treated as the end rather than an error.
///
/// Messages are returned in the order the pages arrived (newest page first); callers sort
/// them with [`crate::history::order_history`].
///
/// # Errors
///
/// Any error from `fetch` aborts the room immediately. Nothing is retried.
pub fn fetch_all_pages<F>(room_id: &str, mut fetch: F) -> Result<Vec<Message>>
where
    F: FnMut(&HistoryRequest) -> Result<HistoryPage>,
{
    let mut request = HistoryRequest::default();
    let first = fetch(&request)
        .with_context(|| format!("Failed to fetch history for room {}", room_id))?;

    // A room without history has no watermark to continue from
    let Some(mut watermark) = first.watermark().map(str::to_owned) else {
        debug!(room_id, "room has no history");
        return Ok(Vec::new());
    };

    let mut has_more = first.has_more;
    let mut messages = first.messages;
    let mut pages = 1;

    while has_more {
        request.latest = Some(watermark);
        let page = fetch(&request)
            .with_context(|| format!("Failed to fetch history for room {}", room_id))?;
        pages += 1;

        let Some(next_watermark) = page.watermark().map(str::to_owned) else {
            warn!(room_id, pages, "empty history page reported has_more, stopping");
            break;
        };

        debug!(room_id, pages, count = page.messages.len(), "fetched history page");
        watermark = next_watermark;
        has_more = page.has_more;
        messages.extend(page.messages);
    }

    debug!(room_id, pages, total = messages.len(), "history complete");
    Ok(messages)
}
