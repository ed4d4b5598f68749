use crate::models::Message;

/// Sort messages oldest first by their raw `ts` string
///
/// Plain string comparison is enough because every `ts` within a workspace has the same
/// number of integer digits. The sort is stable, so messages sharing a `ts` keep the order
/// they were fetched in.
pub fn order_history(mut messages: Vec<Message>) -> Vec<Message> {
    messages.sort_by(|a, b| a.ts().cmp(b.ts()));
    messages
}
