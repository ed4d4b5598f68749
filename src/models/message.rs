use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A history message kept as the exact object the API returned.
///
/// Every key, including `ts` and `user`, stays in `fields` in its original order and with its
/// original value, so writing the message back yields the same object. A missing or
/// non-string `ts` reads as the empty string and later lands on the unknown day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Message {
    ts: String,
    fields: Map<String, Value>,
}

impl Message {
    pub fn new(ts: impl Into<String>) -> Self {
        let ts = ts.into();
        let mut fields = Map::new();
        fields.insert("ts".to_string(), Value::String(ts.clone()));
        Self { ts, fields }
    }

    /// Raw `<seconds>.<fraction>` timestamp, never reformatted
    pub fn ts(&self) -> &str {
        &self.ts
    }

    /// Author id, when the message carries a string `user`
    pub fn user(&self) -> Option<&str> {
        self.fields.get("user").and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Sets a field, appending it when new. Setting `ts` also updates the sort key.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        if key == "ts" {
            self.ts = value.as_str().unwrap_or_default().to_string();
        }
        self.fields.insert(key, value)
    }
}

impl From<Map<String, Value>> for Message {
    fn from(fields: Map<String, Value>) -> Self {
        let ts = fields.get("ts").and_then(Value::as_str).unwrap_or_default().to_string();
        Self { ts, fields }
    }
}

impl From<Message> for Map<String, Value> {
    fn from(message: Message) -> Self {
        message.fields
    }
}

/// One response of a history fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryPage {
    pub messages: Vec<Message>,
    pub has_more: bool,
}

impl HistoryPage {
    /// Timestamp of the oldest message in the page, used as the next request's upper bound
    pub fn watermark(&self) -> Option<&str> {
        self.messages.iter().map(Message::ts).min()
    }
}

/// Messages of one room that fall on the same local calendar day
#[derive(Debug, Clone, PartialEq)]
pub struct DayBatch {
    pub room: String,
    /// `YYYY-MM-DD`, or the unknown-day sentinel
    pub day: String,
    pub messages: Vec<Message>,
}

impl DayBatch {
    pub fn file_name(&self) -> String {
        format!("{}.json", self.day)
    }
}
