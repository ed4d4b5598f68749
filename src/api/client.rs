use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{
    ConversationsListResponse, Envelope, HistoryResponse, PrivateRoom, PublicRoom,
    UsersListResponse,
};
use super::{HistoryRequest, RoomKind, SlackApi};
use crate::error::ApiError;
use crate::models::{HistoryPage, User};

pub const DEFAULT_API_URL: &str = "https://slack.com/api";

const LIST_PAGE_SIZE: &str = "200";
const USER_AGENT: &str = concat!("slack-dump/", env!("CARGO_PKG_VERSION"));

/// Blocking Slack Web API client authenticated with a bearer token
pub struct HttpSlackApi {
    client: reqwest::blocking::Client,
    base_url: String,
    token: String,
}

impl HttpSlackApi {
    pub fn new(token: &str, base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| ApiError::Transport { method: "client", source })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn call<T: DeserializeOwned>(
        &self,
        method: &'static str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, method);
        debug!(method, "calling Slack API");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(params)
            .send()
            .map_err(|source| ApiError::Transport { method, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { method, status: status.as_u16() });
        }

        let body = response.text().map_err(|source| ApiError::Transport { method, source })?;
        decode_response(method, &body)
    }

    fn list_conversations<T: DeserializeOwned>(
        &self,
        types: &str,
        exclude_archived: bool,
    ) -> Result<Vec<T>, ApiError> {
        let mut rooms = Vec::new();
        let mut cursor = String::new();

        loop {
            let mut params = vec![
                ("types", types.to_string()),
                ("exclude_archived", exclude_archived.to_string()),
                ("limit", LIST_PAGE_SIZE.to_string()),
            ];
            if !cursor.is_empty() {
                params.push(("cursor", cursor.clone()));
            }

            let page: ConversationsListResponse<T> = self.call("conversations.list", &params)?;
            rooms.extend(page.channels);

            cursor = page.response_metadata.next_cursor;
            if cursor.is_empty() {
                break;
            }
        }

        Ok(rooms)
    }
}

impl SlackApi for HttpSlackApi {
    fn auth_test(&self) -> Result<(), ApiError> {
        self.call::<Envelope>("auth.test", &[]).map(|_| ())
    }

    fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let mut users = Vec::new();
        let mut cursor = String::new();

        loop {
            let mut params = vec![("limit", LIST_PAGE_SIZE.to_string())];
            if !cursor.is_empty() {
                params.push(("cursor", cursor.clone()));
            }

            let page: UsersListResponse = self.call("users.list", &params)?;
            users.extend(page.members);

            cursor = page.response_metadata.next_cursor;
            if cursor.is_empty() {
                break;
            }
        }

        Ok(users)
    }

    fn list_rooms(&self, exclude_archived: bool) -> Result<Vec<PublicRoom>, ApiError> {
        self.list_conversations("public_channel", exclude_archived)
    }

    fn list_private_rooms(&self, exclude_archived: bool) -> Result<Vec<PrivateRoom>, ApiError> {
        self.list_conversations("private_channel", exclude_archived)
    }

    fn fetch_history(
        &self,
        kind: RoomKind,
        room_id: &str,
        request: &HistoryRequest,
    ) -> Result<HistoryPage, ApiError> {
        debug!(room_id, kind = kind.as_str(), latest = ?request.latest, "fetching history page");

        let mut params = vec![
            ("channel", room_id.to_string()),
            ("limit", request.count.to_string()),
            ("inclusive", "false".to_string()),
        ];
        if let Some(latest) = &request.latest {
            params.push(("latest", latest.clone()));
        }

        let response: HistoryResponse = self.call("conversations.history", &params)?;
        Ok(HistoryPage { messages: response.messages, has_more: response.has_more })
    }
}

/// Check the `ok` flag of a Slack response, then decode the method-specific body
pub(crate) fn decode_response<T: DeserializeOwned>(
    method: &'static str,
    body: &str,
) -> Result<T, ApiError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|source| ApiError::Decode { method, source })?;
    if !envelope.ok {
        let error = envelope.error.unwrap_or_else(|| "unknown_error".to_string());
        return Err(ApiError::Slack { method, error });
    }

    serde_json::from_str(body).map_err(|source| ApiError::Decode { method, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_slack_error() {
        let err = decode_response::<Envelope>("auth.test", r#"{"ok":false,"error":"invalid_auth"}"#)
            .unwrap_err();
        match err {
            ApiError::Slack { method, error } => {
                assert_eq!(method, "auth.test");
                assert_eq!(error, "invalid_auth");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_error_without_message() {
        let err = decode_response::<Envelope>("users.list", r#"{"ok":false}"#).unwrap_err();
        assert_eq!(err.to_string(), "users.list returned error: unknown_error");
    }

    #[test]
    fn test_decode_malformed_body() {
        let err = decode_response::<Envelope>("users.list", "<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode { method: "users.list", .. }));
    }

    #[test]
    fn test_decode_history_page() {
        let body = r#"{
            "ok": true,
            "messages": [
                {"type": "message", "user": "U1", "text": "newer", "ts": "1512104434.000490"},
                {"type": "message", "user": "U2", "text": "older", "ts": "1512085950.000216"}
            ],
            "has_more": true
        }"#;
        let response: HistoryResponse = decode_response("conversations.history", body).unwrap();
        assert_eq!(response.messages.len(), 2);
        assert!(response.has_more);
        assert_eq!(response.messages[1].ts(), "1512085950.000216");
    }

    #[test]
    fn test_decode_history_message_without_ts() {
        let body = r#"{"ok":true,"messages":[{"type":"message","text":"a","ts":"1.0"},{"type":"message","subtype":"tombstone","text":"b"}],"has_more":false}"#;
        let response: HistoryResponse = decode_response("conversations.history", body).unwrap();
        assert_eq!(response.messages.len(), 2);
        assert_eq!(response.messages[1].ts(), "");
        assert!(!response.messages[1].fields().contains_key("ts"));
    }

    #[test]
    fn test_decode_rooms_list() {
        let body = r#"{
            "ok": true,
            "channels": [{"id": "C1", "name": "general", "is_channel": true, "is_general": true}],
            "response_metadata": {"next_cursor": ""}
        }"#;
        let response: ConversationsListResponse<PublicRoom> =
            decode_response("conversations.list", body).unwrap();
        assert_eq!(response.channels.len(), 1);
        assert!(response.channels[0].is_general);
        assert!(response.response_metadata.next_cursor.is_empty());
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let api = HttpSlackApi::new("xoxb-test", "http://localhost:1234/api/", Duration::from_secs(1))
            .unwrap();
        assert_eq!(api.base_url, "http://localhost:1234/api");
    }
}
