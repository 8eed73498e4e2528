use serde::{Deserialize, Serialize};

use crate::{
    geometry::BoundingBox,
    ids::{PlayerId, TownId},
};

/// Errors raised while talking to the towns service.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The request never completed or the body could not be read.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The service answered but turned the request down.
    #[error("towns service rejected the request: {0}")]
    Rejected(String),
}

/// Transfer form of one poll option. `voters` is the live in-memory order,
/// never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollOptionPayload {
    pub location: BoundingBox,
    pub text: String,
    pub voters: Vec<PlayerId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollPayload {
    pub prompt: String,
    pub location: BoundingBox,
    pub creator_id: PlayerId,
    pub options: Vec<PollOptionPayload>,
    /// Seconds; one of 60, 180 or 300.
    pub duration: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationAreaPayload {
    pub label: String,
    pub topic: Option<String>,
    pub occupants_by_id: Vec<PlayerId>,
    pub bounding_box: BoundingBox,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePollRequest {
    pub session_token: String,
    pub town_id: TownId,
    pub conversation_area: ConversationAreaPayload,
    pub poll: PollPayload,
}

// Every reply from the service comes wrapped in the same envelope.
#[derive(Debug, Clone, Deserialize)]
struct ResponseEnvelope {
    #[serde(rename = "isOK")]
    is_ok: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Thin async client for the towns service's poll endpoint.
#[derive(Debug, Clone)]
pub struct TownsServiceClient {
    http: reqwest::Client,
    base_url: String,
}

impl TownsServiceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        TownsServiceClient { http, base_url }
    }

    /// Asks the service to create the request's poll in its conversation
    /// area. One shot: no retry, and an in-flight request cannot be
    /// cancelled.
    pub async fn create_poll(&self, request: &CreatePollRequest) -> Result<(), ClientError> {
        let url = format!("{}/towns/{}/polls", self.base_url, request.town_id);
        tracing::debug!(town = %request.town_id, "submitting poll creation");

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Rejected(rejection_message(status, &body)));
        }

        let envelope: ResponseEnvelope = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(error) => {
                return Err(ClientError::Rejected(format!(
                    "unreadable response ({error})"
                )))
            }
        };
        if !envelope.is_ok {
            return Err(ClientError::Rejected(
                envelope
                    .message
                    .unwrap_or_else(|| "no reason given".to_owned()),
            ));
        }

        Ok(())
    }
}

fn rejection_message(status: reqwest::StatusCode, body: &str) -> String {
    // The service reports errors through its envelope when it can.
    serde_json::from_str::<ResponseEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .unwrap_or_else(|| format!("HTTP {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreatePollRequest {
        let bounds = BoundingBox::new(0.0, 0.0, 400.0, 200.0);
        CreatePollRequest {
            session_token: "token-123".to_owned(),
            town_id: TownId::from("town-1"),
            conversation_area: ConversationAreaPayload {
                label: "fountain".to_owned(),
                topic: Some("lunch plans".to_owned()),
                occupants_by_id: vec![PlayerId::from("p1")],
                bounding_box: bounds,
            },
            poll: PollPayload {
                prompt: "Where should we eat?".to_owned(),
                location: bounds,
                creator_id: PlayerId::from("host"),
                options: vec![PollOptionPayload {
                    location: bounds,
                    text: "Pizza".to_owned(),
                    voters: vec![],
                }],
                duration: 60,
            },
        }
    }

    #[test]
    fn request_uses_the_service_field_names() {
        let value = serde_json::to_value(request()).unwrap();

        assert_eq!(value["sessionToken"], "token-123");
        assert_eq!(value["townId"], "town-1");
        assert_eq!(value["conversationArea"]["occupantsById"], serde_json::json!(["p1"]));
        assert_eq!(value["poll"]["creatorId"], "host");
        assert_eq!(value["poll"]["duration"], 60);
        assert_eq!(value["poll"]["options"][0]["text"], "Pizza");
    }

    #[test]
    fn envelope_accepts_the_service_casing() {
        let envelope: ResponseEnvelope =
            serde_json::from_str(r#"{"isOK": false, "message": "session expired"}"#).unwrap();

        assert!(!envelope.is_ok);
        assert_eq!(envelope.message.as_deref(), Some("session expired"));
    }

    #[test]
    fn rejection_messages_prefer_the_envelope() {
        let status = reqwest::StatusCode::BAD_REQUEST;

        let from_envelope =
            rejection_message(status, r#"{"isOK": false, "message": "town not found"}"#);
        assert_eq!(from_envelope, "town not found");

        let from_status = rejection_message(status, "<html>nope</html>");
        assert_eq!(from_status, "HTTP 400 Bad Request");
    }
}
