use serde::{Deserialize, Serialize};
use solace_core::{EmotionReading, Intent};

/// Body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub user_id: String,
    #[serde(default)]
    pub message: String,
}

/// Body of `POST /classify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub message: String,
}

/// Classifier output without touching any session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub emotion: EmotionReading,
    pub intent: Intent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use solace_core::{EmotionKind, Level};

    #[test]
    fn test_chat_request_uses_camel_case() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"userId":"alice","message":"hi"}"#).unwrap();
        assert_eq!(req.user_id, "alice");
        assert_eq!(req.message, "hi");
    }

    #[test]
    fn test_chat_request_message_defaults_to_empty() {
        let req: ChatRequest = serde_json::from_str(r#"{"userId":"bob"}"#).unwrap();
        assert!(req.message.is_empty());
    }

    #[test]
    fn test_classify_response_shape() {
        let resp = ClassifyResponse {
            emotion: EmotionReading::new(EmotionKind::BingeUrge, Level::High),
            intent: Intent::Video,
        };
        let json = serde_json::to_value(resp).unwrap();
        assert_eq!(json["emotion"]["type"], "binge_urge");
        assert_eq!(json["emotion"]["level"], "high");
        assert_eq!(json["intent"], "video");
    }
}
