//! Wire types for the four capability endpoints.
//!
//! These mirror the backend's logical contract; exact paths live in the
//! client. Response structs are permissive about optional fields so older
//! backend revisions keep working.

use serde::{Deserialize, Serialize};

/// One prior turn of the chat conversation, as the backend expects it.
#[derive(Debug, Clone, Serialize)]
pub struct ChatTurn {
    /// `"user"` or `"assistant"`.
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Deserialize)]
pub struct ChatReply {
    /// Some backend revisions used `message` for the same field.
    #[serde(alias = "message")]
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct VisionRequest {
    /// Base64 of the raw image bytes, without a data-URI prefix.
    pub image_base64: String,
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct VisionReply {
    pub response: String,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptionReply {
    pub text: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub confidence: Option<f32>,
}

#[derive(Debug, Serialize)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice: String,
    pub speed: f32,
}

/// JSON envelope some backend revisions use instead of a raw audio body.
#[derive(Debug, Deserialize)]
pub struct SynthesisEnvelope {
    pub audio_base64: String,
}

#[derive(Debug, Deserialize)]
pub struct HealthReply {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_serializes_roles_in_order() {
        let request = ChatRequest {
            message: "hello".to_string(),
            history: vec![
                ChatTurn {
                    role: "user",
                    content: "hi".to_string(),
                },
                ChatTurn {
                    role: "assistant",
                    content: "hello there".to_string(),
                },
            ],
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["message"], "hello");
        assert_eq!(json["history"][0]["role"], "user");
        assert_eq!(json["history"][1]["role"], "assistant");
    }

    #[test]
    fn chat_reply_accepts_the_message_alias() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"message": "aliased"}"#).expect("deserialize");
        assert_eq!(reply.response, "aliased");
        let reply: ChatReply =
            serde_json::from_str(r#"{"response": "plain"}"#).expect("deserialize");
        assert_eq!(reply.response, "plain");
    }

    #[test]
    fn transcription_reply_tolerates_missing_optionals() {
        let reply: TranscriptionReply =
            serde_json::from_str(r#"{"text": "hello world"}"#).expect("deserialize");
        assert_eq!(reply.text, "hello world");
        assert!(reply.language.is_none());
        assert!(reply.confidence.is_none());
    }

    #[test]
    fn synthesis_envelope_decodes() {
        let envelope: SynthesisEnvelope =
            serde_json::from_str(r#"{"audio_base64": "UklGRg=="}"#).expect("deserialize");
        assert_eq!(envelope.audio_base64, "UklGRg==");
    }
}
