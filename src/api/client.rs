//! Async HTTP client for the AI backend.

use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::api::error::ApiError;
use crate::api::types::{
    ChatReply, ChatRequest, ChatTurn, HealthReply, SynthesisEnvelope, SynthesisRequest,
    TranscriptionReply, VisionReply, VisionRequest,
};
use crate::config::BackendConfig;

const CHAT_ENDPOINT: &str = "/api/llm";
const VISION_ENDPOINT: &str = "/api/vlm";
const TRANSCRIBE_ENDPOINT: &str = "/api/whisper";
const SYNTHESIZE_ENDPOINT: &str = "/api/tts";
const HEALTH_ENDPOINT: &str = "/health";

/// Thin wrapper over one backend base URL.
///
/// Cheap to clone; clones share the underlying connection pool, so the UI
/// can hand a copy to every spawned request task.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &BackendConfig) -> Self {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .expect("Failed to build backend client");

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Chat completion: the visitor's message plus prior turns for context.
    pub async fn chat(&self, message: String, history: Vec<ChatTurn>) -> Result<String, ApiError> {
        let request = ChatRequest { message, history };
        let response = self
            .http
            .post(self.url(CHAT_ENDPOINT))
            .json(&request)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: CHAT_ENDPOINT,
                source,
            })?;

        let reply: ChatReply = Self::decode_json(CHAT_ENDPOINT, response).await?;
        Ok(reply.response)
    }

    /// Image analysis over base64-encoded image bytes.
    pub async fn analyze_image(
        &self,
        image_base64: String,
        prompt: String,
    ) -> Result<String, ApiError> {
        let request = VisionRequest {
            image_base64,
            prompt,
        };
        let response = self
            .http
            .post(self.url(VISION_ENDPOINT))
            .json(&request)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: VISION_ENDPOINT,
                source,
            })?;

        let reply: VisionReply = Self::decode_json(VISION_ENDPOINT, response).await?;
        Ok(reply.response)
    }

    /// Speech transcription: audio bytes uploaded as a multipart form.
    pub async fn transcribe(
        &self,
        audio: Vec<u8>,
        filename: String,
    ) -> Result<TranscriptionReply, ApiError> {
        let form = Form::new().part("audio", Part::bytes(audio).file_name(filename));
        let response = self
            .http
            .post(self.url(TRANSCRIBE_ENDPOINT))
            .multipart(form)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: TRANSCRIBE_ENDPOINT,
                source,
            })?;

        Self::decode_json(TRANSCRIBE_ENDPOINT, response).await
    }

    /// Speech synthesis. The backend replies either with raw audio bytes or
    /// with a JSON envelope carrying base64 audio; both are handled here so
    /// callers always receive plain bytes.
    pub async fn synthesize(
        &self,
        text: String,
        voice: String,
        speed: f32,
    ) -> Result<Vec<u8>, ApiError> {
        let request = SynthesisRequest { text, voice, speed };
        let response = self
            .http
            .post(self.url(SYNTHESIZE_ENDPOINT))
            .json(&request)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: SYNTHESIZE_ENDPOINT,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: SYNTHESIZE_ENDPOINT,
                status: status.as_u16(),
            });
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));

        if is_json {
            let envelope: SynthesisEnvelope =
                response
                    .json()
                    .await
                    .map_err(|err| ApiError::Decode {
                        endpoint: SYNTHESIZE_ENDPOINT,
                        reason: err.to_string(),
                    })?;
            BASE64
                .decode(envelope.audio_base64)
                .map_err(|err| ApiError::Decode {
                    endpoint: SYNTHESIZE_ENDPOINT,
                    reason: err.to_string(),
                })
        } else {
            let bytes = response.bytes().await.map_err(|source| ApiError::Transport {
                endpoint: SYNTHESIZE_ENDPOINT,
                source,
            })?;
            Ok(bytes.to_vec())
        }
    }

    /// Liveness probe, shown on the welcome screen.
    pub async fn health(&self) -> Result<HealthReply, ApiError> {
        let response = self
            .http
            .get(self.url(HEALTH_ENDPOINT))
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: HEALTH_ENDPOINT,
                source,
            })?;

        Self::decode_json(HEALTH_ENDPOINT, response).await
    }

    async fn decode_json<T: serde::de::DeserializeOwned>(
        endpoint: &'static str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(|err| ApiError::Decode {
            endpoint,
            reason: err.to_string(),
        })
    }
}
