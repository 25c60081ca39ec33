use std::env;
use std::sync::Arc;

use async_trait::async_trait;
use keepsake_core::model::WishRequest;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::WishGenError;

/// Shown when the call fails or the generator is not configured.
pub const FALLBACK_WISH: &str = "Happy Birthday! Wishing you all the best on your special day!";
/// Shown when the model answers with no text.
pub const EMPTY_RESPONSE_WISH: &str = "Happy Birthday! Wishing you a fantastic day!";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

#[derive(Clone, Debug)]
pub struct WishConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl WishConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("KEEPSAKE_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = env::var("KEEPSAKE_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let model = env::var("KEEPSAKE_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// A text-generation endpoint that turns a prompt into a wish.
#[async_trait]
pub trait WishBackend: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, WishGenError>;
}

/// `generateContent` over HTTPS.
#[derive(Clone)]
pub struct GeminiBackend {
    client: Client,
    config: WishConfig,
}

impl GeminiBackend {
    #[must_use]
    pub fn new(config: WishConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl WishBackend for GeminiBackend {
    async fn complete(&self, prompt: &str) -> Result<String, WishGenError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );
        let payload = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WishGenError::HttpStatus(response.status()));
        }

        let body: GenerateResponse = response.json().await?;
        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        let text = text.trim();
        if text.is_empty() {
            return Err(WishGenError::EmptyResponse);
        }
        Ok(text.to_string())
    }
}

/// Produces birthday wishes. Never fails: every error is logged and replaced
/// by a fixed message.
#[derive(Clone)]
pub struct WishGenerator {
    backend: Option<Arc<dyn WishBackend>>,
}

impl WishGenerator {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_config(WishConfig::from_env())
    }

    #[must_use]
    pub fn from_config(config: Option<WishConfig>) -> Self {
        Self {
            backend: config.map(|config| Arc::new(GeminiBackend::new(config)) as Arc<dyn WishBackend>),
        }
    }

    #[must_use]
    pub fn with_backend(backend: Arc<dyn WishBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self { backend: None }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.backend.is_some()
    }

    pub async fn generate(&self, request: &WishRequest) -> String {
        let result = match &self.backend {
            Some(backend) => backend.complete(&request.prompt()).await,
            None => Err(WishGenError::Disabled),
        };
        match result {
            Ok(text) => text,
            Err(WishGenError::EmptyResponse) => {
                tracing::warn!(name = %request.name, "wish generator returned no text");
                EMPTY_RESPONSE_WISH.to_string()
            }
            Err(err) => {
                tracing::warn!(error = %err, "wish generation failed, using fallback");
                FALLBACK_WISH.to_string()
            }
        }
    }
}

impl Default for WishGenerator {
    fn default() -> Self {
        Self::disabled()
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
