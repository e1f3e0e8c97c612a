//! Gemini `generateContent` backend over blocking HTTP.

use serde::{Deserialize, Serialize};
use web_time::Duration;

use super::{PromptError, TextGenerator};
use crate::options::PromptOptions;

/// Request body.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Response body. Every level is optional: a blocked or empty generation
/// comes back without candidates or parts.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, if it has any.
    fn into_text(self) -> Result<String, PromptError> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();
        let text = text.trim();
        if text.is_empty() {
            Err(PromptError::EmptyResponse)
        } else {
            Ok(text.to_owned())
        }
    }
}

/// Hosted Gemini text generation.
pub struct GeminiClient {
    agent: ureq::Agent,
    endpoint: String,
    api_key: Option<String>,
    api_key_env: String,
}

impl GeminiClient {
    /// Client configured from `options`, reading the API key from the
    /// environment variable it names.
    #[must_use]
    pub fn from_options(options: &PromptOptions) -> Self {
        let api_key = std::env::var(&options.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty());
        if api_key.is_none() {
            log::warn!(
                "{} is not set; prompt generation will fail",
                options.api_key_env
            );
        }
        Self::new(options, api_key)
    }

    /// Client with an explicit API key (`None` = not configured).
    #[must_use]
    pub fn new(options: &PromptOptions, api_key: Option<String>) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(options.timeout_secs.map(Duration::from_secs))
            .http_status_as_error(false)
            .build();
        Self {
            agent: ureq::Agent::new_with_config(config),
            endpoint: options.endpoint.trim_end_matches('/').to_owned(),
            api_key,
            api_key_env: options.api_key_env.clone(),
        }
    }

    fn url(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.endpoint)
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, model: &str, instruction: &str) -> Result<String, PromptError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(PromptError::MissingApiKey(self.api_key_env.clone()));
        };

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: instruction }],
            }],
        };

        log::info!("requesting shot prompt from {model}");
        let mut response = self
            .agent
            .post(self.url(model))
            .header("x-goog-api-key", api_key)
            .send_json(&request)?;

        // Gemini reports a bad key as 400 with the reason in the body.
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.body_mut().read_to_string().unwrap_or_default();
            return Err(PromptError::from_status(status, &body));
        }

        let response: GenerateResponse = response.body_mut().read_json()?;
        response.into_text()
    }
}
