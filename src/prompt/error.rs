//! Failure causes at the text-generation boundary.

use std::fmt;

/// Message shown when the service answered but produced no text.
pub const EMPTY_RESPONSE_MESSAGE: &str = "Prompt generation failed.";
/// Message shown for every other failure.
pub const REQUEST_FAILED_MESSAGE: &str =
    "Error while generating the prompt. Please check your configuration or API key.";
/// [`EMPTY_RESPONSE_MESSAGE`] for bilingual panels.
pub const EMPTY_RESPONSE_MESSAGE_BILINGUAL: &str =
    "生成提示词失败。 (Prompt generation failed.)";
/// [`REQUEST_FAILED_MESSAGE`] for bilingual panels.
pub const REQUEST_FAILED_MESSAGE_BILINGUAL: &str =
    "生成提示词时出错，请检查您的配置或 API 密钥。 \
     (Error while generating the prompt. Please check your configuration or API key.)";

/// Error reason Gemini puts in a 400 body for a bad key.
const INVALID_KEY_REASON: &str = "API_KEY_INVALID";

/// Why a prompt could not be generated.
///
/// The panel collapses all of these into [`fallback_message`]; the variants
/// exist so logs and tests can tell the causes apart.
///
/// [`fallback_message`]: PromptError::fallback_message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// No API key configured (named environment variable unset or empty).
    MissingApiKey(String),
    /// The service rejected the credentials (HTTP 401/403, or 400 with an
    /// invalid-key reason).
    Unauthorized(u16),
    /// Any other non-success HTTP status.
    Http(u16),
    /// Transport failure: DNS, connect, TLS, timeout, I/O.
    Network(String),
    /// The response carried no generated text.
    EmptyResponse,
    /// The response body could not be decoded.
    Malformed(String),
    /// The request never reported back (worker thread died).
    Interrupted,
}

impl PromptError {
    /// Classify a non-success HTTP status, using the response body to spot
    /// a rejected key.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => Self::Unauthorized(status),
            400 if body.contains(INVALID_KEY_REASON) => Self::Unauthorized(status),
            _ => Self::Http(status),
        }
    }

    /// Whether the failure is a credentials/configuration problem.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::MissingApiKey(_) | Self::Unauthorized(_))
    }

    /// The generic user-facing text for this failure.
    #[must_use]
    pub fn fallback_message(&self, bilingual: bool) -> &'static str {
        match (self, bilingual) {
            (Self::EmptyResponse, false) => EMPTY_RESPONSE_MESSAGE,
            (Self::EmptyResponse, true) => EMPTY_RESPONSE_MESSAGE_BILINGUAL,
            (_, false) => REQUEST_FAILED_MESSAGE,
            (_, true) => REQUEST_FAILED_MESSAGE_BILINGUAL,
        }
    }
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey(var) => {
                write!(f, "no API key configured (set {var})")
            }
            Self::Unauthorized(status) => {
                write!(f, "API key rejected (HTTP {status})")
            }
            Self::Http(status) => write!(f, "service returned HTTP {status}"),
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::EmptyResponse => f.write_str("service returned no text"),
            Self::Malformed(msg) => write!(f, "malformed response: {msg}"),
            Self::Interrupted => f.write_str("prompt request was interrupted"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<ureq::Error> for PromptError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::StatusCode(status) => Self::from_status(status, ""),
            ureq::Error::Json(err) => Self::Malformed(err.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}
