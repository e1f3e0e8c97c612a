use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Prompt", inline)]
#[serde(default)]
/// Hosted text-generation settings for the shot prompter.
pub struct PromptOptions {
    /// Model identifier sent with each request.
    #[schemars(title = "Model")]
    pub model: String,
    /// API base URL; the model path is appended.
    #[schemars(skip)]
    pub endpoint: String,
    /// Environment variable holding the API key.
    #[schemars(skip)]
    pub api_key_env: String,
    /// Overall request timeout in seconds. `None` waits indefinitely.
    #[schemars(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            model: "gemini-3-pro-preview".to_owned(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta"
                .to_owned(),
            api_key_env: "GEMINI_API_KEY".to_owned(),
            timeout_secs: None,
        }
    }
}
