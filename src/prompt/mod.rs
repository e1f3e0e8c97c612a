//! Shot prompter: describes the configured shot through a hosted text model.
//!
//! The numeric core never depends on what comes back. A request either
//! yields text or a typed [`PromptError`]; the panel shows
//! [`PromptError::fallback_message`] for any failure.

mod controller;
mod error;
mod gemini;
mod instruction;

use std::sync::Arc;

pub use controller::{PromptController, Submission};
pub use error::{
    PromptError, EMPTY_RESPONSE_MESSAGE, EMPTY_RESPONSE_MESSAGE_BILINGUAL,
    REQUEST_FAILED_MESSAGE, REQUEST_FAILED_MESSAGE_BILINGUAL,
};
pub use gemini::GeminiClient;
pub use instruction::{build_instruction, describe_lighting};

use crate::options::PromptOptions;
use crate::scene::SceneState;

/// A hosted (or stubbed) text-generation service.
pub trait TextGenerator: Send + Sync {
    /// Generate text for `instruction` with `model`.
    fn generate(&self, model: &str, instruction: &str) -> Result<String, PromptError>;
}

/// Scene → instruction → generated shot description.
#[derive(Clone)]
pub struct PromptGenerator {
    backend: Arc<dyn TextGenerator>,
    model: String,
}

impl PromptGenerator {
    /// Generator using `backend` and `model`.
    pub fn new(backend: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
        }
    }

    /// Generator backed by Gemini, configured from `options`.
    #[must_use]
    pub fn from_options(options: &PromptOptions) -> Self {
        Self::new(
            Arc::new(GeminiClient::from_options(options)),
            options.model.clone(),
        )
    }

    /// Model identifier sent with each request.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Describe `state`. Blocks for as long as the service takes.
    pub fn generate(&self, state: &SceneState) -> Result<String, PromptError> {
        let instruction = build_instruction(state);
        let result = self.backend.generate(&self.model, &instruction);
        match &result {
            Err(e) if e.is_auth() => {
                log::error!("shot prompt failed: {e}; check the API key");
            }
            Err(e) => log::error!("shot prompt failed: {e}"),
            Ok(_) => {}
        }
        result
    }
}

impl std::fmt::Debug for PromptGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptGenerator")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::{PromptError, TextGenerator};

    /// Canned backend that records the instructions it receives.
    pub(crate) struct StubGenerator {
        reply: Result<String, PromptError>,
        pub(crate) seen: Mutex<Vec<(String, String)>>,
    }

    impl StubGenerator {
        pub(crate) fn replying(reply: Result<String, PromptError>) -> Self {
            Self {
                reply,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl TextGenerator for StubGenerator {
        fn generate(
            &self,
            model: &str,
            instruction: &str,
        ) -> Result<String, PromptError> {
            self.seen
                .lock()
                .unwrap()
                .push((model.to_owned(), instruction.to_owned()));
            self.reply.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::StubGenerator;
    use super::*;

    #[test]
    fn sends_built_instruction_to_model() {
        let stub = Arc::new(StubGenerator::replying(Ok("dramatic rim light".to_owned())));
        let generator = PromptGenerator::new(stub.clone(), "test-model");
        let state = SceneState::default();

        assert_eq!(generator.generate(&state).unwrap(), "dramatic rim light");
        let seen = stub.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "test-model");
        assert_eq!(seen[0].1, build_instruction(&state));
    }

    #[test]
    fn failures_keep_their_cause() {
        let generator = PromptGenerator::new(
            Arc::new(StubGenerator::replying(Err(PromptError::Unauthorized(401)))),
            "m",
        );
        assert_eq!(
            generator.generate(&SceneState::default()),
            Err(PromptError::Unauthorized(401))
        );
    }

    #[test]
    fn rejected_key_stays_an_auth_failure() {
        let generator = PromptGenerator::new(
            Arc::new(StubGenerator::replying(Err(PromptError::from_status(
                400,
                r#"{"error":{"details":[{"reason":"API_KEY_INVALID"}]}}"#,
            )))),
            "m",
        );
        let err = generator.generate(&SceneState::default()).unwrap_err();
        assert!(err.is_auth());
        assert_eq!(err.fallback_message(false), REQUEST_FAILED_MESSAGE);
    }

    #[test]
    fn default_model_from_options() {
        let generator = PromptGenerator::from_options(&PromptOptions::default());
        assert_eq!(generator.model(), "gemini-3-pro-preview");
    }
}
