//! One-at-a-time background prompt requests.
//!
//! The request runs on its own thread with an immutable scene snapshot; the
//! frame loop polls for the outcome. While a request is outstanding the
//! trigger is disabled ([`PromptController::is_busy`]) and further
//! submissions are refused. There is no cancellation or timeout here; a
//! timeout, if any, is the backend's.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use super::{PromptError, PromptGenerator};
use crate::error::CineError;
use crate::scene::SceneState;

/// Result of asking for a new prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Submission {
    /// A request was started.
    Started,
    /// A request is already outstanding; nothing was started.
    Busy,
}

/// Tracks the single outstanding prompt request, if any.
#[derive(Debug, Default)]
pub struct PromptController {
    pending: Option<Receiver<Result<String, PromptError>>>,
}

impl PromptController {
    /// Controller with nothing outstanding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a request is outstanding (the trigger should be disabled).
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Start describing `snapshot` on a background thread.
    pub fn submit(
        &mut self,
        generator: &PromptGenerator,
        snapshot: Arc<SceneState>,
    ) -> Result<Submission, CineError> {
        if self.is_busy() {
            log::debug!("prompt request already outstanding");
            return Ok(Submission::Busy);
        }

        let (tx, rx) = mpsc::channel();
        let generator = generator.clone();
        let _worker = thread::Builder::new()
            .name("shot-prompt".to_owned())
            .spawn(move || {
                let result = generator.generate(&snapshot);
                // The controller may have been dropped; nobody is waiting.
                let _ = tx.send(result);
            })
            .map_err(CineError::ThreadSpawn)?;

        self.pending = Some(rx);
        Ok(Submission::Started)
    }

    /// Non-blocking check for the outcome. Re-enables the trigger once the
    /// request has settled, success or failure.
    pub fn poll(&mut self) -> Option<Result<String, PromptError>> {
        let rx = self.pending.as_ref()?;
        let outcome = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(PromptError::Interrupted),
        };
        self.pending = None;
        Some(outcome)
    }

    /// Block until the outstanding request settles.
    ///
    /// Returns `None` if nothing was outstanding.
    pub fn wait(&mut self) -> Option<Result<String, PromptError>> {
        let rx = self.pending.take()?;
        Some(rx.recv().unwrap_or(Err(PromptError::Interrupted)))
    }
}
