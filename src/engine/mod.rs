//! The lab session: scene store, camera moves, prompt requests, and the
//! per-frame view, driven by [`LabCommand`]s and a frame clock.

mod command;

use std::sync::Arc;

pub use command::LabCommand;
use web_time::Instant;

use crate::camera::{CameraAnimator, CameraMove, MoveHandle};
use crate::error::CineError;
use crate::options::Options;
use crate::prompt::{PromptController, PromptError, PromptGenerator, Submission};
use crate::scene::state::FOV_SLIDER_RANGE;
use crate::scene::{LightConfig, SceneState, SceneStore};
use crate::view::{CameraGizmo, FrameView};

/// One interactive lab session.
#[derive(Debug)]
pub struct CineLab {
    store: SceneStore,
    options: Options,
    animator: CameraAnimator,
    prompter: PromptController,
    generator: PromptGenerator,
    /// Last settled prompt outcome, shown until dismissed or replaced.
    last_prompt: Option<Result<String, PromptError>>,
    gizmo: CameraGizmo,
    action_started: Instant,
}

impl CineLab {
    /// Session with the default scene, generating prompts via Gemini.
    #[must_use]
    pub fn from_options(options: Options) -> Self {
        let generator = PromptGenerator::from_options(&options.prompt);
        Self::new(options, generator)
    }

    /// Session with the default scene and an explicit prompt generator.
    #[must_use]
    pub fn new(options: Options, generator: PromptGenerator) -> Self {
        let store = SceneStore::default();
        Self {
            gizmo: CameraGizmo::at(store.get()),
            store,
            options,
            animator: CameraAnimator::new(),
            prompter: PromptController::new(),
            generator,
            last_prompt: None,
            action_started: Instant::now(),
        }
    }

    /// Start from `state` instead of the default scene. Its light rig
    /// becomes the session's fixed rig; the gizmo snaps to its camera.
    #[must_use]
    pub fn with_scene(mut self, state: SceneState) -> Self {
        self.store = SceneStore::new(state);
        self.gizmo = CameraGizmo::at(self.store.get());
        self
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Current scene.
    #[must_use]
    pub fn scene(&self) -> &SceneState {
        self.store.get()
    }

    /// Shared immutable snapshot of the current scene.
    #[must_use]
    pub fn snapshot(&self) -> Arc<SceneState> {
        self.store.snapshot()
    }

    /// Store revision; bumps on every effective change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options. Takes effect for the next move and frame.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    /// Handle of the camera move in flight.
    #[must_use]
    pub fn camera_move(&self) -> Option<MoveHandle> {
        self.animator.current()
    }

    /// Whether a prompt request is outstanding.
    #[must_use]
    pub fn prompt_busy(&self) -> bool {
        self.prompter.is_busy()
    }

    /// Last settled prompt outcome.
    #[must_use]
    pub fn last_prompt(&self) -> Option<&Result<String, PromptError>> {
        self.last_prompt.as_ref()
    }

    /// Text for the prompt panel: the generated prompt, or the failure
    /// message in the panel's label language.
    #[must_use]
    pub fn prompt_text(&self) -> Option<&str> {
        let bilingual = self.options.display.bilingual_labels;
        self.last_prompt.as_ref().map(|outcome| match outcome {
            Ok(text) => text.as_str(),
            Err(e) => e.fallback_message(bilingual),
        })
    }

    // ── Commands ────────────────────────────────────────────────────

    /// Apply `command` now.
    pub fn execute(&mut self, command: LabCommand) -> Result<(), CineError> {
        self.execute_at(command, Instant::now())
    }

    /// Apply `command` as of `now` (camera moves start at `now`).
    pub fn execute_at(
        &mut self,
        command: LabCommand,
        now: Instant,
    ) -> Result<(), CineError> {
        if command.is_manual_camera_edit() {
            if let Some(handle) = self.animator.cancel() {
                log::debug!("camera move #{} taken over by hand", handle.id());
            }
        }

        match command {
            LabCommand::SetCameraDistance { distance } => {
                self.store.update(|s| s.camera_distance = distance);
            }
            LabCommand::SetCameraHeight { height } => {
                self.store.update(|s| s.camera_height = height);
            }
            LabCommand::SetCameraFov { fov } => {
                let (lo, hi) = FOV_SLIDER_RANGE;
                self.store.update(|s| s.camera_fov = fov.clamp(lo, hi));
            }
            LabCommand::DollyZoom => {
                let target_distance = self.options.camera.dolly_zoom_target;
                let _ = self.start_move(&CameraMove::DollyZoom { target_distance }, now);
            }
            LabCommand::Dolly { to } => {
                let _ = self.start_move(
                    &CameraMove::Dolly {
                        target_distance: to,
                    },
                    now,
                );
            }
            LabCommand::Zoom { to_fov } => {
                let _ = self.start_move(&CameraMove::Zoom { target_fov: to_fov }, now);
            }
            LabCommand::CancelCameraMove => {
                if let Some(handle) = self.animator.cancel() {
                    log::debug!("camera move #{} cancelled", handle.id());
                }
            }
            LabCommand::SetGrid { grid } => {
                self.store.update(|s| s.grid_type = grid);
            }
            LabCommand::SetSubjectAction { action } => {
                if self.scene().subject_action != action {
                    self.action_started = now;
                }
                self.store.update(|s| s.subject_action = action);
            }
            LabCommand::SetLightEnabled { id, enabled } => {
                self.edit_light(&id, |l| l.enabled = enabled);
            }
            LabCommand::SetLightColor { id, color } => {
                self.edit_light(&id, |l| l.color = color);
            }
            LabCommand::SetLightIntensity { id, intensity } => {
                self.edit_light(&id, |l| l.intensity = intensity);
            }
            LabCommand::GeneratePrompt => {
                match self.prompter.submit(&self.generator, self.store.snapshot())? {
                    Submission::Started => log::info!("generating shot prompt"),
                    Submission::Busy => {}
                }
            }
            LabCommand::DismissPrompt => self.last_prompt = None,
        }
        Ok(())
    }

    fn start_move(&mut self, camera_move: &CameraMove, now: Instant) -> MoveHandle {
        let camera = &self.options.camera;
        self.animator.start(
            camera_move,
            self.store.get().camera_pose(),
            now,
            camera.move_duration(),
            camera.easing,
        )
    }

    fn edit_light(&mut self, id: &str, edit: impl FnOnce(&mut LightConfig)) {
        if self.scene().light(id).is_none() {
            log::warn!("no light with id {id:?}");
            return;
        }
        self.store.update(|s| {
            if let Some(light) = s.light_mut(id) {
                edit(light);
            }
        });
    }

    // ── Frame ───────────────────────────────────────────────────────

    /// Advance everything time-driven to `now` and build the frame.
    pub fn tick(&mut self, now: Instant) -> FrameView {
        if let Some(mut pose) = self.animator.tick(now) {
            if self.options.camera.clamp_move_fov {
                let (lo, hi) = FOV_SLIDER_RANGE;
                pose.fov = pose.fov.clamp(lo, hi);
            }
            self.store.update(|s| s.set_camera_pose(pose));
        }

        if let Some(outcome) = self.prompter.poll() {
            self.last_prompt = Some(outcome);
        }

        self.gizmo
            .follow(self.store.get(), self.options.display.gizmo_follow);
        self.frame(now)
    }

    /// The frame for the current state, without advancing anything.
    #[must_use]
    pub fn frame(&self, now: Instant) -> FrameView {
        let action_secs = now
            .saturating_duration_since(self.action_started)
            .as_secs_f32();
        FrameView::build(self.store.get(), &self.options, action_secs, self.gizmo)
    }

    /// Block until the outstanding prompt request settles and record it.
    ///
    /// Returns `None` if nothing was outstanding.
    pub fn wait_for_prompt(&mut self) -> Option<&Result<String, PromptError>> {
        let outcome = self.prompter.wait()?;
        self.last_prompt = Some(outcome);
        self.last_prompt.as_ref()
    }
}
