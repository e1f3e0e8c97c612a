// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests unwrap and panic freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

//! Headless core of a virtual cinematography lab.
//!
//! A single subject stands on a stage under a three-point light rig. A
//! shooting camera looks at it from a configurable distance, height and
//! field of view. The crate classifies the resulting framing, plays
//! dolly-zoom and other camera moves, derives everything the director's
//! view and the camera monitor draw, and asks a hosted text model to
//! describe the shot.
//!
//! # Key entry points
//!
//! - [`engine::CineLab`] - one lab session, driven by
//!   [`engine::LabCommand`]s and a frame clock
//! - [`shot::classify`] - distance → shot type, the single source of the
//!   framing thresholds
//! - [`camera::DollyZoom`] - framing-preserving distance/FOV kinematics
//! - [`scene::SceneStore`] - the validated, revisioned scene state
//! - [`prompt::PromptGenerator`] - scene → instruction → shot description
//! - [`options::Options`] - runtime configuration (camera moves, prompt
//!   service, display)
//!
//! # Architecture
//!
//! The session owns the only mutable scene. Commands edit it through the
//! store, which clamps and validates every commit. Camera moves are
//! sampled once per frame and written back through the same store. Prompt
//! requests run on a background thread against an immutable snapshot and
//! are polled from the frame loop, so rendering never waits on the
//! network.

pub mod camera;
pub mod engine;
pub mod error;
pub mod options;
pub mod prompt;
pub mod scene;
pub mod shot;
pub mod util;
pub mod view;
