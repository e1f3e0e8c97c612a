//! Scene model: camera settings, composition, light rig and subject, plus
//! the store that owns them.

pub mod light;
pub mod state;
pub mod store;
pub mod subject;

pub use light::{default_lights, LightConfig, LightKind};
pub use state::{CompositionGrid, SceneState};
pub use store::SceneStore;
pub use subject::{SubjectAction, SubjectMotion};
