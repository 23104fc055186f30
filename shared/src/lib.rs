//! Engine-side logic for the walkabout client: input sampling, locomotion,
//! follow-camera smoothing and tunable settings.

pub mod character;
pub mod controls;
pub mod follow_camera;
pub mod locomotion;
pub mod settings;

pub use character::*;
pub use controls::*;
pub use settings::*;
