/// Wirecube Core Library - rotating wireframe cube engine
///
/// This library provides the platform-independent part of the renderer:
/// the static cube model, axis-angle rotation about a pivot, and the
/// per-frame animation driver that turns timestamps into edges to draw.

pub mod animation;
pub mod clock;
pub mod error;
pub mod geometry;
pub mod rotation;

// Re-export commonly used types
pub use animation::{AnimationConfig, AnimationState, Animator, Phase};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use geometry::{CubeModel, Edge};
pub use rotation::{rotate_around_pivot, Rotation};
