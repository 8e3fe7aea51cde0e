//! Plain data shared by the bouncer engine and its front-ends.

pub mod config;
pub mod geometry;
pub mod palette;
pub mod protocol;

pub use config::AnimationConfig;
pub use geometry::{Axis, BallId, Rect, SurfaceSize, Velocity};
pub use palette::{BallColor, BallSize};
