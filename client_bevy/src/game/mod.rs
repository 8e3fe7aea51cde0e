mod balls;
mod controls;
mod core;

pub use balls::BallPlugin;
pub use controls::ControlsPlugin;
pub use core::CorePlugin;
pub(crate) use core::UpdateSet;
