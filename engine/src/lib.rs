//! Bouncing-ball animation engine.
//!
//! One motion task per ball moves its bounding box across a drawing surface
//! and reflects its velocity at the surface edges. The [`controller`] owns
//! the shared registry and run flag; [`animation_loop`] serializes UI
//! commands onto it.

pub mod animation_loop;
pub mod controller;
pub mod error;
pub mod factory;
pub mod motion;
pub mod registry;
pub mod surface;

pub use bouncer_shared as shared;
