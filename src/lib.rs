//! Geometry and animation core of slide-to-slide transitions.
//!
//! A generator in [`scenes`] (or a [`TransitionKind`]) builds a [`Transition`];
//! the host then calls `prepare`, `display` once per frame and `finish`
//! against its own [`Renderer`].

pub mod catalog;
pub mod cli;
pub mod core;
pub mod error;
pub mod math;
pub mod render;
pub mod scenes;
pub mod traits;
pub mod transition;
pub mod types;

pub use catalog::TransitionKind;
pub use error::{LifecycleState, RendererError, TransitionError};
pub use traits::Renderer;
pub use transition::{Transition, Variant};
