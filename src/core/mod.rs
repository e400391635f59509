pub mod display_context;
pub mod frame;
pub mod operation;
pub mod primitive;
pub mod scene;
pub mod scene_object;

pub use display_context::DisplayContext;
pub use frame::Frame;
pub use operation::{DepthScale, Operation, TimeWindow, Transform};
pub use primitive::{compose_operations, slide_quad, slide_to_world, Primitive};
pub use scene::TransitionScene;
pub use scene_object::{SceneObject, SceneObjectKind};
