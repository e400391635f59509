mod axis;
mod grid;
pub mod projection;

pub use axis::random_xy_axis;
pub use grid::grid_point;
pub use projection::{model_view, ortho_projection, perspective_projection};
