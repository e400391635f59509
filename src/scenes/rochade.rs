use glam::Vec3;

use super::common::{quad_with, with_reflection};
use crate::core::{Operation, TransitionScene};
use crate::transition::{Transition, Variant};
use crate::types::TransitionSettings;

/// Width of the elliptic path the slides swap along
const PATH_WIDTH: f32 = 2.2;
/// Depth of the elliptic path
const PATH_DEPTH: f32 = 10.0;

/// Slides trade places along an ellipse, like the chess move
pub fn create_rochade_transition() -> Transition {
    let leaving = quad_with(vec![
        Operation::ellipse_translate(PATH_WIDTH, PATH_DEPTH, 0.25, -0.25, true, 0.0, 1.0),
        Operation::rotate_and_scale_depth_by_width(Vec3::Y, Vec3::ZERO, -45.0, true, true, 0.0, 1.0),
    ]);
    let entering = quad_with(vec![
        Operation::ellipse_translate(PATH_WIDTH, PATH_DEPTH, 0.75, 0.25, true, 0.0, 1.0),
        Operation::translate(Vec3::new(0.0, 0.0, -PATH_DEPTH), false, -1.0, 0.0),
        Operation::rotate_and_scale_depth_by_width(Vec3::Y, Vec3::ZERO, -45.0, true, true, 0.0, 1.0),
        Operation::rotate_and_scale_depth_by_width(Vec3::Y, Vec3::ZERO, 45.0, true, false, -1.0, 0.0),
    ]);

    let scene = TransitionScene::new(with_reflection(&leaving).into(), with_reflection(&entering).into());
    Transition::new("rochade", scene, TransitionSettings::default(), Variant::Rochade)
}
