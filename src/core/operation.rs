use glam::{Mat4, Vec3};
use std::f32::consts::TAU;

/// Sub-interval of the transition during which an operation moves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    pub start: f32,
    pub end: f32,
}

impl TimeWindow {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Progress in [0, 1] reached at `time`, or `None` while the operation is inactive.
    ///
    /// With `interpolate` unset the operation jumps to its end state as soon as
    /// `time` leaves the start of the window.
    pub fn progress(&self, time: f32, interpolate: bool) -> Option<f32> {
        let time = time.clamp(0.0, 1.0);

        if self.start == self.end {
            return (time >= self.start).then_some(1.0);
        }
        if time <= self.start {
            return None;
        }

        let time = if !interpolate || time > self.end { self.end } else { time };
        Some((time - self.start) / (self.end - self.start))
    }
}

/// Which slide dimension scales the depth of the pivot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthScale {
    ByWidth,
    ByHeight,
}

/// Transform applied by an operation, evaluated at a progress value
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    /// Rotation in degrees about `axis` through `origin`
    Rotate { axis: Vec3, origin: Vec3, angle: f32 },
    /// Per-axis scale anchored at `origin`
    Scale { origin: Vec3, factor: Vec3 },
    Translate { vector: Vec3 },
    /// Movement along an ellipse in the XZ plane; `start`/`end` are fractions of a turn
    EllipseTranslate { width: f32, height: f32, start: f32, end: f32 },
    /// Rotation whose pivot depth follows the slide width or height
    RotateAndScaleDepth {
        axis: Vec3,
        origin: Vec3,
        angle: f32,
        scale: bool,
        depth: DepthScale,
    },
}

/// Time-windowed transform attached to a primitive or a whole scene
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    transform: Transform,
    interpolate: bool,
    window: TimeWindow,
}

fn unit_axis(axis: Vec3) -> Vec3 {
    axis.try_normalize().unwrap_or(Vec3::Z)
}

impl Operation {
    pub fn new(transform: Transform, interpolate: bool, t0: f32, t1: f32) -> Self {
        Self {
            transform,
            interpolate,
            window: TimeWindow::new(t0, t1),
        }
    }

    pub fn rotate(axis: Vec3, origin: Vec3, angle: f32, interpolate: bool, t0: f32, t1: f32) -> Self {
        let transform = Transform::Rotate {
            axis: unit_axis(axis),
            origin,
            angle,
        };
        Self::new(transform, interpolate, t0, t1)
    }

    pub fn scale(factor: Vec3, origin: Vec3, interpolate: bool, t0: f32, t1: f32) -> Self {
        Self::new(Transform::Scale { origin, factor }, interpolate, t0, t1)
    }

    pub fn translate(vector: Vec3, interpolate: bool, t0: f32, t1: f32) -> Self {
        Self::new(Transform::Translate { vector }, interpolate, t0, t1)
    }

    pub fn ellipse_translate(
        width: f32,
        height: f32,
        start: f32,
        end: f32,
        interpolate: bool,
        t0: f32,
        t1: f32,
    ) -> Self {
        let transform = Transform::EllipseTranslate { width, height, start, end };
        Self::new(transform, interpolate, t0, t1)
    }

    pub fn rotate_and_scale_depth_by_width(
        axis: Vec3,
        origin: Vec3,
        angle: f32,
        scale: bool,
        interpolate: bool,
        t0: f32,
        t1: f32,
    ) -> Self {
        Self::rotate_and_scale_depth(axis, origin, angle, scale, DepthScale::ByWidth, interpolate, t0, t1)
    }

    pub fn rotate_and_scale_depth_by_height(
        axis: Vec3,
        origin: Vec3,
        angle: f32,
        scale: bool,
        interpolate: bool,
        t0: f32,
        t1: f32,
    ) -> Self {
        Self::rotate_and_scale_depth(axis, origin, angle, scale, DepthScale::ByHeight, interpolate, t0, t1)
    }

    #[allow(clippy::too_many_arguments)]
    fn rotate_and_scale_depth(
        axis: Vec3,
        origin: Vec3,
        angle: f32,
        scale: bool,
        depth: DepthScale,
        interpolate: bool,
        t0: f32,
        t1: f32,
    ) -> Self {
        let transform = Transform::RotateAndScaleDepth {
            axis: unit_axis(axis),
            origin,
            angle,
            scale,
            depth,
        };
        Self::new(transform, interpolate, t0, t1)
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    pub fn is_interpolated(&self) -> bool {
        self.interpolate
    }

    /// Right-multiply this operation's contribution at `time` onto `matrix`
    pub fn interpolate(&self, matrix: &mut Mat4, time: f32, width_scale: f32, height_scale: f32) {
        if let Some(progress) = self.window.progress(time, self.interpolate) {
            *matrix *= self.transform.matrix(progress, width_scale, height_scale);
        }
    }

    /// Contribution of this operation alone, identity while inactive
    pub fn matrix_at(&self, time: f32, width_scale: f32, height_scale: f32) -> Mat4 {
        let mut matrix = Mat4::IDENTITY;
        self.interpolate(&mut matrix, time, width_scale, height_scale);
        matrix
    }
}

impl Transform {
    /// Matrix for this transform at `progress` through its window
    pub fn matrix(&self, progress: f32, ws: f32, hs: f32) -> Mat4 {
        match *self {
            Transform::Rotate { axis, origin, angle } => {
                let pivot = Vec3::new(ws * origin.x, hs * origin.y, origin.z);
                let aspect = Vec3::new(ws * ws, hs * hs, 1.0);
                about(pivot, aspect, Mat4::from_axis_angle(axis, (progress * angle).to_radians()))
            }
            Transform::Scale { origin, factor } => {
                let pivot = Vec3::new(ws * origin.x, hs * origin.y, origin.z);
                let amount = Vec3::splat(1.0 - progress) + progress * factor;
                Mat4::from_translation(pivot) * Mat4::from_scale(amount) * Mat4::from_translation(-pivot)
            }
            Transform::Translate { vector } => Mat4::from_translation(Vec3::new(
                ws * progress * vector.x,
                hs * progress * vector.y,
                progress * vector.z,
            )),
            Transform::EllipseTranslate { width, height, start, end } => {
                let a1 = start * TAU;
                let a2 = (start + progress * (end - start)) * TAU;
                let x = width * (a2.cos() - a1.cos()) / 2.0;
                let z = height * (a2.sin() - a1.sin()) / 2.0;
                Mat4::from_translation(Vec3::new(x, 0.0, z))
            }
            Transform::RotateAndScaleDepth { axis, origin, angle, scale, depth } => {
                let depth_scale = match depth {
                    DepthScale::ByWidth => ws,
                    DepthScale::ByHeight => hs,
                };
                let pivot = Vec3::new(ws * origin.x, hs * origin.y, depth_scale * origin.z);
                let aspect = if scale { Vec3::new(ws * ws, hs * hs, 1.0) } else { Vec3::ONE };
                about(pivot, aspect, Mat4::from_axis_angle(axis, (progress * angle).to_radians()))
            }
        }
    }
}

/// `rotation` conjugated by a pivot translation and an aspect scale
fn about(pivot: Vec3, aspect: Vec3, rotation: Mat4) -> Mat4 {
    Mat4::from_translation(pivot)
        * Mat4::from_scale(aspect)
        * rotation
        * Mat4::from_scale(aspect.recip())
        * Mat4::from_translation(-pivot)
}
