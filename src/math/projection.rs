use glam::{Mat4, Vec3, Vec4};

/// Distance from the eye to the slide plane
pub const EYE_DISTANCE: f32 = 10.0;

/// Clip planes are this many times the real extents
const CLIP_FACTOR: f32 = 8.0;
const NEAR: f32 = EYE_DISTANCE - 5.0;
const FAR: f32 = EYE_DISTANCE + 15.0;

/// OpenGL-style perspective frustum
pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    Mat4::from_cols(
        Vec4::new(2.0 * near / (right - left), 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 * near / (top - bottom), 0.0, 0.0),
        Vec4::new(
            (right + left) / (right - left),
            (top + bottom) / (top - bottom),
            -(far + near) / (far - near),
            -1.0,
        ),
        Vec4::new(0.0, 0.0, -2.0 * far * near / (far - near), 0.0),
    )
}

/// Scale mapping the z=0 square of half-size `real` onto the screen after the divide
pub fn fit_scale(real: f32) -> Vec3 {
    let (left, right) = (-real * CLIP_FACTOR, real * CLIP_FACTOR);
    let s = 1.0 / ((real * 2.0 * NEAR) / (EYE_DISTANCE * (right - left)) - (right + left) / (right - left));
    Vec3::new(s, s, 1.0)
}

/// `u_projectionMatrix` for every transition
pub fn perspective_projection() -> Mat4 {
    let clip = CLIP_FACTOR;
    frustum(-clip, clip, -clip, clip, NEAR, FAR) * Mat4::from_scale(fit_scale(1.0))
}

/// `u_modelViewMatrix` for every transition
pub fn model_view() -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -EYE_DISTANCE))
}

/// Orthographic light projection for shadow passes covering ±`real`
pub fn ortho_projection(real: f32) -> Mat4 {
    let clip = real * CLIP_FACTOR;
    Mat4::orthographic_rh_gl(-clip, clip, -clip, clip, NEAR, FAR) * Mat4::from_scale(fit_scale(real))
}

/// Light view for the vortex shadows
pub fn vortex_light_view() -> Mat4 {
    Mat4::look_at_rh(
        Vec3::new(-1.0, 1.0, EYE_DISTANCE),
        Vec3::new(-0.5, 0.5, 0.0),
        Vec3::Y,
    )
}

/// Light view for the honeycomb shadows
pub fn honeycomb_light_view() -> Mat4 {
    Mat4::look_at_rh(Vec3::new(0.0, 0.0, EYE_DISTANCE), Vec3::ZERO, Vec3::Y)
}
