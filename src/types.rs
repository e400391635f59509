use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Mesh vertex as uploaded to the renderer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coord: [f32; 2],
}

impl Vertex {
    /// Vertex facing the camera, normal (0, 0, 1)
    pub fn facing_camera(position: Vec3, tex_coord: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: [0.0, 0.0, 1.0],
            tex_coord: tex_coord.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }

    pub fn tex_coord(&self) -> Vec2 {
        Vec2::from_array(self.tex_coord)
    }
}

/// Per-transition renderer requirements
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionSettings {
    /// Build mipmaps for the leaving slide texture
    pub use_mipmap_leaving: bool,
    /// Build mipmaps for the entering slide texture
    pub use_mipmap_entering: bool,
    /// Minimum graphics API version the shaders need
    pub required_graphics_version: f32,
}

impl TransitionSettings {
    /// Settings with mipmapping disabled on both slides
    pub fn without_mipmaps() -> Self {
        Self {
            use_mipmap_leaving: false,
            use_mipmap_entering: false,
            ..Self::default()
        }
    }

    pub fn with_required_version(mut self, version: f32) -> Self {
        self.required_graphics_version = version;
        self
    }
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            use_mipmap_leaving: true,
            use_mipmap_entering: true,
            required_graphics_version: 2.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
        let vertices = [Vertex::facing_camera(Vec3::ONE, Vec2::ZERO); 3];
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 96);
    }

    #[test]
    fn test_facing_camera_normal() {
        let v = Vertex::facing_camera(Vec3::new(-1.0, 1.0, 0.0), Vec2::new(0.0, 0.0));
        assert_eq!(v.normal(), Vec3::Z);
        assert_eq!(v.position(), Vec3::new(-1.0, 1.0, 0.0));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = TransitionSettings::default();
        assert!(settings.use_mipmap_leaving);
        assert!(settings.use_mipmap_entering);
        assert_eq!(settings.required_graphics_version, 2.1);
    }

    #[test]
    fn test_settings_deserialize_partial() {
        let settings: TransitionSettings =
            serde_json::from_str(r#"{"use_mipmap_entering": false}"#).unwrap();
        assert!(settings.use_mipmap_leaving);
        assert!(!settings.use_mipmap_entering);
        assert_eq!(settings.required_graphics_version, 2.1);
    }

    #[test]
    fn test_without_mipmaps_keeps_version() {
        let settings = TransitionSettings::without_mipmaps().with_required_version(3.2);
        assert!(!settings.use_mipmap_leaving);
        assert!(!settings.use_mipmap_entering);
        assert_eq!(settings.required_graphics_version, 3.2);
    }
}
