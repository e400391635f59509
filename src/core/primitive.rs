use glam::{Mat4, Vec2, Vec3};

use super::operation::Operation;
use crate::types::Vertex;

/// Triangle-list mesh fragment with its own ordered operations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Primitive {
    vertices: Vec<Vertex>,
    operations: Vec<Operation>,
}

/// Slide coordinates in [0,1]² to the z=0 plane spanning [-1,1]², y up
pub fn slide_to_world(location: Vec2) -> Vec3 {
    Vec3::new(2.0 * location.x - 1.0, -2.0 * location.y + 1.0, 0.0)
}

impl Primitive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a triangle given in slide coordinates, wound to face the camera
    pub fn push_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2) {
        let (v0, v1, v2) = (slide_to_world(a), slide_to_world(b), slide_to_world(c));
        let normal = (v0 - v1).cross(v1 - v2);

        let corners = if normal.z >= 0.0 {
            [(v0, a), (v1, b), (v2, c)]
        } else {
            [(v0, a), (v2, c), (v1, b)]
        };

        self.vertices.extend(
            corners
                .into_iter()
                .map(|(position, tex_coord)| Vertex::facing_camera(position, tex_coord)),
        );
    }

    /// Same primitive with its operation list replaced
    pub fn with_operations(mut self, operations: Vec<Operation>) -> Self {
        self.operations = operations;
        self
    }

    pub fn push_operation(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn vertices_byte_size(&self) -> usize {
        bytemuck::cast_slice::<Vertex, u8>(&self.vertices).len()
    }

    /// Position of vertex `index` after winding correction
    pub fn vertex(&self, index: usize) -> Vec3 {
        self.vertices[index].position()
    }

    /// Append the vertices to an upload buffer, returning how many were written
    pub fn write_vertices(&self, out: &mut Vec<Vertex>) -> usize {
        out.extend_from_slice(&self.vertices);
        self.vertices.len()
    }

    /// Fold the operations onto `matrix` and append the slide aspect scale
    pub fn apply_operations(&self, matrix: &mut Mat4, time: f32, width_scale: f32, height_scale: f32) {
        for operation in &self.operations {
            operation.interpolate(matrix, time, width_scale, height_scale);
        }
        *matrix *= Mat4::from_scale(Vec3::new(width_scale, height_scale, 1.0));
    }

    /// Primitive transform matrix at `time`
    pub fn transform_at(&self, time: f32, width_scale: f32, height_scale: f32) -> Mat4 {
        let mut matrix = Mat4::IDENTITY;
        self.apply_operations(&mut matrix, time, width_scale, height_scale);
        matrix
    }
}

/// Fold scene-level operations into a fresh matrix, without the aspect scale
pub fn compose_operations(operations: &[Operation], time: f32, width_scale: f32, height_scale: f32) -> Mat4 {
    operations.iter().fold(Mat4::IDENTITY, |mut matrix, operation| {
        operation.interpolate(&mut matrix, time, width_scale, height_scale);
        matrix
    })
}

/// The full-slide quad every generator starts from
pub fn slide_quad() -> Primitive {
    let mut slide = Primitive::new();
    slide.push_triangle(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0));
    slide.push_triangle(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0));
    slide
}
