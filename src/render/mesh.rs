use crate::core::primitive::Primitive;
use crate::error::RendererError;
use crate::render::uniforms::{self, optional};
use crate::traits::{BufferHandle, Renderer, VERTEX_ATTRIBUTES};

/// Vertex buffer holding one or more primitive sets back to back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshBuffer {
    buffer: BufferHandle,
    /// First vertex of every primitive, one list per uploaded set
    ranges: Vec<Vec<u32>>,
}

impl MeshBuffer {
    /// Upload `sets` in order and bind the standard vertex layout
    pub fn upload<R: Renderer + ?Sized>(renderer: &mut R, sets: &[&[Primitive]]) -> Result<Self, RendererError> {
        let mut vertices = Vec::new();
        let mut ranges = Vec::with_capacity(sets.len());

        for set in sets {
            let mut firsts = Vec::with_capacity(set.len());
            for primitive in set.iter() {
                firsts.push(vertices.len() as u32);
                primitive.write_vertices(&mut vertices);
            }
            ranges.push(firsts);
        }

        let buffer = renderer.upload_mesh(&vertices)?;
        renderer.bind_attributes(buffer, &VERTEX_ATTRIBUTES);
        log::debug!("Uploaded {} vertices in {} primitive sets", vertices.len(), sets.len());

        Ok(Self { buffer, ranges })
    }

    pub fn buffer(&self) -> BufferHandle {
        self.buffer
    }

    /// First vertex index of every primitive in `set`
    pub fn first_indices(&self, set: usize) -> &[u32] {
        self.ranges.get(set).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Draw each primitive of `set` with its transform at `time`
    pub fn draw<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        set: usize,
        primitives: &[Primitive],
        time: f32,
        width_scale: f32,
        height_scale: f32,
    ) -> Result<(), RendererError> {
        for (primitive, first) in primitives.iter().zip(self.first_indices(set)) {
            let matrix = primitive.transform_at(time, width_scale, height_scale);
            optional(renderer.set_uniform_matrix(uniforms::PRIMITIVE_TRANSFORM_MATRIX, &matrix))?;
            renderer.draw_triangles(self.buffer, *first, primitive.vertex_count() as u32);
        }
        Ok(())
    }

    pub fn release<R: Renderer + ?Sized>(self, renderer: &mut R) {
        renderer.release_buffer(self.buffer);
    }
}

/// Draw primitives whose vertices are not held in any buffer
pub fn draw_unbuffered<R: Renderer + ?Sized>(
    renderer: &mut R,
    primitives: &[Primitive],
    time: f32,
    width_scale: f32,
    height_scale: f32,
) -> Result<(), RendererError> {
    for primitive in primitives {
        let matrix = primitive.transform_at(time, width_scale, height_scale);
        optional(renderer.set_uniform_matrix(uniforms::PRIMITIVE_TRANSFORM_MATRIX, &matrix))?;
        renderer.draw_unbuffered(primitive.vertices());
    }
    Ok(())
}
