use crate::traits::{BufferHandle, Renderer, TargetHandle, TextureHandle};

/// Side length of the square permutation texture
pub const PERM_TEXTURE_SIZE: u32 = 256;

const PERMUTATION_256: [u8; 256] = [
    215, 100, 200, 204, 233, 50, 85, 196, 71, 141, 122, 160, 93, 131, 243, 234, //
    162, 183, 36, 155, 4, 62, 35, 205, 40, 102, 33, 27, 255, 55, 214, 156, //
    75, 163, 134, 126, 249, 74, 197, 228, 72, 90, 206, 235, 17, 22, 49, 169, //
    227, 89, 16, 5, 117, 60, 248, 230, 217, 68, 138, 96, 194, 170, 136, 10, //
    112, 238, 184, 189, 176, 42, 225, 212, 84, 58, 175, 244, 150, 168, 219, 236, //
    101, 208, 123, 37, 164, 110, 158, 201, 78, 114, 57, 48, 70, 142, 106, 43, //
    232, 26, 32, 252, 239, 98, 191, 94, 59, 149, 39, 187, 203, 190, 19, 13, //
    133, 45, 61, 247, 23, 34, 20, 52, 118, 209, 146, 193, 222, 18, 1, 152, //
    46, 41, 91, 148, 115, 25, 135, 77, 254, 147, 224, 161, 9, 213, 223, 250, //
    231, 251, 127, 166, 63, 179, 81, 130, 139, 28, 120, 151, 241, 86, 111, 0, //
    88, 153, 172, 182, 159, 105, 178, 47, 51, 167, 65, 66, 92, 73, 198, 211, //
    245, 195, 31, 220, 140, 76, 221, 186, 154, 185, 56, 83, 38, 165, 109, 67, //
    124, 226, 132, 53, 229, 29, 12, 181, 121, 24, 207, 199, 177, 113, 30, 80, //
    3, 97, 188, 79, 216, 173, 8, 145, 87, 128, 180, 237, 240, 137, 125, 104, //
    15, 242, 119, 246, 103, 143, 95, 144, 2, 44, 69, 157, 192, 174, 14, 54, //
    218, 82, 64, 210, 11, 6, 129, 21, 116, 171, 99, 202, 7, 107, 253, 108, //
];

/// 256×256 noise lookup: row `y` is the permutation shifted by `y`
pub fn permutation_texture_data() -> Vec<u8> {
    let size = PERM_TEXTURE_SIZE as usize;
    let mut data = Vec::with_capacity(size * size);
    for y in 0..size {
        for x in 0..size {
            let shifted = (y + PERMUTATION_256[x] as usize) & 0xff;
            data.push(PERMUTATION_256[shifted]);
        }
    }
    data
}

/// Renderer objects a variant acquires on top of the program and mesh
#[derive(Debug, Default)]
pub struct VariantResources {
    pub perm_texture: Option<TextureHandle>,
    /// Extra per-vertex attribute stream (tile info or hexagon centres)
    pub attribute_buffer: Option<BufferHandle>,
    pub shadow_textures: Vec<TextureHandle>,
    pub shadow_targets: Vec<TargetHandle>,
}

impl VariantResources {
    pub fn is_empty(&self) -> bool {
        self.perm_texture.is_none()
            && self.attribute_buffer.is_none()
            && self.shadow_textures.is_empty()
            && self.shadow_targets.is_empty()
    }

    /// Release everything held, targets before the textures attached to them
    pub fn release<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        for target in self.shadow_targets.drain(..) {
            renderer.release_offscreen_target(target);
        }
        for texture in self.shadow_textures.drain(..) {
            renderer.release_texture(texture);
        }
        if let Some(buffer) = self.attribute_buffer.take() {
            renderer.release_buffer(buffer);
        }
        if let Some(texture) = self.perm_texture.take() {
            renderer.release_texture(texture);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::RecordingRenderer;
    use crate::traits::{TextureDescriptor, TextureFilter, TextureFormat};

    #[test]
    fn test_permutation_table_is_a_permutation() {
        let mut seen = [false; 256];
        for value in PERMUTATION_256 {
            seen[value as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_permutation_texture_rows() {
        let data = permutation_texture_data();
        assert_eq!(data.len(), 256 * 256);
        // row 0 applies the permutation twice
        assert_eq!(data[0], PERMUTATION_256[215]);
        // row 1 shifts the inner lookup by one
        assert_eq!(data[256], PERMUTATION_256[216]);
        assert_eq!(data[255 + 255 * 256], PERMUTATION_256[(255 + 108) & 0xff]);
    }

    #[test]
    fn test_release_empties_everything() {
        let mut renderer = RecordingRenderer::default();
        let descriptor = TextureDescriptor {
            width: 4,
            height: 4,
            format: TextureFormat::Depth16,
            filter: TextureFilter::Linear,
            repeat: false,
            data: None,
        };
        let texture = renderer.create_texture(&descriptor).unwrap();
        let target = renderer.create_offscreen_target(None, Some(texture)).unwrap();
        let buffer = renderer.upload_attribute(&[1.0, 2.0]).unwrap();

        let mut resources = VariantResources {
            perm_texture: None,
            attribute_buffer: Some(buffer),
            shadow_textures: vec![texture],
            shadow_targets: vec![target],
        };
        resources.release(&mut renderer);

        assert!(resources.is_empty());
        assert_eq!(renderer.live_resources(), 0);
    }
}
