//! Hard-coded cube geometry.

use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct CubeVertex {
    pub pos: [f32; 3],
}

impl CubeVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CubeVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const fn v(x: f32, y: f32, z: f32) -> CubeVertex {
    CubeVertex { pos: [x, y, z] }
}

/// Corners of a 2×2×2 cube centered on the origin. Front face (z = +1) first.
pub const CUBE_VERTICES: [CubeVertex; 8] = [
    v(-1.0, -1.0, 1.0),
    v(-1.0, 1.0, 1.0),
    v(1.0, 1.0, 1.0),
    v(1.0, -1.0, 1.0),
    v(-1.0, -1.0, -1.0),
    v(-1.0, 1.0, -1.0),
    v(1.0, 1.0, -1.0),
    v(1.0, -1.0, -1.0),
];

/// Front, left, back and right faces, two triangles each.
///
/// Top and bottom are not part of the mesh; they are never facing the camera
/// while the cube spins about Y.
pub const CUBE_INDICES: [u32; 24] = [
    0, 1, 2, 0, 2, 3, // front
    4, 5, 1, 4, 1, 0, // left
    7, 6, 5, 7, 5, 4, // back
    3, 2, 6, 3, 6, 7, // right
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_reference_existing_vertices() {
        assert!(CUBE_INDICES.iter().all(|&i| (i as usize) < CUBE_VERTICES.len()));
    }

    #[test]
    fn every_vertex_is_used() {
        for i in 0..CUBE_VERTICES.len() as u32 {
            assert!(CUBE_INDICES.contains(&i), "vertex {i} unused");
        }
    }

    #[test]
    fn each_face_lies_on_one_plane() {
        // (axis, value) of the four faces, in index order.
        let faces = [(2, 1.0), (0, -1.0), (2, -1.0), (0, 1.0)];
        for (face, (axis, value)) in CUBE_INDICES.chunks(6).zip(faces) {
            for &i in face {
                assert_eq!(CUBE_VERTICES[i as usize].pos[axis], value);
            }
        }
    }

    #[test]
    fn vertex_stride_is_three_floats() {
        assert_eq!(CubeVertex::layout().array_stride, 12);
    }
}
