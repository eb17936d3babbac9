//! Unit cube, 36 vertices (6 faces x 2 triangles x 3 vertices), wound for
//! back-face culling.
//!
//! Layout per vertex: float4 position, float4 color, float2 uv, interleaved.

/// Byte size of one vertex.
pub const VERTEX_STRIDE: u64 = 4 * 10;
/// Position (x, y, z, w) sits at the start of each vertex.
pub const POSITION_OFFSET: u64 = 0;
/// Color follows the 4 position floats.
pub const COLOR_OFFSET: u64 = 4 * 4;
/// UV follows the 8 position + color floats.
pub const UV_OFFSET: u64 = 4 * 8;
/// Vertex count for one `draw` call.
pub const VERTEX_COUNT: u32 = 36;

/// Floats per vertex.
pub const FLOATS_PER_VERTEX: usize = 10;

#[rustfmt::skip]
pub const VERTICES: [f32; VERTEX_COUNT as usize * FLOATS_PER_VERTEX] = [
    // position           color         uv
     1.0, -1.0,  1.0, 1.0,  1.0, 0.0, 1.0, 1.0,  0.0, 1.0,
    -1.0, -1.0,  1.0, 1.0,  0.0, 0.0, 1.0, 1.0,  1.0, 1.0,
    -1.0, -1.0, -1.0, 1.0,  0.0, 0.0, 0.0, 1.0,  1.0, 0.0,
     1.0, -1.0, -1.0, 1.0,  1.0, 0.0, 0.0, 1.0,  0.0, 0.0,
     1.0, -1.0,  1.0, 1.0,  1.0, 0.0, 1.0, 1.0,  0.0, 1.0,
    -1.0, -1.0, -1.0, 1.0,  0.0, 0.0, 0.0, 1.0,  1.0, 0.0,

     1.0,  1.0,  1.0, 1.0,  1.0, 1.0, 1.0, 1.0,  0.0, 1.0,
     1.0, -1.0,  1.0, 1.0,  1.0, 0.0, 1.0, 1.0,  1.0, 1.0,
     1.0, -1.0, -1.0, 1.0,  1.0, 0.0, 0.0, 1.0,  1.0, 0.0,
     1.0,  1.0, -1.0, 1.0,  1.0, 1.0, 0.0, 1.0,  0.0, 0.0,
     1.0,  1.0,  1.0, 1.0,  1.0, 1.0, 1.0, 1.0,  0.0, 1.0,
     1.0, -1.0, -1.0, 1.0,  1.0, 0.0, 0.0, 1.0,  1.0, 0.0,

    -1.0,  1.0,  1.0, 1.0,  0.0, 1.0, 1.0, 1.0,  0.0, 1.0,
     1.0,  1.0,  1.0, 1.0,  1.0, 1.0, 1.0, 1.0,  1.0, 1.0,
     1.0,  1.0, -1.0, 1.0,  1.0, 1.0, 0.0, 1.0,  1.0, 0.0,
    -1.0,  1.0, -1.0, 1.0,  0.0, 1.0, 0.0, 1.0,  0.0, 0.0,
    -1.0,  1.0,  1.0, 1.0,  0.0, 1.0, 1.0, 1.0,  0.0, 1.0,
     1.0,  1.0, -1.0, 1.0,  1.0, 1.0, 0.0, 1.0,  1.0, 0.0,

    -1.0, -1.0,  1.0, 1.0,  0.0, 0.0, 1.0, 1.0,  0.0, 1.0,
    -1.0,  1.0,  1.0, 1.0,  0.0, 1.0, 1.0, 1.0,  1.0, 1.0,
    -1.0,  1.0, -1.0, 1.0,  0.0, 1.0, 0.0, 1.0,  1.0, 0.0,
    -1.0, -1.0, -1.0, 1.0,  0.0, 0.0, 0.0, 1.0,  0.0, 0.0,
    -1.0, -1.0,  1.0, 1.0,  0.0, 0.0, 1.0, 1.0,  0.0, 1.0,
    -1.0,  1.0, -1.0, 1.0,  0.0, 1.0, 0.0, 1.0,  1.0, 0.0,

     1.0,  1.0,  1.0, 1.0,  1.0, 1.0, 1.0, 1.0,  0.0, 1.0,
    -1.0,  1.0,  1.0, 1.0,  0.0, 1.0, 1.0, 1.0,  1.0, 1.0,
    -1.0, -1.0,  1.0, 1.0,  0.0, 0.0, 1.0, 1.0,  1.0, 0.0,
    -1.0, -1.0,  1.0, 1.0,  0.0, 0.0, 1.0, 1.0,  1.0, 0.0,
     1.0, -1.0,  1.0, 1.0,  1.0, 0.0, 1.0, 1.0,  0.0, 0.0,
     1.0,  1.0,  1.0, 1.0,  1.0, 1.0, 1.0, 1.0,  0.0, 1.0,

     1.0, -1.0, -1.0, 1.0,  1.0, 0.0, 0.0, 1.0,  0.0, 1.0,
    -1.0, -1.0, -1.0, 1.0,  0.0, 0.0, 0.0, 1.0,  1.0, 1.0,
    -1.0,  1.0, -1.0, 1.0,  0.0, 1.0, 0.0, 1.0,  1.0, 0.0,
     1.0,  1.0, -1.0, 1.0,  1.0, 1.0, 0.0, 1.0,  0.0, 0.0,
     1.0, -1.0, -1.0, 1.0,  1.0, 0.0, 0.0, 1.0,  0.0, 1.0,
    -1.0,  1.0, -1.0, 1.0,  0.0, 1.0, 0.0, 1.0,  1.0, 0.0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_length_matches_vertex_count_times_floats_per_vertex() {
        assert_eq!(VERTICES.len(), VERTEX_COUNT as usize * FLOATS_PER_VERTEX);
    }

    #[test]
    fn stride_and_offsets_account_for_every_float() {
        assert_eq!(VERTEX_STRIDE, FLOATS_PER_VERTEX as u64 * 4);
        assert_eq!(POSITION_OFFSET, 0);
        assert_eq!(COLOR_OFFSET, POSITION_OFFSET + 4 * 4);
        assert_eq!(UV_OFFSET, COLOR_OFFSET + 4 * 4);
        assert_eq!(UV_OFFSET + 4 * 2, VERTEX_STRIDE);
    }

    #[test]
    fn positions_are_unit_cube_corners_with_w_one() {
        for vertex in VERTICES.chunks_exact(FLOATS_PER_VERTEX) {
            for coord in &vertex[0..3] {
                assert!(coord.abs() == 1.0, "corner coordinate must be +/-1");
            }
            assert_eq!(vertex[3], 1.0);
        }
    }

    #[test]
    fn colors_and_uvs_are_in_unit_range() {
        for vertex in VERTICES.chunks_exact(FLOATS_PER_VERTEX) {
            for value in &vertex[4..10] {
                assert!((0.0..=1.0).contains(value));
            }
        }
    }
}
