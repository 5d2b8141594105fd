//! Cube geometry: 36 vertices (six faces, two triangles each)
//!
//! One flat array per attribute; the engine's vertex buffers hold exactly
//! one attribute's data each, so positions, texture coordinates and normals
//! stay separate rather than interleaved.

/// Vertex positions for a unit cube centered on the origin
pub const POSITIONS: [f32; 108] = [
    -0.5, -0.5, -0.5, //
    0.5, -0.5, -0.5, //
    0.5, 0.5, -0.5, //
    0.5, 0.5, -0.5, //
    -0.5, 0.5, -0.5, //
    -0.5, -0.5, -0.5, //
    //
    -0.5, -0.5, 0.5, //
    0.5, -0.5, 0.5, //
    0.5, 0.5, 0.5, //
    0.5, 0.5, 0.5, //
    -0.5, 0.5, 0.5, //
    -0.5, -0.5, 0.5, //
    //
    -0.5, 0.5, 0.5, //
    -0.5, 0.5, -0.5, //
    -0.5, -0.5, -0.5, //
    -0.5, -0.5, -0.5, //
    -0.5, -0.5, 0.5, //
    -0.5, 0.5, 0.5, //
    //
    0.5, 0.5, 0.5, //
    0.5, 0.5, -0.5, //
    0.5, -0.5, -0.5, //
    0.5, -0.5, -0.5, //
    0.5, -0.5, 0.5, //
    0.5, 0.5, 0.5, //
    //
    -0.5, -0.5, -0.5, //
    0.5, -0.5, -0.5, //
    0.5, -0.5, 0.5, //
    0.5, -0.5, 0.5, //
    -0.5, -0.5, 0.5, //
    -0.5, -0.5, -0.5, //
    //
    -0.5, 0.5, -0.5, //
    0.5, 0.5, -0.5, //
    0.5, 0.5, 0.5, //
    0.5, 0.5, 0.5, //
    -0.5, 0.5, 0.5, //
    -0.5, 0.5, -0.5, //
];

/// Texture coordinates, one pair per cube vertex
pub const TEX_COORDS: [f32; 72] = [
    0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0, //
    1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, //
    1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, //
    0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, //
    0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, //
];

/// Face normals, one per cube vertex
pub const NORMALS: [f32; 108] = [
    0.0, 0.0, -1.0, 0.0, 0.0, -1.0, 0.0, 0.0, -1.0, //
    0.0, 0.0, -1.0, 0.0, 0.0, -1.0, 0.0, 0.0, -1.0, //
    0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, //
    0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, //
    -1.0, 0.0, 0.0, -1.0, 0.0, 0.0, -1.0, 0.0, 0.0, //
    -1.0, 0.0, 0.0, -1.0, 0.0, 0.0, -1.0, 0.0, 0.0, //
    1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, //
    1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, //
    0.0, -1.0, 0.0, 0.0, -1.0, 0.0, 0.0, -1.0, 0.0, //
    0.0, -1.0, 0.0, 0.0, -1.0, 0.0, 0.0, -1.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, //
];

/// Quad indices attached to the cube's binding
///
/// The demo draws the cube in array mode, so these are uploaded but never
/// consulted by the draw call; they exercise the index-buffer path.
pub const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

/// Number of vertices drawn per cube
pub const VERTEX_COUNT: i32 = 36;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_arrays_describe_36_vertices() {
        assert_eq!(POSITIONS.len(), 36 * 3);
        assert_eq!(TEX_COORDS.len(), 36 * 2);
        assert_eq!(NORMALS.len(), 36 * 3);
        assert_eq!(VERTEX_COUNT, 36);
    }

    #[test]
    fn cube_draws_twelve_triangles() {
        assert_eq!(VERTEX_COUNT % 3, 0);
        assert_eq!(VERTEX_COUNT / 3, 12);
    }

    #[test]
    fn positions_stay_on_the_unit_cube() {
        for chunk in POSITIONS.chunks_exact(3) {
            for &coord in chunk {
                assert!(coord == 0.5 || coord == -0.5);
            }
        }
    }

    #[test]
    fn normals_are_unit_axis_vectors() {
        use approx::assert_relative_eq;
        for chunk in NORMALS.chunks_exact(3) {
            let len = (chunk[0] * chunk[0] + chunk[1] * chunk[1] + chunk[2] * chunk[2]).sqrt();
            assert_relative_eq!(len, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn tex_coords_are_normalized() {
        for &uv in &TEX_COORDS {
            assert!((0.0..=1.0).contains(&uv));
        }
    }
}
