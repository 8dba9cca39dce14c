//! Fixed cube geometry
//!
//! Eight corners, one RGBA color per corner, and a 36-entry index list
//! (12 triangles, 6 faces x 2 triangles). All of it is immutable and
//! uploaded to the GPU once at initialization.

/// Cube corner positions, 3 floats per vertex (12-byte stride on the GPU).
pub const CUBE_POSITIONS: [[f32; 3]; 8] = [
    [-0.5, -0.5, 0.5],  // 0: front bottom left
    [0.5, -0.5, 0.5],   // 1: front bottom right
    [0.5, 0.5, 0.5],    // 2: front top right
    [-0.5, 0.5, 0.5],   // 3: front top left
    [-0.5, -0.5, -0.5], // 4: back bottom left
    [0.5, -0.5, -0.5],  // 5: back bottom right
    [0.5, 0.5, -0.5],   // 6: back top right
    [-0.5, 0.5, -0.5],  // 7: back top left
];

/// Per-vertex RGBA colors, 4 floats per vertex (16-byte stride on the GPU).
pub const CUBE_COLORS: [[f32; 4]; 8] = [
    [1.0, 0.0, 0.0, 1.0], // red
    [0.0, 1.0, 0.0, 1.0], // green
    [0.0, 0.0, 1.0, 1.0], // blue
    [1.0, 1.0, 0.0, 1.0], // yellow
    [0.0, 1.0, 1.0, 1.0], // cyan
    [1.0, 0.0, 1.0, 1.0], // magenta
    [1.0, 1.0, 1.0, 1.0], // white
    [0.5, 0.5, 0.5, 1.0], // gray
];

/// Triangle list indices, counter-clockwise winding seen from outside.
///
/// wgpu has no 8-bit index format, so `IndexFormat::Uint16` is the
/// smallest available type for the draw call.
pub const CUBE_INDICES: [u16; 36] = [
    0, 1, 2, 0, 2, 3, // front (+z)
    1, 5, 6, 1, 6, 2, // right (+x)
    5, 4, 7, 5, 7, 6, // back (-z)
    4, 0, 3, 4, 3, 7, // left (-x)
    3, 2, 6, 3, 6, 7, // top (+y)
    4, 5, 1, 4, 1, 0, // bottom (-y)
];

/// Number of indices submitted by the cube draw call.
pub const CUBE_INDEX_COUNT: u32 = CUBE_INDICES.len() as u32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_counts() {
        assert_eq!(CUBE_POSITIONS.len(), 8);
        assert_eq!(CUBE_COLORS.len(), 8);
        assert_eq!(CUBE_INDICES.len(), 36);
        assert_eq!(CUBE_INDEX_COUNT, 36);
    }

    #[test]
    fn test_indices_in_range() {
        for &i in CUBE_INDICES.iter() {
            assert!((i as usize) < CUBE_POSITIONS.len(), "index {} out of range", i);
        }
    }

    #[test]
    fn test_triangles_not_degenerate() {
        for tri in CUBE_INDICES.chunks(3) {
            assert_ne!(tri[0], tri[1]);
            assert_ne!(tri[1], tri[2]);
            assert_ne!(tri[0], tri[2]);
        }
    }

    #[test]
    fn test_every_corner_referenced() {
        // Each cube corner belongs to three faces
        let mut counts = [0u32; 8];
        for &i in CUBE_INDICES.iter() {
            counts[i as usize] += 1;
        }
        for (corner, &count) in counts.iter().enumerate() {
            assert!(count >= 3, "corner {} referenced only {} times", corner, count);
        }
    }

    #[test]
    fn test_positions_are_unit_cube_corners() {
        for pos in CUBE_POSITIONS.iter() {
            for &c in pos.iter() {
                assert!(c == 0.5 || c == -0.5);
            }
        }
        // All 8 corners are distinct
        for (i, a) in CUBE_POSITIONS.iter().enumerate() {
            for b in CUBE_POSITIONS.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
