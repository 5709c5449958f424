//! CPU-side mesh data for the demo geometry.

/// Triangle-strip mesh with per-vertex color and UV attributes, indices as
/// `u8` (the demo geometry never exceeds 255 vertices).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StripMesh {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 4]>,
    pub uvs: Vec<[f32; 2]>,
    /// Strip order, with degenerate triangles bridging between faces.
    pub indices: Vec<u8>,
}

impl StripMesh {
    /// Returns `true` if all attribute arrays agree in length and every
    /// index is in range.
    pub fn is_valid(&self) -> bool {
        let n = self.positions.len();
        n > 0
            && self.colors.len() == n
            && self.uvs.len() == n
            && !self.indices.is_empty()
            && self.indices.iter().all(|&i| (i as usize) < n)
    }
}

/// Unit cube centered at the origin, four vertices per face so each face
/// carries its own colors and UVs. Faces are strip-ordered:
///
/// ```text
/// 2 ----- 3
/// | \     |
/// |   \   |
/// 0 ----- 1
/// ```
pub fn cube() -> StripMesh {
    #[rustfmt::skip]
    let positions = vec![
        // Front.
        [-0.5, -0.5,  0.5], [ 0.5, -0.5,  0.5], [-0.5,  0.5,  0.5], [ 0.5,  0.5,  0.5],
        // Right.
        [ 0.5, -0.5,  0.5], [ 0.5, -0.5, -0.5], [ 0.5,  0.5,  0.5], [ 0.5,  0.5, -0.5],
        // Back.
        [ 0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [ 0.5,  0.5, -0.5], [-0.5,  0.5, -0.5],
        // Left.
        [-0.5, -0.5, -0.5], [-0.5, -0.5,  0.5], [-0.5,  0.5, -0.5], [-0.5,  0.5,  0.5],
        // Top.
        [-0.5,  0.5,  0.5], [ 0.5,  0.5,  0.5], [-0.5,  0.5, -0.5], [ 0.5,  0.5, -0.5],
        // Bottom.
        [-0.5, -0.5, -0.5], [ 0.5, -0.5, -0.5], [-0.5, -0.5,  0.5], [ 0.5, -0.5,  0.5],
    ];

    #[rustfmt::skip]
    let colors = vec![
        // Front.
        [0.0, 0.0, 0.0, 1.0], [1.0, 0.0, 0.0, 1.0], [0.0, 1.0, 0.0, 1.0], [1.0, 1.0, 0.0, 1.0],
        // Right.
        [1.0, 0.0, 0.0, 1.0], [0.0, 0.0, 1.0, 1.0], [1.0, 1.0, 0.0, 1.0], [0.0, 1.0, 1.0, 1.0],
        // Back.
        [0.0, 0.0, 1.0, 1.0], [1.0, 0.0, 1.0, 1.0], [0.0, 1.0, 1.0, 1.0], [1.0, 1.0, 1.0, 1.0],
        // Left.
        [1.0, 0.0, 1.0, 1.0], [0.0, 0.0, 0.0, 1.0], [1.0, 1.0, 1.0, 1.0], [0.0, 1.0, 0.0, 1.0],
        // Top.
        [0.0, 1.0, 0.0, 1.0], [1.0, 1.0, 0.0, 1.0], [1.0, 1.0, 1.0, 1.0], [0.0, 1.0, 1.0, 1.0],
        // Bottom.
        [1.0, 0.0, 1.0, 1.0], [0.0, 0.0, 1.0, 1.0], [0.0, 0.0, 0.0, 1.0], [1.0, 0.0, 0.0, 1.0],
    ];

    // Same quad corner order on every face.
    let uvs = (0..6)
        .flat_map(|_| [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]])
        .collect();

    #[rustfmt::skip]
    let indices = vec![
        0, 1, 2, 3,   3, 4,   4, 5, 6, 7,   7, 8,   8, 9, 10, 11,
        11, 12,   12, 13, 14, 15,   15, 16,   16, 17, 18, 19,   19, 20,   20, 21, 22, 23,
    ];

    StripMesh {
        positions,
        colors,
        uvs,
        indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_mesh_is_valid() {
        let m = cube();
        assert!(m.is_valid());
        assert_eq!(m.positions.len(), 24);
        assert_eq!(m.colors.len(), 24);
        assert_eq!(m.uvs.len(), 24);
    }

    #[test]
    fn cube_is_a_unit_cube_around_the_origin() {
        for p in cube().positions {
            for c in p {
                assert_eq!(c.abs(), 0.5);
            }
        }
    }

    #[test]
    fn strip_visits_every_vertex() {
        let m = cube();
        for v in 0..m.positions.len() as u8 {
            assert!(m.indices.contains(&v), "vertex {v} unused");
        }
    }

    #[test]
    fn empty_mesh_is_invalid() {
        assert!(!StripMesh::default().is_valid());
    }
}
