/// Fixed cube geometry: 8 corner vertices and the 12 edges joining them
use nalgebra::Point3;

/// Half the cube's side length; the cube is centered on the origin.
pub const CUBE_HALF_EXTENT: f64 = 80.0;

/// Number of cube corners.
pub const CUBE_VERTEX_COUNT: usize = 8;

const S: f64 = CUBE_HALF_EXTENT;

/// Corner coordinates, back face (z = -s) first, then front face (z = s).
const CUBE_CORNERS: [[f64; 3]; CUBE_VERTEX_COUNT] = [
    [-S, -S, -S],
    [S, -S, -S],
    [S, S, -S],
    [-S, S, -S],
    [-S, -S, S],
    [S, -S, S],
    [S, S, S],
    [-S, S, S],
];

/// The 12 cube edges as vertex-index pairs: back face ring, front face
/// ring, then the four connectors between the faces.
pub const CUBE_EDGES: [[usize; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// The cube's corner vertices in index order.
pub fn cube_vertices() -> [Point3<f64>; CUBE_VERTEX_COUNT] {
    CUBE_CORNERS.map(|[x, y, z]| Point3::new(x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_reference_valid_vertices() {
        for edge in CUBE_EDGES {
            assert!(edge[0] < CUBE_VERTEX_COUNT);
            assert!(edge[1] < CUBE_VERTEX_COUNT);
        }
    }

    #[test]
    fn test_no_orphan_vertex() {
        let mut touched = [false; CUBE_VERTEX_COUNT];
        for [a, b] in CUBE_EDGES {
            touched[a] = true;
            touched[b] = true;
        }
        assert!(touched.iter().all(|&t| t));
    }

    #[test]
    fn test_every_corner_on_cube_surface() {
        for v in cube_vertices() {
            assert_eq!(v.x.abs(), CUBE_HALF_EXTENT);
            assert_eq!(v.y.abs(), CUBE_HALF_EXTENT);
            assert_eq!(v.z.abs(), CUBE_HALF_EXTENT);
        }
    }
}
