//! Cube model geometry
//!
//! A cube has 8 vertices and 12 edges. The vertices are the rest pose and are
//! never modified; every frame rotates a fresh copy.

use quatcube_math::{Quaternion, Vec3};

/// Vertex index pairs for the 12 cube edges
///
/// Top face ring, bottom face ring, then the four verticals.
pub const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 2), (2, 3), (3, 0),
    (4, 5), (5, 6), (6, 7), (7, 4),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

/// A cube centered at the origin, in its rest pose
#[derive(Clone, Debug)]
pub struct CubeModel {
    /// Half the edge length
    half_len: f32,
    /// The 8 rest-pose vertices
    vertices: [Vec3; 8],
}

impl CubeModel {
    /// Create a cube centered at origin with the given edge length
    pub fn new(edge_len: f32) -> Self {
        let h = edge_len * 0.5;

        // 0-3: +y face, 4-7: -y face, both wound the same way
        let vertices = [
            Vec3::new(-h,  h,  h),
            Vec3::new( h,  h,  h),
            Vec3::new( h,  h, -h),
            Vec3::new(-h,  h, -h),
            Vec3::new(-h, -h,  h),
            Vec3::new( h, -h,  h),
            Vec3::new( h, -h, -h),
            Vec3::new(-h, -h, -h),
        ];

        Self { half_len: h, vertices }
    }

    /// Full edge length
    #[inline]
    pub fn edge_len(&self) -> f32 {
        self.half_len * 2.0
    }

    /// Rest-pose vertices
    #[inline]
    pub fn vertices(&self) -> &[Vec3; 8] {
        &self.vertices
    }

    /// Edge connectivity
    #[inline]
    pub fn edges(&self) -> &'static [(usize, usize); 12] {
        &CUBE_EDGES
    }

    /// Rest pose rotated by a unit orientation
    pub fn posed(&self, orientation: Quaternion) -> [Vec3; 8] {
        self.vertices.map(|v| orientation.rotate(v))
    }
}

impl Default for CubeModel {
    fn default() -> Self {
        Self::new(10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertices_on_corners() {
        let cube = CubeModel::new(10.0);
        for v in cube.vertices() {
            assert_eq!(v.x.abs(), 5.0);
            assert_eq!(v.y.abs(), 5.0);
            assert_eq!(v.z.abs(), 5.0);
        }
        assert_eq!(cube.edge_len(), 10.0);
    }

    #[test]
    fn test_vertices_distinct() {
        let cube = CubeModel::new(2.0);
        let verts = cube.vertices();
        for i in 0..8 {
            for j in (i + 1)..8 {
                assert_ne!(verts[i], verts[j], "vertices {} and {} coincide", i, j);
            }
        }
    }

    #[test]
    fn test_edges_have_cube_edge_length() {
        let cube = CubeModel::new(10.0);
        let verts = cube.vertices();
        for &(a, b) in cube.edges() {
            let len = (verts[a] - verts[b]).length();
            assert!((len - 10.0).abs() < 1e-5, "edge ({}, {}) has length {}", a, b, len);
        }
    }

    #[test]
    fn test_every_vertex_has_three_edges() {
        let mut degree = [0; 8];
        for &(a, b) in &CUBE_EDGES {
            degree[a] += 1;
            degree[b] += 1;
        }
        assert_eq!(degree, [3; 8]);
    }

    #[test]
    fn test_posed_does_not_touch_rest_pose() {
        let cube = CubeModel::default();
        let rest = *cube.vertices();
        let q = Quaternion::from_axis_angle(Vec3::Y, 0.5);

        let first = cube.posed(q);
        let second = cube.posed(q);

        assert_eq!(first, second);
        assert_eq!(*cube.vertices(), rest);
    }

    #[test]
    fn test_posed_identity() {
        let cube = CubeModel::default();
        assert_eq!(cube.posed(Quaternion::IDENTITY), *cube.vertices());
    }
}
