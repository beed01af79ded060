/// Wireframe cube model: corners, edges and centroid
use nalgebra::{Point3, Vector3};

use crate::error::{Error, Result};
use crate::rotation::Rotation;

/// Lower corner coordinate on every axis
pub const CUBE_MIN: f64 = 200.0;
/// Upper corner coordinate on every axis
pub const CUBE_MAX: f64 = 800.0;

/// Corner index pairs, bottom face (z = min), top face (z = max), then verticals.
/// Corner `i` takes x from bit 0, y from bit 1 and z from bit 2.
const EDGE_INDICES: [(usize, usize); 12] = [
    (0, 1),
    (0, 2),
    (1, 3),
    (2, 3),
    (4, 5),
    (4, 6),
    (5, 7),
    (6, 7),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// A line segment of the wireframe. Each edge owns copies of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Point3<f64>,
    pub end: Point3<f64>,
}

impl Edge {
    pub fn new(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Undirected comparison: true when both edges cover the same segment.
    pub fn same_segment(&self, other: &Edge) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }

    /// Rotate both endpoints about `pivot`
    pub fn rotated(&self, rotation: &Rotation, pivot: &Point3<f64>) -> Edge {
        Edge {
            start: rotation.apply(&self.start, pivot),
            end: rotation.apply(&self.end, pivot),
        }
    }
}

/// The 8 corners of the axis-aligned cube spanning `[CUBE_MIN, CUBE_MAX]` on each axis
pub fn build_corners() -> [Point3<f64>; 8] {
    let coord = |bit: bool| if bit { CUBE_MAX } else { CUBE_MIN };
    std::array::from_fn(|i| Point3::new(coord(i & 1 != 0), coord(i & 2 != 0), coord(i & 4 != 0)))
}

/// The 12 cube edges built from `build_corners` ordering
pub fn build_edges(corners: &[Point3<f64>; 8]) -> [Edge; 12] {
    EDGE_INDICES.map(|(a, b)| Edge::new(corners[a], corners[b]))
}

/// Arithmetic mean of `vertices`, per axis
pub fn compute_centroid(vertices: &[Point3<f64>]) -> Result<Point3<f64>> {
    if vertices.is_empty() {
        return Err(Error::EmptyVertexSet);
    }

    Ok(mean(vertices))
}

fn mean(vertices: &[Point3<f64>]) -> Point3<f64> {
    let sum = vertices
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Point3::from(sum / vertices.len() as f64)
}

/// Immutable cube geometry, built once at startup.
///
/// The centroid is derived from the corners at construction; since the
/// corner set never changes afterwards it is never recomputed.
#[derive(Debug, Clone)]
pub struct CubeModel {
    corners: [Point3<f64>; 8],
    edges: [Edge; 12],
    centroid: Point3<f64>,
}

impl CubeModel {
    pub fn new() -> Self {
        let corners = build_corners();
        let edges = build_edges(&corners);
        let centroid = mean(&corners);

        Self {
            corners,
            edges,
            centroid,
        }
    }

    pub fn corners(&self) -> &[Point3<f64>; 8] {
        &self.corners
    }

    pub fn edges(&self) -> &[Edge; 12] {
        &self.edges
    }

    pub fn centroid(&self) -> Point3<f64> {
        self.centroid
    }
}

impl Default for CubeModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_cover_every_combination() {
        let corners = build_corners();
        for x in [CUBE_MIN, CUBE_MAX] {
            for y in [CUBE_MIN, CUBE_MAX] {
                for z in [CUBE_MIN, CUBE_MAX] {
                    let target = Point3::new(x, y, z);
                    assert_eq!(corners.iter().filter(|c| **c == target).count(), 1);
                }
            }
        }
    }

    #[test]
    fn test_centroid_is_cube_center() {
        let centroid = compute_centroid(&build_corners()).unwrap();
        assert_eq!(centroid, Point3::new(500.0, 500.0, 500.0));
        assert_eq!(CubeModel::new().centroid(), centroid);
    }

    #[test]
    fn test_centroid_of_empty_set() {
        assert_eq!(compute_centroid(&[]), Err(Error::EmptyVertexSet));
    }

    #[test]
    fn test_edges_form_complete_wireframe() {
        let corners = build_corners();
        let edges = build_edges(&corners);
        assert_eq!(edges.len(), 12);

        // Every corner touches exactly three edges
        for corner in &corners {
            let touching = edges
                .iter()
                .filter(|e| e.start == *corner || e.end == *corner)
                .count();
            assert_eq!(touching, 3);
        }

        // No duplicates, compared undirected
        for (i, a) in edges.iter().enumerate() {
            for b in &edges[i + 1..] {
                assert!(!a.same_segment(b));
            }
        }

        // Each edge is axis-aligned and spans the full side
        for edge in &edges {
            let delta = edge.end - edge.start;
            let changed = delta.iter().filter(|d| d.abs() > 0.0).count();
            assert_eq!(changed, 1);
            assert!((edge.length() - (CUBE_MAX - CUBE_MIN)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_edge_order_bottom_top_vertical() {
        let edges = *CubeModel::new().edges();
        assert!(edges[..4]
            .iter()
            .all(|e| e.start.z == CUBE_MIN && e.end.z == CUBE_MIN));
        assert!(edges[4..8]
            .iter()
            .all(|e| e.start.z == CUBE_MAX && e.end.z == CUBE_MAX));
        assert!(edges[8..].iter().all(|e| e.start.z != e.end.z));
    }

    #[test]
    fn test_every_face_has_four_edges() {
        let edges = build_edges(&build_corners());
        for axis in 0..3 {
            for value in [CUBE_MIN, CUBE_MAX] {
                let on_face = edges
                    .iter()
                    .filter(|e| e.start[axis] == value && e.end[axis] == value)
                    .count();
                assert_eq!(on_face, 4);
            }
        }
    }
}
