use crate::field::{find_field, PointField};
use crate::traits::{HasPosition, PointAccessor, PointRecord};

/// Array-of-records point cloud.
///
/// `width * height == points.len()`. Clouds with `height > 1` are organized:
/// position `k` maps to row `k / width`, column `k % width`. `is_dense` is
/// true when no point has a non-finite coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud<P> {
    pub points: Vec<P>,
    pub width: usize,
    pub height: usize,
    pub is_dense: bool,
}

impl<P: PointRecord> PointCloud<P> {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            width: 0,
            height: 1,
            is_dense: true,
        }
    }

    pub fn from_points(points: Vec<P>) -> Self {
        let is_dense = all_finite(&points);
        Self {
            width: points.len(),
            height: 1,
            points,
            is_dense,
        }
    }

    pub fn organized(width: usize, height: usize, points: Vec<P>) -> Self {
        assert_eq!(
            width * height,
            points.len(),
            "organized cloud must have width * height points"
        );
        let is_dense = all_finite(&points);
        Self {
            points,
            width,
            height,
            is_dense,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_organized(&self) -> bool {
        self.height > 1
    }

    pub fn iter_points(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.points.iter().map(HasPosition::position)
    }

    /// Copies the points at `indices` into a new unorganized cloud.
    pub fn select(&self, indices: &[usize]) -> Self {
        let mut points = Vec::with_capacity(indices.len());
        for &idx in indices {
            assert!(idx < self.len(), "index out of bounds in select");
            points.push(self.points[idx]);
        }

        Self {
            width: points.len(),
            height: 1,
            points,
            is_dense: self.is_dense,
        }
    }
}

impl<P: PointRecord + From<[f32; 3]>> PointCloud<P> {
    pub fn from_xyz(x: Vec<f32>, y: Vec<f32>, z: Vec<f32>) -> Self {
        assert_eq!(x.len(), y.len(), "x and y must have same length");
        assert_eq!(x.len(), z.len(), "x and z must have same length");

        let points = x
            .into_iter()
            .zip(y)
            .zip(z)
            .map(|((x, y), z)| P::from([x, y, z]))
            .collect();
        Self::from_points(points)
    }
}

impl<P: PointRecord> Default for PointCloud<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PointRecord> PointAccessor for PointCloud<P> {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn position(&self, i: usize) -> [f32; 3] {
        self.points[i].position()
    }

    fn set_position(&mut self, i: usize, p: [f32; 3]) {
        self.points[i].set_position(p);
    }

    fn field(&self, name: &str) -> Option<&PointField> {
        find_field(P::FIELDS, name)
    }

    fn record_bytes(&self, i: usize) -> &[u8] {
        bytemuck::bytes_of(&self.points[i])
    }

    fn is_dense(&self) -> bool {
        self.is_dense
    }

    fn set_dense(&mut self, dense: bool) {
        self.is_dense = dense;
    }

    fn select(&self, indices: &[usize]) -> Self {
        PointCloud::select(self, indices)
    }
}

fn all_finite<P: HasPosition>(points: &[P]) -> bool {
    points
        .iter()
        .all(|p| p.position().iter().all(|v| v.is_finite()))
}
