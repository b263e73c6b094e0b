use crate::geometry::Polyline;
use crate::math::Point3;
use crate::topology::{ContourId, SceneStore};

/// Creates a contour from a sequence of 3D points.
pub struct MakeContour {
    points: Vec<Point3>,
    close: bool,
}

impl MakeContour {
    /// Creates a new `MakeContour` operation.
    #[must_use]
    pub fn new(points: Vec<Point3>, close: bool) -> Self {
        Self { points, close }
    }

    /// Executes the operation, inserting the contour into the store.
    ///
    /// Contours of any length are accepted; those with fewer than two
    /// points simply contribute no segments.
    pub fn execute(&self, store: &mut SceneStore) -> ContourId {
        store.add_contour(Polyline::new(self.points.clone(), self.close))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn stores_points_and_closed_flag() {
        let mut store = SceneStore::new();
        let pts = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        let id = MakeContour::new(pts.clone(), false).execute(&mut store);
        let pl = store.contour(id).unwrap();
        assert_eq!(pl.points, pts);
        assert!(!pl.closed);
        assert_eq!(pl.segment_count(), 1);
    }

    #[test]
    fn single_point_contour_is_accepted() {
        let mut store = SceneStore::new();
        let id = MakeContour::new(vec![Point3::origin()], true).execute(&mut store);
        assert_eq!(store.contour(id).unwrap().segment_count(), 0);
    }
}
