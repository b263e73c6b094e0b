use crate::error::Result;
use crate::geometry::Polyline;
use crate::math::Point3;
use crate::topology::{FaceData, FaceId, SceneStore};

/// Creates a face from an outer boundary and optional holes.
pub struct MakeFace {
    outer: Polyline,
    holes: Vec<Polyline>,
}

impl MakeFace {
    /// Creates a new `MakeFace` operation.
    #[must_use]
    pub fn new(outer: Polyline, holes: Vec<Polyline>) -> Self {
        Self { outer, holes }
    }

    /// Creates a face bounded by a single closed contour through `points`.
    #[must_use]
    pub fn polygon(points: Vec<Point3>) -> Self {
        Self::new(Polyline::closed(points), Vec::new())
    }

    /// Executes the operation, inserting the contours and the face into the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the face.
    pub fn execute(&self, store: &mut SceneStore) -> Result<FaceId> {
        let mut contours = Vec::with_capacity(1 + self.holes.len());
        contours.push(store.add_contour(self.outer.clone()));
        for hole in &self.holes {
            contours.push(store.add_contour(hole.clone()));
        }
        Ok(store.add_face(FaceData { contours })?)
    }
}
