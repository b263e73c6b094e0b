use crate::error::Result;
use crate::geometry::Segment;
use crate::topology::{PartId, SceneStore};

/// Collects every segment of a part: each contour of each face, in order.
///
/// Shared edges between faces are reported once per face; no deduplication
/// happens here.
pub struct PartEdges {
    part: PartId,
}

impl PartEdges {
    /// Creates a new `PartEdges` query.
    #[must_use]
    pub fn new(part: PartId) -> Self {
        Self { part }
    }

    /// Appends the part's segments to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if the part or one of its faces or contours is missing.
    pub fn collect_into(&self, store: &SceneStore, out: &mut Vec<Segment>) -> Result<()> {
        let part = store.part(self.part)?;
        for &face_id in &part.faces {
            for &contour_id in &store.face(face_id)?.contours {
                out.extend(store.contour(contour_id)?.segments());
            }
        }
        Ok(())
    }

    /// Executes the query, returning the segments.
    ///
    /// # Errors
    ///
    /// Returns an error if the part or one of its faces or contours is missing.
    pub fn execute(&self, store: &SceneStore) -> Result<Vec<Segment>> {
        let mut out = Vec::new();
        self.collect_into(store, &mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Polyline;
    use crate::math::Point3;
    use crate::operations::creation::{MakeFace, MakePart};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn walks_faces_then_contours_in_order() {
        let mut store = SceneStore::new();
        let outer = Polyline::closed(vec![p(0.0, 0.0, 0.0), p(3.0, 0.0, 0.0), p(0.0, 3.0, 0.0)]);
        let hole = Polyline::open(vec![p(0.5, 0.5, 0.0), p(1.0, 0.5, 0.0)]);
        let f1 = MakeFace::new(outer, vec![hole]).execute(&mut store).unwrap();
        let f2 = MakeFace::polygon(vec![p(0.0, 0.0, 1.0), p(1.0, 0.0, 1.0)])
            .execute(&mut store)
            .unwrap();
        let part = MakePart::new("Mixed", vec![f1, f2]).execute(&mut store).unwrap();

        let segs = PartEdges::new(part).execute(&store).unwrap();
        assert_eq!(
            segs,
            vec![
                (p(0.0, 0.0, 0.0), p(3.0, 0.0, 0.0)),
                (p(3.0, 0.0, 0.0), p(0.0, 3.0, 0.0)),
                (p(0.0, 3.0, 0.0), p(0.0, 0.0, 0.0)),
                (p(0.5, 0.5, 0.0), p(1.0, 0.5, 0.0)),
                (p(0.0, 0.0, 1.0), p(1.0, 0.0, 1.0)),
                (p(1.0, 0.0, 1.0), p(0.0, 0.0, 1.0)),
            ]
        );
    }

    #[test]
    fn empty_part_has_no_segments() {
        let mut store = SceneStore::new();
        let part = MakePart::new("Nothing", vec![]).execute(&mut store).unwrap();
        assert!(PartEdges::new(part).execute(&store).unwrap().is_empty());
    }
}
