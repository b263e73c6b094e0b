use crate::error::Result;
use crate::geometry::Segment;
use crate::topology::{ObjectId, SceneStore};

use super::PartEdges;

/// Collects every segment of an object by concatenating its parts' segments.
pub struct ObjectEdges {
    object: ObjectId,
}

impl ObjectEdges {
    /// Creates a new `ObjectEdges` query.
    #[must_use]
    pub fn new(object: ObjectId) -> Self {
        Self { object }
    }

    /// Appends the object's segments to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if the object or anything beneath it is missing.
    pub fn collect_into(&self, store: &SceneStore, out: &mut Vec<Segment>) -> Result<()> {
        for &part in &store.object(self.object)?.parts {
            PartEdges::new(part).collect_into(store, out)?;
        }
        Ok(())
    }

    /// Executes the query, returning the segments.
    ///
    /// # Errors
    ///
    /// Returns an error if the object or anything beneath it is missing.
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
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::{MakeBox, MakeObject};

    #[test]
    fn concatenates_parts_in_order() {
        let mut store = SceneStore::new();
        let a = MakeBox::new("A", Point3::origin(), Vector3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let b = MakeBox::new("B", Point3::new(5.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let obj = MakeObject::new("Pair", vec![a, b]).execute(&mut store).unwrap();

        let segs = ObjectEdges::new(obj).execute(&store).unwrap();
        let mut expected = PartEdges::new(a).execute(&store).unwrap();
        expected.extend(PartEdges::new(b).execute(&store).unwrap());
        assert_eq!(segs.len(), 48);
        assert_eq!(segs, expected);
    }
}
