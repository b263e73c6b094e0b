use crate::error::Result;
use crate::topology::{FaceId, PartData, PartId, SceneStore};

/// How the faces of a new part are obtained.
enum Source {
    Faces(Vec<FaceId>),
    Merge(Vec<PartId>),
}

/// Creates a named part from faces, or by folding existing parts into one.
pub struct MakePart {
    name: String,
    source: Source,
}

impl MakePart {
    /// Creates a part that owns the given faces.
    #[must_use]
    pub fn new(name: impl Into<String>, faces: Vec<FaceId>) -> Self {
        Self {
            name: name.into(),
            source: Source::Faces(faces),
        }
    }

    /// Creates a part holding the faces of `parts`, in order.
    ///
    /// The source parts are consumed: they are removed from the store when
    /// the operation runs, so they must not belong to an object yet and each
    /// may be listed only once.
    #[must_use]
    pub fn merge(name: impl Into<String>, parts: Vec<PartId>) -> Self {
        Self {
            name: name.into(),
            source: Source::Merge(parts),
        }
    }

    /// Executes the operation, creating the part in the store.
    ///
    /// # Errors
    ///
    /// Returns an error if a face or source part is missing or already owned.
    pub fn execute(&self, store: &mut SceneStore) -> Result<PartId> {
        let faces = match &self.source {
            Source::Faces(faces) => faces.clone(),
            Source::Merge(parts) => {
                // Validate every source first so a failure leaves the store untouched.
                store.check_free_parts(parts)?;
                let mut faces = Vec::new();
                for &p in parts {
                    faces.extend(store.take_part(p)?.faces);
                }
                faces
            }
        };
        Ok(store.add_part(PartData {
            name: self.name.clone(),
            faces,
        })?)
    }
}
