use crate::error::Result;
use crate::topology::{ObjectData, ObjectId, PartId, SceneStore};

/// Creates a named object from parts.
pub struct MakeObject {
    name: String,
    parts: Vec<PartId>,
}

impl MakeObject {
    /// Creates a new `MakeObject` operation.
    #[must_use]
    pub fn new(name: impl Into<String>, parts: Vec<PartId>) -> Self {
        Self {
            name: name.into(),
            parts,
        }
    }

    /// Executes the operation, creating the object in the store.
    ///
    /// # Errors
    ///
    /// Returns an error if a part is missing or already owned by another object.
    pub fn execute(&self, store: &mut SceneStore) -> Result<ObjectId> {
        Ok(store.add_object(ObjectData {
            name: self.name.clone(),
            parts: self.parts.clone(),
        })?)
    }
}
