mod desktop_pc;

pub use desktop_pc::DESKTOP_PC;

use crate::error::{Result, TopologyError};
use crate::math::{Point3, Vector3};
use crate::operations::creation::{MakeBox, MakeObject, MakePart};
use crate::tessellation::{FlattenParams, FlattenScene, LineBuffer};
use crate::topology::{ObjectData, ObjectId, PartId, SceneStore};

/// A finished, read-only scene: a store plus the ordered list of its objects.
///
/// Scenes are assembled with a [`SceneBuilder`] and offer no way to change
/// their geometry afterwards.
#[derive(Debug)]
pub struct Scene {
    store: SceneStore,
    objects: Vec<ObjectId>,
}

impl Scene {
    /// Returns the objects of this scene, in insertion order.
    #[must_use]
    pub fn objects(&self) -> &[ObjectId] {
        &self.objects
    }

    /// Returns the store holding the scene graph.
    #[must_use]
    pub fn store(&self) -> &SceneStore {
        &self.store
    }

    /// Returns the first object with the given name.
    #[must_use]
    pub fn object_by_name(&self, name: &str) -> Option<(ObjectId, &ObjectData)> {
        self.objects.iter().find_map(|&id| {
            self.store
                .object(id)
                .ok()
                .filter(|data| data.name == name)
                .map(|data| (id, data))
        })
    }

    /// Flattens the scene into unique edges with default parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene graph is inconsistent.
    pub fn flatten(&self) -> Result<LineBuffer> {
        FlattenScene::new(self).execute()
    }

    /// Flattens the scene into unique edges with custom parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or the scene graph is
    /// inconsistent.
    pub fn flatten_with(&self, params: FlattenParams) -> Result<LineBuffer> {
        FlattenScene::new(self).with_params(params).execute()
    }
}

/// Assembles a [`Scene`].
#[derive(Debug, Default)]
pub struct SceneBuilder {
    store: SceneStore,
    objects: Vec<ObjectId>,
}

impl SceneBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gives mutable access to the store for creation operations.
    pub fn store_mut(&mut self) -> &mut SceneStore {
        &mut self.store
    }

    /// Adds a box part.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the part.
    pub fn add_box(
        &mut self,
        name: impl Into<String>,
        center: Point3,
        size: Vector3,
    ) -> Result<PartId> {
        MakeBox::new(name, center, size).execute(&mut self.store)
    }

    /// Folds existing parts into one named part.
    ///
    /// # Errors
    ///
    /// Returns an error if a source part is missing or already in an object.
    pub fn merge_parts(&mut self, name: impl Into<String>, parts: Vec<PartId>) -> Result<PartId> {
        MakePart::merge(name, parts).execute(&mut self.store)
    }

    /// Creates an object from parts and adds it to the scene.
    ///
    /// # Errors
    ///
    /// Returns an error if a part is missing or already belongs to an object.
    pub fn add_object(&mut self, name: impl Into<String>, parts: Vec<PartId>) -> Result<ObjectId> {
        let id = MakeObject::new(name, parts).execute(&mut self.store)?;
        self.objects.push(id);
        Ok(id)
    }

    /// Adds an object that was created directly in the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the object is missing or already in the scene.
    pub fn push_object(&mut self, id: ObjectId) -> Result<()> {
        self.store.object(id)?;
        if self.objects.contains(&id) {
            return Err(TopologyError::AlreadyOwned {
                child: "object",
                parent: "scene",
            }
            .into());
        }
        self.objects.push(id);
        Ok(())
    }

    /// Seals the builder into an immutable scene.
    #[must_use]
    pub fn build(self) -> Scene {
        tracing::debug!(
            objects = self.objects.len(),
            faces = self.store.face_count(),
            contours = self.store.contour_count(),
            "built scene"
        );
        Scene {
            store: self.store,
            objects: self.objects,
        }
    }
}
