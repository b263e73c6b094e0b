pub mod contour;
pub mod face;
pub mod object;
pub mod part;

pub use contour::ContourId;
pub use face::{FaceData, FaceId};
pub use object::{ObjectData, ObjectId};
pub use part::{PartData, PartId};

use crate::error::TopologyError;
use crate::geometry::Polyline;
use slotmap::{Key, SecondaryMap, SlotMap};

/// Central arena that owns every node of the scene graph.
///
/// Nodes reference their children via typed IDs (generational indices).
/// Each child belongs to exactly one parent: attaching an ID that already
/// has an owner fails with [`TopologyError::AlreadyOwned`].
#[derive(Debug, Default)]
pub struct SceneStore {
    contours: SlotMap<ContourId, Polyline>,
    faces: SlotMap<FaceId, FaceData>,
    parts: SlotMap<PartId, PartData>,
    objects: SlotMap<ObjectId, ObjectData>,
    contour_owner: SecondaryMap<ContourId, FaceId>,
    face_owner: SecondaryMap<FaceId, PartId>,
    part_owner: SecondaryMap<PartId, ObjectId>,
}

impl SceneStore {
    /// Creates a new, empty scene store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Contour operations ---

    /// Inserts a contour and returns its ID.
    pub fn add_contour(&mut self, polyline: Polyline) -> ContourId {
        self.contours.insert(polyline)
    }

    /// Returns the polyline of a contour.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn contour(&self, id: ContourId) -> Result<&Polyline, TopologyError> {
        self.contours
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("contour".into()))
    }

    // --- Face operations ---

    /// Inserts a face, taking ownership of its contours.
    ///
    /// # Errors
    ///
    /// Returns an error if a contour does not exist, already belongs to a
    /// face, or is listed twice.
    pub fn add_face(&mut self, data: FaceData) -> Result<FaceId, TopologyError> {
        claimable(
            &data.contours,
            &self.contours,
            &self.contour_owner,
            "contour",
            "face",
        )?;
        let contours = data.contours.clone();
        let id = self.faces.insert(data);
        for c in contours {
            self.contour_owner.insert(c, id);
        }
        Ok(id)
    }

    /// Returns a reference to the face data.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    // --- Part operations ---

    /// Inserts a part, taking ownership of its faces.
    ///
    /// # Errors
    ///
    /// Returns an error if a face does not exist, already belongs to a part,
    /// or is listed twice.
    pub fn add_part(&mut self, data: PartData) -> Result<PartId, TopologyError> {
        claimable(&data.faces, &self.faces, &self.face_owner, "face", "part")?;
        let faces = data.faces.clone();
        let id = self.parts.insert(data);
        for f in faces {
            self.face_owner.insert(f, id);
        }
        Ok(id)
    }

    /// Returns a reference to the part data.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn part(&self, id: PartId) -> Result<&PartData, TopologyError> {
        self.parts
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("part".into()))
    }

    /// Checks that every part exists, belongs to no object and is listed once.
    pub(crate) fn check_free_parts(&self, parts: &[PartId]) -> Result<(), TopologyError> {
        claimable(parts, &self.parts, &self.part_owner, "part", "object")
    }

    /// Removes a part that no object owns yet, releasing its faces.
    ///
    /// Only used while assembling, to fold several parts into one.
    pub(crate) fn take_part(&mut self, id: PartId) -> Result<PartData, TopologyError> {
        if self.part_owner.contains_key(id) {
            return Err(TopologyError::AlreadyOwned {
                child: "part",
                parent: "object",
            });
        }
        let data = self
            .parts
            .remove(id)
            .ok_or_else(|| TopologyError::EntityNotFound("part".into()))?;
        for &f in &data.faces {
            self.face_owner.remove(f);
        }
        Ok(data)
    }

    // --- Object operations ---

    /// Inserts an object, taking ownership of its parts.
    ///
    /// # Errors
    ///
    /// Returns an error if a part does not exist, already belongs to an
    /// object, or is listed twice.
    pub fn add_object(&mut self, data: ObjectData) -> Result<ObjectId, TopologyError> {
        self.check_free_parts(&data.parts)?;
        let parts = data.parts.clone();
        let id = self.objects.insert(data);
        for p in parts {
            self.part_owner.insert(p, id);
        }
        Ok(id)
    }

    /// Returns a reference to the object data.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn object(&self, id: ObjectId) -> Result<&ObjectData, TopologyError> {
        self.objects
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("object".into()))
    }

    /// Returns the number of stored contours.
    #[must_use]
    pub fn contour_count(&self) -> usize {
        self.contours.len()
    }

    /// Returns the number of stored faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// Checks that `children` exist in `entities`, have no owner yet and
/// appear only once in the list.
fn claimable<K: Key, V, P>(
    children: &[K],
    entities: &SlotMap<K, V>,
    owners: &SecondaryMap<K, P>,
    child: &'static str,
    parent: &'static str,
) -> Result<(), TopologyError> {
    let mut listed: SecondaryMap<K, ()> = SecondaryMap::with_capacity(children.len());
    for &id in children {
        if !entities.contains_key(id) {
            return Err(TopologyError::EntityNotFound(child.into()));
        }
        if owners.contains_key(id) {
            return Err(TopologyError::AlreadyOwned { child, parent });
        }
        if listed.insert(id, ()).is_some() {
            return Err(TopologyError::DuplicateChild { child, parent });
        }
    }
    Ok(())
}
