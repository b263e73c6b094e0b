use super::face::FaceId;

slotmap::new_key_type! {
    /// Unique identifier for a part in the scene store.
    pub struct PartId;
}

/// Data associated with a part: a named, rigid group of faces.
#[derive(Debug, Clone)]
pub struct PartData {
    /// Display name, e.g. `"Screen"`.
    pub name: String,
    /// The faces of this part, in insertion order.
    pub faces: Vec<FaceId>,
}
