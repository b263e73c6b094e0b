use super::part::PartId;

slotmap::new_key_type! {
    /// Unique identifier for an object in the scene store.
    pub struct ObjectId;
}

/// Data associated with an object: a named group of parts.
#[derive(Debug, Clone)]
pub struct ObjectData {
    pub name: String,
    pub parts: Vec<PartId>,
}
