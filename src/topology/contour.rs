slotmap::new_key_type! {
    /// Unique identifier for a contour (polyline) in the scene store.
    pub struct ContourId;
}
