use super::contour::ContourId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the scene store.
    pub struct FaceId;
}

/// Data associated with a face.
///
/// A face is a planar region outlined by one or more contours. The first
/// contour is the outer boundary; any further contours are holes. Neither
/// planarity nor winding is checked.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// The contours of this face, outer boundary first.
    pub contours: Vec<ContourId>,
}

impl FaceData {
    /// Returns the outer boundary contour.
    #[must_use]
    pub fn outer(&self) -> Option<ContourId> {
        self.contours.first().copied()
    }

    /// Returns the hole contours.
    #[must_use]
    pub fn holes(&self) -> &[ContourId] {
        self.contours.get(1..).unwrap_or_default()
    }
}
