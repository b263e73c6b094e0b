use crate::error::Result;
use crate::geometry::Polyline;
use crate::math::{Point3, Vector3};
use crate::topology::{FaceData, PartData, PartId, SceneStore};

/// Creates an axis-aligned box part from a center point and full extents.
///
/// The part gets six faces, each a single closed four-point contour, in the
/// order front (z+), back (z−), left (x−), right (x+), bottom (y−), top (y+).
/// Every contour walks its quad in one rotational direction, so its four
/// segments are the four sides of that face.
///
/// Extents are not validated: a zero or negative size yields a degenerate box.
pub struct MakeBox {
    name: String,
    center: Point3,
    size: Vector3,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(name: impl Into<String>, center: Point3, size: Vector3) -> Self {
        Self {
            name: name.into(),
            center,
            size,
        }
    }

    /// Returns the eight corners, indexed by `x | y << 1 | z << 2` where each
    /// bit selects the +half extent on that axis.
    #[must_use]
    pub fn corners(&self) -> [Point3; 8] {
        let h = self.size * 0.5;
        std::array::from_fn(|i| {
            let sx = if i & 1 == 0 { -h.x } else { h.x };
            let sy = if i & 2 == 0 { -h.y } else { h.y };
            let sz = if i & 4 == 0 { -h.z } else { h.z };
            self.center + Vector3::new(sx, sy, sz)
        })
    }

    /// Returns the six face quads without touching a store.
    #[must_use]
    pub fn quads(&self) -> [[Point3; 4]; 6] {
        let c = self.corners();
        let at = |x: usize, y: usize, z: usize| c[x | (y << 1) | (z << 2)];
        [
            [at(0, 0, 1), at(1, 0, 1), at(1, 1, 1), at(0, 1, 1)],
            [at(1, 0, 0), at(0, 0, 0), at(0, 1, 0), at(1, 1, 0)],
            [at(0, 0, 0), at(0, 0, 1), at(0, 1, 1), at(0, 1, 0)],
            [at(1, 0, 1), at(1, 0, 0), at(1, 1, 0), at(1, 1, 1)],
            [at(0, 0, 0), at(1, 0, 0), at(1, 0, 1), at(0, 0, 1)],
            [at(0, 1, 0), at(0, 1, 1), at(1, 1, 1), at(1, 1, 0)],
        ]
    }

    /// Executes the operation, creating the box part in the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects one of the new entities.
    pub fn execute(&self, store: &mut SceneStore) -> Result<PartId> {
        let mut faces = Vec::with_capacity(6);
        for quad in self.quads() {
            let contour = store.add_contour(Polyline::closed(quad.to_vec()));
            faces.push(store.add_face(FaceData {
                contours: vec![contour],
            })?);
        }
        let part = store.add_part(PartData {
            name: self.name.clone(),
            faces,
        })?;
        tracing::debug!(name = %self.name, "created box part");
        Ok(part)
    }
}
