use crate::math::Point3;
use crate::tessellation::LineBuffer;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Returns the length of the box diagonal.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        (self.max - self.min).norm()
    }
}

/// Computes the axis-aligned bounding box of a flattened line buffer.
///
/// Downstream renderers use it to frame the camera.
pub struct BoundingBox<'a> {
    buffer: &'a LineBuffer,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(buffer: &'a LineBuffer) -> Self {
        Self { buffer }
    }

    /// Executes the query. Returns `None` for an empty buffer.
    #[must_use]
    pub fn execute(&self) -> Option<Aabb> {
        let mut points = self.buffer.segments().flat_map(|(a, b)| [a, b]);
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(lo, hi), p| {
            (lo.inf(&p), hi.sup(&p))
        });
        Some(Aabb { min, max })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use crate::scene::{Scene, SceneBuilder};
    use approx::assert_relative_eq;

    #[test]
    fn empty_buffer_has_no_bounds() {
        assert!(BoundingBox::new(&LineBuffer::new()).execute().is_none());
    }

    #[test]
    fn box_bounds_match_extents() {
        let mut builder = SceneBuilder::new();
        let part = builder
            .add_box("B", Point3::new(1.0, 2.0, 3.0), Vector3::new(2.0, 4.0, 6.0))
            .unwrap();
        builder.add_object("O", vec![part]).unwrap();
        let buffer = builder.build().flatten().unwrap();

        let aabb = BoundingBox::new(&buffer).execute().unwrap();
        assert_eq!(aabb.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(aabb.max, Point3::new(2.0, 4.0, 6.0));
        assert_eq!(aabb.center(), Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn desktop_pc_bounds() {
        let buffer = Scene::desktop_pc().unwrap().flatten().unwrap();
        let aabb = BoundingBox::new(&buffer).execute().unwrap();
        // Case reaches furthest right, screen highest, keyboard furthest forward.
        assert_relative_eq!(aabb.max.x, 1.5, epsilon = 1e-12);
        assert_relative_eq!(aabb.max.y, 1.4, epsilon = 1e-12);
        assert_relative_eq!(aabb.max.z, 0.7, epsilon = 1e-12);
        assert_relative_eq!(aabb.min.x, -0.8, epsilon = 1e-12);
        assert_relative_eq!(aabb.min.y, -0.35, epsilon = 1e-12);
        assert_relative_eq!(aabb.min.z, -0.325, epsilon = 1e-12);
        assert!(aabb.diagonal() > 0.0);
    }
}
