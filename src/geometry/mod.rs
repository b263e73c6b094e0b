pub mod polyline;

pub use polyline::{Polyline, Segments};

use crate::math::Point3;

/// A directed line segment between two points.
pub type Segment = (Point3, Point3);
