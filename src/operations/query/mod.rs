mod bounding_box;
mod object_edges;
mod part_edges;

pub use bounding_box::{Aabb, BoundingBox};
pub use object_edges::ObjectEdges;
pub use part_edges::PartEdges;
