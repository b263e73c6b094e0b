//! Wireframe scene graph.
//!
//! A scene is a tree of objects, parts, faces and contours (polylines).
//! [`Scene::flatten`] walks the tree and produces a [`LineBuffer`]: every
//! undirected edge exactly once, as `[ax, ay, az, bx, by, bz, ...]`, ready
//! to be drawn as a line list.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod scene;
pub mod tessellation;
pub mod topology;

pub use error::{Result, WiresceneError};
pub use scene::{Scene, SceneBuilder};
pub use tessellation::{FlattenParams, LineBuffer};
