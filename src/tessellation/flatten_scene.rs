use crate::error::Result;
use crate::operations::query::ObjectEdges;
use crate::scene::Scene;

use super::{dedup_segments, FlattenParams, LineBuffer};

/// Flattens a whole scene into a buffer of unique edges.
///
/// Objects, parts, faces, contours and segments are visited in insertion
/// order, so the same scene always yields the same buffer.
pub struct FlattenScene<'a> {
    scene: &'a Scene,
    params: FlattenParams,
}

impl<'a> FlattenScene<'a> {
    /// Creates a new `FlattenScene` operation with default parameters.
    #[must_use]
    pub fn new(scene: &'a Scene) -> Self {
        Self {
            scene,
            params: FlattenParams::default(),
        }
    }

    /// Sets custom flattening parameters.
    #[must_use]
    pub fn with_params(mut self, params: FlattenParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the flattening, returning the line buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or the scene graph
    /// references a missing entity.
    pub fn execute(&self) -> Result<LineBuffer> {
        self.params.validate()?;
        let store = self.scene.store();

        let mut segments = Vec::new();
        for &object in self.scene.objects() {
            ObjectEdges::new(object).collect_into(store, &mut segments)?;
        }

        let buffer = dedup_segments(segments, self.params)?;
        tracing::info!(
            verts = buffer.vertex_count(),
            edges = buffer.edge_count(),
            "flattened scene"
        );
        Ok(buffer)
    }
}
