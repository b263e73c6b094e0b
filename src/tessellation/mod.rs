mod edge_key;
mod flatten_scene;

pub use edge_key::{canonical_order, dedup_segments, EdgeKey, EdgeSet};
pub use flatten_scene::FlattenScene;

use crate::error::{Result, TessellationError};
use crate::geometry::Segment;
use crate::math::Point3;

/// Number of floats that describe one edge: two endpoints of three coordinates.
pub const FLOATS_PER_EDGE: usize = 6;

/// Parameters controlling how segments are merged into unique edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlattenParams {
    /// Grid spacing used to snap coordinates before comparing edges.
    /// `0.0` compares coordinates exactly.
    pub weld_tolerance: f64,
    /// Drop segments whose endpoints compare equal.
    pub skip_degenerate: bool,
}

impl Default for FlattenParams {
    fn default() -> Self {
        Self {
            weld_tolerance: 0.0,
            skip_degenerate: false,
        }
    }
}

impl FlattenParams {
    /// Checks that the parameters are usable.
    ///
    /// # Errors
    ///
    /// Returns an error if `weld_tolerance` is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.weld_tolerance.is_finite() || self.weld_tolerance < 0.0 {
            return Err(TessellationError::InvalidParameters(format!(
                "weld tolerance must be a finite non-negative number, got {}",
                self.weld_tolerance
            ))
            .into());
        }
        Ok(())
    }
}

/// A flat buffer of unique line segments, ready for a line-list draw call.
///
/// Layout is `[ax, ay, az, bx, by, bz, ...]`; the length is always a
/// multiple of [`FLOATS_PER_EDGE`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineBuffer {
    coords: Vec<f64>,
}

impl LineBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one edge.
    pub fn push(&mut self, a: Point3, b: Point3) {
        self.coords.extend_from_slice(&[a.x, a.y, a.z, b.x, b.y, b.z]);
    }

    /// Returns the raw coordinates.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.coords
    }

    /// Consumes the buffer, returning the raw coordinates.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.coords
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.coords.len() / FLOATS_PER_EDGE
    }

    /// Returns the number of vertices (two per edge).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.edge_count() * 2
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Reads the buffer back as segments.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.coords.chunks_exact(FLOATS_PER_EDGE).map(|c| {
            (
                Point3::new(c[0], c[1], c[2]),
                Point3::new(c[3], c[4], c[5]),
            )
        })
    }

    /// Converts the buffer to single precision for GPU upload.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_f32(&self) -> Vec<f32> {
        self.coords.iter().map(|&v| v as f32).collect()
    }
}
