use std::collections::HashSet;

use crate::error::Result;
use crate::geometry::Segment;
use crate::math::{canonical_bits, Point3};

use super::{FlattenParams, LineBuffer};

/// Returns `true` if `p` comes first in the canonical order of an edge `(p, q)`.
///
/// Points are compared on x, then y; when both match, `p` comes first if
/// `p.z <= q.z`, so identical endpoints keep their given order.
#[allow(clippy::float_cmp)]
fn precedes(p: &Point3, q: &Point3) -> bool {
    if p.x != q.x {
        return p.x < q.x;
    }
    if p.y != q.y {
        return p.y < q.y;
    }
    p.z <= q.z
}

/// Orders the endpoints of a segment canonically, independent of direction.
#[must_use]
pub fn canonical_order(a: Point3, b: Point3) -> Segment {
    if precedes(&a, &b) {
        (a, b)
    } else {
        (b, a)
    }
}

/// Orientation-independent identity of an undirected edge.
///
/// Two keys are equal exactly when their canonically ordered endpoints
/// compare equal component by component (`-0.0 == 0.0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey([u64; 6]);

impl EdgeKey {
    /// Builds the key of the edge between `a` and `b`.
    #[must_use]
    pub fn new(a: Point3, b: Point3) -> Self {
        let (p, q) = canonical_order(a, b);
        Self([
            canonical_bits(p.x),
            canonical_bits(p.y),
            canonical_bits(p.z),
            canonical_bits(q.x),
            canonical_bits(q.y),
            canonical_bits(q.z),
        ])
    }
}

/// Set of edges already emitted, keyed canonically.
#[derive(Debug)]
pub struct EdgeSet {
    params: FlattenParams,
    seen: HashSet<EdgeKey>,
    degenerate: usize,
}

impl EdgeSet {
    /// Creates an empty edge set.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid.
    pub fn new(params: FlattenParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            seen: HashSet::new(),
            degenerate: 0,
        })
    }

    /// Snaps a point to the weld grid. With no tolerance the point is unchanged.
    fn snap(&self, p: Point3) -> Point3 {
        let t = self.params.weld_tolerance;
        if t > 0.0 {
            p.map(|v| (v / t).round())
        } else {
            p
        }
    }

    /// Records the edge `(a, b)`.
    ///
    /// Returns the endpoints in canonical order if the edge was not seen
    /// before, or `None` if it duplicates an earlier edge (or is a
    /// zero-length edge and degenerate edges are skipped).
    pub fn insert(&mut self, a: Point3, b: Point3) -> Option<Segment> {
        let (sa, sb) = (self.snap(a), self.snap(b));
        if self.params.skip_degenerate && sa == sb {
            self.degenerate += 1;
            return None;
        }
        let key = EdgeKey::new(sa, sb);
        if !self.seen.insert(key) {
            return None;
        }
        if precedes(&sa, &sb) {
            Some((a, b))
        } else {
            Some((b, a))
        }
    }

    /// Returns the number of unique edges recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Returns how many zero-length edges were dropped.
    #[must_use]
    pub fn skipped_degenerate(&self) -> usize {
        self.degenerate
    }
}

/// Merges segments into a buffer of unique undirected edges.
///
/// Input order is preserved: each edge is emitted where it first appears,
/// with its endpoints in canonical order.
///
/// # Errors
///
/// Returns an error if the parameters are invalid.
pub fn dedup_segments<I>(segments: I, params: FlattenParams) -> Result<LineBuffer>
where
    I: IntoIterator<Item = Segment>,
{
    let mut set = EdgeSet::new(params)?;
    let mut buffer = LineBuffer::new();
    let mut total = 0_usize;
    for (a, b) in segments {
        total += 1;
        if let Some((p, q)) = set.insert(a, b) {
            buffer.push(p, q);
        }
    }
    tracing::debug!(
        segments = total,
        unique = set.len(),
        skipped_degenerate = set.skipped_degenerate(),
        "deduplicated segments"
    );
    Ok(buffer)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn orders_by_x_then_y_then_z() {
        let a = p(1.0, 0.0, 0.0);
        let b = p(0.0, 5.0, 5.0);
        assert_eq!(canonical_order(a, b), (b, a));

        let a = p(0.0, 1.0, 0.0);
        let b = p(0.0, 0.0, 9.0);
        assert_eq!(canonical_order(a, b), (b, a));

        let a = p(0.0, 0.0, -1.0);
        let b = p(0.0, 0.0, 1.0);
        assert_eq!(canonical_order(b, a), (a, b));
    }

    #[test]
    fn identical_endpoints_keep_order() {
        let a = p(2.0, 2.0, 2.0);
        assert_eq!(canonical_order(a, a), (a, a));
        assert_eq!(EdgeKey::new(a, a), EdgeKey::new(a, a));
    }

    #[test]
    fn signed_zero_is_the_same_edge() {
        let a = p(0.0, 1.0, 0.0);
        let b = p(-0.0, 1.0, 1.0);
        assert_eq!(EdgeKey::new(a, b), EdgeKey::new(p(-0.0, 1.0, -0.0), p(0.0, 1.0, 1.0)));
    }

    #[test]
    fn reversed_duplicate_is_dropped() {
        let mut set = EdgeSet::new(FlattenParams::default()).unwrap();
        let a = p(1.0, 0.0, 0.0);
        let b = p(0.0, 0.0, 0.0);
        assert_eq!(set.insert(a, b), Some((b, a)));
        assert_eq!(set.insert(b, a), None);
        assert_eq!(set.insert(a, b), None);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn zero_length_edges_pass_by_default() {
        let a = p(1.0, 1.0, 1.0);
        let buf = dedup_segments(vec![(a, a), (a, a)], FlattenParams::default()).unwrap();
        assert_eq!(buf.as_slice(), &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn zero_length_edges_can_be_skipped() {
        let a = p(1.0, 1.0, 1.0);
        let params = FlattenParams {
            skip_degenerate: true,
            ..FlattenParams::default()
        };
        let mut set = EdgeSet::new(params).unwrap();
        assert_eq!(set.insert(a, a), None);
        assert_eq!(set.skipped_degenerate(), 1);
        assert!(set.is_empty());
    }

    #[test]
    fn near_duplicates_differ_without_tolerance() {
        let a = p(0.0, 0.0, 0.0);
        let b = p(1.0, 0.0, 0.0);
        let b2 = p(1.0 + 1e-12, 0.0, 0.0);
        let buf = dedup_segments(vec![(a, b), (b2, a)], FlattenParams::default()).unwrap();
        assert_eq!(buf.edge_count(), 2);
    }

    #[test]
    fn weld_tolerance_merges_near_duplicates() {
        let a = p(0.0, 0.0, 0.0);
        let b = p(1.0, 0.0, 0.0);
        let b2 = p(1.0 + 1e-12, 0.0, 0.0);
        let params = FlattenParams {
            weld_tolerance: 1e-9,
            ..FlattenParams::default()
        };
        let buf = dedup_segments(vec![(a, b), (b2, a)], params).unwrap();
        assert_eq!(buf.edge_count(), 1);
        // The first occurrence is the one that is kept.
        assert_eq!(buf.segments().next(), Some((a, b)));
    }

    #[test]
    fn invalid_params_are_rejected() {
        let params = FlattenParams {
            weld_tolerance: f64::INFINITY,
            ..FlattenParams::default()
        };
        assert!(dedup_segments(Vec::<Segment>::new(), params).is_err());
    }

    fn point() -> impl Strategy<Value = Point3> {
        // Small integer grid so that shared coordinates show up often.
        (-3_i8..3, -3_i8..3, -3_i8..3)
            .prop_map(|(x, y, z)| p(f64::from(x) * 0.5, f64::from(y) * 0.5, f64::from(z) * 0.5))
    }

    proptest! {
        #[test]
        fn key_is_symmetric(a in point(), b in point()) {
            prop_assert_eq!(EdgeKey::new(a, b), EdgeKey::new(b, a));
            prop_assert_eq!(canonical_order(a, b), canonical_order(b, a));
        }

        #[test]
        fn output_is_a_multiple_of_six(segs in prop::collection::vec((point(), point()), 0..40)) {
            let buf = dedup_segments(segs, FlattenParams::default()).unwrap();
            prop_assert_eq!(buf.as_slice().len() % 6, 0);
        }

        #[test]
        fn dedup_is_idempotent(segs in prop::collection::vec((point(), point()), 0..40)) {
            let once = dedup_segments(segs, FlattenParams::default()).unwrap();
            let twice = dedup_segments(once.segments(), FlattenParams::default()).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn emitted_keys_are_unique(segs in prop::collection::vec((point(), point()), 0..40)) {
            let buf = dedup_segments(segs, FlattenParams::default()).unwrap();
            let keys: HashSet<_> = buf.segments().map(|(a, b)| EdgeKey::new(a, b)).collect();
            prop_assert_eq!(keys.len(), buf.edge_count());
        }
    }
}
