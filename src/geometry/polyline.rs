use std::iter::FusedIterator;

use crate::math::Point3;

use super::Segment;

/// An ordered sequence of 3D points, optionally closed.
///
/// Each consecutive pair of points forms one segment. For closed polylines
/// with at least two points, the last point connects back to the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point3>,
    pub closed: bool,
}

impl Polyline {
    /// Creates a polyline from its points.
    #[must_use]
    pub fn new(points: Vec<Point3>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Creates a closed polyline.
    #[must_use]
    pub fn closed(points: Vec<Point3>) -> Self {
        Self::new(points, true)
    }

    /// Creates an open polyline.
    #[must_use]
    pub fn open(points: Vec<Point3>) -> Self {
        Self::new(points, false)
    }

    /// Returns the number of segments in this polyline.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.points.len();
        if n < 2 {
            return 0;
        }
        if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Returns the segments of this polyline as `(start, end)` pairs.
    ///
    /// The iterator borrows the polyline, so calling this again restarts
    /// the sequence from the first segment.
    #[must_use]
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            points: &self.points,
            index: 0,
            count: self.segment_count(),
        }
    }
}

/// Iterator over the segments of a [`Polyline`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    points: &'a [Point3],
    index: usize,
    count: usize,
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }
        let i = self.index;
        self.index += 1;
        // The closing segment wraps the end index back to 0.
        let j = (i + 1) % self.points.len();
        Some((self.points[i], self.points[j]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Segments<'_> {}

impl FusedIterator for Segments<'_> {}
