//! Scroll-into-view geometry for the option list.

/// A one-dimensional span: offset and length along the scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    /// Start offset
    pub start: f32,
    /// Length
    pub len: f32,
}

impl Extent {
    /// Create an extent.
    #[must_use]
    pub const fn new(start: f32, len: f32) -> Self {
        Self { start, len }
    }

    /// End offset.
    #[must_use]
    pub fn end(&self) -> f32 {
        self.start + self.len
    }
}

/// New scroll offset that brings `row` into `viewport` with minimal movement.
///
/// `viewport.start` is the current scroll offset and both extents are in the
/// list's content coordinates. Returns `None` when the row is already fully
/// visible or the viewport has no size (e.g. the list is hidden). A row taller
/// than the viewport is aligned to its top.
#[must_use]
pub fn nearest(viewport: Extent, row: Extent) -> Option<f32> {
    if viewport.len <= 0.0 {
        return None;
    }
    if row.start < viewport.start || row.len > viewport.len {
        return (row.start != viewport.start).then_some(row.start);
    }
    if row.end() > viewport.end() {
        return Some(row.end() - viewport.len);
    }
    None
}
