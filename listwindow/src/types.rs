use core::ops::RangeInclusive;

/// The contiguous index range of the list currently materialized for rendering.
///
/// Both bounds are inclusive; a window is never empty. An empty list has no
/// window at all ([`crate::Layout::window`] returns `None`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start_index: usize,
    pub end_index: usize, // inclusive
}

impl Window {
    /// Number of materialized items.
    pub fn len(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    /// The inclusive index range, for iteration.
    pub fn indices(&self) -> RangeInclusive<usize> {
        self.start_index..=self.end_index
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index <= self.end_index
    }
}

/// The render-ready output for one window computation.
///
/// The rendering layer is expected to size the scroll track to `total_height`
/// and position `items` as a block at `offset_y`, so the slice lines up with
/// its true location in the full list.
///
/// A frame carries no identity beyond a single computation; it is recomputed
/// on every relevant input change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame<'a, T> {
    /// The materialized slice, `list[start_index..=end_index]`.
    pub items: &'a [T],
    /// The window the slice was cut from, or `None` for an empty list.
    pub window: Option<Window>,
    /// Total scrollable extent: `count * item_height`.
    pub total_height: u64,
    /// Pixel offset of the slice: `start_index * item_height`.
    pub offset_y: u64,
}

impl<'a, T> Frame<'a, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the slice paired with each item's absolute index in the list.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &'a T)> + '_ {
        let start = self.window.map_or(0, |w| w.start_index);
        self.items.iter().enumerate().map(move |(i, item)| (start + i, item))
    }
}
