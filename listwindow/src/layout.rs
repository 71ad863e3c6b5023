use alloc::vec::Vec;
use core::cmp;

use crate::{Frame, Window};

/// Default number of extra items materialized beyond each visible edge.
pub const DEFAULT_OVERSCAN: usize = 5;

/// Scalar geometry of a fixed-height windowed list.
///
/// This is the whole engine: a plain `Copy` bundle of the four parameters plus
/// pure query methods. It owns nothing, caches nothing, and is cheap to rebuild
/// per frame. Scroll-offset state lives in `listwindow-viewport`.
///
/// Contract: `item_height > 0`. Negative heights are unrepresentable; a zero
/// height is a caller contract violation and yields unspecified (but
/// non-panicking) geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Length of the list being windowed.
    pub count: usize,
    /// Uniform item height in the scroll axis.
    pub item_height: u32,
    /// Visible extent of the scroll container.
    pub viewport_height: u32,
    /// Extra items materialized beyond each visible edge, to reduce blank
    /// flashes during fast scrolling.
    pub overscan: usize,
}

impl Layout {
    /// Creates a layout with no viewport and the default overscan.
    pub fn new(count: usize, item_height: u32) -> Self {
        Self {
            count,
            item_height,
            viewport_height: 0,
            overscan: DEFAULT_OVERSCAN,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_item_height(mut self, item_height: u32) -> Self {
        self.item_height = item_height;
        self
    }

    pub fn with_viewport_height(mut self, viewport_height: u32) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    // Divisor for offset→index math. The `max(1)` keeps a zero item height
    // (contract violation) non-panicking instead of dividing by zero.
    fn row_height(&self) -> u64 {
        u64::from(self.item_height.max(1))
    }

    /// Total scrollable extent: `count * item_height`.
    pub fn total_height(&self) -> u64 {
        (self.count as u64).saturating_mul(u64::from(self.item_height))
    }

    /// The largest in-bounds scroll offset: `max(0, total_height - viewport_height)`.
    pub fn max_scroll_offset(&self) -> u64 {
        self.total_height()
            .saturating_sub(u64::from(self.viewport_height))
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// Pixel offset of the item at `index`: `index * item_height`.
    ///
    /// Not clamped against the list bounds; see `Controller::scroll_to_index`
    /// in `listwindow-viewport` for why out-of-range indices pass through.
    pub fn offset_of_index(&self, index: usize) -> u64 {
        (index as u64).saturating_mul(u64::from(self.item_height))
    }

    /// Computes the window of indices to materialize for `scroll_offset`.
    ///
    /// Returns `None` when the list is empty. Otherwise the window always
    /// satisfies `start_index <= end_index <= count - 1`, for any offset —
    /// overscrolled offsets clamp to the tail rather than panic.
    ///
    /// Recomputed from scratch on every call, O(1) in `count`.
    pub fn window(&self, scroll_offset: u64) -> Option<Window> {
        if self.count == 0 {
            return None;
        }
        let last = (self.count - 1) as u64;
        let rows_visible = u64::from(self.viewport_height).div_ceil(self.row_height());
        let overscan = self.overscan as u64;

        let start_raw = scroll_offset / self.row_height();
        let end_raw = start_raw.saturating_add(rows_visible).saturating_add(overscan);
        let end_index = cmp::min(last, end_raw) as usize;
        let start_index = cmp::min(last, start_raw.saturating_sub(overscan)) as usize;

        lw_trace!(scroll_offset, start_index, end_index, "window");
        Some(Window {
            start_index,
            end_index,
        })
    }

    /// Materializes the window's slice of `items` for `scroll_offset`.
    ///
    /// `items` is the full list and should have length `count`; if the two
    /// disagree the slice bounds are clamped to `items` so the call cannot
    /// panic. An empty list yields an empty frame with `total_height == 0`.
    pub fn frame<'a, T>(&self, items: &'a [T], scroll_offset: u64) -> Frame<'a, T> {
        let total_height = self.total_height();
        let Some(window) = self.window(scroll_offset) else {
            return Frame {
                items: &[],
                window: None,
                total_height,
                offset_y: 0,
            };
        };

        let offset_y = self.offset_of_index(window.start_index);
        if items.is_empty() {
            return Frame {
                items: &[],
                window: Some(window),
                total_height,
                offset_y,
            };
        }

        let last = items.len() - 1;
        let start = cmp::min(window.start_index, last);
        let end = cmp::min(window.end_index, last);
        Frame {
            items: &items[start..=end],
            window: Some(window),
            total_height,
            offset_y,
        }
    }

    /// Calls `f` with each index in the window for `scroll_offset`, without
    /// allocating.
    pub fn for_each_visible_index(&self, scroll_offset: u64, mut f: impl FnMut(usize)) {
        if let Some(window) = self.window(scroll_offset) {
            for i in window.indices() {
                f(i);
            }
        }
    }

    /// Collects the window's indexes into `out` (clears `out` first).
    ///
    /// Convenience wrapper around [`Self::for_each_visible_index`]; reuse the
    /// buffer across frames to avoid reallocating.
    pub fn collect_visible_indexes(&self, scroll_offset: u64, out: &mut Vec<usize>) {
        out.clear();
        self.for_each_visible_index(scroll_offset, |i| out.push(i));
    }
}
