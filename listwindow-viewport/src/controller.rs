use listwindow::{Frame, Layout, Window};

use crate::ScrollSurface;

/// A framework-neutral viewport controller for a fixed-height windowed list.
///
/// The controller owns the single mutable value of the system — the current
/// scroll offset — and delegates all window/frame computation to the pure
/// [`Layout`] engine. It is driven two ways:
///
/// - navigation calls (`scroll_to_*`) update the offset **and** propagate it
///   to the external surface through the [`ScrollSurface`] handle;
/// - [`Controller::on_external_scroll`] adopts an externally observed offset
///   verbatim without writing back — for external scroll events the
///   controller is a follower, not a source of truth.
///
/// Both paths are synchronous, O(1) in list length, and cheap enough to run
/// once per scroll notification (every pixel of movement).
#[derive(Clone, Debug)]
pub struct Controller<S> {
    layout: Layout,
    scroll_offset: u64,
    surface: S,
}

impl<S: ScrollSurface> Controller<S> {
    /// Creates a controller bound to `surface`, adopting the surface's
    /// current offset as the initial scroll position.
    pub fn new(layout: Layout, surface: S) -> Self {
        let scroll_offset = surface.offset();
        lw_debug!(
            count = layout.count,
            overscan = layout.overscan,
            scroll_offset,
            "Controller::new"
        );
        Self {
            layout,
            scroll_offset,
            surface,
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    /// Updates the list length, keeping the other geometry parameters.
    pub fn set_count(&mut self, count: usize) {
        self.layout = self.layout.with_count(count);
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    // Navigation path: adopt the offset and push it to the surface so the
    // visual position and the computed window stay consistent.
    fn apply(&mut self, offset: u64) {
        self.scroll_offset = offset;
        self.surface.set_offset(offset);
    }

    /// Scrolls so the item at `index` sits at the top of the viewport.
    ///
    /// The target offset is `index * item_height`, **not** clamped against the
    /// content bounds: an out-of-range index produces an offset past
    /// `max_scroll_offset`, which the external surface is expected to clamp
    /// visually. Window computation still clamps to the tail, so the call is
    /// always safe. Use [`Self::scroll_to_index_clamped`] for pre-clamped
    /// targets.
    ///
    /// Returns the applied offset.
    pub fn scroll_to_index(&mut self, index: usize) -> u64 {
        let offset = self.layout.offset_of_index(index);
        lw_trace!(index, offset, "scroll_to_index");
        self.apply(offset);
        offset
    }

    /// Like [`Self::scroll_to_index`], but clamps the target to
    /// `[0, max_scroll_offset]` before adopting it.
    pub fn scroll_to_index_clamped(&mut self, index: usize) -> u64 {
        let offset = self
            .layout
            .clamp_scroll_offset(self.layout.offset_of_index(index));
        lw_trace!(index, offset, "scroll_to_index_clamped");
        self.apply(offset);
        offset
    }

    /// Scrolls to the start of the list.
    pub fn scroll_to_top(&mut self) {
        lw_trace!("scroll_to_top");
        self.apply(0);
    }

    /// Scrolls to the end of the list: `max(0, total_height - viewport_height)`.
    ///
    /// Returns the applied offset.
    pub fn scroll_to_bottom(&mut self) -> u64 {
        let offset = self.layout.max_scroll_offset();
        lw_trace!(offset, "scroll_to_bottom");
        self.apply(offset);
        offset
    }

    /// Adopts an arbitrary programmatic offset, unclamped (same pass-through
    /// contract as [`Self::scroll_to_index`]).
    pub fn scroll_to_offset(&mut self, offset: u64) -> u64 {
        lw_trace!(offset, "scroll_to_offset");
        self.apply(offset);
        offset
    }

    /// Like [`Self::scroll_to_offset`], but clamps the target first.
    pub fn scroll_to_offset_clamped(&mut self, offset: u64) -> u64 {
        let offset = self.layout.clamp_scroll_offset(offset);
        lw_trace!(offset, "scroll_to_offset_clamped");
        self.apply(offset);
        offset
    }

    /// Adopts an externally reported offset verbatim as the current offset.
    ///
    /// Call this once per scroll notification from the UI; the controller
    /// never writes back to the surface here, so it cannot fight user-driven
    /// or programmatic external scrolling.
    pub fn on_external_scroll(&mut self, observed_offset: u64) {
        lw_trace!(observed_offset, "on_external_scroll");
        self.scroll_offset = observed_offset;
    }

    /// Reads the surface's current offset and adopts it, as if it had been
    /// reported through [`Self::on_external_scroll`].
    pub fn sync_from_surface(&mut self) {
        let observed = self.surface.offset();
        self.on_external_scroll(observed);
    }

    /// The window of indices to materialize at the current offset.
    pub fn window(&self) -> Option<Window> {
        self.layout.window(self.scroll_offset)
    }

    /// The render-ready frame for `items` at the current offset.
    pub fn frame<'a, T>(&self, items: &'a [T]) -> Frame<'a, T> {
        self.layout.frame(items, self.scroll_offset)
    }
}
