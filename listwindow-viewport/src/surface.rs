use alloc::rc::Rc;
use alloc::sync::Arc;
use core::cell::Cell;
use core::sync::atomic::{AtomicU64, Ordering};

/// Capability handle to the externally owned scrollable surface.
///
/// The rendering layer owns the real scroll container; the controller only
/// needs two narrow operations on it: read the current offset and move it.
/// Both take `&self` because the handle is shared with the rendering layer
/// (interior mutability is the natural shape for such a handle).
pub trait ScrollSurface {
    /// Reads the surface's current scroll offset.
    fn offset(&self) -> u64;

    /// Moves the surface to `offset`.
    fn set_offset(&self, offset: u64);
}

impl ScrollSurface for Cell<u64> {
    fn offset(&self) -> u64 {
        self.get()
    }

    fn set_offset(&self, offset: u64) {
        self.set(offset);
    }
}

impl ScrollSurface for AtomicU64 {
    fn offset(&self) -> u64 {
        self.load(Ordering::Relaxed)
    }

    fn set_offset(&self, offset: u64) {
        self.store(offset, Ordering::Relaxed);
    }
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for &S {
    fn offset(&self) -> u64 {
        (**self).offset()
    }

    fn set_offset(&self, offset: u64) {
        (**self).set_offset(offset);
    }
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for Rc<S> {
    fn offset(&self) -> u64 {
        (**self).offset()
    }

    fn set_offset(&self, offset: u64) {
        (**self).set_offset(offset);
    }
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for Arc<S> {
    fn offset(&self) -> u64 {
        (**self).offset()
    }

    fn set_offset(&self, offset: u64) {
        (**self).set_offset(offset);
    }
}
