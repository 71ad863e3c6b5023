//! A headless windowing engine for fixed-height lists.
//!
//! For the stateful viewport controller (navigation, external scroll sync), see the
//! `listwindow-viewport` crate.
//!
//! This crate is the pure half of the system: given a scroll offset and the list
//! geometry (item height, viewport height, overscan, item count), it derives the
//! inclusive index range that must be materialized, the total scrollable extent,
//! and the pixel offset at which the materialized slice lines up with its true
//! position in the full list. Every query is recomputed from scratch — the engine
//! holds no memory of the previous window, so arbitrary jumps are always correct.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport height
//! - scroll offset
//! - the item slice to materialize
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;
mod layout;
mod types;

#[cfg(test)]
mod tests;

pub use layout::{DEFAULT_OVERSCAN, Layout};
pub use types::{Frame, Window};
