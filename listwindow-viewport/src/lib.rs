//! Viewport controller for the `listwindow` crate.
//!
//! The `listwindow` crate is pure geometry. This crate adds the one stateful
//! piece of the system: a [`Controller`] that owns the current scroll offset,
//! exposes navigation primitives (jump-to-index, jump-to-start, jump-to-end),
//! and keeps that offset synchronized with an externally owned scrollable
//! surface in both directions:
//!
//! - internal → external: navigation calls push the new offset through the
//!   [`ScrollSurface`] handle so the visual position follows;
//! - external → internal: scroll notifications from the UI are adopted
//!   verbatim — the controller never fights user-driven scrolling.
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings);
//! the scroll surface is a two-operation capability, not a UI object.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;
mod controller;
mod surface;


pub use controller::Controller;
pub use surface::ScrollSurface;
