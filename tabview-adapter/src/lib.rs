//! Adapter utilities for the `tabview` crate.
//!
//! The `tabview` crate is UI-agnostic and focuses on the core math and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A controller that executes the view's scroll commands against two real pane offsets
//! - Tween-based animated scrolling (adapter-driven; tick it from your frame loop)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::TabController;
pub use tween::{Easing, Tween};
