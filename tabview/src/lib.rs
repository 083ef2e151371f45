//! A headless, swipeable tab view engine.
//!
//! For adapter-level utilities (tween-driven animated scrolling, a controller), see the
//! `tabview-adapter` crate.
//!
//! This crate keeps two independently scrollable regions in sync: a horizontally scrollable
//! **title strip** and a horizontally **paged content pane**. It owns the math and the state
//! machine only: measured title widths, cumulative offsets, offset → page index mapping, and
//! the mount/scroll lifecycle.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - title layout measurements (pixel width of each rendered title)
//! - content-pane scroll offsets and title-tap events
//! - execution of the [`ScrollCommand`]s the view emits
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod offset;
mod options;
mod paging;
mod registry;
mod types;
mod view;


pub use offset::{centered_target, cumulative_offsets, offset_of};
pub use options::{OnIndexChangeCallback, RenderTitleCallback, TabViewOptions};
pub use paging::{index_from_scroll_x, page_offset};
pub use registry::WidthRegistry;
pub use types::{Element, Pane, Phase, ScrollCommand, TabItem, TabViewError};
pub use view::{Selection, TabView};
