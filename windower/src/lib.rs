//! A headless list-windowing engine.
//!
//! For the host-facing event boundary (input validation, frame coalescing,
//! range-change callbacks), see the `windower-adapter` crate.
//!
//! This crate focuses on the math needed to render massive lists at
//! interactive frame rates: prefix sums over item extents, fast
//! offset → index lookup, overscanned visible ranges, and the leading-offset
//! bookkeeping that keeps a windowed render pixel-identical to a full one.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the item count and item extents (fixed or per index)
//! - the viewport extent along the scroll axis
//! - the scroll offset
//!
//! and to render only the `[start_index, end_index)` slice it is handed back.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod extent;
mod layout;
mod options;
mod prefix;
mod range;
mod types;
mod windower;


pub use extent::Extents;
pub use layout::Layout;
pub use options::WindowerOptions;
pub use types::{Align, RangeUpdate, Viewport, WindowItem, WindowRange};
pub use windower::Windower;
