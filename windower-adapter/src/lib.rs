//! Host event boundary for the `windower` crate.
//!
//! The `windower` crate is UI-agnostic and works in whole pixels. This crate
//! adds the pieces a real host integration needs:
//!
//! - an f64 input boundary (hosts measure in fractional pixels) with
//!   validation, so malformed values degrade to rendering the full list
//!   instead of crashing or rendering nothing
//! - frame coalescing: any burst of scroll/resize/item events between two
//!   ticks produces at most one recomputation, from the latest values
//! - change detection: the range callback fires only when the committed
//!   range actually differs from the previous one
//!
//! This crate is intentionally framework-agnostic (no DOM/TUI/GUI bindings);
//! a host calls [`ScrollAdapter::tick`] from whatever its frame or timer
//! source is.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod adapter;
mod config;
mod error;

#[cfg(test)]
mod tests;

pub use adapter::{RangeCallback, ScrollAdapter};
pub use config::{AdapterOptions, ExtentInput};
pub use error::AdapterError;
