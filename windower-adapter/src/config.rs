use alloc::sync::Arc;
use alloc::vec::Vec;

use windower::Extents;

use crate::AdapterError;

/// Item extents as reported by the host, in its (possibly fractional) pixel
/// space. Values are validated and rounded to whole engine pixels when the
/// item list is (re)built.
///
/// Cheap to clone: the per-item closure is `Arc`-shared.
#[derive(Clone)]
pub enum ExtentInput {
    /// Every item has this extent.
    Uniform(f64),
    /// `f(i)` returns the extent of the item at index `i`, for `i < count`.
    PerItem(Arc<dyn Fn(usize) -> f64 + Send + Sync>),
}

impl ExtentInput {
    pub fn per_item(f: impl Fn(usize) -> f64 + Send + Sync + 'static) -> Self {
        Self::PerItem(Arc::new(f))
    }
}

impl core::fmt::Debug for ExtentInput {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Uniform(extent) => f.debug_tuple("Uniform").field(extent).finish(),
            Self::PerItem(_) => f.write_str("PerItem(..)"),
        }
    }
}

/// Configuration for [`crate::ScrollAdapter`].
#[derive(Clone, Debug)]
pub struct AdapterOptions {
    pub count: usize,
    pub extents: ExtentInput,
    /// Extra items materialized beyond the visible range on each side.
    pub overscan: usize,
    /// Initial viewport extent, host pixel space.
    pub viewport_extent: f64,
    /// Initial scroll offset, host pixel space.
    pub scroll_offset: f64,
}

impl AdapterOptions {
    pub fn new(count: usize, extents: ExtentInput) -> Self {
        Self {
            count,
            extents,
            overscan: 1,
            viewport_extent: 0.0,
            scroll_offset: 0.0,
        }
    }

    /// Options for a list where every item has the same extent.
    pub fn uniform(count: usize, extent: f64) -> Self {
        Self::new(count, ExtentInput::Uniform(extent))
    }

    /// Options for a list with per-index extents.
    pub fn per_item(count: usize, f: impl Fn(usize) -> f64 + Send + Sync + 'static) -> Self {
        Self::new(count, ExtentInput::per_item(f))
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_viewport_extent(mut self, viewport_extent: f64) -> Self {
        self.viewport_extent = viewport_extent;
        self
    }

    pub fn with_scroll_offset(mut self, scroll_offset: f64) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }
}

/// Validates a host extent and rounds it (half-up) to whole pixels.
/// `None` for NaN, infinite, or negative values; zero is allowed.
pub(crate) fn extent_px(value: f64) -> Option<u32> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    if value >= u32::MAX as f64 {
        return Some(u32::MAX);
    }
    Some((value + 0.5) as u32)
}

/// Validates a host scroll offset and rounds it to whole pixels.
/// `None` only for non-finite values; negative offsets clamp to 0, since
/// hosts report elastic overscroll as small negative positions.
pub(crate) fn offset_px(value: f64) -> Option<u64> {
    if !value.is_finite() {
        return None;
    }
    let value = value.max(0.0);
    if value >= u64::MAX as f64 {
        return Some(u64::MAX);
    }
    Some((value + 0.5) as u64)
}

/// Resolves host extents into engine extents, validating every value.
///
/// Always yields a usable source: invalid values are sanitized to 0 and the
/// first offending value is reported, so the caller can fail open with a
/// layout that still sums correctly over the valid items.
pub(crate) fn resolve_extents(
    count: usize,
    input: &ExtentInput,
) -> (Extents, Option<AdapterError>) {
    match input {
        ExtentInput::Uniform(value) => match extent_px(*value) {
            Some(px) => (Extents::Fixed(px), None),
            None => (
                Extents::Fixed(0),
                Some(AdapterError::InvalidUniformExtent { value: *value }),
            ),
        },
        ExtentInput::PerItem(f) => {
            let mut table = Vec::with_capacity(count);
            let mut first_error = None;
            for index in 0..count {
                let value = f(index);
                match extent_px(value) {
                    Some(px) => table.push(px),
                    None => {
                        table.push(0);
                        if first_error.is_none() {
                            first_error = Some(AdapterError::InvalidItemExtent { index, value });
                        }
                    }
                }
            }
            (Extents::from_table(table), first_error)
        }
    }
}
