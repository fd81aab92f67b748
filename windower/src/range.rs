use core::cmp;

use crate::WindowRange;
use crate::layout::Layout;

/// Computes the windowed (overscanned) range for the given viewport state.
///
/// Pure: identical inputs always yield an identical range. Inputs are
/// expected to be pre-clamped by the layout reconciler; out-of-range offsets
/// are additionally clamped here rather than allowed to overflow.
///
/// Edge cases:
/// - an empty list yields the empty range
/// - zero total extent (fixed extent 0, or every item zero-sized) cannot be
///   windowed and yields the full range
/// - a zero viewport with items present still yields at least one item, so
///   hosts render something before the first layout measurement arrives
pub(crate) fn window_range(
    layout: &Layout,
    scroll_offset: u64,
    viewport_extent: u32,
    overscan: usize,
) -> WindowRange {
    let count = layout.count();
    if count == 0 {
        return WindowRange::default();
    }
    if layout.total_extent() == 0 {
        return WindowRange {
            start_index: 0,
            end_index: count,
        };
    }
    match layout.fixed_extent() {
        Some(extent) => fixed_window(layout, extent, scroll_offset, viewport_extent, overscan),
        None => per_item_window(layout, scroll_offset, viewport_extent, overscan),
    }
}

/// Visible range only, no overscan widening.
pub(crate) fn visible_range(
    layout: &Layout,
    scroll_offset: u64,
    viewport_extent: u32,
) -> WindowRange {
    window_range(layout, scroll_offset, viewport_extent, 0)
}

/// Fixed-extent fast path: everything is integer division, O(1).
fn fixed_window(
    layout: &Layout,
    extent: u32,
    scroll_offset: u64,
    viewport_extent: u32,
    overscan: usize,
) -> WindowRange {
    let count = layout.count();
    let extent = extent as u64; // > 0: zero extents short-circuit above
    let scroll_offset = layout.clamp_scroll_offset(scroll_offset, viewport_extent);

    let first_visible = ((scroll_offset / extent) as usize).min(count - 1);
    let end_visible = scroll_offset
        .saturating_add(viewport_extent as u64)
        .div_ceil(extent)
        .min(count as u64) as usize;
    let visible = cmp::max(1, end_visible.saturating_sub(first_visible));

    let start_index = first_visible.saturating_sub(overscan);
    let end_index = cmp::min(
        count,
        start_index
            .saturating_add(visible)
            .saturating_add(overscan.saturating_mul(2)),
    );
    WindowRange {
        start_index,
        end_index,
    }
}

/// Per-item path: offset -> index lookups through the prefix-sum index,
/// then widened by `overscan` whole indices on each side.
fn per_item_window(
    layout: &Layout,
    scroll_offset: u64,
    viewport_extent: u32,
    overscan: usize,
) -> WindowRange {
    let count = layout.count();
    let scroll_offset = layout.clamp_scroll_offset(scroll_offset, viewport_extent);

    // Last covered offset; equal to scroll_offset when the viewport is zero,
    // which keeps exactly one item visible.
    let last_offset = cmp::max(
        scroll_offset,
        scroll_offset
            .saturating_add(viewport_extent as u64)
            .saturating_sub(1),
    );

    let first_visible = layout.index_at_offset(scroll_offset).unwrap_or(0);
    let last_visible = layout.index_at_offset(last_offset).unwrap_or(0);

    let start_index = first_visible.saturating_sub(overscan);
    let end_index = cmp::min(count, last_visible.saturating_add(1).saturating_add(overscan));
    WindowRange {
        start_index,
        end_index,
    }
}
