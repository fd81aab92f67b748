use alloc::vec::Vec;

use crate::layout::Layout;
use crate::range;
use crate::{Align, Extents, RangeUpdate, Viewport, WindowItem, WindowRange, WindowerOptions};

/// A headless list-windowing engine.
///
/// This type is intentionally UI-agnostic:
/// - It never holds items or UI objects; only the item count and extents
///   cross its boundary.
/// - A host (or the `windower-adapter` crate) drives it with viewport sizes
///   and scroll offsets and reads ranges back.
/// - Rendering data is exposed via [`Windower::range_update`] and
///   zero-allocation iteration (`for_each_window_item`).
///
/// All queries are pure with respect to the current state: identical state
/// and arguments always produce identical results.
#[derive(Clone, Debug)]
pub struct Windower {
    layout: Layout,
    extents: Extents,
    overscan: usize,
    windowing: bool,
    viewport_extent: u32,
    scroll_offset: u64,
}

impl Windower {
    pub fn new(options: WindowerOptions) -> Self {
        wdebug!(
            count = options.count,
            overscan = options.overscan,
            windowing = options.windowing,
            "Windower::new"
        );
        Self {
            layout: Layout::new(options.count, &options.extents),
            extents: options.extents,
            overscan: options.overscan,
            windowing: options.windowing,
            viewport_extent: options.initial_viewport.viewport_extent,
            scroll_offset: options.initial_viewport.scroll_offset,
        }
    }

    pub fn count(&self) -> usize {
        self.layout.count()
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.overscan = overscan;
    }

    /// Whether windowing is active. When disabled, every range query reports
    /// the full item list: degraded rendering draws everything rather than
    /// nothing.
    pub fn windowing_enabled(&self) -> bool {
        self.windowing
    }

    pub fn set_windowing_enabled(&mut self, windowing: bool) {
        self.windowing = windowing;
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn viewport_extent(&self) -> u32 {
        self.viewport_extent
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    /// Snapshot of the current scroll position + viewport size.
    pub fn viewport(&self) -> Viewport {
        Viewport {
            scroll_offset: self.scroll_offset,
            viewport_extent: self.viewport_extent,
        }
    }

    /// Restores a previously captured snapshot, clamping the offset against
    /// the current content.
    pub fn restore_viewport(&mut self, viewport: Viewport) {
        self.set_viewport_and_scroll_clamped(viewport.viewport_extent, viewport.scroll_offset);
    }

    pub fn set_viewport_extent(&mut self, viewport_extent: u32) {
        self.viewport_extent = viewport_extent;
    }

    pub fn set_scroll_offset(&mut self, scroll_offset: u64) {
        wtrace!(scroll_offset, "set_scroll_offset");
        self.scroll_offset = scroll_offset;
    }

    pub fn set_scroll_offset_clamped(&mut self, scroll_offset: u64) {
        self.scroll_offset = self.clamp_scroll_offset(scroll_offset);
    }

    pub fn set_viewport_and_scroll(&mut self, viewport_extent: u32, scroll_offset: u64) {
        self.viewport_extent = viewport_extent;
        self.scroll_offset = scroll_offset;
    }

    pub fn set_viewport_and_scroll_clamped(&mut self, viewport_extent: u32, scroll_offset: u64) {
        self.viewport_extent = viewport_extent;
        self.scroll_offset = self.clamp_scroll_offset(scroll_offset);
    }

    /// Replaces the item list: new count, new extent source, prefix sums
    /// rebuilt. The scroll offset is reset only when it exceeds the new
    /// maximum.
    pub fn replace_items(&mut self, count: usize, extents: Extents) {
        wdebug!(count, "replace_items");
        self.layout = Layout::new(count, &extents);
        self.extents = extents;
        let max = self.max_scroll_offset();
        if self.scroll_offset > max {
            self.scroll_offset = max;
        }
    }

    /// Changes the item count, re-resolving extents from the current source.
    pub fn set_count(&mut self, count: usize) {
        if count == self.layout.count() {
            return;
        }
        let extents = self.extents.clone();
        self.replace_items(count, extents);
    }

    pub fn set_extents(&mut self, extents: Extents) {
        self.replace_items(self.layout.count(), extents);
    }

    /// Revises one cached extent in place (per-item layouts only).
    ///
    /// Returns `false` when the revision was discarded: index out of range,
    /// or a fixed-extent layout.
    pub fn update_extent(&mut self, index: usize, extent: u32) -> bool {
        self.layout.update_extent(index, extent)
    }

    pub fn total_extent(&self) -> u64 {
        self.layout.total_extent()
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.layout.max_scroll_offset(self.viewport_extent)
    }

    pub fn clamp_scroll_offset(&self, requested: u64) -> u64 {
        self.layout.clamp_scroll_offset(requested, self.viewport_extent)
    }

    /// Start offset of an item in the scroll axis.
    pub fn item_start(&self, index: usize) -> Option<u64> {
        (index < self.layout.count()).then(|| self.layout.leading_offset(index))
    }

    pub fn item_extent(&self, index: usize) -> Option<u32> {
        self.layout.extent_of(index)
    }

    pub fn item_end(&self, index: usize) -> Option<u64> {
        let start = self.item_start(index)?;
        let extent = self.item_extent(index)? as u64;
        Some(start.saturating_add(extent))
    }

    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        self.layout.index_at_offset(offset)
    }

    /// The strictly visible range (no overscan) for the current state.
    pub fn visible_range(&self) -> WindowRange {
        self.visible_range_for(self.scroll_offset, self.viewport_extent)
    }

    pub fn visible_range_for(&self, scroll_offset: u64, viewport_extent: u32) -> WindowRange {
        if !self.windowing {
            return self.full_range();
        }
        range::visible_range(&self.layout, scroll_offset, viewport_extent)
    }

    /// The windowed (overscanned) range for the current state.
    pub fn window_range(&self) -> WindowRange {
        self.window_range_for(self.scroll_offset, self.viewport_extent)
    }

    pub fn window_range_for(&self, scroll_offset: u64, viewport_extent: u32) -> WindowRange {
        if !self.windowing {
            return self.full_range();
        }
        range::window_range(&self.layout, scroll_offset, viewport_extent, self.overscan)
    }

    /// The full render payload for the current state: windowed range plus
    /// the leading offset of its first item and the total extent.
    pub fn range_update(&self) -> RangeUpdate {
        self.range_update_for(self.scroll_offset, self.viewport_extent)
    }

    pub fn range_update_for(&self, scroll_offset: u64, viewport_extent: u32) -> RangeUpdate {
        let range = self.window_range_for(scroll_offset, viewport_extent);
        RangeUpdate {
            start_index: range.start_index,
            end_index: range.end_index,
            leading_offset: self.layout.leading_offset(range.start_index),
            total_extent: self.layout.total_extent(),
        }
    }

    fn full_range(&self) -> WindowRange {
        WindowRange {
            start_index: 0,
            end_index: self.layout.count(),
        }
    }

    /// Iterates the windowed items without allocating, yielding each item's
    /// index and placement so hosts can absolutely position rendered rows.
    pub fn for_each_window_item(&self, f: impl FnMut(WindowItem)) {
        self.for_each_window_item_for(self.scroll_offset, self.viewport_extent, f);
    }

    pub fn for_each_window_item_for(
        &self,
        scroll_offset: u64,
        viewport_extent: u32,
        mut f: impl FnMut(WindowItem),
    ) {
        let range = self.window_range_for(scroll_offset, viewport_extent);
        if range.is_empty() {
            return;
        }
        let mut start = self.layout.leading_offset(range.start_index);
        for index in range.start_index..range.end_index {
            let extent = self.layout.extent_of(index).unwrap_or(0);
            f(WindowItem {
                index,
                start,
                extent,
            });
            start = start.saturating_add(extent as u64);
        }
    }

    /// Collects the windowed items into `out` (clears `out` first).
    ///
    /// Convenience wrapper around [`Self::for_each_window_item`]; hosts that
    /// care about allocations should reuse `out` across frames.
    pub fn collect_window_items(&self, out: &mut Vec<WindowItem>) {
        out.clear();
        self.for_each_window_item(|item| out.push(item));
    }

    /// Programmatically scrolls to an index (clamped) and returns the applied
    /// offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_index_offset(index, align);
        self.scroll_offset = offset;
        offset
    }

    /// The clamped scroll offset that brings `index` into view with the given
    /// alignment, without changing any state.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        let count = self.layout.count();
        if count == 0 {
            return 0;
        }
        let index = index.min(count - 1);
        let start = self.layout.leading_offset(index);
        let extent = self.layout.extent_of(index).unwrap_or(0) as u64;
        let end = start.saturating_add(extent);
        let view = self.viewport_extent as u64;

        let target = match align {
            Align::Start => start,
            Align::End => end.saturating_sub(view),
            Align::Center => {
                let center = start.saturating_add(extent / 2);
                center.saturating_sub(view / 2)
            }
            Align::Auto => {
                let cur = self.scroll_offset;
                let cur_end = cur.saturating_add(view);
                if start >= cur && end <= cur_end {
                    cur
                } else if start < cur {
                    start
                } else {
                    end.saturating_sub(view)
                }
            }
        };
        self.clamp_scroll_offset(target)
    }
}
