use alloc::vec::Vec;

use crate::Extents;
use crate::prefix::PrefixSums;

#[derive(Clone, Debug)]
enum Table {
    Fixed {
        extent: u32,
    },
    PerItem {
        extents: Vec<u32>,
        sums: PrefixSums,
    },
}

/// The layout reconciler: owns the extent table and its prefix sums.
///
/// Guarantees the pixel-exactness property: for any index,
/// [`Layout::leading_offset`] equals the cumulative extent of all items
/// strictly before it, so a windowed render never drifts from where a full
/// render would place the same items.
#[derive(Clone, Debug)]
pub struct Layout {
    count: usize,
    table: Table,
}

impl Layout {
    /// Builds a layout for `count` items, resolving per-item extents once.
    pub fn new(count: usize, source: &Extents) -> Self {
        let table = match source {
            Extents::Fixed(extent) => Table::Fixed { extent: *extent },
            Extents::PerItem(f) => {
                let mut extents = Vec::new();
                extents.reserve_exact(count);
                for i in 0..count {
                    extents.push(f(i));
                }
                let sums = PrefixSums::from_extents(&extents);
                Table::PerItem { extents, sums }
            }
        };
        wdebug!(count, "Layout::new");
        Self { count, table }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// The uniform extent, when this layout is on the fixed fast path.
    pub fn fixed_extent(&self) -> Option<u32> {
        match &self.table {
            Table::Fixed { extent } => Some(*extent),
            Table::PerItem { .. } => None,
        }
    }

    /// Sum of all item extents; the scroll track size.
    pub fn total_extent(&self) -> u64 {
        match &self.table {
            Table::Fixed { extent } => (self.count as u64).saturating_mul(*extent as u64),
            Table::PerItem { sums, .. } => sums.total(),
        }
    }

    /// Cumulative extent of all items strictly before `index`.
    pub fn leading_offset(&self, index: usize) -> u64 {
        let index = index.min(self.count);
        match &self.table {
            Table::Fixed { extent } => (index as u64).saturating_mul(*extent as u64),
            Table::PerItem { sums, .. } => sums.prefix_sum(index),
        }
    }

    pub fn extent_of(&self, index: usize) -> Option<u32> {
        if index >= self.count {
            return None;
        }
        match &self.table {
            Table::Fixed { extent } => Some(*extent),
            Table::PerItem { extents, .. } => extents.get(index).copied(),
        }
    }

    /// Index of the item covering `offset`, clamped to the last item for
    /// offsets past the end. `None` when the list is empty.
    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let last = self.count - 1;
        let index = match &self.table {
            Table::Fixed { extent } => {
                if *extent == 0 {
                    last
                } else {
                    (offset / *extent as u64).min(last as u64) as usize
                }
            }
            Table::PerItem { sums, .. } => sums.lower_bound(offset).min(last),
        };
        Some(index)
    }

    /// Revises the cached extent of one item.
    ///
    /// Returns `false` (and applies nothing) when `index` is out of range or
    /// the layout is on the fixed fast path, where per-item revisions have no
    /// meaning.
    pub fn update_extent(&mut self, index: usize, extent: u32) -> bool {
        if index >= self.count {
            wwarn!(index, count = self.count, "update_extent: index out of range");
            return false;
        }
        match &mut self.table {
            Table::Fixed { .. } => {
                wwarn!(index, "update_extent: fixed-extent layout");
                false
            }
            Table::PerItem { extents, sums } => {
                let cur = extents[index];
                if cur == extent {
                    return true;
                }
                extents[index] = extent;
                sums.add(index, extent as i64 - cur as i64);
                wtrace!(index, extent, "update_extent");
                true
            }
        }
    }

    pub fn max_scroll_offset(&self, viewport_extent: u32) -> u64 {
        self.total_extent().saturating_sub(viewport_extent as u64)
    }

    /// `min(requested, max(0, total_extent - viewport_extent))`.
    pub fn clamp_scroll_offset(&self, requested: u64, viewport_extent: u32) -> u64 {
        requested.min(self.max_scroll_offset(viewport_extent))
    }
}
