use alloc::sync::Arc;

/// Where item extents come from.
///
/// `Fixed` is the fast path: every item has the same extent and all layout
/// queries are O(1) divisions. `PerItem` resolves one extent per index; the
/// results are cached in the layout's prefix-sum index when the item list is
/// (re)built.
///
/// This type is cheap to clone: the per-item closure is stored in an `Arc`.
#[derive(Clone)]
pub enum Extents {
    /// Every item has this extent.
    Fixed(u32),
    /// `f(i)` returns the extent of the item at index `i`, for `i < count`.
    PerItem(Arc<dyn Fn(usize) -> u32 + Send + Sync>),
}

impl Extents {
    pub fn per_item(f: impl Fn(usize) -> u32 + Send + Sync + 'static) -> Self {
        Self::PerItem(Arc::new(f))
    }

    /// Builds a per-item source backed by a pre-resolved extent table.
    ///
    /// Indexes past the table's end resolve to 0, so a table shorter than the
    /// item count never panics.
    pub fn from_table(table: impl Into<Arc<[u32]>>) -> Self {
        let table = table.into();
        Self::PerItem(Arc::new(move |i| table.get(i).copied().unwrap_or(0)))
    }

    pub(crate) fn resolve(&self, index: usize) -> u32 {
        match self {
            Self::Fixed(extent) => *extent,
            Self::PerItem(f) => f(index),
        }
    }
}

impl core::fmt::Debug for Extents {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fixed(extent) => f.debug_tuple("Fixed").field(extent).finish(),
            Self::PerItem(_) => f.write_str("PerItem(..)"),
        }
    }
}
