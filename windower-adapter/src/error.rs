use thiserror::Error;

/// Input anomalies observed at the host boundary.
///
/// None of these are fatal. Configuration errors (invalid extents, viewport,
/// or offset values) switch the adapter into passthrough so the host renders
/// the full list unvirtualized; stale extent revisions are discarded without
/// touching committed state. Rendering too much is always preferred over
/// rendering nothing.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdapterError {
    /// The uniform item extent is NaN, infinite, or negative.
    #[error("invalid uniform extent: {value}")]
    InvalidUniformExtent { value: f64 },
    /// A per-item extent is NaN, infinite, or negative.
    #[error("invalid extent for item {index}: {value}")]
    InvalidItemExtent { index: usize, value: f64 },
    /// The host reported a NaN or infinite scroll offset.
    #[error("non-finite scroll offset: {value}")]
    NonFiniteScrollOffset { value: f64 },
    /// The host reported a NaN, infinite, or negative viewport extent.
    #[error("invalid viewport extent: {value}")]
    InvalidViewportExtent { value: f64 },
    /// An extent revision targeted an index beyond the current item count,
    /// typically a stale callback racing an item-list replacement.
    #[error("extent revision for index {index} is stale (item count is {count})")]
    StaleIndex { index: usize, count: usize },
}
