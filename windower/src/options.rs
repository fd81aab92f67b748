use crate::{Extents, Viewport};

/// Configuration for [`crate::Windower`].
///
/// Cheap to clone: the only heavy field is the per-item extent closure, which
/// is `Arc`-shared inside [`Extents`].
#[derive(Clone, Debug)]
pub struct WindowerOptions {
    pub count: usize,
    pub extents: Extents,
    /// Extra items materialized beyond the visible range on each side, to
    /// mask scroll-induced pop-in.
    pub overscan: usize,
    /// When `false`, every range query reports the full item list.
    pub windowing: bool,
    /// Viewport state applied by `Windower::new`.
    pub initial_viewport: Viewport,
}

impl WindowerOptions {
    pub fn new(count: usize, extents: Extents) -> Self {
        Self {
            count,
            extents,
            overscan: 1,
            windowing: true,
            initial_viewport: Viewport::default(),
        }
    }

    /// Options for a list where every item has the same extent.
    pub fn fixed(count: usize, extent: u32) -> Self {
        Self::new(count, Extents::Fixed(extent))
    }

    /// Options for a list with per-index extents.
    pub fn per_item(count: usize, f: impl Fn(usize) -> u32 + Send + Sync + 'static) -> Self {
        Self::new(count, Extents::per_item(f))
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_windowing(mut self, windowing: bool) -> Self {
        self.windowing = windowing;
        self
    }

    pub fn with_initial_viewport(mut self, initial_viewport: Viewport) -> Self {
        self.initial_viewport = initial_viewport;
        self
    }
}
