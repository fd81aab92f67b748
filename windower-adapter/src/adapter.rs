use alloc::sync::Arc;

use windower::{RangeUpdate, Viewport, Windower, WindowerOptions};

use crate::AdapterError;
use crate::config::{self, AdapterOptions, ExtentInput};

/// A callback fired with the freshly committed [`RangeUpdate`].
pub type RangeCallback = Arc<dyn Fn(RangeUpdate) + Send + Sync>;

/// Bridges host scroll/resize/item notifications into the windowing engine.
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - [`ScrollAdapter::on_scroll`] / [`ScrollAdapter::on_resize`] when UI
///   events occur
/// - [`ScrollAdapter::on_items_changed`] when the item list is replaced
/// - [`ScrollAdapter::tick`] once per frame (or per throttle interval)
///
/// Events only stage state; `tick` performs at most one recomputation per
/// call, so a burst of events between ticks coalesces into a single
/// downstream update. A newer event's values supersede an older pending
/// one's. The registered callback fires only when the committed range
/// actually changed, compared by value.
///
/// Malformed inputs never propagate: the adapter records the error, logs it,
/// and fails open by committing the full item list (see [`AdapterError`]).
pub struct ScrollAdapter {
    engine: Windower,
    extents_ok: bool,
    offset_ok: bool,
    viewport_ok: bool,
    dirty: bool,
    last_error: Option<AdapterError>,
    committed: Option<RangeUpdate>,
    on_range_changed: Option<RangeCallback>,
}

impl ScrollAdapter {
    pub fn new(options: AdapterOptions) -> Self {
        let (extents, extent_err) = config::resolve_extents(options.count, &options.extents);
        let viewport = config::extent_px(options.viewport_extent);
        let offset = config::offset_px(options.scroll_offset);

        let engine = Windower::new(
            WindowerOptions::new(options.count, extents)
                .with_overscan(options.overscan)
                .with_initial_viewport(Viewport {
                    scroll_offset: offset.unwrap_or(0),
                    viewport_extent: viewport.unwrap_or(0),
                }),
        );

        let mut adapter = Self {
            engine,
            extents_ok: extent_err.is_none(),
            offset_ok: offset.is_some(),
            viewport_ok: viewport.is_some(),
            dirty: true, // the initial state commits on the first tick
            last_error: None,
            committed: None,
            on_range_changed: None,
        };
        if let Some(err) = extent_err {
            adapter.record(err);
        }
        if viewport.is_none() {
            adapter.record(AdapterError::InvalidViewportExtent {
                value: options.viewport_extent,
            });
        }
        if offset.is_none() {
            adapter.record(AdapterError::NonFiniteScrollOffset {
                value: options.scroll_offset,
            });
        }
        adapter
    }

    pub fn engine(&self) -> &Windower {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Windower {
        &mut self.engine
    }

    pub fn set_on_range_changed(
        &mut self,
        on_range_changed: Option<impl Fn(RangeUpdate) + Send + Sync + 'static>,
    ) {
        self.on_range_changed = on_range_changed.map(|f| Arc::new(f) as _);
    }

    /// The most recently committed update, if any tick has run.
    pub fn committed(&self) -> Option<RangeUpdate> {
        self.committed
    }

    /// Whether a recomputation is pending for the next tick.
    pub fn is_pending(&self) -> bool {
        self.dirty
    }

    /// Whether the adapter is currently failing open (rendering the full
    /// list) because of malformed input.
    pub fn is_degraded(&self) -> bool {
        !(self.extents_ok && self.offset_ok && self.viewport_ok)
    }

    /// The most recent input anomaly, kept for host diagnostics.
    pub fn last_error(&self) -> Option<AdapterError> {
        self.last_error
    }

    /// Records a host scroll position (host pixel space).
    ///
    /// A finite value replaces any pending offset and clears an earlier
    /// offset-induced degradation; a non-finite value fails open until the
    /// next valid scroll event.
    pub fn on_scroll(&mut self, offset: f64) {
        match config::offset_px(offset) {
            Some(px) => {
                self.offset_ok = true;
                self.engine.set_scroll_offset(px);
            }
            None => {
                self.offset_ok = false;
                self.record(AdapterError::NonFiniteScrollOffset { value: offset });
            }
        }
        self.dirty = true;
    }

    /// Records a host viewport size (host pixel space) and re-clamps the
    /// scroll offset against the new bounds.
    pub fn on_resize(&mut self, viewport_extent: f64) {
        match config::extent_px(viewport_extent) {
            Some(px) => {
                self.viewport_ok = true;
                let offset = self.engine.scroll_offset();
                self.engine.set_viewport_and_scroll_clamped(px, offset);
            }
            None => {
                self.viewport_ok = false;
                self.record(AdapterError::InvalidViewportExtent {
                    value: viewport_extent,
                });
            }
        }
        self.dirty = true;
    }

    /// Replaces the item list.
    ///
    /// Any pending recomputation now runs against the new layout (stale
    /// indices never reach an extent lookup), the scroll offset is reset only
    /// if it exceeds the new total extent, and a recomputation is scheduled.
    ///
    /// `Err` means the new extents failed validation and the adapter is
    /// failing open until a later `on_items_changed` validates cleanly.
    pub fn on_items_changed(
        &mut self,
        count: usize,
        extents: ExtentInput,
    ) -> Result<(), AdapterError> {
        let (resolved, err) = config::resolve_extents(count, &extents);
        wtrace!(count, ok = err.is_none(), "on_items_changed");
        self.engine.replace_items(count, resolved);
        self.dirty = true;
        match err {
            None => {
                self.extents_ok = true;
                Ok(())
            }
            Some(err) => {
                self.extents_ok = false;
                self.record(err);
                Err(err)
            }
        }
    }

    /// Revises one item's extent (host pixel space), e.g. after the host
    /// measured a rendered row.
    ///
    /// Out-of-range indexes are discarded ([`AdapterError::StaleIndex`]);
    /// revisions against a uniform-extent configuration are ignored.
    pub fn update_item_extent(&mut self, index: usize, extent: f64) -> Result<(), AdapterError> {
        let count = self.engine.count();
        if index >= count {
            let err = AdapterError::StaleIndex { index, count };
            self.record(err);
            return Err(err);
        }
        match config::extent_px(extent) {
            Some(px) => {
                if self.engine.update_extent(index, px) {
                    self.dirty = true;
                }
                Ok(())
            }
            None => {
                self.extents_ok = false;
                self.dirty = true;
                let err = AdapterError::InvalidItemExtent { index, value: extent };
                self.record(err);
                Err(err)
            }
        }
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.engine.set_overscan(overscan);
        self.dirty = true;
    }

    /// Drops any pending recomputation without running it. Call when tearing
    /// the list down so a scheduled frame cannot observe stale state.
    pub fn cancel_pending(&mut self) {
        self.dirty = false;
    }

    /// Runs the single pending recomputation, if any.
    ///
    /// Clamps the staged offset, recomputes the range, and commits it. The
    /// registered callback fires (and `Some` is returned) only when the
    /// committed update differs by value from the previous one.
    pub fn tick(&mut self) -> Option<RangeUpdate> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;

        self.engine.set_windowing_enabled(!self.is_degraded());
        let offset = self.engine.scroll_offset();
        self.engine.set_scroll_offset_clamped(offset);

        let update = self.engine.range_update();
        if self.committed == Some(update) {
            return None;
        }
        wtrace!(
            start = update.start_index,
            end = update.end_index,
            "commit"
        );
        self.committed = Some(update);
        if let Some(on_range_changed) = &self.on_range_changed {
            on_range_changed(update);
        }
        Some(update)
    }

    fn record(&mut self, err: AdapterError) {
        wwarn!(error = %err, "input rejected");
        self.last_error = Some(err);
    }
}

impl core::fmt::Debug for ScrollAdapter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollAdapter")
            .field("engine", &self.engine)
            .field("extents_ok", &self.extents_ok)
            .field("offset_ok", &self.offset_ok)
            .field("viewport_ok", &self.viewport_ok)
            .field("dirty", &self.dirty)
            .field("last_error", &self.last_error)
            .field("committed", &self.committed)
            .finish_non_exhaustive()
    }
}
