use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::Mutex;

use windower::RangeUpdate;

fn capture(adapter: &mut ScrollAdapter) -> Arc<Mutex<Vec<RangeUpdate>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    adapter.set_on_range_changed(Some({
        let seen = Arc::clone(&seen);
        move |update: RangeUpdate| seen.lock().unwrap().push(update)
    }));
    seen
}

#[test]
fn initial_state_commits_on_first_tick() {
    let mut a = ScrollAdapter::new(AdapterOptions::uniform(10, 5.0).with_viewport_extent(20.0));
    assert!(a.is_pending());
    assert_eq!(a.committed(), None);

    let update = a.tick().unwrap();
    assert_eq!(
        update,
        RangeUpdate {
            start_index: 0,
            end_index: 6,
            leading_offset: 0,
            total_extent: 50,
        }
    );
    assert_eq!(a.committed(), Some(update));
    assert!(!a.is_pending());
}

#[test]
fn rapid_scroll_events_coalesce_into_one_callback() {
    let mut a = ScrollAdapter::new(AdapterOptions::uniform(1000, 20.0).with_viewport_extent(100.0));
    let seen = capture(&mut a);
    a.tick();
    assert_eq!(seen.lock().unwrap().len(), 1);

    for i in 1..=50u32 {
        a.on_scroll(f64::from(i) * 40.0);
    }
    let update = a.tick().unwrap();

    // One recomputation, from the last offset (2000px / 20px = item 100).
    assert_eq!(seen.lock().unwrap().len(), 2);
    assert_eq!(update.start_index, 99);
    assert_eq!(update.end_index, 106);
    assert_eq!(update.leading_offset, 1980);

    // Nothing pending: a further tick is a no-op.
    assert_eq!(a.tick(), None);
    assert_eq!(seen.lock().unwrap().len(), 2);
}

#[test]
fn scroll_within_committed_window_does_not_notify() {
    let mut a = ScrollAdapter::new(AdapterOptions::uniform(100, 20.0).with_viewport_extent(100.0));
    let seen = capture(&mut a);
    let first = a.tick().unwrap();
    assert_eq!((first.start_index, first.end_index), (0, 7));

    // One item forward: the overscanned window is unchanged.
    a.on_scroll(20.0);
    assert!(a.is_pending());
    assert_eq!(a.tick(), None);
    assert_eq!(seen.lock().unwrap().len(), 1);
    assert_eq!(a.committed(), Some(first));
}

#[test]
fn fail_open_on_non_finite_offset_then_recover() {
    let mut a = ScrollAdapter::new(AdapterOptions::uniform(100, 10.0).with_viewport_extent(50.0));
    a.tick().unwrap();
    assert!(!a.is_degraded());

    a.on_scroll(f64::NAN);
    assert!(a.is_degraded());
    let update = a.tick().unwrap();
    assert_eq!(
        update,
        RangeUpdate {
            start_index: 0,
            end_index: 100,
            leading_offset: 0,
            total_extent: 1000,
        }
    );
    assert!(matches!(
        a.last_error(),
        Some(AdapterError::NonFiniteScrollOffset { value }) if value.is_nan()
    ));

    // The next valid scroll event clears the degradation.
    a.on_scroll(100.0);
    assert!(!a.is_degraded());
    let update = a.tick().unwrap();
    assert_eq!((update.start_index, update.end_index), (9, 16));
}

#[test]
fn fail_open_on_invalid_extents_until_items_revalidate() {
    let mut a = ScrollAdapter::new(AdapterOptions::uniform(50, -3.0).with_viewport_extent(100.0));
    assert!(a.is_degraded());
    assert_eq!(
        a.last_error(),
        Some(AdapterError::InvalidUniformExtent { value: -3.0 })
    );

    // Full list, zero-extent sanitized layout.
    let update = a.tick().unwrap();
    assert_eq!((update.start_index, update.end_index), (0, 50));
    assert_eq!(update.total_extent, 0);

    // Scroll events do not clear an extent-induced degradation.
    a.on_scroll(10.0);
    a.tick();
    assert!(a.is_degraded());

    // A clean item-list replacement does. The staged offset (10px) is kept.
    assert!(a.on_items_changed(50, ExtentInput::Uniform(12.0)).is_ok());
    assert!(!a.is_degraded());
    let update = a.tick().unwrap();
    assert_eq!((update.start_index, update.end_index), (0, 12));
    assert_eq!(update.total_extent, 600);
}

#[test]
fn invalid_per_item_extent_is_sanitized_and_reported() {
    let mut a = ScrollAdapter::new(AdapterOptions::uniform(4, 10.0).with_viewport_extent(30.0));
    a.tick();

    let err = a
        .on_items_changed(
            5,
            ExtentInput::per_item(|i| if i == 3 { f64::NAN } else { 10.0 }),
        )
        .unwrap_err();
    assert!(matches!(err, AdapterError::InvalidItemExtent { index: 3, .. }));
    assert!(a.is_degraded());

    // Fail open over the sanitized layout: the bad item contributes nothing.
    let update = a.tick().unwrap();
    assert_eq!((update.start_index, update.end_index), (0, 5));
    assert_eq!(update.total_extent, 40);
}

#[test]
fn stale_extent_revision_is_discarded() {
    let mut a = ScrollAdapter::new(
        AdapterOptions::per_item(4, |_| 10.0).with_viewport_extent(20.0),
    );
    let before = a.tick().unwrap();

    let err = a.update_item_extent(9, 12.0).unwrap_err();
    assert_eq!(err, AdapterError::StaleIndex { index: 9, count: 4 });
    assert!(!a.is_pending());
    assert_eq!(a.tick(), None);
    assert_eq!(a.committed(), Some(before));

    // An in-range revision applies normally.
    a.update_item_extent(2, 25.0).unwrap();
    let update = a.tick().unwrap();
    assert_eq!(update.total_extent, 10 + 10 + 25 + 10);
}

#[test]
fn invalid_extent_revision_fails_open() {
    let mut a = ScrollAdapter::new(
        AdapterOptions::per_item(20, |_| 10.0).with_viewport_extent(50.0),
    );
    a.tick().unwrap();

    let err = a.update_item_extent(3, f64::INFINITY).unwrap_err();
    assert!(matches!(err, AdapterError::InvalidItemExtent { index: 3, .. }));
    assert!(a.is_degraded());
    let update = a.tick().unwrap();
    assert_eq!((update.start_index, update.end_index), (0, 20));
}

#[test]
fn resize_reclamps_an_overscrolled_offset() {
    // 6 items of 30px = 180 total. The host reported 150 while the viewport
    // was 120 (overscrolled); a resize to 60 re-clamps to the new max.
    let mut a = ScrollAdapter::new(
        AdapterOptions::uniform(6, 30.0)
            .with_viewport_extent(120.0)
            .with_scroll_offset(150.0),
    );
    assert_eq!(a.engine().scroll_offset(), 150);

    a.on_resize(60.0);
    assert_eq!(a.engine().scroll_offset(), 120);
    let update = a.tick().unwrap();
    assert!(update.start_index <= update.end_index && update.end_index <= 6);
}

#[test]
fn items_changed_resets_offset_only_when_beyond_new_total() {
    let mut a = ScrollAdapter::new(
        AdapterOptions::uniform(100, 10.0)
            .with_viewport_extent(50.0)
            .with_scroll_offset(300.0),
    );
    a.tick();

    // Still within bounds: offset untouched.
    a.on_items_changed(50, ExtentInput::Uniform(10.0)).unwrap();
    assert_eq!(a.engine().scroll_offset(), 300);

    // Beyond the new max (total 100 - viewport 50): clamped.
    a.on_items_changed(10, ExtentInput::Uniform(10.0)).unwrap();
    assert_eq!(a.engine().scroll_offset(), 50);
}

#[test]
fn negative_offsets_clamp_instead_of_degrading() {
    let mut a = ScrollAdapter::new(AdapterOptions::uniform(100, 10.0).with_viewport_extent(50.0));
    a.tick();
    a.on_scroll(100.0);
    a.tick();

    // Elastic overscroll at the top.
    a.on_scroll(-12.5);
    assert!(!a.is_degraded());
    assert_eq!(a.last_error(), None);
    let update = a.tick().unwrap();
    assert_eq!(update.start_index, 0);
    assert_eq!(a.engine().scroll_offset(), 0);
}

#[test]
fn fractional_extents_round_to_whole_pixels() {
    let a = ScrollAdapter::new(AdapterOptions::per_item(3, |i| {
        [10.4, 10.5, 0.0][i]
    }));
    assert_eq!(a.engine().item_extent(0), Some(10));
    assert_eq!(a.engine().item_extent(1), Some(11));
    assert_eq!(a.engine().item_extent(2), Some(0));
    assert_eq!(a.engine().total_extent(), 21);
}

#[test]
fn cancel_pending_drops_scheduled_work() {
    let mut a = ScrollAdapter::new(AdapterOptions::uniform(100, 10.0).with_viewport_extent(50.0));
    let seen = capture(&mut a);
    a.tick();

    a.on_scroll(500.0);
    assert!(a.is_pending());
    a.cancel_pending();
    assert_eq!(a.tick(), None);
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn callback_payload_matches_committed_state() {
    let mut a = ScrollAdapter::new(AdapterOptions::uniform(200, 15.0).with_viewport_extent(90.0));
    let seen = capture(&mut a);

    a.on_scroll(450.0);
    let returned = a.tick().unwrap();
    let observed = *seen.lock().unwrap().last().unwrap();
    assert_eq!(returned, observed);
    assert_eq!(a.committed(), Some(returned));
}
