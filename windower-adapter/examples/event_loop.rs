// Example: a simulated host frame loop driving the adapter.
use windower::RangeUpdate;
use windower_adapter::{AdapterOptions, ScrollAdapter};

fn main() {
    let mut adapter =
        ScrollAdapter::new(AdapterOptions::uniform(100_000, 24.0).with_viewport_extent(600.0));
    adapter.set_on_range_changed(Some(|u: RangeUpdate| {
        println!(
            "render [{}, {}) at {}px of {}px",
            u.start_index, u.end_index, u.leading_offset, u.total_extent
        );
    }));

    // A burst of scroll events lands between two frames...
    for step in 0..50 {
        adapter.on_scroll(step as f64 * 97.0);
    }
    // ...and coalesces into a single recomputation.
    adapter.tick();

    adapter.on_resize(480.0);
    adapter.tick();

    // A bogus host value degrades to full rendering instead of failing.
    adapter.on_scroll(f64::NAN);
    adapter.tick();
    println!(
        "degraded={} last_error={:?}",
        adapter.is_degraded(),
        adapter.last_error()
    );

    adapter.on_scroll(1234.5);
    adapter.tick();
    println!("recovered={}", !adapter.is_degraded());
}
