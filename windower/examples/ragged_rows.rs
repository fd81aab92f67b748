// Example: per-item extents, then a single-row revision after the host
// measured a rendered row.
use windower::{Windower, WindowerOptions};

fn main() {
    let mut w = Windower::new(WindowerOptions::per_item(10_000, |i| 18 + (i % 5) as u32 * 7));
    w.set_viewport_and_scroll(240, 54_321);

    let update = w.range_update();
    println!(
        "render [{}, {}) offset by {}px inside a {}px track",
        update.start_index, update.end_index, update.leading_offset, update.total_extent
    );

    // The host measured row 5000 taller than estimated.
    w.update_extent(5_000, 64);
    println!("after measurement: total_extent={}", w.total_extent());
    println!("row 5001 now starts at {:?}", w.item_start(5_001));
}
