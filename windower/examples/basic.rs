// Example: minimal usage and the scroll-to helper.
use windower::{Align, Windower, WindowerOptions};

fn main() {
    let mut w = Windower::new(WindowerOptions::fixed(1_000_000, 1));
    w.set_viewport_and_scroll(10, 123_456);

    let mut items = Vec::new();
    w.collect_window_items(&mut items);
    println!("total_extent={}", w.total_extent());
    println!("window_range={:?}", w.window_range());
    println!("first_item={:?}", items.first());

    let off = w.scroll_to_index_offset(999_999, Align::End);
    w.set_scroll_offset_clamped(off);
    println!("after scroll_to_index: offset={}", w.scroll_offset());
}
