use scroll_window::{BufferConfig, RangeStrategy};
use scroll_window_adapter::{Controller, SimViewport};

#[derive(Clone, Debug)]
struct Message {
    id: u64,
    height: f64,
}

fn main() {
    // Example: preserve visual scroll position across "prepend" (chat/timeline load older messages).
    //
    // The controller captures an anchor (item id + offset inside the item) before replacing
    // the items and scrolls so the same message stays at the top afterwards.
    let page = |ids: std::ops::Range<u64>| -> Vec<Message> {
        ids.map(|id| Message {
            id,
            height: 24.0 + (id % 3) as f64 * 12.0,
        })
        .collect()
    };

    let strategy = RangeStrategy::new(|m: &Message| m.height, page(1000..1100), BufferConfig::default());
    let mut c = Controller::new(strategy, SimViewport::new(300.0, 100));
    c.on_scroll(1_234.0);
    println!(
        "before prepend: off={} range={:?}",
        c.scroll_offset(),
        c.rendered_range()
    );

    let mut older = page(900..1000);
    older.extend(page(1000..1100));
    let ok = c.set_items_anchored(older, |m| m.id);

    println!(
        "after prepend: ok={ok} off={} range={:?} first_visible={:?}",
        c.scroll_offset(),
        c.rendered_range(),
        c.strategy().first_visible_index()
    );
}
