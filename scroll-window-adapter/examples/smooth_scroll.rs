use scroll_window::{BufferConfig, RangeStrategy, ScrollBehavior};
use scroll_window_adapter::{Controller, Easing, SimViewport};

fn main() {
    // Example: smooth scroll-to-index without holding any UI objects.
    //
    // A host would:
    // - forward a "scroll to index" command with ScrollBehavior::Smooth
    // - call tick(now_ms) in a frame loop / timer while is_animating()
    // - render items in rendered_range() starting at the viewport's content_offset()
    let rows: Vec<u32> = (0..10_000).map(|i| 18 + i % 7).collect();
    let strategy = RangeStrategy::new(|h: &u32| *h as f64, rows, BufferConfig::default());
    let mut c = Controller::new(strategy, SimViewport::new(480.0, 10_000))
        .with_smooth_scroll(240, Easing::EaseInOutCubic);

    let target = c.scroll_to_index(2_000, ScrollBehavior::Smooth, 0);
    println!("target_offset={target}");

    let mut now_ms = 0u64;
    while c.is_animating() {
        now_ms += 16;
        if let Some(off) = c.tick(now_ms) {
            if now_ms % 80 == 0 {
                println!("t={now_ms} off={off:.1} range={:?}", c.rendered_range());
            }
        }
    }

    let vp = c.viewport().expect("attached");
    println!(
        "done: off={} range={:?} content_offset={}",
        vp.scroll_offset(),
        vp.range(),
        vp.content_offset()
    );
}
