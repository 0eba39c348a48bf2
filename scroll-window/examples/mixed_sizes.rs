// Example: heterogeneous item sizes and a rejected buffer update.
use scroll_window::{RangeStrategy, ScrollBehavior, SizingOracle, Viewport};
use scroll_window::{RenderedRange, ScrollState, compute_rendered_range};

struct Message {
    lines: u32,
}

fn height(m: &Message) -> f64 {
    8.0 + 16.0 * m.lines as f64
}

#[derive(Default)]
struct Log {
    offset: f64,
    range: RenderedRange,
}

impl Viewport for Log {
    fn measure_scroll_offset(&self) -> f64 {
        self.offset
    }
    fn viewport_size(&self) -> f64 {
        400.0
    }
    fn data_length(&self) -> usize {
        200
    }
    fn rendered_range(&self) -> RenderedRange {
        self.range
    }
    fn set_rendered_range(&mut self, range: RenderedRange) {
        self.range = range;
    }
    fn set_rendered_content_offset(&mut self, _offset: f64) {}
    fn set_total_content_size(&mut self, _size: f64) {}
    fn scroll_to_offset(&mut self, _offset: f64, _behavior: ScrollBehavior) {}
}

fn messages() -> Vec<Message> {
    (0..200).map(|i| Message { lines: 1 + i % 5 }).collect()
}

fn main() {
    // The oracle walks the actual sizes; no fixed-size division.
    let oracle = SizingOracle::from_fn(height, messages());
    println!("total={}", oracle.total_size());
    for offset in [0.0, 24.0, 25.0, 1_000.0] {
        println!(
            "offset={offset} -> item {}",
            oracle.first_index_at_or_beyond(offset)
        );
    }

    // The range computation is also available as a pure function.
    let update = compute_rendered_range(
        &oracle,
        Default::default(),
        ScrollState {
            scroll_offset: 1_000.0,
            viewport_size: 400.0,
            data_length: oracle.len(),
        },
        RenderedRange::EMPTY,
    );
    println!("pure update: {update:?}");

    let mut strategy: RangeStrategy<Message, Log> =
        RangeStrategy::with_buffer_px(height, messages(), 150.0, 300.0).expect("valid buffers");
    strategy.attach(Log::default());
    println!("initial range={:?}", strategy.rendered_range());

    match strategy.update_item_and_buffer_size(height, messages(), 300.0, 100.0) {
        Ok(()) => println!("unexpectedly accepted"),
        Err(err) => println!("rejected: {err}; still {:?}", strategy.buffer_config()),
    }
}
