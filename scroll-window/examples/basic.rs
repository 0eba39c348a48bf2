// Example: drive a RangeStrategy with a hand-rolled viewport.
use scroll_window::{BufferConfig, RangeStrategy, RenderedRange, ScrollBehavior, Viewport};

#[derive(Debug, Default)]
struct Pane {
    offset: f64,
    height: f64,
    len: usize,
    range: RenderedRange,
    content_offset: f64,
    total: f64,
}

impl Viewport for Pane {
    fn measure_scroll_offset(&self) -> f64 {
        self.offset
    }
    fn viewport_size(&self) -> f64 {
        self.height
    }
    fn data_length(&self) -> usize {
        self.len
    }
    fn rendered_range(&self) -> RenderedRange {
        self.range
    }
    fn set_rendered_range(&mut self, range: RenderedRange) {
        self.range = range;
    }
    fn set_rendered_content_offset(&mut self, offset: f64) {
        self.content_offset = offset;
    }
    fn set_total_content_size(&mut self, size: f64) {
        self.total = size;
    }
    fn scroll_to_offset(&mut self, offset: f64, _behavior: ScrollBehavior) {
        // A real container would scroll and report back through a scroll event.
        self.offset = offset.clamp(0.0, (self.total - self.height).max(0.0));
    }
}

fn main() {
    let rows: Vec<u32> = vec![20; 1_000];
    let mut strategy: RangeStrategy<u32, Pane> =
        RangeStrategy::new(|h: &u32| *h as f64, rows, BufferConfig::default());
    strategy.subscribe(|i| println!("first visible index -> {i}"));

    strategy.attach(Pane {
        height: 500.0,
        len: 1_000,
        ..Pane::default()
    });
    let pane = strategy.viewport().expect("attached");
    println!("total={} range={:?}", pane.total, pane.range);

    for offset in [400.0, 800.0, 12_000.0] {
        strategy.viewport_mut().expect("attached").offset = offset;
        strategy.on_content_scrolled();
        let pane = strategy.viewport().expect("attached");
        println!(
            "offset={offset} range={:?} content_offset={}",
            pane.range, pane.content_offset
        );
    }

    strategy.scroll_to_index(0, ScrollBehavior::Instant);
    strategy.on_content_scrolled();
    println!("after scroll_to_index(0): range={:?}", strategy.rendered_range());

    strategy.detach();
}
