use crate::*;

use alloc::rc::Rc;
use alloc::string::ToString;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as usize
    }

    fn gen_px(&mut self, max: usize) -> f64 {
        self.gen_range_usize(0, max + 1) as f64
    }
}

/// In-memory viewport that counts every call made on it.
#[derive(Debug, Default)]
struct TestViewport {
    scroll_offset: f64,
    viewport_size: f64,
    data_length: usize,
    range: RenderedRange,
    content_offset: f64,
    total_size: f64,
    scrolled_to: Vec<(f64, ScrollBehavior)>,
    range_commits: usize,
    calls: Rc<Cell<usize>>,
}

impl TestViewport {
    fn new(viewport_size: f64, data_length: usize) -> Self {
        Self {
            viewport_size,
            data_length,
            ..Self::default()
        }
    }

    fn touch(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl Viewport for TestViewport {
    fn measure_scroll_offset(&self) -> f64 {
        self.touch();
        self.scroll_offset
    }

    fn viewport_size(&self) -> f64 {
        self.touch();
        self.viewport_size
    }

    fn data_length(&self) -> usize {
        self.touch();
        self.data_length
    }

    fn rendered_range(&self) -> RenderedRange {
        self.touch();
        self.range
    }

    fn set_rendered_range(&mut self, range: RenderedRange) {
        self.touch();
        self.range_commits += 1;
        self.range = range;
    }

    fn set_rendered_content_offset(&mut self, offset: f64) {
        self.touch();
        self.content_offset = offset;
    }

    fn set_total_content_size(&mut self, size: f64) {
        self.touch();
        self.total_size = size;
    }

    fn scroll_to_offset(&mut self, offset: f64, behavior: ScrollBehavior) {
        self.touch();
        self.scrolled_to.push((offset, behavior));
    }
}

fn uniform(count: usize) -> Vec<u32> {
    vec![20; count]
}

fn px(item: &u32) -> f64 {
    *item as f64
}

/// 50 items of 20px in a 500px viewport with 100/200 buffers.
fn fifty_rows() -> RangeStrategy<u32, TestViewport> {
    RangeStrategy::with_buffer_px(px, uniform(50), 100.0, 200.0).unwrap()
}

fn record_indexes(s: &mut RangeStrategy<u32, TestViewport>) -> Rc<RefCell<Vec<usize>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    s.subscribe(move |i| sink.borrow_mut().push(i)).unwrap();
    seen
}

fn scroll(s: &mut RangeStrategy<u32, TestViewport>, offset: f64) {
    s.viewport_mut().unwrap().scroll_offset = offset;
    s.on_content_scrolled();
}

#[test]
fn oracle_sums_sizes() {
    let oracle = SizingOracle::from_fn(px, vec![10u32, 50, 10, 50]);
    assert_eq!(oracle.len(), 4);
    assert_eq!(oracle.total_size(), 120.0);
    assert_eq!(oracle.cumulative_size(0), 0.0);
    assert_eq!(oracle.cumulative_size(1), 10.0);
    assert_eq!(oracle.cumulative_size(3), 70.0);
    assert_eq!(oracle.cumulative_size(4), 120.0);
    // Past the end clamps to the total.
    assert_eq!(oracle.cumulative_size(99), 120.0);
    assert_eq!(oracle.item_size(1), Some(50.0));
    assert_eq!(oracle.item_size(4), None);
}

#[test]
fn first_index_at_or_beyond_boundaries() {
    let oracle = SizingOracle::from_fn(px, uniform(5)); // 0..100
    assert_eq!(oracle.first_index_at_or_beyond(-10.0), 0);
    assert_eq!(oracle.first_index_at_or_beyond(0.0), 0);
    assert_eq!(oracle.first_index_at_or_beyond(19.5), 0);
    // Exactly on a boundary maps to the item starting there.
    assert_eq!(oracle.first_index_at_or_beyond(20.0), 1);
    assert_eq!(oracle.first_index_at_or_beyond(99.0), 4);
    assert_eq!(oracle.first_index_at_or_beyond(100.0), 5);
    assert_eq!(oracle.first_index_at_or_beyond(1e9), 5);

    let empty = SizingOracle::from_fn(px, Vec::<u32>::new());
    assert_eq!(empty.total_size(), 0.0);
    assert_eq!(empty.first_index_at_or_beyond(0.0), 0);
    assert_eq!(empty.first_index_at_or_beyond(500.0), 0);
}

#[test]
fn first_index_follows_cumulative_sums_for_mixed_sizes() {
    // Alternating 10/50: item starts are 0, 10, 60, 70, 120, 130, ...
    let items: Vec<u32> = (0..10).map(|i| if i % 2 == 0 { 10 } else { 50 }).collect();
    let oracle = SizingOracle::from_fn(px, items);
    assert_eq!(oracle.first_index_at_or_beyond(5.0), 0);
    assert_eq!(oracle.first_index_at_or_beyond(10.0), 1);
    assert_eq!(oracle.first_index_at_or_beyond(59.0), 1);
    assert_eq!(oracle.first_index_at_or_beyond(60.0), 2);
    assert_eq!(oracle.first_index_at_or_beyond(65.0), 2);
    assert_eq!(oracle.first_index_at_or_beyond(119.0), 3);
    assert_eq!(oracle.first_index_at_or_beyond(125.0), 4);
    assert_eq!(oracle.first_index_at_or_beyond(300.0), 10);
}

#[test]
fn cumulative_size_is_monotonic() {
    let mut rng = Lcg::new(7);
    let items: Vec<u32> = (0..200).map(|_| rng.gen_range_usize(0, 80) as u32).collect();
    let oracle = SizingOracle::from_fn(px, items);
    let mut prev = 0.0;
    for k in 0..=oracle.len() {
        let cur = oracle.cumulative_size(k);
        assert!(cur >= prev, "cumulative_size({k}) = {cur} < {prev}");
        prev = cur;
    }
    assert_eq!(prev, oracle.total_size());
}

#[test]
fn negative_and_nan_sizes_count_as_zero() {
    let oracle = SizingOracle::from_fn(
        |v: &f64| *v,
        vec![10.0, -5.0, f64::NAN, 20.0],
    );
    assert_eq!(oracle.total_size(), 30.0);
    assert_eq!(oracle.cumulative_size(3), 10.0);
    assert_eq!(oracle.first_index_at_or_beyond(10.0), 3);
}

#[test]
fn zero_size_leading_items_do_not_shift_offset_zero() {
    let oracle = SizingOracle::from_fn(px, vec![0, 0, 20, 20]);
    assert_eq!(oracle.first_index_at_or_beyond(-1.0), 0);
    assert_eq!(oracle.first_index_at_or_beyond(0.0), 0);
    // Any positive offset walks past the empty items.
    assert_eq!(oracle.first_index_at_or_beyond(0.5), 2);
    assert_eq!(oracle.first_index_at_or_beyond(20.0), 3);
}

#[test]
fn oracle_reflects_size_fn_changes_between_calls() {
    let scale = Arc::new(core::sync::atomic::AtomicU32::new(1));
    let s = Arc::clone(&scale);
    let oracle = SizingOracle::from_fn(
        move |v: &u32| (*v * s.load(core::sync::atomic::Ordering::Relaxed)) as f64,
        uniform(3),
    );
    assert_eq!(oracle.total_size(), 60.0);
    scale.store(2, core::sync::atomic::Ordering::Relaxed);
    assert_eq!(oracle.total_size(), 120.0);
}

#[test]
fn buffer_config_validation() {
    let cfg = BufferConfig::new(100.0, 200.0).unwrap();
    assert_eq!(cfg.min_buffer_px(), 100.0);
    assert_eq!(cfg.max_buffer_px(), 200.0);
    assert_eq!(BufferConfig::default(), cfg);
    assert!(BufferConfig::new(0.0, 0.0).is_ok());
    assert!(BufferConfig::new(50.0, 50.0).is_ok());

    assert_eq!(
        BufferConfig::new(200.0, 100.0),
        Err(ConfigError::MaxBelowMin {
            min_buffer_px: 200.0,
            max_buffer_px: 100.0,
        })
    );
    assert!(matches!(
        BufferConfig::new(-1.0, 100.0),
        Err(ConfigError::InvalidMin { .. })
    ));
    assert!(matches!(
        BufferConfig::new(f64::NAN, 100.0),
        Err(ConfigError::InvalidMin { .. })
    ));
    assert!(matches!(
        BufferConfig::new(10.0, f64::INFINITY),
        Err(ConfigError::InvalidMax { .. })
    ));

    assert_eq!(cfg.with_max_buffer_px(300.0).unwrap().max_buffer_px(), 300.0);
    assert!(cfg.with_min_buffer_px(250.0).is_err());
}

#[test]
fn config_error_message_names_both_thresholds() {
    let err = BufferConfig::new(200.0, 100.0).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("200"), "{msg}");
    assert!(msg.contains("100"), "{msg}");
}

#[test]
fn rendered_range_helpers() {
    let r = RenderedRange::new(3, 8);
    assert_eq!(r.len(), 5);
    assert!(r.contains(3));
    assert!(!r.contains(8));
    assert_eq!(r.clamped(5), RenderedRange::new(3, 5));
    assert_eq!(r.clamped(2), RenderedRange::new(2, 2));
    assert!(RenderedRange::EMPTY.is_empty());
    assert_eq!(core::ops::Range::from(r), 3..8);
}

#[test]
fn attach_at_top_renders_viewport_plus_buffer() {
    let mut s = fifty_rows();
    let seen = record_indexes(&mut s);
    s.attach(TestViewport::new(500.0, 50));

    let vp = s.viewport().unwrap();
    assert_eq!(vp.total_size, 1000.0);
    assert_eq!(vp.range.start, 0);
    assert!(vp.range.end >= 35, "end = {}", vp.range.end);
    assert_eq!(vp.range, RenderedRange::new(0, 35));
    assert_eq!(vp.content_offset, 0.0);
    assert_eq!(*seen.borrow(), vec![0]);
    assert_eq!(s.first_visible_index(), Some(0));
}

#[test]
fn scrolling_down_expands_end_and_pulls_start() {
    let mut s = fifty_rows();
    let seen = record_indexes(&mut s);
    s.attach(TestViewport::new(500.0, 50));

    // Start buffer is 400px, so only the end side grows.
    scroll(&mut s, 400.0);
    let vp = s.viewport().unwrap();
    assert_eq!(vp.range, RenderedRange::new(15, 50));
    assert_eq!(vp.content_offset, 300.0);
    assert_eq!(*seen.borrow(), vec![0, 20]);
}

#[test]
fn scrolling_up_expands_start_when_buffer_runs_low() {
    let mut s = fifty_rows();
    s.attach(TestViewport::new(500.0, 50));
    scroll(&mut s, 400.0);
    assert_eq!(s.rendered_range(), Some(RenderedRange::new(15, 50)));

    // 20px of start buffer left (< 100): grow backward by items covering 180px.
    scroll(&mut s, 320.0);
    let vp = s.viewport().unwrap();
    assert_eq!(vp.range, RenderedRange::new(6, 46));
    assert_eq!(vp.content_offset, 120.0);
    assert_eq!(s.first_visible_index(), Some(16));
}

#[test]
fn adequate_buffers_leave_range_untouched() {
    let mut s = fifty_rows();
    s.attach(TestViewport::new(500.0, 50));
    scroll(&mut s, 400.0);
    // 100px before, 100px after: both at the minimum, nothing to do.
    s.on_content_scrolled();
    scroll(&mut s, 410.0);
    assert_eq!(s.rendered_range(), Some(RenderedRange::new(15, 50)));
}

#[test]
fn repeated_scroll_event_is_idempotent() {
    let mut s = fifty_rows();
    let seen = record_indexes(&mut s);
    s.attach(TestViewport::new(500.0, 50));
    scroll(&mut s, 330.0);
    let range = s.rendered_range();
    let commits = s.viewport().unwrap().range_commits;

    s.on_content_scrolled();
    s.on_content_scrolled();

    assert_eq!(s.rendered_range(), range);
    assert_eq!(s.viewport().unwrap().range_commits, commits);
    assert_eq!(*seen.borrow(), vec![0, 16]);
}

#[test]
fn end_at_data_length_stops_end_expansion() {
    let mut s = fifty_rows();
    s.attach(TestViewport::new(500.0, 50));
    scroll(&mut s, 400.0);
    assert_eq!(s.rendered_range().unwrap().end, 50);

    for offset in [420.0, 450.0, 480.0, 500.0] {
        scroll(&mut s, offset);
        let r = s.rendered_range().unwrap();
        assert_eq!(r.end, 50);
        assert_eq!(r.start, 15);
    }
}

#[test]
fn detach_stops_all_viewport_traffic_and_publishing() {
    let mut s = fifty_rows();
    let seen = record_indexes(&mut s);
    let vp = TestViewport::new(500.0, 50);
    let calls = Rc::clone(&vp.calls);
    s.attach(vp);
    assert!(s.is_attached());

    let vp = s.detach().unwrap();
    assert!(s.is_closed());
    let before = calls.get();

    s.on_content_scrolled();
    s.on_data_length_changed();
    s.scroll_to_index(10, ScrollBehavior::Instant);
    s.update_items(uniform(60));

    assert_eq!(calls.get(), before);
    assert_eq!(*seen.borrow(), vec![0]);
    assert_eq!(s.subscriber_count(), 0);
    assert!(s.subscribe(|_| {}).is_none());
    assert!(s.detach().is_none());

    // Closed for good: attaching again does nothing.
    s.attach(vp);
    assert!(!s.is_attached());
    assert_eq!(calls.get(), before);
}

#[test]
fn operations_before_attach_are_no_ops() {
    let mut s = fifty_rows();
    let seen = record_indexes(&mut s);
    s.on_content_scrolled();
    s.on_data_length_changed();
    s.scroll_to_index(3, ScrollBehavior::Smooth);
    s.on_content_rendered();
    s.on_rendered_offset_changed();
    assert!(seen.borrow().is_empty());
    assert_eq!(s.rendered_range(), None);
    assert_eq!(s.first_visible_index(), None);
}

#[test]
fn rejected_update_keeps_previous_state() {
    let mut s = fifty_rows();
    s.attach(TestViewport::new(500.0, 50));
    let items = Arc::clone(s.items());
    let buffer = s.buffer_config();
    let calls = s.viewport().unwrap().calls.get();

    let err = s
        .update_item_and_buffer_size(|v: &u32| *v as f64 * 2.0, uniform(10), 300.0, 100.0)
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::MaxBelowMin {
            min_buffer_px: 300.0,
            max_buffer_px: 100.0,
        }
    );
    assert!(Arc::ptr_eq(s.items(), &items));
    assert_eq!(s.buffer_config(), buffer);
    assert_eq!(s.oracle().total_size(), 1000.0);
    assert_eq!(s.viewport().unwrap().calls.get(), calls);
}

#[test]
fn update_replaces_sizes_and_recomputes() {
    let mut s = fifty_rows();
    s.attach(TestViewport::new(500.0, 50));

    s.update_item_and_buffer_size(|v: &u32| *v as f64 * 2.0, uniform(50), 50.0, 400.0)
        .unwrap();
    assert_eq!(s.buffer_config(), BufferConfig::new(50.0, 400.0).unwrap());
    let vp = s.viewport().unwrap();
    assert_eq!(vp.total_size, 2000.0);
    // Still at the top with 40px rows: the previous 35 rows leave 900px of end buffer.
    assert_eq!(vp.range, RenderedRange::new(0, 35));
}

#[test]
fn growing_the_list_updates_total_size() {
    let mut s = fifty_rows();
    s.attach(TestViewport::new(500.0, 50));
    scroll(&mut s, 400.0);
    assert_eq!(s.rendered_range(), Some(RenderedRange::new(15, 50)));

    s.viewport_mut().unwrap().data_length = 100;
    s.update_items(uniform(100));
    let vp = s.viewport().unwrap();
    assert_eq!(vp.total_size, 2000.0);
    // 100px end buffer is still enough.
    assert_eq!(vp.range, RenderedRange::new(15, 50));

    scroll(&mut s, 500.0);
    let r = s.rendered_range().unwrap();
    assert!(r.end > 50, "{r:?}");
    assert!(r.end <= 100);
}

#[test]
fn shrinking_the_list_clamps_the_range() {
    let mut s = fifty_rows();
    s.attach(TestViewport::new(500.0, 50));
    scroll(&mut s, 400.0);

    {
        let vp = s.viewport_mut().unwrap();
        vp.data_length = 10;
        vp.scroll_offset = 0.0;
    }
    s.update_items(uniform(10));
    let vp = s.viewport().unwrap();
    assert_eq!(vp.total_size, 200.0);
    assert_eq!(vp.range, RenderedRange::new(0, 10));
    assert_eq!(vp.content_offset, 0.0);
    assert_eq!(s.first_visible_index(), Some(0));
}

#[test]
fn on_data_length_changed_picks_up_host_side_changes() {
    let sizes = Arc::new(core::sync::atomic::AtomicU32::new(20));
    let s_sizes = Arc::clone(&sizes);
    let mut s: RangeStrategy<u32, TestViewport> = RangeStrategy::new(
        move |_: &u32| s_sizes.load(core::sync::atomic::Ordering::Relaxed) as f64,
        uniform(50),
        BufferConfig::default(),
    );
    s.attach(TestViewport::new(500.0, 50));
    assert_eq!(s.viewport().unwrap().total_size, 1000.0);

    sizes.store(10, core::sync::atomic::Ordering::Relaxed);
    s.on_data_length_changed();
    assert_eq!(s.viewport().unwrap().total_size, 500.0);
}

#[test]
fn unchanged_scroll_still_refreshes_content_offset() {
    let sizes = Arc::new(core::sync::atomic::AtomicU32::new(20));
    let s_sizes = Arc::clone(&sizes);
    let mut s: RangeStrategy<u32, TestViewport> = RangeStrategy::new(
        move |_: &u32| s_sizes.load(core::sync::atomic::Ordering::Relaxed) as f64,
        uniform(50),
        BufferConfig::default(),
    );
    s.attach(TestViewport::new(500.0, 50));
    scroll(&mut s, 400.0);
    assert_eq!(s.rendered_range(), Some(RenderedRange::new(15, 50)));
    assert_eq!(s.viewport().unwrap().content_offset, 300.0);
    let commits = s.viewport().unwrap().range_commits;

    sizes.store(5, core::sync::atomic::Ordering::Relaxed);
    s.on_content_scrolled();
    let vp = s.viewport().unwrap();
    assert_eq!(vp.range, RenderedRange::new(15, 50));
    assert_eq!(vp.range_commits, commits);
    assert_eq!(vp.content_offset, 75.0);
}

#[test]
fn tall_leading_items_never_leave_the_viewport_empty() {
    // 5 x 1000px, then 200 x 10px: 7000px in total.
    let mut items = vec![1000; 5];
    items.extend([10; 200]);
    let mut s = RangeStrategy::with_buffer_px(px, items, 100.0, 200.0).unwrap();
    s.attach(TestViewport::new(500.0, 205));
    assert_eq!(s.rendered_range(), Some(RenderedRange::new(0, 1)));

    scroll(&mut s, 6500.0);
    assert_eq!(s.first_visible_index(), Some(155));
    assert_eq!(s.rendered_range(), Some(RenderedRange::new(155, 205)));

    // Back up into the short items: both backward counts start at item 0 and come out as 0.
    scroll(&mut s, 6000.0);
    assert_eq!(s.first_visible_index(), Some(105));
    let vp = s.viewport().unwrap();
    assert_eq!(vp.range, RenderedRange::new(105, 155));
    assert_eq!(vp.content_offset, 6000.0);

    // And up into the tall ones.
    scroll(&mut s, 4800.0);
    assert_eq!(s.first_visible_index(), Some(4));
    let vp = s.viewport().unwrap();
    assert_eq!(vp.range, RenderedRange::new(4, 35));
    assert_eq!(vp.content_offset, 4000.0);
}

#[test]
fn empty_collection_yields_empty_window() {
    let mut s: RangeStrategy<u32, TestViewport> =
        RangeStrategy::new(px, Vec::<u32>::new(), BufferConfig::default());
    let seen = record_indexes(&mut s);
    s.attach(TestViewport::new(500.0, 0));
    let vp = s.viewport().unwrap();
    assert_eq!(vp.total_size, 0.0);
    assert!(vp.range.is_empty());
    assert_eq!(vp.content_offset, 0.0);
    assert_eq!(*seen.borrow(), vec![0]);
}

#[test]
fn scroll_to_index_passes_offset_and_behavior_through() {
    let mut s = fifty_rows();
    s.attach(TestViewport::new(500.0, 50));
    s.scroll_to_index(7, ScrollBehavior::Smooth);
    s.scroll_to_index(0, ScrollBehavior::Instant);
    s.scroll_to_index(999, ScrollBehavior::Auto);
    assert_eq!(
        s.viewport().unwrap().scrolled_to,
        vec![
            (140.0, ScrollBehavior::Smooth),
            (0.0, ScrollBehavior::Instant),
            (1000.0, ScrollBehavior::Auto),
        ]
    );
}

#[test]
fn unsubscribe_stops_delivery() {
    let mut s = fifty_rows();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = s.subscribe(move |i| sink.borrow_mut().push(i)).unwrap();
    s.attach(TestViewport::new(500.0, 50));
    assert!(s.unsubscribe(id));
    assert!(!s.unsubscribe(id));
    scroll(&mut s, 400.0);
    assert_eq!(*seen.borrow(), vec![0]);
    assert_eq!(s.first_visible_index(), Some(20));
}

#[test]
fn buffer_change_recomputes_range() {
    let mut s = fifty_rows();
    s.attach(TestViewport::new(500.0, 50));
    assert_eq!(s.rendered_range(), Some(RenderedRange::new(0, 35)));

    s.set_buffer_config(BufferConfig::new(300.0, 400.0).unwrap());
    // End buffer was 200px (< 300): grow by items covering 200px.
    assert_eq!(s.rendered_range(), Some(RenderedRange::new(0, 45)));
}

#[test]
fn config_updates_while_detached_are_stored() {
    let oracle = SizingOracle::from_fn(px, uniform(50));
    let mut s: RangeStrategy<u32, TestViewport> =
        RangeStrategy::from_oracle(oracle.clone(), BufferConfig::default());
    s.set_buffer_config(BufferConfig::new(300.0, 400.0).unwrap());
    s.replace(
        SizingOracle::from_fn(|v: &u32| *v as f64 / 2.0, uniform(50)),
        s.buffer_config(),
    );
    assert_eq!(s.oracle().total_size(), 500.0);
    assert_eq!(s.rendered_range(), None);

    // 10px rows: 500px viewport + 300px buffer = 80 rows, capped at 50.
    s.attach(TestViewport::new(500.0, 50));
    assert_eq!(s.rendered_range(), Some(RenderedRange::new(0, 50)));

    // A second attach swaps the viewport and recomputes from scratch.
    s.replace(oracle, BufferConfig::default());
    s.attach(TestViewport::new(500.0, 50));
    let vp = s.viewport().unwrap();
    assert_eq!(vp.total_size, 1000.0);
    assert_eq!(vp.range, RenderedRange::new(0, 35));
}

#[test]
fn attach_through_mutable_reference() {
    let mut vp = TestViewport::new(500.0, 50);
    {
        let mut s: RangeStrategy<u32, &mut TestViewport> =
            RangeStrategy::new(px, uniform(50), BufferConfig::default());
        s.attach(&mut vp);
        assert!(s.is_attached());
        let _ = s.detach();
    }
    assert_eq!(vp.range, RenderedRange::new(0, 35));
    assert_eq!(vp.total_size, 1000.0);
}

#[test]
fn compute_rendered_range_is_pure() {
    let oracle = SizingOracle::from_fn(px, uniform(50));
    let scroll = ScrollState {
        scroll_offset: 400.0,
        viewport_size: 500.0,
        data_length: 50,
    };
    let a = compute_rendered_range(&oracle, BufferConfig::default(), scroll, RenderedRange::EMPTY);
    let b = compute_rendered_range(&oracle, BufferConfig::default(), scroll, RenderedRange::EMPTY);
    assert_eq!(a, b);
    assert_eq!(a.first_visible_index, 20);
    assert_eq!(a.range, RenderedRange::new(15, 50));
    assert_eq!(a.content_offset, 300.0);
}

#[test]
fn randomized_events_keep_range_within_bounds() {
    let mut rng = Lcg::new(0x5eed);
    for _case in 0..40 {
        let count = rng.gen_range_usize(0, 120);
        let items: Vec<u32> = (0..count).map(|_| rng.gen_range_usize(0, 60) as u32).collect();
        let min = rng.gen_px(150);
        let max = min + rng.gen_px(300);
        let mut s: RangeStrategy<u32, TestViewport> =
            RangeStrategy::with_buffer_px(px, items, min, max).unwrap();
        let viewport_size = rng.gen_px(600);
        s.attach(TestViewport::new(viewport_size, count));

        for _step in 0..60 {
            let total = s.oracle().total_size();
            match rng.gen_range_usize(0, 10) {
                0 => {
                    let len = rng.gen_range_usize(0, 150);
                    let items: Vec<u32> =
                        (0..len).map(|_| rng.gen_range_usize(0, 60) as u32).collect();
                    s.viewport_mut().unwrap().data_length = len;
                    s.update_items(items);
                }
                1 => {
                    // Host and item collection may briefly disagree.
                    s.viewport_mut().unwrap().data_length = rng.gen_range_usize(0, 150);
                    s.on_data_length_changed();
                }
                _ => {
                    let offset = rng.gen_px(total as usize + 100);
                    scroll(&mut s, offset);
                }
            }

            let vp = s.viewport().unwrap();
            let r = vp.range;
            assert!(r.start <= r.end, "{r:?}");
            assert!(r.end <= vp.data_length, "{r:?} len={}", vp.data_length);
            assert_eq!(vp.content_offset, s.oracle().cumulative_size(r.start));
            let first = s.oracle().first_index_at_or_beyond(vp.scroll_offset);
            if first < vp.data_length {
                assert!(r.contains(first), "{r:?} misses first visible {first}");
            }
            assert_eq!(vp.total_size, s.oracle().total_size());

            let commits = vp.range_commits;
            s.on_content_scrolled();
            let vp = s.viewport().unwrap();
            assert_eq!(vp.range, r);
            assert_eq!(vp.range_commits, commits);
        }
    }
}
