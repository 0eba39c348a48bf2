use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Handle returned by [`crate::RangeStrategy::subscribe`], used to unsubscribe later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(usize)>;

/// A deduplicating broadcast of "first visible index" values.
///
/// - Consecutive identical values are dropped, whether or not anyone is subscribed.
/// - New subscribers only see values published after they subscribed.
/// - Once closed, nothing is delivered again and new subscriptions are refused.
pub(crate) struct IndexStream {
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    last: Option<usize>,
    next_id: u64,
    closed: bool,
}

impl IndexStream {
    pub(crate) fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            last: None,
            next_id: 0,
            closed: false,
        }
    }

    pub(crate) fn subscribe(&mut self, f: impl FnMut(usize) + 'static) -> Option<SubscriptionId> {
        if self.closed {
            vwarn!("IndexStream: subscribe on a closed stream");
            return None;
        }
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.subscribers.push((id, Box::new(f)));
        Some(id)
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Delivers `index` to every subscriber unless it repeats the previous value.
    ///
    /// Returns `true` when the value was new.
    pub(crate) fn publish(&mut self, index: usize) -> bool {
        if self.closed || self.last == Some(index) {
            return false;
        }
        self.last = Some(index);
        vtrace!(
            index,
            subscribers = self.subscribers.len(),
            "IndexStream::publish"
        );
        for (_, f) in self.subscribers.iter_mut() {
            f(index);
        }
        true
    }

    pub(crate) fn last(&self) -> Option<usize> {
        self.last
    }

    pub(crate) fn close(&mut self) {
        self.closed = true;
        self.subscribers.clear();
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed
    }

    pub(crate) fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl fmt::Debug for IndexStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexStream")
            .field("subscribers", &self.subscribers.len())
            .field("last", &self.last)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}
