use alloc::collections::VecDeque;

use crate::Direction;

/// Maximum number of requests buffered while a transition is in flight.
pub const QUEUE_CAPACITY: usize = 3;

/// Bounded FIFO of advance requests.
///
/// Requests beyond [`QUEUE_CAPACITY`] are dropped, not an error: input far faster than the
/// animation can play degrades by losing the excess.
#[derive(Clone, Debug, Default)]
pub struct AdvanceQueue {
    pending: VecDeque<Direction>,
}

impl AdvanceQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(QUEUE_CAPACITY),
        }
    }

    /// Returns `false` when the request was dropped.
    pub fn push(&mut self, direction: Direction) -> bool {
        if self.is_full() {
            return false;
        }
        self.pending.push_back(direction);
        true
    }

    pub fn drain_one(&mut self) -> Option<Direction> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.pending.len() >= QUEUE_CAPACITY
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.pending.iter().copied()
    }

    /// Sum of the queued steps (`Next = +1`, `Prev = -1`).
    pub fn net_displacement(&self) -> isize {
        self.pending.iter().map(|d| d.step()).sum()
    }
}
