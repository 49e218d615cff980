use std::collections::VecDeque;

/// A value paired with its priority
#[derive(Debug, Clone)]
struct PriorityItem<T> {
    value: T,
    priority: i32,
}

/// Max-priority queue with FIFO ordering among equal priorities
///
/// Items are kept sorted on insertion, so `enqueue` is O(n) and
/// `dequeue` is O(1). No internal locking; callers sharing one queue
/// across threads must serialize access themselves.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    items: VecDeque<PriorityItem<T>>,
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Insert `value` before the first item with a strictly lower priority
    pub fn enqueue(&mut self, value: T, priority: i32) {
        let position = self
            .items
            .iter()
            .position(|item| item.priority < priority)
            .unwrap_or(self.items.len());

        self.items.insert(position, PriorityItem { value, priority });
    }

    /// Remove the highest-priority value, or `None` when empty
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front().map(|item| item.value)
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.front().map(|item| &item.value)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<(T, i32)> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = (T, i32)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.enqueue(value, priority);
        }
    }
}

impl<T> FromIterator<(T, i32)> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = (T, i32)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
