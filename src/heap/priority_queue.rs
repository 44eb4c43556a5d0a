use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;

use log::{debug, trace};

use super::sift::{sift_down, sift_up};
use super::{BackingSequence, Element, Priority};
use crate::errors::QueueError;
use crate::utils::{is_max_heap, parent};

/**
 * A max-priority queue laid out as a binary heap in a backing sequence.
 *
 * Payloads are stored as-is and handed back by `dequeue_max`; the queue never
 * clones or inspects them.  Store `&T` or `Rc<T>` to keep the payload owned
 * elsewhere.  Relative order among equal priorities is unspecified.
 */
pub struct HeapPriorityQueue<P, S = Vec<Element<P>>>
where
    S: BackingSequence<Element<P>>,
{
    heap: S,
    _payload: PhantomData<P>,
}

impl<P> HeapPriorityQueue<P> {
    pub fn new() -> Self {
        HeapPriorityQueue::with_backing(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        HeapPriorityQueue::with_backing(Vec::with_capacity(capacity))
    }
}

impl<P> Default for HeapPriorityQueue<P> {
    fn default() -> Self {
        HeapPriorityQueue::new()
    }
}

impl<P, S> HeapPriorityQueue<P, S>
where
    S: BackingSequence<Element<P>>,
{
    /// Build a queue over an existing sequence, heapifying whatever it holds.
    pub fn with_backing(mut heap: S) -> Self {
        if heap.len() > 1 {
            for index in (0..=parent(heap.len() - 1)).rev() {
                sift_down::<P, S>(&mut heap, index);
            }
        }
        let queue = HeapPriorityQueue {
            heap,
            _payload: PhantomData,
        };
        queue.check();
        queue
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn insert(&mut self, payload: P, priority: Priority) {
        self.heap.push(Element::new(payload, priority));
        let last = self.heap.len() - 1;
        let index = sift_up::<P, S>(&mut self.heap, last);
        trace!(
            "insert: priority {} settled at {} of {}",
            priority,
            index,
            self.heap.len()
        );
        self.check();
    }

    pub fn peek_max(&self) -> Result<&P, QueueError> {
        Ok(&self.peek_max_element()?.payload)
    }

    pub fn peek_max_priority(&self) -> Result<Priority, QueueError> {
        Ok(self.peek_max_element()?.priority)
    }

    pub fn peek_max_element(&self) -> Result<&Element<P>, QueueError> {
        if self.heap.is_empty() {
            return Err(QueueError::EmptyQueue);
        }
        Ok(self.heap.get(0))
    }

    /// Remove the highest-priority element and return its payload.
    pub fn dequeue_max(&mut self) -> Result<P, QueueError> {
        let tail = self.heap.pop().ok_or(QueueError::EmptyQueue)?;
        let max = if self.heap.is_empty() {
            tail
        } else {
            self.heap.set(0, tail)
        };

        if !self.heap.is_empty() {
            let index = sift_down::<P, S>(&mut self.heap, 0);
            trace!(
                "dequeue_max: priority {} removed, replacement settled at {} of {}",
                max.priority,
                index,
                self.heap.len()
            );
        } else {
            trace!("dequeue_max: priority {} removed, queue empty", max.priority);
        }
        self.check();
        Ok(max.into_payload())
    }

    /// Drop every stored element, keeping the backing allocation.
    pub fn clear(&mut self) {
        debug!("clear: dropping {} elements", self.heap.len());
        self.heap.clear();
    }

    fn check(&self) {
        debug_assert!(is_max_heap::<P, S>(&self.heap));
    }
}

impl<P, S> Extend<(P, Priority)> for HeapPriorityQueue<P, S>
where
    S: BackingSequence<Element<P>>,
{
    fn extend<I: IntoIterator<Item = (P, Priority)>>(&mut self, iter: I) {
        for (payload, priority) in iter {
            self.insert(payload, priority);
        }
    }
}

impl<P> FromIterator<(P, Priority)> for HeapPriorityQueue<P> {
    fn from_iter<I: IntoIterator<Item = (P, Priority)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut queue = HeapPriorityQueue::with_capacity(iter.size_hint().0);
        queue.extend(iter);
        queue
    }
}

impl<P, S> fmt::Debug for HeapPriorityQueue<P, S>
where
    S: BackingSequence<Element<P>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapPriorityQueue")
            .field("len", &self.len())
            .field("max_priority", &self.peek_max_priority().ok())
            .finish()
    }
}
