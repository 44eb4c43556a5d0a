use crate::heap::{BackingSequence, Element};

pub(crate) fn parent(child: usize) -> usize {
    (child - 1) / 2
}

pub(crate) fn left_child(parent: usize) -> usize {
    2 * parent + 1
}

pub(crate) fn right_child(parent: usize) -> usize {
    2 * parent + 2
}

/**
 * Check the max-heap property over a whole sequence.
 *
 * Every non-root element must have a priority no greater than its parent's.
 * This is O(n), so it is only used in debug assertions and tests.
 */
pub fn is_max_heap<P, S>(seq: &S) -> bool
where
    S: BackingSequence<Element<P>> + ?Sized,
{
    (1..seq.len()).all(|i| seq.get(parent(i)).priority >= seq.get(i).priority)
}
