/**
 * The resizable sequence a heap is laid out in.
 *
 * Only the primitives the heap needs are here: length, indexed read and
 * overwrite, swap, append and removal of the last slot.  Mid-sequence
 * insertion or removal is never required.
 */
pub trait BackingSequence<T> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Panics if `index >= len()`.
    fn get(&self, index: usize) -> &T;

    /// Overwrite in place, returning the previous value.
    fn set(&mut self, index: usize, value: T) -> T;

    fn swap(&mut self, a: usize, b: usize);

    fn push(&mut self, value: T);

    fn pop(&mut self) -> Option<T>;

    fn clear(&mut self);
}

impl<T> BackingSequence<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn set(&mut self, index: usize, value: T) -> T {
        std::mem::replace(&mut self[index], value)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b)
    }

    fn push(&mut self, value: T) {
        Vec::push(self, value)
    }

    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    fn clear(&mut self) {
        Vec::clear(self)
    }
}
