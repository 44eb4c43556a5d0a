mod heap;
mod utils;

pub mod errors;

#[cfg(test)]
mod testing;

pub use crate::heap::{
    sift_down, sift_up, BackingSequence, Element, HeapPriorityQueue, Priority,
};
pub use errors::QueueError;
pub use utils::is_max_heap;
