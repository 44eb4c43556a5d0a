mod backing;
mod element;
mod priority_queue;
mod sift;

pub use backing::BackingSequence;
pub use element::{Element, Priority};
pub use priority_queue::HeapPriorityQueue;
pub use sift::{sift_down, sift_up};
