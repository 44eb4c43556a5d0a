use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum QueueError {
    #[error("Priority queue is empty")]
    EmptyQueue,
}
