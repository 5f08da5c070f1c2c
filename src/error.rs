use thiserror::Error;

/// Result type of fallible [`Queue`](crate::Queue) operations.
pub type Result<T> = std::result::Result<T, QueueError>;

/// Errors that can occur when operating on a queue.
///
/// Every failing operation leaves the queue exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The operation needs at least one element, but the queue is empty.
    #[error("queue is empty")]
    Empty,

    /// Storage for the payload copy could not be reserved.
    #[error("cannot allocate {0} bytes for the element payload")]
    Alloc(usize),

    /// The payload contains a NUL byte at the given offset.
    #[error("element payload contains a NUL byte at offset {0}")]
    InteriorNul(usize),
}
