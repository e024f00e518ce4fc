//! Concrete sequences the views are built over.
//!
//! One source per capability tier: [`SliceSeq`] is contiguous, [`DequeSeq`]
//! is random-access without contiguity, [`ListSeq`] is bidirectional only,
//! and [`SinglePass`] turns any [`Iterator`] into a peekable one-shot
//! sequence.

pub mod deque;
pub mod list;
pub mod single_pass;
pub mod slice;

pub use deque::DequeSeq;
pub use list::ListSeq;
pub use single_pass::SinglePass;
pub use slice::SliceSeq;
