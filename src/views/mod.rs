//! Lazy views over a source sequence.
//!
//! [`Take`] bounds by count, [`TakeUntil`] bounds by predicate, and
//! [`Skip`] elides a prefix. Each wraps its source, implements
//! [`Sequence`](crate::seq::Sequence) itself, and evaluates no more of the
//! source than the caller's queries require.

pub mod skip;
pub mod take;
pub mod until;

pub use skip::{Skip, skip};
pub use take::{Take, TakeConfig};
pub use until::{TakeUntil, UntilConfig, take_until, take_until_with};
