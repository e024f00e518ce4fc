//! Lazy, composable bounded-sequence views.
//!
//! # Overview
//!
//! This crate bounds a sequence to a prefix of itself without copying it:
//! by a fixed count ([`take`], [`Take`]) or by a predicate deciding where
//! the prefix ends ([`take_until`], [`TakeUntil`]). The adaptors evaluate
//! no more of the source than the caller's queries require, which makes
//! them usable for pulling one logical record out of a stream that cannot
//! be rewound.
//!
//! Every source and view speaks the same pull protocol, [`Sequence`], and
//! carries a [`Capabilities`] record saying how it may be traversed.
//! [`take`] uses the record to pick the cheapest concrete representation
//! for the bounded prefix; views compose, so the output of one adaptor is
//! a valid input to the next.
//!
//! # Quick start
//!
//! ```
//! use seq_view::{Sequence, SliceSeq, take, take_until};
//!
//! // One line of a simple record format: a name, then '=', then a value.
//! let line = b"lhs=rhs";
//!
//! let mut name = take_until(SliceSeq::new(line), |b: &u8| *b == b'=');
//! let mut got = Vec::new();
//! while let Some(b) = name.next().unwrap() {
//!     got.push(b);
//! }
//! assert_eq!(got, b"lhs");
//!
//! // The source is left on the separator; step over it and bound the rest.
//! let mut source = name.into_source();
//! source.next().unwrap();
//! let value = take(source, 3);
//! assert_eq!(value.as_slice(), Some(&b"rhs"[..]));
//! ```
//!
//! # Borrowed and owned sources
//!
//! Views take their source by value. Handing them `&mut source` works just
//! as well, because mutable references forward the whole [`Sequence`]
//! protocol; the view then advances the original in place:
//!
//! ```
//! use seq_view::{Sequence, SinglePass, take_until_with, UntilConfig};
//!
//! let mut source = SinglePass::new(b"cmd  arg".iter().copied());
//! let mut word = take_until_with(
//!     &mut source,
//!     |b: &u8| *b == b' ',
//!     UntilConfig { and_consume: true, ..Default::default() },
//! );
//! let mut first = Vec::new();
//! while let Some(b) = word.next().unwrap() {
//!     first.push(b);
//! }
//! drop(word);
//! // The separator run was consumed; the source resumes at the next word.
//! assert_eq!(first, b"cmd");
//! assert_eq!(source.peek().unwrap(), Some(&b'a'));
//! ```
//!
//! # Failure modes
//!
//! Exactly two: [`Error::InvalidBound`] when an oversized bound is rejected
//! eagerly against a source of known length, and
//! [`Error::UnexpectedEndOfInput`] when a view configured with `or_throw`
//! discovers an underrun during traversal. Views left in their default
//! silent configuration never error.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod bounded;
pub mod caps;
pub mod error;
pub mod seq;
pub mod sources;
pub mod views;

// Entry points and the types they hand out.
pub use bounded::{Bounded, RangePrefix, SlicePrefix, take, take_with};
pub use caps::{Capabilities, Strength};
pub use error::{Error, Result};
pub use seq::{Items, Sequence};
pub use sources::{DequeSeq, ListSeq, SinglePass, SliceSeq};
pub use views::{Skip, Take, TakeConfig, TakeUntil, UntilConfig, skip, take_until, take_until_with};
