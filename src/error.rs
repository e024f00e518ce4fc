//! Failure surface of the crate.
//!
//! Exactly two things can go wrong: a bound can be rejected up front
//! ([`Error::InvalidBound`]), or a source can end while a view still owes
//! elements ([`Error::UnexpectedEndOfInput`]). Views not configured to
//! report underruns never produce either.

/// Errors produced by view construction and traversal.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The requested bound provably exceeds what the source holds.
    ///
    /// Raised at construction time, before any element is consumed, and only
    /// for sources whose length is known.
    #[error("bound of {requested} exceeds the {available} elements available")]
    InvalidBound { requested: usize, available: usize },

    /// The source ran out while the view still expected elements.
    ///
    /// Raised lazily, at the query that discovers the missing element, after
    /// `after` elements were already yielded. Traversal of the view past the
    /// error is unspecified.
    #[error("input ended unexpectedly after {after} elements")]
    UnexpectedEndOfInput { after: usize },
}

static_assertions::assert_impl_all!(Error: Send, Sync);

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_numbers() {
        let err = Error::InvalidBound {
            requested: 9,
            available: 4,
        };
        assert_eq!(
            err.to_string(),
            "bound of 9 exceeds the 4 elements available"
        );

        let err = Error::UnexpectedEndOfInput { after: 2 };
        assert_eq!(err.to_string(), "input ended unexpectedly after 2 elements");
    }
}
