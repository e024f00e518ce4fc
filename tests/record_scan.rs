//! End-to-end scan of a small length-prefixed record format.
//!
//! Records look like `3:abc`, separated by ';'. The scanner is written once
//! against the `Sequence` protocol and then exercised over an in-memory
//! slice and over a one-shot stream, which drives the two error kinds and
//! both termination styles of the views.

use pretty_assertions::assert_eq;
use seq_view::{
    Error, Sequence, SinglePass, SliceSeq, Take, TakeConfig, UntilConfig, take_until_with,
};

// ============================================================================
// The scanner under test
// ============================================================================

/// Reads `len:payload` records off any byte sequence.
fn scan_records<S: Sequence<Item = u8>>(mut source: S) -> Result<Vec<Vec<u8>>, Error> {
    let mut records = Vec::new();
    while !source.at_end()? {
        // Decimal length, delimited by ':'. A record without the delimiter
        // is truncated input.
        let mut digits = Vec::new();
        let mut len_view = take_until_with(
            &mut source,
            |b: &u8| *b == b':',
            UntilConfig {
                or_throw: true,
                ..Default::default()
            },
        );
        while let Some(b) = len_view.next()? {
            digits.push(b);
        }
        drop(len_view);
        source.next()?; // step over the ':'

        let len: usize = String::from_utf8(digits).unwrap().parse().unwrap();

        // The payload must be complete: over sized sources a short record
        // is rejected before reading it, over streams it surfaces at the
        // exact byte where the input dries up.
        let mut payload = Vec::with_capacity(len);
        let mut payload_view = Take::new(
            &mut source,
            len,
            TakeConfig {
                exactly: true,
                or_throw: true,
            },
        )?;
        while let Some(b) = payload_view.next()? {
            payload.push(b);
        }
        drop(payload_view);
        records.push(payload);

        // Records are ';'-separated; a trailing separator is optional.
        if let Some(b) = source.next()? {
            assert_eq!(b, b';');
        }
    }
    Ok(records)
}

/// The same input, as an honestly unsized one-shot stream. The `filter`
/// spoils the exact size hint.
fn stream(bytes: &[u8]) -> SinglePass<impl Iterator<Item = u8> + '_> {
    SinglePass::new(bytes.iter().copied().filter(|_| true))
}

// ============================================================================
// Well-formed input
// ============================================================================

#[test]
fn scans_records_from_a_slice() {
    let records = scan_records(SliceSeq::new(b"3:abc;2:xy;0:")).unwrap();
    assert_eq!(records, [&b"abc"[..], b"xy", b""]);
}

#[test]
fn scans_records_from_a_stream() {
    let records = scan_records(stream(b"3:abc;2:xy")).unwrap();
    assert_eq!(records, [&b"abc"[..], b"xy"]);
}

#[test]
fn slice_and_stream_agree() {
    let input = b"1:a;4:wxyz;2:..";
    assert_eq!(
        scan_records(SliceSeq::new(input)).unwrap(),
        scan_records(stream(input)).unwrap()
    );
}

// ============================================================================
// Truncated input: same corruption, both error kinds
// ============================================================================

#[test]
fn short_payload_on_a_sized_source_is_rejected_eagerly() {
    // The slice provably holds two bytes where three were promised.
    let err = scan_records(SliceSeq::new(b"3:ab")).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidBound {
            requested: 3,
            available: 2,
        }
    );
}

#[test]
fn short_payload_on_a_stream_surfaces_at_the_missing_byte() {
    let err = scan_records(stream(b"3:ab")).unwrap_err();
    assert_eq!(err, Error::UnexpectedEndOfInput { after: 2 });
}

#[test]
fn missing_length_delimiter_is_an_unexpected_end() {
    let err = scan_records(stream(b"3abc")).unwrap_err();
    assert_eq!(err, Error::UnexpectedEndOfInput { after: 4 });
}

#[test]
fn empty_input_is_zero_records() {
    assert_eq!(scan_records(stream(b"")).unwrap(), Vec::<Vec<u8>>::new());
}

// ============================================================================
// Consuming separators on a one-shot stream
// ============================================================================

/// Splits on runs of spaces, the way a token scanner over a socket would:
/// each separator run is consumed together with the word it terminates.
fn split_words(bytes: &'static [u8]) -> Result<Vec<String>, Error> {
    let mut source = SinglePass::new(bytes.iter().copied());
    let mut words = Vec::new();
    while !source.at_end()? {
        let mut word_view = take_until_with(
            &mut source,
            |b: &u8| *b == b' ',
            UntilConfig {
                and_consume: true,
                ..Default::default()
            },
        );
        let mut word = Vec::new();
        while let Some(b) = word_view.next()? {
            word.push(b);
        }
        drop(word_view);
        words.push(String::from_utf8(word).unwrap());
    }
    Ok(words)
}

#[test]
fn words_are_split_and_separator_runs_swallowed() {
    assert_eq!(split_words(b"cmd  arg x").unwrap(), ["cmd", "arg", "x"]);
}

#[test]
fn trailing_separators_do_not_produce_a_phantom_word() {
    assert_eq!(split_words(b"cmd   ").unwrap(), ["cmd"]);
}

#[test]
fn leading_separators_produce_one_empty_word() {
    // The first view ends gracefully before yielding anything; the run is
    // consumed and scanning resumes at the first real word.
    assert_eq!(split_words(b" cmd").unwrap(), ["", "cmd"]);
}
