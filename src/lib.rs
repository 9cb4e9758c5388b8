#![deny(warnings, missing_docs, missing_debug_implementations)]
//! Unicode word segmentation.
//!
//! This crate splits text into *words* according to the default
//! word-boundary rules of [Unicode Standard Annex #29 §4.1][uax29]. Given a
//! string it reports the byte offsets at which word boundaries occur; on
//! top of that it yields the substrings between adjacent boundaries
//! ([`iterate_spans`]) and the subset of those substrings that are not pure
//! whitespace ([`split_words`]).
//!
//! All positions are byte offsets into the input and fall on `char`
//! boundaries, so they can be used to slice the original string directly.
//! Spans borrow from the input; no text is copied.
//!
//! ```
//! let words: Vec<&str> = wordstr::split_words("The fox can\u{2019}t jump 32.3 feet!").collect();
//! assert_eq!(words, ["The", "fox", "can\u{2019}t", "jump", "32.3", "feet", "!"]);
//!
//! let boundaries: Vec<usize> = wordstr::find_boundaries("ab cd").collect();
//! assert_eq!(boundaries, [0, 2, 3, 5]);
//! ```
//!
//! The Word_Break property data is generated from the Unicode Character
//! Database by `scripts/unicode.py`; the shipped tables implement Unicode
//! [`UNICODE_VERSION`], and the crate's major version tracks the Unicode
//! major version.
//!
//! Grapheme-cluster, sentence and line segmentation are out of scope, as
//! are language-specific segmentation (Chinese, Japanese, Thai) and locale
//! tailorings.
//!
//! [uax29]: https://www.unicode.org/reports/tr29/#Word_Boundaries

mod boundary;
mod span;
mod tables;
mod word_break;

pub use boundary::Boundaries;
pub use span::{Span, Spans, Words};
pub use tables::UNICODE_VERSION;
pub use word_break::{is_extended_pictographic, word_break_property, WordBreak};

/// Returns an iterator over the word-boundary positions of `text`, as byte
/// offsets in strictly increasing order.
///
/// An empty string has no boundaries. Otherwise the first boundary is `0`
/// and the last is `text.len()`, and every boundary is a valid slice index.
///
/// ```
/// let boundaries: Vec<usize> = wordstr::find_boundaries("a\r\nb").collect();
/// assert_eq!(boundaries, [0, 1, 3, 4]);
/// ```
pub fn find_boundaries(text: &str) -> Boundaries<'_> {
    Boundaries::new(text)
}

/// Returns an iterator over the [`Span`]s between adjacent word boundaries
/// of `text`.
///
/// Concatenating the spans in order reproduces `text` exactly.
///
/// ```
/// let spans: Vec<&str> = wordstr::iterate_spans("Hello, world")
///     .map(|span| span.text)
///     .collect();
/// assert_eq!(spans, ["Hello", ",", " ", "world"]);
/// ```
pub fn iterate_spans(text: &str) -> Spans<'_> {
    Spans::new(text)
}

/// Returns an iterator over the words of `text`: every span between
/// adjacent word boundaries that is not whitespace-only.
///
/// A span is considered whitespace-only when all of its scalars have
/// Word_Break property CR, LF, Newline or WSegSpace. Punctuation spans are
/// words under this definition.
///
/// ```
/// let words: Vec<&str> = wordstr::split_words("\u{30A8}\u{30E9}\u{30FC}: error\n").collect();
/// assert_eq!(words, ["\u{30A8}\u{30E9}\u{30FC}", ":", "error"]);
/// ```
pub fn split_words(text: &str) -> Words<'_> {
    Words::new(text)
}
