use crate::boundary::Boundaries;
use crate::word_break::{word_break_property, WordBreak};

/// The substring between two adjacent word boundaries.
///
/// Spans never overlap, always have positive length, and concatenating the
/// spans of a string in order reproduces the string exactly. `text` borrows
/// from the input; nothing is copied.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Span<'a> {
    /// Byte offset of the span's first scalar in the input.
    pub start: usize,
    /// Byte offset just past the span's last scalar.
    pub end: usize,
    /// The spanned text, borrowed from the input.
    pub text: &'a str,
}

impl Span<'_> {
    /// The span's length in bytes. Always equal to `end - start` and to
    /// `text.len()`.
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

/// An iterator over the [`Span`]s of a string, in order.
#[derive(Clone, Debug)]
pub struct Spans<'a> {
    text: &'a str,
    boundaries: Boundaries<'a>,
    start: Option<usize>,
}

impl<'a> Spans<'a> {
    pub(crate) fn new(text: &'a str) -> Spans<'a> {
        Spans {
            text,
            boundaries: Boundaries::new(text),
            start: None,
        }
    }
}

impl<'a> Iterator for Spans<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        let start = match self.start {
            Some(start) => start,
            None => self.boundaries.next()?,
        };
        let end = self.boundaries.next()?;
        self.start = Some(end);
        Some(Span {
            start,
            end,
            text: &self.text[start..end],
        })
    }
}

/// An iterator over the words of a string: every span whose text is not
/// whitespace-only.
///
/// A span is dropped when all of its scalars have Word_Break property CR,
/// LF, Newline or WSegSpace; everything else, including punctuation-only
/// spans, is yielded.
#[derive(Clone, Debug)]
pub struct Words<'a> {
    spans: Spans<'a>,
}

impl<'a> Words<'a> {
    pub(crate) fn new(text: &'a str) -> Words<'a> {
        Words {
            spans: Spans::new(text),
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.spans
            .by_ref()
            .map(|span| span.text)
            .find(|text| !is_whitespace_only(text))
    }
}

fn is_whitespace_only(text: &str) -> bool {
    text.chars().all(|c| {
        matches!(
            word_break_property(c),
            WordBreak::CR | WordBreak::LF | WordBreak::Newline | WordBreak::WSegSpace
        )
    })
}
