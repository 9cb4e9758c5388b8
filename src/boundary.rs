//! The word-boundary state machine of UAX #29 §4.1.
//!
//! The engine walks the input one scalar value at a time while holding a
//! four-slot window of Word_Break properties (lookbehind, left, right,
//! lookahead). Each step shifts the window one scalar to the right and
//! decides whether a boundary lies between `left` and `right`, applying the
//! rules WB1 through WB999 in priority order. Extend, Format and ZWJ
//! scalars are transparent to most rules (WB4): they are swept out of the
//! `right` and lookahead slots without ever being promoted into `left`, so
//! the surrounding rules see the base characters they attach to.

use crate::word_break::{is_extended_pictographic, word_break_property, WordBreak};
use std::str::CharIndices;

/// The engine's property alphabet: the concrete Word_Break values plus the
/// start-of-text and end-of-text sentinels that bracket the input.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Wb {
    Sot,
    Eot,
    Other,
    ALetter,
    CR,
    DoubleQuote,
    Extend,
    ExtendNumLet,
    Format,
    HebrewLetter,
    Katakana,
    LF,
    MidLetter,
    MidNum,
    MidNumLet,
    Newline,
    Numeric,
    RegionalIndicator,
    SingleQuote,
    WSegSpace,
    ZWJ,
}

impl From<WordBreak> for Wb {
    fn from(property: WordBreak) -> Wb {
        match property {
            WordBreak::Other => Wb::Other,
            WordBreak::ALetter => Wb::ALetter,
            WordBreak::CR => Wb::CR,
            WordBreak::DoubleQuote => Wb::DoubleQuote,
            WordBreak::Extend => Wb::Extend,
            WordBreak::ExtendNumLet => Wb::ExtendNumLet,
            WordBreak::Format => Wb::Format,
            WordBreak::HebrewLetter => Wb::HebrewLetter,
            WordBreak::Katakana => Wb::Katakana,
            WordBreak::LF => Wb::LF,
            WordBreak::MidLetter => Wb::MidLetter,
            WordBreak::MidNum => Wb::MidNum,
            WordBreak::MidNumLet => Wb::MidNumLet,
            WordBreak::Newline => Wb::Newline,
            WordBreak::Numeric => Wb::Numeric,
            WordBreak::RegionalIndicator => Wb::RegionalIndicator,
            WordBreak::SingleQuote => Wb::SingleQuote,
            WordBreak::WSegSpace => Wb::WSegSpace,
            WordBreak::ZWJ => Wb::ZWJ,
        }
    }
}

impl Wb {
    /// AHLetter in the UAX #29 rule macros.
    fn is_ah_letter(self) -> bool {
        matches!(self, Wb::ALetter | Wb::HebrewLetter)
    }

    /// MidNumLetQ in the UAX #29 rule macros.
    fn is_mid_num_let_q(self) -> bool {
        matches!(self, Wb::MidNumLet | Wb::SingleQuote)
    }

    /// The scalars WB4 makes transparent.
    fn is_ignorable(self) -> bool {
        matches!(self, Wb::Extend | Wb::Format | Wb::ZWJ)
    }

    fn is_newline(self) -> bool {
        matches!(self, Wb::Newline | Wb::CR | Wb::LF)
    }
}

/// One window slot: a property, the Extended_Pictographic membership of the
/// scalar, and the byte offset of the scalar's left edge.
#[derive(Clone, Copy, Debug)]
struct Slot {
    wb: Wb,
    pictographic: bool,
    at: usize,
}

impl Slot {
    fn sentinel(wb: Wb, at: usize) -> Slot {
        Slot {
            wb,
            pictographic: false,
            at,
        }
    }

    fn of(c: char, at: usize) -> Slot {
        Slot {
            wb: word_break_property(c).into(),
            pictographic: is_extended_pictographic(c),
            at,
        }
    }
}

/// A lazy iterator over the word-boundary positions of a string.
///
/// Positions are byte offsets into the input and always fall on `char`
/// boundaries, so every yielded position is a valid slice index. For a
/// non-empty input the first position is `0` and the last is the input
/// length; an empty input yields nothing. Positions are strictly
/// increasing, and the iterator performs no heap allocation.
#[derive(Clone, Debug)]
pub struct Boundaries<'a> {
    text: &'a str,
    iter: CharIndices<'a>,
    lookbehind: Slot,
    left: Slot,
    right: Slot,
    lookahead: Slot,
    /// Length of the run of Regional_Indicator scalars ending at `left`.
    /// WB15/WB16 keep a pair together exactly when this is odd.
    ri_run: u32,
    finished: bool,
}

impl<'a> Boundaries<'a> {
    pub(crate) fn new(text: &'a str) -> Boundaries<'a> {
        let mut iter = text.char_indices();
        let lookahead = match iter.next() {
            Some((at, c)) => Slot::of(c, at),
            None => Slot::sentinel(Wb::Eot, 0),
        };
        Boundaries {
            text,
            iter,
            lookbehind: Slot::sentinel(Wb::Sot, 0),
            left: Slot::sentinel(Wb::Sot, 0),
            right: Slot::sentinel(Wb::Sot, 0),
            lookahead,
            ri_run: 0,
            finished: text.is_empty(),
        }
    }

    fn read(&mut self) -> Slot {
        match self.iter.next() {
            Some((at, c)) => Slot::of(c, at),
            None => Slot::sentinel(Wb::Eot, self.text.len()),
        }
    }

    fn shift(&mut self) {
        self.lookbehind = self.left;
        self.left = self.right;
        self.right = self.lookahead;
        self.lookahead = self.read();
    }

    /// WB4: replace `right` without promoting it into `left`, so the
    /// ignored scalar attaches to the base character already there.
    fn skip_right(&mut self) {
        self.right = self.lookahead;
        self.lookahead = self.read();
    }

    fn next_is_pictographic(&self) -> bool {
        self.iter
            .clone()
            .next()
            .map_or(false, |(_, c)| is_extended_pictographic(c))
    }

    /// The first property at or after the lookahead slot that WB4 does not
    /// ignore. A ZWJ whose successor is Extended_Pictographic is kept in
    /// place: it must stay visible so WB3c can join the emoji sequence once
    /// the window reaches it.
    fn swept_lookahead(&mut self) -> Wb {
        while self.lookahead.wb.is_ignorable() {
            if self.lookahead.wb == Wb::ZWJ && self.next_is_pictographic() {
                break;
            }
            self.lookahead = self.read();
        }
        self.lookahead.wb
    }

    /// Keeps the Regional_Indicator run length in step with the window.
    /// Called once per decided step with the step's final `right`.
    fn note_regional_indicator(&mut self) {
        if self.right.wb == Wb::RegionalIndicator {
            self.ri_run += 1;
        } else {
            self.ri_run = 0;
        }
    }

    /// Applies WB3 through WB999 to the pair between `left` and `right`
    /// and reports whether they are separated by a boundary. WB1 and WB2
    /// are handled by the caller. May advance the window over ignorable
    /// scalars (WB4); if that advancement runs off the end of the text,
    /// `finished` is set and the return value is meaningless.
    fn apply_rules(&mut self) -> bool {
        let (l, r) = (self.left.wb, self.right.wb);

        // WB3: keep CR LF together.
        if l == Wb::CR && r == Wb::LF {
            return false;
        }
        // WB3a/WB3b: otherwise newlines break on both sides.
        if l.is_newline() || r.is_newline() {
            return true;
        }
        // WB3c: ZWJ glues onto a following pictograph.
        if l == Wb::ZWJ && self.right.pictographic {
            return false;
        }
        // WB3d: keep horizontal whitespace together.
        if l == Wb::WSegSpace && r == Wb::WSegSpace {
            return false;
        }
        // WB4: sweep Extend, Format and ZWJ out of `right`. They attach to
        // `left` with no boundary in between, so the rules below compare
        // `left` against the next base character instead.
        while self.right.wb.is_ignorable() {
            if self.right.wb == Wb::ZWJ && self.lookahead.pictographic {
                // The sweep would erase the ZWJ that WB3c needs. Promote it
                // into `left` with a full shift and join the sequence here.
                self.shift();
                return false;
            }
            self.skip_right();
            if self.right.wb == Wb::Eot {
                self.finished = true;
                return false;
            }
        }
        self.letter_number_rules()
    }

    /// WB5 through WB16: the letter, number, katakana and regional
    /// indicator joins. `right` is guaranteed non-ignorable here.
    fn letter_number_rules(&mut self) -> bool {
        let (l, r) = (self.left.wb, self.right.wb);

        // WB5: letters do not break between each other.
        if l.is_ah_letter() && r.is_ah_letter() {
            return false;
        }
        // WB6: letter before mid-letter punctuation followed by a letter.
        if l.is_ah_letter()
            && (r == Wb::MidLetter || r.is_mid_num_let_q())
            && self.swept_lookahead().is_ah_letter()
        {
            return false;
        }
        // WB7: letter after mid-letter punctuation preceded by a letter.
        if (l == Wb::MidLetter || l.is_mid_num_let_q())
            && r.is_ah_letter()
            && self.lookbehind.wb.is_ah_letter()
        {
            return false;
        }
        // WB7a: Hebrew letter before an apostrophe.
        if l == Wb::HebrewLetter && r == Wb::SingleQuote {
            return false;
        }
        // WB7b/WB7c: Hebrew letters around a double quote.
        if l == Wb::HebrewLetter
            && r == Wb::DoubleQuote
            && self.swept_lookahead() == Wb::HebrewLetter
        {
            return false;
        }
        if l == Wb::DoubleQuote
            && r == Wb::HebrewLetter
            && self.lookbehind.wb == Wb::HebrewLetter
        {
            return false;
        }
        // WB8/WB9/WB10: digits join digits and letters.
        if l == Wb::Numeric && r == Wb::Numeric {
            return false;
        }
        if l.is_ah_letter() && r == Wb::Numeric {
            return false;
        }
        if l == Wb::Numeric && r.is_ah_letter() {
            return false;
        }
        // WB11/WB12: digits around numeric separators.
        if (l == Wb::MidNum || l.is_mid_num_let_q())
            && r == Wb::Numeric
            && self.lookbehind.wb == Wb::Numeric
        {
            return false;
        }
        if l == Wb::Numeric
            && (r == Wb::MidNum || r.is_mid_num_let_q())
            && self.swept_lookahead() == Wb::Numeric
        {
            return false;
        }
        // WB13: katakana joins katakana.
        if l == Wb::Katakana && r == Wb::Katakana {
            return false;
        }
        // WB13a/WB13b: connector punctuation joins word-like runs.
        if matches!(
            l,
            Wb::ALetter | Wb::HebrewLetter | Wb::Numeric | Wb::Katakana | Wb::ExtendNumLet
        ) && r == Wb::ExtendNumLet
        {
            return false;
        }
        if l == Wb::ExtendNumLet
            && matches!(r, Wb::ALetter | Wb::HebrewLetter | Wb::Numeric | Wb::Katakana)
        {
            return false;
        }
        // WB15/WB16: regional indicators pair up two by two.
        if l == Wb::RegionalIndicator && r == Wb::RegionalIndicator && self.ri_run % 2 == 1 {
            return false;
        }
        // WB999: break everywhere else.
        true
    }
}

impl<'a> Iterator for Boundaries<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.finished {
            return None;
        }
        loop {
            self.shift();
            // WB1: break after the start of text.
            if self.left.wb == Wb::Sot {
                self.note_regional_indicator();
                return Some(self.right.at);
            }
            // WB2: break before the end of text, then stop.
            if self.right.wb == Wb::Eot {
                self.finished = true;
                return Some(self.text.len());
            }
            let boundary = self.apply_rules();
            if self.finished {
                // A WB4 sweep ran off the end of the text (WB2).
                return Some(self.text.len());
            }
            self.note_regional_indicator();
            if boundary {
                return Some(self.right.at);
            }
        }
    }
}
