use crate::tables::{EXTENDED_PICTOGRAPHIC, WORD_BREAK};
use std::cmp::Ordering;
use std::sync::OnceLock;

/// A Word_Break property value from UAX #29 §4.1.
///
/// Every scalar value has exactly one of these; code points the Unicode
/// Character Database leaves unassigned resolve to [`WordBreak::Other`].
/// Extended_Pictographic is deliberately not a variant: it is an independent
/// property that may coincide with a real Word_Break class (U+2139 is both
/// ALetter and Extended_Pictographic), so it is exposed separately as
/// [`is_extended_pictographic`].
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum WordBreak {
    Other = 0,
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

/// All properties, indexed by their discriminant. Used to decode the bit
/// fields of the packed lookup table.
const PROPERTIES: [WordBreak; 19] = [
    WordBreak::Other,
    WordBreak::ALetter,
    WordBreak::CR,
    WordBreak::DoubleQuote,
    WordBreak::Extend,
    WordBreak::ExtendNumLet,
    WordBreak::Format,
    WordBreak::HebrewLetter,
    WordBreak::Katakana,
    WordBreak::LF,
    WordBreak::MidLetter,
    WordBreak::MidNum,
    WordBreak::MidNumLet,
    WordBreak::Newline,
    WordBreak::Numeric,
    WordBreak::RegionalIndicator,
    WordBreak::SingleQuote,
    WordBreak::WSegSpace,
    WordBreak::ZWJ,
];

const BITS_PER_PROPERTY: u32 = 5;
const PROPERTY_MASK: u64 = (1 << BITS_PER_PROPERTY) - 1;
const CODE_POINT_LIMIT: u32 = 0x11_0000;

/// Returns the Word_Break property of a scalar value.
///
/// Resolution goes through a dense packed table holding eight properties
/// per `u64`, so a lookup is two memory references. The table is built from
/// the generated run table on first use.
pub fn word_break_property(c: char) -> WordBreak {
    let c = c as u32;
    let word = packed_table()[(c >> 3) as usize];
    let bits = (word >> ((c & 7) * BITS_PER_PROPERTY)) & PROPERTY_MASK;
    PROPERTIES[bits as usize]
}

/// Returns whether a scalar value has the Extended_Pictographic property,
/// i.e. is a base emoji that ZWJ glues into emoji sequences.
pub fn is_extended_pictographic(c: char) -> bool {
    let c = c as u32;
    EXTENDED_PICTOGRAPHIC
        .binary_search_by(|&(start, end)| {
            if end < c {
                Ordering::Less
            } else if start > c {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

fn packed_table() -> &'static [u64] {
    static PACKED: OnceLock<Vec<u64>> = OnceLock::new();
    PACKED.get_or_init(build_packed_table)
}

/// Expands the run table into one `u64` per eight code points, each
/// property occupying a `BITS_PER_PROPERTY`-bit field. `Other` is
/// discriminant zero, so the words start out correctly filled.
fn build_packed_table() -> Vec<u64> {
    let mut words = vec![0u64; (CODE_POINT_LIMIT >> 3) as usize];
    for (i, &(start, property)) in WORD_BREAK.iter().enumerate() {
        if property == WordBreak::Other {
            continue;
        }
        let end = match WORD_BREAK.get(i + 1) {
            Some(&(next_start, _)) => next_start,
            None => CODE_POINT_LIMIT,
        };
        for c in start..end {
            words[(c >> 3) as usize] |= (property as u64) << ((c & 7) * BITS_PER_PROPERTY);
        }
    }
    words
}

/// Run-table resolution by binary search. The packed table is the fast
/// path; this is kept as the oracle the tests check it against.
#[cfg(test)]
fn search_property(c: u32) -> WordBreak {
    let i = WORD_BREAK.partition_point(|&(start, _)| start <= c);
    WORD_BREAK[i - 1].1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_properties() {
        use WordBreak::*;
        let cases: &[(char, WordBreak)] = &[
            ('a', ALetter),
            ('\r', CR),
            ('\n', LF),
            ('\u{B}', Newline),
            ('\u{85}', Newline),
            ('\u{2028}', Newline),
            ('"', DoubleQuote),
            ('\'', SingleQuote),
            (':', MidLetter),
            (',', MidNum),
            ('.', MidNumLet),
            ('\u{2019}', MidNumLet),
            ('0', Numeric),
            ('_', ExtendNumLet),
            ('\u{202F}', ExtendNumLet),
            ('\u{5D0}', HebrewLetter),
            ('\u{30FC}', Katakana),
            ('\u{AD}', Format),
            ('\u{301}', Extend),
            ('\u{200D}', ZWJ),
            ('\u{1F1E6}', RegionalIndicator),
            ('\u{1F1FF}', RegionalIndicator),
            (' ', WSegSpace),
            ('\u{2009}', WSegSpace),
            ('\t', Other),
            ('\u{4E00}', Other),
            ('\u{1F30E}', Other),
        ];
        for &(c, expected) in cases {
            assert_eq!(word_break_property(c), expected, "U+{:04X}", c as u32);
        }
    }

    #[test]
    fn test_extended_pictographic() {
        assert!(is_extended_pictographic('\u{A9}'));
        assert!(is_extended_pictographic('\u{2642}'));
        assert!(is_extended_pictographic('\u{1F30E}'));
        assert!(is_extended_pictographic('\u{1F9DA}'));
        // U+2139 carries a real Word_Break class on top of the property.
        assert!(is_extended_pictographic('\u{2139}'));
        assert_eq!(word_break_property('\u{2139}'), WordBreak::ALetter);
        assert!(!is_extended_pictographic('a'));
        assert!(!is_extended_pictographic('\u{200D}'));
        assert!(!is_extended_pictographic('\u{1F1E6}'));
    }

    #[test]
    fn test_table_is_sorted_and_dense() {
        assert_eq!(WORD_BREAK[0].0, 0);
        for pair in WORD_BREAK.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            // Adjacent runs always differ, otherwise they would be one run.
            assert_ne!(pair[0].1, pair[1].1);
        }
        let &(last_start, last_property) = WORD_BREAK.last().unwrap();
        assert!(last_start <= 0x10FFFF);
        assert_eq!(last_property, WordBreak::Other);
    }

    #[test]
    fn test_pictographic_ranges_are_sorted() {
        for &(start, end) in EXTENDED_PICTOGRAPHIC {
            assert!(start <= end);
        }
        for pair in EXTENDED_PICTOGRAPHIC.windows(2) {
            assert!(pair[0].1 < pair[1].0);
        }
    }

    #[test]
    fn test_lookup_is_total() {
        // Every scalar value resolves without panicking, and the packed
        // table agrees with the run table everywhere.
        for c in (0..=0x10FFFF).filter_map(char::from_u32) {
            assert_eq!(word_break_property(c), search_property(c as u32), "U+{:04X}", c as u32);
        }
    }

    #[test]
    fn test_tag_and_variation_selector_planes() {
        assert_eq!(word_break_property('\u{E0001}'), WordBreak::Format);
        assert_eq!(word_break_property('\u{E0020}'), WordBreak::Extend);
        assert_eq!(word_break_property('\u{E01EF}'), WordBreak::Extend);
        assert_eq!(word_break_property('\u{E01F0}'), WordBreak::Other);
        // Past the last assigned range everything falls through to Other.
        assert_eq!(word_break_property('\u{E1000}'), WordBreak::Other);
        assert_eq!(word_break_property('\u{10FFFF}'), WordBreak::Other);
    }
}
