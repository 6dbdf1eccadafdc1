//! Static IDNA2008 codepoint classification.
//!
//! The table below embeds the [RFC 5892] derived property as a sorted,
//! non-overlapping list of codepoint ranges, binary-searched on lookup.
//! It is immutable after compilation, so concurrent reads need no
//! synchronization.
//!
//! Uppercase letters are unstable under NFKC case folding and therefore
//! DISALLOWED across the board; they are rejected before the table is
//! consulted, which lets case-paired alphabet blocks appear as single
//! PVALID entries. Codepoints covered by no range report UNASSIGNED.
//!
//! [RFC 5892]: https://datatracker.ietf.org/doc/html/rfc5892/

/// The derived property of a codepoint under IDNA2008.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Category {
    /// Valid for use in an IDN label.
    Pvalid,
    /// Valid only when a joiner context rule is satisfied.
    ContextJ,
    /// Valid only when an other context rule is satisfied.
    ContextO,
    /// Never valid in an IDN label.
    Disallowed,
    /// Not assigned in the supported Unicode repertoire.
    Unassigned,
}

struct Range {
    from: u32,
    to: u32,
    category: Category,
}

const fn r(from: u32, to: u32, category: Category) -> Range {
    Range { from, to, category }
}

use Category::{ContextJ as J, ContextO as O, Disallowed as D, Pvalid as P};

#[rustfmt::skip]
static RANGES: &[Range] = &[
    r(0x0000, 0x002C, D),
    r(0x002D, 0x002D, P),           // HYPHEN-MINUS
    r(0x002E, 0x002F, D),
    r(0x0030, 0x0039, P),           // ASCII digits
    r(0x003A, 0x0060, D),
    r(0x0061, 0x007A, P),           // a-z
    r(0x007B, 0x00B6, D),
    r(0x00B7, 0x00B7, O),           // MIDDLE DOT
    r(0x00B8, 0x00DE, D),
    r(0x00DF, 0x00F6, P),           // Latin-1 lowercase
    r(0x00F7, 0x00F7, D),           // DIVISION SIGN
    r(0x00F8, 0x0148, P),           // Latin-1 / Extended-A
    r(0x0149, 0x0149, D),           // deprecated 'n
    r(0x014A, 0x017E, P),
    r(0x017F, 0x017F, D),           // LONG S
    r(0x0180, 0x02AF, P),           // Latin Extended-B, IPA
    r(0x02B0, 0x02B8, D),
    r(0x02B9, 0x02C1, P),
    r(0x02C2, 0x02C5, D),
    r(0x02C6, 0x02D1, P),
    r(0x02D2, 0x02EB, D),
    r(0x02EC, 0x02EC, P),
    r(0x02ED, 0x02ED, D),
    r(0x02EE, 0x02EE, P),
    r(0x02EF, 0x02FF, D),
    r(0x0300, 0x033F, P),           // combining diacritical marks
    r(0x0340, 0x0341, D),           // deprecated grave/acute tone marks
    r(0x0342, 0x0342, P),
    r(0x0343, 0x0345, D),
    r(0x0346, 0x036F, P),
    r(0x0370, 0x0373, P),           // archaic Greek
    r(0x0374, 0x0374, D),
    r(0x0375, 0x0375, O),           // GREEK LOWER NUMERAL SIGN (KERAIA)
    r(0x0376, 0x0377, P),
    r(0x0378, 0x037A, D),
    r(0x037B, 0x037D, P),
    r(0x037E, 0x038F, D),
    r(0x0390, 0x03C1, P),           // Greek
    r(0x03C2, 0x03C2, P),           // FINAL SIGMA (RFC 5892 exception)
    r(0x03C3, 0x03CE, P),
    r(0x03CF, 0x03FF, D),
    r(0x0400, 0x0481, P),           // Cyrillic
    r(0x0482, 0x0482, D),
    r(0x0483, 0x0487, P),
    r(0x0488, 0x0489, D),
    r(0x048A, 0x052F, P),
    r(0x0559, 0x0559, P),           // Armenian
    r(0x055A, 0x055F, D),
    r(0x0561, 0x0586, P),
    r(0x0587, 0x0590, D),
    r(0x0591, 0x05BD, P),           // Hebrew points
    r(0x05BE, 0x05BE, D),
    r(0x05BF, 0x05BF, P),
    r(0x05C0, 0x05C0, D),
    r(0x05C1, 0x05C2, P),
    r(0x05C3, 0x05C3, D),
    r(0x05C4, 0x05C5, P),
    r(0x05C6, 0x05C6, D),
    r(0x05C7, 0x05C7, P),
    r(0x05D0, 0x05EA, P),           // Hebrew letters
    r(0x05F0, 0x05F2, P),
    r(0x05F3, 0x05F4, O),           // GERESH, GERSHAYIM
    r(0x0600, 0x060F, D),           // Arabic signs and punctuation
    r(0x0610, 0x061A, P),
    r(0x061B, 0x061F, D),
    r(0x0620, 0x063F, P),           // Arabic letters
    r(0x0640, 0x0640, D),           // TATWEEL
    r(0x0641, 0x065F, P),
    r(0x0660, 0x0669, O),           // ARABIC-INDIC DIGITS
    r(0x066A, 0x066D, D),
    r(0x066E, 0x0674, P),
    r(0x0675, 0x0678, D),
    r(0x0679, 0x06D3, P),
    r(0x06D4, 0x06D4, D),
    r(0x06D5, 0x06DC, P),
    r(0x06DD, 0x06DE, D),
    r(0x06DF, 0x06E8, P),
    r(0x06E9, 0x06E9, D),
    r(0x06EA, 0x06EF, P),
    r(0x06F0, 0x06F9, O),           // EXTENDED ARABIC-INDIC DIGITS
    r(0x06FA, 0x06FF, P),
    r(0x0700, 0x070D, D),           // Syriac punctuation
    r(0x0710, 0x074A, P),           // Syriac
    r(0x074D, 0x07B1, P),           // Syriac supplement, Thaana
    r(0x07C0, 0x07F5, P),           // NKo
    r(0x0900, 0x0963, P),           // Devanagari
    r(0x0964, 0x0965, D),           // DANDA, DOUBLE DANDA
    r(0x0966, 0x096F, P),
    r(0x0970, 0x0970, D),
    r(0x0971, 0x097F, P),
    r(0x0981, 0x09E3, P),           // Bengali
    r(0x09E6, 0x09F1, P),
    r(0x09F2, 0x09FA, D),
    r(0x0A01, 0x0A75, P),           // Gurmukhi
    r(0x0A81, 0x0AEF, P),           // Gujarati
    r(0x0B01, 0x0B6F, P),           // Oriya
    r(0x0B82, 0x0BEF, P),           // Tamil
    r(0x0BF0, 0x0BFA, D),
    r(0x0C01, 0x0C6F, P),           // Telugu
    r(0x0C81, 0x0CEF, P),           // Kannada
    r(0x0D01, 0x0D6F, P),           // Malayalam
    r(0x0D82, 0x0DF3, P),           // Sinhala
    r(0x0E01, 0x0E3A, P),           // Thai
    r(0x0E3F, 0x0E3F, D),           // BAHT
    r(0x0E40, 0x0E4E, P),
    r(0x0E4F, 0x0E4F, D),
    r(0x0E50, 0x0E59, P),
    r(0x0E5A, 0x0E5B, D),
    r(0x0E81, 0x0EDD, P),           // Lao
    r(0x1000, 0x1049, P),           // Myanmar
    r(0x10D0, 0x10FA, P),           // Georgian
    r(0x1100, 0x11FF, D),           // archaic Hangul jamo
    r(0x1200, 0x135A, P),           // Ethiopic
    r(0x135D, 0x135F, P),
    r(0x1360, 0x137C, D),
    r(0x1401, 0x166C, P),           // Canadian Aboriginal syllabics
    r(0x1780, 0x17D3, P),           // Khmer
    r(0x17E0, 0x17E9, P),
    r(0x1810, 0x1819, P),           // Mongolian
    r(0x1820, 0x1877, P),
    r(0x1DC0, 0x1DFF, P),           // combining marks supplement
    r(0x1E00, 0x1EFF, P),           // Latin Extended Additional
    r(0x1F00, 0x1FFF, P),           // Greek Extended
    r(0x2000, 0x200B, D),
    r(0x200C, 0x200D, J),           // ZWNJ, ZWJ
    r(0x200E, 0x2BFF, D),           // punctuation, symbols, arrows, math
    r(0x2C60, 0x2C7F, P),           // Latin Extended-C
    r(0x2D00, 0x2D25, P),           // Georgian small letters
    r(0x2D30, 0x2D67, P),           // Tifinagh
    r(0x2E00, 0x2E7F, D),
    r(0x2E80, 0x3004, D),           // CJK radicals, CJK punctuation
    r(0x3005, 0x3005, P),           // IDEOGRAPHIC ITERATION MARK
    r(0x3006, 0x3006, D),
    r(0x3007, 0x3007, P),           // IDEOGRAPHIC NUMBER ZERO
    r(0x3008, 0x3040, D),
    r(0x3041, 0x3096, P),           // Hiragana
    r(0x3099, 0x309A, P),           // combining kana voicing marks
    r(0x309B, 0x30A0, D),
    r(0x30A1, 0x30FA, P),           // Katakana
    r(0x30FB, 0x30FB, O),           // KATAKANA MIDDLE DOT
    r(0x30FC, 0x30FE, P),
    r(0x30FF, 0x30FF, D),
    r(0x3105, 0x312D, P),           // Bopomofo
    r(0x3130, 0x33FF, D),           // compatibility jamo, CJK symbols
    r(0x3400, 0x4DBF, P),           // CJK Extension A
    r(0x4DC0, 0x4DFF, D),
    r(0x4E00, 0x9FFF, P),           // CJK Unified Ideographs
    r(0xA000, 0xA48C, P),           // Yi
    r(0xA490, 0xA4CF, D),
    r(0xA500, 0xA60B, P),           // Vai
    r(0xA60C, 0xA63F, D),
    r(0xA640, 0xA69F, P),           // Cyrillic Extended-B
    r(0xA720, 0xA7FF, P),           // Latin Extended-D
    r(0xA800, 0xA82B, P),           // Syloti Nagri
    r(0xAC00, 0xD7A3, P),           // Hangul syllables
    r(0xE000, 0xF8FF, D),           // private use
    r(0xF900, 0xFAFF, D),           // CJK compatibility ideographs
    r(0xFB00, 0xFDFF, D),           // presentation forms, noncharacters
    r(0xFE00, 0xFFFF, D),           // variation selectors, fullwidth forms
    r(0x10330, 0x1034A, P),         // Gothic
    r(0x1D100, 0x1D7FF, D),         // musical and mathematical symbols
    r(0x1E900, 0x1E94B, P),         // Adlam
    r(0x1E950, 0x1E959, P),
    r(0x1F000, 0x1FAFF, D),         // emoji and game symbols
    r(0x20000, 0x2A6DF, P),         // CJK Extension B
    r(0x2A700, 0x2B81F, P),         // CJK Extensions C, D
    r(0x2F800, 0x2FA1F, D),         // CJK compatibility supplement
    r(0xE0000, 0xE01EF, D),         // tags, variation selectors supplement
    r(0xF0000, 0xFFFFD, D),         // private use planes
    r(0x100000, 0x10FFFD, D),
];

/// Looks up the derived property of a codepoint.
pub(crate) fn category(c: char) -> Category {
    // Case-fold-unstable: every uppercase letter is DISALLOWED.
    if c.is_uppercase() {
        return Category::Disallowed;
    }
    let cp = c as u32;
    RANGES
        .binary_search_by(|range| {
            if range.to < cp {
                core::cmp::Ordering::Less
            } else if range.from > cp {
                core::cmp::Ordering::Greater
            } else {
                core::cmp::Ordering::Equal
            }
        })
        .map(|i| RANGES[i].category)
        .unwrap_or(Category::Unassigned)
}

#[cfg(test)]
mod tests {
    use super::{category, Category, RANGES};

    #[test]
    fn ranges_sorted_and_disjoint() {
        for window in RANGES.windows(2) {
            assert!(window[0].from <= window[0].to);
            assert!(window[0].to < window[1].from);
        }
    }

    #[test]
    fn ascii() {
        assert_eq!(category('a'), Category::Pvalid);
        assert_eq!(category('z'), Category::Pvalid);
        assert_eq!(category('0'), Category::Pvalid);
        assert_eq!(category('-'), Category::Pvalid);
        assert_eq!(category('A'), Category::Disallowed);
        assert_eq!(category('.'), Category::Disallowed);
        assert_eq!(category(' '), Category::Disallowed);
        assert_eq!(category('_'), Category::Disallowed);
    }

    #[test]
    fn scripts() {
        assert_eq!(category('ü'), Category::Pvalid);
        assert_eq!(category('ß'), Category::Pvalid);
        assert_eq!(category('Ü'), Category::Disallowed);
        assert_eq!(category('×'), Category::Disallowed);
        assert_eq!(category('α'), Category::Pvalid);
        // Exceptions list of RFC 5892, Section 2.6.
        assert_eq!(category('ς'), Category::Pvalid);
        assert_eq!(category('ы'), Category::Pvalid);
        assert_eq!(category('\u{05D0}'), Category::Pvalid); // alef
        assert_eq!(category('\u{0628}'), Category::Pvalid); // beh
        assert_eq!(category('\u{0915}'), Category::Pvalid); // ka
        assert_eq!(category('中'), Category::Pvalid);
        assert_eq!(category('\u{30A2}'), Category::Pvalid); // katakana a
        assert_eq!(category('\u{AC00}'), Category::Pvalid); // hangul ga
    }

    #[test]
    fn context_classes() {
        assert_eq!(category('\u{200C}'), Category::ContextJ);
        assert_eq!(category('\u{200D}'), Category::ContextJ);
        assert_eq!(category('\u{00B7}'), Category::ContextO);
        assert_eq!(category('\u{0375}'), Category::ContextO);
        assert_eq!(category('\u{05F3}'), Category::ContextO);
        assert_eq!(category('\u{30FB}'), Category::ContextO);
        assert_eq!(category('\u{0661}'), Category::ContextO);
        assert_eq!(category('\u{06F1}'), Category::ContextO);
    }

    #[test]
    fn unassigned_and_disallowed() {
        assert_eq!(category('\u{0378}'), Category::Disallowed);
        assert_eq!(category('\u{05EB}'), Category::Unassigned);
        assert_eq!(category('\u{E000}'), Category::Disallowed); // private use
        assert_eq!(category('\u{FFFF}'), Category::Disallowed); // noncharacter
        assert_eq!(category('\u{1F600}'), Category::Disallowed); // emoji
    }
}
