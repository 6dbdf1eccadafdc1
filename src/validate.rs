//! The IDNA2008 label-validity predicate.
//!
//! Checks run in a fixed order and short-circuit on the first violated
//! rule, so a label with several problems always reports the same single
//! reason: structure (emptiness, length, hyphen placement), leading
//! combining mark, per-codepoint derived property, context rules, and
//! finally the Bidi rule.

use crate::ace;
use crate::bidi;
use crate::error::Error;
use crate::tables::{self, Category};
use unicode_normalization::char::{canonical_combining_class, is_combining_mark};

const CCC_VIRAMA: u8 = 9;

/// Validates a single label, given as a codepoint sequence in NFC.
pub(crate) fn check_label(label: &[char]) -> Result<(), Error> {
    if label.is_empty() {
        return Err(Error::Disallowed);
    }
    // A label of more than 63 codepoints cannot fit a 63-octet ACE form.
    if label.len() > ace::MAX_LABEL_LEN {
        return Err(Error::TooBigLabel);
    }
    if label.len() >= 4 && label[2] == '-' && label[3] == '-' {
        return Err(Error::TwoHyphen);
    }
    if label[0] == '-' || label[label.len() - 1] == '-' {
        return Err(Error::HyphenStartEnd);
    }
    if is_combining_mark(label[0]) {
        return Err(Error::LeadingCombining);
    }
    for &c in label {
        match tables::category(c) {
            Category::Disallowed => return Err(Error::Disallowed),
            Category::Unassigned => return Err(Error::Unassigned),
            _ => {}
        }
    }
    for (i, &c) in label.iter().enumerate() {
        match tables::category(c) {
            Category::ContextJ => match contextj_rule(c) {
                Some(rule) if rule(label, i) => {}
                Some(_) => return Err(Error::ContextJ),
                None => return Err(Error::ContextJNoRule),
            },
            Category::ContextO => match contexto_rule(c) {
                Some(rule) if rule(label, i) => {}
                Some(_) => return Err(Error::ContextO),
                None => return Err(Error::ContextONoRule),
            },
            _ => {}
        }
    }
    bidi::check_label(label)
}

/// A context predicate: examines the neighbors of the codepoint at `i`.
type ContextRule = fn(&[char], usize) -> bool;

fn contextj_rule(c: char) -> Option<ContextRule> {
    match c {
        '\u{200C}' => Some(rule_zwnj),
        '\u{200D}' => Some(rule_zwj),
        _ => None,
    }
}

fn contexto_rule(c: char) -> Option<ContextRule> {
    match c {
        '\u{00B7}' => Some(rule_middle_dot),
        '\u{0375}' => Some(rule_keraia),
        '\u{05F3}' | '\u{05F4}' => Some(rule_hebrew_punctuation),
        '\u{30FB}' => Some(rule_katakana_middle_dot),
        '\u{0660}'..='\u{0669}' => Some(rule_arabic_indic),
        '\u{06F0}'..='\u{06F9}' => Some(rule_extended_arabic_indic),
        _ => None,
    }
}

/// ZERO WIDTH NON-JOINER: after a virama, or breaking a cursive
/// connection (RFC 5892, Appendix A.1).
fn rule_zwnj(label: &[char], i: usize) -> bool {
    if i == 0 {
        return false;
    }
    if canonical_combining_class(label[i - 1]) == CCC_VIRAMA {
        return true;
    }
    let before = label[..i]
        .iter()
        .rev()
        .map(|&c| joining_type(c))
        .find(|&j| j != Joining::Transparent);
    let after = label[i + 1..]
        .iter()
        .map(|&c| joining_type(c))
        .find(|&j| j != Joining::Transparent);
    matches!(before, Some(Joining::Left | Joining::Dual))
        && matches!(after, Some(Joining::Right | Joining::Dual))
}

/// ZERO WIDTH JOINER: only directly after a virama (RFC 5892, Appendix A.2).
fn rule_zwj(label: &[char], i: usize) -> bool {
    i > 0 && canonical_combining_class(label[i - 1]) == CCC_VIRAMA
}

/// MIDDLE DOT: between two lowercase `l` (Catalan ela geminada).
fn rule_middle_dot(label: &[char], i: usize) -> bool {
    i > 0 && i + 1 < label.len() && label[i - 1] == 'l' && label[i + 1] == 'l'
}

/// GREEK LOWER NUMERAL SIGN: directly before a Greek character.
fn rule_keraia(label: &[char], i: usize) -> bool {
    i + 1 < label.len() && is_greek(label[i + 1])
}

/// HEBREW GERESH and GERSHAYIM: directly after a Hebrew character.
fn rule_hebrew_punctuation(label: &[char], i: usize) -> bool {
    i > 0 && is_hebrew(label[i - 1])
}

/// KATAKANA MIDDLE DOT: the label must contain Hiragana, Katakana or Han.
fn rule_katakana_middle_dot(label: &[char], _i: usize) -> bool {
    label.iter().any(|&c| is_han_or_kana(c))
}

/// ARABIC-INDIC DIGITS: must not mix with extended Arabic-Indic digits.
fn rule_arabic_indic(label: &[char], _i: usize) -> bool {
    !label.iter().any(|&c| ('\u{06F0}'..='\u{06F9}').contains(&c))
}

/// EXTENDED ARABIC-INDIC DIGITS: must not mix with Arabic-Indic digits.
fn rule_extended_arabic_indic(label: &[char], _i: usize) -> bool {
    !label.iter().any(|&c| ('\u{0660}'..='\u{0669}').contains(&c))
}

fn is_greek(c: char) -> bool {
    matches!(c, '\u{0370}'..='\u{03FF}' | '\u{1F00}'..='\u{1FFF}')
}

fn is_hebrew(c: char) -> bool {
    matches!(c, '\u{0590}'..='\u{05FF}')
}

fn is_han_or_kana(c: char) -> bool {
    matches!(c,
        '\u{3041}'..='\u{3096}'
            | '\u{30A1}'..='\u{30FA}'
            | '\u{3005}'
            | '\u{3007}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{4E00}'..='\u{9FFF}')
}

/// Joining types for the ZWNJ cursive-break rule, covering the Arabic
/// block; combining marks are transparent, everything else non-joining.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Joining {
    Left,
    Right,
    Dual,
    Transparent,
    NonJoining,
}

fn joining_type(c: char) -> Joining {
    if canonical_combining_class(c) != 0 || is_combining_mark(c) {
        return Joining::Transparent;
    }
    match c {
        '\u{0622}'..='\u{0625}'
        | '\u{0627}'
        | '\u{0629}'
        | '\u{062F}'..='\u{0632}'
        | '\u{0648}'
        | '\u{0671}'..='\u{0673}'
        | '\u{0675}'..='\u{0677}'
        | '\u{0688}'..='\u{0699}'
        | '\u{06C0}'
        | '\u{06C3}'..='\u{06CB}'
        | '\u{06CD}'
        | '\u{06CF}'
        | '\u{06D2}'..='\u{06D3}'
        | '\u{06D5}' => Joining::Right,
        '\u{0620}'
        | '\u{0626}'
        | '\u{0628}'
        | '\u{062A}'..='\u{062E}'
        | '\u{0633}'..='\u{063F}'
        | '\u{0641}'..='\u{0647}'
        | '\u{0649}'..='\u{064A}'
        | '\u{066E}'..='\u{066F}'
        | '\u{0678}'..='\u{0687}'
        | '\u{069A}'..='\u{06BF}'
        | '\u{06C1}'..='\u{06C2}'
        | '\u{06CC}'
        | '\u{06CE}'
        | '\u{06D0}'..='\u{06D1}'
        | '\u{06FA}'..='\u{06FF}' => Joining::Dual,
        _ => Joining::NonJoining,
    }
}
