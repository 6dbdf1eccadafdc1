//! The Bidi rule for labels ([RFC 5893]).
//!
//! A label's direction is decided by its first strong-direction character.
//! RTL labels may contain only the Bidi classes permitted in RTL text and
//! must end in a strong RTL character or digit; LTR labels must not contain
//! any RTL character at all.
//!
//! [RFC 5893]: https://datatracker.ietf.org/doc/html/rfc5893/

use crate::error::Error;
use unicode_bidi::{bidi_class, BidiClass};

/// Checks the whole-label bidirectional constraint.
pub(crate) fn check_label(label: &[char]) -> Result<(), Error> {
    let first_strong = label
        .iter()
        .map(|&c| bidi_class(c))
        .find(|&cls| matches!(cls, BidiClass::L | BidiClass::R | BidiClass::AL));
    match first_strong {
        Some(BidiClass::R | BidiClass::AL) => check_rtl(label),
        // A label with no strong character is held to the LTR constraint.
        _ => check_ltr(label),
    }
}

fn check_rtl(label: &[char]) -> Result<(), Error> {
    let mut seen_en = false;
    let mut seen_an = false;
    for &c in label {
        match bidi_class(c) {
            BidiClass::R
            | BidiClass::AL
            | BidiClass::ES
            | BidiClass::CS
            | BidiClass::ET
            | BidiClass::ON
            | BidiClass::BN
            | BidiClass::NSM => {}
            BidiClass::EN => seen_en = true,
            BidiClass::AN => seen_an = true,
            _ => return Err(Error::Bidi),
        }
    }
    // European and Arabic-Indic digits must not mix.
    if seen_en && seen_an {
        return Err(Error::Bidi);
    }
    // The label must end in R, AL or a digit, ignoring trailing marks.
    let last = label
        .iter()
        .rev()
        .map(|&c| bidi_class(c))
        .find(|&cls| cls != BidiClass::NSM);
    if matches!(
        last,
        Some(BidiClass::R | BidiClass::AL | BidiClass::EN | BidiClass::AN)
    ) {
        Ok(())
    } else {
        Err(Error::Bidi)
    }
}

fn check_ltr(label: &[char]) -> Result<(), Error> {
    for &c in label {
        if matches!(
            bidi_class(c),
            BidiClass::R | BidiClass::AL | BidiClass::AN
        ) {
            return Err(Error::Bidi);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::check_label;
    use crate::error::Error;

    fn check(s: &str) -> Result<(), Error> {
        check_label(&s.chars().collect::<Vec<_>>())
    }

    #[test]
    fn ltr() {
        assert_eq!(check("example"), Ok(()));
        assert_eq!(check("münchen"), Ok(()));
        assert_eq!(check("例え"), Ok(()));
    }

    #[test]
    fn rtl() {
        // Hebrew alef-bet, Arabic beh-alef.
        assert_eq!(check("\u{05D0}\u{05D1}"), Ok(()));
        assert_eq!(check("\u{0628}\u{0627}"), Ok(()));
        // Arabic letter followed by an Arabic-Indic digit.
        assert_eq!(check("\u{0627}\u{0661}"), Ok(()));
    }

    #[test]
    fn mixed_direction_fails() {
        // Latin letter inside an RTL label.
        assert_eq!(check("\u{05D0}a\u{05D1}"), Err(Error::Bidi));
        // RTL letter inside an LTR label.
        assert_eq!(check("ab\u{05D0}"), Err(Error::Bidi));
    }

    #[test]
    fn mixed_digit_sets_fail() {
        // EN and AN in one RTL label.
        assert_eq!(check("\u{05D0}1\u{0661}"), Err(Error::Bidi));
    }

    #[test]
    fn rtl_must_end_strong() {
        // Ends in ON (middle dot) rather than R/AL/digit.
        assert_eq!(check("\u{05D0}\u{00B7}"), Err(Error::Bidi));
    }
}
