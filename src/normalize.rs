//! Unicode Normalization Form C handling.
//!
//! IDNA2008 requires labels to be in NFC before validation. Normalization
//! is applied only when the caller explicitly requests it with
//! [`Flags::NFC_INPUT`](crate::Flags::NFC_INPUT); otherwise the input is
//! merely checked and rejected if it differs from its NFC form.

use unicode_normalization::UnicodeNormalization;

/// Brings a string to Normalization Form C.
pub(crate) fn nfc(s: &str) -> String {
    s.nfc().collect()
}

/// Returns whether a string is already in Normalization Form C.
#[inline]
pub(crate) fn is_nfc(s: &str) -> bool {
    unicode_normalization::is_nfc(s)
}

#[cfg(test)]
mod tests {
    use super::{is_nfc, nfc};

    #[test]
    fn composes() {
        // LATIN SMALL LETTER U + COMBINING DIAERESIS
        assert_eq!(nfc("mu\u{0308}ller"), "müller");
        assert!(!is_nfc("mu\u{0308}ller"));
        assert!(is_nfc("müller"));
        assert!(is_nfc("example"));
    }
}
