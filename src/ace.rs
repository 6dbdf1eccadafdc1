//! ASCII-Compatible Encoding framing.
//!
//! An A-label is the ACE prefix `xn--` followed by the Punycode encoding
//! of a U-label; a label that is ASCII throughout needs no encoding and
//! passes through unchanged.

use crate::error::Error;
use crate::punycode;

/// The ACE prefix (RFC 5890, Section 2.3.2.5).
pub(crate) const PREFIX: &str = "xn--";

/// The DNS limit on label length, in octets (RFC 1035).
pub(crate) const MAX_LABEL_LEN: usize = 63;

/// Returns whether a label carries the ACE prefix, case-insensitively.
#[inline]
pub(crate) fn has_prefix(label: &str) -> bool {
    label.len() >= PREFIX.len()
        && label.as_bytes()[..PREFIX.len()].eq_ignore_ascii_case(PREFIX.as_bytes())
}

/// Produces the ASCII form of a validated label.
///
/// ASCII-only labels pass through verbatim; anything else is Punycode
/// encoded behind the ACE prefix. The result is rejected if it does not
/// fit the 63-octet label capacity.
pub(crate) fn encode_label(label: &[char]) -> Result<String, Error> {
    if label.iter().all(char::is_ascii) {
        return Ok(label.iter().collect());
    }
    let encoded = punycode::encode(label).map_err(Error::from)?;
    if PREFIX.len() + encoded.len() > MAX_LABEL_LEN {
        return Err(Error::PunycodeBigOutput);
    }
    let mut out = String::with_capacity(PREFIX.len() + encoded.len());
    out.push_str(PREFIX);
    out.push_str(&encoded);
    Ok(out)
}

/// Recovers the codepoint sequence of an ASCII label.
///
/// A label carrying the ACE prefix is stripped and Punycode decoded;
/// a label without it is returned unchanged. Non-ASCII input fails with
/// [`Error::InvalidAlabel`].
pub(crate) fn decode_label(label: &str) -> Result<Vec<char>, Error> {
    if !label.is_ascii() {
        return Err(Error::InvalidAlabel);
    }
    if has_prefix(label) {
        punycode::decode(&label[PREFIX.len()..]).map_err(Error::from)
    } else {
        Ok(label.chars().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn ascii_passthrough() {
        assert_eq!(encode_label(&chars("example")).unwrap(), "example");
        assert_eq!(decode_label("example").unwrap(), chars("example"));
    }

    #[test]
    fn prefixed() {
        assert_eq!(encode_label(&chars("müller")).unwrap(), "xn--mller-kva");
        assert_eq!(decode_label("xn--mller-kva").unwrap(), chars("müller"));
        // The case of basic codepoints is preserved; the delta digits
        // decode to the same insertion regardless of their case.
        assert_eq!(decode_label("XN--MLLER-KVA").unwrap(), chars("MüLLER"));
    }

    #[test]
    fn capacity() {
        // 60 'a's and one 'ü' cannot fit behind the prefix.
        let mut label = chars(&"a".repeat(60));
        label.push('ü');
        assert_eq!(encode_label(&label), Err(Error::PunycodeBigOutput));
    }

    #[test]
    fn non_ascii_rejected() {
        assert_eq!(decode_label("müller"), Err(Error::InvalidAlabel));
    }
}
