#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![forbid(unsafe_code)]

//! An IDNA2008 library that strictly adheres to IETF [RFC 5890]-[RFC 5894].
//!
//! [RFC 5890]: https://datatracker.ietf.org/doc/html/rfc5890/
//! [RFC 5894]: https://datatracker.ietf.org/doc/html/rfc5894/
//!
//! Internationalized domain names carry non-ASCII labels in an
//! ASCII-Compatible Encoding (ACE): the Punycode form of the label behind
//! the `xn--` prefix. [`lookup`] turns a Unicode domain name into its
//! DNS-ready ASCII form, validating every label against the IDNA2008 rules
//! on the way; [`register`] does the same for a single label pair ahead of
//! registration, optionally proving that the A-label decodes back to the
//! U-label. The raw codec is exposed in [`punycode`].
//!
//! All operations are pure functions over their inputs: the only shared
//! state is the immutable, statically embedded Unicode classification
//! data, so values can be used freely across threads.
//!
//! # Examples
//!
//! ```
//! use idn2::{lookup, Flags};
//!
//! assert_eq!(lookup("müller.example", Flags::empty())?, "xn--mller-kva.example");
//! assert_eq!(lookup("example", Flags::empty())?, "example");
//! # Ok::<_, idn2::Error>(())
//! ```
//!
//! Validation reports the first violated rule:
//!
//! ```
//! use idn2::{lookup, Error, Flags};
//!
//! assert_eq!(lookup("-abc", Flags::empty()), Err(Error::HyphenStartEnd));
//! ```

mod ace;
mod bidi;
mod error;
mod normalize;
pub mod punycode;
mod tables;
mod validate;

pub use error::Error;

use bitflags::bitflags;

bitflags! {
    /// Flags controlling optional pipeline behavior, combinable with `|`.
    pub struct Flags: u32 {
        /// Normalize the input to Unicode Normalization Form C before
        /// validation. Without this flag, input that is not already in
        /// NFC fails with [`Error::NotNfc`]; normalization is never
        /// applied silently.
        const NFC_INPUT = 1;
        /// On registration, decode the resulting A-label and require it
        /// to reproduce the validated U-label exactly.
        const ALABEL_ROUNDTRIP = 2;
    }
}

/// The version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The DNS limit on a full domain name, in octets (RFC 1035).
const MAX_DOMAIN_LEN: usize = 255;

/// Converts a Unicode domain name to its ASCII lookup form.
///
/// The name is processed label by label, left to right: each label is
/// brought to (or checked for) NFC, validated against the IDNA2008 rules
/// and ACE encoded. Labels already carrying the `xn--` prefix pass through
/// unchanged, so the operation is idempotent. Dots are preserved,
/// including a single trailing dot denoting a fully-qualified name.
///
/// # Errors
///
/// Fails atomically on the first invalid label with that label's specific
/// reason; no partial output is produced. The encoded name must fit 255
/// octets ([`Error::TooBigDomain`]) and each label 63 octets.
///
/// # Examples
///
/// ```
/// use idn2::{lookup, Flags};
///
/// assert_eq!(lookup("müller.example", Flags::empty())?, "xn--mller-kva.example");
/// // Already-encoded input is returned unchanged.
/// assert_eq!(lookup("xn--mller-kva.example", Flags::empty())?, "xn--mller-kva.example");
/// # Ok::<_, idn2::Error>(())
/// ```
pub fn lookup(domain: &str, flags: Flags) -> Result<String, Error> {
    let labels: Vec<&str> = domain.split('.').collect();
    let n = labels.len();
    let mut out = String::with_capacity(domain.len());
    for (i, label) in labels.iter().enumerate() {
        if label.is_empty() {
            // Only a single trailing empty label (FQDN dot) is legal.
            if i + 1 == n && i > 0 {
                break;
            }
            return Err(Error::Disallowed);
        }
        if i > 0 {
            out.push('.');
        }
        out.push_str(&lookup_label(label, flags)?);
    }
    if domain.ends_with('.') {
        out.push('.');
    }
    if out.len() > MAX_DOMAIN_LEN {
        return Err(Error::TooBigDomain);
    }
    Ok(out)
}

/// Checks a single label pair for registration and returns the A-label.
///
/// The U-label runs through the same validate-and-encode path as
/// [`lookup`]. A supplied A-label must be ASCII ([`Error::InvalidAlabel`])
/// and must agree with the computed encoding ([`Error::AlabelMismatch`]).
/// With [`Flags::ALABEL_ROUNDTRIP`], the resulting A-label is additionally
/// decoded and compared codepoint for codepoint against the validated
/// U-label, guarding against encoder divergence.
///
/// # Examples
///
/// ```
/// use idn2::{register, Flags};
///
/// let alabel = register("müller", None, Flags::ALABEL_ROUNDTRIP)?;
/// assert_eq!(alabel, "xn--mller-kva");
/// # Ok::<_, idn2::Error>(())
/// ```
pub fn register(ulabel: &str, alabel: Option<&str>, flags: Flags) -> Result<String, Error> {
    let uchars = ulabel_chars(ulabel, flags)?;
    let computed = ace::encode_label(&uchars)?;
    let result = match alabel {
        Some(supplied) => {
            if !supplied.is_ascii() || supplied.len() > ace::MAX_LABEL_LEN {
                return Err(Error::InvalidAlabel);
            }
            // A U-label that needed encoding can only correspond to an
            // ACE-prefixed A-label.
            if ace::has_prefix(&computed) && !ace::has_prefix(supplied) {
                return Err(Error::InvalidAlabel);
            }
            if !supplied.eq_ignore_ascii_case(&computed) {
                return Err(Error::AlabelMismatch);
            }
            supplied.to_owned()
        }
        None => computed,
    };
    if flags.contains(Flags::ALABEL_ROUNDTRIP) && ace::decode_label(&result)? != uchars {
        return Err(Error::AlabelMismatch);
    }
    Ok(result)
}

/// Converts an ASCII domain name back to its Unicode form.
///
/// Each label carrying the ACE prefix is Punycode decoded; other labels
/// pass through unchanged. No validity checking is applied to the decoded
/// labels.
///
/// # Examples
///
/// ```
/// assert_eq!(idn2::to_unicode("xn--mller-kva.example")?, "müller.example");
/// # Ok::<_, idn2::Error>(())
/// ```
pub fn to_unicode(domain: &str) -> Result<String, Error> {
    let mut out = String::with_capacity(domain.len());
    for (i, label) in domain.split('.').enumerate() {
        if i > 0 {
            out.push('.');
        }
        if label.is_ascii() && ace::has_prefix(label) {
            let decoded = ace::decode_label(label)?;
            out.extend(decoded);
        } else {
            out.push_str(label);
        }
    }
    Ok(out)
}

/// Brings a label to NFC (or verifies it) and validates it.
fn ulabel_chars(label: &str, flags: Flags) -> Result<Vec<char>, Error> {
    let owned;
    let label = if flags.contains(Flags::NFC_INPUT) {
        owned = normalize::nfc(label);
        &*owned
    } else {
        if !normalize::is_nfc(label) {
            return Err(Error::NotNfc);
        }
        label
    };
    let chars: Vec<char> = label.chars().collect();
    validate::check_label(&chars)?;
    Ok(chars)
}

fn lookup_label(label: &str, flags: Flags) -> Result<String, Error> {
    if label.is_ascii() {
        if label.len() > ace::MAX_LABEL_LEN {
            return Err(Error::TooBigLabel);
        }
        // An A-label is taken at face value; decoding and re-validating
        // it is the registration pipeline's business.
        if ace::has_prefix(label) {
            return Ok(label.to_owned());
        }
    }
    let chars = ulabel_chars(label, flags)?;
    ace::encode_label(&chars)
}

/// Checks this crate's version against a requested minimum.
///
/// Returns the running version string if it is at least `requested`
/// (dotted decimal; an empty request always matches), or `None` if the
/// requirement is not met or not parseable.
///
/// # Examples
///
/// ```
/// assert_eq!(idn2::check_version(""), Some(idn2::VERSION));
/// assert_eq!(idn2::check_version("999.0"), None);
/// ```
pub fn check_version(requested: &str) -> Option<&'static str> {
    if requested.is_empty() {
        return Some(VERSION);
    }
    let requested = parse_version(requested)?;
    let current = parse_version(VERSION)?;
    let len = requested.len().max(current.len());
    for i in 0..len {
        let r = requested.get(i).copied().unwrap_or(0);
        let c = current.get(i).copied().unwrap_or(0);
        if c != r {
            return if c > r { Some(VERSION) } else { None };
        }
    }
    Some(VERSION)
}

fn parse_version(s: &str) -> Option<Vec<u32>> {
    s.split('.').map(|part| part.parse().ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_compare() {
        assert_eq!(check_version(""), Some(VERSION));
        assert_eq!(check_version(VERSION), Some(VERSION));
        assert_eq!(check_version("0.0.1"), Some(VERSION));
        assert_eq!(check_version("0.1"), Some(VERSION));
        assert_eq!(check_version("999.999.999"), None);
        assert_eq!(check_version("not-a-version"), None);
    }
}
