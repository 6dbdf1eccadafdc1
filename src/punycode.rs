//! The Punycode codec defined in [RFC 3492].
//!
//! Punycode works on Unicode code points, so [`encode`] and [`decode`]
//! take and return slices and vectors of `char`. [`encode_str`] and
//! [`decode_to_string`] are convenience wrappers for `str` and `String`.
//!
//! The codec is pure and stateless: encoding then decoding any sequence
//! accepted by the encoder yields the original sequence exactly. The ACE
//! prefix `xn--` is *not* handled here; see [`lookup`](crate::lookup) for
//! whole-label processing.
//!
//! [RFC 3492]: https://datatracker.ietf.org/doc/html/rfc3492/

use core::fmt;

// Bootstring parameters for the DNS profile (RFC 3492, Section 5).
const BASE: u32 = 36;
const T_MIN: u32 = 1;
const T_MAX: u32 = 26;
const SKEW: u32 = 38;
const DAMP: u32 = 700;
const INITIAL_BIAS: u32 = 72;
const INITIAL_N: u32 = 0x80;
const DELIMITER: char = '-';

/// An error occurred when encoding or decoding Punycode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// Malformed input: a character outside the digit alphabet, a truncated
    /// digit sequence, or a decoded codepoint outside the Unicode range.
    BadInput,
    /// The delta arithmetic exceeded the representable integer range.
    Overflow,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::BadInput => "invalid Punycode input",
            Self::Overflow => "Punycode conversion would overflow",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for CodecError {}

/// Bias adaptation (RFC 3492, Section 6.1).
#[inline]
fn adapt(mut delta: u32, num_points: u32, first_time: bool) -> u32 {
    delta /= if first_time { DAMP } else { 2 };
    delta += delta / num_points;
    let mut k = 0;
    while delta > ((BASE - T_MIN) * T_MAX) / 2 {
        delta /= BASE - T_MIN;
        k += BASE;
    }
    k + (((BASE - T_MIN + 1) * delta) / (delta + SKEW))
}

#[inline]
fn value_to_digit(value: u32) -> char {
    match value {
        0..=25 => (value as u8 + b'a') as char,
        26..=35 => (value as u8 - 26 + b'0') as char,
        _ => unreachable!(),
    }
}

/// Converts Punycode to Unicode.
///
/// The basic codepoints before the last delimiter are copied verbatim;
/// the remaining digits replay the delta-insertion algorithm.
///
/// # Errors
///
/// Returns [`CodecError::BadInput`] on malformed input and
/// [`CodecError::Overflow`] if the arithmetic would overflow, which cannot
/// happen for inputs within the 63-octet DNS label limit.
pub fn decode(input: &str) -> Result<Vec<char>, CodecError> {
    if !input.is_ascii() {
        return Err(CodecError::BadInput);
    }

    // Basic codepoints are encoded as-is before the last delimiter, if any.
    let (mut output, input) = match input.rfind(DELIMITER) {
        None => (Vec::new(), input),
        Some(position) => (
            input[..position].chars().collect(),
            if position > 0 {
                &input[position + 1..]
            } else {
                input
            },
        ),
    };

    let mut code_point = INITIAL_N;
    let mut bias = INITIAL_BIAS;
    let mut i = 0u32;
    let mut iter = input.bytes();
    loop {
        let previous_i = i;
        let mut weight = 1u32;
        let mut k = BASE;
        let mut byte = match iter.next() {
            None => break,
            Some(byte) => byte,
        };

        // Decode a generalized variable-length integer into delta,
        // which gets added to i.
        loop {
            let digit = match byte {
                byte @ b'0'..=b'9' => byte - b'0' + 26,
                byte @ b'A'..=b'Z' => byte - b'A',
                byte @ b'a'..=b'z' => byte - b'a',
                _ => return Err(CodecError::BadInput),
            } as u32;
            if digit > (u32::MAX - i) / weight {
                return Err(CodecError::Overflow);
            }
            i += digit * weight;
            let t = if k <= bias {
                T_MIN
            } else if k >= bias + T_MAX {
                T_MAX
            } else {
                k - bias
            };
            if digit < t {
                break;
            }
            if weight > u32::MAX / (BASE - t) {
                return Err(CodecError::Overflow);
            }
            weight *= BASE - t;
            k += BASE;
            byte = match iter.next() {
                // End of input in the middle of a delta.
                None => return Err(CodecError::BadInput),
                Some(byte) => byte,
            };
        }

        let length = output.len() as u32;
        bias = adapt(i - previous_i, length + 1, previous_i == 0);
        if i / (length + 1) > u32::MAX - code_point {
            return Err(CodecError::Overflow);
        }
        // i was supposed to wrap around from length+1 to 0,
        // incrementing code_point each time.
        code_point += i / (length + 1);
        i %= length + 1;
        let c = char::from_u32(code_point).ok_or(CodecError::BadInput)?;
        output.insert(i as usize, c);
        i += 1;
    }
    Ok(output)
}

/// Converts Punycode to a Unicode `String`.
///
/// This is a convenience wrapper around [`decode`].
#[inline]
pub fn decode_to_string(input: &str) -> Result<String, CodecError> {
    decode(input).map(|chars| chars.into_iter().collect())
}

/// Converts Unicode to Punycode.
///
/// # Errors
///
/// Returns [`CodecError::Overflow`] if the delta arithmetic would overflow,
/// which cannot happen for inputs within the 63-octet DNS label limit.
pub fn encode(input: &[char]) -> Result<String, CodecError> {
    let mut buf = String::with_capacity(input.len());
    encode_into(input.iter().copied(), &mut buf).map(|()| buf)
}

/// Converts a Unicode `str` to Punycode.
///
/// This is a convenience wrapper around [`encode`].
#[inline]
pub fn encode_str(input: &str) -> Result<String, CodecError> {
    let mut buf = String::with_capacity(input.len());
    encode_into(input.chars(), &mut buf).map(|()| buf)
}

fn encode_into<I>(input: I, output: &mut String) -> Result<(), CodecError>
where
    I: Iterator<Item = char> + Clone,
{
    // Basic codepoints are copied verbatim.
    let (mut input_length, mut basic_length) = (0u32, 0u32);
    for c in input.clone() {
        input_length += 1;
        if c.is_ascii() {
            output.push(c);
            basic_length += 1;
        }
    }
    if basic_length > 0 {
        output.push(DELIMITER);
    }

    let mut code_point = INITIAL_N;
    let mut delta = 0u32;
    let mut bias = INITIAL_BIAS;
    let mut processed = basic_length;
    while processed < input_length {
        // All codepoints below code_point have been handled already;
        // find the next larger one.
        let min_code_point = input
            .clone()
            .map(|c| c as u32)
            .filter(|&c| c >= code_point)
            .min()
            .unwrap();
        if min_code_point - code_point > (u32::MAX - delta) / (processed + 1) {
            return Err(CodecError::Overflow);
        }
        // Increase delta to advance the decoder's <code_point,i> state
        // to <min_code_point,0>.
        delta += (min_code_point - code_point) * (processed + 1);
        code_point = min_code_point;

        for c in input.clone() {
            let c = c as u32;
            if c < code_point {
                delta = delta.checked_add(1).ok_or(CodecError::Overflow)?;
            }
            if c == code_point {
                // Represent delta as a generalized variable-length integer.
                let mut q = delta;
                let mut k = BASE;
                loop {
                    let t = if k <= bias {
                        T_MIN
                    } else if k >= bias + T_MAX {
                        T_MAX
                    } else {
                        k - bias
                    };
                    if q < t {
                        break;
                    }
                    let value = t + ((q - t) % (BASE - t));
                    output.push(value_to_digit(value));
                    q = (q - t) / (BASE - t);
                    k += BASE;
                }
                output.push(value_to_digit(q));
                bias = adapt(delta, processed + 1, processed == basic_length);
                delta = 0;
                processed += 1;
            }
        }
        delta += 1;
        code_point += 1;
    }
    Ok(())
}
