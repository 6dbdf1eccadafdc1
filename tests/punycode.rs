use idn2::punycode::{decode, decode_to_string, encode, encode_str, CodecError};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn encode_basic_only() {
    // All-ASCII input is copied verbatim with a trailing delimiter.
    assert_eq!(encode_str("example").unwrap(), "example-");
}

#[test]
fn encode_known_labels() {
    assert_eq!(encode_str("müller").unwrap(), "mller-kva");
    assert_eq!(encode_str("bücher").unwrap(), "bcher-kva");
    assert_eq!(encode_str("münchen").unwrap(), "mnchen-3ya");
}

#[test]
fn decode_known_labels() {
    assert_eq!(decode_to_string("mller-kva").unwrap(), "müller");
    assert_eq!(decode_to_string("bcher-kva").unwrap(), "bücher");
    assert_eq!(decode_to_string("mnchen-3ya").unwrap(), "münchen");
}

#[test]
fn rfc3492_sample_strings() {
    // RFC 3492, Section 7.1 (A): Arabic (Egyptian).
    let arabic: Vec<char> = [
        0x0644, 0x064A, 0x0647, 0x0645, 0x0627, 0x0628, 0x062A, 0x0643, 0x0644, 0x0645, 0x0648,
        0x0634, 0x0639, 0x0631, 0x0628, 0x064A, 0x061F,
    ]
    .iter()
    .map(|&cp| char::from_u32(cp).unwrap())
    .collect();
    assert_eq!(encode(&arabic).unwrap(), "egbpdaj6bu4bxfgehfvwxn");
    assert_eq!(decode("egbpdaj6bu4bxfgehfvwxn").unwrap(), arabic);

    // RFC 3492, Section 7.1 (B): Chinese (simplified).
    let chinese = chars("他们为什么不说中文");
    assert_eq!(encode(&chinese).unwrap(), "ihqwcrb4cv8a8dqg056pqjye");
    assert_eq!(decode("ihqwcrb4cv8a8dqg056pqjye").unwrap(), chinese);
}

#[test]
fn round_trip() {
    for s in [
        "müller",
        "bücher",
        "ábc",
        "ñandú",
        "παράδειγμα",
        "пример",
        "משפחה",
        "مثال",
        "例え",
        "한국",
        "mixed-ascii-ü",
    ] {
        let encoded = encode_str(s).unwrap();
        assert_eq!(decode(&encoded).unwrap(), chars(s), "{s}");
    }
}

#[test]
fn decode_rejects_bad_digits() {
    assert_eq!(decode("abc@"), Err(CodecError::BadInput));
    assert_eq!(decode("ü"), Err(CodecError::BadInput));
    // Delta truncated mid-sequence.
    assert_eq!(decode("mller-kv"), Err(CodecError::BadInput));
}

#[test]
fn decode_rejects_overflow() {
    assert_eq!(decode("99999999999999999999"), Err(CodecError::Overflow));
}

#[test]
fn encode_rejects_overflow() {
    // 65534 basic codepoints put the delta for the one extended
    // codepoint exactly at u32::MAX; the per-char increments that
    // follow must report overflow instead of wrapping or panicking.
    let mut input = vec!['a'; 65534];
    input.push('\u{10081}');
    assert_eq!(encode(&input), Err(CodecError::Overflow));
}

#[test]
fn empty_input() {
    assert_eq!(encode(&[]).unwrap(), "");
    assert_eq!(decode("").unwrap(), Vec::<char>::new());
}
