use idn2::{register, Error, Flags};

#[test]
fn computes_alabel() {
    assert_eq!(
        register("müller", None, Flags::empty()).unwrap(),
        "xn--mller-kva"
    );
    assert_eq!(register("example", None, Flags::empty()).unwrap(), "example");
}

#[test]
fn accepts_matching_alabel() {
    assert_eq!(
        register("müller", Some("xn--mller-kva"), Flags::empty()).unwrap(),
        "xn--mller-kva"
    );
    // The supplied spelling is preserved.
    assert_eq!(
        register("müller", Some("XN--MLLER-KVA"), Flags::empty()).unwrap(),
        "XN--MLLER-KVA"
    );
}

#[test]
fn roundtrip_check_passes_for_consistent_pair() {
    assert_eq!(
        register("müller", Some("xn--mller-kva"), Flags::ALABEL_ROUNDTRIP).unwrap(),
        "xn--mller-kva"
    );
    assert_eq!(
        register("example", Some("example"), Flags::ALABEL_ROUNDTRIP).unwrap(),
        "example"
    );
}

#[test]
fn rejects_inconsistent_pair() {
    assert_eq!(
        register("müller", Some("xn--bcher-kva"), Flags::ALABEL_ROUNDTRIP),
        Err(Error::AlabelMismatch)
    );
    // Divergence is caught even without the roundtrip flag.
    assert_eq!(
        register("müller", Some("xn--bcher-kva"), Flags::empty()),
        Err(Error::AlabelMismatch)
    );
}

#[test]
fn rejects_non_ascii_alabel() {
    assert_eq!(
        register("müller", Some("müller"), Flags::empty()),
        Err(Error::InvalidAlabel)
    );
}

#[test]
fn rejects_alabel_without_prefix() {
    // The bare Punycode of "müller" is not an A-label.
    assert_eq!(
        register("müller", Some("mller-kva"), Flags::empty()),
        Err(Error::InvalidAlabel)
    );
}

#[test]
fn validates_the_ulabel() {
    assert_eq!(
        register("-abc", None, Flags::empty()),
        Err(Error::HyphenStartEnd)
    );
    assert_eq!(
        register("ab\u{05D0}", None, Flags::empty()),
        Err(Error::Bidi)
    );
    // An already-encoded name is not a U-label.
    assert_eq!(
        register("xn--mller-kva", None, Flags::empty()),
        Err(Error::TwoHyphen)
    );
}

#[test]
fn normalizes_on_request() {
    assert_eq!(
        register("mu\u{0308}ller", None, Flags::empty()),
        Err(Error::NotNfc)
    );
    assert_eq!(
        register(
            "mu\u{0308}ller",
            Some("xn--mller-kva"),
            Flags::NFC_INPUT | Flags::ALABEL_ROUNDTRIP
        )
        .unwrap(),
        "xn--mller-kva"
    );
}
