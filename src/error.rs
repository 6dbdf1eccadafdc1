use crate::punycode::CodecError;
use core::fmt;

/// An error occurred when processing a domain name or label.
///
/// Every variant carries a stable negative code, retrievable with
/// [`Error::code`]. Success has no code here; it is simply the `Ok` arm of
/// the `Result` returned by each operation. The codes are partitioned into
/// ranges by subsystem and are append-only: a value is never reused for a
/// different meaning.
///
/// - `-1`: generic internal error.
/// - `-100..`: resource and locale-transcoding errors. These are reserved
///   for locale-encoded front ends layered on top of this crate; the core
///   pipelines never return them.
/// - `-200..`: Unicode, Punycode and structural errors.
/// - `-300..`: label-validity rule violations, one code per rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
#[repr(i32)]
pub enum Error {
    /// Internal error in the library.
    Internal = -1,
    /// Memory allocation failure.
    ///
    /// Reserved for locale-encoded front ends; never returned by the core.
    MemoryAllocation = -100,
    /// The locale string encoding could not be determined.
    ///
    /// Reserved for locale-encoded front ends; never returned by the core.
    CodesetDetection = -101,
    /// A locale string could not be transcoded to UTF-8.
    ///
    /// Reserved for locale-encoded front ends; never returned by the core.
    Transcoding = -102,
    /// Unicode data encoding error.
    EncodingError = -200,
    /// Error normalizing string.
    ///
    /// Indicates incomplete Unicode normalization data, not bad input.
    Normalization = -201,
    /// Punycode input is malformed.
    PunycodeBadInput = -202,
    /// Punycode output does not fit within the label capacity.
    PunycodeBigOutput = -203,
    /// Punycode delta arithmetic would overflow.
    PunycodeOverflow = -204,
    /// The domain name exceeds 255 octets in its ASCII form.
    TooBigDomain = -205,
    /// A label exceeds 63 octets in its ASCII form.
    TooBigLabel = -206,
    /// A supplied A-label is not valid ASCII-compatible encoding.
    InvalidAlabel = -207,
    /// The A-label does not decode back to the validated U-label.
    AlabelMismatch = -208,
    /// The string is not in Unicode Normalization Form C.
    NotNfc = -300,
    /// The label has hyphens in both the third and fourth position.
    TwoHyphen = -301,
    /// The label starts or ends with a hyphen.
    HyphenStartEnd = -302,
    /// The label starts with a combining mark.
    LeadingCombining = -303,
    /// The label contains a disallowed character.
    Disallowed = -304,
    /// A CONTEXTJ character's context rule is not satisfied.
    ContextJ = -305,
    /// The label contains a CONTEXTJ character with no registered rule.
    ContextJNoRule = -306,
    /// A CONTEXTO character's context rule is not satisfied.
    ContextO = -307,
    /// The label contains a CONTEXTO character with no registered rule.
    ContextONoRule = -308,
    /// The label contains an unassigned codepoint.
    Unassigned = -309,
    /// The label violates the Bidi rule.
    Bidi = -310,
}

impl Error {
    /// Returns the stable numeric code of this error.
    ///
    /// All codes are negative; zero is reserved for success and positive
    /// values for future non-error returns.
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Returns the error corresponding to a numeric code, if any.
    pub fn from_code(code: i32) -> Option<Error> {
        use Error::*;
        Some(match code {
            -1 => Internal,
            -100 => MemoryAllocation,
            -101 => CodesetDetection,
            -102 => Transcoding,
            -200 => EncodingError,
            -201 => Normalization,
            -202 => PunycodeBadInput,
            -203 => PunycodeBigOutput,
            -204 => PunycodeOverflow,
            -205 => TooBigDomain,
            -206 => TooBigLabel,
            -207 => InvalidAlabel,
            -208 => AlabelMismatch,
            -300 => NotNfc,
            -301 => TwoHyphen,
            -302 => HyphenStartEnd,
            -303 => LeadingCombining,
            -304 => Disallowed,
            -305 => ContextJ,
            -306 => ContextJNoRule,
            -307 => ContextO,
            -308 => ContextONoRule,
            -309 => Unassigned,
            -310 => Bidi,
            _ => return None,
        })
    }

    /// Returns the stable symbolic name of this error.
    pub fn symbol(self) -> &'static str {
        use Error::*;
        match self {
            Internal => "INTERNAL_ERROR",
            MemoryAllocation => "MALLOC",
            CodesetDetection => "NO_CODESET",
            Transcoding => "ICONV_FAIL",
            EncodingError => "ENCODING_ERROR",
            Normalization => "NFC",
            PunycodeBadInput => "PUNYCODE_BAD_INPUT",
            PunycodeBigOutput => "PUNYCODE_BIG_OUTPUT",
            PunycodeOverflow => "PUNYCODE_OVERFLOW",
            TooBigDomain => "TOO_BIG_DOMAIN",
            TooBigLabel => "TOO_BIG_LABEL",
            InvalidAlabel => "INVALID_ALABEL",
            AlabelMismatch => "ALABEL_MISMATCH",
            NotNfc => "NOT_NFC",
            TwoHyphen => "2HYPHEN",
            HyphenStartEnd => "HYPHEN_STARTEND",
            LeadingCombining => "LEADING_COMBINING",
            Disallowed => "DISALLOWED",
            ContextJ => "CONTEXTJ",
            ContextJNoRule => "CONTEXTJ_NO_RULE",
            ContextO => "CONTEXTO",
            ContextONoRule => "CONTEXTO_NO_RULE",
            Unassigned => "UNASSIGNED",
            Bidi => "BIDI",
        }
    }

    /// Returns a human-readable description of this error.
    pub fn message(self) -> &'static str {
        use Error::*;
        match self {
            Internal => "internal error in the library",
            MemoryAllocation => "memory allocation error",
            CodesetDetection => "could not determine locale string encoding",
            Transcoding => "could not transcode locale string to UTF-8",
            EncodingError => "Unicode data encoding error",
            Normalization => "error normalizing string",
            PunycodeBadInput => "Punycode invalid input",
            PunycodeBigOutput => "Punycode output exceeds the label capacity",
            PunycodeOverflow => "Punycode conversion would overflow",
            TooBigDomain => "domain name is longer than 255 octets",
            TooBigLabel => "label is longer than 63 octets",
            InvalidAlabel => "supplied A-label is not valid",
            AlabelMismatch => "A-label does not decode to the given U-label",
            NotNfc => "string is not in Unicode Normalization Form C",
            TwoHyphen => "string has forbidden two hyphens",
            HyphenStartEnd => "string has forbidden starting or ending hyphen",
            LeadingCombining => "string starts with a combining character",
            Disallowed => "string has a disallowed character",
            ContextJ => "string has a forbidden context-j character",
            ContextJNoRule => "string has a context-j character with no rule",
            ContextO => "string has a forbidden context-o character",
            ContextONoRule => "string has a context-o character with no rule",
            Unassigned => "string has a forbidden unassigned character",
            Bidi => "string has forbidden bi-directional properties",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Error {}

impl From<CodecError> for Error {
    fn from(e: CodecError) -> Error {
        match e {
            CodecError::BadInput => Error::PunycodeBadInput,
            CodecError::Overflow => Error::PunycodeOverflow,
        }
    }
}
