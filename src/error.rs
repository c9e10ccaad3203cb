//! Top-level error type.
//!
//! Every algorithm in this crate returns its own narrow error enum
//! (`context_processing::Error`, `expansion::Error`, `compaction::Error`,
//! `flattening::Error`, `framing::Error`, `rdf::Error`); [`Error`] unions
//! them for callers that just want "what went wrong" from the
//! [`crate::processor::JsonLdProcessor`] façade, the way the teacher's
//! `thiserror`-based error enums compose across its `crates/*` split.

use std::fmt;

/// A JSON-pointer-shaped path to the value an error occurred at,
/// e.g. `/@graph/0/name`.
///
/// Built up as errors unwind out of recursive expansion/compaction/
/// framing calls, per `spec.md` §7's "preserving the input path (JSON
/// pointer style)".
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct ErrorPath(Vec<String>);

impl ErrorPath {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns a copy of this path with `segment` prepended, for use while
	/// unwinding out of a recursive call.
	#[must_use]
	pub fn prepend(&self, segment: impl Into<String>) -> Self {
		let mut path = self.0.clone();
		path.insert(0, segment.into());
		Self(path)
	}
}

impl fmt::Display for ErrorPath {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if self.0.is_empty() {
			return f.write_str("/");
		}
		for segment in &self.0 {
			write!(f, "/{segment}")?;
		}
		Ok(())
	}
}

/// The registry of error kinds from the JSON-LD 1.1 API specification
/// (`spec.md` §7), flattened into one enum so the façade can match on
/// `error.code()` the way the content-negotiation/diagnostic layer of a
/// host application would.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[non_exhaustive]
pub enum ErrorCode {
	LoadingDocumentFailed,
	LoadingRemoteContextFailed,
	RecursiveContextInclusion,
	InvalidRemoteContext,
	ContextOverflow,
	InvalidContextEntry,
	InvalidContextNullification,
	InvalidBaseIri,
	InvalidVocabMapping,
	InvalidDefaultLanguage,
	InvalidBaseDirection,
	InvalidVersionValue,
	InvalidImportValue,
	InvalidTermDefinition,
	CyclicIriMapping,
	KeywordRedefinition,
	InvalidIriMapping,
	InvalidReverseProperty,
	InvalidReversePropertyMap,
	InvalidReversePropertyValue,
	InvalidTypeMapping,
	InvalidContainerMapping,
	InvalidLanguageMapping,
	InvalidNestValue,
	InvalidPrefixValue,
	ProtectedTermRedefinition,
	InvalidScopedContext,
	InvalidPropagateValue,
	InvalidIdValue,
	InvalidTypeValue,
	InvalidIndexValue,
	InvalidLanguageTaggedString,
	InvalidLanguageTaggedValue,
	InvalidLanguageMapValue,
	InvalidTypedValue,
	InvalidValueObject,
	InvalidValueObjectValue,
	InvalidSetOrListObject,
	InvalidIncludedValue,
	ListOfLists,
	CollidingKeywords,
	CompactionToListOfLists,
	ConflictingIndexes,
	InvalidFrame,
	InvalidEmbedValue,
	InvalidRdfDirection,
}

impl ErrorCode {
	pub fn as_str(self) -> &'static str {
		use ErrorCode::*;
		match self {
			LoadingDocumentFailed => "loading document failed",
			LoadingRemoteContextFailed => "loading remote context failed",
			RecursiveContextInclusion => "recursive context inclusion",
			InvalidRemoteContext => "invalid remote context",
			ContextOverflow => "context overflow",
			InvalidContextEntry => "invalid context entry",
			InvalidContextNullification => "invalid context nullification",
			InvalidBaseIri => "invalid base IRI",
			InvalidVocabMapping => "invalid vocab mapping",
			InvalidDefaultLanguage => "invalid default language",
			InvalidBaseDirection => "invalid base direction",
			InvalidVersionValue => "invalid version value",
			InvalidImportValue => "invalid @import value",
			InvalidTermDefinition => "invalid term definition",
			CyclicIriMapping => "cyclic IRI mapping",
			KeywordRedefinition => "keyword redefinition",
			InvalidIriMapping => "invalid IRI mapping",
			InvalidReverseProperty => "invalid reverse property",
			InvalidReversePropertyMap => "invalid reverse property map",
			InvalidReversePropertyValue => "invalid reverse property value",
			InvalidTypeMapping => "invalid type mapping",
			InvalidContainerMapping => "invalid container mapping",
			InvalidLanguageMapping => "invalid language mapping",
			InvalidNestValue => "invalid @nest value",
			InvalidPrefixValue => "invalid @prefix value",
			ProtectedTermRedefinition => "protected term redefinition",
			InvalidScopedContext => "invalid scoped context",
			InvalidPropagateValue => "invalid @propagate value",
			InvalidIdValue => "invalid @id value",
			InvalidTypeValue => "invalid @type value",
			InvalidIndexValue => "invalid @index value",
			InvalidLanguageTaggedString => "invalid language-tagged string",
			InvalidLanguageTaggedValue => "invalid language-tagged value",
			InvalidLanguageMapValue => "invalid language map value",
			InvalidTypedValue => "invalid typed value",
			InvalidValueObject => "invalid value object",
			InvalidValueObjectValue => "invalid value object value",
			InvalidSetOrListObject => "invalid set or list object",
			InvalidIncludedValue => "invalid @included value",
			ListOfLists => "list of lists",
			CollidingKeywords => "colliding keywords",
			CompactionToListOfLists => "compaction to list of lists",
			ConflictingIndexes => "conflicting indexes",
			InvalidFrame => "invalid frame",
			InvalidEmbedValue => "invalid @embed value",
			InvalidRdfDirection => "invalid rdfDirection value",
		}
	}
}

impl fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Top-level error, unioning every component error together with the path
/// at which it occurred.
#[derive(Debug, thiserror::Error)]
#[error("{code} at {path}: {message}")]
pub struct Error {
	pub code: ErrorCode,
	pub path: ErrorPath,
	pub message: String,
}

impl Error {
	pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
		Self {
			code,
			path: ErrorPath::new(),
			message: message.into(),
		}
	}

	#[must_use]
	pub fn at(mut self, segment: impl Into<String>) -> Self {
		self.path = self.path.prepend(segment);
		self
	}

	pub fn code(&self) -> ErrorCode {
		self.code
	}
}

impl From<crate::context_processing::Error> for Error {
	fn from(e: crate::context_processing::Error) -> Self {
		Self::new(e.code(), e.to_string())
	}
}

impl From<crate::expansion::Error> for Error {
	fn from(e: crate::expansion::Error) -> Self {
		Self::new(e.code(), e.to_string())
	}
}

impl From<crate::compaction::Error> for Error {
	fn from(e: crate::compaction::Error) -> Self {
		Self::new(e.code(), e.to_string())
	}
}

impl From<crate::flattening::Error> for Error {
	fn from(e: crate::flattening::Error) -> Self {
		Self::new(e.code(), e.to_string())
	}
}

impl From<crate::framing::Error> for Error {
	fn from(e: crate::framing::Error) -> Self {
		Self::new(e.code(), e.to_string())
	}
}

impl From<crate::rdf::Error> for Error {
	fn from(e: crate::rdf::Error) -> Self {
		Self::new(e.code(), e.to_string())
	}
}

impl From<crate::loader::LoadError> for Error {
	fn from(e: crate::loader::LoadError) -> Self {
		Self::new(ErrorCode::LoadingDocumentFailed, e.to_string())
	}
}
