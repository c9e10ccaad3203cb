use crate::error::ErrorCode;

/// Failure of the Context Processing algorithm (`spec.md` §4.1, §7).
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
	#[error("cannot nullify a context with protected terms")]
	InvalidContextNullification,

	#[error("failed to load remote context {0}: {1}")]
	LoadingRemoteContextFailed(String, String),

	#[error("context {0} was already being processed (cyclic @import/remote inclusion)")]
	RecursiveContextInclusion(String),

	#[error("remote context at {0} is not a JSON object")]
	InvalidRemoteContext(String),

	#[error("context inclusion depth exceeded {0}")]
	ContextOverflow(usize),

	#[error("invalid context entry `{0}`")]
	InvalidContextEntry(String),

	#[error("invalid base IRI `{0}`")]
	InvalidBaseIri(String),

	#[error("invalid @vocab mapping: {0}")]
	InvalidVocabMapping(String),

	#[error("invalid default @language: {0}")]
	InvalidDefaultLanguage(String),

	#[error("invalid default @direction: {0}")]
	InvalidBaseDirection(String),

	#[error("invalid @version value: {0}")]
	InvalidVersionValue(String),

	#[error("invalid @import value: {0}")]
	InvalidImportValue(String),

	#[error("invalid term definition for `{0}`: {1}")]
	InvalidTermDefinition(String, String),

	#[error("cyclic IRI mapping for term `{0}`")]
	CyclicIriMapping(String),

	#[error("keyword `{0}` cannot be redefined")]
	KeywordRedefinition(String),

	#[error("invalid IRI mapping for term `{0}`: {1}")]
	InvalidIriMapping(String, String),

	#[error("invalid reverse property `{0}`")]
	InvalidReverseProperty(String),

	#[error("invalid @reverse value for term `{0}`")]
	InvalidReversePropertyMap(String),

	#[error("invalid reverse property value for term `{0}`")]
	InvalidReversePropertyValue(String),

	#[error("invalid @type mapping for term `{0}`: {1}")]
	InvalidTypeMapping(String, String),

	#[error("invalid @container mapping for term `{0}`: {1}")]
	InvalidContainerMapping(String, String),

	#[error("invalid @language mapping for term `{0}`")]
	InvalidLanguageMapping(String),

	#[error("invalid @nest value for term `{0}`")]
	InvalidNestValue(String),

	#[error("invalid @prefix value for term `{0}`")]
	InvalidPrefixValue(String),

	#[error("term `{0}` is protected and cannot be redefined")]
	ProtectedTermRedefinition(String),

	#[error("invalid scoped context for term `{0}`: {1}")]
	InvalidScopedContext(String, String),

	#[error("invalid @propagate value")]
	InvalidPropagateValue,
}

impl Error {
	pub fn code(&self) -> ErrorCode {
		use Error::*;
		match self {
			InvalidContextNullification => ErrorCode::InvalidContextNullification,
			LoadingRemoteContextFailed(..) => ErrorCode::LoadingRemoteContextFailed,
			RecursiveContextInclusion(..) => ErrorCode::RecursiveContextInclusion,
			InvalidRemoteContext(..) => ErrorCode::InvalidRemoteContext,
			ContextOverflow(..) => ErrorCode::ContextOverflow,
			InvalidContextEntry(..) => ErrorCode::InvalidContextEntry,
			InvalidBaseIri(..) => ErrorCode::InvalidBaseIri,
			InvalidVocabMapping(..) => ErrorCode::InvalidVocabMapping,
			InvalidDefaultLanguage(..) => ErrorCode::InvalidDefaultLanguage,
			InvalidBaseDirection(..) => ErrorCode::InvalidBaseDirection,
			InvalidVersionValue(..) => ErrorCode::InvalidVersionValue,
			InvalidImportValue(..) => ErrorCode::InvalidImportValue,
			InvalidTermDefinition(..) => ErrorCode::InvalidTermDefinition,
			CyclicIriMapping(..) => ErrorCode::CyclicIriMapping,
			KeywordRedefinition(..) => ErrorCode::KeywordRedefinition,
			InvalidIriMapping(..) => ErrorCode::InvalidIriMapping,
			InvalidReverseProperty(..) => ErrorCode::InvalidReverseProperty,
			InvalidReversePropertyMap(..) => ErrorCode::InvalidReversePropertyMap,
			InvalidReversePropertyValue(..) => ErrorCode::InvalidReversePropertyValue,
			InvalidTypeMapping(..) => ErrorCode::InvalidTypeMapping,
			InvalidContainerMapping(..) => ErrorCode::InvalidContainerMapping,
			InvalidLanguageMapping(..) => ErrorCode::InvalidLanguageMapping,
			InvalidNestValue(..) => ErrorCode::InvalidNestValue,
			InvalidPrefixValue(..) => ErrorCode::InvalidPrefixValue,
			ProtectedTermRedefinition(..) => ErrorCode::ProtectedTermRedefinition,
			InvalidScopedContext(..) => ErrorCode::InvalidScopedContext,
			InvalidPropagateValue => ErrorCode::InvalidPropagateValue,
		}
	}
}
