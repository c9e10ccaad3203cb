use crate::error::ErrorCode;

/// Failure of the Expansion Algorithm (`spec.md` §4.2, §7).
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	ContextProcessing(#[from] crate::context_processing::Error),

	#[error("loading document failed: {0}")]
	LoadingDocumentFailed(String),

	#[error("invalid @id value: {0}")]
	InvalidIdValue(String),

	#[error("invalid @type value: {0}")]
	InvalidTypeValue(String),

	#[error("invalid @index value: {0}")]
	InvalidIndexValue(String),

	#[error("invalid @reverse property map")]
	InvalidReversePropertyMap,

	#[error("invalid reverse property value for `{0}`")]
	InvalidReversePropertyValue(String),

	#[error("invalid language-tagged string")]
	InvalidLanguageTaggedString,

	#[error("invalid language-tagged value")]
	InvalidLanguageTaggedValue,

	#[error("invalid language map value")]
	InvalidLanguageMapValue,

	#[error("invalid typed value")]
	InvalidTypedValue,

	#[error("invalid value object")]
	InvalidValueObject,

	#[error("invalid value object value: {0}")]
	InvalidValueObjectValue(String),

	#[error("invalid @set or @list object")]
	InvalidSetOrListObject,

	#[error("invalid @included value")]
	InvalidIncludedValue,

	#[error("list of lists")]
	ListOfLists,

	#[error("colliding keywords at `{0}`")]
	CollidingKeywords(String),

	#[error("invalid nest value for `{0}`")]
	InvalidNestValue(String),

	#[error("multiple conflicting indexes for id `{0}`")]
	ConflictingIndexes(String),

	#[error("cyclic IRI mapping")]
	CyclicIriMapping,
}

impl Error {
	pub fn code(&self) -> ErrorCode {
		match self {
			Self::ContextProcessing(e) => e.code(),
			Self::LoadingDocumentFailed(_) => ErrorCode::LoadingDocumentFailed,
			Self::InvalidIdValue(_) => ErrorCode::InvalidIdValue,
			Self::InvalidTypeValue(_) => ErrorCode::InvalidTypeValue,
			Self::InvalidIndexValue(_) => ErrorCode::InvalidIndexValue,
			Self::InvalidReversePropertyMap => ErrorCode::InvalidReversePropertyMap,
			Self::InvalidReversePropertyValue(_) => ErrorCode::InvalidReversePropertyValue,
			Self::InvalidLanguageTaggedString => ErrorCode::InvalidLanguageTaggedString,
			Self::InvalidLanguageTaggedValue => ErrorCode::InvalidLanguageTaggedValue,
			Self::InvalidLanguageMapValue => ErrorCode::InvalidLanguageMapValue,
			Self::InvalidTypedValue => ErrorCode::InvalidTypedValue,
			Self::InvalidValueObject => ErrorCode::InvalidValueObject,
			Self::InvalidValueObjectValue(_) => ErrorCode::InvalidValueObjectValue,
			Self::InvalidSetOrListObject => ErrorCode::InvalidSetOrListObject,
			Self::InvalidIncludedValue => ErrorCode::InvalidIncludedValue,
			Self::ListOfLists => ErrorCode::ListOfLists,
			Self::CollidingKeywords(_) => ErrorCode::CollidingKeywords,
			Self::InvalidNestValue(_) => ErrorCode::InvalidNestValue,
			Self::ConflictingIndexes(_) => ErrorCode::ConflictingIndexes,
			Self::CyclicIriMapping => ErrorCode::CyclicIriMapping,
		}
	}
}
