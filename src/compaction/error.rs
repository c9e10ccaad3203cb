use crate::error::ErrorCode;

/// Failure of the Compaction Algorithm (`spec.md` §4.3).
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	ContextProcessing(#[from] crate::context_processing::Error),

	#[error("two list values compacted to the same property")]
	CompactionToListOfLists,

	#[error("conflicting @index entries for the same node")]
	ConflictingIndexes,

	#[error("invalid @nest value for term `{0}`")]
	InvalidNestValue(String),
}

impl Error {
	pub fn code(&self) -> ErrorCode {
		match self {
			Self::ContextProcessing(e) => e.code(),
			Self::CompactionToListOfLists => ErrorCode::CompactionToListOfLists,
			Self::ConflictingIndexes => ErrorCode::ConflictingIndexes,
			Self::InvalidNestValue(_) => ErrorCode::InvalidNestValue,
		}
	}
}
