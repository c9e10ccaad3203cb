use crate::error::ErrorCode;

/// Failure of the Framing Algorithm (`spec.md` §4.5).
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
	#[error("invalid frame: {0}")]
	InvalidFrame(String),

	#[error("invalid @embed value `{0}`")]
	InvalidEmbedValue(String),
}

impl Error {
	pub fn code(&self) -> ErrorCode {
		match self {
			Self::InvalidFrame(_) => ErrorCode::InvalidFrame,
			Self::InvalidEmbedValue(_) => ErrorCode::InvalidEmbedValue,
		}
	}
}
