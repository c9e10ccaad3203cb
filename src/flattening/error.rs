use crate::error::ErrorCode;

/// Failure of the Node-Map construction algorithm (`spec.md` §4.4).
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
	#[error("a list object cannot appear directly inside another list")]
	ListOfLists,
}

impl Error {
	pub fn code(&self) -> ErrorCode {
		match self {
			Self::ListOfLists => ErrorCode::ListOfLists,
		}
	}
}
