use std::{fmt, str::FromStr};

/// A string that does not name a JSON-LD base direction (`"ltr"` or `"rtl"`).
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid JSON-LD base direction `{0}`")]
pub struct InvalidDirection(pub String);

/// Base direction of a directional language-tagged string.
///
/// Appears as `@direction` in value objects and as the default direction
/// of an active context.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Direction {
	/// Left-to-right.
	Ltr,

	/// Right-to-left.
	Rtl,
}

impl Direction {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Ltr => "ltr",
			Self::Rtl => "rtl",
		}
	}
}

impl TryFrom<&str> for Direction {
	type Error = InvalidDirection;

	fn try_from(s: &str) -> Result<Self, Self::Error> {
		match s {
			"ltr" => Ok(Self::Ltr),
			"rtl" => Ok(Self::Rtl),
			_ => Err(InvalidDirection(s.to_owned())),
		}
	}
}

impl FromStr for Direction {
	type Err = InvalidDirection;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::try_from(s)
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
