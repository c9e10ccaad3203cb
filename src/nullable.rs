use std::fmt;

/// A value that can be explicitly `null`.
///
/// JSON-LD distinguishes "not present" (`Option::None`) from "explicitly
/// nulled out" (`Nullable::Null`): `{"@language": null}` in a term
/// definition means "this term has no language", which is a different
/// outcome from the key being absent (inherit the active context's
/// default language).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Nullable<T> {
	Null,
	Some(T),
}

impl<T> Nullable<T> {
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	pub fn option(self) -> Option<T> {
		match self {
			Self::Null => None,
			Self::Some(t) => Some(t),
		}
	}

	pub fn as_ref(&self) -> Nullable<&T> {
		match self {
			Self::Null => Nullable::Null,
			Self::Some(t) => Nullable::Some(t),
		}
	}

	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Nullable<U> {
		match self {
			Self::Null => Nullable::Null,
			Self::Some(t) => Nullable::Some(f(t)),
		}
	}
}

impl<T> From<Option<T>> for Nullable<T> {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(t) => Self::Some(t),
			None => Self::Null,
		}
	}
}

impl<T> From<Nullable<T>> for Option<T> {
	fn from(value: Nullable<T>) -> Self {
		value.option()
	}
}

impl<T: fmt::Display> fmt::Display for Nullable<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Null => write!(f, "null"),
			Self::Some(v) => v.fmt(f),
		}
	}
}
