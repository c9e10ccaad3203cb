use crate::{Id, Keyword};
use std::fmt;

/// Anything a term can expand to: a keyword, or a node identifier.
///
/// This is the result of [`crate::context::Context::expand_iri`]: most
/// strings expand to an [`Id`], but a handful of term definitions (and all
/// keys that are themselves keywords) expand to a [`Keyword`].
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Term {
	Keyword(Keyword),
	Id(Id),
}

impl Term {
	pub fn as_keyword(&self) -> Option<Keyword> {
		match self {
			Self::Keyword(k) => Some(*k),
			_ => None,
		}
	}

	pub fn as_id(&self) -> Option<&Id> {
		match self {
			Self::Id(id) => Some(id),
			_ => None,
		}
	}

	pub fn is_keyword(&self) -> bool {
		matches!(self, Self::Keyword(_))
	}

	/// The string this term expands to (an IRI, a blank node id, or a
	/// keyword spelling).
	pub fn as_str(&self) -> &str {
		match self {
			Self::Keyword(k) => k.as_str(),
			Self::Id(id) => id.as_str(),
		}
	}
}

impl From<Keyword> for Term {
	fn from(k: Keyword) -> Self {
		Self::Keyword(k)
	}
}

impl From<Id> for Term {
	fn from(id: Id) -> Self {
		Self::Id(id)
	}
}

impl fmt::Display for Term {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
