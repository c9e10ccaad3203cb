use iref::{Iri, IriBuf};
use rdf_types::{BlankId, BlankIdBuf};
use std::fmt;

/// A node identifier: an absolute IRI, a blank node identifier, or (kept
/// around rather than rejected outright, since expansion must still be
/// able to round-trip it) a string that is neither.
///
/// See the crate-level note on why this is concrete over `IriBuf`/
/// `BlankIdBuf` rather than generic over an interning `Vocabulary`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Id {
	Iri(IriBuf),
	Blank(BlankIdBuf),
	Invalid(String),
}

impl Id {
	/// Classifies a raw string as an IRI, a blank node id (`_:...`), or
	/// invalid.
	pub fn from_string(s: String) -> Self {
		match IriBuf::new(s) {
			Ok(iri) => Self::Iri(iri),
			Err(e) => match BlankIdBuf::new(e.0) {
				Ok(b) => Self::Blank(b),
				Err(err) => Self::Invalid(err.0),
			},
		}
	}

	pub fn iri(iri: IriBuf) -> Self {
		Self::Iri(iri)
	}

	pub fn blank(b: BlankIdBuf) -> Self {
		Self::Blank(b)
	}

	pub fn is_valid(&self) -> bool {
		!matches!(self, Self::Invalid(_))
	}

	pub fn is_blank(&self) -> bool {
		matches!(self, Self::Blank(_))
	}

	pub fn is_iri(&self) -> bool {
		matches!(self, Self::Iri(_))
	}

	pub fn as_iri(&self) -> Option<&Iri> {
		match self {
			Self::Iri(iri) => Some(iri.as_iri()),
			_ => None,
		}
	}

	pub fn as_blank(&self) -> Option<&BlankId> {
		match self {
			Self::Blank(b) => Some(b.as_blank_id_ref()),
			_ => None,
		}
	}

	pub fn as_str(&self) -> &str {
		match self {
			Self::Iri(iri) => iri.as_str(),
			Self::Blank(b) => b.as_str(),
			Self::Invalid(s) => s.as_str(),
		}
	}

	pub fn into_term(self) -> crate::term::Term {
		crate::term::Term::Id(self)
	}
}

impl fmt::Display for Id {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl PartialEq<str> for Id {
	fn eq(&self, other: &str) -> bool {
		self.as_str() == other
	}
}

impl From<IriBuf> for Id {
	fn from(iri: IriBuf) -> Self {
		Self::Iri(iri)
	}
}

impl From<BlankIdBuf> for Id {
	fn from(b: BlankIdBuf) -> Self {
		Self::Blank(b)
	}
}

/// `true` if `s` begins with the blank node identifier prefix `_:`.
pub fn is_blank_node_id(s: &str) -> bool {
	s.starts_with("_:")
}
