use std::fmt;

/// A string that does not name a JSON-LD keyword.
#[derive(Debug, Clone, thiserror::Error)]
#[error("`{0}` is not a JSON-LD keyword")]
pub struct NotAKeyword(pub String);

/// JSON-LD keyword.
///
/// All the `@`-prefixed identifiers with a reserved meaning in JSON-LD
/// documents, contexts and frames.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Keyword {
	Base,
	Container,
	Context,
	Direction,
	Graph,
	Id,
	Import,
	Included,
	Index,
	Json,
	Language,
	List,
	Nest,
	None,
	Prefix,
	Propagate,
	Protected,
	Reverse,
	Set,
	Type,
	Value,
	Version,
	Vocab,
	Annotation,
	Embed,
	Explicit,
	OmitDefault,
	RequireAll,
	Default,
	Preserve,
	Null,
}

impl Keyword {
	pub const ALL: &'static [Keyword] = &[
		Keyword::Base,
		Keyword::Container,
		Keyword::Context,
		Keyword::Direction,
		Keyword::Graph,
		Keyword::Id,
		Keyword::Import,
		Keyword::Included,
		Keyword::Index,
		Keyword::Json,
		Keyword::Language,
		Keyword::List,
		Keyword::Nest,
		Keyword::None,
		Keyword::Prefix,
		Keyword::Propagate,
		Keyword::Protected,
		Keyword::Reverse,
		Keyword::Set,
		Keyword::Type,
		Keyword::Value,
		Keyword::Version,
		Keyword::Vocab,
		Keyword::Annotation,
		Keyword::Embed,
		Keyword::Explicit,
		Keyword::OmitDefault,
		Keyword::RequireAll,
		Keyword::Default,
		Keyword::Preserve,
		Keyword::Null,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Base => "@base",
			Self::Container => "@container",
			Self::Context => "@context",
			Self::Direction => "@direction",
			Self::Graph => "@graph",
			Self::Id => "@id",
			Self::Import => "@import",
			Self::Included => "@included",
			Self::Index => "@index",
			Self::Json => "@json",
			Self::Language => "@language",
			Self::List => "@list",
			Self::Nest => "@nest",
			Self::None => "@none",
			Self::Prefix => "@prefix",
			Self::Propagate => "@propagate",
			Self::Protected => "@protected",
			Self::Reverse => "@reverse",
			Self::Set => "@set",
			Self::Type => "@type",
			Self::Value => "@value",
			Self::Version => "@version",
			Self::Vocab => "@vocab",
			Self::Annotation => "@annotation",
			Self::Embed => "@embed",
			Self::Explicit => "@explicit",
			Self::OmitDefault => "@omitDefault",
			Self::RequireAll => "@requireAll",
			Self::Default => "@default",
			Self::Preserve => "@preserve",
			Self::Null => "@null",
		}
	}

	/// Position of this keyword in the fixed output key order
	/// (`@base @id @value @type @language @vocab @container @graph @list
	/// @set @index`), or `None` if this keyword is not part of that
	/// sequence and should instead sort with the other, lexicographically
	/// ordered keys.
	pub fn output_rank(self) -> Option<usize> {
		const ORDER: &[Keyword] = &[
			Keyword::Base,
			Keyword::Id,
			Keyword::Value,
			Keyword::Type,
			Keyword::Language,
			Keyword::Vocab,
			Keyword::Container,
			Keyword::Graph,
			Keyword::List,
			Keyword::Set,
			Keyword::Index,
		];
		ORDER.iter().position(|k| *k == self)
	}

	/// `true` if a term definition is allowed to expand to this keyword
	/// (`@type`, `@id`, `@graph`, `@none` are the only keywords that may be
	/// the target of a term).
	pub fn is_keyword_expandable_as_term(self) -> bool {
		matches!(self, Self::Type | Self::Id | Self::Graph | Self::None)
	}
}

impl TryFrom<&str> for Keyword {
	type Error = NotAKeyword;

	fn try_from(s: &str) -> Result<Self, Self::Error> {
		Self::ALL
			.iter()
			.copied()
			.find(|k| k.as_str() == s)
			.ok_or_else(|| NotAKeyword(s.to_owned()))
	}
}

impl fmt::Display for Keyword {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// `true` if `s` looks like a keyword (`@` followed only by ASCII letters),
/// whether or not it is one `jsonld` recognizes.
///
/// Per the expansion algorithm, entries whose key matches this shape but
/// which are not a *known* keyword must be dropped rather than treated as
/// a regular property.
pub fn looks_like_keyword(s: &str) -> bool {
	let mut chars = s.chars();
	chars.next() == Some('@') && chars.all(|c| c.is_ascii_alphabetic())
}

/// Orders two expanded-form keys the way the processing model requires:
/// keywords first (in [`Keyword::output_rank`] order, falling back to
/// alphabetical for keywords outside that sequence), then term-expanded
/// keys lexicographically.
pub fn key_order(a: &str, b: &str) -> std::cmp::Ordering {
	let ka = Keyword::try_from(a).ok();
	let kb = Keyword::try_from(b).ok();
	match (ka, kb) {
		(Some(ka), Some(kb)) => match (ka.output_rank(), kb.output_rank()) {
			(Some(ra), Some(rb)) => ra.cmp(&rb),
			(Some(_), None) => std::cmp::Ordering::Less,
			(None, Some(_)) => std::cmp::Ordering::Greater,
			(None, None) => a.cmp(b),
		},
		(Some(_), None) => std::cmp::Ordering::Less,
		(None, Some(_)) => std::cmp::Ordering::Greater,
		(None, None) => a.cmp(b),
	}
}
