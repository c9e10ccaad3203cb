use crate::{term::Term, Container, Direction, Nullable};

/// What a term definition's `@type` coerces values to.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum TypeMapping {
	/// Coerce to a node reference (`@type: @id`).
	Id,
	/// Coerce to a vocabulary-relative node reference (`@type: @vocab`).
	Vocab,
	/// Treat values as opaque JSON (`@type: @json`).
	Json,
	/// Values may not carry a type coercion or language (`@type: @none`).
	None,
	/// Coerce to a literal of the given absolute datatype IRI.
	Iri(iref::IriBuf),
}

/// A single entry of the active context's term-definition map
/// (`spec.md` §3's "Term definition" record).
#[derive(Clone, PartialEq, Debug)]
pub struct TermDefinition {
	/// What the term expands to: a keyword, or a node identifier.
	pub value: Term,
	pub type_mapping: Option<TypeMapping>,
	/// `None` = inherit the active context's default language;
	/// `Some(Nullable::Null)` = this term carries no language even if the
	/// active context has a default one; `Some(Nullable::Some(tag))` =
	/// this term's language.
	pub language_mapping: Option<Nullable<String>>,
	pub direction_mapping: Option<Nullable<Direction>>,
	pub container: Container,
	/// The unprocessed term-scoped local context, applied lazily when the
	/// term is used as a property key or `@type` value.
	pub local_context: Option<json_syntax::Value>,
	/// The base IRI captured at the point this term's scoped context was
	/// defined, needed to process it later.
	pub base_url: Option<iref::IriBuf>,
	pub reverse: bool,
	pub prefix: bool,
	pub protected: bool,
	pub nest: Option<String>,
	pub index: Option<String>,
}

impl TermDefinition {
	pub fn new(value: Term) -> Self {
		Self {
			value,
			type_mapping: None,
			language_mapping: None,
			direction_mapping: None,
			container: Container::new(),
			local_context: None,
			base_url: None,
			reverse: false,
			prefix: false,
			protected: false,
			nest: None,
			index: None,
		}
	}

	/// Whether this definition's target is identical to `other`'s in
	/// every field a `@protected` re-definition is allowed to repeat
	/// verbatim (`spec.md` §4.1: "unless ... the new definition is
	/// identical").
	pub fn is_identical_to(&self, other: &Self) -> bool {
		self.value == other.value
			&& self.type_mapping == other.type_mapping
			&& self.language_mapping == other.language_mapping
			&& self.direction_mapping == other.direction_mapping
			&& self.container == other.container
			&& self.reverse == other.reverse
			&& self.prefix == other.prefix
			&& self.nest == other.nest
			&& self.index == other.index
			&& self.local_context.is_none() == other.local_context.is_none()
	}
}
