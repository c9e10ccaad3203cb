use crate::Direction;
use iref::IriBuf;
use json_syntax::Number;

/// The content of a `@value` object once expanded: a JSON-native literal
/// (possibly carrying a datatype IRI), a language- and/or direction-tagged
/// string, or an opaque `@json`-typed value.
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
	/// A plain literal: `@type` is either absent (implying `xsd:string` for
	/// strings, `xsd:boolean`/`xsd:integer`/`xsd:double` for booleans and
	/// numbers at RDF-conversion time) or an explicit datatype IRI.
	Literal(Literal, Option<IriBuf>),

	/// A string tagged with `@language` and/or `@direction`.
	LangString(LangString),

	/// A value whose `@type` is `@json`: opaque JSON, canonicalized rather
	/// than interpreted, per `spec.md` §4.1's `@json` coercion.
	Json(json_syntax::Value),
}

impl Value {
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Literal(Literal::String(s), _) => Some(s),
			Self::LangString(l) => Some(&l.data),
			_ => None,
		}
	}
}

/// The lexical scalar inside a plain literal value object.
#[derive(Clone, PartialEq, Debug)]
pub enum Literal {
	String(String),
	Boolean(bool),
	Number(Number),
}

/// A string together with its optional language tag and base direction.
///
/// Invariant: at least one of `language`/`direction` is `Some` (otherwise
/// the value would have been represented as a plain [`Literal::String`]
/// instead); enforced by the expansion and value-object validation code
/// that constructs it, not by this type itself.
#[derive(Clone, PartialEq, Debug)]
pub struct LangString {
	pub data: String,
	pub language: Option<String>,
	pub direction: Option<Direction>,
}

impl LangString {
	pub fn new(data: String, language: Option<String>, direction: Option<Direction>) -> Self {
		Self {
			data,
			language,
			direction,
		}
	}
}
