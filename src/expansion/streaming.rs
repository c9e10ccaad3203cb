//! A streaming variant of expansion (`spec.md` design notes): walks one
//! node object's entries in arrival order, enforcing the
//! `@context → @type → @id → properties` key-order state machine, and
//! emits quads as each property resolves instead of building the whole
//! expanded tree first.
//!
//! A true incremental tokenizer is the out-of-scope "streaming
//! tokenizer variant" (`spec.md` §1); this operates on an
//! already-parsed [`json_syntax::Value`] but keeps the state machine and
//! the provisional-id buffering the design notes describe: until `@id`
//! is seen, the node's quads use a freshly minted blank node as subject,
//! and are rewritten in place the moment a real `@id` arrives.

use crate::blank::Namer;
use crate::error::ErrorCode;
use crate::id::Id;
use crate::rdf::{Literal, Quad, Term, XSD_STRING};
use iref::IriBuf;
use json_syntax::Value as Json;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum State {
	AwaitContext,
	AwaitType,
	AwaitId,
	Properties,
}

/// Failure of the streaming state machine, sharing `spec.md` §7's error
/// taxonomy with plain expansion.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("@context must be the first key of a streamed node object")]
	ContextOutOfOrder,

	#[error("@type must appear before @id and any other property")]
	TypeOutOfOrder,

	#[error("@id must appear before any other property")]
	IdOutOfOrder,

	#[error("invalid @id value: {0}")]
	InvalidIdValue(String),

	#[error("a streamed node object's property value must be a string, an @id reference, or an array of either")]
	UnsupportedPropertyValue,
}

impl Error {
	pub fn code(&self) -> ErrorCode {
		match self {
			Self::ContextOutOfOrder => ErrorCode::InvalidContextEntry,
			Self::TypeOutOfOrder => ErrorCode::InvalidTypeValue,
			Self::IdOutOfOrder | Self::InvalidIdValue(_) => ErrorCode::InvalidIdValue,
			Self::UnsupportedPropertyValue => ErrorCode::InvalidValueObject,
		}
	}
}

/// Streams one top-level node object into quads.
///
/// `object`'s entries are consumed in order exactly as a tokenizer would
/// deliver keys: `@context` (if present) must come first, then `@type`,
/// then `@id`; every other key is treated as an already-expanded IRI
/// naming a property, whose value is either a string (a plain literal),
/// an object `{"@id": "..."}` (a node reference), or an array of either.
pub struct StreamingExpander {
	state: State,
	subject: Id,
	buffered: Vec<Quad>,
}

impl StreamingExpander {
	pub fn new(namer: &mut Namer) -> Self {
		Self {
			state: State::AwaitContext,
			subject: Id::blank(namer.mint()),
			buffered: Vec::new(),
		}
	}

	/// Feeds the next `(key, value)` entry of the node object, in the
	/// order it was read. Returns the quads this entry produced, or ones
	/// released from the buffer if this entry was the `@id`.
	pub fn feed(&mut self, key: &str, value: &Json) -> Result<Vec<Quad>, Error> {
		match key {
			"@context" => {
				if self.state != State::AwaitContext {
					return Err(Error::ContextOutOfOrder);
				}
				self.state = State::AwaitType;
				Ok(Vec::new())
			}
			"@type" => {
				if self.state > State::AwaitType {
					return Err(Error::TypeOutOfOrder);
				}
				self.state = State::AwaitId;
				let types = match value {
					Json::Array(items) => items.iter().filter_map(Json::as_str).collect::<Vec<_>>(),
					Json::String(s) => vec![s.as_str()],
					_ => return Err(Error::UnsupportedPropertyValue),
				};
				Ok(types
					.into_iter()
					.map(|ty| {
						let iri = IriBuf::new(ty.to_owned()).map_err(|_| Error::UnsupportedPropertyValue)?;
						Ok(self.emit_keyword(crate::rdf::RDF_TYPE, Term::Id(Id::iri(iri))))
					})
					.collect::<Result<Vec<_>, Error>>()?
					.into_iter()
					.flatten()
					.collect())
			}
			"@id" => {
				if self.state > State::AwaitId {
					return Err(Error::IdOutOfOrder);
				}
				self.state = State::Properties;
				let Json::String(s) = value else {
					return Err(Error::InvalidIdValue(format!("{value:?}")));
				};
				let iri = IriBuf::new(s.as_str().to_owned()).map_err(|e| Error::InvalidIdValue(e.to_string()))?;
				self.subject = Id::iri(iri);
				Ok(std::mem::take(&mut self.buffered)
					.into_iter()
					.map(|q| Quad { subject: self.subject.clone(), ..q })
					.collect())
			}
			property => {
				self.state = State::Properties;
				let iri = IriBuf::new(property.to_owned()).map_err(|_| Error::UnsupportedPropertyValue)?;
				let predicate = Id::iri(iri);
				let objects = self.property_terms(value)?;
				Ok(objects.into_iter().map(|object| self.emit(predicate.clone(), object)).collect())
			}
		}
	}

	/// Releases whatever remains buffered once the object's last entry
	/// has been fed. If `@id` never appeared, the node keeps its minted
	/// blank node identifier.
	pub fn finish(self) -> Vec<Quad> {
		self.buffered
	}

	fn property_terms(&self, value: &Json) -> Result<Vec<Term>, Error> {
		match value {
			Json::String(s) => Ok(vec![Term::Literal(Literal {
				lexical: s.as_str().to_owned(),
				datatype: IriBuf::new(XSD_STRING.as_str().to_owned()).expect("constant IRI is valid"),
				language: None,
			})]),
			Json::Object(obj) => {
				let Some(id) = crate::json_util::get(obj, "@id").and_then(|v| v.as_str().map(str::to_owned)) else {
					return Err(Error::UnsupportedPropertyValue);
				};
				let iri = IriBuf::new(id).map_err(|_| Error::UnsupportedPropertyValue)?;
				Ok(vec![Term::Id(Id::iri(iri))])
			}
			Json::Array(items) => items.iter().map(|item| {
				self.property_terms(item).map(|mut terms| terms.pop().expect("single term per scalar entry"))
			}).collect(),
			_ => Err(Error::UnsupportedPropertyValue),
		}
	}

	fn emit(&mut self, predicate: Id, object: Term) -> Quad {
		let quad = Quad {
			graph: None,
			subject: self.subject.clone(),
			predicate,
			object,
		};
		if self.subject.is_blank() && self.state < State::Properties {
			self.buffered.push(quad.clone());
		}
		quad
	}

	fn emit_keyword(&mut self, predicate: &iref::Iri, object: Term) -> Vec<Quad> {
		let quad = Quad {
			graph: None,
			subject: self.subject.clone(),
			predicate: Id::iri(IriBuf::new(predicate.as_str().to_owned()).expect("constant IRI is valid")),
			object,
		};
		if self.subject.is_blank() {
			self.buffered.push(quad.clone());
			Vec::new()
		} else {
			vec![quad]
		}
	}
}

impl PartialOrd for State {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for State {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		fn rank(s: &State) -> u8 {
			match s {
				State::AwaitContext => 0,
				State::AwaitType => 1,
				State::AwaitId => 2,
				State::Properties => 3,
			}
		}
		rank(self).cmp(&rank(other))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(s: &str) -> Json {
		Json::parse_str(s).expect("valid json").0
	}

	#[test]
	fn buffers_until_id_then_rewrites_subject() {
		let mut namer = Namer::new();
		let mut expander = StreamingExpander::new(&mut namer);

		let name = parse(r#""Ada""#);
		let produced = expander.feed("http://example.org/name", &name).unwrap();
		assert!(produced.is_empty(), "blank-subject quads stay buffered");

		let id = parse(r#""https://example.org/people/ada""#);
		let released = expander.feed("@id", &id).unwrap();
		assert_eq!(released.len(), 1);
		assert_eq!(released[0].subject, Id::from_string("https://example.org/people/ada".to_owned()));
	}

	#[test]
	fn type_after_id_is_rejected() {
		let mut namer = Namer::new();
		let mut expander = StreamingExpander::new(&mut namer);
		let id = parse(r#""https://example.org/a""#);
		expander.feed("@id", &id).unwrap();
		let ty = parse(r#""https://example.org/Thing""#);
		assert!(matches!(expander.feed("@type", &ty), Err(Error::TypeOutOfOrder)));
	}

	#[test]
	fn context_after_type_is_rejected() {
		let mut namer = Namer::new();
		let mut expander = StreamingExpander::new(&mut namer);
		let ty = parse(r#""https://example.org/Thing""#);
		expander.feed("@type", &ty).unwrap();
		let ctx = parse(r#"{}"#);
		assert!(matches!(expander.feed("@context", &ctx), Err(Error::ContextOutOfOrder)));
	}

	#[test]
	fn no_id_keeps_blank_subject() {
		let mut namer = Namer::new();
		let mut expander = StreamingExpander::new(&mut namer);
		let name = parse(r#""Ada""#);
		expander.feed("http://example.org/name", &name).unwrap();
		let quads = expander.finish();
		assert_eq!(quads.len(), 1);
		assert!(quads[0].subject.is_blank());
	}
}
