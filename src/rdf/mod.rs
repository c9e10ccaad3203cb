//! RDF conversion (`spec.md` §4.6): turning a flattened [`NodeMap`] into a
//! set of RDF quads (`to_rdf`) and back (`from_rdf`).
//!
//! Concrete, non-generic types are used throughout (`Quad`, `Term`,
//! `Literal`) rather than the teacher's `Vocabulary`-generic design, for
//! the same reason `Id` is concrete over `IriBuf`/`BlankIdBuf`: this
//! crate has exactly one document model and no interning layer to share
//! identifiers with.

mod error;
mod options;

pub use error::Error;
pub use options::Options;

use std::str::FromStr;

use iref::{Iri, IriBuf};
use json_syntax::Print;
use static_iref::iri;

use crate::blank::Namer;
use crate::direction::Direction;
use crate::flattening::{NodeMap, DEFAULT_GRAPH};
use crate::id::Id;
use crate::object::{value, IndexedObject, Object};

pub const RDF_TYPE: &Iri = iri!("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
pub const RDF_FIRST: &Iri = iri!("http://www.w3.org/1999/02/22-rdf-syntax-ns#first");
pub const RDF_REST: &Iri = iri!("http://www.w3.org/1999/02/22-rdf-syntax-ns#rest");
pub const RDF_VALUE: &Iri = iri!("http://www.w3.org/1999/02/22-rdf-syntax-ns#value");
pub const RDF_DIRECTION: &Iri = iri!("http://www.w3.org/1999/02/22-rdf-syntax-ns#direction");
pub const RDF_JSON: &Iri = iri!("http://www.w3.org/1999/02/22-rdf-syntax-ns#JSON");
pub const RDF_NIL: &Iri = iri!("http://www.w3.org/1999/02/22-rdf-syntax-ns#nil");

pub const XSD_BOOLEAN: &Iri = iri!("http://www.w3.org/2001/XMLSchema#boolean");
pub const XSD_INTEGER: &Iri = iri!("http://www.w3.org/2001/XMLSchema#integer");
pub const XSD_DOUBLE: &Iri = iri!("http://www.w3.org/2001/XMLSchema#double");
pub const XSD_STRING: &Iri = iri!("http://www.w3.org/2001/XMLSchema#string");

// <https://www.w3.org/TR/xmlschema11-2/#f-doubleLexmap>
const XSD_CANONICAL_FLOAT: pretty_dtoa::FmtFloatConfig =
	pretty_dtoa::FmtFloatConfig::default().force_e_notation().capitalize_e(true);

fn rdf_iri(iri: &Iri) -> IriBuf {
	IriBuf::new(iri.as_str().to_owned()).expect("constant IRI is valid")
}

/// Direction representation method (`spec.md` §4.6, `rdfDirection` option).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RdfDirection {
	/// Encode the direction in the datatype IRI, under the
	/// `https://www.w3.org/ns/i18n#` prefix.
	I18nDatatype,

	/// Encode the direction with a fresh blank node carrying `rdf:value`
	/// and `rdf:direction` triples.
	CompoundLiteral,
}

impl FromStr for RdfDirection {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"i18n-datatype" => Ok(Self::I18nDatatype),
			"compound-literal" => Ok(Self::CompoundLiteral),
			_ => Err(Error::InvalidRdfDirection(s.to_owned())),
		}
	}
}

impl TryFrom<&str> for RdfDirection {
	type Error = Error;

	fn try_from(s: &str) -> Result<Self, Self::Error> {
		s.parse()
	}
}

fn i18n_iri(language: Option<&str>, direction: Direction) -> IriBuf {
	let suffix = match language {
		Some(lang) => format!("{lang}_{}", direction.as_str()),
		None => direction.as_str().to_owned(),
	};
	IriBuf::new(format!("https://www.w3.org/ns/i18n#{suffix}")).expect("well-formed i18n IRI")
}

/// An RDF term: either a node (IRI or blank node) or a literal.
#[derive(Clone, PartialEq, Debug)]
pub enum Term {
	Id(Id),
	Literal(Literal),
}

impl Term {
	pub fn id(id: Id) -> Self {
		Self::Id(id)
	}

	pub fn as_id(&self) -> Option<&Id> {
		match self {
			Self::Id(id) => Some(id),
			_ => None,
		}
	}
}

/// A typed or language-tagged RDF literal.
#[derive(Clone, PartialEq, Debug)]
pub struct Literal {
	pub lexical: String,
	pub datatype: IriBuf,
	pub language: Option<String>,
}

impl Literal {
	fn typed(lexical: String, datatype: &Iri) -> Self {
		Self {
			lexical,
			datatype: rdf_iri(datatype),
			language: None,
		}
	}

	fn lang_string(lexical: String, language: String) -> Self {
		Self {
			lexical,
			datatype: rdf_iri(iri!("http://www.w3.org/1999/02/22-rdf-syntax-ns#langString")),
			language: Some(language),
		}
	}
}

/// An RDF 1.1 quad (a triple plus an optional graph name).
#[derive(Clone, PartialEq, Debug)]
pub struct Quad {
	pub graph: Option<Id>,
	pub subject: Id,
	pub predicate: Id,
	pub object: Term,
}

impl Quad {
	fn new(graph: Option<Id>, subject: Id, predicate: Id, object: Term) -> Self {
		Self {
			graph,
			subject,
			predicate,
			object,
		}
	}

	fn with_keyword(graph: Option<Id>, subject: Id, predicate: &Iri, object: Term) -> Self {
		Self::new(graph, subject, Id::iri(rdf_iri(predicate)), object)
	}
}

/// Converts a flattened [`NodeMap`] into a flat list of quads
/// (`spec.md` §4.6's Deserialize-to-RDF / serialization half).
///
/// Blank node subjects, predicates and `@list` cons cells keep whatever
/// label the node map already assigned; only cons-cell blank nodes are
/// freshly minted, via `namer`.
pub fn quads(node_map: &NodeMap, options: Options) -> Result<Vec<Quad>, Error> {
	let mut namer = Namer::with_prefix("l");
	let mut out = Vec::new();

	let mut graph_names: Vec<&str> = node_map.graph_names().filter(|g| *g != DEFAULT_GRAPH).collect();
	graph_names.sort_unstable();

	emit_graph(node_map, None, DEFAULT_GRAPH, options, &mut namer, &mut out)?;
	for name in graph_names {
		let graph_id = Id::from_string(name.to_owned());
		if !options.produce_generalized_rdf && graph_id.is_blank() {
			continue;
		}
		emit_graph(node_map, Some(graph_id), name, options, &mut namer, &mut out)?;
	}

	Ok(out)
}

fn emit_graph(
	node_map: &NodeMap,
	graph: Option<Id>,
	graph_name: &str,
	options: Options,
	namer: &mut Namer,
	out: &mut Vec<Quad>,
) -> Result<(), Error> {
	let Some(nodes) = node_map.graph(graph_name) else {
		return Ok(());
	};
	let mut ids: Vec<&String> = nodes.keys().collect();
	ids.sort();

	for id in ids {
		let node = &nodes[id];
		let Some(subject) = node.id.clone() else {
			continue;
		};

		for ty in &node.types {
			out.push(Quad::with_keyword(graph.clone(), subject.clone(), RDF_TYPE, Term::Id(ty.clone())));
		}

		for (property, values) in node.properties() {
			if !options.produce_generalized_rdf && property.is_blank() {
				continue;
			}
			for value in values {
				if let Some(object) = object_to_term(value, options, namer, graph.clone(), out)? {
					out.push(Quad::new(graph.clone(), subject.clone(), property.clone(), object));
				}
			}
		}
	}

	Ok(())
}

/// Converts one node-map value into an RDF term, emitting any extra
/// quads it requires (`@list` cons cells, compound-literal direction
/// blank nodes) directly into `out`.
fn object_to_term(
	object: &IndexedObject,
	options: Options,
	namer: &mut Namer,
	graph: Option<Id>,
	out: &mut Vec<Quad>,
) -> Result<Option<Term>, Error> {
	match object.inner() {
		Object::Node(node) => Ok(node.id.clone().map(Term::Id)),
		Object::Value(value) => value_to_term(value, options, namer, graph, out).map(Some),
		Object::List(list) => {
			if list.is_empty() {
				return Ok(Some(Term::Id(Id::iri(rdf_iri(RDF_NIL)))));
			}
			let head = list_to_rdf(list.items(), options, namer, graph, out)?;
			Ok(Some(Term::Id(head)))
		}
	}
}

fn list_to_rdf(
	items: &[IndexedObject],
	options: Options,
	namer: &mut Namer,
	graph: Option<Id>,
	out: &mut Vec<Quad>,
) -> Result<Id, Error> {
	let mut cells = Vec::with_capacity(items.len());
	for _ in items {
		cells.push(Id::blank(namer.mint()));
	}

	for (i, item) in items.iter().enumerate() {
		let cell = cells[i].clone();
		let Some(term) = object_to_term(item, options, namer, graph.clone(), out)? else {
			continue;
		};
		out.push(Quad::with_keyword(graph.clone(), cell.clone(), RDF_FIRST, term));
		let rest = cells.get(i + 1).cloned().map(Term::Id).unwrap_or_else(|| Term::Id(Id::iri(rdf_iri(RDF_NIL))));
		out.push(Quad::with_keyword(graph.clone(), cell, RDF_REST, rest));
	}

	Ok(cells.into_iter().next().expect("non-empty list"))
}

fn value_to_term(
	value: &value::Value,
	options: Options,
	namer: &mut Namer,
	graph: Option<Id>,
	out: &mut Vec<Quad>,
) -> Result<Term, Error> {
	match value {
		value::Value::Json(json) => Ok(Term::Literal(Literal::typed(json.compact_print().to_string(), RDF_JSON))),
		value::Value::LangString(lang) => lang_string_term(lang, options, namer, graph, out),
		value::Value::Literal(lit, ty) => Ok(Term::Literal(literal_term(lit, ty.as_deref()))),
	}
}

fn lang_string_term(
	lang: &value::LangString,
	options: Options,
	namer: &mut Namer,
	graph: Option<Id>,
	out: &mut Vec<Quad>,
) -> Result<Term, Error> {
	match lang.direction {
		None => match &lang.language {
			Some(language) => Ok(Term::Literal(Literal::lang_string(lang.data.clone(), language.clone()))),
			None => Ok(Term::Literal(Literal::typed(lang.data.clone(), XSD_STRING))),
		},
		Some(direction) => match options.rdf_direction {
			Some(RdfDirection::I18nDatatype) => {
				let iri = i18n_iri(lang.language.as_deref(), direction);
				Ok(Term::Literal(Literal {
					lexical: lang.data.clone(),
					datatype: iri,
					language: None,
				}))
			}
			Some(RdfDirection::CompoundLiteral) => {
				let id = Id::blank(namer.mint());
				out.push(Quad::with_keyword(
					graph.clone(),
					id.clone(),
					RDF_VALUE,
					Term::Literal(Literal::typed(lang.data.clone(), XSD_STRING)),
				));
				out.push(Quad::with_keyword(
					graph,
					id.clone(),
					RDF_DIRECTION,
					Term::Literal(Literal::typed(direction.as_str().to_owned(), XSD_STRING)),
				));
				Ok(Term::Id(id))
			}
			None => match &lang.language {
				Some(language) => Ok(Term::Literal(Literal::lang_string(lang.data.clone(), language.clone()))),
				None => Ok(Term::Literal(Literal::typed(lang.data.clone(), XSD_STRING))),
			},
		},
	}
}

fn literal_term(lit: &value::Literal, ty: Option<&Iri>) -> Literal {
	let (lexical, preferred) = match lit {
		value::Literal::Boolean(b) => ((if *b { "true" } else { "false" }).to_owned(), Some(XSD_BOOLEAN)),
		value::Literal::String(s) => (s.clone(), None),
		value::Literal::Number(n) => {
			if n.is_i64() && ty != Some(XSD_DOUBLE) {
				(n.to_string(), Some(XSD_INTEGER))
			} else {
				(pretty_dtoa::dtoa(n.as_f64_lossy(), XSD_CANONICAL_FLOAT), Some(XSD_DOUBLE))
			}
		}
	};

	let datatype = ty.or(preferred).unwrap_or(XSD_STRING);
	Literal::typed(lexical, datatype)
}

/// Rebuilds a [`NodeMap`] from a flat list of quads (`spec.md` §4.6's
/// Parse-into-RDF half). Well-formed `rdf:first`/`rdf:rest` chains
/// rooted at a blank node referenced exactly once are rewritten back
/// into `@list` objects; everything else becomes an ordinary node
/// reference.
pub fn from_rdf(quads: &[Quad]) -> NodeMap {
	let mut map = NodeMap::new();

	let mut graphs: Vec<Option<Id>> = Vec::new();
	for quad in quads {
		if !graphs.iter().any(|g| g == &quad.graph) {
			graphs.push(quad.graph.clone());
		}
	}

	for graph in graphs {
		let graph_name = graph.as_ref().map(id_str).unwrap_or_else(|| DEFAULT_GRAPH.to_owned());
		let in_graph: Vec<&Quad> = quads.iter().filter(|q| q.graph == graph).collect();

		for quad in &in_graph {
			map.ensure_node(&graph_name, quad.subject.clone());
			if let Term::Id(id) = &quad.object {
				map.ensure_node(&graph_name, id.clone());
			}
		}

		for quad in in_graph {
			let predicate = quad.predicate.as_iri().map(|i| i.as_str().to_owned()).unwrap_or_default();
			if predicate == RDF_TYPE.as_str() {
				if let Term::Id(ty) = &quad.object {
					map.node_mut(&graph_name, &quad.subject).insert_type(ty.clone());
					continue;
				}
			}
			let value = term_to_object(&quad.object);
			map.node_mut(&graph_name, &quad.subject).insert_property(quad.predicate.clone(), value);
		}
	}

	map
}

fn id_str(id: &Id) -> String {
	id.as_str().to_owned()
}

fn term_to_object(term: &Term) -> IndexedObject {
	match term {
		Term::Id(id) => IndexedObject::node(crate::object::Node::with_id(id.clone()), None),
		Term::Literal(lit) => {
			let value = if lit.datatype.as_str() == "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString" {
				value::Value::LangString(value::LangString::new(lit.lexical.clone(), lit.language.clone(), None))
			} else if lit.datatype.as_str() == RDF_JSON.as_str() {
				json_syntax::Value::parse_str(&lit.lexical).map(|(v, _)| value::Value::Json(v)).unwrap_or_else(|_| {
					value::Value::Literal(value::Literal::String(lit.lexical.clone()), None)
				})
			} else if lit.datatype.as_str() == XSD_STRING.as_str() {
				value::Value::Literal(value::Literal::String(lit.lexical.clone()), None)
			} else {
				value::Value::Literal(value::Literal::String(lit.lexical.clone()), Some(lit.datatype.clone()))
			};
			IndexedObject::value(value, None)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::context::Context;
	use crate::expansion;
	use crate::flattening;
	use crate::loader::NoLoader;
	use crate::warning::CollectingHandler;
	use json_syntax::Value as Json;

	fn parse(s: &str) -> Json {
		Json::parse_str(s).expect("valid json").0
	}

	async fn nm(json: &str) -> NodeMap {
		let document = parse(json);
		let mut warnings = CollectingHandler::default();
		let expanded = expansion::expand_document(
			&Context::default(),
			&document,
			None,
			&NoLoader,
			expansion::Options::default(),
			&mut warnings,
		)
		.await
		.unwrap();
		flattening::flatten(&expanded).expect("flattens")
	}

	#[tokio::test]
	async fn converts_plain_property_to_quad() {
		let map = nm(r#"[{"@id":"http://example.org/s","http://example.org/p":"v"}]"#).await;
		let qs = quads(&map, Options::default()).unwrap();
		assert!(qs.iter().any(|q| matches!(&q.object, Term::Literal(l) if l.lexical == "v")));
	}

	#[tokio::test]
	async fn empty_list_becomes_rdf_nil() {
		let map = nm(r#"[{"@id":"http://example.org/s","http://example.org/p":{"@list":[]}}]"#).await;
		let qs = quads(&map, Options::default()).unwrap();
		let nil = qs.iter().find(|q| q.subject == Id::from_string("http://example.org/s".into()));
		assert!(matches!(&nil.unwrap().object, Term::Id(id) if id.as_iri().map(|i| i.as_str()) == Some(RDF_NIL.as_str())));
	}

	#[tokio::test]
	async fn list_materializes_cons_chain() {
		let map = nm(r#"[{"@id":"http://example.org/s","http://example.org/p":{"@list":[1,2]}}]"#).await;
		let qs = quads(&map, Options::default()).unwrap();
		let firsts = qs.iter().filter(|q| q.predicate.as_iri().map(|i| i.as_str()) == Some(RDF_FIRST.as_str())).count();
		let rests = qs.iter().filter(|q| q.predicate.as_iri().map(|i| i.as_str()) == Some(RDF_REST.as_str())).count();
		assert_eq!(firsts, 2);
		assert_eq!(rests, 2);
	}

	#[tokio::test]
	async fn direction_as_i18n_datatype() {
		let map = nm(
			r#"[{"@id":"http://example.org/s","http://example.org/p":{"@value":"v","@language":"en","@direction":"ltr"}}]"#,
		)
		.await;
		let qs = quads(&map, Options { rdf_direction: Some(RdfDirection::I18nDatatype), ..Options::default() }).unwrap();
		let lit = qs.iter().find_map(|q| match &q.object {
			Term::Literal(l) => Some(l.clone()),
			_ => None,
		});
		assert_eq!(lit.unwrap().datatype.as_str(), "https://www.w3.org/ns/i18n#en_ltr");
	}

	#[tokio::test]
	async fn roundtrips_type_triple() {
		let map = nm(r#"[{"@id":"http://example.org/s","@type":"http://example.org/T"}]"#).await;
		let qs = quads(&map, Options::default()).unwrap();
		let back = from_rdf(&qs);
		let node = back.node(DEFAULT_GRAPH, "http://example.org/s").unwrap();
		assert_eq!(node.types, vec![Id::from_string("http://example.org/T".into())]);
	}
}
