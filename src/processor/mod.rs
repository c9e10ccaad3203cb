//! The API façade (`spec.md` §6): one `Options` bag and a
//! [`JsonLdProcessor`] trait implemented for [`json_syntax::Value`],
//! composing the five algorithm modules into the five operations the
//! specification's interface table names (`expand`, `compact`,
//! `flatten`, `frame`, `toRdf`; `fromRdf` is a free function since its
//! input is quads, not a document).

mod options;

pub use options::Options;

use crate::compaction;
use crate::context::Context;
use crate::context_processing::{self, Stack};
use crate::document::ExpandedDocument;
use crate::error::Error;
use crate::expansion;
use crate::flattening::{self, NodeMap};
use crate::framing;
use crate::loader::Loader;
use crate::object::{IndexedObject, Literal, Node, Object, Value as ObjectValue};
use crate::rdf;
use crate::warning::Handler;
use json_syntax::{Object as JsonObject, Value as Json};

/// Expands, compacts, flattens, frames and RDF-converts a JSON-LD
/// document.
///
/// Implemented for [`json_syntax::Value`] rather than a dedicated
/// document type, since every operation's input is "a JSON-LD document",
/// i.e. plain JSON (`spec.md` §6).
pub trait JsonLdProcessor {
	async fn expand(
		&self,
		loader: &impl Loader,
		options: Options,
		warnings: &mut impl Handler,
	) -> Result<ExpandedDocument, Error>;

	async fn compact(
		&self,
		context: &Json,
		loader: &impl Loader,
		options: Options,
		warnings: &mut impl Handler,
	) -> Result<Json, Error>;

	async fn flatten(
		&self,
		context: Option<&Json>,
		loader: &impl Loader,
		options: Options,
		warnings: &mut impl Handler,
	) -> Result<Json, Error>;

	async fn frame(
		&self,
		frame_document: &Json,
		loader: &impl Loader,
		options: Options,
		warnings: &mut impl Handler,
	) -> Result<Json, Error>;

	async fn to_rdf(
		&self,
		loader: &impl Loader,
		options: Options,
		warnings: &mut impl Handler,
	) -> Result<Vec<rdf::Quad>, Error>;
}

impl JsonLdProcessor for Json {
	async fn expand(
		&self,
		loader: &impl Loader,
		options: Options,
		warnings: &mut impl Handler,
	) -> Result<ExpandedDocument, Error> {
		let active_context = options.initial_context(loader).await?;
		let expanded = expansion::expand_document(
			&active_context,
			self,
			options.base.as_deref(),
			loader,
			options.expansion_options(),
			warnings,
		)
		.await?;
		Ok(expanded)
	}

	async fn compact(
		&self,
		context: &Json,
		loader: &impl Loader,
		options: Options,
		warnings: &mut impl Handler,
	) -> Result<Json, Error> {
		let expanded = JsonLdProcessor::expand(self, loader, options.clone(), warnings).await?;
		let active_context = options.process_context(context, loader).await?;
		Ok(compaction::compact_document(
			&active_context,
			Some(context),
			&expanded,
			options.base.as_deref(),
			loader,
			options.compaction_options(),
		)
		.await?)
	}

	async fn flatten(
		&self,
		context: Option<&Json>,
		loader: &impl Loader,
		options: Options,
		warnings: &mut impl Handler,
	) -> Result<Json, Error> {
		let expanded = JsonLdProcessor::expand(self, loader, options.clone(), warnings).await?;
		let node_map = flattening::flatten(&expanded)?;
		let flattened: ExpandedDocument = node_map.merged().into_iter().collect();

		match context {
			Some(ctx) => {
				let active_context = options.process_context(ctx, loader).await?;
				Ok(compaction::compact_document(
					&active_context,
					Some(ctx),
					&flattened,
					options.base.as_deref(),
					loader,
					options.compaction_options(),
				)
				.await?)
			}
			None => Ok(document_to_json(&flattened)),
		}
	}

	async fn frame(
		&self,
		frame_document: &Json,
		loader: &impl Loader,
		options: Options,
		warnings: &mut impl Handler,
	) -> Result<Json, Error> {
		let expanded = JsonLdProcessor::expand(self, loader, options.clone(), warnings).await?;
		let node_map = flattening::flatten(&expanded)?;

		let frame_context = options.initial_context(loader).await?;
		let expanded_frame = expansion::expand_document(
			&frame_context,
			frame_document,
			options.base.as_deref(),
			loader,
			options.expansion_options(),
			warnings,
		)
		.await?;
		let frame_json = document_to_json(&expanded_frame);

		Ok(framing::frame(&node_map, &frame_json, options.framing_options())?)
	}

	async fn to_rdf(
		&self,
		loader: &impl Loader,
		options: Options,
		warnings: &mut impl Handler,
	) -> Result<Vec<rdf::Quad>, Error> {
		let expanded = JsonLdProcessor::expand(self, loader, options.clone(), warnings).await?;
		let node_map = flattening::flatten(&expanded)?;
		Ok(rdf::quads(&node_map, options.rdf_options())?)
	}
}

/// Rebuilds a document from RDF quads (`spec.md` §6's `fromRdf`).
///
/// Returns the flattened expanded-form array; pass `context` to compact
/// it in the same step.
pub async fn from_rdf(
	quads: &[rdf::Quad],
	context: Option<&Json>,
	loader: &impl Loader,
	options: Options,
) -> Result<Json, Error> {
	let node_map: NodeMap = rdf::from_rdf(quads);
	let document: ExpandedDocument = node_map.merged().into_iter().collect();

	match context {
		Some(ctx) => {
			let active_context = options.process_context(ctx, loader).await?;
			Ok(compaction::compact_document(
				&active_context,
				Some(ctx),
				&document,
				options.base.as_deref(),
				loader,
				options.compaction_options(),
			)
			.await?)
		}
		None => Ok(document_to_json(&document)),
	}
}

/// Serializes a whole expanded document back into a plain JSON array,
/// one [`object_to_json`] call per top-level object.
pub fn document_to_json(document: &ExpandedDocument) -> Json {
	Json::Array(document.objects().iter().map(object_to_json).collect())
}

/// Serializes one expanded-form object back into plain JSON, the
/// inverse of [`expansion::expand_element`] restricted to the data
/// expansion already produced (no re-resolution of terms).
pub fn object_to_json(object: &IndexedObject) -> Json {
	match object.inner() {
		Object::Value(value) => value_to_json(value, object.index()),
		Object::Node(node) => with_index(node_to_json(node), object.index()),
		Object::List(list) => {
			let mut obj = JsonObject::new();
			obj.insert("@list".into(), Json::Array(list.iter().map(object_to_json).collect()));
			with_index(Json::Object(obj), object.index())
		}
	}
}

fn with_index(value: Json, index: Option<&str>) -> Json {
	match (value, index) {
		(Json::Object(mut obj), Some(idx)) => {
			obj.insert("@index".into(), Json::String(idx.to_owned().into()));
			Json::Object(obj)
		}
		(value, _) => value,
	}
}

fn node_to_json(node: &Node) -> Json {
	let mut obj = JsonObject::new();
	if let Some(id) = &node.id {
		obj.insert("@id".into(), Json::String(id.as_str().into()));
	}
	if !node.types.is_empty() {
		let types: Vec<Json> = node.types.iter().map(|t| Json::String(t.as_str().into())).collect();
		obj.insert("@type".into(), Json::Array(types.into_iter().collect()));
	}
	for (property, values) in node.properties() {
		obj.insert(property.as_str().into(), Json::Array(values.iter().map(object_to_json).collect()));
	}
	if !node.reverse_properties.is_empty() {
		let mut rev = JsonObject::new();
		for (property, values) in &node.reverse_properties {
			rev.insert(property.as_str().into(), Json::Array(values.iter().map(object_to_json).collect()));
		}
		obj.insert("@reverse".into(), Json::Object(rev));
	}
	if let Some(graph) = &node.graph {
		obj.insert("@graph".into(), Json::Array(graph.iter().map(object_to_json).collect()));
	}
	if let Some(included) = &node.included {
		let items: Vec<Json> =
			included.iter().map(|n| object_to_json(&IndexedObject::from(n.clone()))).collect();
		obj.insert("@included".into(), Json::Array(items.into_iter().collect()));
	}
	Json::Object(obj)
}

fn value_to_json(value: &ObjectValue, index: Option<&str>) -> Json {
	let mut obj = JsonObject::new();
	match value {
		ObjectValue::Literal(lit, datatype) => {
			obj.insert("@value".into(), literal_to_json(lit));
			if let Some(dt) = datatype {
				obj.insert("@type".into(), Json::String(dt.as_str().into()));
			}
		}
		ObjectValue::LangString(lang) => {
			obj.insert("@value".into(), Json::String(lang.data.as_str().into()));
			if let Some(language) = &lang.language {
				obj.insert("@language".into(), Json::String(language.as_str().into()));
			}
			if let Some(direction) = lang.direction {
				obj.insert("@direction".into(), Json::String(direction.as_str().into()));
			}
		}
		ObjectValue::Json(json) => {
			obj.insert("@value".into(), json.clone());
			obj.insert("@type".into(), Json::String("@json".into()));
		}
	}
	if let Some(idx) = index {
		obj.insert("@index".into(), Json::String(idx.to_owned().into()));
	}
	Json::Object(obj)
}

fn literal_to_json(lit: &Literal) -> Json {
	match lit {
		Literal::String(s) => Json::String(s.as_str().into()),
		Literal::Boolean(b) => Json::Boolean(*b),
		Literal::Number(n) => Json::Number(n.clone()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::loader::NoLoader;
	use crate::warning::CollectingHandler;

	fn parse(s: &str) -> Json {
		Json::parse_str(s).expect("valid json").0
	}

	#[tokio::test]
	async fn expand_then_flatten_round_trips_through_the_facade() {
		let document = parse(r#"{"@context":{"ex":"http://example.org/"},"@id":"ex:a","ex:name":"A"}"#);
		let mut warnings = CollectingHandler::default();
		let flattened = document
			.flatten(None, &NoLoader, Options::default(), &mut warnings)
			.await
			.unwrap();
		let array = crate::json_util::as_array(&flattened);
		assert_eq!(array.len(), 1);
	}

	#[tokio::test]
	async fn to_rdf_produces_one_quad_per_property() {
		let document = parse(r#"{"@context":{"ex":"http://example.org/"},"@id":"ex:a","ex:name":"A"}"#);
		let mut warnings = CollectingHandler::default();
		let quads = document.to_rdf(&NoLoader, Options::default(), &mut warnings).await.unwrap();
		assert_eq!(quads.len(), 1);
	}
}
