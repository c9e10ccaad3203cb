//! Expansion Algorithm (`spec.md` §4.2): turns a compact or unclear JSON-LD
//! document into its verbose, context-free expanded form.

mod error;
mod options;
pub mod streaming;

pub use error::Error;
pub use options::{Options, Policy};

use crate::container::{Container, ContainerKind};
use crate::context::{Context, TypeMapping};
use crate::context_processing;
use crate::direction::Direction;
use crate::document::ExpandedDocument;
use crate::id::Id;
use crate::json_util;
use crate::keyword::{looks_like_keyword, Keyword};
use crate::loader::Loader;
use crate::nullable::Nullable;
use crate::object::{
	Indexed, IndexedNode, IndexedObject, LangString, List as ObjList, Literal, Node, Object,
	Value as ObjectValue,
};
use crate::term::Term;
use crate::warning::{Handler, Warning};
use iref::Iri;
use json_syntax::{Object as JsonObject, Value as Json};

/// Expands a whole document: [`expand_element`] with no active property,
/// followed by the top-level unwrapping rule ("if, after expansion, the
/// result is a single node object containing only `@graph`, replace it
/// with the value of `@graph`").
pub async fn expand_document(
	active_context: &Context,
	document: &Json,
	base_url: Option<&Iri>,
	loader: &impl Loader,
	options: Options,
	warnings: &mut impl Handler,
) -> Result<ExpandedDocument, Error> {
	let expanded =
		expand_element(active_context, None, document, base_url, loader, options, warnings).await?;

	let objects = if expanded.len() == 1 {
		let item = expanded.into_iter().next().unwrap();
		let (object, index) = item.into_parts();
		match object {
			Object::Node(node)
				if index.is_none()
					&& node.id.is_none()
					&& node.types.is_empty()
					&& node.properties.is_empty()
					&& node.reverse_properties.is_empty()
					&& node.included.is_none()
					&& node.graph.is_some() =>
			{
				node.graph.unwrap()
			}
			other => vec![IndexedObject::new(other, index)],
		}
	} else {
		expanded
	};

	Ok(ExpandedDocument::new(objects))
}

/// Expands one element: an array (mapped and flattened), a node/value/list/
/// set object, or a scalar coerced through `active_property`'s term
/// definition.
pub async fn expand_element(
	active_context: &Context,
	active_property: Option<&str>,
	element: &Json,
	base_url: Option<&Iri>,
	loader: &impl Loader,
	options: Options,
	warnings: &mut impl Handler,
) -> Result<Vec<IndexedObject>, Error> {
	match element {
		Json::Null => Ok(Vec::new()),
		Json::Array(items) => {
			let list_container = active_property
				.map(|p| active_context.container(p).contains(ContainerKind::List))
				.unwrap_or(false);
			let mut result = Vec::new();
			for item in items.iter() {
				let expanded = Box::pin(expand_element(
					active_context,
					active_property,
					item,
					base_url,
					loader,
					options,
					warnings,
				))
				.await?;
				if list_container && expanded.iter().any(|o| o.is_list()) {
					return Err(Error::ListOfLists);
				}
				result.extend(expanded);
			}
			Ok(result)
		}
		Json::Object(obj) => {
			expand_node_object(active_context, active_property, obj, base_url, loader, options, warnings)
				.await
		}
		scalar => {
			let Some(prop) = active_property else {
				return Ok(Vec::new());
			};
			if prop == "@graph" {
				return Ok(Vec::new());
			}
			Ok(vec![Indexed::new(expand_scalar(active_context, prop, scalar)?, None)])
		}
	}
}

/// Expands a scalar (not already wrapped in a value object) against the
/// type/language/direction coercion of `active_property`'s term
/// definition (`spec.md` §4.2's inline value expansion).
///
/// A string under `@type: @id`/`@vocab` coercion becomes a node reference;
/// everything else becomes a value object.
fn expand_scalar(active_context: &Context, active_property: &str, scalar: &Json) -> Result<Object, Error> {
	let def = active_context.get(active_property);
	let type_mapping = def.and_then(|d| d.type_mapping.as_ref());

	if let Json::String(s) = scalar {
		match type_mapping {
			Some(TypeMapping::Id) => {
				if let Some(Term::Id(id)) = active_context.expand_iri(s, true, false) {
					return Ok(Object::Node(Node::with_id(id)));
				}
			}
			Some(TypeMapping::Vocab) => {
				if let Some(Term::Id(id)) = active_context.expand_iri(s, true, true) {
					return Ok(Object::Node(Node::with_id(id)));
				}
			}
			_ => {}
		}
	}

	if let Json::String(s) = scalar {
		let language = match def.and_then(|d| d.language_mapping.clone()) {
			Some(Nullable::Null) => None,
			Some(Nullable::Some(l)) => Some(l),
			None => active_context.default_language().map(str::to_owned),
		};
		let direction = match def.and_then(|d| d.direction_mapping) {
			Some(Nullable::Null) => None,
			Some(Nullable::Some(d)) => Some(d),
			None => active_context.default_base_direction(),
		};
		if language.is_some() || direction.is_some() {
			return Ok(Object::Value(ObjectValue::LangString(LangString::new(s.clone(), language, direction))));
		}
		let datatype = match type_mapping {
			Some(TypeMapping::Iri(iri)) => Some(iri.clone()),
			_ => None,
		};
		return Ok(Object::Value(ObjectValue::Literal(Literal::String(s.clone()), datatype)));
	}

	if let Some(TypeMapping::Json) = type_mapping {
		return Ok(Object::Value(ObjectValue::Json(scalar.clone())));
	}

	let literal = match scalar {
		Json::Boolean(b) => Literal::Boolean(*b),
		Json::Number(n) => Literal::Number(n.clone()),
		other => return Err(Error::InvalidValueObjectValue(format!("{other:?}"))),
	};
	let datatype = match type_mapping {
		Some(TypeMapping::Iri(iri)) => Some(iri.clone()),
		_ => None,
	};
	Ok(Object::Value(ObjectValue::Literal(literal, datatype)))
}

async fn expand_node_object(
	outer_context: &Context,
	active_property: Option<&str>,
	obj: &JsonObject,
	base_url: Option<&Iri>,
	loader: &impl Loader,
	options: Options,
	warnings: &mut impl Handler,
) -> Result<Vec<IndexedObject>, Error> {
	let mut active_context = outer_context.clone();

	if let Some(prop) = active_property {
		if let Some(def) = outer_context.get(prop) {
			if let Some(local) = def.local_context.clone() {
				active_context = context_processing::process(
					&active_context,
					&local,
					def.base_url.as_deref(),
					loader,
					context_processing::Options::default(),
					&mut context_processing::Stack::new(),
				)
				.await?;
			}
		}
	}

	if let Some(ctx_value) = json_util::get(obj, "@context") {
		active_context = context_processing::process(
			&active_context,
			&ctx_value,
			base_url,
			loader,
			context_processing::Options::default(),
			&mut context_processing::Stack::new(),
		)
		.await?;
	}

	if let Some(type_value) = json_util::get(obj, "@type") {
		let mut types = json_util::as_str_array(&type_value);
		types.sort();
		for ty in types {
			if let Some(def) = active_context.get(&ty).cloned() {
				if let Some(local) = def.local_context.clone() {
					active_context = context_processing::process(
						&active_context,
						&local,
						def.base_url.as_deref(),
						loader,
						context_processing::Options::default(),
						&mut context_processing::Stack::new(),
					)
					.await?;
				}
			}
		}
	}

	let has = |k: &str| json_util::get(obj, k).is_some();

	if has("@value") {
		if has("@list") || has("@set") || has("@graph") {
			return Err(Error::CollidingKeywords("@value".to_owned()));
		}
		return match expand_value_object(&active_context, obj)? {
			Some(v) => {
				let index = json_util::get(obj, "@index").and_then(|i| i.as_str().map(str::to_owned));
				Ok(vec![IndexedObject::value(v, index)])
			}
			None => Ok(Vec::new()),
		};
	}

	if has("@list") {
		let other_keys = json_util::ordered_entries(obj)
			.into_iter()
			.any(|(k, _)| !matches!(k.as_str(), "@list" | "@index"));
		if other_keys {
			return Err(Error::InvalidSetOrListObject);
		}
		let list_value = json_util::get(obj, "@list").unwrap();
		let mut items = Vec::new();
		for item in json_util::as_array(&list_value) {
			let expanded = Box::pin(expand_element(
				&active_context,
				active_property,
				item,
				base_url,
				loader,
				options,
				warnings,
			))
			.await?;
			if expanded.iter().any(|o| o.is_list()) {
				return Err(Error::ListOfLists);
			}
			items.extend(expanded);
		}
		let index = json_util::get(obj, "@index").and_then(|i| i.as_str().map(str::to_owned));
		return Ok(vec![IndexedObject::list(ObjList::new(items), index)]);
	}

	if has("@set") {
		let other_keys = json_util::ordered_entries(obj)
			.into_iter()
			.any(|(k, _)| !matches!(k.as_str(), "@set" | "@index"));
		if other_keys {
			return Err(Error::InvalidSetOrListObject);
		}
		let set_value = json_util::get(obj, "@set").unwrap();
		return Box::pin(expand_element(
			&active_context,
			active_property,
			&set_value,
			base_url,
			loader,
			options,
			warnings,
		))
		.await;
	}

	let mut node = Node::new();
	let mut index = None;

	for (key, value) in flatten_nest(obj) {
		if key == "@context" || key == "@nest" {
			continue;
		}

		match Keyword::try_from(key.as_str()) {
			Ok(Keyword::Id) => {
				let s = value.as_str().ok_or_else(|| Error::InvalidIdValue(format!("{value:?}")))?;
				let term = active_context
					.expand_iri(s, true, false)
					.ok_or_else(|| Error::InvalidIdValue(s.to_owned()))?;
				let id = term.as_id().cloned().ok_or_else(|| Error::InvalidIdValue(s.to_owned()))?;
				node.id = Some(id);
			}
			Ok(Keyword::Type) => {
				for ty in json_util::as_str_array(&value) {
					let term = active_context
						.expand_iri(&ty, true, true)
						.ok_or_else(|| Error::InvalidTypeValue(ty.clone()))?;
					let id = term.as_id().cloned().ok_or_else(|| Error::InvalidTypeValue(ty.clone()))?;
					node.insert_type(id);
				}
			}
			Ok(Keyword::Graph) => {
				let items = Box::pin(expand_element(
					&active_context,
					Some("@graph"),
					&value,
					base_url,
					loader,
					options,
					warnings,
				))
				.await?;
				node.graph = Some(items);
			}
			Ok(Keyword::Included) => {
				let items =
					Box::pin(expand_element(&active_context, None, &value, base_url, loader, options, warnings))
						.await?;
				let mut included = Vec::new();
				for item in items {
					let (object, idx) = item.into_parts();
					match object {
						Object::Node(n) => included.push(IndexedNode::new(n, idx)),
						_ => return Err(Error::InvalidIncludedValue),
					}
				}
				node.included = Some(included);
			}
			Ok(Keyword::Reverse) => {
				let Json::Object(rev_obj) = &value else {
					return Err(Error::InvalidReversePropertyMap);
				};
				for (rkey, rvalue) in json_util::ordered_entries(rev_obj) {
					let Some(Term::Id(id)) = active_context.expand_iri(&rkey, false, true) else {
						continue;
					};
					let expanded = Box::pin(expand_element(
						&active_context,
						Some(&rkey),
						&rvalue,
						base_url,
						loader,
						options,
						warnings,
					))
					.await?;
					for item in expanded {
						if !item.is_node() {
							return Err(Error::InvalidReversePropertyValue(rkey.clone()));
						}
						node.insert_reverse_property(id.clone(), item);
					}
				}
			}
			Ok(Keyword::Index) => {
				index = Some(
					value
						.as_str()
						.ok_or_else(|| Error::InvalidIndexValue(format!("{value:?}")))?
						.to_owned(),
				);
			}
			Ok(Keyword::Value) | Ok(Keyword::List) | Ok(Keyword::Set) => unreachable!(
				"@value/@list/@set are handled before the per-key loop"
			),
			Ok(_) => {
				// Keywords with no meaning outside framing/annotation
				// (@annotation, @preserve, frame keywords, @base, @vocab,
				// @language, @direction, @version, @import, @propagate,
				// @protected, @prefix, @json, @none) carry no expansion
				// behavior of their own in a plain node object.
			}
			Err(_) => {
				if looks_like_keyword(&key) {
					warnings.handle(Warning::UnknownKeywordLikeKey(key));
					continue;
				}
				let Some(term) = active_context.expand_iri(&key, false, true) else {
					continue;
				};
				let Term::Id(prop_id) = term else { continue };
				let reverse = active_context.reverse(&key);
				let expanded_values =
					expand_property_value(&active_context, &key, &value, base_url, loader, options, warnings)
						.await?;
				for v in expanded_values {
					if reverse {
						node.insert_reverse_property(prop_id.clone(), v);
					} else {
						node.insert_property(prop_id.clone(), v);
					}
				}
			}
		}
	}

	Ok(vec![IndexedObject::node(node, index)])
}

/// Flattens `@nest`-keyed sub-objects into the entries of the object that
/// contains them, so the main per-key loop never has to special-case
/// nesting (`spec.md` §4.2's "nested properties").
///
/// Does not validate that a property found this way actually declares a
/// matching `@nest` term in its own definition; every `@nest` block is
/// folded in regardless of which term it groups. See `DESIGN.md`.
fn flatten_nest(obj: &JsonObject) -> Vec<(String, Json)> {
	let mut out = Vec::new();
	for (key, value) in json_util::ordered_entries(obj) {
		if key == "@nest" {
			for item in json_util::as_array(&value) {
				if let Json::Object(nested) = item {
					out.extend(flatten_nest(nested));
				}
			}
		} else {
			out.push((key, value));
		}
	}
	out
}

/// Expands a property's raw value, applying whatever `@container`
/// transformation its term definition requests (`spec.md` §4.2's
/// container-mapping-specific steps) before falling back to plain
/// [`expand_element`].
async fn expand_property_value(
	active_context: &Context,
	term: &str,
	value: &Json,
	base_url: Option<&Iri>,
	loader: &impl Loader,
	options: Options,
	warnings: &mut impl Handler,
) -> Result<Vec<IndexedObject>, Error> {
	let container = active_context.container(term);

	if container.contains(ContainerKind::Language) {
		return expand_language_map(active_context, term, value, warnings);
	}

	if container.contains(ContainerKind::Graph) {
		return expand_graph_container(active_context, term, value, base_url, loader, options, warnings, &container)
			.await;
	}

	if container.contains(ContainerKind::Index) {
		return expand_index_or_id_map(
			active_context,
			term,
			value,
			base_url,
			loader,
			options,
			warnings,
			IndexMapKind::Index,
		)
		.await;
	}

	if container.contains(ContainerKind::Id) {
		return expand_index_or_id_map(
			active_context,
			term,
			value,
			base_url,
			loader,
			options,
			warnings,
			IndexMapKind::Id,
		)
		.await;
	}

	if container.contains(ContainerKind::Type) {
		return expand_type_map(active_context, term, value, base_url, loader, options, warnings).await;
	}

	let mut expanded =
		Box::pin(expand_element(active_context, Some(term), value, base_url, loader, options, warnings)).await?;

	let already_list = matches!(value, Json::Object(o) if json_util::get(o, "@list").is_some());
	if container.contains(ContainerKind::List) && !already_list {
		if expanded.iter().any(|o| o.is_list()) {
			return Err(Error::ListOfLists);
		}
		expanded = vec![IndexedObject::list(ObjList::new(expanded), None)];
	}

	Ok(expanded)
}

fn expand_language_map(
	active_context: &Context,
	term: &str,
	value: &Json,
	warnings: &mut impl Handler,
) -> Result<Vec<IndexedObject>, Error> {
	let Json::Object(map) = value else {
		return Err(Error::InvalidLanguageMapValue);
	};
	let default_direction = active_context
		.get(term)
		.and_then(|d| d.direction_mapping)
		.and_then(Nullable::option)
		.or_else(|| active_context.default_base_direction());

	let mut result = Vec::new();
	for (lang_key, lang_value) in json_util::ordered_entries(map) {
		let language = if lang_key == "@none" { None } else { Some(lang_key.clone()) };
		if let Some(lang) = &language {
			if !is_well_formed_language_tag(lang) {
				warnings.handle(Warning::MalformedLanguageTag(lang.clone()));
			}
		}
		for item in json_util::as_array(&lang_value) {
			let s = match item {
				Json::String(s) => s.clone(),
				Json::Null => continue,
				_ => return Err(Error::InvalidLanguageMapValue),
			};
			result.push(IndexedObject::value(
				ObjectValue::LangString(LangString::new(s, language.clone(), default_direction)),
				None,
			));
		}
	}
	Ok(result)
}

fn is_well_formed_language_tag(s: &str) -> bool {
	!s.is_empty()
		&& s.split('-').all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric()))
}

#[derive(Clone, Copy)]
enum IndexMapKind {
	Index,
	Id,
}

async fn expand_index_or_id_map(
	active_context: &Context,
	term: &str,
	value: &Json,
	base_url: Option<&Iri>,
	loader: &impl Loader,
	options: Options,
	warnings: &mut impl Handler,
	kind: IndexMapKind,
) -> Result<Vec<IndexedObject>, Error> {
	let Json::Object(map) = value else {
		return Err(Error::InvalidIndexValue(format!("{value:?}")));
	};

	let mut result = Vec::new();
	for (map_key, map_value) in json_util::ordered_entries(map) {
		let mut expanded = Box::pin(expand_element(
			active_context,
			Some(term),
			&map_value,
			base_url,
			loader,
			options,
			warnings,
		))
		.await?;

		for item in &mut expanded {
			match kind {
				IndexMapKind::Index => {
					if item.index().is_none() && map_key != "@none" {
						item.set_index(Some(map_key.clone()));
					}
				}
				IndexMapKind::Id => {
					if map_key != "@none" {
						if let Object::Node(n) = item.inner_mut() {
							if n.id.is_none() {
								if let Some(Term::Id(id)) = active_context.expand_iri(&map_key, true, false) {
									n.id = Some(id);
								}
							}
						}
					}
				}
			}
		}
		result.extend(expanded);
	}
	Ok(result)
}

async fn expand_type_map(
	active_context: &Context,
	term: &str,
	value: &Json,
	base_url: Option<&Iri>,
	loader: &impl Loader,
	options: Options,
	warnings: &mut impl Handler,
) -> Result<Vec<IndexedObject>, Error> {
	let Json::Object(map) = value else {
		return Err(Error::InvalidTypeValue(format!("{value:?}")));
	};

	let mut result = Vec::new();
	for (type_key, map_value) in json_util::ordered_entries(map) {
		let type_id = if type_key == "@none" {
			None
		} else {
			active_context.expand_iri(&type_key, false, true).and_then(|t| t.as_id().cloned())
		};
		let mut expanded = Box::pin(expand_element(
			active_context,
			Some(term),
			&map_value,
			base_url,
			loader,
			options,
			warnings,
		))
		.await?;
		if let Some(ty) = type_id {
			for item in &mut expanded {
				if let Object::Node(n) = item.inner_mut() {
					n.insert_type(ty.clone());
				}
			}
		}
		result.extend(expanded);
	}
	Ok(result)
}

async fn expand_graph_container(
	active_context: &Context,
	term: &str,
	value: &Json,
	base_url: Option<&Iri>,
	loader: &impl Loader,
	options: Options,
	warnings: &mut impl Handler,
	container: &Container,
) -> Result<Vec<IndexedObject>, Error> {
	let Json::Object(map) = value else {
		let items =
			Box::pin(expand_element(active_context, Some(term), value, base_url, loader, options, warnings))
				.await?;
		let mut node = Node::new();
		node.graph = Some(items);
		return Ok(vec![IndexedObject::node(node, None)]);
	};

	let mut result = Vec::new();
	for (map_key, map_value) in json_util::ordered_entries(map) {
		let items = Box::pin(expand_element(
			active_context,
			Some(term),
			&map_value,
			base_url,
			loader,
			options,
			warnings,
		))
		.await?;
		let mut node = Node::new();
		let mut index = None;
		if container.contains(ContainerKind::Id) && map_key != "@none" {
			if let Some(Term::Id(id)) = active_context.expand_iri(&map_key, true, false) {
				node.id = Some(id);
			}
		} else if container.contains(ContainerKind::Index) && map_key != "@none" {
			index = Some(map_key.clone());
		}
		node.graph = Some(items);
		result.push(IndexedObject::node(node, index));
	}
	Ok(result)
}

/// Expands a `@value` object into an [`ObjectValue`], or `None` if
/// `@value` is `null` (the whole value object is then dropped,
/// `spec.md` §4.2).
fn expand_value_object(active_context: &Context, obj: &JsonObject) -> Result<Option<ObjectValue>, Error> {
	for (key, _) in json_util::ordered_entries(obj) {
		if !matches!(key.as_str(), "@value" | "@type" | "@language" | "@direction" | "@index") {
			return Err(Error::InvalidValueObject);
		}
	}

	let value = json_util::get(obj, "@value").unwrap();
	if matches!(value, Json::Null) {
		return Ok(None);
	}
	if matches!(value, Json::Array(_) | Json::Object(_)) {
		return Err(Error::InvalidValueObjectValue(format!("{value:?}")));
	}

	let type_value = json_util::get(obj, "@type");
	let language_value = json_util::get(obj, "@language").and_then(|v| v.as_str().map(str::to_owned));
	let direction_value = json_util::get(obj, "@direction");

	if let Some(t) = &type_value {
		let is_json = t.as_str() == Some("@json");
		if !is_json && t.as_str().is_none() {
			return Err(Error::InvalidTypedValue);
		}
		if is_json {
			return Ok(Some(ObjectValue::Json(value)));
		}
		if language_value.is_some() {
			return Err(Error::InvalidValueObject);
		}
	}

	if let Json::String(s) = &value {
		let direction = match &direction_value {
			None | Some(Json::Null) => None,
			Some(Json::String(d)) => {
				Some(Direction::try_from(d.as_str()).map_err(|_| Error::InvalidValueObject)?)
			}
			_ => return Err(Error::InvalidValueObject),
		};
		if language_value.is_some() || direction.is_some() {
			return Ok(Some(ObjectValue::LangString(LangString::new(s.clone(), language_value, direction))));
		}
	} else if language_value.is_some() || direction_value.is_some() {
		return Err(Error::InvalidLanguageTaggedValue);
	}

	let datatype = match &type_value {
		Some(t) => {
			let s = t.as_str().ok_or(Error::InvalidTypedValue)?;
			match active_context.expand_iri(s, true, false) {
				Some(Term::Id(Id::Iri(iri))) => Some(iri),
				_ => return Err(Error::InvalidTypedValue),
			}
		}
		None => None,
	};

	let literal = match value {
		Json::String(s) => Literal::String(s),
		Json::Boolean(b) => Literal::Boolean(b),
		Json::Number(n) => Literal::Number(n),
		_ => unreachable!("array/object @value already rejected above"),
	};
	Ok(Some(ObjectValue::Literal(literal, datatype)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::loader::NoLoader;
	use crate::warning::CollectingHandler;
	use iref::IriBuf;

	fn parse(s: &str) -> Json {
		Json::parse_str(s).expect("valid json").0
	}

	async fn build_context(local: &str) -> Context {
		context_processing::process(
			&Context::default(),
			&parse(local),
			None,
			&NoLoader,
			context_processing::Options::default(),
			&mut context_processing::Stack::new(),
		)
		.await
		.unwrap()
	}

	#[tokio::test]
	async fn expands_a_plain_property() {
		let active = build_context(r#"{"@vocab": "http://example.org/"}"#).await;
		let document = parse(r#"{"name": "Manu"}"#);
		let mut warnings = CollectingHandler::default();
		let result = expand_document(&active, &document, None, &NoLoader, Options::default(), &mut warnings)
			.await
			.unwrap();
		let node = result.objects()[0].as_node().unwrap();
		let values = node.properties.get(&Id::iri(IriBuf::new("http://example.org/name".to_string()).unwrap()));
		assert!(values.is_some());
	}

	#[tokio::test]
	async fn expands_a_value_object() {
		let active = Context::default();
		let document = parse(r#"{"http://example.org/age": {"@value": 30}}"#);
		let mut warnings = CollectingHandler::default();
		let result = expand_document(&active, &document, None, &NoLoader, Options::default(), &mut warnings)
			.await
			.unwrap();
		let node = result.objects()[0].as_node().unwrap();
		let age = Id::iri(IriBuf::new("http://example.org/age".to_string()).unwrap());
		let values = &node.properties[&age];
		assert_eq!(values.len(), 1);
		assert!(values[0].as_value().is_some());
	}

	#[tokio::test]
	async fn rejects_list_of_lists() {
		let active = build_context(r#"{"items": {"@id": "http://example.org/items", "@container": "@list"}}"#)
			.await;
		let document = parse(r#"{"items": [{"@list": [1]}, {"@list": [2]}]}"#);
		let mut warnings = CollectingHandler::default();
		let err = expand_document(&active, &document, None, &NoLoader, Options::default(), &mut warnings).await;
		assert!(err.is_err());
	}

	#[tokio::test]
	async fn top_level_graph_only_object_unwraps() {
		let active = Context::default();
		let document = parse(r#"{"@graph": [{"http://example.org/a": "b"}]}"#);
		let mut warnings = CollectingHandler::default();
		let result = expand_document(&active, &document, None, &NoLoader, Options::default(), &mut warnings)
			.await
			.unwrap();
		assert_eq!(result.objects().len(), 1);
		assert!(result.objects()[0].as_node().is_some());
	}
}
