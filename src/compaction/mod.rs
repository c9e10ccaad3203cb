//! Compaction Algorithm (`spec.md` §4.3): expanded form + context →
//! compact form, the inverse of [`crate::expansion`].

mod error;
mod options;

pub use error::Error;
pub use options::Options;

use crate::container::ContainerKind;
use crate::context::inverse::TypeOrLanguage;
use crate::context::{Context, TypeMapping};
use crate::document::ExpandedDocument;
use crate::id::Id;
use crate::json_util;
use crate::loader::Loader;
use crate::object::{IndexedObject, Literal, Node, Object, Value as ObjectValue};
use crate::term::Term;
use iref::Iri;
use json_syntax::{Object as JsonObject, Value as Json};

/// Compacts a whole expanded document against `active_context`.
///
/// `context_value`, if given, is the raw local context the caller built
/// `active_context` from; it is attached verbatim as the result's
/// `@context` entry. Passing `None` produces bare compacted output with
/// no `@context` (useful when the caller will merge the result into a
/// larger document that already carries one).
pub async fn compact_document(
	active_context: &Context,
	context_value: Option<&Json>,
	document: &ExpandedDocument,
	base_url: Option<&Iri>,
	loader: &impl Loader,
	options: Options,
) -> Result<Json, Error> {
	let mut items = Vec::new();
	for object in document.objects() {
		if let Some(compacted) =
			Box::pin(compact_element(active_context, None, object, base_url, loader, options)).await?
		{
			items.push(compacted);
		}
	}

	let mut result = if items.len() == 1 && options.compact_arrays {
		items.into_iter().next().unwrap()
	} else if items.is_empty() {
		Json::Array(std::iter::empty().collect())
	} else {
		Json::Array(items.into_iter().collect())
	};

	if matches!(result, Json::Array(_)) {
		let mut obj = JsonObject::new();
		obj.insert("@graph".into(), result);
		result = Json::Object(obj);
	}

	if let Some(ctx) = context_value {
		if let Json::Object(obj) = &mut result {
			let mut reordered = JsonObject::new();
			reordered.insert("@context".into(), ctx.clone());
			for json_syntax::object::Entry { key, value } in obj.clone() {
				reordered.insert(key, value);
			}
			result = Json::Object(reordered);
		}
	}

	Ok(result)
}

/// Compacts one expanded object, or `None` if it compacts away to nothing
/// (an empty `@value: null` never reaches here, but an empty `@list` with
/// no items and a `@list`-containered property does).
pub async fn compact_element(
	active_context: &Context,
	active_property: Option<&str>,
	element: &IndexedObject,
	base_url: Option<&Iri>,
	loader: &impl Loader,
	options: Options,
) -> Result<Option<Json>, Error> {
	match element.inner() {
		Object::Value(v) => Ok(Some(compact_value(active_context, active_property, v, element.index()))),
		Object::List(list) => {
			let mut items = Vec::new();
			for item in list.iter() {
				if let Some(c) =
					Box::pin(compact_element(active_context, active_property, item, base_url, loader, options))
						.await?
				{
					items.push(c);
				}
			}
			let container = active_property.map(|p| active_context.container(p)).unwrap_or_default();
			if container.contains(ContainerKind::List) {
				Ok(Some(if items.len() == 1 && options.compact_arrays {
					items.into_iter().next().unwrap()
				} else {
					Json::Array(items.into_iter().collect())
				}))
			} else {
				let mut obj = JsonObject::new();
				obj.insert("@list".into(), Json::Array(items.into_iter().collect()));
				Ok(Some(Json::Object(obj)))
			}
		}
		Object::Node(node) => {
			Box::pin(compact_node(active_context, active_property, node, base_url, loader, options))
				.await
				.map(Some)
		}
	}
}

async fn compact_node(
	active_context: &Context,
	active_property: Option<&str>,
	node: &Node,
	base_url: Option<&Iri>,
	loader: &impl Loader,
	options: Options,
) -> Result<Json, Error> {
	if node.is_node_reference() {
		if let Some(def) = active_property.and_then(|p| active_context.get(p)) {
			if matches!(def.type_mapping, Some(TypeMapping::Id) | Some(TypeMapping::Vocab)) {
				let id = node.id.as_ref().unwrap();
				return Ok(Json::String(compact_id(active_context, id).into()));
			}
		}
	}

	let mut obj = JsonObject::new();

	if let Some(id) = &node.id {
		obj.insert("@id".into(), Json::String(compact_id(active_context, id).into()));
	}

	if !node.types.is_empty() {
		let types: Vec<Json> = node
			.types
			.iter()
			.map(|t| Json::String(compact_type(active_context, t).into()))
			.collect();
		let value = if types.len() == 1 && options.compact_arrays {
			types.into_iter().next().unwrap()
		} else {
			Json::Array(types.into_iter().collect())
		};
		obj.insert("@type".into(), value);
	}

	for (prop, values) in node.properties() {
		compact_property(active_context, &mut obj, prop, values, false, base_url, loader, options).await?;
	}

	if !node.reverse_properties.is_empty() {
		let mut reverse_obj = JsonObject::new();
		for (prop, values) in node.reverse_properties.iter() {
			let term = find_term(active_context, prop, true);
			if let Some(def) = term.as_deref().and_then(|t| active_context.get(t)) {
				if def.reverse {
					compact_property(active_context, &mut obj, prop, values, false, base_url, loader, options)
						.await?;
					continue;
				}
			}
			compact_property(active_context, &mut reverse_obj, prop, values, true, base_url, loader, options)
				.await?;
		}
		if !reverse_obj.is_empty() {
			obj.insert("@reverse".into(), Json::Object(reverse_obj));
		}
	}

	if let Some(graph) = &node.graph {
		let mut items = Vec::new();
		for item in graph {
			if let Some(c) = Box::pin(compact_element(active_context, None, item, base_url, loader, options)).await?
			{
				items.push(c);
			}
		}
		let value = if items.len() == 1 && options.compact_arrays {
			items.into_iter().next().unwrap()
		} else {
			Json::Array(items.into_iter().collect())
		};
		obj.insert("@graph".into(), value);
	}

	if let Some(included) = &node.included {
		let mut items = Vec::new();
		for item in included {
			let node_item: IndexedObject = item.clone().into();
			if let Some(c) =
				Box::pin(compact_element(active_context, None, &node_item, base_url, loader, options)).await?
			{
				items.push(c);
			}
		}
		obj.insert("@included".into(), Json::Array(items.into_iter().collect()));
	}

	Ok(Json::Object(obj))
}

#[allow(clippy::too_many_arguments)]
async fn compact_property(
	active_context: &Context,
	obj: &mut JsonObject,
	prop: &Id,
	values: &[IndexedObject],
	reverse: bool,
	base_url: Option<&Iri>,
	loader: &impl Loader,
	options: Options,
) -> Result<(), Error> {
	if values.is_empty() {
		return Ok(());
	}

	let term_name = find_term(active_context, prop, reverse);
	let def = term_name.as_deref().and_then(|t| active_context.get(t));
	let container = def.map(|d| d.container.clone()).unwrap_or_default();
	let key = term_name.clone().unwrap_or_else(|| compact_id(active_context, prop));

	if container.contains(ContainerKind::Language)
		&& values.iter().all(|v| {
			matches!(
				v.inner(),
				Object::Value(ObjectValue::LangString(_))
					| Object::Value(ObjectValue::Literal(Literal::String(_), None))
			)
		}) {
		let mut map = JsonObject::new();
		for v in values {
			let (lang_key, text) = match v.inner() {
				Object::Value(ObjectValue::LangString(ls)) => {
					(ls.language.clone().unwrap_or_else(|| "@none".to_owned()), ls.data.clone())
				}
				Object::Value(ObjectValue::Literal(Literal::String(s), None)) => ("@none".to_owned(), s.clone()),
				_ => unreachable!("checked above"),
			};
			add_value(&mut map, &lang_key, Json::String(text.into()), container.contains(ContainerKind::Set));
		}
		obj.insert(key.as_str().into(), Json::Object(map));
		return Ok(());
	}

	if container.contains(ContainerKind::Index) && !container.contains(ContainerKind::Graph) {
		let mut map = JsonObject::new();
		for v in values {
			let idx = v.index().unwrap_or("@none").to_owned();
			if let Some(c) = Box::pin(compact_element(
				active_context,
				term_name.as_deref(),
				v,
				base_url,
				loader,
				options,
			))
			.await?
			{
				add_value(&mut map, &idx, c, container.contains(ContainerKind::Set));
			}
		}
		obj.insert(key.as_str().into(), Json::Object(map));
		return Ok(());
	}

	if container.contains(ContainerKind::Id) && !container.contains(ContainerKind::Graph) {
		let mut map = JsonObject::new();
		for v in values {
			let id_key =
				v.as_node().and_then(|n| n.id.as_ref()).map(|id| compact_id(active_context, id)).unwrap_or_else(
					|| "@none".to_owned(),
				);
			if let Some(Json::Object(o)) = Box::pin(compact_element(
				active_context,
				term_name.as_deref(),
				v,
				base_url,
				loader,
				options,
			))
			.await?
			{
				let mut without_id = JsonObject::new();
				for json_syntax::object::Entry { key: k, value: val } in o {
					if k.as_str() != "@id" {
						without_id.insert(k, val);
					}
				}
				add_value(&mut map, &id_key, Json::Object(without_id), container.contains(ContainerKind::Set));
			}
		}
		obj.insert(key.as_str().into(), Json::Object(map));
		return Ok(());
	}

	if container.contains(ContainerKind::Type) {
		let mut map = JsonObject::new();
		for v in values {
			let first_type = v.as_node().and_then(|n| n.types.first()).cloned();
			let ty_key =
				first_type.as_ref().map(|t| compact_type(active_context, t)).unwrap_or_else(|| "@none".to_owned());
			let mut reduced = v.as_node().cloned().unwrap_or_default();
			if let Some(t) = &first_type {
				reduced.types.retain(|other| other != t);
			}
			let compacted =
				Box::pin(compact_node(active_context, term_name.as_deref(), &reduced, base_url, loader, options))
					.await?;
			add_value(&mut map, &ty_key, compacted, container.contains(ContainerKind::Set));
		}
		obj.insert(key.as_str().into(), Json::Object(map));
		return Ok(());
	}

	let mut items = Vec::new();
	for v in values {
		if let Some(c) =
			Box::pin(compact_element(active_context, term_name.as_deref(), v, base_url, loader, options)).await?
		{
			items.push(c);
		}
	}
	let value = if items.len() == 1 && options.compact_arrays && !container.contains(ContainerKind::Set) {
		items.into_iter().next().unwrap()
	} else {
		Json::Array(items.into_iter().collect())
	};
	obj.insert(key.as_str().into(), value);
	Ok(())
}

/// Compacts a value object, inlining it to a bare scalar when the chosen
/// term's coercion already implies the dropped `@type`/`@language`.
fn compact_value(
	active_context: &Context,
	active_property: Option<&str>,
	value: &ObjectValue,
	index: Option<&str>,
) -> Json {
	let def = active_property.and_then(|p| active_context.get(p));

	if index.is_none() {
		match value {
			ObjectValue::Literal(Literal::String(s), None) => {
				let implied_lang = def.and_then(|d| d.language_mapping.as_ref());
				if implied_lang.is_none() && active_context.default_language().is_none() {
					return Json::String(s.clone().into());
				}
			}
			ObjectValue::Literal(Literal::Boolean(b), None) => return Json::Boolean(*b),
			ObjectValue::Literal(Literal::Number(n), None) => return Json::Number(n.clone()),
			ObjectValue::Literal(lit, Some(dt)) => {
				if let Some(TypeMapping::Iri(term_dt)) = def.and_then(|d| d.type_mapping.as_ref()) {
					if term_dt.as_str() == dt.as_str() {
						return literal_json(lit);
					}
				}
			}
			ObjectValue::LangString(ls) => {
				let matches_default = ls.direction.is_none()
					&& def.is_none()
					&& ls.language.as_deref() == active_context.default_language();
				if matches_default {
					return Json::String(ls.data.clone().into());
				}
			}
			ObjectValue::Json(_) => {}
		}
	}

	value_object_json(value, index)
}

fn literal_json(lit: &Literal) -> Json {
	match lit {
		Literal::String(s) => Json::String(s.clone().into()),
		Literal::Boolean(b) => Json::Boolean(*b),
		Literal::Number(n) => Json::Number(n.clone()),
	}
}

fn value_object_json(value: &ObjectValue, index: Option<&str>) -> Json {
	let mut obj = JsonObject::new();
	match value {
		ObjectValue::Literal(lit, datatype) => {
			obj.insert("@value".into(), literal_json(lit));
			if let Some(dt) = datatype {
				obj.insert("@type".into(), Json::String(dt.as_str().to_owned().into()));
			}
		}
		ObjectValue::LangString(ls) => {
			obj.insert("@value".into(), Json::String(ls.data.clone().into()));
			if let Some(lang) = &ls.language {
				obj.insert("@language".into(), Json::String(lang.clone().into()));
			}
			if let Some(dir) = ls.direction {
				obj.insert("@direction".into(), Json::String(dir.as_str().to_owned().into()));
			}
		}
		ObjectValue::Json(json) => {
			obj.insert("@value".into(), json.clone());
			obj.insert("@type".into(), Json::String("@json".to_owned().into()));
		}
	}
	if let Some(idx) = index {
		obj.insert("@index".into(), Json::String(idx.to_owned().into()));
	}
	Json::Object(obj)
}

fn find_term(active_context: &Context, id: &Id, reverse: bool) -> Option<String> {
	active_context
		.definitions()
		.find(|(_, def)| def.reverse == reverse && matches!(&def.value, Term::Id(i) if i == id))
		.map(|(name, _)| name.to_owned())
}

fn compact_id(active_context: &Context, id: &Id) -> String {
	active_context
		.compact_iri(&Term::Id(id.clone()), ContainerKind::None, TypeOrLanguage::Any, false, false)
		.unwrap_or_else(|| id.as_str().to_owned())
}

fn compact_type(active_context: &Context, id: &Id) -> String {
	active_context
		.compact_iri(&Term::Id(id.clone()), ContainerKind::None, TypeOrLanguage::Any, true, false)
		.unwrap_or_else(|| id.as_str().to_owned())
}

/// Appends `value` under `key` in `map`, turning a prior scalar into an
/// array on the second insert (`spec.md` §4.4's generic "add value"
/// helper, reused here for index/language/type map construction).
fn add_value(map: &mut JsonObject, key: &str, value: Json, force_array: bool) {
	match json_util::get(map, key) {
		Some(Json::Array(existing)) => {
			let mut items: Vec<Json> = existing.iter().cloned().collect();
			items.push(value);
			map.insert(key.into(), Json::Array(items.into_iter().collect()));
		}
		Some(existing) => {
			map.insert(key.into(), Json::Array(vec![existing, value].into_iter().collect()));
		}
		None => {
			map.insert(key.into(), if force_array { Json::Array(vec![value].into_iter().collect()) } else { value });
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::context_processing;
	use crate::expansion;
	use crate::loader::NoLoader;
	use crate::warning::CollectingHandler;

	fn parse(s: &str) -> Json {
		Json::parse_str(s).expect("valid json").0
	}

	async fn build_context(local: &Json) -> Context {
		context_processing::process(
			&Context::default(),
			local,
			None,
			&NoLoader,
			context_processing::Options::default(),
			&mut context_processing::Stack::new(),
		)
		.await
		.unwrap()
	}

	#[tokio::test]
	async fn round_trips_a_plain_property() {
		let ctx_value = parse(r#"{"name": "http://schema.org/name"}"#);
		let active = build_context(&ctx_value).await;
		let document = parse(r#"{"name": "Alice"}"#);
		let mut warnings = CollectingHandler::default();
		let expanded = expansion::expand_document(
			&active,
			&document,
			None,
			&NoLoader,
			expansion::Options::default(),
			&mut warnings,
		)
		.await
		.unwrap();

		let compacted =
			compact_document(&active, Some(&ctx_value), &expanded, None, &NoLoader, Options::default())
				.await
				.unwrap();
		let Json::Object(obj) = &compacted else { panic!("expected object") };
		assert_eq!(json_util::get(obj, "name").and_then(|v| v.as_str().map(str::to_owned)), Some("Alice".to_owned()));
	}

	#[tokio::test]
	async fn language_container_groups_by_tag() {
		let ctx_value =
			parse(r#"{"label": {"@id": "http://schema.org/name", "@container": "@language"}}"#);
		let active = build_context(&ctx_value).await;
		let document = parse(
			r#"{"http://schema.org/name": [{"@value": "Hi", "@language": "en"}, {"@value": "Hola", "@language": "es"}]}"#,
		);
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

		let compacted =
			compact_document(&active, Some(&ctx_value), &expanded, None, &NoLoader, Options::default())
				.await
				.unwrap();
		let Json::Object(obj) = &compacted else { panic!("expected object") };
		let Some(Json::Object(label)) = json_util::get(obj, "label") else { panic!("expected label map") };
		assert_eq!(json_util::get(&label, "en").and_then(|v| v.as_str().map(str::to_owned)), Some("Hi".to_owned()));
	}
}
