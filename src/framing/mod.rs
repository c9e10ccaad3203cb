//! Framing Algorithm (`spec.md` §4.5): reshapes a node map to match a
//! user-supplied frame, the operation that turns a flattened document
//! back into a tree shaped the way a particular consumer wants it.

mod error;
mod options;

pub use error::Error;
pub use options::{Embed, Options};

use crate::flattening::{NodeMap, DEFAULT_GRAPH};
use crate::object::{LangString, Literal, Node, Value as ObjectValue};
use indexmap::IndexMap;
use json_syntax::{Object as JsonObject, Value as Json};
use std::collections::HashSet;

/// A frame object, parsed once out of the raw frame JSON: the matching
/// keywords (`@type`, `@id`) and flags (`@embed`, `@explicit`,
/// `@requireAll`, `@omitDefault`) it carries, plus one sub-frame per
/// property it names.
struct ParsedFrame {
	ids: Vec<String>,
	types: Vec<String>,
	embed: Option<Embed>,
	explicit: Option<bool>,
	require_all: Option<bool>,
	omit_default: Option<bool>,
	default: Option<Vec<Json>>,
	properties: IndexMap<String, Vec<Json>>,
}

impl ParsedFrame {
	fn parse(json: &Json) -> Result<Self, Error> {
		let Json::Object(obj) = json else {
			return Err(Error::InvalidFrame("a frame must be a JSON object".into()));
		};

		let mut frame = ParsedFrame {
			ids: Vec::new(),
			types: Vec::new(),
			embed: None,
			explicit: None,
			require_all: None,
			omit_default: None,
			default: None,
			properties: IndexMap::new(),
		};

		for json_syntax::object::Entry { key, value } in obj.clone().into_iter() {
			match key.as_str() {
				"@id" => frame.ids = string_array(&value),
				"@type" => frame.types = string_array(&value),
				"@embed" => {
					let kw = value.as_str().ok_or_else(|| Error::InvalidEmbedValue("@embed".into()))?.to_owned();
					frame.embed =
						Some(Embed::from_keyword(&kw).ok_or_else(|| Error::InvalidEmbedValue(kw.clone()))?);
				}
				"@explicit" => frame.explicit = as_bool(&value),
				"@requireAll" => frame.require_all = as_bool(&value),
				"@omitDefault" => frame.omit_default = as_bool(&value),
				"@default" => {
					frame.default = Some(match value {
						Json::Array(a) => a.iter().cloned().collect(),
						other => vec![other],
					})
				}
				"@context" => {}
				_ => {
					let subframes = match value {
						Json::Array(a) => a.iter().cloned().collect(),
						other => vec![other],
					};
					frame.properties.insert(key.as_str().to_owned(), subframes);
				}
			}
		}

		Ok(frame)
	}
}

fn as_bool(value: &Json) -> Option<bool> {
	match value {
		Json::Boolean(b) => Some(*b),
		_ => None,
	}
}

fn string_array(value: &Json) -> Vec<String> {
	match value {
		Json::String(s) => vec![s.to_string()],
		Json::Array(a) => a.iter().filter_map(|v| v.as_str().map(str::to_owned)).collect(),
		_ => Vec::new(),
	}
}

fn matches(node: &Node, frame: &ParsedFrame, require_all: bool) -> bool {
	if !frame.ids.is_empty() {
		let id = node.id.as_ref().map(|i| i.as_str());
		if !id.is_some_and(|id| frame.ids.iter().any(|f| f == id)) {
			return false;
		}
	}

	if !frame.types.is_empty() {
		return frame.types.iter().any(|t| node.types.iter().any(|nt| nt.as_str() == t));
	}

	if frame.properties.is_empty() {
		return true;
	}

	let node_has = |key: &str| node.properties.keys().any(|k| k.as_str() == key);
	if require_all {
		frame.properties.keys().all(|k| node_has(k))
	} else {
		frame.properties.keys().any(|k| node_has(k))
	}
}

/// Frames `node_map`'s default graph against `frame_doc`, a frame already
/// expressed in expanded form (full property IRIs as keys, per
/// `spec.md` §4.5's "frame, compact form expanded under the same
/// context").
pub fn frame(node_map: &NodeMap, frame_doc: &Json, options: Options) -> Result<Json, Error> {
	let top = match frame_doc {
		Json::Array(a) => a.iter().next().cloned().unwrap_or_else(|| Json::Object(JsonObject::new())),
		other => other.clone(),
	};
	let parsed = ParsedFrame::parse(&top)?;

	let Some(graph) = node_map.graph(DEFAULT_GRAPH) else {
		return Ok(Json::Array(std::iter::empty().collect()));
	};

	let require_all = parsed.require_all.unwrap_or(options.require_all);
	let mut ids: Vec<&String> = graph.keys().filter(|id| matches(&graph[*id], &parsed, require_all)).collect();
	ids.sort();

	let mut embedded_once = HashSet::new();
	let mut path = Vec::new();
	let mut results = Vec::new();
	for id in ids {
		let node = &graph[id];
		path.push(id.clone());
		embedded_once.insert(id.clone());
		results.push(frame_subject(node_map, node, &parsed, &mut embedded_once, &mut path, options)?);
		path.pop();
	}

	Ok(cleanup_preserve(Json::Array(results.into_iter().collect())))
}

fn frame_subject(
	node_map: &NodeMap,
	node: &Node,
	frame: &ParsedFrame,
	embedded_once: &mut HashSet<String>,
	path: &mut Vec<String>,
	options: Options,
) -> Result<Json, Error> {
	let mut obj = JsonObject::new();

	if let Some(id) = &node.id {
		obj.insert("@id".into(), Json::String(id.as_str().to_owned().into()));
	}
	if !node.types.is_empty() {
		obj.insert(
			"@type".into(),
			Json::Array(node.types.iter().map(|t| Json::String(t.as_str().to_owned().into())).collect()),
		);
	}

	let explicit = frame.explicit.unwrap_or(options.explicit);
	let omit_default = frame.omit_default.unwrap_or(options.omit_default);
	let mut seen_properties: HashSet<&str> = HashSet::new();

	for (prop, values) in node.properties.iter() {
		let subframe = frame.properties.get(prop.as_str()).and_then(|v| v.first());
		let array = match subframe {
			Some(sub) => {
				let parsed_sub = ParsedFrame::parse(sub)?;
				let mut items = Vec::new();
				for value in values {
					items.push(frame_value(node_map, value, &parsed_sub, embedded_once, path, options)?);
				}
				items
			}
			None if !explicit => {
				let mut items = Vec::new();
				for value in values {
					items.push(verbatim(value));
				}
				items
			}
			None => continue,
		};
		seen_properties.insert(prop.as_str());
		obj.insert(prop.as_str().into(), Json::Array(array.into_iter().collect()));
	}

	if !omit_default {
		for key in frame.properties.keys() {
			if seen_properties.contains(key.as_str()) {
				continue;
			}
			let default = frame.default.clone().unwrap_or_else(|| vec![null_placeholder()]);
			let mut preserve = JsonObject::new();
			preserve.insert("@preserve".into(), Json::Array(default.into_iter().collect()));
			obj.insert(key.as_str().into(), Json::Array(std::iter::once(Json::Object(preserve)).collect()));
		}
	}

	Ok(Json::Object(obj))
}

fn null_placeholder() -> Json {
	let mut obj = JsonObject::new();
	obj.insert("@null".into(), Json::Array(std::iter::empty().collect()));
	Json::Object(obj)
}

fn frame_value(
	node_map: &NodeMap,
	value: &crate::object::IndexedObject,
	subframe: &ParsedFrame,
	embedded_once: &mut HashSet<String>,
	path: &mut Vec<String>,
	options: Options,
) -> Result<Json, Error> {
	use crate::object::Object;

	match value.inner() {
		Object::Node(reference) => {
			let Some(id) = reference.id.as_ref().map(|i| i.as_str().to_owned()) else {
				return Ok(verbatim(value));
			};
			let Some(full) = node_map.node(DEFAULT_GRAPH, &id) else {
				let mut obj = JsonObject::new();
				obj.insert("@id".into(), Json::String(id.into()));
				return Ok(Json::Object(obj));
			};

			let embed = subframe.embed.unwrap_or(options.embed);
			let should_embed = match embed {
				Embed::Never => false,
				Embed::Always => !path.contains(&id),
				Embed::Once => !embedded_once.contains(&id) && !path.contains(&id),
			};

			if !should_embed {
				let mut obj = JsonObject::new();
				obj.insert("@id".into(), Json::String(id.into()));
				return Ok(Json::Object(obj));
			}

			embedded_once.insert(id.clone());
			path.push(id);
			let framed = frame_subject(node_map, full, subframe, embedded_once, path, options)?;
			path.pop();
			Ok(framed)
		}
		Object::Value(_) | Object::List(_) => Ok(verbatim(value)),
	}
}

/// Copies an expanded value through unchanged, for properties not named
/// in the frame when `@explicit` is false.
fn verbatim(value: &crate::object::IndexedObject) -> Json {
	use crate::object::Object;

	match value.inner() {
		Object::Node(node) => {
			let mut obj = JsonObject::new();
			if let Some(id) = &node.id {
				obj.insert("@id".into(), Json::String(id.as_str().to_owned().into()));
			}
			Json::Object(obj)
		}
		Object::Value(v) => value_json(v, value.index()),
		Object::List(list) => {
			let mut obj = JsonObject::new();
			obj.insert("@list".into(), Json::Array(list.iter().map(verbatim).collect()));
			Json::Object(obj)
		}
	}
}

fn value_json(value: &ObjectValue, index: Option<&str>) -> Json {
	let mut obj = JsonObject::new();
	match value {
		ObjectValue::Literal(lit, datatype) => {
			obj.insert("@value".into(), literal_json(lit));
			if let Some(dt) = datatype {
				obj.insert("@type".into(), Json::String(dt.as_str().to_owned().into()));
			}
		}
		ObjectValue::LangString(LangString { data, language, direction }) => {
			obj.insert("@value".into(), Json::String(data.clone().into()));
			if let Some(lang) = language {
				obj.insert("@language".into(), Json::String(lang.clone().into()));
			}
			if let Some(dir) = direction {
				obj.insert("@direction".into(), Json::String(dir.as_str().into()));
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

fn literal_json(lit: &Literal) -> Json {
	match lit {
		Literal::String(s) => Json::String(s.clone().into()),
		Literal::Boolean(b) => Json::Boolean(*b),
		Literal::Number(n) => Json::Number(n.clone()),
	}
}

/// Replaces `@preserve` wrappers with their contents and `@null` markers
/// with JSON `null`, per `spec.md` §4.5 step 5.
fn cleanup_preserve(value: Json) -> Json {
	match value {
		Json::Array(a) => Json::Array(a.into_iter().map(cleanup_preserve).collect()),
		Json::Object(obj) => {
			let entries: Vec<json_syntax::object::Entry> = obj.into_iter().collect();
			if entries.len() == 1 {
				match entries[0].key.as_str() {
					"@preserve" => return cleanup_preserve(entries[0].value.clone()),
					"@null" => return Json::Null,
					_ => {}
				}
			}
			let mut cleaned = JsonObject::new();
			for json_syntax::object::Entry { key, value } in entries {
				cleaned.insert(key, cleanup_preserve(value));
			}
			Json::Object(cleaned)
		}
		other => other,
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

	fn parse(s: &str) -> Json {
		Json::parse_str(s).expect("valid json").0
	}

	#[tokio::test]
	async fn frames_by_type() {
		let document = parse(
			r#"[
				{"@id":"ex:a","@type":["ex:Person"],"ex:name":[{"@value":"A"}]},
				{"@id":"ex:b","@type":["ex:Place"],"ex:name":[{"@value":"B"}]}
			]"#,
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
		let map = flattening::flatten(&expanded).unwrap();

		let frame_doc = parse(r#"{"@type":"ex:Person"}"#);
		let result = frame(&map, &frame_doc, Options::default()).unwrap();
		let Json::Array(items) = result else { panic!("expected array") };
		assert_eq!(items.len(), 1);
	}

	#[tokio::test]
	async fn omit_default_false_preserves_missing_properties() {
		let document = parse(r#"[{"@id":"ex:a","ex:name":[{"@value":"A"}]}]"#);
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
		let map = flattening::flatten(&expanded).unwrap();

		let frame_doc = parse(r#"{"ex:name":{},"ex:missing":{}}"#);
		let result = frame(&map, &frame_doc, Options::default()).unwrap();
		let Json::Array(items) = result else { panic!("expected array") };
		let Json::Object(obj) = &items[0] else { panic!("expected object") };
		assert!(crate::json_util::get(obj, "ex:missing").is_some());
	}
}
