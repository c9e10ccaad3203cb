//! Small helpers over `json_syntax::Value` used throughout context
//! processing, expansion and compaction.
//!
//! Kept in one place so every place that needs "iterate this object's
//! entries in keyword-first, then lexicographic order" (`spec.md` §4.2,
//! §5) shares one implementation instead of re-deriving the sort at each
//! call site.

use crate::keyword::key_order;
use json_syntax::{object::Entry, Object, Value};

/// First value associated with `key` in `object`.
///
/// The specification assumes unique object keys (`spec.md` §9, Open
/// Question 3) and rejects documents that violate that at the parser
/// boundary, so "first match" and "the" match coincide for conforming
/// input.
pub fn get(object: &Object, key: &str) -> Option<Value> {
	object
		.clone()
		.into_iter()
		.find(|Entry { key: k, .. }| k.as_str() == key)
		.map(|entry| entry.value)
}

/// `object`'s entries ordered keywords-first (per [`key_order`]), then by
/// insertion order within each group — the order context processing and
/// expansion must walk an object's keys in.
pub fn ordered_entries(object: &Object) -> Vec<(String, Value)> {
	let mut entries: Vec<(String, Value)> = object
		.clone()
		.into_iter()
		.map(|Entry { key, value }| (key.to_string(), value))
		.collect();
	entries.sort_by(|(a, _), (b, _)| key_order(a, b));
	entries
}

pub fn as_str_array(value: &Value) -> Vec<String> {
	match value {
		Value::String(s) => vec![s.to_string()],
		Value::Array(a) => a
			.iter()
			.filter_map(|v| v.as_str().map(str::to_owned))
			.collect(),
		_ => Vec::new(),
	}
}

pub fn as_array(value: &Value) -> Vec<&Value> {
	match value {
		Value::Array(a) => a.iter().collect(),
		other => vec![other],
	}
}
