//! Framing tests: reshaping a flattened node set to match a frame's
//! matching and embedding rules.

use jsonld::loader::NoLoader;
use jsonld::processor::{JsonLdProcessor, Options};
use jsonld::warning::LogHandler;
use json_syntax::object::Entry;
use json_syntax::{Object, Value};

fn parse(src: &str) -> Value {
	Value::parse_str(src).unwrap().0
}

fn array(value: &Value) -> &[Value] {
	match value {
		Value::Array(a) => a,
		_ => panic!("expected a JSON array, found {value:?}"),
	}
}

fn object(value: &Value) -> &Object {
	match value {
		Value::Object(o) => o,
		_ => panic!("expected a JSON object, found {value:?}"),
	}
}

fn field(obj: &Object, key: &str) -> Option<Value> {
	obj.clone().into_iter().find(|Entry { key: k, .. }| k.as_str() == key).map(|entry| entry.value)
}

fn id_of(value: &Value) -> String {
	field(object(value), "@id").unwrap().as_str().unwrap().to_owned()
}

#[tokio::test]
async fn frames_nodes_matching_a_type() {
	let input = parse(
		r#"[
			{
				"@context": {"ex": "http://example.org/"},
				"@id": "ex:alice",
				"@type": "ex:Person",
				"ex:name": "Alice"
			},
			{
				"@context": {"ex": "http://example.org/"},
				"@id": "ex:bob",
				"@type": "ex:Person",
				"ex:name": "Bob"
			},
			{
				"@context": {"ex": "http://example.org/"},
				"@id": "ex:acme",
				"@type": "ex:Organization",
				"ex:name": "Acme"
			}
		]"#,
	);

	let frame = parse(
		r#"{
			"@context": {"ex": "http://example.org/"},
			"@type": "ex:Person"
		}"#,
	);

	let framed = input
		.frame(&frame, &NoLoader, Options::default(), &mut LogHandler)
		.await
		.unwrap();

	let results = array(&framed);
	assert_eq!(results.len(), 2);

	let ids: Vec<String> = results.iter().map(id_of).collect();
	assert!(ids.contains(&"http://example.org/alice".to_owned()));
	assert!(ids.contains(&"http://example.org/bob".to_owned()));
	assert!(!ids.contains(&"http://example.org/acme".to_owned()));
}

#[tokio::test]
async fn embeds_a_referenced_node_by_default() {
	let input = parse(
		r#"{
			"@context": {"ex": "http://example.org/"},
			"@id": "ex:alice",
			"@type": "ex:Person",
			"ex:knows": {"@id": "ex:bob", "@type": "ex:Person", "ex:name": "Bob"}
		}"#,
	);

	let frame = parse(
		r#"{
			"@context": {"ex": "http://example.org/"},
			"@type": "ex:Person",
			"ex:knows": {}
		}"#,
	);

	let framed = input
		.frame(&frame, &NoLoader, Options::default(), &mut LogHandler)
		.await
		.unwrap();

	let results = array(&framed);
	let alice = results
		.iter()
		.find(|v| id_of(v) == "http://example.org/alice")
		.expect("alice is the only node matching the frame's @type");

	let knows = field(object(alice), "http://example.org/knows").unwrap();
	let bob = &array(&knows)[0];
	assert_eq!(id_of(bob), "http://example.org/bob");
	assert!(field(object(bob), "http://example.org/name").is_some());
}

#[tokio::test]
async fn empty_frame_matches_every_node() {
	let input = parse(
		r#"[
			{"@context": {"ex": "http://example.org/"}, "@id": "ex:alice", "ex:name": "Alice"},
			{"@context": {"ex": "http://example.org/"}, "@id": "ex:bob", "ex:name": "Bob"}
		]"#,
	);
	let frame = parse("{}");

	let framed = input
		.frame(&frame, &NoLoader, Options::default(), &mut LogHandler)
		.await
		.unwrap();

	assert_eq!(array(&framed).len(), 2);
}
