//! Flattening tests: every node reachable from a (possibly deeply
//! nested) document collected into one array, referenced by `@id`.

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

fn node_with_id(flattened: &Value, id: &str) -> Object {
	array(flattened)
		.iter()
		.find_map(|v| {
			let obj = object(v);
			(field(obj, "@id")?.as_str()? == id).then(|| obj.clone())
		})
		.unwrap_or_else(|| panic!("no node with @id {id} in flattened output"))
}

#[tokio::test]
async fn flattens_a_nested_node_into_two_top_level_entries() {
	let input = parse(
		r#"{
			"@context": {"ex": "http://example.org/"},
			"@id": "ex:alice",
			"ex:knows": {
				"@id": "ex:bob",
				"ex:name": "Bob"
			}
		}"#,
	);

	let flattened = input
		.flatten(None, &NoLoader, Options::default(), &mut LogHandler)
		.await
		.unwrap();

	assert_eq!(array(&flattened).len(), 2);

	let alice = node_with_id(&flattened, "http://example.org/alice");
	let knows = field(&alice, "http://example.org/knows").unwrap();
	let knows_id = field(object(&array(&knows)[0]), "@id").unwrap();
	assert_eq!(knows_id.as_str().unwrap(), "http://example.org/bob");

	let bob = node_with_id(&flattened, "http://example.org/bob");
	let name = field(&bob, "http://example.org/name").unwrap();
	let name_value = field(object(&array(&name)[0]), "@value").unwrap();
	assert_eq!(name_value.as_str().unwrap(), "Bob");
}

#[tokio::test]
async fn assigns_a_blank_node_id_to_an_anonymous_node() {
	let input = parse(
		r#"{
			"@context": {"ex": "http://example.org/"},
			"@id": "ex:alice",
			"ex:knows": {"ex:name": "Anonymous"}
		}"#,
	);

	let flattened = input
		.flatten(None, &NoLoader, Options::default(), &mut LogHandler)
		.await
		.unwrap();

	assert_eq!(array(&flattened).len(), 2);

	let anonymous = array(&flattened)
		.iter()
		.find_map(|v| {
			let obj = object(v);
			let id = field(obj, "@id")?;
			id.as_str()?.starts_with("_:").then(|| obj.clone())
		})
		.expect("flattening minted a blank node id for the anonymous node");

	let name = field(&anonymous, "http://example.org/name").unwrap();
	let name_value = field(object(&array(&name)[0]), "@value").unwrap();
	assert_eq!(name_value.as_str().unwrap(), "Anonymous");
}

#[tokio::test]
async fn compacts_the_flattened_result_when_a_context_is_given() {
	let input = parse(
		r#"{
			"@context": {"ex": "http://example.org/"},
			"@id": "ex:alice",
			"ex:knows": {"@id": "ex:bob", "ex:name": "Bob"}
		}"#,
	);
	let context = parse(r#"{"ex": "http://example.org/"}"#);

	let flattened = input
		.flatten(Some(&context), &NoLoader, Options::default(), &mut LogHandler)
		.await
		.unwrap();

	let obj = object(&flattened);
	assert!(field(obj, "@context").is_some());
	let graph = field(obj, "@graph").expect("@graph holds the flattened node set");
	assert_eq!(array(&graph).len(), 2);
}
