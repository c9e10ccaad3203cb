//! Expansion tests, one document per case, in the style of the
//! upstream JSON-LD expand test suite but against inline fixtures
//! rather than the full W3C manifest.

use iref::IriBuf;
use jsonld::error::ErrorCode;
use jsonld::loader::{MapLoader, NoLoader};
use jsonld::processor::{JsonLdProcessor, Options};
use jsonld::warning::LogHandler;
use json_syntax::Value;

fn parse(src: &str) -> Value {
	Value::parse_str(src).unwrap().0
}

async fn positive_test(input: &str, expected: &str) {
	let input = parse(input);
	let expected = parse(expected);

	let document = input
		.expand(&NoLoader, Options::default(), &mut LogHandler)
		.await
		.unwrap();

	let result = jsonld::processor::document_to_json(&document);

	assert_eq!(result, expected, "expanded document does not match");
}

async fn negative_test(input: &str, code: ErrorCode) {
	let input = parse(input);

	match input.expand(&NoLoader, Options::default(), &mut LogHandler).await {
		Ok(document) => panic!(
			"expansion succeeded with {:?} where it should have failed with code {code:?}",
			jsonld::processor::document_to_json(&document)
		),
		Err(e) => assert_eq!(e.code(), code),
	}
}

#[tokio::test]
async fn drops_free_floating_nodes() {
	positive_test(
		r#"{
			"@context": {"ex": "http://example.org/"},
			"ex:knows": {"@id": "ex:bob"}
		}"#,
		"[]",
	)
	.await
}

#[tokio::test]
async fn basic_node_with_values() {
	positive_test(
		r#"{
			"@context": {"ex": "http://example.org/"},
			"@id": "ex:alice",
			"ex:name": "Alice",
			"ex:age": 30
		}"#,
		r#"[{
			"@id": "http://example.org/alice",
			"http://example.org/name": [{"@value": "Alice"}],
			"http://example.org/age": [{"@value": 30}]
		}]"#,
	)
	.await
}

#[tokio::test]
async fn drops_null_and_unmapped_properties() {
	positive_test(
		r#"{
			"@context": {"ex": "http://example.org/"},
			"@id": "ex:alice",
			"ex:name": null,
			"not-a-term": "ignored"
		}"#,
		r#"[{"@id": "http://example.org/alice"}]"#,
	)
	.await
}

#[tokio::test]
async fn expands_value_with_language() {
	positive_test(
		r#"{
			"@context": {"ex": "http://example.org/"},
			"@id": "ex:alice",
			"ex:name": {"@value": "Alice", "@language": "en"}
		}"#,
		r#"[{
			"@id": "http://example.org/alice",
			"http://example.org/name": [{"@value": "Alice", "@language": "en"}]
		}]"#,
	)
	.await
}

#[tokio::test]
async fn expands_type_coerced_id() {
	positive_test(
		r#"{
			"@context": {
				"ex": "http://example.org/",
				"knows": {"@id": "ex:knows", "@type": "@id"}
			},
			"@id": "ex:alice",
			"knows": "ex:bob"
		}"#,
		r#"[{
			"@id": "http://example.org/alice",
			"http://example.org/knows": [{"@id": "http://example.org/bob"}]
		}]"#,
	)
	.await
}

#[tokio::test]
async fn expands_a_graph_keyword() {
	positive_test(
		r#"{
			"@context": {"ex": "http://example.org/"},
			"@graph": [
				{"@id": "ex:alice", "ex:name": "Alice"},
				{"@id": "ex:bob", "ex:name": "Bob"}
			]
		}"#,
		r#"[
			{"@id": "http://example.org/alice", "http://example.org/name": [{"@value": "Alice"}]},
			{"@id": "http://example.org/bob", "http://example.org/name": [{"@value": "Bob"}]}
		]"#,
	)
	.await
}

#[tokio::test]
async fn resolves_remote_context_through_the_loader() {
	let context_url = IriBuf::new("https://example.org/context.jsonld".to_owned()).unwrap();
	let context = parse(r#"{"ex": "http://example.org/"}"#);
	let loader = MapLoader::new().with(context_url, context);

	let input = parse(
		r#"{
			"@context": "https://example.org/context.jsonld",
			"@id": "ex:alice",
			"ex:name": "Alice"
		}"#,
	);

	let document = input
		.expand(&loader, Options::default(), &mut LogHandler)
		.await
		.unwrap();

	let result = jsonld::processor::document_to_json(&document);
	let expected = parse(
		r#"[{
			"@id": "http://example.org/alice",
			"http://example.org/name": [{"@value": "Alice"}]
		}]"#,
	);

	assert_eq!(result, expected);
}

#[tokio::test]
async fn rejects_an_id_that_is_not_a_string() {
	negative_test(
		r#"{"@id": {"not": "a string"}}"#,
		ErrorCode::InvalidIdValue,
	)
	.await
}

#[tokio::test]
async fn rejects_a_type_value_that_is_not_a_string_or_array() {
	negative_test(r#"{"@type": 5}"#, ErrorCode::InvalidTypeValue).await
}
