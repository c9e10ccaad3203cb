//! Compaction tests: expand-then-compact round trips against a
//! user-supplied context, mirroring the upstream compact test suite.

use jsonld::loader::NoLoader;
use jsonld::processor::{JsonLdProcessor, Options};
use jsonld::warning::LogHandler;
use json_syntax::Value;

fn parse(src: &str) -> Value {
	Value::parse_str(src).unwrap().0
}

async fn positive_test(input: &str, context: &str, expected: &str) {
	let input = parse(input);
	let context = parse(context);
	let expected = parse(expected);

	let result = input
		.compact(&context, &NoLoader, Options::default(), &mut LogHandler)
		.await
		.unwrap();

	assert_eq!(result, expected, "compacted document does not match");
}

#[tokio::test]
async fn compacts_a_single_node_to_term_keys() {
	positive_test(
		r#"{
			"@id": "http://example.org/alice",
			"http://xmlns.com/foaf/0.1/name": "Alice"
		}"#,
		r#"{"name": "http://xmlns.com/foaf/0.1/name"}"#,
		r#"{
			"@context": {"name": "http://xmlns.com/foaf/0.1/name"},
			"@id": "http://example.org/alice",
			"name": "Alice"
		}"#,
	)
	.await
}

#[tokio::test]
async fn compacts_an_id_valued_property_to_a_node_reference() {
	positive_test(
		r#"{
			"@id": "http://example.org/alice",
			"http://xmlns.com/foaf/0.1/homepage": {"@id": "https://alice.example/"}
		}"#,
		r#"{"homepage": {"@id": "http://xmlns.com/foaf/0.1/homepage", "@type": "@id"}}"#,
		r#"{
			"@context": {"homepage": {"@id": "http://xmlns.com/foaf/0.1/homepage", "@type": "@id"}},
			"@id": "http://example.org/alice",
			"homepage": "https://alice.example/"
		}"#,
	)
	.await
}

#[tokio::test]
async fn compacts_with_vocab_relative_terms() {
	positive_test(
		r#"{
			"@id": "http://example.org/alice",
			"@type": "http://example.org/Person",
			"http://example.org/name": "Alice"
		}"#,
		r#"{"@vocab": "http://example.org/"}"#,
		r#"{
			"@context": {"@vocab": "http://example.org/"},
			"@id": "http://example.org/alice",
			"@type": "Person",
			"name": "Alice"
		}"#,
	)
	.await
}

#[tokio::test]
async fn collapses_a_single_value_array_when_compact_arrays_is_set() {
	let input = parse(
		r#"{
			"@id": "http://example.org/alice",
			"http://xmlns.com/foaf/0.1/name": ["Alice"]
		}"#,
	);
	let context = parse(r#"{"name": "http://xmlns.com/foaf/0.1/name"}"#);

	let result = input
		.compact(&context, &NoLoader, Options::default(), &mut LogHandler)
		.await
		.unwrap();

	assert_eq!(
		result,
		parse(
			r#"{
				"@context": {"name": "http://xmlns.com/foaf/0.1/name"},
				"@id": "http://example.org/alice",
				"name": "Alice"
			}"#
		)
	);
}
