//! RDF conversion tests: turning an expanded document into quads
//! (`toRdf`) and rebuilding a document from quads (`fromRdf`).

use jsonld::loader::NoLoader;
use jsonld::processor::{self, JsonLdProcessor, Options};
use jsonld::rdf::{Term, RDF_TYPE};
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

#[tokio::test]
async fn converts_a_typed_node_to_quads() {
	let input = parse(
		r#"{
			"@context": {"ex": "http://example.org/"},
			"@id": "ex:alice",
			"@type": "ex:Person",
			"ex:name": "Alice"
		}"#,
	);

	let quads = input.to_rdf(&NoLoader, Options::default(), &mut LogHandler).await.unwrap();

	assert_eq!(quads.len(), 2);

	let type_quad = quads
		.iter()
		.find(|q| q.predicate.as_iri().map(|i| i.as_str()) == Some(RDF_TYPE.as_str()))
		.expect("a rdf:type quad for @type");
	assert_eq!(type_quad.subject.as_iri().unwrap().as_str(), "http://example.org/alice");
	match &type_quad.object {
		Term::Id(id) => assert_eq!(id.as_iri().unwrap().as_str(), "http://example.org/Person"),
		Term::Literal(_) => panic!("@type must convert to an IRI term, not a literal"),
	}

	let name_quad = quads
		.iter()
		.find(|q| q.predicate.as_iri().map(|i| i.as_str()) == Some("http://example.org/name"))
		.expect("a quad for ex:name");
	match &name_quad.object {
		Term::Literal(lit) => {
			assert_eq!(lit.lexical, "Alice");
			assert_eq!(lit.datatype.as_str(), "http://www.w3.org/2001/XMLSchema#string");
		}
		Term::Id(_) => panic!("a plain string value must convert to a literal"),
	}
}

#[tokio::test]
async fn blank_node_subjects_keep_their_minted_id() {
	let input = parse(
		r#"{
			"@context": {"ex": "http://example.org/"},
			"ex:name": "Anonymous"
		}"#,
	);

	let quads = input.to_rdf(&NoLoader, Options::default(), &mut LogHandler).await.unwrap();

	assert_eq!(quads.len(), 1);
	assert!(quads[0].subject.is_blank());
}

#[tokio::test]
async fn from_rdf_rebuilds_an_expanded_document() {
	let input = parse(
		r#"{
			"@context": {"ex": "http://example.org/"},
			"@id": "ex:alice",
			"ex:name": "Alice"
		}"#,
	);

	let quads = input.to_rdf(&NoLoader, Options::default(), &mut LogHandler).await.unwrap();
	let rebuilt = processor::from_rdf(&quads, None, &NoLoader, Options::default()).await.unwrap();

	let nodes = array(&rebuilt);
	assert_eq!(nodes.len(), 1);
	let node = object(&nodes[0]);
	assert_eq!(field(node, "@id").unwrap().as_str().unwrap(), "http://example.org/alice");
	let name = field(node, "http://example.org/name").unwrap();
	let name_value = field(object(&array(&name)[0]), "@value").unwrap();
	assert_eq!(name_value.as_str().unwrap(), "Alice");
}

#[tokio::test]
async fn from_rdf_compacts_when_given_a_context() {
	let input = parse(
		r#"{
			"@context": {"ex": "http://example.org/"},
			"@id": "ex:alice",
			"ex:name": "Alice"
		}"#,
	);
	let context = parse(r#"{"ex": "http://example.org/"}"#);

	let quads = input.to_rdf(&NoLoader, Options::default(), &mut LogHandler).await.unwrap();
	let rebuilt = processor::from_rdf(&quads, Some(&context), &NoLoader, Options::default())
		.await
		.unwrap();

	let obj = object(&rebuilt);
	assert_eq!(field(obj, "@id").unwrap().as_str().unwrap(), "http://example.org/alice");
	assert_eq!(field(obj, "ex:name").unwrap().as_str().unwrap(), "Alice");
}
