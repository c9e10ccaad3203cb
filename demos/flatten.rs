//! This simple example shows how to flatten a document using the
//! [`JsonLdProcessor::flatten`] method, collecting every node reachable
//! from the document into one flat array keyed by `@id`.

use jsonld::loader::NoLoader;
use jsonld::processor::{JsonLdProcessor, Options};
use jsonld::warning::LogHandler;
use json_syntax::{Print, Value};

#[tokio::main]
async fn main() {
	let doc = Value::parse_str(
		r#"
		{
			"@context": {"ex": "http://example.org/"},
			"@id": "ex:alice",
			"ex:knows": {
				"@id": "ex:bob",
				"ex:name": "Bob"
			}
		}
	"#,
	)
	.unwrap()
	.0;

	let flattened = doc.flatten(None, &NoLoader, Options::default(), &mut LogHandler).await.unwrap();

	println!("{}", flattened.pretty_print());
}
