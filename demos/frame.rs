//! This simple example shows how to frame a document using the
//! [`JsonLdProcessor::frame`] method, reshaping an expanded document to
//! match a user-supplied template.

use jsonld::loader::NoLoader;
use jsonld::processor::{JsonLdProcessor, Options};
use jsonld::warning::LogHandler;
use json_syntax::{Print, Value};

#[tokio::main]
async fn main() {
	let doc = Value::parse_str(
		r#"
		[
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
			}
		]
	"#,
	)
	.unwrap()
	.0;

	let frame = Value::parse_str(
		r#"
		{
			"@context": {"ex": "http://example.org/"},
			"@type": "ex:Person"
		}
	"#,
	)
	.unwrap()
	.0;

	let framed = doc.frame(&frame, &NoLoader, Options::default(), &mut LogHandler).await.unwrap();

	println!("{}", framed.pretty_print());
}
