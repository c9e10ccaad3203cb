//! This simple example shows how to expand a document using the
//! [`JsonLdProcessor::expand`] method.

use jsonld::loader::NoLoader;
use jsonld::processor::{self, JsonLdProcessor, Options};
use jsonld::warning::LogHandler;
use json_syntax::{Print, Value};

#[tokio::main]
async fn main() {
	let doc = Value::parse_str(
		r#"
		{
			"@context": {
				"name": "http://xmlns.com/foaf/0.1/name"
			},
			"@id": "https://www.rust-lang.org",
			"name": "Rust Programming Language"
		}
	"#,
	)
	.unwrap()
	.0;

	let expanded = doc.expand(&NoLoader, Options::default(), &mut LogHandler).await.unwrap();

	println!("{}", processor::document_to_json(&expanded).pretty_print());
}
