//! This example shows how to use [`jsonld::loader::ReqwestLoader`] to
//! resolve remote `@context` IRIs over HTTP. Requires the `reqwest`
//! feature.

use jsonld::loader::ReqwestLoader;
use jsonld::processor::{self, JsonLdProcessor, Options};
use jsonld::warning::LogHandler;
use json_syntax::{Print, Value};

#[tokio::main]
async fn main() {
	let loader = ReqwestLoader::new();

	let doc = Value::parse_str(
		r#"
		{
			"@context": "https://schema.org/",
			"@type": "Person",
			"name": "Ada Lovelace"
		}
	"#,
	)
	.unwrap()
	.0;

	let expanded = doc.expand(&loader, Options::default(), &mut LogHandler).await.unwrap();

	println!("{}", processor::document_to_json(&expanded).pretty_print());
}
