//! This simple example shows how to compact a document using the
//! [`JsonLdProcessor::compact`] method.

use jsonld::loader::NoLoader;
use jsonld::processor::{JsonLdProcessor, Options};
use jsonld::warning::LogHandler;
use json_syntax::{Print, Value};

#[tokio::main]
async fn main() {
	let input = Value::parse_str(
		r#"
		[{
			"http://xmlns.com/foaf/0.1/name": ["Manu Sporny"],
			"http://xmlns.com/foaf/0.1/homepage": [{"@id": "https://manu.sporny.org/"}],
			"http://xmlns.com/foaf/0.1/avatar": [{"@id": "https://twitter.com/account/profile_image/manusporny"}]
		}]
	"#,
	)
	.unwrap()
	.0;

	let context = Value::parse_str(
		r#"
		{
			"name": "http://xmlns.com/foaf/0.1/name",
			"homepage": {"@id": "http://xmlns.com/foaf/0.1/homepage", "@type": "@id"},
			"avatar": {"@id": "http://xmlns.com/foaf/0.1/avatar", "@type": "@id"}
		}
	"#,
	)
	.unwrap()
	.0;

	let output = input.compact(&context, &NoLoader, Options::default(), &mut LogHandler).await.unwrap();

	println!("{}", output.pretty_print());
}
