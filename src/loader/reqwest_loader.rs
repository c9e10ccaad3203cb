use super::{LoadError, Loader, RemoteDocument};
use iref::{Iri, IriBuf};

/// A [`Loader`] backed by `reqwest`, for dereferencing genuinely remote
/// `@context` IRIs and `expandContext` URLs.
///
/// Mirrors the teacher's `core/src/loader/reqwest/mod.rs`, scoped down to
/// what the core algorithms actually need from the response: the body,
/// parsed as JSON, and an optional `Link` context URL pulled out of the
/// headers when the content type is not `application/ld+json`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestLoader {
	client: reqwest::Client,
}

impl ReqwestLoader {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_client(client: reqwest::Client) -> Self {
		Self { client }
	}
}

impl Loader for ReqwestLoader {
	async fn load(&self, url: &Iri) -> Result<RemoteDocument, LoadError> {
		let response = self
			.client
			.get(url.as_str())
			.header("accept", "application/ld+json, application/json")
			.send()
			.await
			.map_err(|e| LoadError::Http(url.to_owned(), e.to_string()))?;

		let final_url = IriBuf::new(response.url().as_str().to_owned())
			.unwrap_or_else(|_| url.to_owned());

		let content_type = response
			.headers()
			.get(reqwest::header::CONTENT_TYPE)
			.and_then(|v| v.to_str().ok())
			.map(str::to_owned);

		let context_url = response
			.headers()
			.get(reqwest::header::LINK)
			.and_then(|v| v.to_str().ok())
			.and_then(parse_context_link)
			.and_then(|l| IriBuf::new(l).ok());

		let body = response
			.text()
			.await
			.map_err(|e| LoadError::Http(url.to_owned(), e.to_string()))?;

		let (document, _) = json_syntax::Value::parse_str(&body)
			.map_err(|e| LoadError::Parse(url.to_owned(), e.to_string()))?;

		Ok(RemoteDocument {
			url: final_url,
			content_type,
			context_url,
			document,
		})
	}
}

/// Extracts the target of a `rel="http://www.w3.org/ns/json-ld#context"`
/// `Link` header value.
fn parse_context_link(header: &str) -> Option<String> {
	for part in header.split(',') {
		if part.contains("rel=\"http://www.w3.org/ns/json-ld#context\"") {
			let start = part.find('<')?;
			let end = part.find('>')?;
			if end > start {
				return Some(part[start + 1..end].to_owned());
			}
		}
	}
	None
}
