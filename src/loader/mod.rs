//! Document loading.
//!
//! `spec.md` §1 puts "a document loader that dereferences remote IRIs and
//! returns document bodies plus HTTP Link headers" out of scope as an
//! external collaborator; the [`Loader`] trait is the seam the core
//! algorithms call through, and this module ships the handful of
//! loaders an implementation needs to actually be usable and testable
//! (in-memory, filesystem, none, and — behind the `reqwest` feature — an
//! HTTP loader), the way the teacher's `core/src/loader/` does.

mod fs;
mod map;
mod none;
#[cfg(feature = "reqwest")]
mod reqwest_loader;

pub use fs::FsLoader;
pub use map::MapLoader;
pub use none::NoLoader;
#[cfg(feature = "reqwest")]
pub use reqwest_loader::ReqwestLoader;

use iref::{Iri, IriBuf};
use json_syntax::Value;

/// A document retrieved from a [`Loader`], together with the metadata
/// the context-processing algorithm needs from its transport: the final
/// (post-redirect) IRI and an optional `Link: <...>; rel="http://www.w3.org/ns/json-ld#context"`
/// header value, used when the document's media type does not itself
/// carry a `@context` (e.g. plain `application/json`).
#[derive(Clone, Debug)]
pub struct RemoteDocument {
	pub url: IriBuf,
	pub content_type: Option<String>,
	pub context_url: Option<IriBuf>,
	pub document: Value,
}

impl RemoteDocument {
	pub fn new(url: IriBuf, document: Value) -> Self {
		Self {
			url,
			content_type: None,
			context_url: None,
			document,
		}
	}
}

/// Failure to retrieve or parse a remote document or context.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
	#[error("document not found: {0}")]
	NotFound(IriBuf),

	#[error("I/O error loading {0}: {1}")]
	Io(IriBuf, String),

	#[error("malformed JSON in {0}: {1}")]
	Parse(IriBuf, String),

	#[error("loader does not support scheme of {0}")]
	UnsupportedScheme(IriBuf),

	#[cfg(feature = "reqwest")]
	#[error("HTTP error loading {0}: {1}")]
	Http(IriBuf, String),
}

/// Retrieves JSON(-LD) documents and contexts by IRI.
///
/// The only core operation that suspends (`spec.md` §5): every other
/// algorithm in this crate is synchronous, but a remote `@context` or
/// `expandContext` may need network I/O, so `load` is `async` and the
/// core treats it as a single abortable step, wrapping any failure as
/// [`LoadError`].
pub trait Loader {
	fn load(&self, url: &Iri) -> impl std::future::Future<Output = Result<RemoteDocument, LoadError>>;
}

impl<L: Loader + ?Sized> Loader for &L {
	fn load(&self, url: &Iri) -> impl std::future::Future<Output = Result<RemoteDocument, LoadError>> {
		(**self).load(url)
	}
}
