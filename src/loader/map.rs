use super::{LoadError, Loader, RemoteDocument};
use indexmap::IndexMap;
use iref::{Iri, IriBuf};
use json_syntax::Value;

/// A loader backed by a fixed in-memory `IRI -> document` map.
///
/// This is the loader the test suite and the canonical scenarios in
/// `spec.md` §8 use: contexts and documents are known ahead of time and
/// there is no reason to touch the filesystem or network.
#[derive(Debug, Default, Clone)]
pub struct MapLoader {
	documents: IndexMap<IriBuf, Value>,
}

impl MapLoader {
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with(mut self, url: IriBuf, document: Value) -> Self {
		self.documents.insert(url, document);
		self
	}

	pub fn insert(&mut self, url: IriBuf, document: Value) {
		self.documents.insert(url, document);
	}
}

impl Loader for MapLoader {
	async fn load(&self, url: &Iri) -> Result<RemoteDocument, LoadError> {
		match self.documents.get(url) {
			Some(document) => Ok(RemoteDocument::new(url.to_owned(), document.clone())),
			None => Err(LoadError::NotFound(url.to_owned())),
		}
	}
}
