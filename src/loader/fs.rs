use super::{LoadError, Loader, RemoteDocument};
use iref::{Iri, IriBuf};
use std::path::{Path, PathBuf};

/// Resolves `file://` and relative IRIs against a root directory on disk
/// and parses the contents as JSON.
///
/// Mirrors the teacher's `core/src/loader/fs.rs`, used by its test
/// harness to load the local copies of the JSON-LD test suite fixtures.
#[derive(Debug, Clone)]
pub struct FsLoader {
	root: PathBuf,
}

impl FsLoader {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	fn path_for(&self, url: &Iri) -> PathBuf {
		let path = url.path().as_str().trim_start_matches('/');
		self.root.join(path)
	}
}

impl Loader for FsLoader {
	async fn load(&self, url: &Iri) -> Result<RemoteDocument, LoadError> {
		let path: &Path = &self.path_for(url);
		let content = std::fs::read_to_string(path)
			.map_err(|e| LoadError::Io(url.to_owned(), e.to_string()))?;
		let document = json_syntax::Value::parse_str(&content)
			.map_err(|e| LoadError::Parse(url.to_owned(), e.to_string()))?
			.0;
		Ok(RemoteDocument::new(url.to_owned(), document))
	}
}

impl From<IriBuf> for FsLoader {
	fn from(url: IriBuf) -> Self {
		Self::new(url.path().as_str())
	}
}
