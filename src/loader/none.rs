use super::{LoadError, Loader, RemoteDocument};
use iref::Iri;

/// A loader that refuses every request.
///
/// Useful as the `Loader` for operations over documents known not to
/// reference any remote context (the common case for `compact`/`flatten`
/// calls that already carry their context inline).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLoader;

impl Loader for NoLoader {
	async fn load(&self, url: &Iri) -> Result<RemoteDocument, LoadError> {
		Err(LoadError::NotFound(url.to_owned()))
	}
}
