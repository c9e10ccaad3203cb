use super::Error;
use hashbrown::HashSet;

/// Cycle detection for two distinct recursions the algorithm performs:
/// remote context dereferencing (an IRI may not be fetched while it is
/// still being processed higher up the call stack) and term definition
/// (a term's IRI mapping may not be resolved through a chain that revisits
/// the same term).
#[derive(Debug, Default, Clone)]
pub struct Stack {
	remote_contexts: HashSet<String>,
	pending_terms: HashSet<String>,
}

impl Stack {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn enter_remote_context(&mut self, iri: &str) -> Result<(), Error> {
		if !self.remote_contexts.insert(iri.to_owned()) {
			return Err(Error::RecursiveContextInclusion(iri.to_owned()));
		}
		Ok(())
	}

	pub fn exit_remote_context(&mut self, iri: &str) {
		self.remote_contexts.remove(iri);
	}

	pub fn enter_term(&mut self, term: &str) -> Result<(), Error> {
		if !self.pending_terms.insert(term.to_owned()) {
			return Err(Error::CyclicIriMapping(term.to_owned()));
		}
		Ok(())
	}

	pub fn exit_term(&mut self, term: &str) {
		self.pending_terms.remove(term);
	}
}
