//! Blank node identifier minting.
//!
//! Expansion, flattening and RDF conversion all need to hand out fresh
//! blank node identifiers for nodes that lack an `@id`, and to remember
//! the mapping from a *source* identifier (one already present in the
//! document) to its *output* identifier so that the same source id always
//! maps to the same output id within one invocation (`spec.md` §3,
//! invariant iii).

use indexmap::IndexMap;
use rdf_types::BlankIdBuf;

/// Mints sequential blank node identifiers (`_:b0`, `_:b1`, ...) and
/// memoizes the mapping from an optional source label to the identifier
/// it was assigned, in first-use order.
///
/// This is the namer used by flattening's rename pass and by RDF
/// conversion's list materialization, where the *order* in which
/// identifiers are minted is itself part of the observable output.
#[derive(Debug, Default)]
pub struct Namer {
	prefix: String,
	counter: usize,
	assigned: IndexMap<String, BlankIdBuf>,
}

impl Namer {
	pub fn new() -> Self {
		Self::with_prefix("b")
	}

	pub fn with_prefix(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			counter: 0,
			assigned: IndexMap::new(),
		}
	}

	/// Returns the identifier previously assigned to `source`, minting and
	/// memoizing a new one on first use.
	pub fn get_or_mint(&mut self, source: &str) -> BlankIdBuf {
		if let Some(id) = self.assigned.get(source) {
			return id.clone();
		}
		let id = self.mint();
		self.assigned.insert(source.to_owned(), id.clone());
		id
	}

	/// Mints a fresh identifier with no source label (used for
	/// originally-anonymous nodes, and for `rdf:List` cons cells).
	pub fn mint(&mut self) -> BlankIdBuf {
		let id = BlankIdBuf::from_suffix(&format!("{}{}", self.prefix, self.counter))
			.expect("generated blank node suffix is always valid");
		self.counter += 1;
		id
	}

	/// Iterates assigned `(source, output)` pairs in the order they were
	/// first minted; used by flattening's canonical rename pass.
	pub fn assignments(&self) -> impl Iterator<Item = (&str, &rdf_types::BlankId)> {
		self.assigned.iter().map(|(k, v)| (k.as_str(), v.as_blank_id_ref()))
	}
}

/// A namer that mints a brand new, never-memoized identifier for every
/// source label, even if the same label is seen twice.
///
/// Used where the specification calls for *unique-per-occurrence*
/// identifiers rather than a stable per-source mapping (e.g. materializing
/// one fresh blank node per `@list` cons cell during `to_rdf`).
#[derive(Debug, Default)]
pub struct UniqueNamer {
	inner: Namer,
	next: usize,
}

impl UniqueNamer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn fresh(&mut self) -> BlankIdBuf {
		self.next += 1;
		self.inner.mint()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stable_within_invocation() {
		let mut namer = Namer::new();
		let a = namer.get_or_mint("_:x");
		let b = namer.get_or_mint("_:y");
		let a2 = namer.get_or_mint("_:x");
		assert_eq!(a, a2);
		assert_ne!(a, b);
	}

	#[test]
	fn sequential() {
		let mut namer = Namer::new();
		assert_eq!(namer.mint().as_str(), "_:b0");
		assert_eq!(namer.mint().as_str(), "_:b1");
	}
}
