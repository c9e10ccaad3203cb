use super::RdfDirection;

/// Flags threaded through RDF conversion (`spec.md` §4.6, §6).
#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
	/// How to serialize `@direction`-tagged strings. `None` drops the
	/// direction and serializes as a plain language-tagged or untagged
	/// string, matching a processor with no `rdfDirection` configured.
	pub rdf_direction: Option<RdfDirection>,

	/// Emit quads whose predicate or graph name is a blank node, which
	/// RDF 1.1 ("generalized RDF") allows but the RDF 1.1 Concepts
	/// data model does not.
	pub produce_generalized_rdf: bool,
}
