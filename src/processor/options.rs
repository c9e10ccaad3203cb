use crate::compaction;
use crate::context::Context;
use crate::context_processing::{self, Stack};
use crate::error::Error;
use crate::expansion;
use crate::framing;
use crate::loader::Loader;
use crate::mode::ProcessingMode;
use crate::rdf;
use iref::IriBuf;
use json_syntax::Value as Json;

/// The configuration bag threaded through every [`super::JsonLdProcessor`]
/// operation (`spec.md` §6's "option highlights" column, collected into
/// one struct the way the teacher's `src/processor/mod.rs` `Options`
/// does), generalized here to also carry the framing and RDF-conversion
/// flags so one bag covers all five operations.
#[derive(Clone, Debug)]
pub struct Options {
	/// Overrides the input document's base IRI.
	pub base: Option<IriBuf>,

	/// Collapse single-element arrays to their sole value during
	/// compaction. Defaults to `true`.
	pub compact_arrays: bool,

	/// Compact an IRI relative to `base` rather than leaving it absolute.
	/// Defaults to `true`.
	pub compact_to_relative: bool,

	/// A context to process before expanding, in addition to the
	/// document's own `@context`.
	pub expand_context: Option<Json>,

	/// Process container-valued entries (`@index`, `@language`, ...) and
	/// object keys in lexicographic order for reproducible output.
	pub ordered: bool,

	pub processing_mode: ProcessingMode,

	/// How `@direction`-tagged strings serialize to RDF. `None` drops the
	/// direction.
	pub rdf_direction: Option<rdf::RdfDirection>,

	/// Emit quads with a blank node predicate or graph name.
	pub produce_generalized_rdf: bool,

	pub embed: framing::Embed,
	pub explicit: bool,
	pub omit_default: bool,
	pub omit_graph: bool,
	pub require_all: bool,
}

impl Default for Options {
	fn default() -> Self {
		Self {
			base: None,
			compact_arrays: true,
			compact_to_relative: true,
			expand_context: None,
			ordered: false,
			processing_mode: ProcessingMode::JsonLd1_1,
			rdf_direction: None,
			produce_generalized_rdf: false,
			embed: framing::Embed::default(),
			explicit: false,
			omit_default: false,
			omit_graph: false,
			require_all: false,
		}
	}
}

impl Options {
	#[must_use]
	pub fn with_base(mut self, base: IriBuf) -> Self {
		self.base = Some(base);
		self
	}

	#[must_use]
	pub fn unordered(mut self) -> Self {
		self.ordered = false;
		self
	}

	pub(super) fn context_processing_options(&self) -> context_processing::Options {
		context_processing::Options {
			processing_mode: self.processing_mode,
			..Default::default()
		}
	}

	pub(super) fn expansion_options(&self) -> expansion::Options {
		expansion::Options {
			processing_mode: self.processing_mode,
			ordered: self.ordered,
			..Default::default()
		}
	}

	pub(super) fn compaction_options(&self) -> compaction::Options {
		compaction::Options {
			processing_mode: self.processing_mode,
			compact_arrays: self.compact_arrays,
			compact_to_relative: self.compact_to_relative,
			ordered: self.ordered,
		}
	}

	pub(super) fn framing_options(&self) -> framing::Options {
		framing::Options {
			embed: self.embed,
			explicit: self.explicit,
			require_all: self.require_all,
			omit_default: self.omit_default,
			omit_graph: self.omit_graph,
			ordered: self.ordered,
		}
	}

	pub(super) fn rdf_options(&self) -> rdf::Options {
		rdf::Options {
			rdf_direction: self.rdf_direction,
			produce_generalized_rdf: self.produce_generalized_rdf,
		}
	}

	/// The active context an operation starts from: `base` applied, and
	/// `expand_context` processed into it if present.
	pub(super) async fn initial_context(&self, loader: &impl Loader) -> Result<Context, Error> {
		let context = Context::new(self.base.clone());
		match &self.expand_context {
			Some(local_context) => Ok(self.process_context_from(&context, local_context, loader).await?),
			None => Ok(context),
		}
	}

	/// Processes `local_context` (a `compact`/`flatten`/`fromRdf` target
	/// context, or `frame`'s own context) starting from a fresh context
	/// carrying just `base`.
	pub(super) async fn process_context(&self, local_context: &Json, loader: &impl Loader) -> Result<Context, Error> {
		let context = Context::new(self.base.clone());
		self.process_context_from(&context, local_context, loader).await
	}

	async fn process_context_from(
		&self,
		active_context: &Context,
		local_context: &Json,
		loader: &impl Loader,
	) -> Result<Context, Error> {
		let mut stack = Stack::new();
		Ok(context_processing::process(
			active_context,
			local_context,
			self.base.as_deref(),
			loader,
			self.context_processing_options(),
			&mut stack,
		)
		.await?)
	}
}
