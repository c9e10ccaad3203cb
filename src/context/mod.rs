//! The active context: the mutable-looking, but actually functional,
//! record that governs every IRI/value expansion and compaction decision
//! (`spec.md` §4.1).

mod definition;
pub mod inverse;

use crate::container::{Container, ContainerKind};
use crate::direction::Direction;
use crate::id::Id;
use crate::keyword::Keyword;
use crate::term::Term;
use indexmap::IndexMap;
use iref::{Iri, IriBuf};
use once_cell::sync::OnceCell;

pub use definition::{TermDefinition, TypeMapping};
pub use inverse::InverseContext;

/// A processed active context.
///
/// Parsing (see [`crate::context_processing::process`]) never mutates a
/// `Context` in place: every step returns a new one, with the context it
/// was built from reachable through [`Context::previous`] so that a
/// property-scoped `@context: null` can restore it. Clone is shallow-ish
/// (an `Rc`-free deep clone, since nothing here is large) and contexts
/// are expected to be shared by reference across the recursive calls
/// that consume them rather than cloned per-call.
#[derive(Clone, Debug)]
pub struct Context {
	original_base_url: Option<IriBuf>,
	base_iri: Option<IriBuf>,
	vocab: Option<Term>,
	default_language: Option<String>,
	default_base_direction: Option<Direction>,
	previous_context: Option<Box<Context>>,
	definitions: IndexMap<String, TermDefinition>,
	inverse: OnceCell<InverseContext>,
}

impl Default for Context {
	fn default() -> Self {
		Self {
			original_base_url: None,
			base_iri: None,
			vocab: None,
			default_language: None,
			default_base_direction: None,
			previous_context: None,
			definitions: IndexMap::new(),
			inverse: OnceCell::new(),
		}
	}
}

impl Context {
	pub fn new(base_iri: Option<IriBuf>) -> Self {
		Self {
			original_base_url: base_iri.clone(),
			base_iri,
			..Self::default()
		}
	}

	pub fn original_base_url(&self) -> Option<&Iri> {
		self.original_base_url.as_deref()
	}

	pub fn base_iri(&self) -> Option<&Iri> {
		self.base_iri.as_deref()
	}

	pub fn set_base_iri(&mut self, base: Option<IriBuf>) {
		self.base_iri = base;
	}

	pub fn vocab(&self) -> Option<&Term> {
		self.vocab.as_ref()
	}

	pub fn set_vocab(&mut self, vocab: Option<Term>) {
		self.vocab = vocab;
	}

	pub fn default_language(&self) -> Option<&str> {
		self.default_language.as_deref()
	}

	pub fn set_default_language(&mut self, lang: Option<String>) {
		self.default_language = lang;
	}

	pub fn default_base_direction(&self) -> Option<Direction> {
		self.default_base_direction
	}

	pub fn set_default_base_direction(&mut self, dir: Option<Direction>) {
		self.default_base_direction = dir;
	}

	pub fn previous(&self) -> Option<&Context> {
		self.previous_context.as_deref()
	}

	pub fn set_previous(&mut self, previous: Context) {
		self.previous_context = Some(Box::new(previous));
	}

	/// Looks up `term`'s definition, including keywords pseudo-defined by
	/// nothing (keywords are never in `definitions`; callers check
	/// `Keyword::try_from` first).
	pub fn get(&self, term: &str) -> Option<&TermDefinition> {
		self.definitions.get(term)
	}

	pub fn contains_term(&self, term: &str) -> bool {
		self.definitions.contains_key(term)
	}

	pub fn insert(&mut self, term: String, definition: Option<TermDefinition>) {
		self.invalidate_inverse();
		match definition {
			Some(def) => {
				self.definitions.insert(term, def);
			}
			None => {
				self.definitions.shift_remove(&term);
			}
		}
	}

	pub fn definitions(&self) -> impl Iterator<Item = (&str, &TermDefinition)> {
		self.definitions.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// The set-valued `@container` of `term`'s definition, or the empty
	/// set if `term` is undefined.
	pub fn container(&self, term: &str) -> Container {
		self.get(term).map(|d| d.container.clone()).unwrap_or_default()
	}

	/// The `@type`/`@language`/`@direction` coercion of `term`'s
	/// definition, if any.
	pub fn coerce(&self, term: &str) -> Option<&TypeMapping> {
		self.get(term).and_then(|d| d.type_mapping.as_ref())
	}

	/// Whether `term` is marked `@reverse` in its definition.
	pub fn reverse(&self, term: &str) -> bool {
		self.get(term).map(|d| d.reverse).unwrap_or(false)
	}

	/// Invalidates the cached [`InverseContext`]; called whenever a term
	/// definition is added or removed (`spec.md` §5: "it must be
	/// invalidated when the context is mutated").
	fn invalidate_inverse(&mut self) {
		self.inverse = OnceCell::new();
	}

	/// Returns the lazily built inverse context used by `compact_iri`.
	pub fn inverse(&self) -> &InverseContext {
		self.inverse.get_or_init(|| InverseContext::build(self))
	}

	/// IRI/value/value/keyword expansion (`spec.md` §4.1).
	///
	/// `document_relative` resolves relative IRIs against [`Self::base_iri`];
	/// `vocab` additionally allows expansion through a term definition or
	/// `@vocab`.
	pub fn expand_iri(&self, value: &str, document_relative: bool, vocab: bool) -> Option<Term> {
		if value.is_empty() {
			return None;
		}

		if let Ok(kw) = Keyword::try_from(value) {
			return Some(Term::Keyword(kw));
		}

		if crate::id::is_blank_node_id(value) {
			return rdf_types::BlankIdBuf::new(value.to_owned())
				.ok()
				.map(|b| Term::Id(Id::Blank(b)));
		}

		if let Some((prefix, suffix)) = value.split_once(':') {
			if prefix != "_" && !suffix.starts_with("//") {
				if let Some(def) = self.get(prefix) {
					if def.prefix {
						if let Term::Id(Id::Iri(prefix_iri)) = &def.value {
							let mut expanded = prefix_iri.as_str().to_owned();
							expanded.push_str(suffix);
							return IriBuf::new(expanded).ok().map(|iri| Term::Id(Id::Iri(iri)));
						}
					}
				}
			}
			if IriBuf::new(value.to_owned()).is_ok() {
				return IriBuf::new(value.to_owned()).ok().map(|iri| Term::Id(Id::Iri(iri)));
			}
		}

		if vocab {
			if let Some(def) = self.get(value) {
				return Some(def.value.clone());
			}
		}

		if vocab {
			if let Some(Term::Id(Id::Iri(vocab_iri))) = self.vocab() {
				let mut expanded = vocab_iri.as_str().to_owned();
				expanded.push_str(value);
				return IriBuf::new(expanded).ok().map(|iri| Term::Id(Id::Iri(iri)));
			}
		}

		if document_relative {
			if let Some(base) = self.base_iri() {
				if let Ok(resolved) = IriBuf::new(value.to_owned()) {
					return Some(Term::Id(Id::Iri(resolved)));
				}
				return Some(Term::Id(Id::Iri(base.resolved(
					iref::IriRef::new(value).unwrap_or_else(|_| iref::IriRef::new("").unwrap()),
				))));
			}
		}

		if self.vocab().is_none() && !value.contains(':') {
			return None;
		}

		Some(Term::Id(Id::from_string(value.to_owned())))
	}

	/// The inverse of [`Self::expand_iri`]: picks the shortest usable term,
	/// compact IRI, or IRI for `iri`, preferring terms whose container and
	/// type/language match how `iri` is about to be used
	/// (`spec.md` §4.1).
	pub fn compact_iri(
		&self,
		iri: &Term,
		container: ContainerKind,
		type_language: inverse::TypeOrLanguage,
		vocab: bool,
		reverse: bool,
	) -> Option<String> {
		self.inverse()
			.select_term(self, iri, container, type_language, reverse)
			.or_else(|| {
				if vocab {
					None
				} else {
					self.compact_iri_fallback(iri)
				}
			})
			.or_else(|| self.compact_iri_fallback(iri))
	}

	fn compact_iri_fallback(&self, iri: &Term) -> Option<String> {
		let Term::Id(Id::Iri(iri)) = iri else {
			return Some(iri.as_str().to_owned());
		};
		if let Some(Term::Id(Id::Iri(vocab))) = self.vocab() {
			if let Some(suffix) = iri.as_str().strip_prefix(vocab.as_str()) {
				if !suffix.is_empty() && self.get(suffix).is_none() {
					return Some(suffix.to_owned());
				}
			}
		}
		for (term, def) in self.definitions() {
			if def.prefix {
				if let Term::Id(Id::Iri(prefix_iri)) = &def.value {
					if let Some(suffix) = iri.as_str().strip_prefix(prefix_iri.as_str()) {
						if !suffix.is_empty() && !suffix.starts_with("//") {
							return Some(format!("{term}:{suffix}"));
						}
					}
				}
			}
		}
		if let Some(base) = self.base_iri() {
			if let Some(relative) = iri.as_str().strip_prefix(base.as_str()) {
				return Some(relative.to_owned());
			}
		}
		Some(iri.as_str().to_owned())
	}
}
