//! The inverse context: a cache, keyed by expanded IRI, of which terms
//! can compact it and under what container/type/language conditions
//! (`spec.md` §4.1). Built lazily and invalidated whenever the active
//! context it was built from gains or loses a term definition.

use super::{Context, TypeMapping};
use crate::container::ContainerKind;
use crate::term::Term;
use indexmap::IndexMap;

/// What a value's type-or-language class is, for the purposes of
/// `compact_iri`'s term selection. Mirrors the `@language`/`@type`
/// branches of the published inverse-context algorithm.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum TypeOrLanguage {
	/// The value carries this datatype IRI (`@type`).
	Type(String),
	/// The value carries this language tag, or `@none` for "no language".
	Language(Option<String>),
	/// Neither (a node reference with no type coercion requested, or a
	/// container-only match).
	Any,
}

#[derive(Clone, Debug)]
struct Candidate {
	term: String,
	container: ContainerKind,
	reverse: bool,
	type_lang: CandidateKind,
}

#[derive(Clone, Debug)]
enum CandidateKind {
	Type(String),
	Language(Option<String>),
	Any,
	None,
}

/// Preference order used to break ties between candidates that share the
/// best-matching container (`spec.md` §4.1).
const PREFERENCE: &[&str] = &["@language", "@index", "@id", "@type", "@vocab", "@none"];

#[derive(Clone, Debug, Default)]
pub struct InverseContext {
	by_iri: IndexMap<String, Vec<Candidate>>,
}

impl InverseContext {
	pub fn build(context: &Context) -> Self {
		let mut by_iri: IndexMap<String, Vec<Candidate>> = IndexMap::new();

		// Shorter terms first so that, for equally-specific candidates,
		// the first stored is already the shortest; `select_term` still
		// re-sorts on tie-break but this keeps the common case cheap.
		let mut terms: Vec<_> = context.definitions().collect();
		terms.sort_by(|(a, _), (b, _)| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

		for (term, def) in terms {
			let Term::Id(id) = &def.value else {
				continue;
			};
			let type_lang = match &def.type_mapping {
				Some(TypeMapping::Iri(iri)) => CandidateKind::Type(iri.as_str().to_owned()),
				Some(TypeMapping::Id) => CandidateKind::Type("@id".to_owned()),
				Some(TypeMapping::Vocab) => CandidateKind::Type("@vocab".to_owned()),
				Some(TypeMapping::Json) => CandidateKind::Type("@json".to_owned()),
				Some(TypeMapping::None) => CandidateKind::None,
				None => match &def.language_mapping {
					Some(crate::Nullable::Null) => CandidateKind::Language(None),
					Some(crate::Nullable::Some(lang)) => CandidateKind::Language(Some(lang.clone())),
					None => CandidateKind::Any,
				},
			};

			let containers = if def.container.is_empty() {
				vec![ContainerKind::None]
			} else {
				def.container.iter().collect()
			};

			for container in containers {
				by_iri.entry(id.as_str().to_owned()).or_default().push(Candidate {
					term: term.to_owned(),
					container,
					reverse: def.reverse,
					type_lang: type_lang.clone(),
				});
			}
		}

		Self { by_iri }
	}

	pub fn select_term(
		&self,
		_context: &Context,
		iri: &Term,
		container: ContainerKind,
		wanted: TypeOrLanguage,
		reverse: bool,
	) -> Option<String> {
		let candidates = self.by_iri.get(iri.as_str())?;

		let mut best: Option<&Candidate> = None;
		let mut best_score = (usize::MAX, usize::MAX);

		for candidate in candidates {
			if candidate.reverse != reverse {
				continue;
			}
			let container_score = if candidate.container == container { 0 } else { 1 };
			let type_lang_label = match &candidate.type_lang {
				CandidateKind::Type(_) => "@type",
				CandidateKind::Language(_) => "@language",
				CandidateKind::None => "@none",
				CandidateKind::Any => "@none",
			};
			let matches_wanted = match (&candidate.type_lang, &wanted) {
				(CandidateKind::Type(t), TypeOrLanguage::Type(w)) => t == w,
				(CandidateKind::Language(l), TypeOrLanguage::Language(w)) => l == w,
				(CandidateKind::Any, TypeOrLanguage::Any) => true,
				(CandidateKind::None, _) => true,
				_ => false,
			};
			if !matches_wanted {
				continue;
			}
			let pref_rank = PREFERENCE
				.iter()
				.position(|p| *p == type_lang_label)
				.unwrap_or(PREFERENCE.len());
			let score = (container_score, pref_rank);
			if score < best_score || (score == best_score && best.is_some_and(|b| candidate.term.len() < b.term.len())) {
				best_score = score;
				best = Some(candidate);
			}
		}

		best.map(|c| c.term.clone())
	}
}
