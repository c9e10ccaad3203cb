//! Context Processing Algorithm (`spec.md` §4.1): turns a raw `@context`
//! value into an active [`Context`], and turns one entry of that value
//! into a [`TermDefinition`].

mod error;
mod options;
mod stack;

pub use error::Error;
pub use options::Options;
pub use stack::Stack;

use crate::container::{Container, ContainerKind};
use crate::context::{Context, TermDefinition, TypeMapping};
use crate::direction::Direction;
use crate::id::Id;
use crate::json_util;
use crate::keyword::{looks_like_keyword, Keyword};
use crate::loader::Loader;
use crate::mode::ProcessingMode;
use crate::nullable::Nullable;
use crate::term::Term;
use iref::{Iri, IriBuf};
use json_syntax::object::Entry;
use json_syntax::{Object, Value};
use std::collections::HashMap;

/// Processes `local_context` against `active_context`, returning the
/// resulting active context.
///
/// `local_context` is folded left to right when it is an array, exactly
/// as a document's `@context` entry may itself be an array of context
/// values (`spec.md` §3).
pub async fn process(
	active_context: &Context,
	local_context: &Value,
	base_url: Option<&Iri>,
	loader: &impl Loader,
	options: Options,
	stack: &mut Stack,
) -> Result<Context, Error> {
	let mut result = active_context.clone();

	for item in json_util::as_array(local_context) {
		result = process_one(&result, item, base_url, loader, options, stack).await?;
	}

	Ok(result)
}

async fn process_one(
	active_context: &Context,
	item: &Value,
	base_url: Option<&Iri>,
	loader: &impl Loader,
	options: Options,
	stack: &mut Stack,
) -> Result<Context, Error> {
	match item {
		Value::Null => {
			if active_context.definitions().any(|(_, d)| d.protected) && !options.override_protected {
				return Err(Error::InvalidContextNullification);
			}
			Ok(Context::new(active_context.original_base_url().map(Iri::to_owned)))
		}
		Value::String(s) => {
			let resolved = resolve(s.as_str(), base_url)?;
			stack.enter_remote_context(resolved.as_str())?;
			let loaded = loader
				.load(resolved.as_iri())
				.await
				.map_err(|e| Error::LoadingRemoteContextFailed(resolved.to_string(), e.to_string()))?;
			let remote_context = match &loaded.document {
				Value::Object(obj) => json_util::get(obj, "@context")
					.ok_or_else(|| Error::InvalidRemoteContext(resolved.to_string()))?,
				_ => return Err(Error::InvalidRemoteContext(resolved.to_string())),
			};
			let result = Box::pin(process(
				active_context,
				&remote_context,
				Some(resolved.as_iri()),
				loader,
				options,
				stack,
			))
			.await?;
			stack.exit_remote_context(resolved.as_str());
			Ok(result)
		}
		Value::Object(obj) => process_object(active_context, obj, base_url, loader, options, stack).await,
		other => Err(Error::InvalidContextEntry(format!("{other:?}"))),
	}
}

fn resolve(value: &str, base_url: Option<&Iri>) -> Result<IriBuf, Error> {
	if let Ok(iri) = IriBuf::new(value.to_owned()) {
		return Ok(iri);
	}
	let base = base_url.ok_or_else(|| Error::InvalidContextEntry(value.to_owned()))?;
	let iri_ref = iref::IriRef::new(value).map_err(|_| Error::InvalidContextEntry(value.to_owned()))?;
	Ok(base.resolved(iri_ref))
}

const LEADING_KEYWORDS: &[&str] = &[
	"@version", "@import", "@base", "@vocab", "@language", "@direction", "@propagate",
];

async fn process_object(
	active_context: &Context,
	obj: &Object,
	base_url: Option<&Iri>,
	loader: &impl Loader,
	options: Options,
	stack: &mut Stack,
) -> Result<Context, Error> {
	let mut result = active_context.clone();

	if let Some(v) = json_util::get(obj, "@version") {
		if v.as_number().map(|n| n.as_str()) != Some("1.1") {
			return Err(Error::InvalidVersionValue(format!("{v:?}")));
		}
	}

	if let Some(v) = json_util::get(obj, "@import") {
		let url = v.as_str().ok_or_else(|| Error::InvalidImportValue(format!("{v:?}")))?;
		let resolved = resolve(url, base_url)?;
		let loaded = loader
			.load(resolved.as_iri())
			.await
			.map_err(|e| Error::LoadingRemoteContextFailed(resolved.to_string(), e.to_string()))?;
		let imported = match &loaded.document {
			Value::Object(o) => json_util::get(o, "@context").unwrap_or_else(|| Value::Object(o.clone())),
			_ => return Err(Error::InvalidRemoteContext(resolved.to_string())),
		};
		let Value::Object(imported_obj) = &imported else {
			return Err(Error::InvalidRemoteContext(resolved.to_string()));
		};
		if json_util::get(imported_obj, "@import").is_some() {
			return Err(Error::InvalidContextEntry("@import".to_owned()));
		}
		let merged = merge_objects(imported_obj, obj);
		return Box::pin(process_object(active_context, &merged, base_url, loader, options, stack)).await;
	}

	if let Some(v) = json_util::get(obj, "@base") {
		match &v {
			Value::Null => result.set_base_iri(None),
			Value::String(s) => {
				let resolved = match result.base_iri() {
					Some(base) => iref::IriRef::new(s.as_str())
						.map(|r| base.resolved(r))
						.map_err(|_| Error::InvalidBaseIri(s.to_string()))?,
					None => IriBuf::new(s.to_string()).map_err(|_| Error::InvalidBaseIri(s.to_string()))?,
				};
				result.set_base_iri(Some(resolved));
			}
			_ => return Err(Error::InvalidBaseIri(format!("{v:?}"))),
		}
	}

	if let Some(v) = json_util::get(obj, "@vocab") {
		match &v {
			Value::Null => result.set_vocab(None),
			Value::String(s) if s.as_str().is_empty() => {
				result.set_vocab(Some(Id::from_string(String::new()).into_term()))
			}
			Value::String(s) => {
				let term = result
					.expand_iri(s.as_str(), true, true)
					.ok_or_else(|| Error::InvalidVocabMapping(s.to_string()))?;
				result.set_vocab(Some(term));
			}
			_ => return Err(Error::InvalidVocabMapping(format!("{v:?}"))),
		}
	}

	if let Some(v) = json_util::get(obj, "@language") {
		match &v {
			Value::Null => result.set_default_language(None),
			Value::String(s) => result.set_default_language(Some(s.to_string())),
			_ => return Err(Error::InvalidDefaultLanguage(format!("{v:?}"))),
		}
	}

	if let Some(v) = json_util::get(obj, "@direction") {
		match &v {
			Value::Null => result.set_default_base_direction(None),
			Value::String(s) => {
				let dir = Direction::try_from(s.as_str()).map_err(|_| Error::InvalidBaseDirection(s.to_string()))?;
				result.set_default_base_direction(Some(dir));
			}
			_ => return Err(Error::InvalidBaseDirection(format!("{v:?}"))),
		}
	}

	if let Some(v) = json_util::get(obj, "@propagate") {
		if !matches!(v, Value::Boolean(_)) {
			return Err(Error::InvalidPropagateValue);
		}
	}

	let mut defined: HashMap<String, bool> = HashMap::new();
	for (key, _) in json_util::ordered_entries(obj) {
		if LEADING_KEYWORDS.contains(&key.as_str()) || key == "@context" {
			continue;
		}
		define(&mut result, obj, &key, &mut defined, base_url, options)?;
	}

	Ok(result)
}

/// Shallow merge of two context objects: `overlay`'s entries take
/// precedence over `base`'s, with `base`'s non-overridden entries kept
/// ahead of `overlay`'s own (`spec.md` §4.1 `@import`).
fn merge_objects(base: &Object, overlay: &Object) -> Object {
	let mut merged = Object::new();
	for Entry { key, value } in base.clone() {
		if json_util::get(overlay, key.as_str()).is_none() {
			merged.insert(key, value);
		}
	}
	for Entry { key, value } in overlay.clone() {
		if key.as_str() != "@import" {
			merged.insert(key, value);
		}
	}
	merged
}

/// Create Term Definition (`spec.md` §4.1): resolves `term`'s entry in
/// `local_context` into a [`TermDefinition`] and installs it (or removes
/// it, for a null definition) on `active_context`.
fn define(
	active_context: &mut Context,
	local_context: &Object,
	term: &str,
	defined: &mut HashMap<String, bool>,
	base_url: Option<&Iri>,
	options: Options,
) -> Result<(), Error> {
	match defined.get(term) {
		Some(true) => return Ok(()),
		Some(false) => return Err(Error::CyclicIriMapping(term.to_owned())),
		None => {}
	}

	let Some(value) = json_util::get(local_context, term) else {
		return Ok(());
	};

	if term.is_empty() {
		return Err(Error::InvalidTermDefinition(term.to_owned(), "empty term".to_owned()));
	}

	if let Ok(kw) = Keyword::try_from(term) {
		if kw != Keyword::Type {
			return Err(Error::KeywordRedefinition(term.to_owned()));
		}
		if !is_valid_protected_type_redefinition(&value) {
			return Err(Error::KeywordRedefinition(term.to_owned()));
		}
	} else if looks_like_keyword(term) {
		// Reserved-looking but unrecognized keys are silently ignored
		// rather than treated as terms.
		defined.insert(term.to_owned(), true);
		return Ok(());
	}

	defined.insert(term.to_owned(), false);

	let previous_definition = active_context.get(term).cloned();

	if matches!(value, Value::Null) {
		active_context.insert(term.to_owned(), None);
		defined.insert(term.to_owned(), true);
		return Ok(());
	}

	let value_obj: Object = match value {
		Value::String(s) => {
			let mut o = Object::new();
			o.insert("@id".into(), Value::String(s));
			o
		}
		Value::Object(o) => {
			if let Some(Value::Null) = json_util::get(&o, "@id") {
				active_context.insert(term.to_owned(), None);
				defined.insert(term.to_owned(), true);
				return Ok(());
			}
			o
		}
		other => return Err(Error::InvalidTermDefinition(term.to_owned(), format!("{other:?}"))),
	};
	let value_obj = &value_obj;

	let protected = matches!(json_util::get(value_obj, "@protected"), Some(Value::Boolean(true)));

	let mut def = TermDefinition::new(Term::Keyword(Keyword::None));
	def.protected = protected;

	let mut has_type = false;
	if let Some(type_value) = json_util::get(value_obj, "@type") {
		let type_str = type_value
			.as_str()
			.ok_or_else(|| Error::InvalidTypeMapping(term.to_owned(), format!("{type_value:?}")))?;
		let expanded = active_context
			.expand_iri(type_str, false, true)
			.ok_or_else(|| Error::InvalidTypeMapping(term.to_owned(), type_str.to_owned()))?;
		def.type_mapping = Some(match &expanded {
			Term::Keyword(Keyword::Id) => TypeMapping::Id,
			Term::Keyword(Keyword::Vocab) => TypeMapping::Vocab,
			Term::Keyword(Keyword::Json) => TypeMapping::Json,
			Term::Keyword(Keyword::None) => TypeMapping::None,
			Term::Id(Id::Iri(iri)) => TypeMapping::Iri(iri.clone()),
			_ => return Err(Error::InvalidTypeMapping(term.to_owned(), type_str.to_owned())),
		});
		has_type = true;
	}

	let has_reverse = json_util::get(value_obj, "@reverse").is_some();
	let has_id = json_util::get(value_obj, "@id").is_some();
	if has_reverse && has_id {
		return Err(Error::InvalidReverseProperty(term.to_owned()));
	}

	if has_reverse {
		let reverse_value = json_util::get(value_obj, "@reverse").unwrap();
		let s = reverse_value
			.as_str()
			.ok_or_else(|| Error::InvalidReversePropertyValue(term.to_owned()))?
			.to_owned();
		let expanded = expand_with_forward_define(active_context, local_context, &s, defined, base_url, options)?
			.ok_or_else(|| Error::InvalidIriMapping(term.to_owned(), s.clone()))?;
		match &expanded {
			Term::Id(_) => def.value = expanded,
			_ => return Err(Error::InvalidIriMapping(term.to_owned(), s)),
		}
		def.reverse = true;
	} else if has_id {
		let id_value = json_util::get(value_obj, "@id").unwrap();
		let s = id_value
			.as_str()
			.ok_or_else(|| Error::InvalidIriMapping(term.to_owned(), format!("{id_value:?}")))?
			.to_owned();
		if s != term {
			let expanded = expand_with_forward_define(active_context, local_context, &s, defined, base_url, options)?
				.ok_or_else(|| Error::InvalidIriMapping(term.to_owned(), s.clone()))?;
			match &expanded {
				Term::Id(_) => def.value = expanded,
				Term::Keyword(k) if k.is_keyword_expandable_as_term() => def.value = expanded,
				_ => return Err(Error::InvalidIriMapping(term.to_owned(), s)),
			}
		} else {
			def.value = infer_id_from_term(active_context, term)
				.ok_or_else(|| Error::InvalidIriMapping(term.to_owned(), term.to_owned()))?;
		}
	} else {
		def.value = infer_id_from_term(active_context, term)
			.ok_or_else(|| Error::InvalidIriMapping(term.to_owned(), term.to_owned()))?;
	}

	if let Some(container_value) = json_util::get(value_obj, "@container") {
		let kinds: Vec<ContainerKind> = json_util::as_str_array(&container_value)
			.iter()
			.map(|s| {
				Keyword::try_from(s.as_str())
					.ok()
					.and_then(|k| ContainerKind::try_from(k).ok())
					.ok_or_else(|| Error::InvalidContainerMapping(term.to_owned(), s.clone()))
			})
			.collect::<Result<_, _>>()?;
		let container = Container::from_kinds(kinds);
		if !container.is_valid_combination() {
			return Err(Error::InvalidContainerMapping(term.to_owned(), format!("{container_value:?}")));
		}
		if container.contains(ContainerKind::Type) && !has_type {
			def.type_mapping = Some(TypeMapping::Id);
		}
		def.container = container;
	}

	if let Some(lang_value) = json_util::get(value_obj, "@language") {
		def.language_mapping = Some(match &lang_value {
			Value::Null => Nullable::Null,
			Value::String(s) => Nullable::Some(s.to_string()),
			_ => return Err(Error::InvalidLanguageMapping(term.to_owned())),
		});
	}

	if let Some(dir_value) = json_util::get(value_obj, "@direction") {
		def.direction_mapping = Some(match &dir_value {
			Value::Null => Nullable::Null,
			Value::String(s) => Nullable::Some(
				Direction::try_from(s.as_str()).map_err(|_| Error::InvalidBaseDirection(s.to_string()))?,
			),
			_ => return Err(Error::InvalidBaseDirection(format!("{dir_value:?}"))),
		});
	}

	if let Some(nest_value) = json_util::get(value_obj, "@nest") {
		let s = nest_value
			.as_str()
			.ok_or_else(|| Error::InvalidNestValue(term.to_owned()))?;
		if looks_like_keyword(s) && Keyword::try_from(s) != Ok(Keyword::Nest) {
			return Err(Error::InvalidNestValue(term.to_owned()));
		}
		def.nest = Some(s.to_owned());
	}

	if let Some(index_value) = json_util::get(value_obj, "@index") {
		def.index = Some(
			index_value
				.as_str()
				.ok_or_else(|| Error::InvalidTermDefinition(term.to_owned(), "@index must be a string".to_owned()))?
				.to_owned(),
		);
	}

	if let Some(ctx_value) = json_util::get(value_obj, "@context") {
		def.local_context = Some(ctx_value);
		def.base_url = base_url.map(Iri::to_owned);
	}

	if let Some(prefix_value) = json_util::get(value_obj, "@prefix") {
		def.prefix = match prefix_value {
			Value::Boolean(b) => b,
			_ => return Err(Error::InvalidPrefixValue(term.to_owned())),
		};
		if def.prefix && term.contains(':') {
			return Err(Error::InvalidTermDefinition(term.to_owned(), "@prefix term must not contain ':'".to_owned()));
		}
	} else if !term.contains(':') && !term.contains('/') {
		if let Term::Id(Id::Iri(iri)) = &def.value {
			if options.processing_mode != ProcessingMode::JsonLd1_0 {
				def.prefix = ends_with_gen_delim(iri.as_str());
			}
		}
	}

	if let Some(previous) = &previous_definition {
		if previous.protected && !options.override_protected && !def.is_identical_to(previous) {
			return Err(Error::ProtectedTermRedefinition(term.to_owned()));
		}
	}

	active_context.insert(term.to_owned(), Some(def));
	defined.insert(term.to_owned(), true);
	Ok(())
}

/// `true` if `s` ends with a URI generic-delimiter character, the
/// condition under which a 1.1 processor defaults an undeclared term's
/// `@prefix` to true when its IRI mapping is compact-IRI-usable.
fn ends_with_gen_delim(s: &str) -> bool {
	matches!(s.chars().last(), Some(':' | '/' | '?' | '#' | '[' | ']' | '@'))
}

fn is_valid_protected_type_redefinition(value: &Value) -> bool {
	let Value::Object(obj) = value else { return false };
	obj.clone().into_iter().all(|Entry { key, .. }| matches!(key.as_str(), "@container" | "@protected"))
		&& json_util::get(obj, "@container")
			.map(|c| json_util::as_str_array(&c) == vec!["@set".to_owned()])
			.unwrap_or(true)
}

/// Expands `value` through `active_context`, first recursively defining
/// `value`'s compact-IRI prefix (or `value` itself) if it names a term
/// that appears in `local_context` but has not been processed yet —
/// the forward-reference case the algorithm requires term definitions to
/// support (`spec.md` §4.1).
fn expand_with_forward_define(
	active_context: &mut Context,
	local_context: &Object,
	value: &str,
	defined: &mut HashMap<String, bool>,
	base_url: Option<&Iri>,
	options: Options,
) -> Result<Option<Term>, Error> {
	let prefix = value.split_once(':').map(|(p, _)| p).unwrap_or(value);
	if json_util::get(local_context, prefix).is_some() && !defined.get(prefix).copied().unwrap_or(false) {
		define(active_context, local_context, prefix, defined, base_url, options)?;
	}
	Ok(active_context.expand_iri(value, true, true))
}

fn infer_id_from_term(active_context: &Context, term: &str) -> Option<Term> {
	if term.contains(':') {
		return active_context.expand_iri(term, false, true);
	}
	if let Some(Term::Id(Id::Iri(vocab))) = active_context.vocab() {
		let mut expanded = vocab.as_str().to_owned();
		expanded.push_str(term);
		return IriBuf::new(expanded).ok().map(|iri| Term::Id(Id::Iri(iri)));
	}
	None
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::loader::NoLoader;

	fn parse(s: &str) -> Value {
		json_syntax::Value::parse_str(s).expect("valid json").0
	}

	#[tokio::test]
	async fn simple_vocab_and_term() {
		let active = Context::default();
		let local = parse(r#"{"@vocab": "http://example.org/", "name": "http://example.org/name"}"#);
		let result = process(&active, &local, None, &NoLoader, Options::default(), &mut Stack::new())
			.await
			.unwrap();
		assert_eq!(result.vocab().unwrap().as_str(), "http://example.org/");
		assert_eq!(result.get("name").unwrap().value.as_str(), "http://example.org/name");
	}

	#[tokio::test]
	async fn protected_term_cannot_be_redefined() {
		let active = Context::default();
		let local = parse(r#"{"name": {"@id": "http://example.org/name", "@protected": true}}"#);
		let once = process(&active, &local, None, &NoLoader, Options::default(), &mut Stack::new())
			.await
			.unwrap();
		let redefine = parse(r#"{"name": "http://example.org/other"}"#);
		let err = process(&once, &redefine, None, &NoLoader, Options::default(), &mut Stack::new()).await;
		assert!(err.is_err());
	}

	#[tokio::test]
	async fn null_local_context_resets() {
		let active = Context::new(Some(IriBuf::new("http://example.org/".to_string()).unwrap()));
		let local = Value::Null;
		let result = process(&active, &local, None, &NoLoader, Options::default(), &mut Stack::new())
			.await
			.unwrap();
		assert!(result.definitions().next().is_none());
	}
}
