//! Non-fatal diagnostics.
//!
//! Per `spec.md` §7, malformed language tags and unknown `@`-looking keys
//! in ignored positions are warnings, not errors: the processor "skips"
//! the offending value and keeps going. Callers can observe them through
//! a [`Handler`], or ignore them; either way they are also logged at
//! `warn` level via the `log` facade, matching the teacher's behavior in
//! `core`.

use std::fmt;

/// A non-fatal condition encountered while processing a document.
#[derive(Clone, Debug)]
pub enum Warning {
	/// `@language` (or a language-map key) did not parse as well-formed
	/// BCP47; the tag is kept verbatim.
	MalformedLanguageTag(String),

	/// A key that looks like a keyword (`@` followed by ASCII letters)
	/// but is not one of the keywords this processor recognizes, found in
	/// a position where the specification says to drop it silently.
	UnknownKeywordLikeKey(String),

	/// A `@context` entry whose value was ignored because a later entry
	/// in the same local context takes precedence.
	IgnoredContextEntry(String),

	/// An `@index` entry found where indexing is not meaningful (e.g. on
	/// a non-node, non-`@graph` value) and was dropped.
	IgnoredIndexEntry,
}

impl fmt::Display for Warning {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::MalformedLanguageTag(tag) => write!(f, "malformed language tag `{tag}`"),
			Self::UnknownKeywordLikeKey(key) => write!(f, "unknown keyword-like key `{key}`"),
			Self::IgnoredContextEntry(key) => write!(f, "ignored duplicate context entry `{key}`"),
			Self::IgnoredIndexEntry => write!(f, "ignored @index entry"),
		}
	}
}

/// Receives warnings emitted during processing.
pub trait Handler {
	fn handle(&mut self, warning: Warning);
}

/// A handler that drops every warning after logging it at `warn` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHandler;

impl Handler for LogHandler {
	fn handle(&mut self, warning: Warning) {
		log::warn!("{warning}");
	}
}

/// A handler that collects warnings into a `Vec`, for tests and callers
/// that want to inspect them after the fact.
#[derive(Debug, Default)]
pub struct CollectingHandler(pub Vec<Warning>);

impl Handler for CollectingHandler {
	fn handle(&mut self, warning: Warning) {
		log::debug!("{warning}");
		self.0.push(warning);
	}
}

impl<F: FnMut(Warning)> Handler for F {
	fn handle(&mut self, warning: Warning) {
		(self)(warning)
	}
}
