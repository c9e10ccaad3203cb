use crate::mode::ProcessingMode;

/// Whether a 1.0-era ambiguity is resolved the strict 1.1 way or the
/// permissive legacy way a processor might still be asked to support.
///
/// `spec.md` doesn't name this, but a processor that claims 1.1 support
/// while still being fed 1.0-authored contexts needs somewhere to hang
/// the "a term and a property-generator-shaped container collide"
/// leniency switch; keeping it a variant on an enum rather than a bare
/// `bool` leaves room for future legacy toggles without growing the
/// `Options` field list.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Policy {
	#[default]
	Standard,
	AllowPropertyGenerators,
}

/// Flags threaded through the expansion algorithm (`spec.md` §4.2).
#[derive(Clone, Copy, Debug)]
pub struct Options {
	pub processing_mode: ProcessingMode,
	/// Whether map-valued containers (`@index`, `@language`, ...) are
	/// walked in lexicographic key order rather than insertion order, for
	/// callers that want reproducible output.
	pub ordered: bool,
	pub policy: Policy,
}

impl Default for Options {
	fn default() -> Self {
		Self {
			processing_mode: ProcessingMode::JsonLd1_1,
			ordered: false,
			policy: Policy::default(),
		}
	}
}

impl Options {
	#[must_use]
	pub fn with_ordered(mut self, ordered: bool) -> Self {
		self.ordered = ordered;
		self
	}
}
