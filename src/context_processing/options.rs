use crate::mode::ProcessingMode;

/// Flags threaded through [`super::process`] and [`super::define`],
/// distinct from [`crate::processor::Options`] because they also apply to
/// the internal, recursive calls made while processing scoped contexts
/// (`spec.md` §4.1's `override_protected`, `propagate`,
/// `validate_scoped` inputs).
#[derive(Clone, Copy, Debug)]
pub struct Options {
	pub processing_mode: ProcessingMode,
	pub override_protected: bool,
	pub propagate: bool,
	pub validate_scoped_context: bool,
}

impl Default for Options {
	fn default() -> Self {
		Self {
			processing_mode: ProcessingMode::JsonLd1_1,
			override_protected: false,
			propagate: true,
			validate_scoped_context: true,
		}
	}
}

impl Options {
	#[must_use]
	pub fn with_override_protected(mut self, value: bool) -> Self {
		self.override_protected = value;
		self
	}

	#[must_use]
	pub fn with_propagate(mut self, value: bool) -> Self {
		self.propagate = value;
		self
	}
}
