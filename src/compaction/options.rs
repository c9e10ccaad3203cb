use crate::mode::ProcessingMode;

/// Flags threaded through the compaction algorithm (`spec.md` §4.3, §6).
#[derive(Clone, Copy, Debug)]
pub struct Options {
	pub processing_mode: ProcessingMode,
	/// Collapse single-element arrays to their sole value. Defaults to
	/// `true`, matching the API table's `compactArrays (default true)`.
	pub compact_arrays: bool,
	/// Compact an IRI that is relative to `@base` to a relative IRI rather
	/// than leaving it absolute.
	pub compact_to_relative: bool,
	pub ordered: bool,
}

impl Default for Options {
	fn default() -> Self {
		Self {
			processing_mode: ProcessingMode::JsonLd1_1,
			compact_arrays: true,
			compact_to_relative: true,
			ordered: false,
		}
	}
}

impl Options {
	#[must_use]
	pub fn with_compact_arrays(mut self, value: bool) -> Self {
		self.compact_arrays = value;
		self
	}
}
