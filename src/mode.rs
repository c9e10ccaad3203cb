use std::fmt;

/// JSON-LD processing mode.
///
/// Selects between the JSON-LD 1.0 and 1.1 processing algorithms where
/// they differ (scoped contexts, `@nest`, `@included`, `@direction`,
/// property-scoped `@protected`, and the property-generator legacy
/// behavior gated by [`crate::expansion::Policy`]).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum ProcessingMode {
	/// JSON-LD 1.0.
	JsonLd1_0,

	/// JSON-LD 1.1.
	#[default]
	JsonLd1_1,
}

impl ProcessingMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::JsonLd1_0 => "json-ld-1.0",
			Self::JsonLd1_1 => "json-ld-1.1",
		}
	}
}

impl fmt::Display for ProcessingMode {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
