/// How aggressively framing embeds matched node objects inside their
/// referencing property, versus leaving a bare `{"@id": ...}` reference
/// (`spec.md` §4.5).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Embed {
	Always,
	Once,
	Never,
}

impl Embed {
	pub fn from_keyword(s: &str) -> Option<Self> {
		match s {
			"@always" => Some(Self::Always),
			"@once" => Some(Self::Once),
			"@never" => Some(Self::Never),
			_ => None,
		}
	}
}

impl Default for Embed {
	fn default() -> Self {
		Self::Once
	}
}

/// Flags threaded through the framing algorithm, overridden per frame
/// object by an explicit `@embed`/`@explicit`/`@requireAll` entry
/// (`spec.md` §4.5, §6).
#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
	pub embed: Embed,
	pub explicit: bool,
	pub require_all: bool,
	pub omit_default: bool,
	pub omit_graph: bool,
	pub ordered: bool,
}
