use crate::Keyword;

/// A single container kind a term definition may request.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ContainerKind {
	Graph,
	Id,
	Index,
	Language,
	List,
	Set,
	Type,
	None,
}

impl ContainerKind {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Graph => "@graph",
			Self::Id => "@id",
			Self::Index => "@index",
			Self::Language => "@language",
			Self::List => "@list",
			Self::Set => "@set",
			Self::Type => "@type",
			Self::None => "@none",
		}
	}
}

impl TryFrom<Keyword> for ContainerKind {
	type Error = Keyword;

	fn try_from(k: Keyword) -> Result<Self, Keyword> {
		match k {
			Keyword::Graph => Ok(Self::Graph),
			Keyword::Id => Ok(Self::Id),
			Keyword::Index => Ok(Self::Index),
			Keyword::Language => Ok(Self::Language),
			Keyword::List => Ok(Self::List),
			Keyword::Set => Ok(Self::Set),
			Keyword::Type => Ok(Self::Type),
			Keyword::None => Ok(Self::None),
			other => Err(other),
		}
	}
}

/// The `@container` value of a term definition: a set of [`ContainerKind`],
/// since JSON-LD 1.1 allows combinations like `["@graph", "@id"]` or
/// `["@set", "@list"]`.
///
/// Stored as a small sorted vector rather than a bitset: the set is
/// always tiny (at most 4 members appear in any valid combination defined
/// by the specification) and keeping it ordered makes the combination
/// checks in [`Container::is_valid_combination`] straightforward pattern
/// matches instead of bit arithmetic.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Container(smallvec::SmallVec<[ContainerKind; 3]>);

impl Container {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn single(kind: ContainerKind) -> Self {
		let mut c = Self::new();
		c.0.push(kind);
		c
	}

	pub fn from_kinds(kinds: impl IntoIterator<Item = ContainerKind>) -> Self {
		let mut v: smallvec::SmallVec<[ContainerKind; 3]> = kinds.into_iter().collect();
        v.sort_unstable();
        v.dedup();
		Self(v)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn contains(&self, kind: ContainerKind) -> bool {
		self.0.contains(&kind)
	}

	pub fn iter(&self) -> impl Iterator<Item = ContainerKind> + '_ {
		self.0.iter().copied()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether this is one of the container combinations §4.1's Term
	/// definition record allows: any single kind, or one of
	/// `{@set,@list}`-free combinations paired with `@graph`/`@id`/`@index`/
	/// `@language`/`@type`, or `@set` paired with any other single kind.
	pub fn is_valid_combination(&self) -> bool {
		match self.0.as_slice() {
			[] => true,
			[_] => true,
			[a, b] => {
				*a == ContainerKind::Set && *b != ContainerKind::List
					|| *b == ContainerKind::Set && *a != ContainerKind::List
					|| (*a == ContainerKind::Graph && *b == ContainerKind::Id)
					|| (*a == ContainerKind::Graph && *b == ContainerKind::Index)
			}
			[a, b, c] => {
				*a == ContainerKind::Graph
					&& *b == ContainerKind::Id
					&& *c == ContainerKind::Set
			}
			_ => false,
		}
	}
}

impl FromIterator<ContainerKind> for Container {
	fn from_iter<T: IntoIterator<Item = ContainerKind>>(iter: T) -> Self {
		Self::from_kinds(iter)
	}
}
