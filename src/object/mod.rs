//! Expanded-form objects: nodes, values and lists, each optionally
//! carrying an `@index`.

pub mod list;
pub mod node;
pub mod value;

pub use list::List;
pub use node::Node;
pub use value::{LangString, Literal, Value};

/// A value, node or list object together with its `@index`, if any.
///
/// `@index` is the one annotation the specification allows on every kind
/// of expanded object, so it is factored out here instead of being a
/// field of `Object`'s three variants individually.
#[derive(Clone, PartialEq, Debug)]
pub struct Indexed<T> {
	inner: T,
	index: Option<String>,
}

impl<T> Indexed<T> {
	pub fn new(inner: T, index: Option<String>) -> Self {
		Self { inner, index }
	}

	pub fn index(&self) -> Option<&str> {
		self.index.as_deref()
	}

	pub fn set_index(&mut self, index: Option<String>) {
		self.index = index;
	}

	pub fn inner(&self) -> &T {
		&self.inner
	}

	pub fn inner_mut(&mut self) -> &mut T {
		&mut self.inner
	}

	pub fn into_inner(self) -> T {
		self.inner
	}

	pub fn into_parts(self) -> (T, Option<String>) {
		(self.inner, self.index)
	}

	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Indexed<U> {
		Indexed::new(f(self.inner), self.index)
	}
}

impl<T> std::ops::Deref for Indexed<T> {
	type Target = T;

	fn deref(&self) -> &T {
		&self.inner
	}
}

impl<T> std::ops::DerefMut for Indexed<T> {
	fn deref_mut(&mut self) -> &mut T {
		&mut self.inner
	}
}

/// A node, value or list object.
#[derive(Clone, PartialEq, Debug)]
pub enum Object {
	Value(Value),
	Node(Node),
	List(List),
}

impl Object {
	pub fn as_node(&self) -> Option<&Node> {
		match self {
			Self::Node(n) => Some(n),
			_ => None,
		}
	}

	pub fn as_node_mut(&mut self) -> Option<&mut Node> {
		match self {
			Self::Node(n) => Some(n),
			_ => None,
		}
	}

	pub fn into_node(self) -> Option<Node> {
		match self {
			Self::Node(n) => Some(n),
			_ => None,
		}
	}

	pub fn as_value(&self) -> Option<&Value> {
		match self {
			Self::Value(v) => Some(v),
			_ => None,
		}
	}

	pub fn as_list(&self) -> Option<&List> {
		match self {
			Self::List(l) => Some(l),
			_ => None,
		}
	}

	pub fn is_node(&self) -> bool {
		matches!(self, Self::Node(_))
	}

	pub fn is_value(&self) -> bool {
		matches!(self, Self::Value(_))
	}

	pub fn is_list(&self) -> bool {
		matches!(self, Self::List(_))
	}

	/// A node object with neither `@id` nor properties, i.e. one that
	/// reduces to nothing once finalized (`spec.md` §4.2's final cleanup:
	/// "if the resulting object contains only `@id`... drop it").
	pub fn is_empty_node(&self) -> bool {
		matches!(self, Self::Node(n) if n.is_empty())
	}
}

impl From<Value> for Object {
	fn from(v: Value) -> Self {
		Self::Value(v)
	}
}

impl From<Node> for Object {
	fn from(n: Node) -> Self {
		Self::Node(n)
	}
}

impl From<List> for Object {
	fn from(l: List) -> Self {
		Self::List(l)
	}
}

pub type IndexedObject = Indexed<Object>;
pub type IndexedNode = Indexed<Node>;

impl IndexedObject {
	pub fn node(node: Node, index: Option<String>) -> Self {
		Self::new(Object::Node(node), index)
	}

	pub fn value(value: Value, index: Option<String>) -> Self {
		Self::new(Object::Value(value), index)
	}

	pub fn list(list: List, index: Option<String>) -> Self {
		Self::new(Object::List(list), index)
	}
}

impl From<IndexedNode> for IndexedObject {
	fn from(n: IndexedNode) -> Self {
		let (node, index) = n.into_parts();
		IndexedObject::node(node, index)
	}
}
