use super::IndexedObject;
use crate::id::Id;
use indexmap::IndexMap;

/// An expanded node object.
///
/// Property keys are the *expanded* IRI (or blank node id, for the rare
/// case of a blank-node-identified property) the original term expanded
/// to; `@reverse` properties are tracked separately so compaction can
/// re-fold them under a single `@reverse` entry or hoist them back onto
/// the parent, per `spec.md` §4.3.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Node {
	pub id: Option<Id>,
	pub types: Vec<Id>,
	pub properties: IndexMap<Id, Vec<IndexedObject>>,
	pub reverse_properties: IndexMap<Id, Vec<IndexedObject>>,
	/// Present (possibly empty) iff this node carries `@graph`.
	pub graph: Option<Vec<IndexedObject>>,
	/// Present (possibly empty) iff this node carries `@included`.
	pub included: Option<Vec<super::IndexedNode>>,
}

impl Node {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_id(id: Id) -> Self {
		Self {
			id: Some(id),
			..Self::default()
		}
	}

	pub fn is_empty(&self) -> bool {
		self.id.is_none()
			&& self.types.is_empty()
			&& self.properties.is_empty()
			&& self.reverse_properties.is_empty()
			&& self.graph.is_none()
			&& self.included.is_none()
	}

	/// A node object containing only an `@id` (and/or empty `@type`): the
	/// special case `spec.md` §4.2's final cleanup drops at the top level
	/// or inside `@graph`, but that `create_node_map` (§4.4) keeps as a
	/// *node reference* everywhere else.
	pub fn is_node_reference(&self) -> bool {
		self.id.is_some()
			&& self.types.is_empty()
			&& self.properties.is_empty()
			&& self.reverse_properties.is_empty()
			&& self.graph.is_none()
			&& self.included.is_none()
	}

	pub fn insert_type(&mut self, ty: Id) {
		if !self.types.contains(&ty) {
			self.types.push(ty);
		}
	}

	pub fn insert_property(&mut self, prop: Id, value: IndexedObject) {
		self.properties.entry(prop).or_default().push(value);
	}

	pub fn insert_reverse_property(&mut self, prop: Id, value: IndexedObject) {
		self.reverse_properties.entry(prop).or_default().push(value);
	}

	pub fn properties(&self) -> impl Iterator<Item = (&Id, &[IndexedObject])> {
		self.properties.iter().map(|(k, v)| (k, v.as_slice()))
	}
}
