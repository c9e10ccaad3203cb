//! Node-Map construction (`spec.md` §4.4): collects an expanded document
//! into a per-graph mapping from node id to node object, the form both
//! framing and RDF conversion consume.

mod error;

pub use error::Error;

use crate::blank::Namer;
use crate::document::ExpandedDocument;
use crate::id::Id;
use crate::object::{IndexedObject, List as ObjList, Node, Object};
use indexmap::IndexMap;

/// The reserved name of the default graph in a [`NodeMap`].
pub const DEFAULT_GRAPH: &str = "@default";

/// Per-graph mapping from node id to node object (`spec.md` §3's "Node
/// map"). Built by [`create_node_map`]; never mutated once flattening
/// has finished except by [`NodeMap::rename_blank_nodes`].
#[derive(Clone, Debug, Default)]
pub struct NodeMap {
	graphs: IndexMap<String, IndexMap<String, Node>>,
}

impl NodeMap {
	pub fn new() -> Self {
		Self::default()
	}

	fn graph_mut(&mut self, name: &str) -> &mut IndexMap<String, Node> {
		self.graphs.entry(name.to_owned()).or_default()
	}

	pub fn graph(&self, name: &str) -> Option<&IndexMap<String, Node>> {
		self.graphs.get(name)
	}

	pub fn graph_names(&self) -> impl Iterator<Item = &str> {
		self.graphs.keys().map(String::as_str)
	}

	pub fn node(&self, graph: &str, id: &str) -> Option<&Node> {
		self.graphs.get(graph)?.get(id)
	}

	/// Inserts an empty node for `id` in `graph` if one isn't already
	/// present, without disturbing an existing entry. Used by RDF
	/// conversion's `from_rdf`, where a quad's subject or object may be
	/// the first mention of that id.
	pub fn ensure_node(&mut self, graph: &str, id: Id) {
		let key = id.as_str().to_owned();
		self.graph_mut(graph).entry(key).or_insert_with(|| Node::with_id(id));
	}

	/// Returns the node for `id` in `graph`, creating it if absent.
	pub fn node_mut(&mut self, graph: &str, id: &Id) -> &mut Node {
		self.graph_mut(graph).entry(id.as_str().to_owned()).or_insert_with(|| Node::with_id(id.clone()))
	}

	/// The default graph's nodes, sorted by id for deterministic output
	/// (`spec.md` §8's "Flatten determinism" law).
	pub fn default_graph_nodes(&self) -> Vec<IndexedObject> {
		self.graph_nodes(DEFAULT_GRAPH)
	}

	pub fn graph_nodes(&self, graph: &str) -> Vec<IndexedObject> {
		let Some(nodes) = self.graphs.get(graph) else {
			return Vec::new();
		};
		let mut ids: Vec<&String> = nodes.keys().collect();
		ids.sort();
		ids.into_iter().map(|id| IndexedObject::node(nodes[id].clone(), None)).collect()
	}

	/// Merges every named graph into the default graph as a `@graph`
	/// entry on the node sharing that graph's name (creating one if the
	/// graph name is not itself a subject anywhere), per `spec.md`
	/// §4.4's merge pass.
	pub fn merged(&self) -> Vec<IndexedObject> {
		let mut default = self.graphs.get(DEFAULT_GRAPH).cloned().unwrap_or_default();
		let mut graph_names: Vec<&String> = self.graphs.keys().filter(|g| g.as_str() != DEFAULT_GRAPH).collect();
		graph_names.sort();
		for name in graph_names {
			let nodes = &self.graphs[name];
			let mut ids: Vec<&String> = nodes.keys().collect();
			ids.sort();
			let items: Vec<IndexedObject> = ids.into_iter().map(|id| IndexedObject::node(nodes[id].clone(), None)).collect();
			let node = default.entry(name.clone()).or_insert_with(|| Node::with_id(Id::from_string(name.clone())));
			node.graph = Some(items);
		}
		let mut ids: Vec<&String> = default.keys().collect();
		ids.sort();
		ids.into_iter().map(|id| IndexedObject::node(default[id].clone(), None)).collect()
	}

	/// Regenerates every blank node label across every graph, node id,
	/// `@type` and property value in first-use order, for output whose
	/// blank node labels are reproducible across semantically identical
	/// inputs (`spec.md` §4.4's optional rename pass).
	pub fn rename_blank_nodes(&mut self, namer: &mut Namer) {
		let mut renamed: IndexMap<String, IndexMap<String, Node>> = IndexMap::new();
		for (graph, nodes) in &self.graphs {
			let mut new_nodes: IndexMap<String, Node> = IndexMap::new();
			for (id, node) in nodes {
				let new_id = if id.starts_with("_:") { namer.get_or_mint(id).as_str().to_owned() } else { id.clone() };
				let mut node = node.clone();
				rename_node(&mut node, namer);
				new_nodes.insert(new_id, node);
			}
			renamed.insert(graph.clone(), new_nodes);
		}
		self.graphs = renamed;
	}
}

fn rename_id(id: &Id, namer: &mut Namer) -> Id {
	if id.is_blank() {
		Id::blank(namer.get_or_mint(id.as_str()))
	} else {
		id.clone()
	}
}

fn rename_node(node: &mut Node, namer: &mut Namer) {
	if let Some(id) = &node.id {
		node.id = Some(rename_id(id, namer));
	}
	for ty in &mut node.types {
		*ty = rename_id(ty, namer);
	}
	for values in node.properties.values_mut() {
		for value in values {
			rename_object(value, namer);
		}
	}
}

fn rename_object(object: &mut IndexedObject, namer: &mut Namer) {
	if let Object::Node(node) = object.inner_mut() {
		rename_node(node, namer);
	}
}

/// Recursively places `element` into `map`, minting blank node
/// identifiers for nodes that lack `@id` and de-duplicating repeated
/// node references on the same property (`spec.md` §4.4).
pub fn create_node_map(
	map: &mut NodeMap,
	element: &IndexedObject,
	active_graph: &str,
	active_subject: Option<&Id>,
	active_property: Option<&Id>,
	list: Option<&mut Vec<IndexedObject>>,
	namer: &mut Namer,
) -> Result<(), Error> {
	match element.inner() {
		Object::Value(v) => {
			let indexed = IndexedObject::value(v.clone(), element.index().map(str::to_owned));
			attach(map, active_graph, active_subject, active_property, list, indexed);
			Ok(())
		}
		Object::List(inner_list) => {
			if list.is_some() {
				return Err(Error::ListOfLists);
			}
			let mut items = Vec::new();
			for item in inner_list.iter() {
				create_node_map(map, item, active_graph, active_subject, active_property, Some(&mut items), namer)?;
			}
			let list_obj = IndexedObject::list(ObjList::new(items), element.index().map(str::to_owned));
			attach(map, active_graph, active_subject, active_property, None, list_obj);
			Ok(())
		}
		Object::Node(node) => {
			let id = match &node.id {
				Some(id) => rename_id(id, namer),
				None => Id::blank(namer.mint()),
			};
			let id_key = id.as_str().to_owned();

			map.graph_mut(active_graph).entry(id_key.clone()).or_insert_with(|| Node::with_id(id.clone()));

			let reference = IndexedObject::node(Node::with_id(id.clone()), element.index().map(str::to_owned));
			attach(map, active_graph, active_subject, active_property, list, reference);

			for ty in &node.types {
				let ty_id = rename_id(ty, namer);
				map.graph_mut(active_graph).get_mut(&id_key).unwrap().insert_type(ty_id);
			}

			if let Some(graph_items) = &node.graph {
				for item in graph_items {
					create_node_map(map, item, &id_key, None, None, None, namer)?;
				}
			}

			if let Some(included) = &node.included {
				for item in included {
					let indexed: IndexedObject = item.clone().into();
					create_node_map(map, &indexed, active_graph, None, None, None, namer)?;
				}
			}

			for (prop, values) in node.properties() {
				for value in values {
					create_node_map(map, value, active_graph, Some(&id), Some(prop), None, namer)?;
				}
			}

			for (prop, values) in node.reverse_properties.iter() {
				for value in values {
					if let Object::Node(target) = value.inner() {
						if let Some(target_id) = &target.id {
							let target_id = rename_id(target_id, namer);
							let target_key = target_id.as_str().to_owned();
							map.graph_mut(active_graph)
								.entry(target_key.clone())
								.or_insert_with(|| Node::with_id(target_id.clone()));
							let back_ref = IndexedObject::node(Node::with_id(id.clone()), None);
							map.graph_mut(active_graph).get_mut(&target_key).unwrap().insert_property(prop.clone(), back_ref);
						}
					}
				}
			}

			Ok(())
		}
	}
}

fn attach(
	map: &mut NodeMap,
	active_graph: &str,
	active_subject: Option<&Id>,
	active_property: Option<&Id>,
	list: Option<&mut Vec<IndexedObject>>,
	value: IndexedObject,
) {
	if let Some(list) = list {
		list.push(value);
		return;
	}
	if let (Some(subject), Some(property)) = (active_subject, active_property) {
		let graph_map = map.graph_mut(active_graph);
		let node = graph_map.entry(subject.as_str().to_owned()).or_insert_with(|| Node::with_id(subject.clone()));
		let values = node.properties.entry(property.clone()).or_default();
		if !values.contains(&value) {
			values.push(value);
		}
	}
}

/// Flattens a whole expanded document into a [`NodeMap`]: one call to
/// [`create_node_map`] per top-level object, all sharing one namer so
/// blank node ids stay stable within the invocation.
pub fn flatten(document: &ExpandedDocument) -> Result<NodeMap, Error> {
	let mut map = NodeMap::new();
	let mut namer = Namer::new();
	for item in document.objects() {
		create_node_map(&mut map, item, DEFAULT_GRAPH, None, None, None, &mut namer)?;
	}
	Ok(map)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::context::Context;
	use crate::context_processing;
	use crate::expansion;
	use crate::loader::NoLoader;
	use crate::warning::CollectingHandler;
	use json_syntax::Value as Json;

	fn parse(s: &str) -> Json {
		Json::parse_str(s).expect("valid json").0
	}

	#[tokio::test]
	async fn flattens_a_nested_node() {
		let document = parse(
			r#"[{"@id":"ex:a","ex:rel":[{"@id":"ex:b","ex:name":[{"@value":"B"}]}]}]"#,
		);
		let mut warnings = CollectingHandler::default();
		let expanded = expansion::expand_document(
			&Context::default(),
			&document,
			None,
			&NoLoader,
			expansion::Options::default(),
			&mut warnings,
		)
		.await
		.unwrap();

		let map = flatten(&expanded).unwrap();
		let default_graph = map.graph(DEFAULT_GRAPH).unwrap();
		assert!(default_graph.contains_key("ex:a"));
		assert!(default_graph.contains_key("ex:b"));
		let a = &default_graph["ex:a"];
		let rel = &a.properties[&Id::from_string("ex:rel".to_owned())];
		assert_eq!(rel.len(), 1);
		assert!(rel[0].as_node().unwrap().is_node_reference());
	}

	#[tokio::test]
	async fn determinism_regardless_of_key_order() {
		let a = parse(r#"[{"ex:a":"1","@id":"ex:x"}]"#);
		let b = parse(r#"[{"@id":"ex:x","ex:a":"1"}]"#);
		let mut warnings = CollectingHandler::default();
		let expanded_a = expansion::expand_document(
			&Context::default(),
			&a,
			None,
			&NoLoader,
			expansion::Options::default(),
			&mut warnings,
		)
		.await
		.unwrap();
		let expanded_b = expansion::expand_document(
			&Context::default(),
			&b,
			None,
			&NoLoader,
			expansion::Options::default(),
			&mut warnings,
		)
		.await
		.unwrap();
		let map_a = flatten(&expanded_a).unwrap();
		let map_b = flatten(&expanded_b).unwrap();
		assert_eq!(map_a.default_graph_nodes().len(), map_b.default_graph_nodes().len());
	}

	#[allow(unused_imports)]
	use context_processing as _;
}
