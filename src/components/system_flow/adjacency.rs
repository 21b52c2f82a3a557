//! Incoming and outgoing neighbors of a node.

use super::graph::GraphStore;
use super::types::NodeId;

/// Direct neighbors of one node, both lists in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Connections {
	/// Nodes that declare an edge into this node.
	pub incoming: Vec<NodeId>,
	/// This node's own outgoing list.
	pub outgoing: Vec<NodeId>,
}

impl Connections {
	/// Whether `id` is an incoming or outgoing neighbor.
	pub fn contains(&self, id: &NodeId) -> bool {
		self.incoming.contains(id) || self.outgoing.contains(id)
	}
}

/// Resolve the neighbors of `id`. Unknown ids have no neighbors.
pub fn connections(graph: &GraphStore, id: &NodeId) -> Connections {
	let outgoing = graph
		.node(id)
		.map(|node| node.connections.clone())
		.unwrap_or_default();

	let incoming = graph
		.nodes()
		.filter(|node| node.connections.contains(id))
		.map(|node| node.id.clone())
		.collect();

	Connections { incoming, outgoing }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ids(list: &[NodeId]) -> Vec<&str> {
		list.iter().map(NodeId::as_str).collect()
	}

	#[test]
	fn api_gateway_neighbors() {
		let graph = GraphStore::sample().unwrap();
		let c = connections(&graph, &"s3".into());
		assert_eq!(ids(&c.incoming), ["s1", "s2"]);
		assert_eq!(ids(&c.outgoing), ["s5", "s6"]);
	}

	#[test]
	fn outgoing_matches_declaration() {
		let graph = GraphStore::sample().unwrap();
		for node in graph.nodes() {
			assert_eq!(connections(&graph, &node.id).outgoing, node.connections);
		}
	}

	#[test]
	fn incoming_and_outgoing_are_inverse() {
		let graph = GraphStore::sample().unwrap();
		for a in graph.nodes() {
			for b in graph.nodes() {
				let forward = connections(&graph, &a.id).outgoing.contains(&b.id);
				let backward = connections(&graph, &b.id).incoming.contains(&a.id);
				assert_eq!(forward, backward, "{} -> {}", a.id, b.id);
			}
		}
	}

	#[test]
	fn sources_and_sinks() {
		let graph = GraphStore::sample().unwrap();
		assert!(connections(&graph, &"s1".into()).incoming.is_empty());
		assert!(connections(&graph, &"s10".into()).outgoing.is_empty());
		assert_eq!(ids(&connections(&graph, &"s6".into()).incoming), ["s3", "s4"]);
	}

	#[test]
	fn unknown_node_has_no_neighbors() {
		let graph = GraphStore::sample().unwrap();
		assert_eq!(connections(&graph, &"ghost".into()), Connections::default());
	}
}
