//! Immutable step-ordered graph of systems.
//!
//! The store is built once from [`GraphData`] and validated up front: every
//! node id is unique, every connection resolves, and no connection is declared
//! twice. After construction nothing mutates it.

use std::collections::{HashMap, HashSet};

use super::error::{GraphError, GraphResult};
use super::types::{Category, GraphData, Health, NodeId, Step, SystemNode};

/// Where a node sits in the layout grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeSlot {
	/// Column index, left to right.
	pub step: usize,
	/// Index within the column, top to bottom.
	pub index: usize,
	/// Number of nodes sharing the column.
	pub step_len: usize,
}

/// A directed connection derived from a node's outgoing list.
#[derive(Clone, Copy, Debug)]
pub struct Edge<'a> {
	/// Node declaring the connection.
	pub source: &'a SystemNode,
	/// Node the connection points to.
	pub target: &'a SystemNode,
}

impl Edge<'_> {
	/// Stable identity: source and target ids joined by `-`.
	pub fn id(&self) -> String {
		format!("{}-{}", self.source.id, self.target.id)
	}
}

/// Validated graph with O(1) id lookup.
#[derive(Clone, Debug, Default)]
pub struct GraphStore {
	steps: Vec<Step>,
	slots: HashMap<NodeId, NodeSlot>,
}

impl GraphStore {
	/// Validate `data` and index its nodes.
	pub fn new(data: GraphData) -> GraphResult<Self> {
		let mut slots = HashMap::new();
		for (step_idx, step) in data.steps.iter().enumerate() {
			for (node_idx, node) in step.nodes.iter().enumerate() {
				let slot = NodeSlot {
					step: step_idx,
					index: node_idx,
					step_len: step.nodes.len(),
				};
				if slots.insert(node.id.clone(), slot).is_some() {
					return Err(GraphError::DuplicateNode {
						id: node.id.clone(),
					});
				}
			}
		}

		for node in data.steps.iter().flat_map(|s| &s.nodes) {
			let mut seen = HashSet::new();
			for target in &node.connections {
				if !slots.contains_key(target) {
					return Err(GraphError::DanglingEdge {
						node: node.id.clone(),
						target: target.clone(),
					});
				}
				if !seen.insert(target) {
					return Err(GraphError::DuplicateEdge {
						node: node.id.clone(),
						target: target.clone(),
					});
				}
			}
		}

		Ok(Self {
			steps: data.steps,
			slots,
		})
	}

	/// The built-in sample: five steps of two systems each.
	pub fn sample() -> GraphResult<Self> {
		Self::new(sample_data())
	}

	/// Steps in display order.
	pub fn steps(&self) -> &[Step] {
		&self.steps
	}

	/// Resolve a node by id.
	pub fn node(&self, id: &NodeId) -> Option<&SystemNode> {
		let slot = self.slots.get(id)?;
		self.steps.get(slot.step)?.nodes.get(slot.index)
	}

	/// Grid slot of a node by id.
	pub fn slot(&self, id: &NodeId) -> Option<NodeSlot> {
		self.slots.get(id).copied()
	}

	/// All nodes in step order, then declaration order within each step.
	pub fn nodes(&self) -> impl Iterator<Item = &SystemNode> {
		self.steps.iter().flat_map(|s| s.nodes.iter())
	}

	/// All edges in source declaration order.
	pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
		self.nodes().flat_map(move |source| {
			source.connections.iter().filter_map(move |target| {
				self.node(target).map(|target| Edge { source, target })
			})
		})
	}

	/// Total number of nodes across all steps.
	pub fn node_count(&self) -> usize {
		self.slots.len()
	}
}

/// Sample systems shown when the page embeds no graph data.
pub fn sample_data() -> GraphData {
	use Category::*;
	use Health::*;

	let step = |name: &str, nodes: Vec<SystemNode>| Step {
		name: name.to_string(),
		nodes,
	};

	GraphData {
		steps: vec![
			step(
				"step1",
				vec![
					SystemNode::new("s1", "CRM Frontend", Frontend, Healthy, &["s3", "s4"]),
					SystemNode::new("s2", "Sales Portal", Frontend, Warning, &["s3"]),
				],
			),
			step(
				"step2",
				vec![
					SystemNode::new("s3", "API Gateway", Service, Healthy, &["s5", "s6"]),
					SystemNode::new("s4", "Queue Service", Service, Error, &["s6"]),
				],
			),
			step(
				"step3",
				vec![
					SystemNode::new("s5", "Auth Service", Service, Healthy, &["s7"]),
					SystemNode::new("s6", "Transaction Engine", Service, Healthy, &["s8"]),
				],
			),
			step(
				"step4",
				vec![
					SystemNode::new("s7", "User Database", Database, Healthy, &["s9"]),
					SystemNode::new("s8", "Transaction DB", Database, Warning, &["s10"]),
				],
			),
			step(
				"step5",
				vec![
					SystemNode::new("s9", "Analytics Engine", Backend, Healthy, &[]),
					SystemNode::new("s10", "Reporting Service", Backend, Healthy, &[]),
				],
			),
		],
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn two_node_data(connections: &[&str]) -> GraphData {
		GraphData {
			steps: vec![Step {
				name: "only".into(),
				nodes: vec![
					SystemNode::new("a", "A", Category::Service, Health::Healthy, connections),
					SystemNode::new("b", "B", Category::Service, Health::Healthy, &[]),
				],
			}],
		}
	}

	#[test]
	fn sample_is_valid() {
		let graph = GraphStore::sample().unwrap();
		assert_eq!(graph.steps().len(), 5);
		assert_eq!(graph.node_count(), 10);
		assert_eq!(graph.edges().count(), 10);
	}

	#[test]
	fn resolves_nodes_and_slots() {
		let graph = GraphStore::sample().unwrap();
		let node = graph.node(&"s6".into()).unwrap();
		assert_eq!(node.name, "Transaction Engine");
		assert_eq!(
			graph.slot(&"s6".into()),
			Some(NodeSlot {
				step: 2,
				index: 1,
				step_len: 2
			})
		);
		assert!(graph.node(&"missing".into()).is_none());
	}

	#[test]
	fn iterates_in_declaration_order() {
		let graph = GraphStore::sample().unwrap();
		let ids: Vec<_> = graph.nodes().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["s1", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10"]);

		let edges: Vec<_> = graph.edges().take(3).map(|e| e.id()).collect();
		assert_eq!(edges, ["s1-s3", "s1-s4", "s2-s3"]);
	}

	#[test]
	fn edge_ids_are_unique() {
		let graph = GraphStore::sample().unwrap();
		let ids: HashSet<_> = graph.edges().map(|e| e.id()).collect();
		assert_eq!(ids.len(), graph.edges().count());
	}

	#[test]
	fn rejects_dangling_edge() {
		let err = GraphStore::new(two_node_data(&["zzz"])).unwrap_err();
		assert_eq!(
			err,
			GraphError::DanglingEdge {
				node: "a".into(),
				target: "zzz".into()
			}
		);
	}

	#[test]
	fn rejects_duplicate_edge() {
		let err = GraphStore::new(two_node_data(&["b", "b"])).unwrap_err();
		assert!(matches!(err, GraphError::DuplicateEdge { .. }));
	}

	#[test]
	fn rejects_duplicate_node() {
		let mut data = two_node_data(&[]);
		data.steps.push(Step {
			name: "again".into(),
			nodes: vec![SystemNode::new(
				"a",
				"A again",
				Category::Backend,
				Health::Error,
				&[],
			)],
		});
		let err = GraphStore::new(data).unwrap_err();
		assert_eq!(err, GraphError::DuplicateNode { id: "a".into() });
	}

	#[test]
	fn empty_steps_are_allowed() {
		let data = GraphData {
			steps: vec![Step {
				name: "empty".into(),
				nodes: vec![],
			}],
		};
		let graph = GraphStore::new(data).unwrap();
		assert_eq!(graph.node_count(), 0);
		assert_eq!(graph.edges().count(), 0);
	}
}
