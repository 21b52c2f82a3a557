//! Selection state and the highlight policy derived from it.
//!
//! Selection is the only mutable state in the diagram. Each change bumps a
//! generation counter; the delayed details payload carries the generation it
//! was issued for and is dropped if the selection has moved on by the time
//! it arrives.
//!
//! Opacity changes are not applied instantly. [`OpacityTransitions`] keeps a
//! per-node and per-edge opacity that eases toward its target each frame.

use std::collections::HashMap;

use super::adjacency::{Connections, connections};
use super::details::DetailsPayload;
use super::graph::GraphStore;
use super::layout::LayoutConfig;
use super::paths::{ConnectionPath, connection_paths};
use super::types::NodeId;

/// Issued on selection change; redeem with [`SelectionState::apply_details`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailsTicket {
	/// Node the details were requested for.
	pub node: NodeId,
	generation: u64,
}

/// Currently selected node and its details, if they have arrived.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionState {
	selected: Option<NodeId>,
	details: Option<DetailsPayload>,
	generation: u64,
}

impl SelectionState {
	/// The selected node, `None` while idle.
	pub fn selected(&self) -> Option<&NodeId> {
		self.selected.as_ref()
	}

	/// Details for the selection; `None` until its payload arrives.
	pub fn details(&self) -> Option<&DetailsPayload> {
		self.details.as_ref()
	}

	/// Select `id`, replacing any previous selection.
	///
	/// Returns a ticket for the details fetch, or `None` when `id` is already
	/// selected; a fetch pending for it stays valid.
	pub fn select(&mut self, id: NodeId) -> Option<DetailsTicket> {
		if self.selected.as_ref() == Some(&id) {
			return None;
		}

		self.generation += 1;
		self.selected = Some(id.clone());
		self.details = None;
		Some(DetailsTicket {
			node: id,
			generation: self.generation,
		})
	}

	/// Attach `payload` if `ticket` still belongs to the current selection.
	/// Returns whether it was applied.
	pub fn apply_details(
		&mut self,
		ticket: &DetailsTicket,
		payload: DetailsPayload,
	) -> bool {
		let current = self.selected.as_ref() == Some(&ticket.node);
		if ticket.generation != self.generation || !current {
			return false;
		}
		self.details = Some(payload);
		true
	}
}

/// Which nodes and edges stay at full opacity for a given selection.
#[derive(Clone, Debug, Default)]
pub struct Highlight {
	selected: Option<NodeId>,
	neighbors: Connections,
}

impl Highlight {
	/// Highlight for `selected`; `None` emphasizes everything.
	pub fn new(graph: &GraphStore, selected: Option<&NodeId>) -> Self {
		let Some(id) = selected else {
			return Self::default();
		};
		Self {
			selected: Some(id.clone()),
			neighbors: connections(graph, id),
		}
	}

	/// Whether `id` is the selected node.
	pub fn is_selected(&self, id: &NodeId) -> bool {
		self.selected.as_ref() == Some(id)
	}

	/// Selected node or a direct neighbor; everything when nothing is selected.
	pub fn node_emphasized(&self, id: &NodeId) -> bool {
		match &self.selected {
			None => true,
			Some(selected) => selected == id || self.neighbors.contains(id),
		}
	}

	/// Edge touching the selected node; everything when nothing is selected.
	pub fn edge_emphasized(&self, path: &ConnectionPath) -> bool {
		match &self.selected {
			None => true,
			Some(selected) => path.touches(selected),
		}
	}
}

/// Eased opacity per node and per edge.
///
/// Uses exponential smoothing: value += (target - value) * (1 - e^(-speed * dt)).
/// Elements start fully opaque.
#[derive(Clone, Debug)]
pub struct OpacityTransitions {
	nodes: HashMap<NodeId, f64>,
	edges: HashMap<String, f64>,
	speed: f64,
}

/// Below this distance from the target the value snaps.
const SETTLE_EPSILON: f64 = 0.005;

impl OpacityTransitions {
	/// Empty transitions easing at `speed` per second.
	pub fn new(speed: f64) -> Self {
		Self {
			nodes: HashMap::new(),
			edges: HashMap::new(),
			speed,
		}
	}

	/// Advance every opacity toward its target for this frame.
	pub fn tick(
		&mut self,
		graph: &GraphStore,
		paths: &[ConnectionPath],
		highlight: &Highlight,
		dimmed: DimmedOpacity,
		dt: f64,
	) {
		let factor = 1.0 - (-self.speed * dt).exp();

		for node in graph.nodes() {
			let target = if highlight.node_emphasized(&node.id) {
				1.0
			} else {
				dimmed.node
			};
			let value = self.nodes.entry(node.id.clone()).or_insert(1.0);
			*value = ease(*value, target, factor);
		}

		for path in paths {
			let target = if highlight.edge_emphasized(path) {
				1.0
			} else {
				dimmed.edge
			};
			let value = self.edges.entry(path.id.clone()).or_insert(1.0);
			*value = ease(*value, target, factor);
		}
	}

	/// Current opacity of a node.
	pub fn node(&self, id: &NodeId) -> f64 {
		self.nodes.get(id).copied().unwrap_or(1.0)
	}

	/// Current opacity of an edge, by connection id.
	pub fn edge(&self, path_id: &str) -> f64 {
		self.edges.get(path_id).copied().unwrap_or(1.0)
	}
}

/// Opacity applied to elements outside the highlight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DimmedOpacity {
	/// Opacity of nodes outside the neighborhood.
	pub node: f64,
	/// Opacity of edges not touching the selection.
	pub edge: f64,
}

fn ease(value: f64, target: f64, factor: f64) -> f64 {
	let next = value + (target - value) * factor;
	if (target - next).abs() < SETTLE_EPSILON {
		target
	} else {
		next
	}
}

/// Everything the canvas needs per frame: static geometry plus the
/// highlight and animation state that follows the selection.
///
/// Created once when the canvas mounts, then mutated each frame by the
/// animation loop.
pub struct DiagramState {
	/// Graph being drawn.
	pub graph: GraphStore,
	/// Canvas geometry.
	pub layout: LayoutConfig,
	/// Connector curves, computed once at mount.
	pub paths: Vec<ConnectionPath>,
	/// Emphasis for the current selection.
	pub highlight: Highlight,
	/// Eased opacities.
	pub transitions: OpacityTransitions,
	/// Node under the pointer, if any.
	pub hovered: Option<NodeId>,
	/// Seconds since mount; drives the flow animation.
	pub flow_time: f64,
	selected: Option<NodeId>,
}

impl DiagramState {
	/// Build frame state with no selection and no hover.
	pub fn new(graph: GraphStore, layout: LayoutConfig, transition_speed: f64) -> Self {
		let paths = connection_paths(&graph, &layout);
		Self {
			graph,
			layout,
			paths,
			highlight: Highlight::default(),
			transitions: OpacityTransitions::new(transition_speed),
			hovered: None,
			flow_time: 0.0,
			selected: None,
		}
	}

	/// Follow the composition root's selection. Recomputes the highlight
	/// only when the selection actually changed.
	pub fn sync_selection(&mut self, selected: Option<&NodeId>) {
		if self.selected.as_ref() == selected {
			return;
		}
		self.selected = selected.cloned();
		self.highlight = Highlight::new(&self.graph, selected);
	}

	/// Advance the flow animation and opacity transitions by `dt` seconds.
	pub fn tick(&mut self, dt: f64, dimmed: DimmedOpacity) {
		self.flow_time += dt;
		self.transitions
			.tick(&self.graph, &self.paths, &self.highlight, dimmed, dt);
	}

	/// Node under logical canvas point `(x, y)`.
	pub fn node_at(&self, x: f64, y: f64) -> Option<&NodeId> {
		self.layout.node_at(&self.graph, x, y)
	}

	/// Record the node under the pointer; `None` once it leaves all nodes
	/// or the canvas.
	pub fn set_hover(&mut self, node: Option<NodeId>) {
		self.hovered = node;
	}

	/// CSS cursor for the current hover.
	pub fn cursor(&self) -> &'static str {
		if self.hovered.is_some() {
			"pointer"
		} else {
			"default"
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const DIMMED: DimmedOpacity = DimmedOpacity {
		node: 0.5,
		edge: 0.2,
	};

	#[test]
	fn starts_idle() {
		let state = SelectionState::default();
		assert!(state.selected().is_none());
		assert!(state.details().is_none());
	}

	#[test]
	fn details_apply_to_their_selection() {
		let mut state = SelectionState::default();
		let ticket = state.select("s3".into()).unwrap();
		assert!(state.details().is_none());
		assert!(state.apply_details(&ticket, DetailsPayload::fabricated()));
		assert_eq!(state.details(), Some(&DetailsPayload::fabricated()));
	}

	#[test]
	fn stale_details_are_discarded() {
		let mut state = SelectionState::default();
		let first = state.select("s1".into()).unwrap();
		let second = state.select("s2".into()).unwrap();

		assert!(!state.apply_details(&first, DetailsPayload::fabricated()));
		assert!(state.details().is_none());
		assert!(state.apply_details(&second, DetailsPayload::fabricated()));
		assert_eq!(state.selected().map(NodeId::as_str), Some("s2"));
	}

	#[test]
	fn stale_details_arriving_late_do_not_overwrite() {
		let mut state = SelectionState::default();
		let first = state.select("s1".into()).unwrap();
		let second = state.select("s2".into()).unwrap();
		assert!(state.apply_details(&second, DetailsPayload::fabricated()));

		let mut other = DetailsPayload::fabricated();
		other.status.version = "v0.0.1".into();
		assert!(!state.apply_details(&first, other));
		assert_eq!(
			state.details().map(|d| d.status.version.as_str()),
			Some("v2.3.4")
		);
	}

	#[test]
	fn reselecting_same_node_is_idempotent() {
		let mut state = SelectionState::default();
		let ticket = state.select("s4".into()).unwrap();
		assert!(state.apply_details(&ticket, DetailsPayload::fabricated()));
		let before = state.clone();

		assert!(state.select("s4".into()).is_none());
		assert_eq!(state, before);
	}

	#[test]
	fn reselecting_keeps_pending_ticket_valid() {
		let mut state = SelectionState::default();
		let ticket = state.select("s4".into()).unwrap();
		assert!(state.select("s4".into()).is_none());
		assert!(state.apply_details(&ticket, DetailsPayload::fabricated()));
	}

	#[test]
	fn returning_to_earlier_node_invalidates_old_ticket() {
		let mut state = SelectionState::default();
		let old = state.select("s1".into()).unwrap();
		state.select("s2".into());
		let fresh = state.select("s1".into()).unwrap();
		assert!(!state.apply_details(&old, DetailsPayload::fabricated()));
		assert!(state.apply_details(&fresh, DetailsPayload::fabricated()));
	}

	#[test]
	fn no_selection_emphasizes_everything() {
		let graph = GraphStore::sample().unwrap();
		let paths = connection_paths(&graph, &LayoutConfig::default());
		let highlight = Highlight::new(&graph, None);
		assert!(graph.nodes().all(|n| !highlight.is_selected(&n.id)));
		assert!(graph.nodes().all(|n| highlight.node_emphasized(&n.id)));
		assert!(paths.iter().all(|p| highlight.edge_emphasized(p)));
	}

	#[test]
	fn selection_emphasizes_neighborhood_only() {
		let graph = GraphStore::sample().unwrap();
		let paths = connection_paths(&graph, &LayoutConfig::default());
		let highlight = Highlight::new(&graph, Some(&"s3".into()));

		let nodes: Vec<_> = graph
			.nodes()
			.filter(|n| highlight.node_emphasized(&n.id))
			.map(|n| n.id.as_str())
			.collect();
		assert_eq!(nodes, ["s1", "s2", "s3", "s5", "s6"]);

		let edges: Vec<_> = paths
			.iter()
			.filter(|p| highlight.edge_emphasized(p))
			.map(|p| p.id.as_str())
			.collect();
		assert_eq!(edges, ["s1-s3", "s2-s3", "s3-s5", "s3-s6"]);
		assert!(highlight.is_selected(&"s3".into()));
	}

	#[test]
	fn transitions_ease_toward_targets() {
		let graph = GraphStore::sample().unwrap();
		let paths = connection_paths(&graph, &LayoutConfig::default());
		let highlight = Highlight::new(&graph, Some(&"s3".into()));
		let mut transitions = OpacityTransitions::new(10.0);

		transitions.tick(&graph, &paths, &highlight, DIMMED, 0.016);
		let s9 = transitions.node(&"s9".into());
		assert!(s9 < 1.0 && s9 > DIMMED.node);
		assert_eq!(transitions.node(&"s3".into()), 1.0);

		for _ in 0..120 {
			transitions.tick(&graph, &paths, &highlight, DIMMED, 0.016);
		}
		assert_eq!(transitions.node(&"s9".into()), DIMMED.node);
		assert_eq!(transitions.edge("s7-s9"), DIMMED.edge);
		assert_eq!(transitions.edge("s1-s3"), 1.0);

		let cleared = Highlight::new(&graph, None);
		for _ in 0..120 {
			transitions.tick(&graph, &paths, &cleared, DIMMED, 0.016);
		}
		assert_eq!(transitions.node(&"s9".into()), 1.0);
		assert_eq!(transitions.edge("s7-s9"), 1.0);
	}

	#[test]
	fn diagram_follows_selection() {
		let graph = GraphStore::sample().unwrap();
		let mut diagram = DiagramState::new(graph, LayoutConfig::default(), 10.0);
		assert_eq!(diagram.paths.len(), 10);
		assert!(diagram.highlight.node_emphasized(&"s1".into()));

		diagram.sync_selection(Some(&"s5".into()));
		assert!(diagram.highlight.is_selected(&"s5".into()));
		assert!(diagram.highlight.node_emphasized(&"s7".into()));
		assert!(!diagram.highlight.node_emphasized(&"s1".into()));

		diagram.tick(0.5, DIMMED);
		assert!(diagram.transitions.node(&"s1".into()) < 1.0);
		assert_eq!(diagram.flow_time, 0.5);
	}

	#[test]
	fn cursor_follows_hover() {
		let graph = GraphStore::sample().unwrap();
		let mut diagram = DiagramState::new(graph, LayoutConfig::default(), 10.0);
		assert_eq!(diagram.cursor(), "default");

		let hit = diagram.node_at(50.0, 30.0).cloned();
		assert_eq!(hit.as_ref().map(NodeId::as_str), Some("s1"));
		diagram.set_hover(hit);
		assert_eq!(diagram.cursor(), "pointer");
	}

	#[test]
	fn cursor_resets_after_leaving_canvas() {
		let graph = GraphStore::sample().unwrap();
		let mut diagram = DiagramState::new(graph, LayoutConfig::default(), 10.0);
		let hit = diagram.node_at(50.0, 30.0).cloned();
		diagram.set_hover(hit);

		// Pointer leaves the canvas, then re-enters over empty space.
		diagram.set_hover(None);
		assert_eq!(diagram.cursor(), "default");
		let empty = diagram.node_at(10.0, 10.0).cloned();
		assert!(empty.is_none());
		diagram.set_hover(empty);
		assert_eq!(diagram.cursor(), "default");
	}
}
