//! Cubic connector geometry between node boxes.

use super::graph::GraphStore;
use super::layout::LayoutConfig;
use super::types::{NodeId, Position};

/// A connector from the right-center of the source box to the left-center
/// of the target box. Control points sit `curve_offset` units outward
/// horizontally from each endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectionPath {
	/// `<source>-<target>`.
	pub id: String,
	/// Node the connector leaves.
	pub source: NodeId,
	/// Node the connector enters.
	pub target: NodeId,
	/// Display name of `source`.
	pub source_name: String,
	/// Display name of `target`.
	pub target_name: String,
	/// Right-center of the source box.
	pub start: Position,
	/// Control point next to `start`.
	pub control1: Position,
	/// Control point next to `end`.
	pub control2: Position,
	/// Left-center of the target box.
	pub end: Position,
}

impl ConnectionPath {
	/// Unit direction of travel at the target end, used to orient the arrowhead.
	pub fn end_direction(&self) -> (f64, f64) {
		let (dx, dy) = (self.end.x - self.control2.x, self.end.y - self.control2.y);
		let len = (dx * dx + dy * dy).sqrt();
		if len < 1e-6 {
			(1.0, 0.0)
		} else {
			(dx / len, dy / len)
		}
	}

	/// Whether either endpoint is `id`.
	pub fn touches(&self, id: &NodeId) -> bool {
		&self.source == id || &self.target == id
	}
}

/// Build one connector per edge, in edge declaration order.
///
/// Recomputed from the current layout every call; edges whose endpoints
/// have no position are skipped.
pub fn connection_paths(graph: &GraphStore, layout: &LayoutConfig) -> Vec<ConnectionPath> {
	graph
		.edges()
		.filter_map(|edge| {
			let from = layout.node_position(graph, &edge.source.id)?;
			let to = layout.node_position(graph, &edge.target.id)?;
			let half = layout.node_height / 2.0;

			let start = Position {
				x: from.x + layout.node_width,
				y: from.y + half,
			};
			let end = Position {
				x: to.x,
				y: to.y + half,
			};

			Some(ConnectionPath {
				id: edge.id(),
				source: edge.source.id.clone(),
				target: edge.target.id.clone(),
				source_name: edge.source.name.clone(),
				target_name: edge.target.name.clone(),
				start,
				control1: Position {
					x: start.x + layout.curve_offset,
					y: start.y,
				},
				control2: Position {
					x: end.x - layout.curve_offset,
					y: end.y,
				},
				end,
			})
		})
		.collect()
}
