//! Closed-form placement of node boxes on the logical canvas.
//!
//! Each step owns an equal-width vertical band. Boxes are centered
//! horizontally within their band and each step's stack is centered
//! vertically on the canvas, whatever its node count.

use super::graph::{GraphStore, NodeSlot};
use super::types::{NodeId, Position};

/// Canvas dimensions and box geometry, in logical units.
#[derive(Clone, Debug)]
pub struct LayoutConfig {
	/// Logical canvas width.
	pub canvas_width: f64,
	/// Logical canvas height.
	pub canvas_height: f64,
	/// Number of equal-width column bands.
	pub columns: usize,
	/// Box width.
	pub node_width: f64,
	/// Box height.
	pub node_height: f64,
	/// Vertical gap between stacked boxes.
	pub node_spacing: f64,
	/// Horizontal distance from each connector endpoint to its control point.
	pub curve_offset: f64,
	/// Radius of the rounded box corners.
	pub corner_radius: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			canvas_width: 1200.0,
			canvas_height: 250.0,
			columns: 5,
			node_width: 160.0,
			node_height: 80.0,
			node_spacing: 40.0,
			curve_offset: 50.0,
			corner_radius: 8.0,
		}
	}
}

impl LayoutConfig {
	/// Default geometry with one band per step.
	pub fn for_steps(steps: usize) -> Self {
		Self {
			columns: steps.max(1),
			..Self::default()
		}
	}

	/// Width of one step's column band.
	pub fn band_width(&self) -> f64 {
		self.canvas_width / self.columns.max(1) as f64
	}

	/// Top-left corner of box `node_index` in a step holding `nodes_in_step` boxes.
	///
	/// Returns `None` for an empty step or an out-of-range index.
	pub fn position(
		&self,
		step_index: usize,
		node_index: usize,
		nodes_in_step: usize,
	) -> Option<Position> {
		if nodes_in_step == 0 || node_index >= nodes_in_step {
			return None;
		}

		let band = self.band_width();
		let x = band * step_index as f64 + (band - self.node_width) / 2.0;

		let count = nodes_in_step as f64;
		let stack_height = count * self.node_height + (count - 1.0) * self.node_spacing;
		let start_y = (self.canvas_height - stack_height) / 2.0;
		let y = start_y + node_index as f64 * (self.node_height + self.node_spacing);

		Some(Position { x, y })
	}

	/// Position for a slot resolved from the graph store.
	pub fn slot_position(&self, slot: NodeSlot) -> Option<Position> {
		self.position(slot.step, slot.index, slot.step_len)
	}

	/// Position of node `id`, `None` if the id is unknown.
	pub fn node_position(&self, graph: &GraphStore, id: &NodeId) -> Option<Position> {
		self.slot_position(graph.slot(id)?)
	}

	/// Whether the logical point `(x, y)` falls inside the box at `pos`.
	pub fn contains(&self, pos: Position, x: f64, y: f64) -> bool {
		let inside_x = x >= pos.x && x <= pos.x + self.node_width;
		let inside_y = y >= pos.y && y <= pos.y + self.node_height;
		inside_x && inside_y
	}

	/// Node whose box contains the logical point, if any.
	pub fn node_at<'a>(
		&self,
		graph: &'a GraphStore,
		x: f64,
		y: f64,
	) -> Option<&'a NodeId> {
		graph.steps().iter().enumerate().find_map(|(step_idx, step)| {
			step.nodes.iter().enumerate().find_map(|(node_idx, node)| {
				let pos = self.position(step_idx, node_idx, step.nodes.len())?;
				self.contains(pos, x, y).then_some(&node.id)
			})
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn approx(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-9
	}

	#[test]
	fn centers_boxes_in_their_band() {
		let layout = LayoutConfig::default();
		assert_eq!(
			layout.position(0, 0, 2),
			Some(Position { x: 40.0, y: 25.0 })
		);
		assert_eq!(
			layout.position(4, 1, 2),
			Some(Position { x: 1000.0, y: 145.0 })
		);
		assert_eq!(
			layout.position(2, 0, 1),
			Some(Position { x: 520.0, y: 85.0 })
		);
	}

	#[test]
	fn stacks_are_symmetric_about_vertical_center() {
		let layout = LayoutConfig::default();
		let center = layout.canvas_height / 2.0;
		for count in 1..=6 {
			for i in 0..count {
				let top = layout.position(1, i, count).unwrap();
				let mirror = layout.position(1, count - 1 - i, count).unwrap();
				let mid_top = top.y + layout.node_height / 2.0;
				let mid_mirror = mirror.y + layout.node_height / 2.0;
				assert!(approx(mid_top - center, center - mid_mirror));
			}
		}
	}

	#[test]
	fn empty_or_out_of_range_yields_none() {
		let layout = LayoutConfig::default();
		assert_eq!(layout.position(0, 0, 0), None);
		assert_eq!(layout.position(0, 3, 3), None);
	}

	#[test]
	fn is_deterministic() {
		let layout = LayoutConfig::default();
		assert_eq!(layout.position(3, 1, 4), layout.position(3, 1, 4));
	}

	#[test]
	fn band_width_follows_step_count() {
		assert!(approx(LayoutConfig::for_steps(3).band_width(), 400.0));
		assert!(approx(LayoutConfig::for_steps(0).band_width(), 1200.0));
	}

	#[test]
	fn hit_tests_boxes() {
		let graph = GraphStore::sample().unwrap();
		let layout = LayoutConfig::default();
		assert_eq!(layout.node_at(&graph, 50.0, 30.0).map(NodeId::as_str), Some("s1"));
		assert_eq!(layout.node_at(&graph, 1100.0, 200.0).map(NodeId::as_str), Some("s10"));
		assert_eq!(layout.node_at(&graph, 10.0, 10.0), None);
		assert_eq!(layout.node_at(&graph, 100.0, 125.0), None);
	}

	#[test]
	fn positions_sample_nodes_by_id() {
		let graph = GraphStore::sample().unwrap();
		let layout = LayoutConfig::default();
		assert_eq!(
			layout.node_position(&graph, &"s4".into()),
			Some(Position { x: 280.0, y: 145.0 })
		);
		assert_eq!(layout.node_position(&graph, &"nope".into()), None);
	}
}
