//! Canvas rendering for the system flow diagram.
//!
//! Handles all drawing operations: background, connectors, and node boxes.
//! Rendering uses multiple passes for correct z-ordering:
//! 1. Background
//! 2. Connector lines with arrowheads, then the animated flow overlay
//! 3. Node boxes with icon, name and health indicator

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::paths::ConnectionPath;
use super::state::DiagramState;
use super::theme::{Color, Theme};
use super::types::{Category, Position, SystemNode};

/// Renders the complete diagram to the canvas.
pub fn render(state: &DiagramState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	draw_background(state, ctx, theme);
	draw_edges(state, ctx, theme);
	draw_nodes(state, ctx, theme);
	ctx.set_global_alpha(1.0);
}

fn draw_background(state: &DiagramState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.set_fill_style_str(&theme.background.to_css());
	ctx.fill_rect(
		0.0,
		0.0,
		state.layout.canvas_width,
		state.layout.canvas_height,
	);
}

fn draw_edges(state: &DiagramState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let edge = &theme.edge;
	ctx.set_line_cap("round");

	for path in &state.paths {
		ctx.set_global_alpha(state.transitions.edge(&path.id));

		ctx.set_stroke_style_str(&edge.color.to_css());
		ctx.set_line_width(edge.line_width);
		let _ = ctx.set_line_dash(&js_sys::Array::new());
		trace_curve(ctx, path);
		ctx.stroke();

		draw_arrowhead(ctx, path, edge.arrow_size, edge.color);
	}

	// Flow overlay: dashes scrolling from source to target
	let dash = js_sys::Array::of2(
		&JsValue::from_f64(edge.flow_dash.0),
		&JsValue::from_f64(edge.flow_dash.1),
	);
	let _ = ctx.set_line_dash(&dash);
	ctx.set_line_dash_offset(-state.flow_time * edge.flow_speed);
	ctx.set_stroke_style_str(&edge.flow_color.to_css());
	ctx.set_line_width(edge.flow_width);

	for path in &state.paths {
		ctx.set_global_alpha(state.transitions.edge(&path.id));
		trace_curve(ctx, path);
		ctx.stroke();
	}

	let _ = ctx.set_line_dash(&js_sys::Array::new());
	ctx.set_line_dash_offset(0.0);
}

fn trace_curve(ctx: &CanvasRenderingContext2d, path: &ConnectionPath) {
	ctx.begin_path();
	ctx.move_to(path.start.x, path.start.y);
	ctx.bezier_curve_to(
		path.control1.x,
		path.control1.y,
		path.control2.x,
		path.control2.y,
		path.end.x,
		path.end.y,
	);
}

fn draw_arrowhead(
	ctx: &CanvasRenderingContext2d,
	path: &ConnectionPath,
	size: f64,
	color: Color,
) {
	let (ux, uy) = path.end_direction();
	let (tip_x, tip_y) = (path.end.x, path.end.y);
	let (back_x, back_y) = (tip_x - ux * size, tip_y - uy * size);
	let (px, py) = (-uy * size * 0.35, ux * size * 0.35);

	ctx.set_fill_style_str(&color.to_css());
	ctx.begin_path();
	ctx.move_to(tip_x, tip_y);
	ctx.line_to(back_x + px, back_y + py);
	ctx.line_to(back_x - px, back_y - py);
	ctx.close_path();
	ctx.fill();
}

fn draw_nodes(state: &DiagramState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	for (step_idx, step) in state.graph.steps().iter().enumerate() {
		for (node_idx, node) in step.nodes.iter().enumerate() {
			let Some(pos) = state.layout.position(step_idx, node_idx, step.nodes.len()) else {
				continue;
			};
			ctx.set_global_alpha(state.transitions.node(&node.id));
			draw_node(state, ctx, theme, node, pos);
		}
	}
}

fn draw_node(
	state: &DiagramState,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	node: &SystemNode,
	pos: Position,
) {
	let layout = &state.layout;
	let style = &theme.node;
	let selected = state.highlight.is_selected(&node.id);

	let (fill, border) = if selected {
		(style.selected_fill, style.selected_border)
	} else {
		(style.fill, style.border)
	};

	trace_rounded_rect(
		ctx,
		pos.x,
		pos.y,
		layout.node_width,
		layout.node_height,
		layout.corner_radius,
	);
	ctx.set_fill_style_str(&fill.to_css());
	ctx.fill();
	ctx.set_stroke_style_str(&border.to_css());
	ctx.set_line_width(style.border_width);
	ctx.stroke();

	draw_category_icon(ctx, node.category, pos.x + 12.0, pos.y + 12.0, style.icon);

	let text_x = pos.x + 44.0;
	ctx.set_fill_style_str(&style.name_color.to_css());
	ctx.set_font(style.name_font);
	let _ = ctx.fill_text_with_max_width(
		&node.name,
		text_x,
		pos.y + 28.0,
		layout.node_width - 52.0,
	);

	// Health indicator
	let radius = style.status_dot_radius;
	let (dot_x, dot_y) = (text_x + radius, pos.y + 48.0 + radius);
	ctx.begin_path();
	let _ = ctx.arc(dot_x, dot_y, radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(&theme.health.get(node.health).to_css());
	ctx.fill();

	ctx.set_fill_style_str(&style.status_color.to_css());
	ctx.set_font(style.status_font);
	let _ = ctx.fill_text(node.health.label(), text_x + 18.0, pos.y + 57.0);
}

fn trace_rounded_rect(
	ctx: &CanvasRenderingContext2d,
	x: f64,
	y: f64,
	w: f64,
	h: f64,
	r: f64,
) {
	let r = r.min(w / 2.0).min(h / 2.0);
	ctx.begin_path();
	ctx.move_to(x + r, y);
	let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
	let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
	let _ = ctx.arc_to(x, y + h, x, y, r);
	let _ = ctx.arc_to(x, y, x + w, y, r);
	ctx.close_path();
}

/// Draws a 24x24 line icon for the category with its top-left at `(x, y)`.
fn draw_category_icon(
	ctx: &CanvasRenderingContext2d,
	category: Category,
	x: f64,
	y: f64,
	color: Color,
) {
	ctx.save();
	let _ = ctx.translate(x, y);
	ctx.set_stroke_style_str(&color.to_css());
	ctx.set_fill_style_str(&color.to_css());
	ctx.set_line_width(2.0);
	ctx.set_line_join("round");
	ctx.set_line_cap("round");

	match category {
		Category::Frontend | Category::Backend => {
			// Two stacked server units with indicator lights
			for top in [2.0, 14.0] {
				trace_rounded_rect(ctx, 2.0, top, 20.0, 8.0, 2.0);
				ctx.stroke();
				ctx.begin_path();
				let _ = ctx.arc(6.0, top + 4.0, 0.8, 0.0, 2.0 * PI);
				ctx.fill();
			}
		}
		Category::Service => {
			// Pulse line
			ctx.begin_path();
			ctx.move_to(22.0, 12.0);
			ctx.line_to(18.0, 12.0);
			ctx.line_to(15.0, 21.0);
			ctx.line_to(9.0, 3.0);
			ctx.line_to(6.0, 12.0);
			ctx.line_to(2.0, 12.0);
			ctx.stroke();
		}
		Category::Database => {
			// Cylinder: top ellipse, sides, two lower rims
			ctx.begin_path();
			let _ = ctx.ellipse(12.0, 5.0, 9.0, 3.0, 0.0, 0.0, 2.0 * PI);
			ctx.stroke();
			ctx.begin_path();
			ctx.move_to(3.0, 5.0);
			ctx.line_to(3.0, 19.0);
			ctx.move_to(21.0, 5.0);
			ctx.line_to(21.0, 19.0);
			ctx.stroke();
			for cy in [12.0, 19.0] {
				ctx.begin_path();
				let _ = ctx.ellipse(12.0, cy, 9.0, 3.0, 0.0, 0.0, PI);
				ctx.stroke();
			}
		}
	}

	ctx.restore();
}
