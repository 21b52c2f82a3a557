//! Leptos component wrapping the system flow canvas.
//!
//! The component creates an HTML canvas at the diagram's logical size and
//! wires up click and hover handlers. An animation loop runs via
//! `requestAnimationFrame`, easing opacities and redrawing each frame.
//! Selection itself is owned by the caller: clicks are reported through
//! `on_select` and the current selection is read back from `selected`.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, MouseEvent};

use super::graph::GraphStore;
use super::layout::LayoutConfig;
use super::render;
use super::state::DiagramState;
use super::theme::Theme;
use super::types::NodeId;

/// Fixed frame step for animations, in seconds.
const FRAME_DT: f64 = 0.016;

/// Bundles diagram state with its visual theme.
struct FlowContext {
	state: DiagramState,
	theme: Theme,
}

/// Renders the step-ordered system diagram on a canvas element.
///
/// The canvas is drawn at `layout`'s logical size and scaled by CSS to the
/// width of its container; pointer coordinates are mapped back before
/// hit-testing.
#[component]
pub fn SystemFlowCanvas(
	graph: GraphStore,
	#[prop(into)] selected: Signal<Option<NodeId>>,
	#[prop(into)] on_select: Callback<NodeId>,
	#[prop(optional)] layout: Option<LayoutConfig>,
	#[prop(optional)] theme: Option<Theme>,
) -> impl IntoView {
	let layout = layout.unwrap_or_else(|| LayoutConfig::for_steps(graph.steps().len()));
	let theme = theme.unwrap_or_default();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FlowContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init) = (context.clone(), animate.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		canvas.set_width(layout.canvas_width as u32);
		canvas.set_height(layout.canvas_height as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			return;
		};

		debug!("system-flow: canvas mounted with theme {}", theme.name);
		*context_init.borrow_mut() = Some(FlowContext {
			state: DiagramState::new(graph.clone(), layout.clone(), theme.transition_speed),
			theme: theme.clone(),
		});

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			// Selection signal is gone once the owner is disposed; stop the loop.
			let Some(current) = selected.try_get_untracked() else {
				return;
			};
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.state.sync_selection(current.as_ref());
				c.state.tick(FRAME_DT, c.theme.dimmed);
				render::render(&c.state, &ctx, &c.theme);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_click = context.clone();
	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let hit = context_click.borrow().as_ref().and_then(|c| {
			let (x, y) = logical_point(&canvas, &ev, &c.state.layout);
			c.state.node_at(x, y).cloned()
		});
		if let Some(id) = hit {
			on_select.run(id);
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			let (x, y) = logical_point(&canvas, &ev, &c.state.layout);
			let hovered = c.state.node_at(x, y).cloned();
			c.state.set_hover(hovered);
			set_cursor(&canvas, c.state.cursor());
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.set_hover(None);
			if let Some(canvas) = canvas_ref.get() {
				let canvas: HtmlCanvasElement = canvas.into();
				set_cursor(&canvas, c.state.cursor());
			}
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="system-flow-canvas"
			on:click=on_click
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="display: block; width: 100%; height: auto;"
		/>
	}
}

// `leptos::prelude` shadows `style()` with its own extension method.
fn set_cursor(canvas: &HtmlCanvasElement, cursor: &str) {
	let _ = HtmlElement::style(canvas).set_property("cursor", cursor);
}

/// Map a pointer event to logical canvas coordinates.
fn logical_point(
	canvas: &HtmlCanvasElement,
	ev: &MouseEvent,
	layout: &LayoutConfig,
) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	let (sx, sy) = (
		scale_factor(layout.canvas_width, rect.width()),
		scale_factor(layout.canvas_height, rect.height()),
	);
	(
		(ev.client_x() as f64 - rect.left()) * sx,
		(ev.client_y() as f64 - rect.top()) * sy,
	)
}

fn scale_factor(logical: f64, displayed: f64) -> f64 {
	if displayed > 0.0 {
		logical / displayed
	} else {
		1.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scale_factor_maps_displayed_to_logical() {
		assert_eq!(scale_factor(1200.0, 600.0), 2.0);
		assert_eq!(scale_factor(250.0, 250.0), 1.0);
		assert_eq!(scale_factor(1200.0, 0.0), 1.0);
	}
}
