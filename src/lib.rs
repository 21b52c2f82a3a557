//! system-flow: Interactive system integration flow diagram.
//!
//! This crate provides a WASM-based component that renders systems grouped
//! into pipeline steps, connected by curved arrows, with a click-to-inspect
//! details panel.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, error, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::system_flow::{
	GraphData, GraphError, GraphStore, LayoutConfig, NodeId, SystemFlow, SystemFlowCanvas,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("system-flow: logging initialized");
}

/// Load graph data from a script element with id="graph-data".
/// Expected format: JSON with { steps: [{ name, nodes: [...] }] }
fn load_graph_data() -> Option<GraphData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("graph-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<GraphData>(&json_text) {
		Ok(data) => Some(data),
		Err(e) => {
			warn!("system-flow: failed to parse graph data: {}", e);
			None
		}
	}
}

/// Embedded graph data if present and valid, otherwise the built-in sample.
fn load_graph() -> GraphStore {
	if let Some(data) = load_graph_data() {
		match GraphStore::new(data) {
			Ok(graph) => {
				info!(
					"system-flow: loaded {} steps, {} nodes",
					graph.steps().len(),
					graph.node_count()
				);
				return graph;
			}
			Err(e) => warn!("system-flow: invalid graph data, using sample: {}", e),
		}
	}

	match GraphStore::sample() {
		Ok(graph) => {
			info!(
				"system-flow: using built-in sample, {} steps, {} nodes",
				graph.steps().len(),
				graph.node_count()
			);
			graph
		}
		Err(e) => {
			error!("system-flow: sample graph is invalid: {}", e);
			GraphStore::default()
		}
	}
}

/// Main application component.
/// Loads graph data from the DOM and renders the diagram with its details panel.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let graph = load_graph();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />
		<Title text="System Integration Flow" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<SystemFlow graph=graph />
	}
}
