//! Details panel for the selected system.

use leptos::prelude::*;

use super::adjacency::connections;
use super::details::{DetailsPayload, display_label};
use super::graph::GraphStore;
use super::state::SelectionState;
use super::types::{NodeId, SystemNode};

/// Shows metrics, neighbors and status for the current selection.
///
/// Renders nothing until both a selection and its details are present.
#[component]
pub fn DetailsPanel(
	graph: GraphStore,
	#[prop(into)] selection: Signal<SelectionState>,
) -> impl IntoView {
	let graph = StoredValue::new(graph);

	move || {
		selection.with(|s| {
			let (id, details) = (s.selected()?, s.details()?);
			graph.with_value(|g| {
				let node = g.node(id)?;
				Some(details_view(g, node, details))
			})
		})
	}
}

fn details_view(graph: &GraphStore, node: &SystemNode, details: &DetailsPayload) -> AnyView {
	let neighbors = connections(graph, &node.id);
	let name_of = |id: &NodeId| {
		graph
			.node(id)
			.map(|n| n.name.clone())
			.unwrap_or_else(|| id.to_string())
	};
	let incoming: Vec<String> = neighbors.incoming.iter().map(name_of).collect();
	let outgoing: Vec<String> = neighbors.outgoing.iter().map(name_of).collect();

	view! {
		<div class="details-panel">
			<div class="details-header">
				<div>
					<h2>{node.name.clone()}</h2>
					<p class="subtitle">"System Details"</p>
				</div>
				<span class="category-badge">{node.category.label()}</span>
			</div>

			<div class="details-grid">
				<div class="details-column">
					<h3>"Performance Metrics"</h3>
					{metric_rows(details.metrics.performance())}
				</div>
				<div class="details-column">
					<h3>"Resource Usage"</h3>
					{metric_rows(details.metrics.resources())}
				</div>
				<div class="details-column">
					<h3>"Connected Systems"</h3>
					<h4>"Incoming From:"</h4>
					{neighbor_list(incoming)}
					<h4>"Outgoing To:"</h4>
					{neighbor_list(outgoing)}
				</div>
			</div>

			<div class="status-grid">
				{details
					.status
					.entries()
					.into_iter()
					.map(|(key, value)| {
						view! {
							<div class="status-card">
								<h4>{display_label(key)}</h4>
								<p>{value.to_string()}</p>
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
	.into_any()
}

fn metric_rows(entries: Vec<(&'static str, &str)>) -> impl IntoView {
	entries
		.into_iter()
		.map(|(key, value)| {
			view! {
				<div class="metric-row">
					<span class="metric-label">{display_label(key)}</span>
					<span class="metric-value">{value.to_string()}</span>
				</div>
			}
		})
		.collect_view()
}

fn neighbor_list(names: Vec<String>) -> impl IntoView {
	names
		.into_iter()
		.map(|name| view! { <div class="neighbor">"→ "{name}</div> })
		.collect_view()
}
