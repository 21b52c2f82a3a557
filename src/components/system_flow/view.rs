//! Composition root: owns the selection and schedules details delivery.

use leptos::prelude::*;
use log::{debug, info};

use super::component::SystemFlowCanvas;
use super::details::{DETAILS_DELAY, DetailsPayload};
use super::graph::GraphStore;
use super::panel::DetailsPanel;
use super::state::SelectionState;
use super::types::NodeId;

/// Diagram plus details panel for one graph.
///
/// Clicking a node selects it immediately; the details payload follows
/// after [`DETAILS_DELAY`] and is dropped if another node was selected in
/// the meantime.
#[component]
pub fn SystemFlow(
	graph: GraphStore,
	#[prop(into, optional)] title: Option<String>,
) -> impl IntoView {
	let selection = RwSignal::new(SelectionState::default());
	let selected = Signal::derive(move || selection.with(|s| s.selected().cloned()));

	let on_select = move |id: NodeId| {
		if selection.with_untracked(|s| s.selected() == Some(&id)) {
			return;
		}
		let Some(ticket) = selection.try_update(|s| s.select(id)).flatten() else {
			return;
		};
		info!("system-flow: selected {}", ticket.node);

		set_timeout(
			move || {
				let applied = selection
					.try_update(|s| s.apply_details(&ticket, DetailsPayload::fabricated()))
					.unwrap_or(false);
				if applied {
					debug!("system-flow: details loaded for {}", ticket.node);
				} else {
					debug!("system-flow: discarded stale details for {}", ticket.node);
				}
			},
			DETAILS_DELAY,
		);
	};

	view! {
		<div class="system-flow">
			<div class="diagram-card">
				<h1>{title.unwrap_or_else(|| "System Integration Flow".to_string())}</h1>
				<SystemFlowCanvas graph=graph.clone() selected=selected on_select=on_select />
			</div>
			<DetailsPanel graph=graph selection=selection />
		</div>
	}
}
