//! Step-ordered system flow diagram with click-to-inspect details.
//!
//! Renders systems as boxes grouped into left-to-right steps, joined by
//! curved connectors:
//! - Closed-form layout centering each step's stack on the canvas
//! - Adjacency lookup for incoming and outgoing neighbors
//! - Click to select a system; unrelated boxes and connectors fade out
//! - A details panel filled in after a short delay, guarded against stale
//!   results when the selection changes first
//!
//! # Example
//!
//! ```ignore
//! use system_flow::{GraphStore, SystemFlow};
//!
//! let graph = GraphStore::sample().unwrap_or_default();
//! view! { <SystemFlow graph=graph /> }
//! ```

mod adjacency;
mod component;
mod details;
mod error;
mod graph;
mod layout;
mod panel;
mod paths;
mod render;
mod state;
pub mod theme;
mod types;
mod view;

pub use adjacency::{Connections, connections};
pub use component::SystemFlowCanvas;
pub use details::{DETAILS_DELAY, DetailsPayload, Metrics, Status, display_label};
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, GraphStore, NodeSlot, sample_data};
pub use layout::LayoutConfig;
pub use panel::DetailsPanel;
pub use paths::{ConnectionPath, connection_paths};
pub use state::{DetailsTicket, DimmedOpacity, Highlight, SelectionState};
pub use theme::Theme;
pub use types::{Category, GraphData, Health, NodeId, Position, Step, SystemNode};
pub use view::SystemFlow;
