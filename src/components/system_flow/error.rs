//! Error types for graph construction.

use thiserror::Error;

use super::types::NodeId;

/// Result type alias for graph construction.
pub type GraphResult<T> = Result<T, GraphError>;

/// Structural defects found while validating graph data at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
	/// Two nodes share the same identity.
	#[error("duplicate node id: {id}")]
	DuplicateNode {
		/// The repeated id.
		id: NodeId,
	},

	/// A connection points at a node that does not exist.
	#[error("node {node} connects to unknown node {target}")]
	DanglingEdge {
		/// Node declaring the connection.
		node: NodeId,
		/// Missing target id.
		target: NodeId,
	},

	/// The same connection is declared twice.
	#[error("duplicate connection {node}-{target}")]
	DuplicateEdge {
		/// Node declaring the connection.
		node: NodeId,
		/// Repeated target id.
		target: NodeId,
	},
}
