//! Graph data structures for input to the system flow component.

use std::fmt;

use serde::Deserialize;

/// Unique identity of a system node. Used to reference nodes in connections.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
	/// Wrap an id string.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	/// The raw id.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for NodeId {
	fn from(id: &str) -> Self {
		Self::new(id)
	}
}

/// The kind of system a node represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	/// User-facing application.
	Frontend,
	/// Stateless service or gateway.
	Service,
	/// Data store.
	Database,
	/// Batch or analytics backend.
	Backend,
}

impl Category {
	/// Lowercase name shown on the details badge.
	pub fn label(self) -> &'static str {
		match self {
			Self::Frontend => "frontend",
			Self::Service => "service",
			Self::Database => "database",
			Self::Backend => "backend",
		}
	}
}

/// Reported health of a system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Health {
	Healthy,
	Warning,
	Error,
}

impl Health {
	/// Capitalized name drawn next to the indicator.
	pub fn label(self) -> &'static str {
		match self {
			Self::Healthy => "Healthy",
			Self::Warning => "Warning",
			Self::Error => "Error",
		}
	}
}

/// A single system box in the diagram.
#[derive(Clone, Debug, Deserialize)]
pub struct SystemNode {
	/// Unique node identity.
	pub id: NodeId,
	/// Display name drawn inside the box and used in the details panel.
	pub name: String,
	/// Kind of system; selects the icon.
	pub category: Category,
	/// Reported health; selects the indicator color.
	pub health: Health,
	/// Outgoing edge targets, in declaration order.
	#[serde(default)]
	pub connections: Vec<NodeId>,
}

impl SystemNode {
	/// Build a node from string ids.
	pub fn new(
		id: &str,
		name: &str,
		category: Category,
		health: Health,
		connections: &[&str],
	) -> Self {
		Self {
			id: NodeId::new(id),
			name: name.to_string(),
			category,
			health,
			connections: connections.iter().copied().map(NodeId::from).collect(),
		}
	}
}

/// A column of nodes. Node order fixes vertical stacking order.
#[derive(Clone, Debug, Deserialize)]
pub struct Step {
	/// Step label, e.g. `step1`.
	pub name: String,
	/// Nodes from top to bottom.
	#[serde(default)]
	pub nodes: Vec<SystemNode>,
}

/// Complete graph input: steps ordered left to right.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphData {
	/// Columns, left to right.
	pub steps: Vec<Step>,
}

/// Top-left corner of a node box in logical canvas units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[allow(missing_docs)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}
