//! Fabricated metrics and status shown for a selected system.
//!
//! Nothing here is live data: every selection receives the same snapshot
//! after [`DETAILS_DELAY`].

use std::time::Duration;

/// Delay before a details payload is attached to a selection.
pub const DETAILS_DELAY: Duration = Duration::from_millis(300);

/// Performance and resource figures, pre-formatted for display.
#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Metrics {
	pub uptime: String,
	pub response_time: String,
	pub throughput: String,
	pub error_rate: String,
	pub cpu: String,
	pub memory: String,
	pub active_users: String,
	pub pending_requests: String,
}

impl Metrics {
	/// Key/value pairs in display order. The first four are performance
	/// figures, the rest resource usage.
	pub fn entries(&self) -> [(&'static str, &str); 8] {
		[
			("uptime", self.uptime.as_str()),
			("responseTime", self.response_time.as_str()),
			("throughput", self.throughput.as_str()),
			("errorRate", self.error_rate.as_str()),
			("cpu", self.cpu.as_str()),
			("memory", self.memory.as_str()),
			("activeUsers", self.active_users.as_str()),
			("pendingRequests", self.pending_requests.as_str()),
		]
	}

	/// Uptime, response time, throughput and error rate.
	pub fn performance(&self) -> Vec<(&'static str, &str)> {
		self.entries().into_iter().take(4).collect()
	}

	/// CPU, memory, active users and pending requests.
	pub fn resources(&self) -> Vec<(&'static str, &str)> {
		self.entries().into_iter().skip(4).collect()
	}
}

/// Deployment status, pre-formatted for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
	/// Relative time of the last deployment.
	pub last_deployment: String,
	/// Deployed version tag.
	pub version: String,
	/// Deployment environment name.
	pub environment: String,
}

impl Status {
	/// Key/value pairs in display order.
	pub fn entries(&self) -> [(&'static str, &str); 3] {
		[
			("lastDeployment", self.last_deployment.as_str()),
			("version", self.version.as_str()),
			("environment", self.environment.as_str()),
		]
	}
}

/// Everything the details panel shows beyond the graph itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailsPayload {
	/// Performance and resource figures.
	pub metrics: Metrics,
	/// Deployment status cards.
	pub status: Status,
}

impl DetailsPayload {
	/// The fixed snapshot every system reports.
	pub fn fabricated() -> Self {
		Self {
			metrics: Metrics {
				uptime: "99.99%".into(),
				response_time: "120ms".into(),
				throughput: "1000 req/s".into(),
				error_rate: "0.01%".into(),
				cpu: "45%".into(),
				memory: "60%".into(),
				active_users: "1,234".into(),
				pending_requests: "23".into(),
			},
			status: Status {
				last_deployment: "2 hours ago".into(),
				version: "v2.3.4".into(),
				environment: "Production".into(),
			},
		}
	}
}

/// Split a camelCase key into words: `responseTime` -> `response Time`.
///
/// A space goes before every uppercase letter and the result is trimmed;
/// letter case is left alone.
pub fn display_label(key: &str) -> String {
	let mut label = String::with_capacity(key.len() + 4);
	for ch in key.chars() {
		if ch.is_uppercase() {
			label.push(' ');
		}
		label.push(ch);
	}
	label.trim().to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn labels_split_camel_case() {
		assert_eq!(display_label("responseTime"), "response Time");
		assert_eq!(display_label("pendingRequests"), "pending Requests");
		assert_eq!(display_label("lastDeployment"), "last Deployment");
		assert_eq!(display_label(""), "");
	}

	#[test]
	fn labels_keep_case_of_single_words() {
		assert_eq!(display_label("cpu"), "cpu");
		assert_eq!(display_label("Version"), "Version");
	}

	#[test]
	fn metrics_split_into_two_groups() {
		let payload = DetailsPayload::fabricated();
		let performance = payload.metrics.performance();
		let resources = payload.metrics.resources();
		assert_eq!(performance.len(), 4);
		assert_eq!(resources.len(), 4);
		assert_eq!(performance[1], ("responseTime", "120ms"));
		assert_eq!(resources[0], ("cpu", "45%"));
	}

	#[test]
	fn status_has_three_cards() {
		let payload = DetailsPayload::fabricated();
		let keys: Vec<_> = payload.status.entries().iter().map(|(k, _)| *k).collect();
		assert_eq!(keys, ["lastDeployment", "version", "environment"]);
	}
}
