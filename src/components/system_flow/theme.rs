//! Visual theming for the system flow diagram.
//!
//! Provides colors, stroke widths, fonts, and animation speeds.

use super::state::DimmedOpacity;
use super::types::Health;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with alpha in `0.0..=1.0`.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Hex notation when opaque, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Node box style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Box fill
	pub fill: Color,
	/// Box fill while selected
	pub selected_fill: Color,
	/// Box border
	pub border: Color,
	/// Box border while selected
	pub selected_border: Color,
	/// Border stroke width
	pub border_width: f64,
	/// Category icon stroke color
	pub icon: Color,
	/// System name text color
	pub name_color: Color,
	/// System name CSS font
	pub name_font: &'static str,
	/// Health label text color
	pub status_color: Color,
	/// Health label CSS font
	pub status_font: &'static str,
	/// Radius of the health indicator dot
	pub status_dot_radius: f64,
}

/// Connector style.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Connector and arrowhead color
	pub color: Color,
	/// Connector stroke width
	pub line_width: f64,
	/// Arrowhead length along the connector
	pub arrow_size: f64,
	/// Color of the animated dashed overlay
	pub flow_color: Color,
	/// Stroke width of the overlay
	pub flow_width: f64,
	/// Dash and gap length of the overlay
	pub flow_dash: (f64, f64),
	/// Overlay scroll speed in units per second
	pub flow_speed: f64,
}

/// Health indicator colors.
#[derive(Clone, Debug)]
#[allow(missing_docs)]
pub struct HealthColors {
	pub healthy: Color,
	pub warning: Color,
	pub error: Color,
}

impl HealthColors {
	/// Indicator color for `health`.
	pub fn get(&self, health: Health) -> Color {
		match health {
			Health::Healthy => self.healthy,
			Health::Warning => self.warning,
			Health::Error => self.error,
		}
	}
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Name used in logs
	pub name: &'static str,
	/// Canvas background
	pub background: Color,
	/// Node box style
	pub node: NodeStyle,
	/// Connector style
	pub edge: EdgeStyle,
	/// Health indicator colors
	pub health: HealthColors,
	/// Opacity of elements outside the current highlight
	pub dimmed: DimmedOpacity,
	/// Exponential smoothing speed for opacity changes (~300ms to 95% at 10.0)
	pub transition_speed: f64,
}

impl Theme {
	/// White boxes on a light canvas with red connectors (default)
	pub fn light() -> Self {
		Self {
			name: "light",
			background: Color::rgb(255, 255, 255),
			node: NodeStyle {
				fill: Color::rgb(255, 255, 255),
				selected_fill: Color::rgb(191, 219, 254),
				border: Color::rgb(229, 231, 235),
				selected_border: Color::rgb(59, 130, 246),
				border_width: 2.0,
				icon: Color::rgb(75, 85, 99),
				name_color: Color::rgb(17, 24, 39),
				name_font: "500 14px sans-serif",
				status_color: Color::rgb(55, 65, 81),
				status_font: "12px sans-serif",
				status_dot_radius: 6.0,
			},
			edge: EdgeStyle {
				color: Color::rgb(220, 38, 38),
				line_width: 2.0,
				arrow_size: 10.0,
				flow_color: Color::rgba(220, 38, 38, 0.3),
				flow_width: 3.0,
				flow_dash: (5.0, 5.0),
				flow_speed: 20.0,
			},
			health: HealthColors {
				healthy: Color::rgb(34, 197, 94),
				warning: Color::rgb(245, 158, 11),
				error: Color::rgb(220, 38, 38),
			},
			dimmed: DimmedOpacity {
				node: 0.5,
				edge: 0.2,
			},
			transition_speed: 10.0,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::light()
	}
}
