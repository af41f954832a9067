use std::fmt;

use super::Rotate;

/// The dimension that was fit exactly to the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
	Width,
	Height,
}

/// Where the video element goes inside its container, in CSS pixels.
///
/// `width` and `height` are measured before the rotation transform is applied,
/// while `top` and `left` are offsets in the container's own (unrotated) coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
	pub width: f64,
	pub height: f64,
	pub top: f64,
	pub left: f64,
	pub rotate: Rotate,
	pub dominant: Axis,
}

impl fmt::Display for Placement {
	/// Renders as inline CSS declarations.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"width: {}px; height: {}px; top: {}px; left: {}px; transform: {}",
			self.width,
			self.height,
			self.top,
			self.left,
			self.rotate.css()
		)
	}
}
