use std::fmt;

/// How the video is scaled into its container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sizing {
	/// Letterbox: the whole video is visible.
	#[default]
	Contain,

	/// Crop: the container is completely covered.
	Cover,
}

impl fmt::Display for Sizing {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Contain => write!(f, "contain"),
			Self::Cover => write!(f, "cover"),
		}
	}
}

/// Rotation applied to the video inside its container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Rotate {
	#[default]
	None,

	/// Clockwise, 90 degrees.
	Cw,

	/// Counter-clockwise, 90 degrees.
	Ccw,

	/// Upside down, 180 degrees.
	Flip,
}

impl Rotate {
	/// Quarter turns exchange the visual axes of the video.
	pub fn is_quarter_turn(&self) -> bool {
		matches!(self, Self::Cw | Self::Ccw)
	}

	/// Rotation in degrees, or `None` when no transform applies.
	pub fn degrees(&self) -> Option<i32> {
		match self {
			Self::None => None,
			Self::Cw => Some(90),
			Self::Ccw => Some(-90),
			Self::Flip => Some(180),
		}
	}

	/// The CSS `transform` value.
	pub fn css(&self) -> String {
		match self.degrees() {
			Some(deg) => format!("rotate({deg}deg)"),
			None => "none".to_string(),
		}
	}
}

impl fmt::Display for Rotate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::None => write!(f, "none"),
			Self::Cw => write!(f, "cw"),
			Self::Ccw => write!(f, "ccw"),
			Self::Flip => write!(f, "flip"),
		}
	}
}
