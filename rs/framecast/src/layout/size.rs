use std::{fmt, str::FromStr};

/// Pixel dimensions of a box: either the container frame or the video's intrinsic size.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Size {
	pub width: f64,
	pub height: f64,
}

impl Size {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Both axes are finite and strictly positive.
	///
	/// Anything else (zero before the video reports its size, a collapsed container) can't be fit.
	pub fn is_usable(&self) -> bool {
		self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
	}

	pub fn aspect(&self) -> f64 {
		self.width / self.height
	}

	/// The same box with its axes exchanged.
	pub fn swap(self) -> Self {
		Self {
			width: self.height,
			height: self.width,
		}
	}
}

impl From<(u32, u32)> for Size {
	fn from((width, height): (u32, u32)) -> Self {
		Self::new(width as f64, height as f64)
	}
}

impl fmt::Display for Size {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{}", self.width, self.height)
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSizeError {
	#[error("expected WIDTHxHEIGHT, got {0:?}")]
	Format(String),

	#[error("invalid dimension {0:?}")]
	Dimension(String),
}

impl FromStr for Size {
	type Err = ParseSizeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (width, height) = s
			.split_once(['x', 'X'])
			.ok_or_else(|| ParseSizeError::Format(s.to_string()))?;

		let parse = |v: &str| {
			v.trim()
				.parse::<f64>()
				.map_err(|_| ParseSizeError::Dimension(v.to_string()))
		};

		Ok(Self::new(parse(width)?, parse(height)?))
	}
}
