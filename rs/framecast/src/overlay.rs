use crate::config::PlayerConfig;
use crate::{PlaybackError, PlaybackState};

/// What the host should draw on top of the video.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Overlay {
	/// Audio is muted, typically by the browser's autoplay policy. Tapping it should call [`crate::Frame::unmute`].
	Unmute {
		/// Whether to draw an explicit unmute button.
		button: bool,
	},

	/// The player reported an error. Tapping it should call [`crate::Frame::retry`].
	Error {
		error: PlaybackError,

		/// Whether to print the message and a retry button.
		details: bool,
	},
}

impl Overlay {
	/// Pick the overlay for the given state; errors take precedence over muting.
	///
	/// The unmute overlay only applies while a player exists to unmute.
	pub fn resolve(state: &PlaybackState, has_player: bool, config: &PlayerConfig) -> Option<Self> {
		if let Some(error) = &state.error {
			return Some(Self::Error {
				error: error.clone(),
				details: config.show_error_overlay(),
			});
		}

		if has_player && state.is_muted == Some(true) {
			return Some(Self::Unmute {
				button: config.show_unmute_button(),
			});
		}

		None
	}
}
