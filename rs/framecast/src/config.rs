use std::time::Duration;

use url::Url;

use crate::layout::{Rotate, Sizing};

/// How long autoplay waits before the first connect attempt.
///
/// Gives the player's own negotiation time to settle; it is not a network guarantee.
pub const DEFAULT_AUTO_PLAY_DELAY: Duration = Duration::from_secs(3);

/// The endpoint used to exchange a stream name for a playback token.
#[derive(Clone, Default, Debug, clap::Args, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
#[non_exhaustive]
pub struct AuthConfig {
	/// The base URL of the authorization backend.
	///
	/// When set, playback requests a token before connecting.
	#[arg(id = "auth-url", long = "auth-url", env = "FRAMECAST_AUTH_URL")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<Url>,

	/// The user requesting playback, required for authorized playback.
	#[arg(id = "user-id", long = "user-id", env = "FRAMECAST_USER_ID")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_id: Option<String>,

	/// The application the stream belongs to, required for authorized playback.
	#[arg(id = "app-name", long = "app-name", env = "FRAMECAST_APP_NAME")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub app_name: Option<String>,
}

/// Options recognized by the player frame.
///
/// Every field is optional so a TOML file can be layered under command-line flags;
/// use the accessor methods to read the effective value.
#[derive(Clone, Default, Debug, clap::Parser, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
#[non_exhaustive]
pub struct PlayerConfig {
	/// The name of the stream to play.
	#[arg(id = "stream-name", long = "stream-name", env = "FRAMECAST_STREAM_NAME")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub stream_name: Option<String>,

	/// Start playing automatically once mounted (default: true).
	#[arg(
		id = "auto-play",
		long = "auto-play",
		env = "FRAMECAST_AUTO_PLAY",
		default_missing_value = "true",
		num_args = 0..=1,
		value_parser = clap::value_parser!(bool),
	)]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub auto_play: Option<bool>,

	/// Delay before autoplay connects (default: 3s).
	#[arg(
		id = "auto-play-delay",
		long = "auto-play-delay",
		env = "FRAMECAST_AUTO_PLAY_DELAY",
		value_parser = humantime::parse_duration,
	)]
	#[serde(with = "humantime_serde")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub auto_play_delay: Option<Duration>,

	/// Rotation applied to the video (default: none).
	#[arg(long, value_enum, env = "FRAMECAST_ROTATE")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub rotate: Option<Rotate>,

	/// How the video is scaled into its container (default: contain).
	#[arg(long, value_enum, env = "FRAMECAST_SIZING")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sizing: Option<Sizing>,

	/// Mute the player as soon as it is created (default: false).
	///
	/// Backends that can skip the audio track entirely may also read it from the config passed to `create`.
	#[arg(
		id = "disable-audio",
		long = "disable-audio",
		env = "FRAMECAST_DISABLE_AUDIO",
		default_missing_value = "true",
		num_args = 0..=1,
		value_parser = clap::value_parser!(bool),
	)]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub disable_audio: Option<bool>,

	/// Offer an unmute button while the player is muted (default: true).
	#[arg(
		id = "show-unmute-button",
		long = "show-unmute-button",
		env = "FRAMECAST_SHOW_UNMUTE_BUTTON",
		default_missing_value = "true",
		num_args = 0..=1,
		value_parser = clap::value_parser!(bool),
	)]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub show_unmute_button: Option<bool>,

	/// Describe playback errors over the video (default: true).
	#[arg(
		id = "show-error-overlay",
		long = "show-error-overlay",
		env = "FRAMECAST_SHOW_ERROR_OVERLAY",
		default_missing_value = "true",
		num_args = 0..=1,
		value_parser = clap::value_parser!(bool),
	)]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub show_error_overlay: Option<bool>,

	#[command(flatten)]
	#[serde(default)]
	pub auth: AuthConfig,
}

impl PlayerConfig {
	/// The configured stream name, if it is non-empty.
	pub fn stream_name(&self) -> Option<&str> {
		self.stream_name.as_deref().filter(|name| !name.is_empty())
	}

	pub fn auto_play(&self) -> bool {
		self.auto_play.unwrap_or(true)
	}

	pub fn auto_play_delay(&self) -> Duration {
		self.auto_play_delay.unwrap_or(DEFAULT_AUTO_PLAY_DELAY)
	}

	pub fn rotate(&self) -> Rotate {
		self.rotate.unwrap_or_default()
	}

	pub fn sizing(&self) -> Sizing {
		self.sizing.unwrap_or_default()
	}

	pub fn disable_audio(&self) -> bool {
		self.disable_audio.unwrap_or(false)
	}

	pub fn show_unmute_button(&self) -> bool {
		self.show_unmute_button.unwrap_or(true)
	}

	pub fn show_error_overlay(&self) -> bool {
		self.show_error_overlay.unwrap_or(true)
	}

	pub fn with_stream_name(mut self, name: impl Into<String>) -> Self {
		self.stream_name = Some(name.into());
		self
	}

	pub fn with_auto_play(mut self, auto_play: bool) -> Self {
		self.auto_play = Some(auto_play);
		self
	}

	pub fn with_layout(mut self, sizing: Sizing, rotate: Rotate) -> Self {
		self.sizing = Some(sizing);
		self.rotate = Some(rotate);
		self
	}
}
