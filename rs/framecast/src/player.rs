//! The boundary to the external player and the surface it renders into.
//!
//! Neither is implemented here: transport, decoding, and drawing belong to the host.

use std::fmt;
use std::sync::Arc;

use crate::config::PlayerConfig;
use crate::layout::{Placement, Size};
use crate::PlaybackError;

/// The last state reported by the player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaybackState {
	/// `None` until the player has reported whether audio is muted.
	pub is_muted: Option<bool>,

	/// Nothing is playing until a connection has been established.
	pub is_playing: bool,

	pub error: Option<PlaybackError>,
}

/// The token forwarded to [`Player::connect`] for authorized playback.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
	pub hashed: String,
	pub start_time: u64,
	pub end_time: u64,
}

impl AuthPayload {
	/// A live (unbounded) playback window for the given hash.
	pub fn live(hashed: impl Into<String>) -> Self {
		Self {
			hashed: hashed.into(),
			start_time: 0,
			end_time: 0,
		}
	}
}

/// An external player instance, owned by a single [`crate::Frame`].
///
/// Dropping the player detaches it from its surface.
pub trait Player: Send {
	/// Start playing the named stream, optionally with an authorization payload.
	///
	/// Progress and failures are reported asynchronously through [`OnState`].
	fn connect(&mut self, stream_name: &str, auth: Option<AuthPayload>);

	fn stop(&mut self);

	fn is_playing(&self) -> bool;

	fn is_muted(&self) -> bool;

	fn set_muted(&mut self, muted: bool);
}

/// Constructs players, one per mount.
pub trait Backend {
	fn create(&self, config: &PlayerConfig, surface: Arc<dyn Surface>, on_state: OnState) -> Box<dyn Player>;
}

/// The video element and the frame that contains it.
pub trait Surface: Send + Sync {
	/// The intrinsic size of the video, once the source has reported it.
	fn video_size(&self) -> Option<Size>;

	/// The current size of the containing frame.
	fn container_size(&self) -> Option<Size>;

	/// Apply a new placement to the video element.
	fn place(&self, placement: &Placement);
}

/// The state-change callback handed to the player at construction.
///
/// The player may call it any number of times, from any thread, including after the frame was torn down.
#[derive(Clone)]
pub struct OnState {
	callback: Arc<dyn Fn(PlaybackState) + Send + Sync>,
}

impl OnState {
	pub fn new<F>(callback: F) -> Self
	where
		F: Fn(PlaybackState) + Send + Sync + 'static,
	{
		Self {
			callback: Arc::new(callback),
		}
	}

	pub fn call(&self, state: PlaybackState) {
		(self.callback)(state)
	}
}

impl fmt::Debug for OnState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OnState").finish_non_exhaustive()
	}
}
