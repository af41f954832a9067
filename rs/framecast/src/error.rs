use std::sync::Arc;

/// Errors returned to the host by the player frame.
#[derive(thiserror::Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
	/// A required argument, such as the stream name, was missing or empty.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	#[error("authorization failed: {0}")]
	Authorization(#[from] AuthError),
}

/// Failures while fetching a playback token from the authorization endpoint.
#[derive(thiserror::Error, Debug, Clone)]
#[non_exhaustive]
pub enum AuthError {
	#[error("request failed: {0}")]
	Request(Arc<reqwest::Error>),

	#[error("unexpected status: {0}")]
	Status(reqwest::StatusCode),

	#[error("malformed response: {0}")]
	Malformed(String),
}

impl From<reqwest::Error> for AuthError {
	fn from(err: reqwest::Error) -> Self {
		match err.status() {
			Some(status) => Self::Status(status),
			None if err.is_decode() => Self::Malformed(err.to_string()),
			None => Self::Request(Arc::new(err)),
		}
	}
}

/// An error reported by the external player through its state callback.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct PlaybackError {
	pub message: String,
}

impl PlaybackError {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}
}
