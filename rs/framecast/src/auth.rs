//! Exchange a stream name for a playback token.

use futures::FutureExt;
use futures::future::BoxFuture;
use url::Url;

use crate::{AuthError, AuthPayload};

/// The path of the authorization endpoint, relative to the backend's origin.
pub const AUTH_PATH: &str = "/api/streams/getstreams/auth";

/// The body sent to the authorization endpoint.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest {
	pub stream_name: String,

	#[serde(rename = "userID")]
	pub user_id: String,

	pub app_name: String,
}

#[derive(serde::Deserialize)]
struct AuthResponse {
	data: AuthData,
}

#[derive(serde::Deserialize)]
struct AuthData {
	hash: String,
}

/// Something that can issue playback tokens.
///
/// The future is spawned onto the runtime, so it must not borrow from `self`.
pub trait Authorize: Send + Sync {
	fn authorize(&self, request: AuthRequest) -> BoxFuture<'static, Result<AuthPayload, AuthError>>;
}

/// Requests tokens from an HTTP backend with a single POST.
#[derive(Clone, Debug)]
pub struct HttpAuthorizer {
	client: reqwest::Client,
	url: Url,
}

impl HttpAuthorizer {
	/// Target the authorization endpoint of the backend at `base`.
	pub fn new(base: &Url) -> Result<Self, url::ParseError> {
		Ok(Self {
			client: reqwest::Client::new(),
			url: base.join(AUTH_PATH)?,
		})
	}

	/// Use a preconfigured HTTP client, for example one with custom timeouts.
	pub fn with_client(mut self, client: reqwest::Client) -> Self {
		self.client = client;
		self
	}

	/// The full URL of the authorization endpoint.
	pub fn url(&self) -> &Url {
		&self.url
	}

	pub async fn fetch(&self, request: &AuthRequest) -> Result<AuthPayload, AuthError> {
		tracing::debug!(url = %self.url, stream = %request.stream_name, "requesting playback token");

		let response: AuthResponse = self
			.client
			.post(self.url.clone())
			.json(request)
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;

		if response.data.hash.is_empty() {
			return Err(AuthError::Malformed("empty hash".to_string()));
		}

		Ok(AuthPayload::live(response.data.hash))
	}
}

impl Authorize for HttpAuthorizer {
	fn authorize(&self, request: AuthRequest) -> BoxFuture<'static, Result<AuthPayload, AuthError>> {
		let this = self.clone();
		async move { this.fetch(&request).await }.boxed()
	}
}
