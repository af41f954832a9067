use anyhow::Context;
use framecast::{AuthRequest, HttpAuthorizer, PlayerConfig};

pub async fn auth(config: PlayerConfig) -> anyhow::Result<()> {
	let url = config.auth.url.as_ref().context("missing --auth-url")?;
	let request = AuthRequest {
		stream_name: config.stream_name().context("missing --stream-name")?.to_string(),
		user_id: config.auth.user_id.clone().context("missing --user-id")?,
		app_name: config.auth.app_name.clone().context("missing --app-name")?,
	};

	let authorizer = HttpAuthorizer::new(url)?;
	tracing::info!(url = %authorizer.url(), stream = %request.stream_name, "requesting playback token");

	let payload = authorizer.fetch(&request).await.context("authorization failed")?;
	println!("{}", payload.hashed);

	Ok(())
}
