mod auth;
mod fit;

use auth::*;
use fit::*;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use framecast::PlayerConfig;

#[derive(Parser, Clone)]
#[command(name = "framecast", about = "Lay out and authorize an embedded stream player")]
pub struct Cli {
	#[command(flatten)]
	log: framecast::Log,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Clone)]
pub enum Command {
	/// Compute where a video goes inside its container.
	Fit(FitArgs),

	/// Request a playback token from the authorization endpoint.
	Auth {
		/// Load the player configuration from a TOML file; flags override it.
		#[arg(long)]
		config: Option<PathBuf>,

		#[command(flatten)]
		player: PlayerConfig,
	},

	/// Print the resolved player configuration as TOML.
	Config {
		/// Load the player configuration from a TOML file; flags override it.
		#[arg(long)]
		config: Option<PathBuf>,

		#[command(flatten)]
		player: PlayerConfig,
	},
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let matches = Cli::command().get_matches();
	let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());
	cli.log.init();

	// The flags of whichever subcommand ran, used to layer over a config file.
	let flags = matches.subcommand().map(|(_, flags)| flags);

	match cli.command {
		Command::Fit(args) => fit(args),
		Command::Auth { config, player } => {
			let player = layer(config.as_deref(), player, flags)?;
			auth(player).await
		}
		Command::Config { config, player } => {
			let player = layer(config.as_deref(), player, flags)?;
			print!("{}", toml::to_string_pretty(&player)?);
			Ok(())
		}
	}
}

/// Load the TOML file if any, then re-apply the command-line flags on top.
fn layer(path: Option<&Path>, flags_only: PlayerConfig, flags: Option<&ArgMatches>) -> anyhow::Result<PlayerConfig> {
	let (Some(path), Some(flags)) = (path, flags) else {
		return Ok(flags_only);
	};

	let contents = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
	let mut config: PlayerConfig =
		toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))?;

	config
		.update_from_arg_matches(flags)
		.context("failed to apply command-line flags")?;

	tracing::debug!(path = %path.display(), "loaded config file");
	Ok(config)
}
