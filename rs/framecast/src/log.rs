use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Logging configuration.
#[derive(Clone, Debug, clap::Args, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
#[non_exhaustive]
pub struct Log {
	/// The default log level, used when `RUST_LOG` doesn't say otherwise.
	#[arg(id = "log-level", long = "log-level", default_value = "info", env = "FRAMECAST_LOG_LEVEL")]
	pub level: String,
}

impl Default for Log {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
		}
	}
}

impl Log {
	pub fn level(&self) -> LevelFilter {
		self.level.parse().unwrap_or(LevelFilter::INFO)
	}

	/// Install a global subscriber writing to stderr.
	pub fn init(&self) {
		let filter = EnvFilter::builder()
			.with_default_directive(self.level().into())
			.from_env_lossy();

		let fmt = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

		// Ignore the error when a subscriber was already installed (tests, embedding hosts).
		let _ = tracing_subscriber::registry().with(filter).with(fmt).try_init();
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn level() {
		assert_eq!(Log::default().level(), LevelFilter::INFO);

		let log = Log {
			level: "debug".to_string(),
		};
		assert_eq!(log.level(), LevelFilter::DEBUG);

		let log = Log {
			level: "chatty".to_string(),
		};
		assert_eq!(log.level(), LevelFilter::INFO);
	}
}
