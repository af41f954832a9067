use anyhow::Context;
use framecast::layout::{self, Rotate, Size, Sizing};

#[derive(clap::Args, Clone)]
pub struct FitArgs {
	/// The intrinsic size of the video, as WIDTHxHEIGHT.
	#[arg(long)]
	pub video: Size,

	/// The size of the containing frame, as WIDTHxHEIGHT.
	#[arg(long)]
	pub container: Size,

	#[arg(long, value_enum, default_value_t)]
	pub sizing: Sizing,

	#[arg(long, value_enum, default_value_t)]
	pub rotate: Rotate,

	/// Print the placement as JSON instead of CSS.
	#[arg(long)]
	pub json: bool,
}

pub fn fit(args: FitArgs) -> anyhow::Result<()> {
	let placement = layout::fit(args.video, args.container, args.sizing, args.rotate)
		.with_context(|| format!("cannot fit {} into {}", args.video, args.container))?;

	tracing::debug!(dominant = ?placement.dominant, "computed placement");

	if args.json {
		println!("{}", serde_json::to_string_pretty(&placement)?);
	} else {
		println!("{placement}");
	}

	Ok(())
}
