use clap::Args;

#[derive(Args, Clone)]
pub struct CheckArgs
{
	#[arg(long, help = "Only report missing entries.")]
	pub missing: bool,
}
