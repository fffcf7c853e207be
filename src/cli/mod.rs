pub mod check_args;
pub mod scan_args;
pub mod show_args;
pub mod sub_commands;

use std::path::PathBuf;

use clap::Parser;

use crate::cli::sub_commands::SubCommands;

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli
{
	#[command(subcommand)]
	pub command: SubCommands,

	#[arg(long, short, global = true, help = "TOML file overriding the application name or project root.")]
	pub config: Option<PathBuf>,

	#[arg(
		long,
		short,
		global = true,
		help = "Resolve paths as if invoked from this script instead of the running executable."
	)]
	pub script: Option<PathBuf>,

	#[arg(long, short, global = true, help = "Silence status output. Requested data is still printed.")]
	pub quiet: bool,
}
