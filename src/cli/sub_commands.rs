use clap::Subcommand;

use crate::cli::{
	check_args::CheckArgs,
	scan_args::ScanArgs,
	show_args::ShowArgs,
};

#[derive(Subcommand, Clone)]
pub enum SubCommands
{
	/// Print the resolved path table or a single entry.
	Show(ShowArgs),
	/// Report which build tools are present on disk.
	Check(CheckArgs),
	/// List the files dependency detection would pick up.
	Scan(ScanArgs),
}
