use clap::{
	Args,
	ValueEnum,
};

use crate::paths::table::PathName;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat
{
	Text,
	Json,
	Toml,
}

#[derive(Args, Clone)]
pub struct ShowArgs
{
	#[arg(help = "Entry to print, e.g. 'compiler' or 'output_file'. Prints the whole table if omitted.")]
	pub name: Option<PathName>,

	#[arg(long, short, value_enum, default_value_t = OutputFormat::Text, help = "Output format.")]
	pub format: OutputFormat,

	#[arg(long, short, help = "Print paths relative to the project root.")]
	pub relative: bool,
}
