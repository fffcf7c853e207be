use clap::Args;

#[derive(Args, Clone)]
pub struct ScanArgs
{
	#[arg(
		long = "extension",
		short = 'e',
		default_value = "js",
		help = "File extension to keep. Repeat for several. Pass '' to keep every file."
	)]
	pub extensions: Vec<String>,
}
