use std::io::{
	self,
	Write,
};

use clap::Parser;
use xtkpaths::{
	cli::{
		sub_commands::SubCommands,
		Cli,
	},
	commands,
	config::Config,
	ui::{
		status::Status,
		UI,
	},
};

fn run(
	cli: &Cli,
	ui: &UI,
) -> anyhow::Result<()>
{
	let config = match &cli.config {
		Some(path) => Config::load(path)?,
		None => Config::default(),
	};
	let paths = config.resolve_invocation(cli.script.as_deref())?;

	let stdout = io::stdout();
	let mut out = stdout.lock();

	match &cli.command {
		SubCommands::Show(args) => commands::show(&paths, args, &mut out)?,
		SubCommands::Check(args) => commands::check(&paths, args, ui, &mut out)?,
		SubCommands::Scan(args) => commands::scan(&paths, args, ui, &mut out)?,
	}

	out.flush()?;
	Ok(())
}

fn main()
{
	let cli = Cli::parse();
	let ui = UI::new(cli.quiet);

	if let Err(err) = run(&cli, &ui) {
		// Printed directly so --quiet does not hide it.
		eprintln!("{}", Status::Error.format(format!("{:#}", err)));
		std::process::exit(1);
	}
}
