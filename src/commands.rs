use std::{
	collections::BTreeMap,
	io::Write,
	path::{
		Path,
		PathBuf,
	},
};

use anyhow::anyhow;
use pathdiff::diff_paths;
use serde::Serialize;

use crate::{
	check::check as check_paths,
	cli::{
		check_args::CheckArgs,
		scan_args::ScanArgs,
		show_args::{
			OutputFormat,
			ShowArgs,
		},
	},
	error::XtkPathsError::EntriesMissing,
	paths::{
		table::PathName,
		BuildPaths,
	},
	scan::collect_sources,
	ui::{
		status::Status,
		UI,
	},
};

#[derive(Serialize)]
struct Table<'a>
{
	application: &'a str,
	excludes: &'a [String],
	paths: BTreeMap<PathName, PathBuf>,
}

fn display_path(
	path: &Path,
	root: &Path,
	relative: bool,
) -> PathBuf
{
	if !relative {
		return path.to_path_buf();
	}

	match diff_paths(path, root) {
		Some(diff) if diff.as_os_str().is_empty() => PathBuf::from("."),
		Some(diff) => diff,
		None => path.to_path_buf(),
	}
}

/// `xtkpaths show`
pub fn show(
	paths: &BuildPaths,
	args: &ShowArgs,
	out: &mut impl Write,
) -> anyhow::Result<()>
{
	let entries: BTreeMap<PathName, PathBuf> = paths
		.iter()
		.filter(|(name, _)| args.name.map_or(true, |wanted| wanted == *name))
		.map(|(name, path)| (name, display_path(path, paths.root(), args.relative)))
		.collect();

	match (args.name, args.format) {
		(Some(_), OutputFormat::Text) => {
			for path in entries.values() {
				writeln!(out, "{}", path.display())?;
			}
		}

		(Some(_), OutputFormat::Json) => {
			writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
		}

		(Some(_), OutputFormat::Toml) => {
			write!(out, "{}", toml::to_string(&entries)?)?;
		}

		(None, OutputFormat::Text) => {
			let width = entries
				.keys()
				.map(|name| name.to_string().len())
				.max()
				.unwrap_or_default();

			for (name, path) in &entries {
				writeln!(out, "{:width$}  {}", name.to_string(), path.display(), width = width)?;
			}
			writeln!(out, "{:width$}  {}", "excludes", paths.excludes().join(", "), width = width)?;
		}

		(None, format) => {
			let table = Table {
				application: paths.application(),
				excludes: paths.excludes(),
				paths: entries,
			};

			match format {
				OutputFormat::Toml => write!(out, "{}", toml::to_string(&table)?)?,
				_ => writeln!(out, "{}", serde_json::to_string_pretty(&table)?)?,
			}
		}
	}

	Ok(())
}

/// `xtkpaths check`. Fails when anything shipped with the project is missing.
pub fn check(
	paths: &BuildPaths,
	args: &CheckArgs,
	ui: &UI,
	out: &mut impl Write,
) -> anyhow::Result<()>
{
	let statuses = check_paths(paths);
	let mut missing = 0;

	for status in &statuses {
		if status.found {
			if !args.missing {
				writeln!(out, "found    {}  {}", status.name, status.path.display())?;
			}

			let resolved = dunce::canonicalize(&status.path).unwrap_or_else(|_| status.path.clone());
			if resolved != status.path {
				ui.println(
					format!("{} resolves to {}", status.name, resolved.display()),
					Status::Info,
				);
			}
		} else {
			missing += 1;
			writeln!(out, "missing  {}  {}", status.name, status.path.display())?;
		}
	}

	if missing > 0 {
		ui.println(
			format!("{} of {} entries missing below {}", missing, statuses.len(), paths.root().display()),
			Status::Error,
		);
		Err(anyhow!(EntriesMissing(missing)))
	} else {
		ui.println(
			format!("All {} entries present.", statuses.len()),
			Status::Success,
		);
		Ok(())
	}
}

/// `xtkpaths scan`
pub fn scan(
	paths: &BuildPaths,
	args: &ScanArgs,
	ui: &UI,
	out: &mut impl Write,
) -> anyhow::Result<()>
{
	let extensions: Vec<String> = args
		.extensions
		.iter()
		.filter(|extension| !extension.is_empty())
		.cloned()
		.collect();

	let spinner = ui.create_spinner(format!("Scanning {}...", paths.xtk_dir().display()));
	let result = collect_sources(paths.xtk_dir(), paths.excludes(), &extensions);
	spinner.finish_and_clear();

	let sources = result?;
	for source in &sources {
		writeln!(out, "{}", source.display())?;
	}

	ui.println(
		format!(
			"Found {} file(s) in {}ms.",
			sources.len(),
			spinner.elapsed().as_millis()
		),
		Status::Info,
	);
	Ok(())
}
