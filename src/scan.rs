use std::{
	ffi::OsStr,
	path::{
		Path,
		PathBuf,
	},
};

use anyhow::anyhow;
use walkdir::WalkDir;

use crate::error::XtkPathsError::ScanDirectoryMissing;

/// True when `name` is exactly one of the excluded file or directory names.
pub fn is_excluded<S: AsRef<str>>(
	name: &OsStr,
	excludes: &[S],
) -> bool
{
	excludes.iter().any(|exclude| name == OsStr::new(exclude.as_ref()))
}

/// Recursively lists files below `dir` the way dependency detection sees them.
///
/// Excluded names are skipped at any depth and excluded directories are not entered.
/// Symbolic links are not followed into directories.
/// With a non-empty `extensions` filter only files carrying one of them are kept.
pub fn collect_sources<S: AsRef<str>>(
	dir: &Path,
	excludes: &[S],
	extensions: &[String],
) -> anyhow::Result<Vec<PathBuf>>
{
	if !dir.is_dir() {
		return Err(anyhow!(ScanDirectoryMissing(dir.to_path_buf())));
	}

	let mut sources = Vec::new();
	let walker = WalkDir::new(dir)
		.min_depth(1)
		.follow_links(false)
		.into_iter()
		.filter_entry(|entry| !is_excluded(entry.file_name(), excludes));

	for entry in walker {
		let entry = entry?;
		// Links to files count as files. Linked directories are not entered.
		let is_file = match entry.file_type() {
			file_type if file_type.is_symlink() => entry.path().is_file(),
			file_type => file_type.is_file(),
		};

		if is_file && has_extension(entry.path(), extensions) {
			sources.push(entry.into_path());
		}
	}

	sources.sort();
	Ok(sources)
}

fn has_extension(
	path: &Path,
	extensions: &[String],
) -> bool
{
	if extensions.is_empty() {
		return true;
	}

	match path.extension().and_then(OsStr::to_str) {
		Some(extension) => extensions
			.iter()
			.any(|wanted| wanted.trim_start_matches('.') == extension),
		None => false,
	}
}
