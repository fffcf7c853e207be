use std::path::{
	Path,
	PathBuf,
};

use crate::paths::{
	table::{
		Kind,
		PathName,
	},
	BuildPaths,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolStatus
{
	pub name: PathName,
	pub path: PathBuf,
	pub expected: Kind,
	pub found: bool,
}

/// Looks every shipped entry up on disk. Build artifacts are not checked.
pub fn check(paths: &BuildPaths) -> Vec<ToolStatus>
{
	paths
		.iter()
		.filter(|(name, _)| !name.is_artifact())
		.map(|(name, path)| ToolStatus {
			name,
			path: path.to_path_buf(),
			expected: name.kind(),
			found: exists_as(path, name.kind()),
		})
		.collect()
}

fn exists_as(
	path: &Path,
	kind: Kind,
) -> bool
{
	match kind {
		Kind::File => path.is_file(),
		Kind::Directory => path.is_dir(),
	}
}

#[cfg(test)]
mod tests
{
	use std::fs;

	use super::*;
	use crate::paths::table::DEFAULT_APPLICATION;

	#[test]
	fn empty_root_reports_everything_but_itself_missing() -> anyhow::Result<()>
	{
		let dir = tempfile::tempdir()?;
		let paths = BuildPaths::from_root(dir.path(), DEFAULT_APPLICATION);
		let statuses = check(&paths);

		assert!(statuses.iter().all(|status| status.name != PathName::OutputFile));
		for status in &statuses {
			let expected = matches!(status.name, PathName::Root | PathName::XtkDir);
			assert_eq!(status.found, expected, "{}", status.name);
		}
		Ok(())
	}

	#[test]
	fn finds_installed_tools() -> anyhow::Result<()>
	{
		let dir = tempfile::tempdir()?;
		let paths = BuildPaths::from_root(dir.path(), DEFAULT_APPLICATION);

		fs::create_dir_all(paths.compiler().parent().unwrap_or(dir.path()))?;
		fs::write(paths.compiler(), "")?;
		// A directory where a file is expected does not count.
		fs::create_dir_all(paths.linter())?;

		let statuses = check(&paths);
		let found = |name: PathName| {
			statuses
				.iter()
				.find(|status| status.name == name)
				.map(|status| status.found)
		};

		assert_eq!(found(PathName::Compiler), Some(true));
		assert_eq!(found(PathName::ClosureLibrary), Some(true));
		assert_eq!(found(PathName::LibDir), Some(true));
		assert_eq!(found(PathName::Linter), Some(false));
		assert_eq!(found(PathName::DepsWriter), Some(false));
		Ok(())
	}
}
