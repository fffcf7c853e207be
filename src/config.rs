use std::{
	fs,
	path::{
		Path,
		PathBuf,
	},
};

use serde::Deserialize;

use crate::{
	error::XtkPathsError,
	paths::{
		table::DEFAULT_APPLICATION,
		BuildPaths,
	},
};

/// Optional `xtkpaths.toml` overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config
{
	/// Application identifier, names the app directory and its bundle.
	pub application: Option<String>,

	/// Absolute project root. Replaces the root derived from the program location.
	pub root: Option<PathBuf>,
}

impl Config
{
	pub fn load(path: &Path) -> Result<Self, XtkPathsError>
	{
		let content = fs::read_to_string(path)
			.map_err(|err| XtkPathsError::ConfigUnreadable(path.to_path_buf(), err))?;

		Self::parse(&content, path)
	}

	fn parse(
		content: &str,
		origin: &Path,
	) -> Result<Self, XtkPathsError>
	{
		let config: Config = toml::from_str(content)
			.map_err(|err| XtkPathsError::ConfigMalformed(origin.to_path_buf(), err))?;

		if config.application.as_deref().is_some_and(|name| name.trim().is_empty()) {
			return Err(XtkPathsError::EmptyApplicationName);
		}

		match &config.root {
			Some(root) if !root.is_absolute() => Err(XtkPathsError::RelativeRoot(root.clone())),
			_ => Ok(config),
		}
	}

	pub fn application(&self) -> &str { self.application.as_deref().unwrap_or(DEFAULT_APPLICATION) }

	/// Builds the path table. `script` seeds it unless a root is configured.
	pub fn resolve(
		&self,
		script: &Path,
		cwd: &Path,
	) -> BuildPaths
	{
		match &self.root {
			Some(root) => BuildPaths::from_root(root, self.application()),
			None => BuildPaths::from_script(script, cwd, self.application()),
		}
	}

	/// Like [`Config::resolve`], seeded from `script` or else from `argv[0]`.
	pub fn resolve_invocation(
		&self,
		script: Option<&Path>,
	) -> anyhow::Result<BuildPaths>
	{
		match (&self.root, script) {
			(Some(root), _) => Ok(BuildPaths::from_root(root, self.application())),
			(None, Some(script)) => Ok(self.resolve(script, &std::env::current_dir()?)),
			(None, None) => BuildPaths::from_invocation(self.application()),
		}
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn empty_file_means_defaults() -> anyhow::Result<()>
	{
		let config = Config::parse("", Path::new("xtkpaths.toml"))?;

		assert_eq!(config, Config::default());
		assert_eq!(config.application(), "sampleApp");
		Ok(())
	}

	#[test]
	fn overrides_application_and_root() -> anyhow::Result<()>
	{
		let config = Config::parse(
			"application = \"viewer\"\nroot = \"/srv/xtk\"\n",
			Path::new("xtkpaths.toml"),
		)?;
		let paths = config.resolve(Path::new("/ignored/utils/x.py"), Path::new("/"));

		assert_eq!(paths.root(), Path::new("/srv/xtk"));
		assert_eq!(paths.output_file(), Path::new("/srv/xtk/viewer/viewer-build.js"));
		Ok(())
	}

	#[test]
	fn without_root_the_script_seeds_the_table()
	{
		let paths = Config::default().resolve(Path::new("utils/paths.py"), Path::new("/home/u/proj"));

		assert_eq!(paths.root(), Path::new("/home/u/proj"));
	}

	#[test]
	fn rejects_bad_values()
	{
		let origin = Path::new("xtkpaths.toml");

		assert!(matches!(
			Config::parse("application = \"  \"", origin),
			Err(XtkPathsError::EmptyApplicationName)
		));
		assert!(matches!(
			Config::parse("root = \"relative/dir\"", origin),
			Err(XtkPathsError::RelativeRoot(_))
		));
		assert!(matches!(
			Config::parse("application = ", origin),
			Err(XtkPathsError::ConfigMalformed(..))
		));
		assert!(matches!(
			Config::parse("output = \"x\"", origin),
			Err(XtkPathsError::ConfigMalformed(..))
		));
	}

	#[test]
	fn load_reads_from_disk() -> anyhow::Result<()>
	{
		let dir = tempfile::tempdir()?;
		let file = dir.path().join("xtkpaths.toml");
		fs::write(&file, "application = \"demo\"")?;

		assert_eq!(Config::load(&file)?.application(), "demo");
		assert!(matches!(
			Config::load(&dir.path().join("missing.toml")),
			Err(XtkPathsError::ConfigUnreadable(..))
		));
		Ok(())
	}
}
