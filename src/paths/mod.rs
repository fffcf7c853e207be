pub mod normalize;
pub mod table;

use std::{
	collections::BTreeMap,
	path::{
		Path,
		PathBuf,
	},
};

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::paths::{
	normalize::{
		absolutize,
		normalize,
	},
	table::{
		Derivation,
		PathName,
		Segment,
		DEPENDENCY_EXCLUDES,
		OUTPUT_SUFFIX,
	},
};

/// Resolved build paths. Built once, then handed to whatever needs to locate a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildPaths
{
	application: String,
	excludes: Vec<String>,
	paths: BTreeMap<PathName, PathBuf>,
}

impl BuildPaths
{
	/// Derives every path from the location of the invoking program.
	///
	/// A relative `script` is taken relative to `cwd`. Nothing touches the filesystem.
	pub fn from_script(
		script: &Path,
		cwd: &Path,
		application: &str,
	) -> Self
	{
		let script = absolutize(script, cwd);
		let seed = match script.parent() {
			Some(parent) => parent.to_path_buf(),
			None => script.clone(),
		};

		Self::from_seed(seed, application)
	}

	/// Uses `root` as the project root directly. The utilities directory becomes `root/utils`.
	pub fn from_root(
		root: &Path,
		application: &str,
	) -> Self
	{
		Self::from_seed(normalize(&root.join("utils")), application)
	}

	/// Seeds the table from `argv[0]` and the current working directory.
	pub fn from_invocation(application: &str) -> anyhow::Result<Self>
	{
		let cwd = std::env::current_dir()?;
		let program = std::env::args_os().next().map(PathBuf::from).unwrap_or_default();

		Self::from_program(&program, &cwd, std::env::current_exe, application)
	}

	/// Seeds the table from the path a program was started as.
	///
	/// A bare name was looked up through `PATH`, so `current_exe` locates it instead. It is
	/// only called in that case and its result is not canonicalized. An empty `program`
	/// means the program lives in `cwd`.
	pub fn from_program<F>(
		program: &Path,
		cwd: &Path,
		current_exe: F,
		application: &str,
	) -> anyhow::Result<Self>
	where
		F: FnOnce() -> std::io::Result<PathBuf>,
	{
		if program.as_os_str().is_empty() {
			return Ok(Self::from_seed(normalize(cwd), application));
		}

		if program.parent() == Some(Path::new("")) {
			return Ok(Self::from_script(&current_exe()?, cwd, application));
		}

		Ok(Self::from_script(program, cwd, application))
	}

	fn from_seed(
		seed: PathBuf,
		application: &str,
	) -> Self
	{
		let paths = PathName::iter()
			.map(|name| (name, Self::derive(name, &seed, application)))
			.collect();

		BuildPaths {
			application: application.to_string(),
			excludes: DEPENDENCY_EXCLUDES.iter().map(|name| name.to_string()).collect(),
			paths,
		}
	}

	fn derive(
		name: PathName,
		seed: &Path,
		application: &str,
	) -> PathBuf
	{
		match name.derivation() {
			Derivation::Seed => normalize(seed),

			Derivation::Child(base, segments) => {
				let mut path = Self::derive(base, seed, application);
				for segment in segments {
					match segment {
						Segment::Literal(literal) => path.push(literal),
						Segment::Application => path.push(application),
						Segment::Artifact => path.push(format!("{}{}", application, OUTPUT_SUFFIX)),
					}
				}
				normalize(&path)
			}
		}
	}

	pub fn get(
		&self,
		name: PathName,
	) -> &Path
	{
		// Every PathName is inserted in from_seed.
		&self.paths[&name]
	}

	pub fn iter(&self) -> impl Iterator<Item = (PathName, &Path)>
	{
		self.paths.iter().map(|(name, path)| (*name, path.as_path()))
	}

	pub fn application(&self) -> &str { &self.application }

	pub fn excludes(&self) -> &[String] { &self.excludes }

	pub fn utils_dir(&self) -> &Path { self.get(PathName::UtilsDir) }

	pub fn root(&self) -> &Path { self.get(PathName::Root) }

	pub fn xtk_dir(&self) -> &Path { self.get(PathName::XtkDir) }

	pub fn lib_dir(&self) -> &Path { self.get(PathName::LibDir) }

	pub fn app_dir(&self) -> &Path { self.get(PathName::AppDir) }

	pub fn closure_library(&self) -> &Path { self.get(PathName::ClosureLibrary) }

	pub fn closure_builder(&self) -> &Path { self.get(PathName::ClosureBuilder) }

	pub fn compiler(&self) -> &Path { self.get(PathName::Compiler) }

	pub fn deps_writer(&self) -> &Path { self.get(PathName::DepsWriter) }

	pub fn linter(&self) -> &Path { self.get(PathName::Linter) }

	pub fn jsdoc_dir(&self) -> &Path { self.get(PathName::JsdocDir) }

	pub fn output_file(&self) -> &Path { self.get(PathName::OutputFile) }
}
