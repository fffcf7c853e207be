use serde::Serialize;
use strum_macros::{
	Display,
	EnumIter,
	EnumString,
	IntoStaticStr,
};

/// Application built when no other identifier is configured.
pub const DEFAULT_APPLICATION: &str = "sampleApp";

/// Appended to the application identifier to name the compiled bundle.
pub const OUTPUT_SUFFIX: &str = "-build.js";

/// Names skipped when scanning the XTK directory for dependencies.
pub const DEPENDENCY_EXCLUDES: [&str; 4] = [".DS_Store", "xtk_tests.html", "xtk-deps.js", "lib"];

#[derive(
	Debug,
	Copy,
	Clone,
	Hash,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	EnumIter,
	EnumString,
	Display,
	IntoStaticStr,
	Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PathName
{
	UtilsDir,
	Root,
	XtkDir,
	LibDir,
	AppDir,
	ClosureLibrary,
	ClosureBuilder,
	Compiler,
	DepsWriter,
	Linter,
	JsdocDir,
	OutputFile,
}

/// One component appended during a derivation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Segment
{
	Literal(&'static str),
	/// The application identifier.
	Application,
	/// The application identifier followed by [`OUTPUT_SUFFIX`].
	Artifact,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Derivation
{
	/// Directory of the invoking program.
	Seed,
	/// `segments` joined onto an earlier entry.
	Child(PathName, &'static [Segment]),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Kind
{
	File,
	Directory,
}

use Segment::{
	Application,
	Artifact,
	Literal,
};

impl PathName
{
	pub fn derivation(self) -> Derivation
	{
		match self {
			PathName::UtilsDir => Derivation::Seed,
			PathName::Root => Derivation::Child(PathName::UtilsDir, &[Literal("..")]),
			PathName::XtkDir => Derivation::Child(PathName::Root, &[]),
			PathName::LibDir => Derivation::Child(PathName::XtkDir, &[Literal("lib")]),
			PathName::AppDir => Derivation::Child(PathName::Root, &[Application]),
			PathName::ClosureLibrary => {
				Derivation::Child(PathName::LibDir, &[Literal("closure-library")])
			}
			PathName::ClosureBuilder => Derivation::Child(
				PathName::ClosureLibrary,
				&[
					Literal("closure"),
					Literal("bin"),
					Literal("build"),
					Literal("closurebuilder.py"),
				],
			),
			PathName::Compiler => Derivation::Child(
				PathName::ClosureLibrary,
				&[Literal("compiler-latest"), Literal("compiler.jar")],
			),
			PathName::DepsWriter => Derivation::Child(
				PathName::ClosureLibrary,
				&[
					Literal("closure"),
					Literal("bin"),
					Literal("build"),
					Literal("depswriter.py"),
				],
			),
			PathName::Linter => Derivation::Child(
				PathName::ClosureLibrary,
				&[Literal("linter-latest"), Literal("gjslint.py")],
			),
			PathName::JsdocDir => Derivation::Child(PathName::LibDir, &[Literal("jsdoc-toolkit")]),
			PathName::OutputFile => Derivation::Child(PathName::AppDir, &[Artifact]),
		}
	}

	/// What the entry is expected to be on disk once the project is checked out.
	pub fn kind(self) -> Kind
	{
		match self {
			PathName::ClosureBuilder
			| PathName::Compiler
			| PathName::DepsWriter
			| PathName::Linter
			| PathName::OutputFile => Kind::File,
			_ => Kind::Directory,
		}
	}

	/// Produced by the build rather than shipped with the project.
	pub fn is_artifact(self) -> bool { self == PathName::OutputFile }
}
