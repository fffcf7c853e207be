use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum XtkPathsError
{
	#[error("Could not read config file {}!", .0.display())]
	ConfigUnreadable(PathBuf, #[source] std::io::Error),

	#[error("Config file {} is not valid TOML!", .0.display())]
	ConfigMalformed(PathBuf, #[source] toml::de::Error),

	#[error("Application name must not be empty!")]
	EmptyApplicationName,

	#[error("Configured root {} is not an absolute path!", .0.display())]
	RelativeRoot(PathBuf),

	#[error("Directory {} does not exist!", .0.display())]
	ScanDirectoryMissing(PathBuf),

	#[error("{0} entries not found!")]
	EntriesMissing(usize),
}
