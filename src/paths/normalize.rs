use std::path::{
	Component,
	Path,
	PathBuf,
};

/// Lexically normalizes `path`. No filesystem access, symlinks are not resolved.
///
/// `.` components are dropped, `..` removes the preceding normal component, `..` directly
/// below the root is dropped and leading `..` of a relative path is kept. An empty result
/// becomes `.`.
pub fn normalize(path: &Path) -> PathBuf
{
	let mut components: Vec<Component> = Vec::new();

	for component in path.components() {
		match component {
			Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
				components.push(component)
			}

			Component::CurDir => (),

			Component::ParentDir => match components.last() {
				Some(Component::Normal(_)) => {
					components.pop();
				}

				Some(Component::RootDir) | Some(Component::Prefix(_)) => (),

				_ => components.push(component),
			},
		}
	}

	if components.is_empty() {
		PathBuf::from(".")
	} else {
		components.iter().collect()
	}
}

/// Resolves a possibly relative `path` against `cwd` and normalizes the result.
pub fn absolutize(
	path: &Path,
	cwd: &Path,
) -> PathBuf
{
	if path.is_absolute() {
		normalize(path)
	} else {
		normalize(&cwd.join(path))
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn collapses_dots_and_separators()
	{
		assert_eq!(normalize(Path::new("/a//b/./c/")), PathBuf::from("/a/b/c"));
		assert_eq!(normalize(Path::new("/a/b/../c")), PathBuf::from("/a/c"));
		assert_eq!(normalize(Path::new("/a/b/c/../../")), PathBuf::from("/a"));
	}

	#[test]
	fn parent_of_root_is_root()
	{
		assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
		assert_eq!(normalize(Path::new("/../../x")), PathBuf::from("/x"));
	}

	#[test]
	fn relative_paths_keep_leading_parents()
	{
		assert_eq!(normalize(Path::new("../a/../b")), PathBuf::from("../b"));
		assert_eq!(normalize(Path::new("a/..")), PathBuf::from("."));
		assert_eq!(normalize(Path::new("")), PathBuf::from("."));
	}

	#[test]
	fn normalization_is_idempotent()
	{
		for raw in ["/home/u/proj/utils/..", "a/./b/../../..", "/x/y/../../..", "./c//d"] {
			let once = normalize(Path::new(raw));
			assert_eq!(normalize(&once), once, "{}", raw);
		}
	}

	#[test]
	fn absolutize_joins_relative_paths_onto_cwd()
	{
		let cwd = Path::new("/work/tree");

		assert_eq!(
			absolutize(Path::new("utils/build.py"), cwd),
			PathBuf::from("/work/tree/utils/build.py")
		);
		assert_eq!(absolutize(Path::new("../x"), cwd), PathBuf::from("/work/x"));
		assert_eq!(absolutize(Path::new("/abs/./y"), cwd), PathBuf::from("/abs/y"));
	}
}
