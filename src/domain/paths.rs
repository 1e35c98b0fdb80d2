//! Lexical path arithmetic shared by the validation and packaging stages.

use std::ffi::OsStr;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Extension of Jupyter notebook files (without the dot).
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// Extension of Python script files (without the dot).
pub const SCRIPT_EXTENSION: &str = "py";

/// Collapse `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root, matching POSIX path resolution.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let at_root = out.parent().is_none() && out.has_root();
                if at_root {
                    continue;
                }
                match out.components().next_back() {
                    Some(Component::Normal(_)) => {
                        out.pop();
                    }
                    _ => out.push(".."),
                }
            }
            Component::Normal(name) => out.push(name),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Make `path` absolute against the current directory and normalize it.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    Ok(normalize(&std::path::absolute(path)?))
}

/// True iff `candidate` lies strictly below `base`.
///
/// Both sides are made absolute and normalized first. Equality does not count
/// as inside. Never fails: unresolvable paths are reported as not inside.
pub fn is_inside(candidate: &Path, base: &Path) -> bool {
    let (Ok(candidate), Ok(base)) = (absolutize(candidate), absolutize(base)) else {
        return false;
    };
    candidate != base && candidate.starts_with(&base)
}

/// Raw prefix comparison of the absolute, normalized forms.
///
/// Unlike [`is_inside`], this is not bound to a separator: equality passes and
/// `/proj2/x` counts as under `/proj`.
pub fn has_path_prefix(candidate: &Path, root: &Path) -> bool {
    let (Ok(candidate), Ok(root)) = (absolutize(candidate), absolutize(root)) else {
        return false;
    };
    candidate.as_os_str().as_encoded_bytes().starts_with(root.as_os_str().as_encoded_bytes())
}

/// True when `path` has the notebook extension.
pub fn is_notebook(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(NOTEBOOK_EXTENSION))
}

/// The `.py` script a notebook converts to; other paths are returned unchanged.
pub fn notebook_companion(path: &Path) -> PathBuf {
    if is_notebook(path) { path.with_extension(SCRIPT_EXTENSION) } else { path.to_path_buf() }
}

/// The path with whatever extension it has replaced by `.py`.
pub fn as_script(path: &Path) -> PathBuf {
    path.with_extension(SCRIPT_EXTENSION)
}

/// Lexical relative path from `base` to `path`, both taken as absolute.
///
/// Produces `..` segments when `path` is not below `base`; returns `.` for
/// equal paths.
pub fn relative_to(path: &Path, base: &Path) -> io::Result<PathBuf> {
    let path = absolutize(path)?;
    let base = absolutize(base)?;

    let path_parts: Vec<Component<'_>> = path.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();
    let shared = path_parts.iter().zip(&base_parts).take_while(|(a, b)| a == b).count();

    let mut relative = PathBuf::new();
    for _ in shared..base_parts.len() {
        relative.push("..");
    }
    for part in &path_parts[shared..] {
        relative.push(part.as_os_str());
    }
    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    Ok(relative)
}

/// True when `path` resolves (through symlinks) to the filesystem root.
pub fn is_filesystem_root(path: &Path) -> bool {
    match path.canonicalize() {
        Ok(real) => real.parent().is_none(),
        Err(_) => false,
    }
}
