//! File names and locations the Orion platform expects, plus the archive
//! exclusion rules.

use std::path::{Path, PathBuf};

use super::paths::{NOTEBOOK_EXTENSION, normalize};

/// Dependency manifest generated at the project root.
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Task descriptor generated at the project root.
pub const DESCRIPTOR_FILE: &str = "params.json";

/// Directory, sibling to the project root, receiving task archives.
pub const TASK_FILES_DIR: &str = "NBAI_task_files";

/// Suffix appended to the entry stem to name the archive.
pub const ARCHIVE_SUFFIX: &str = "_orion.zip";

/// Bytecode cache directories never shipped.
pub const CACHE_DIRS: &[&str] = &["__pycache__"];

/// Virtual-environment directories never shipped.
pub const VENV_DIRS: &[&str] = &["venv"];

pub fn requirements_path(project_root: &Path) -> PathBuf {
    project_root.join(REQUIREMENTS_FILE)
}

pub fn descriptor_path(project_root: &Path) -> PathBuf {
    project_root.join(DESCRIPTOR_FILE)
}

/// `<project_root>/../NBAI_task_files`, lexically normalized.
pub fn task_files_dir(project_root: &Path) -> PathBuf {
    normalize(&project_root.join("..").join(TASK_FILES_DIR))
}

/// `<task files dir>/<entry stem>_orion.zip`.
pub fn archive_path(project_root: &Path, entry_file: &Path) -> PathBuf {
    let stem = entry_file.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    task_files_dir(project_root).join(format!("{stem}{ARCHIVE_SUFFIX}"))
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Directories whose subtree is neither walked nor archived.
pub fn is_pruned_dir(name: &str) -> bool {
    is_hidden(name) || CACHE_DIRS.contains(&name) || VENV_DIRS.contains(&name)
}

/// Files left out of the archive.
pub fn is_excluded_file(name: &str) -> bool {
    is_hidden(name) || Path::new(name).extension().is_some_and(|ext| ext == NOTEBOOK_EXTENSION)
}
