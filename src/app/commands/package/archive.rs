//! Deflate-compressed task archive of the project tree.

use std::fmt::Display;
use std::fs::{self, File};
use std::io;
use std::path::{Component, Path};

use walkdir::{DirEntry, WalkDir};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::domain::AppError;
use crate::domain::layout::{is_excluded_file, is_pruned_dir};
use crate::domain::paths::absolutize;

fn archive_error(err: impl Display) -> AppError {
    AppError::ArchiveFailed(err.to_string())
}

fn entry_name(entry: &DirEntry) -> &str {
    entry.file_name().to_str().unwrap_or_default()
}

/// Archive member name: `/`-separated path relative to the source root.
fn member_name(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Zip `source` into `destination`.
///
/// Hidden, cache and virtual-environment directories are pruned; hidden files
/// and notebooks are skipped. Entries are visited in name order so the member
/// list is stable. Returns the number of members written.
pub fn archive(source: &Path, destination: &Path) -> Result<usize, AppError> {
    let base = absolutize(source).map_err(archive_error)?;
    let destination_abs = absolutize(destination).map_err(archive_error)?;

    let file = File::create(destination).map_err(archive_error)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let walker = WalkDir::new(&base)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && is_pruned_dir(entry_name(e))));

    let mut written = 0;
    for entry in walker {
        let entry = entry.map_err(archive_error)?;
        let path = entry.path();
        let relative = path.strip_prefix(&base).map_err(archive_error)?;
        let name = member_name(relative);

        if entry.file_type().is_dir() {
            zip.add_directory(name, options).map_err(archive_error)?;
            written += 1;
            continue;
        }
        if !path.is_file() || is_excluded_file(entry_name(&entry)) || path == destination_abs {
            continue;
        }

        zip.start_file(name, options).map_err(archive_error)?;
        let mut input = File::open(path).map_err(archive_error)?;
        io::copy(&mut input, &mut zip).map_err(archive_error)?;
        written += 1;
    }

    zip.finish().map_err(archive_error)?;
    tracing::debug!(members = written, archive = %destination.display(), "archive written");
    Ok(written)
}

/// Make sure the directory that will hold `destination` exists.
pub fn prepare_destination(destination: &Path) -> Result<(), AppError> {
    match destination.parent() {
        Some(parent) => fs::create_dir_all(parent).map_err(archive_error),
        None => Ok(()),
    }
}
