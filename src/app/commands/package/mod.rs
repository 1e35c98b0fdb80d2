//! Packaging pipeline: validate, generate manifests, archive, clean up.
//!
//! Failures never escape [`execute`]; they are folded into the returned
//! [`RunReport`] and stop every later stage.

pub mod archive;
pub mod convert;
pub mod descriptor;
pub mod manifest;
pub mod validate;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::app::AppContext;
use crate::domain::layout::{archive_path, descriptor_path, requirements_path};
use crate::domain::paths::{absolutize, as_script};
use crate::domain::{AppError, PackageRequest, RunReport, Severity};
use crate::ports::{DependencyScanner, NotebookConverter, RunHistory, RunLogger};

pub use validate::ValidatedInput;

/// Validate inputs only (this still converts top-level notebooks).
pub fn validate_only<C, S, L, H>(ctx: &AppContext<C, S, L, H>, request: &PackageRequest) -> RunReport
where
    C: NotebookConverter,
    S: DependencyScanner,
    L: RunLogger,
    H: RunHistory,
{
    let mut report = RunReport::new(request.describe());
    if validate::validate(ctx, request, &mut report).is_err() {
        report.fail();
    }
    report
}

/// Run the whole pipeline for `request`.
pub fn execute<C, S, L, H>(ctx: &AppContext<C, S, L, H>, request: &PackageRequest) -> RunReport
where
    C: NotebookConverter,
    S: DependencyScanner,
    L: RunLogger,
    H: RunHistory,
{
    let mut report = RunReport::new(request.describe());

    let input = match validate::validate(ctx, request, &mut report) {
        Ok(input) => input,
        Err(_) => {
            report.fail();
            return report;
        }
    };

    let entry_script = match absolutize(&input.entry_file) {
        Ok(path) => as_script(&path),
        Err(e) => {
            ctx.record(&mut report, Severity::Error, &format!("Invalid arguments, {e}."));
            report.fail();
            return report;
        }
    };

    let archive = match build_task(ctx, &input, &entry_script, &mut report) {
        Ok(archive) => archive,
        Err(e) => {
            ctx.record(&mut report, Severity::Error, &e.to_string());
            report.fail();
            return report;
        }
    };
    report.set_archive(archive);

    clean_up(ctx, &input.project_root, &mut report);

    let entry = history_entry(&input, &entry_script, Local::now());
    if let Err(e) = ctx.history().append(&entry) {
        let message = format!("Writing run history to {} failed: {e}", ctx.history().location());
        ctx.record(&mut report, Severity::Error, &message);
    }

    report
}

/// Manifest, descriptor, then archive. Returns the archive path.
fn build_task<C, S, L, H>(
    ctx: &AppContext<C, S, L, H>,
    input: &ValidatedInput,
    entry_script: &Path,
    report: &mut RunReport,
) -> Result<PathBuf, AppError>
where
    C: NotebookConverter,
    S: DependencyScanner,
    L: RunLogger,
    H: RunHistory,
{
    let root = &input.project_root;

    manifest::build(ctx.scanner(), root)?;
    ctx.record(report, Severity::Info, "Generated 'requirements.txt' successfully!");

    descriptor::build(
        root,
        input.output_dir.as_deref(),
        entry_script,
        input.data_url.as_deref(),
        input.data_dir.as_deref(),
    )?;
    ctx.record(report, Severity::Info, "Generated 'params.json' successfully!");

    let destination = archive_path(root, entry_script);
    archive::prepare_destination(&destination)?;
    archive::archive(root, &destination)?;
    ctx.record(report, Severity::Info, "Zipped files successfully!");
    ctx.record(report, Severity::Info, "Files have been converted successfully!");
    ctx.record(
        report,
        Severity::Info,
        &format!("This task is saved in: {}.", destination.display()),
    );

    Ok(destination)
}

/// Remove the transient manifest and descriptor. Failures are reported, not fatal.
fn clean_up<C, S, L, H>(ctx: &AppContext<C, S, L, H>, project_root: &Path, report: &mut RunReport)
where
    C: NotebookConverter,
    S: DependencyScanner,
    L: RunLogger,
    H: RunHistory,
{
    for path in [descriptor_path(project_root), requirements_path(project_root)] {
        if let Err(e) = fs::remove_file(&path) {
            let err = AppError::CleanupFailed(format!("{}: {e}", path.display()));
            ctx.record(report, Severity::Error, &err.to_string());
        }
    }
}

/// One run-history line, timestamped to the minute.
pub fn history_entry(input: &ValidatedInput, entry_script: &Path, now: DateTime<Local>) -> String {
    format!(
        "DateTime={}, project root={}, convert file={}, output directory={} \n\n",
        now.format("%Y-%m-%dT%H:%M"),
        input.project_root.display(),
        entry_script.display(),
        input.output_dir.as_deref().map(|p| p.display().to_string()).unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeConverter, FakeScanner, MemoryHistory, MemoryLogger};
    use chrono::TimeZone;
    use std::fs::File;
    use tempfile::TempDir;
    use zip::ZipArchive;

    type TestContext = AppContext<FakeConverter, FakeScanner, MemoryLogger, MemoryHistory>;

    fn context(scanner: FakeScanner, history: MemoryHistory) -> TestContext {
        AppContext::new(FakeConverter::new(), scanner, MemoryLogger::new(), history)
    }

    /// `<tmp>/work/proj` so the task-files directory lands inside the tempdir.
    fn project() -> (TempDir, PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("work/proj");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("main.py"), "import numpy\n").unwrap();
        (tmp, root)
    }

    fn members(path: &Path) -> Vec<String> {
        let archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
        archive.file_names().map(str::to_string).collect()
    }

    #[test]
    fn end_to_end_produces_archive_and_cleans_up() {
        let (tmp, root) = project();
        let ctx = context(FakeScanner::new("numpy==1.18.1\n"), MemoryHistory::new());
        let request = PackageRequest::new(&root, root.join("main.py"), None, None, None);

        let report = execute(&ctx, &request);

        let expected = tmp.path().join("work/NBAI_task_files/main_orion.zip");
        assert!(report.succeeded(), "{}", report.render());
        assert_eq!(report.archive(), Some(expected.as_path()));
        assert!(report.status_text().contains("output directory is empty"));
        assert!(report.status_text().contains(&format!("This task is saved in: {}.", expected.display())));
        assert!(!root.join("requirements.txt").exists());
        assert!(!root.join("params.json").exists());

        let mut names = members(&expected);
        names.sort();
        assert_eq!(names, vec!["main.py", "params.json", "requirements.txt"]);
        assert_eq!(ctx.history().entries.lock().unwrap().len(), 1);
    }

    #[test]
    fn notebook_entry_is_packaged_as_its_script() {
        let (tmp, root) = project();
        fs::write(root.join("train.ipynb"), "{}").unwrap();
        let ctx = context(FakeScanner::new(""), MemoryHistory::new());
        let request = PackageRequest::new(
            &root,
            root.join("train.ipynb"),
            Some(root.join("out")),
            Some("https://example.com/mnist".into()),
            Some(tmp.path().join("data")),
        );

        let report = execute(&ctx, &request);

        let archive = tmp.path().join("work/NBAI_task_files/train_orion.zip");
        assert!(report.succeeded(), "{}", report.render());
        let mut zip = ZipArchive::new(File::open(&archive).unwrap()).unwrap();
        let descriptor: serde_json::Value = serde_json::from_reader(zip.by_name("params.json").unwrap()).unwrap();
        assert_eq!(descriptor["exec_file_name"], "train.py");
        assert_eq!(descriptor["output_path"], "out");
        assert_eq!(descriptor["data_path"], "../../data");
        assert_eq!(descriptor["data_uri"], "https://example.com/mnist");
        assert!(zip.by_name("train.py").is_ok());
        assert!(zip.by_name("train.ipynb").is_err());
    }

    #[test]
    fn entry_outside_project_produces_no_archive() {
        let (tmp, root) = project();
        let other = tmp.path().join("other");
        fs::create_dir_all(&other).unwrap();
        fs::write(other.join("main.py"), "").unwrap();
        let ctx = context(FakeScanner::new(""), MemoryHistory::new());
        let request = PackageRequest::new(&root, other.join("main.py"), None, None, None);

        let report = execute(&ctx, &request);

        assert!(!report.succeeded());
        assert!(report.error_text().contains("NOT inside the project root directory"));
        assert!(report.archive().is_none());
        assert!(!tmp.path().join("work/NBAI_task_files").exists());
        assert!(ctx.scanner().scanned.lock().unwrap().is_empty());
        assert!(ctx.history().entries.lock().unwrap().is_empty());
    }

    #[test]
    fn manifest_failure_stops_before_descriptor() {
        let (tmp, root) = project();
        let ctx = context(FakeScanner::failing(), MemoryHistory::new());
        let request = PackageRequest::new(&root, root.join("main.py"), None, None, None);

        let report = execute(&ctx, &request);

        assert!(!report.succeeded());
        assert!(report.render().contains("Generating 'requirements.txt' failed"));
        assert!(!root.join("params.json").exists());
        assert!(!tmp.path().join("work/NBAI_task_files").exists());
        assert_eq!(ctx.logger().messages(Severity::Error).len(), 1);
    }

    #[test]
    fn history_failure_does_not_fail_the_run() {
        let (_tmp, root) = project();
        let ctx = context(FakeScanner::new(""), MemoryHistory::read_only());
        let request = PackageRequest::new(&root, root.join("main.py"), None, None, None);

        let report = execute(&ctx, &request);

        assert!(report.succeeded());
        assert!(report.error_text().contains("Writing run history to <memory> failed"));
    }

    #[test]
    fn validate_only_leaves_no_generated_files() {
        let (tmp, root) = project();
        let ctx = context(FakeScanner::new(""), MemoryHistory::new());
        let request = PackageRequest::new(&root, root.join("main.py"), None, None, None);

        let report = validate_only(&ctx, &request);

        assert!(report.succeeded());
        assert!(ctx.scanner().scanned.lock().unwrap().is_empty());
        assert!(!tmp.path().join("work/NBAI_task_files").exists());
    }

    #[test]
    fn cleanup_failures_are_recorded_but_not_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = context(FakeScanner::new(""), MemoryHistory::new());
        let mut report = RunReport::default();

        clean_up(&ctx, tmp.path(), &mut report);

        assert!(report.succeeded());
        let failures: Vec<&str> = report.error_text().lines().collect();
        assert_eq!(failures.len(), 2);
        assert!(failures[0].starts_with("Removing files failed:"));
        assert!(failures[0].contains("params.json"));
        assert!(failures[1].contains("requirements.txt"));
        assert_eq!(ctx.logger().messages(Severity::Error).len(), 2);
    }

    #[test]
    fn cleanup_removals_are_independent() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("requirements.txt"), "numpy==1.18.1\n").unwrap();
        let ctx = context(FakeScanner::new(""), MemoryHistory::new());
        let mut report = RunReport::default();

        clean_up(&ctx, tmp.path(), &mut report);

        assert!(!tmp.path().join("requirements.txt").exists());
        assert_eq!(report.error_text().lines().count(), 1);
        assert!(report.error_text().contains("params.json"));
    }

    #[test]
    fn archive_failure_skips_cleanup_and_history() {
        let (tmp, root) = project();
        fs::write(tmp.path().join("work/NBAI_task_files"), "not a directory").unwrap();
        let ctx = context(FakeScanner::new("numpy==1.18.1\n"), MemoryHistory::new());
        let request = PackageRequest::new(&root, root.join("main.py"), None, None, None);

        let report = execute(&ctx, &request);

        assert!(!report.succeeded());
        assert!(report.error_text().contains("Zipping project folder failed"));
        assert!(!report.error_text().contains("Removing files failed"));
        assert!(report.archive().is_none());
        assert!(root.join("params.json").exists());
        assert!(root.join("requirements.txt").exists());
        assert!(ctx.history().entries.lock().unwrap().is_empty());
    }

    #[test]
    fn descriptor_failure_stops_before_archive() {
        let (tmp, root) = project();
        fs::create_dir(root.join("params.json")).unwrap();
        let ctx = context(FakeScanner::new("numpy==1.18.1\n"), MemoryHistory::new());
        let request = PackageRequest::new(&root, root.join("main.py"), None, None, None);

        let report = execute(&ctx, &request);

        assert!(!report.succeeded());
        assert!(report.error_text().contains("Generating 'params.json' failed"));
        assert!(root.join("requirements.txt").exists());
        assert!(!tmp.path().join("work/NBAI_task_files").exists());
        assert!(ctx.history().entries.lock().unwrap().is_empty());
    }

    #[test]
    fn history_entry_format() {
        let input = ValidatedInput {
            project_root: PathBuf::from("/proj"),
            entry_file: PathBuf::from("/proj/main.ipynb"),
            output_dir: Some(PathBuf::from("/proj/out")),
            data_url: None,
            data_dir: None,
        };
        let now = Local.with_ymd_and_hms(2020, 3, 4, 5, 6, 7).unwrap();

        assert_eq!(
            history_entry(&input, Path::new("/proj/main.py"), now),
            "DateTime=2020-03-04T05:06, project root=/proj, convert file=/proj/main.py, output directory=/proj/out \n\n"
        );
    }
}
