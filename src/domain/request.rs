use std::path::{Path, PathBuf};

/// Inputs for one packaging run, as supplied by the caller.
///
/// Optional inputs use `None` for "not provided"; empty strings handed to
/// [`PackageRequest::new`] are folded into `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRequest {
    pub project_root: PathBuf,
    pub entry_file: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub data_url: Option<String>,
    pub data_dir: Option<PathBuf>,
}

impl PackageRequest {
    pub fn new(
        project_root: impl Into<PathBuf>,
        entry_file: impl Into<PathBuf>,
        output_dir: Option<PathBuf>,
        data_url: Option<String>,
        data_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            entry_file: entry_file.into(),
            output_dir: output_dir.filter(|p| !p.as_os_str().is_empty()),
            data_url: data_url.filter(|u| !u.is_empty()),
            data_dir: data_dir.filter(|p| !p.as_os_str().is_empty()),
        }
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    pub fn data_url(&self) -> Option<&str> {
        self.data_url.as_deref()
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    /// Human-readable summary of the inputs, used as the report header.
    pub fn describe(&self) -> String {
        let show = |p: Option<&Path>| p.map(|p| p.display().to_string()).unwrap_or_default();
        format!(
            "Project Root Directory: {}\nEntry-point File: {}\nOutput Directory: {}\nExternal Data URL: {}\nData Directory: {}\n",
            self.project_root.display(),
            self.entry_file.display(),
            show(self.output_dir()),
            self.data_url().unwrap_or_default(),
            show(self.data_dir()),
        )
    }
}
