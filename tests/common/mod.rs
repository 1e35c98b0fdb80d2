//! Shared testing utilities for orion-pack CLI tests.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Requirements written by the stand-in dependency scanner.
pub const SCANNED_REQUIREMENTS: &str =
    "numpy==1.18.1\n\ntensorflow==2.1.0\ntensorflow_gpu==2.1.0\nmatplotlib==3.0\n";

/// Testing harness providing an isolated project, tools and config.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    project: PathBuf,
    config_path: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create `<tmp>/work/proj` with a `main.py` and working stand-in tools.
    pub fn new() -> Self {
        Self::with_scanner_exit(0)
    }

    /// Same as [`TestContext::new`], but the scanner exits with `code`.
    pub fn with_scanner_exit(code: i32) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let project = root.path().join("work/proj");
        fs::create_dir_all(&project).expect("Failed to create project directory");
        fs::write(project.join("main.py"), "import numpy\n").expect("Failed to write main.py");

        let bin = root.path().join("bin");
        fs::create_dir_all(&bin).expect("Failed to create bin directory");
        let converter = write_script(
            &bin,
            "fake-nbconvert",
            "#!/bin/sh\nprintf '# converted\\n' > \"${1%.ipynb}.py\"\n",
        );
        let scanner = write_script(
            &bin,
            "fake-pipreqs",
            &format!(
                "#!/bin/sh\nprintf '{}' > \"$2/requirements.txt\"\nexit {code}\n",
                SCANNED_REQUIREMENTS.replace('\n', "\\n")
            ),
        );

        let config_path = root.path().join("orion-pack.toml");
        let config = format!(
            "[tools]\nconverter = [\"{}\"]\nscanner = [\"{}\", \"--force\"]\n\n[log]\ndirectory = \"{}\"\n",
            converter.display(),
            scanner.display(),
            root.path().join("logs").display(),
        );
        fs::write(&config_path, config).expect("Failed to write config");

        Self { root, project, config_path }
    }

    pub fn tmp(&self) -> &Path {
        self.root.path()
    }

    pub fn project(&self) -> &Path {
        &self.project
    }

    /// Expected archive location for an entry stem.
    pub fn archive(&self, stem: &str) -> PathBuf {
        self.root.path().join(format!("work/NBAI_task_files/{stem}_orion.zip"))
    }

    pub fn history_path(&self) -> PathBuf {
        self.root.path().join("logs/NBAIConverter.history")
    }

    /// Build a command for invoking the compiled binary with the test config.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("orion-pack").expect("Failed to locate orion-pack binary");
        cmd.arg("--config").arg(&self.config_path);
        cmd
    }

    /// Archive member names, sorted.
    pub fn archive_members(&self, stem: &str) -> Vec<String> {
        let file = fs::File::open(self.archive(stem)).expect("archive should exist");
        let archive = zip::ZipArchive::new(file).expect("archive should be a valid zip");
        let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
        names.sort();
        names
    }

    /// Contents of one archive member.
    pub fn archive_member(&self, stem: &str, name: &str) -> String {
        use std::io::Read;

        let file = fs::File::open(self.archive(stem)).expect("archive should exist");
        let mut archive = zip::ZipArchive::new(file).expect("archive should be a valid zip");
        let mut member = archive.by_name(name).expect("member should exist");
        let mut content = String::new();
        member.read_to_string(&mut content).expect("member should be UTF-8");
        content
    }
}

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("Failed to write script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to mark script executable");
    path
}
