use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use submission_check::checker::{self, CheckSummary, Checker};
use submission_check::config::{BuildConfig, CheckConfig};
use submission_check::error::CheckError;
use submission_check::output::{Output, OutputMode};
use tempfile::TempDir;

/// A 64-byte secret flag
#[allow(dead_code)]
pub fn flag(c: char) -> String {
    c.to_string().repeat(64)
}

/// Writer that keeps everything written to it for later inspection.
#[derive(Clone, Default)]
pub struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    pub fn contents(&self) -> String {
        String::from_utf8(self.buffer.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// ProjectHarness provides an isolated submission directory.
///
/// A new harness holds a Unix-style `README.md` and a `secret_flags` file
/// with one valid flag, but no `client`; the build is expected to produce it.
pub struct ProjectHarness {
    pub dir: TempDir,
    pub project_dir: PathBuf,
}

impl ProjectHarness {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let project_dir = temp_dir.path().join("project");
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");

        let harness = ProjectHarness {
            dir: temp_dir,
            project_dir,
        };
        harness.write("README.md", "# Socket Basics\n\nHigh-level approach.\n");
        harness.write("secret_flags", &format!("{}\n", flag('a')));
        harness
    }

    /// Returns the submission directory.
    pub fn path(&self) -> &Path {
        &self.project_dir
    }

    pub fn write(&self, name: &str, content: &str) {
        fs::write(self.project_dir.join(name), content).expect("Failed to write project file");
    }

    #[allow(dead_code)]
    pub fn remove(&self, name: &str) {
        fs::remove_file(self.project_dir.join(name)).expect("Failed to remove project file");
    }

    /// Settings whose build runs `script` through `sh -c`.
    pub fn config_with_build(script: &str) -> CheckConfig {
        CheckConfig {
            build: BuildConfig {
                command: vec!["sh".to_string(), "-c".to_string(), script.to_string()],
            },
            ..CheckConfig::default()
        }
    }

    /// Settings whose build succeeds and leaves a client behind.
    #[allow(dead_code)]
    pub fn passing_config() -> CheckConfig {
        Self::config_with_build("echo 'cc -o client client.c'; touch client")
    }

    /// Runs the checker, returning its result and everything it printed.
    #[allow(dead_code)]
    pub fn run(
        &self,
        config: &CheckConfig,
        mode: OutputMode,
    ) -> (Result<CheckSummary, CheckError>, String) {
        let writer = CaptureWriter::default();
        let output = Output::with_writer(mode, Box::new(writer.clone()));
        let result = Checker::new(config, &output).run(self.path());
        (result, writer.contents())
    }

    /// Runs the checker through `execute`, returning the exit status and output.
    #[allow(dead_code)]
    pub fn execute(&self, config: &CheckConfig, mode: OutputMode) -> (u8, String) {
        let writer = CaptureWriter::default();
        let output = Output::with_writer(mode, Box::new(writer.clone()));
        let status = checker::execute(self.path(), config, &output);
        (status, writer.contents())
    }

    /// Writes a settings file next to (not inside) the project directory.
    #[allow(dead_code)]
    pub fn write_settings(&self, content: &str) -> PathBuf {
        let path = self.dir.path().join("checklist.yaml");
        fs::write(&path, content).expect("Failed to write settings file");
        path
    }
}

impl Default for ProjectHarness {
    fn default() -> Self {
        Self::new()
    }
}
