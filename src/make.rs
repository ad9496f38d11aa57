//! Build tool invocation.
//!
//! The build runs synchronously in the project directory with stdout and
//! stderr sharing one pipe, so the captured text interleaves exactly as a
//! terminal would show it. There is no timeout: a hanging build hangs the
//! check.

use std::io::{self, Read};
use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::config::BuildConfig;
use crate::error::CheckError;

/// What `make` prints when the directory has no Makefile.
///
/// Treated as a successful (empty) build whatever the exit status says.
pub const NO_TARGETS_OUTPUT: &[u8] = b"make: *** No targets.  Stop.\n";

/// Exit code and merged output of one build run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutput {
    pub code: i32,
    pub output: Vec<u8>,
}

/// How a build that did not fail finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Exit status zero
    Built,
    /// The "no targets" message; nothing was built
    NothingToBuild,
}

impl BuildOutput {
    pub fn output_lossy(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Decide whether this run counts as a successful build.
    pub fn evaluate(&self, program: &str) -> Result<BuildOutcome, CheckError> {
        if self.output == NO_TARGETS_OUTPUT {
            return Ok(BuildOutcome::NothingToBuild);
        }

        if self.code != 0 {
            return Err(CheckError::BuildFailed {
                program: program.to_string(),
                code: self.code,
                output: self.output_lossy(),
            });
        }

        Ok(BuildOutcome::Built)
    }
}

/// Run the configured build command in `dir` and wait for it to exit.
pub fn run_build(dir: &Path, build: &BuildConfig) -> Result<BuildOutput, CheckError> {
    let program = build.program();
    let spawn_error = |source: io::Error| CheckError::BuildSpawn {
        program: program.to_string(),
        source,
    };

    let (mut reader, writer) = io::pipe().map_err(spawn_error)?;
    let stderr_writer = writer.try_clone().map_err(spawn_error)?;

    // The Command keeps its copies of the write end alive; it has to be
    // dropped before reading or read_to_end never sees EOF.
    let mut child = {
        let mut cmd = Command::new(program);
        cmd.args(build.args())
            .current_dir(dir)
            .stdout(writer)
            .stderr(stderr_writer);
        cmd.spawn().map_err(spawn_error)?
    };

    let mut output = Vec::new();
    let read_result = reader.read_to_end(&mut output);
    let status = child.wait().map_err(spawn_error)?;
    read_result.map_err(spawn_error)?;

    Ok(BuildOutput {
        code: exit_code(status),
        output,
    })
}

/// Numeric exit code, with signal deaths reported as the negated signal.
#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| -signal))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
