//! Checklist orchestration.
//!
//! Runs the checks in a fixed order and stops at the first failure:
//!
//! 1. list the project directory
//! 2. README present, then its line endings
//! 3. secret flags file present, then its line endings
//! 4. build
//! 5. list again, client program present
//! 6. secret flags valid
//!
//! Nothing is retried and no state outlives the run.

use std::path::{Path, PathBuf};

use crate::config::CheckConfig;
use crate::error::CheckError;
use crate::flags::{self, FlagReport};
use crate::line_endings::check_line_endings;
use crate::listing::{list_dir, require_file, FileRole};
use crate::make::{self, BuildOutcome};
use crate::output::Output;
use crate::SUCCESS_MESSAGE;

/// What a passing run found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    pub project_dir: PathBuf,
    pub build: BuildOutcome,
    pub flags: FlagReport,
}

pub struct Checker<'a> {
    config: &'a CheckConfig,
    output: &'a Output,
}

impl<'a> Checker<'a> {
    pub fn new(config: &'a CheckConfig, output: &'a Output) -> Self {
        Self { config, output }
    }

    /// Run every check against `project_dir`, stopping at the first failure.
    ///
    /// Invalid secret flags are reported through the output as they are
    /// found; the returned error is the only failure the caller should show.
    pub fn run(&self, project_dir: &Path) -> Result<CheckSummary, CheckError> {
        let files = &self.config.files;

        let listing = list_dir(project_dir)?;
        let project_dir = std::path::absolute(project_dir)
            .map_err(|e| CheckError::unreadable(project_dir, e))?;
        self.output
            .step(&format!("Checking {}", project_dir.display()));

        for (name, role) in [
            (&files.readme, FileRole::Readme),
            (&files.secret_flags, FileRole::SecretFlags),
        ] {
            self.output.step(&format!("Checking {}", name));
            require_file(&listing, name, role)?;
            let crlf_count =
                check_line_endings(&project_dir, name, self.config.line_endings.max_crlf)?;
            self.output
                .detail(&format!("{} CRLF line ending(s) in {}", crlf_count, name));
        }

        let build = self.build(&project_dir)?;

        self.output.step(&format!("Checking {}", files.client));
        let listing = list_dir(&project_dir)?;
        require_file(&listing, &files.client, FileRole::Client)?;

        let flags = self.check_flags(&project_dir)?;

        Ok(CheckSummary {
            project_dir,
            build,
            flags,
        })
    }

    fn build(&self, project_dir: &Path) -> Result<BuildOutcome, CheckError> {
        let build = &self.config.build;
        self.output
            .step(&format!("Running {}", build.command.join(" ")));

        let result = make::run_build(project_dir, build)?;
        let outcome = result.evaluate(build.program())?;

        match outcome {
            BuildOutcome::Built => self.output.detail(&result.output_lossy()),
            BuildOutcome::NothingToBuild => self.output.detail("Nothing to build"),
        }

        Ok(outcome)
    }

    fn check_flags(&self, project_dir: &Path) -> Result<FlagReport, CheckError> {
        let name = &self.config.files.secret_flags;
        let rules = &self.config.flags;
        self.output.step(&format!("Validating {}", name));

        let report = flags::read_flags(&project_dir.join(name), rules.length)?;
        for invalid in &report.invalid {
            self.output.warn(&invalid.to_string());
            self.output.detail(&format!(
                "line {}: {} bytes, expected {}",
                invalid.line,
                invalid.token.len(),
                rules.length
            ));
        }
        self.output.detail(&format!(
            "{} valid, {} invalid",
            report.valid,
            report.invalid.len()
        ));

        report.require(rules.minimum, name)?;

        Ok(report)
    }
}

/// Run the checklist and report the result; returns the process exit status.
pub fn execute(project_dir: &Path, config: &CheckConfig, output: &Output) -> u8 {
    match Checker::new(config, output).run(project_dir) {
        Ok(_) => {
            output.success(SUCCESS_MESSAGE);
            0
        }
        Err(err) => {
            output.error(&err.to_string());
            output.detail(&format!("failed check: {}", err.kind()));
            err.exit_code()
        }
    }
}
