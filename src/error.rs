//! Check failures.
//!
//! Every check returns a [`CheckError`] instead of terminating the process;
//! the orchestrator stops at the first one and turns it into an exit status.
//! The `Display` text of each variant is the diagnostic shown to the user.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::listing::FileRole;

/// Broad category of a check failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required file or program is not in the project directory
    MissingFile,
    /// A text file looks like it uses CRLF line endings
    LineEndings,
    /// The build tool could not be run or exited with an error
    Build,
    /// A file or directory could not be opened or read
    Io,
    /// Not enough valid secret flags
    SecretFlags,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFile => write!(f, "missing-file"),
            Self::LineEndings => write!(f, "line-endings"),
            Self::Build => write!(f, "build"),
            Self::Io => write!(f, "io"),
            Self::SecretFlags => write!(f, "secret-flags"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("The {name} {} is missing, make sure you named the file correctly", .role.noun())]
    MissingFile { name: String, role: FileRole },

    #[error(
        "The {name} file might contain Windows-style line endings, \
         try converting the file to Unix format using dos2unix"
    )]
    WindowsLineEndings { name: String, crlf_count: usize },

    #[error("Error during {program}. Error code {code}\n{output}")]
    BuildFailed {
        program: String,
        code: i32,
        output: String,
    },

    #[error("Error: Unable to run {program}: {source}")]
    BuildSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Error: Unable to open {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "The {name} file contains less than {minimum} secret flag, \
         make sure to add the missing secret flag"
    )]
    NoValidFlags {
        name: String,
        minimum: usize,
        found: usize,
    },
}

impl CheckError {
    pub fn unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Unreadable {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingFile { .. } => ErrorKind::MissingFile,
            Self::WindowsLineEndings { .. } => ErrorKind::LineEndings,
            Self::BuildFailed { .. } | Self::BuildSpawn { .. } => ErrorKind::Build,
            Self::Unreadable { .. } => ErrorKind::Io,
            Self::NoValidFlags { .. } => ErrorKind::SecretFlags,
        }
    }

    /// Process exit status for this failure.
    ///
    /// Build failures forward the build tool's own code when it fits in an
    /// exit status; everything else exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::BuildFailed { code, .. } => u8::try_from(*code)
                .ok()
                .filter(|code| *code != 0)
                .unwrap_or(1),
            _ => 1,
        }
    }
}
