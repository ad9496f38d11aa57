//! Secret flag parsing and validation.
//!
//! The flags file holds one flag per line. Only the first whitespace
//! separated token of a line is considered, so students may annotate a flag
//! after it. A flag is valid when its UTF-8 encoding is exactly
//! [`DEFAULT_FLAG_LENGTH`] bytes (or the configured length).

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::CheckError;

/// Byte length of a secret flag
pub const DEFAULT_FLAG_LENGTH: usize = 64;

/// A token that does not have the expected byte length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFlag {
    /// 1-based line number in the flags file
    pub line: usize,
    pub token: String,
}

impl InvalidFlag {
    /// Length shown to the user. Counts characters, not bytes, so it can
    /// differ from the length that was checked for non-ASCII tokens.
    pub fn display_len(&self) -> usize {
        self.token.chars().count()
    }
}

impl fmt::Display for InvalidFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid secret flag (len == {}):\n{}\n",
            self.display_len(),
            self.token
        )
    }
}

/// Outcome of scanning a flags file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagReport {
    pub valid: usize,
    pub invalid: Vec<InvalidFlag>,
}

impl FlagReport {
    /// Fail with [`CheckError::NoValidFlags`] when fewer than `minimum` flags
    /// are valid. `name` is the flags file name used in the message.
    pub fn require(&self, minimum: usize, name: &str) -> Result<(), CheckError> {
        if self.valid < minimum {
            return Err(CheckError::NoValidFlags {
                name: name.to_string(),
                minimum,
                found: self.valid,
            });
        }
        Ok(())
    }
}

/// Split on `\n`, `\r\n` and a bare `\r`.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split('\n').flat_map(|line| {
        let line = line.strip_suffix('\r').unwrap_or(line);
        line.split('\r')
    })
}

/// Classify the first token of every line in `content`.
///
/// Lines without any token are skipped.
pub fn scan_flags(content: &str, length: usize) -> FlagReport {
    let mut report = FlagReport::default();

    for (index, line) in split_lines(content).enumerate() {
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };

        if token.len() == length {
            report.valid += 1;
        } else {
            report.invalid.push(InvalidFlag {
                line: index + 1,
                token: token.to_string(),
            });
        }
    }

    report
}

/// Read and scan the flags file at `path`.
pub fn read_flags(path: &Path, length: usize) -> Result<FlagReport, CheckError> {
    let content = fs::read_to_string(path).map_err(|e| CheckError::unreadable(path, e))?;
    Ok(scan_flags(&content, length))
}
