//! Directory listing and required file lookup.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::CheckError;

/// What a required file is for, which decides how it is described when missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Readme,
    SecretFlags,
    /// Built by the project's Makefile
    Client,
}

impl FileRole {
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Readme | Self::SecretFlags => "file",
            Self::Client => "program",
        }
    }
}

/// Names of the entries directly inside `dir`.
///
/// Non-UTF-8 names are converted lossily; they can never match a required
/// name anyway.
pub fn list_dir(dir: &Path) -> Result<BTreeSet<String>, CheckError> {
    let entries = fs::read_dir(dir).map_err(|e| CheckError::unreadable(dir, e))?;

    let mut names = BTreeSet::new();
    for entry in entries {
        let entry = entry.map_err(|e| CheckError::unreadable(dir, e))?;
        names.insert(entry.file_name().to_string_lossy().into_owned());
    }

    Ok(names)
}

/// Fail with [`CheckError::MissingFile`] unless `name` is in `listing`.
pub fn require_file(
    listing: &BTreeSet<String>,
    name: &str,
    role: FileRole,
) -> Result<(), CheckError> {
    if listing.contains(name) {
        Ok(())
    } else {
        Err(CheckError::MissingFile {
            name: name.to_string(),
            role,
        })
    }
}
