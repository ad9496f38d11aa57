//! CRLF detection for submitted text files.
//!
//! A couple of stray `\r\n` pairs are tolerated (an editor adding one at the
//! end of the file is common); more than the threshold means the whole file
//! was most likely saved with Windows line endings.

use std::fs;
use std::path::Path;

use crate::error::CheckError;

/// Most CRLF pairs a file may contain before it is rejected
pub const DEFAULT_MAX_CRLF: usize = 2;

/// Count `\r\n` pairs in `bytes`.
pub fn count_crlf(bytes: &[u8]) -> usize {
    bytes.windows(2).filter(|pair| *pair == b"\r\n").count()
}

/// Reject `dir/name` when it holds more than `max_crlf` CRLF pairs.
///
/// Returns the number of pairs found otherwise.
pub fn check_line_endings(dir: &Path, name: &str, max_crlf: usize) -> Result<usize, CheckError> {
    let path = dir.join(name);
    let content = fs::read(&path).map_err(|e| CheckError::unreadable(&path, e))?;

    let crlf_count = count_crlf(&content);
    if crlf_count > max_crlf {
        return Err(CheckError::WindowsLineEndings {
            name: name.to_string(),
            crlf_count,
        });
    }

    Ok(crlf_count)
}
