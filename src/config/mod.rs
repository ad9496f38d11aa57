//! Checklist settings.
//!
//! Every setting has a default matching the course checklist, so a run
//! without a settings file checks `README.md`, `secret_flags` and `client`,
//! builds with `make`, and expects 64-byte flags. A settings file may
//! override any subset of them.
//!
//! The file is either plain YAML or Markdown with YAML frontmatter:
//!
//! ```text
//! ---
//! build:
//!   command: [make, -j4]
//! flags:
//!   minimum: 2
//! ---
//!
//! # Socket basics checklist
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub mod defaults;
pub mod validation;

pub use defaults::*;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    #[serde(default)]
    pub files: RequiredFiles,
    #[serde(default)]
    pub build: BuildConfig,
    #[serde(default)]
    pub flags: FlagRules,
    #[serde(default)]
    pub line_endings: LineEndingRules,
}

impl CheckConfig {
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let yaml = match split_frontmatter(content) {
            (Some(frontmatter), _body) => frontmatter,
            (None, body) => body.to_string(),
        };

        // An empty document means "all defaults"
        let config: CheckConfig = if yaml.trim().is_empty() {
            CheckConfig::default()
        } else {
            serde_yaml::from_str(&yaml).context("Failed to parse config YAML")?
        };

        config.validate()?;

        Ok(config)
    }
}

/// Split `content` into YAML frontmatter (between `---` fences) and body.
///
/// Returns `None` for the frontmatter when the content does not start with
/// a fence or the closing fence is missing.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    let Some(rest) = content.strip_prefix("---") else {
        return (None, content);
    };

    match rest.find("\n---") {
        Some(end) => {
            let frontmatter = rest[..end].to_string();
            let body = rest[end + 4..].trim_start();
            (Some(frontmatter), body)
        }
        None => (None, content),
    }
}
