//! Validation logic for checklist settings.

use anyhow::Result;

use super::defaults::{BuildConfig, FlagRules, RequiredFiles};
use super::CheckConfig;

impl CheckConfig {
    /// Validate all sections
    pub fn validate(&self) -> Result<()> {
        self.files.validate()?;
        self.build.validate()?;
        self.flags.validate()
    }
}

impl RequiredFiles {
    /// Each name must be a plain file name inside the project directory
    pub fn validate(&self) -> Result<()> {
        for (key, name) in [
            ("readme", &self.readme),
            ("secret_flags", &self.secret_flags),
            ("client", &self.client),
        ] {
            if name.trim().is_empty() {
                anyhow::bail!("files.{} must not be empty", key);
            }
            if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
                anyhow::bail!(
                    "files.{} must be a file name, not a path, got '{}'",
                    key,
                    name
                );
            }
        }

        Ok(())
    }
}

impl BuildConfig {
    pub fn validate(&self) -> Result<()> {
        if self.program().trim().is_empty() {
            anyhow::bail!("build.command must start with a program name");
        }

        Ok(())
    }
}

impl FlagRules {
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            anyhow::bail!("flags.length must be greater than 0");
        }
        if self.minimum == 0 {
            anyhow::bail!("flags.minimum must be at least 1");
        }

        Ok(())
    }
}
