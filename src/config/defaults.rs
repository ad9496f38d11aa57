//! Default values and configuration structs with default implementations.

use serde::Deserialize;

use crate::files;
use crate::flags::DEFAULT_FLAG_LENGTH;
use crate::line_endings::DEFAULT_MAX_CRLF;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(default_readme, String, files::README.to_string());
default_fn!(default_secret_flags, String, files::SECRET_FLAGS.to_string());
default_fn!(default_client, String, files::CLIENT.to_string());
default_fn!(default_build_command, Vec<String>, vec!["make".to_string()]);
default_fn!(default_flag_length, usize, DEFAULT_FLAG_LENGTH);
default_fn!(default_flag_minimum, usize, 1);
default_fn!(default_max_crlf, usize, DEFAULT_MAX_CRLF);

/// Names the submission's required files must have
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequiredFiles {
    #[serde(default = "default_readme")]
    pub readme: String,
    #[serde(default = "default_secret_flags")]
    pub secret_flags: String,
    /// Program the build is expected to produce
    #[serde(default = "default_client")]
    pub client: String,
}

impl Default for RequiredFiles {
    fn default() -> Self {
        Self {
            readme: default_readme(),
            secret_flags: default_secret_flags(),
            client: default_client(),
        }
    }
}

/// Build tool invocation
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Program followed by its arguments (default: `[make]`)
    #[serde(default = "default_build_command")]
    pub command: Vec<String>,
}

impl BuildConfig {
    /// Program to run. Empty only for a config that failed validation.
    pub fn program(&self) -> &str {
        self.command.first().map(String::as_str).unwrap_or_default()
    }

    pub fn args(&self) -> &[String] {
        self.command.get(1..).unwrap_or_default()
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            command: default_build_command(),
        }
    }
}

/// What counts as a valid secret flag file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlagRules {
    /// Exact UTF-8 byte length of a flag (default: 64)
    #[serde(default = "default_flag_length")]
    pub length: usize,
    /// Fewest valid flags the file may hold (default: 1)
    #[serde(default = "default_flag_minimum")]
    pub minimum: usize,
}

impl Default for FlagRules {
    fn default() -> Self {
        Self {
            length: default_flag_length(),
            minimum: default_flag_minimum(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineEndingRules {
    /// CRLF pairs tolerated per file (default: 2)
    #[serde(default = "default_max_crlf")]
    pub max_crlf: usize,
}

impl Default for LineEndingRules {
    fn default() -> Self {
        Self {
            max_crlf: default_max_crlf(),
        }
    }
}
