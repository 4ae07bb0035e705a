//! Output format selection.

use clap::ValueEnum;
use ptrsweep_core::OutputMode;
use serde::{Deserialize, Serialize};

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One hostname per line, optionally prefixed by its address
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    /// The line rendering for this format; `verbose` only affects plain output
    #[must_use]
    pub const fn mode(self, verbose: bool) -> OutputMode {
        match (self, verbose) {
            (Self::Plain, false) => OutputMode::Bare,
            (Self::Plain, true) => OutputMode::Verbose,
            (Self::Json, _) => OutputMode::Json,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_only_applies_to_plain() {
        assert_eq!(OutputFormat::Plain.mode(false), OutputMode::Bare);
        assert_eq!(OutputFormat::Plain.mode(true), OutputMode::Verbose);
        assert_eq!(OutputFormat::Json.mode(true), OutputMode::Json);
        assert_eq!(OutputFormat::Json.mode(false), OutputMode::Json);
    }

    #[test]
    fn display_matches_value_names() {
        for format in OutputFormat::value_variants() {
            let name = format.to_possible_value().unwrap();
            assert_eq!(name.get_name(), format.to_string());
        }
    }
}
