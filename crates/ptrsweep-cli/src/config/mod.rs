//! Configuration management.
//!
//! Settings are layered: command-line flags, then an optional TOML file
//! given with `--config`, then built-in defaults.

use anyhow::{Context, Result};
use ptrsweep_recon::{ResolverConfig, SweepConfig, DEFAULT_WORKERS};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Duration;

use crate::cli::args::Cli;
use crate::logging::DEFAULT_LOG_LEVEL;
use crate::output::OutputFormat;

/// Contents of a `--config` TOML file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// DNS resolver IP address.
    pub dns: Option<IpAddr>,

    /// DNS resolver UDP port.
    pub port: Option<u16>,

    /// Number of concurrent lookup workers.
    pub concurrency: Option<NonZeroUsize>,

    /// Prefix hostnames with their address.
    pub verbose: Option<bool>,

    /// Per-query timeout in seconds.
    pub timeout_secs: Option<u64>,

    /// Output format.
    pub format: Option<OutputFormat>,

    /// Log filter directive.
    pub log_level: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Pipeline configuration.
    pub sweep: SweepConfig,

    /// Log filter directive.
    pub log_level: String,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;

        Ok(config)
    }

    /// Layer command-line flags over this file and the defaults.
    pub fn merge(self, cli: &Cli) -> Result<Settings> {
        let defaults = ResolverConfig::new();

        let timeout_secs = cli.timeout.or(self.timeout_secs);
        if timeout_secs == Some(0) {
            anyhow::bail!("timeout must be at least 1 second");
        }

        let resolver = defaults
            .server(cli.dns.or(self.dns).unwrap_or(defaults.server))
            .port(cli.port.or(self.port).unwrap_or(defaults.port))
            .timeout(timeout_secs.map_or(defaults.timeout, Duration::from_secs));

        let verbose = cli.verbose || self.verbose.unwrap_or(false);
        let format = cli.format.or(self.format).unwrap_or_default();

        Ok(Settings {
            sweep: SweepConfig {
                resolver,
                workers: cli.concurrency.or(self.concurrency).unwrap_or(DEFAULT_WORKERS),
                mode: format.mode(verbose),
            },
            log_level: cli
                .log_level
                .clone()
                .or(self.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use ptrsweep_core::OutputMode;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ptrsweep").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_without_file_or_flags() {
        let settings = Config::default().merge(&cli(&[])).unwrap();
        assert_eq!(settings.sweep, SweepConfig::default());
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn flags_override_file() {
        let file = Config {
            dns: Some("9.9.9.9".parse().unwrap()),
            port: Some(5300),
            concurrency: NonZeroUsize::new(4),
            verbose: Some(true),
            timeout_secs: Some(2),
            format: None,
            log_level: Some("debug".into()),
        };
        let settings = file
            .merge(&cli(&["--dns", "1.1.1.1", "-c", "64", "--log-level", "info"]))
            .unwrap();

        assert_eq!(settings.sweep.resolver.socket_addr().to_string(), "1.1.1.1:5300");
        assert_eq!(settings.sweep.resolver.timeout, Duration::from_secs(2));
        assert_eq!(settings.sweep.workers.get(), 64);
        assert_eq!(settings.sweep.mode, OutputMode::Verbose);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn json_format_ignores_verbose() {
        let settings = Config::default()
            .merge(&cli(&["-v", "--format", "json"]))
            .unwrap();
        assert_eq!(settings.sweep.mode, OutputMode::Json);
    }

    #[test]
    fn zero_timeout_in_file_is_rejected() {
        let file = Config {
            timeout_secs: Some(0),
            ..Config::default()
        };
        assert!(file.merge(&cli(&[])).is_err());
    }

    #[test]
    fn loads_toml_file() {
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        write!(
            tmpfile,
            r#"
dns = "127.0.0.1"
port = 5353
concurrency = 8
format = "json"
"#
        )
        .unwrap();

        let config = Config::load(tmpfile.path()).unwrap();
        assert_eq!(config.dns, Some("127.0.0.1".parse().unwrap()));
        assert_eq!(config.port, Some(5353));
        assert_eq!(config.concurrency.map(NonZeroUsize::get), Some(8));
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(config.verbose, None);
    }

    #[test]
    fn rejects_unknown_keys_and_zero_workers() {
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmpfile, "resolver = \"1.1.1.1\"").unwrap();
        assert!(Config::load(tmpfile.path()).is_err());

        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmpfile, "concurrency = 0").unwrap();
        assert!(Config::load(tmpfile.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Config::load(Path::new("/nonexistent/ptrsweep.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
