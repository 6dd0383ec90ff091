// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ConfigError, LoadConfig};
use clap::Parser;
use std::path::PathBuf;

/// Command line shared by the demo binaries.
/// Flags override whatever the JSON config file says.
#[derive(Parser, Debug)]
#[command(version, about = "Drive concurrent readers and writers against a shared integer map")]
pub struct DemoArgs {
    /// JSON configuration file
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,

    #[arg(long)]
    pub readers: Option<usize>,

    #[arg(long)]
    pub writers: Option<usize>,

    /// Exchanges per worker; takes precedence over --duration-ms
    #[arg(long)]
    pub iterations: Option<u64>,

    #[arg(long)]
    pub duration_ms: Option<u64>,

    #[arg(long)]
    pub key_space: Option<i64>,
}

impl DemoArgs {
    pub fn resolve(&self) -> Result<LoadConfig, ConfigError> {
        let config = self.apply(LoadConfig::load_or_default(&self.config));
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&self, mut config: LoadConfig) -> LoadConfig {
        if let Some(readers) = self.readers {
            config.readers = readers;
        }
        if let Some(writers) = self.writers {
            config.writers = writers;
        }
        if let Some(duration_ms) = self.duration_ms {
            config.duration_ms = duration_ms;
            config.iterations = None;
        }
        if let Some(iterations) = self.iterations {
            config.iterations = Some(iterations);
        }
        if let Some(key_space) = self.key_space {
            config.key_space = key_space;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config_values() {
        let args = DemoArgs::parse_from(["demo", "--readers", "3", "--iterations", "20"]);
        let config = args.apply(LoadConfig::default());

        assert_eq!(config.readers, 3);
        assert_eq!(config.writers, 10);
        assert_eq!(config.iterations, Some(20));
    }

    #[test]
    fn test_duration_flag_switches_to_timed_run() {
        let args = DemoArgs::parse_from(["demo", "--duration-ms", "250"]);
        let config = args.apply(LoadConfig {
            iterations: Some(5),
            ..LoadConfig::default()
        });

        assert_eq!(config.iterations, None);
        assert_eq!(config.duration_ms, 250);
    }

    #[test]
    fn test_iterations_win_over_duration() {
        let args = DemoArgs::parse_from(["demo", "--duration-ms", "250", "--iterations", "7"]);
        let config = args.apply(LoadConfig::default());

        assert_eq!(config.iterations, Some(7));
    }
}
