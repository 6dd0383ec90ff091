// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::Deserialize;
use std::{fs, path::Path, time::Duration};

/// Shape of a load run: how many workers, which keys and values they use,
/// and when they stop.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    pub readers: usize,
    pub writers: usize,
    /// Exchanges per worker. When absent the run lasts `duration_ms` instead.
    pub iterations: Option<u64>,
    pub duration_ms: u64,
    /// Keys are drawn from `0..key_space`
    pub key_space: i64,
    /// Written values are drawn from `0..value_space`
    pub value_space: i64,
    /// Capacity of each of the owner's inbound queues
    pub request_buffer: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            readers: 100,
            writers: 10,
            iterations: None,
            duration_ms: 1_000,
            key_space: 5,
            value_space: 100,
            request_buffer: 1,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read config: {}", e),
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl LoadConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: LoadConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to the defaults when it is missing or broken
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {}", path.display(), e);
                eprintln!("Using default configuration...");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.key_space <= 0 {
            return Err(ConfigError::Invalid(format!(
                "key_space must be positive, got {}",
                self.key_space
            )));
        }
        if self.value_space <= 0 {
            return Err(ConfigError::Invalid(format!(
                "value_space must be positive, got {}",
                self.value_space
            )));
        }
        if self.request_buffer == 0 {
            return Err(ConfigError::Invalid(
                "request_buffer must be at least 1".to_string(),
            ));
        }
        if self.readers + self.writers == 0 {
            return Err(ConfigError::Invalid(
                "at least one reader or writer is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn print_summary(&self) {
        println!("Configuration:");
        println!("  - Readers: {}", self.readers);
        println!("  - Writers: {}", self.writers);
        match self.iterations {
            Some(iterations) => println!("  - Iterations per worker: {}", iterations),
            None => println!("  - Duration: {}ms", self.duration_ms),
        }
        println!("  - Key space: 0..{}", self.key_space);
        println!("  - Value space: 0..{}", self.value_space);
        println!("  - Request buffer: {}", self.request_buffer);
    }
}
