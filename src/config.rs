//! Worker thread configuration.

use crate::error::{Error, Result};

/// Configuration for the executor's worker thread.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name assigned to the worker thread.
    pub thread_name: String,

    /// Worker thread stack size in bytes; `None` uses the platform default.
    pub stack_size: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thread_name: "seqexec-worker".to_string(),
            stack_size: None,
        }
    }
}

impl Config {
    /// Start building a configuration.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Check the configuration for invalid values.
    pub fn validate(&self) -> Result<()> {
        if self.thread_name.is_empty() {
            return Err(Error::config("thread_name must not be empty"));
        }

        Ok(())
    }
}

/// Builder for [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a builder holding the default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the worker thread name.
    pub fn thread_name<S: Into<String>>(mut self, name: S) -> Self {
        self.config.thread_name = name.into();
        self
    }

    /// Set the worker thread stack size in bytes.
    pub fn stack_size(mut self, size: usize) -> Self {
        self.config.stack_size = Some(size);
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
