use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::backend::ConfigBackend;
use crate::{CONFIG_BACKEND, ConfigError};

/// `[logging]` section of `cadenza.toml`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
  /// `EnvFilter` directive, e.g. `"info"` or `"cadenza_storage=debug,info"`.
  /// `RUST_LOG` wins when set.
  #[serde(default = "default_filter")]
  pub filter: String,
}

fn default_filter() -> String {
  "info".to_string()
}

impl Default for LoggingConfig {
  fn default() -> Self {
    LoggingConfig { filter: default_filter() }
  }
}

impl LoggingConfig {
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("logging")?;
    CONFIG_BACKEND.save_section("logging", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("logging", self)
  }

  pub fn env_filter(&self) -> EnvFilter {
    EnvFilter::try_from_default_env()
      .or_else(|_| EnvFilter::try_new(&self.filter))
      .unwrap_or_else(|_| EnvFilter::new(default_filter()))
  }
}

/// Installs the global fmt subscriber. Only binaries call this; a second
/// call is a no-op.
pub fn init(cfg: &LoggingConfig) {
  let _ = tracing_subscriber::fmt().with_env_filter(cfg.env_filter()).with_target(true).try_init();
}
