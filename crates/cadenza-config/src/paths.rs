use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Overrides every platform directory with `<base>/{config,data,cache}`.
pub const BASE_DIR_ENV: &str = "CADENZA_BASE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

#[derive(Debug, Clone)]
pub struct CadenzaPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
  pub cache_dir: PathBuf,
}

impl CadenzaPaths {
  pub fn new() -> Result<Self, ConfigError> {
    match std::env::var(BASE_DIR_ENV) {
      Ok(env_base) => Self::under(env_base),
      Err(_) => {
        let proj_dirs = ProjectDirs::from("com", "cadenza", "cadenza").ok_or(ConfigError::Directories)?;
        Self::create(
          proj_dirs.config_dir().to_path_buf(),
          proj_dirs.config_dir().to_path_buf(),
          proj_dirs.data_dir().to_path_buf(),
          proj_dirs.cache_dir().to_path_buf(),
        )
      }
    }
  }

  /// Portable layout rooted at `base`.
  pub fn under(base: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let base = base.as_ref().to_path_buf();
    Self::create(base.clone(), base.join("config"), base.join("data"), base.join("cache"))
  }

  fn create(base_dir: PathBuf, config_dir: PathBuf, data_dir: PathBuf, cache_dir: PathBuf) -> Result<Self, ConfigError> {
    std::fs::create_dir_all(&config_dir)?;
    std::fs::create_dir_all(&data_dir)?;
    std::fs::create_dir_all(&cache_dir)?;

    Ok(Self { base_dir, config_dir, data_dir, cache_dir })
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("cadenza.toml")
  }
}
