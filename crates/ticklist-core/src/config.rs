use anyhow::Context;
use serde::Deserialize;
use tracing::{
  error,
  info,
  warn
};

use crate::storage::DEFAULT_STORAGE_PREFIX;

pub const DEFAULT_EASING: &str =
  "cubic-bezier(0.2, 0.7, 0.2, 1)";

#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
  Deserialize,
)]
#[serde(default)]
pub struct AppConfig {
  pub storage: StorageConfig,
  pub motion:  MotionConfig
}

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct StorageConfig {
  pub prefix: String
}

/// Animation timings, all in milliseconds.
#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct MotionConfig {
  pub respect_reduced_motion: bool,
  pub easing:                 String,
  pub enter_ms:               u32,
  pub pulse_ms:               u32,
  pub exit_ms:                u32,
  pub clear_ms:               u32,
  pub clear_stagger_ms:       u32
}

impl Default for StorageConfig {
  fn default() -> Self {
    Self {
      prefix: DEFAULT_STORAGE_PREFIX
        .to_string()
    }
  }
}

impl Default for MotionConfig {
  fn default() -> Self {
    Self {
      respect_reduced_motion: true,
      easing:                 DEFAULT_EASING
        .to_string(),
      enter_ms:               180,
      pulse_ms:               180,
      exit_ms:                160,
      clear_ms:               160,
      clear_stagger_ms:       18
    }
  }
}

impl AppConfig {
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let config = toml::from_str::<Self>(raw)
      .context("failed to parse app config")?;
    Ok(config.sanitized())
  }

  /// Parses an embedded config, falling back to defaults on error.
  pub fn load_embedded(raw: &str) -> Self {
    match Self::from_toml_str(raw) {
      | Ok(config) => {
        info!(
          prefix = %config.storage.prefix,
          reduced_motion = config.motion.respect_reduced_motion,
          "loaded app config"
        );
        config
      }
      | Err(error) => {
        error!(
          error = %format!("{error:#}"),
          "using default app config"
        );
        Self::default()
      }
    }
  }

  fn sanitized(mut self) -> Self {
    let defaults = MotionConfig::default();

    if self.storage.prefix.trim().is_empty()
    {
      warn!(
        "empty storage prefix; using \
         default"
      );
      self.storage.prefix =
        DEFAULT_STORAGE_PREFIX.to_string();
    }
    if self.motion.easing.trim().is_empty()
    {
      self.motion.easing = defaults.easing;
    }

    for (value, fallback) in [
      (
        &mut self.motion.enter_ms,
        defaults.enter_ms
      ),
      (
        &mut self.motion.pulse_ms,
        defaults.pulse_ms
      ),
      (
        &mut self.motion.exit_ms,
        defaults.exit_ms
      ),
      (
        &mut self.motion.clear_ms,
        defaults.clear_ms
      ),
    ] {
      if *value == 0 {
        *value = fallback;
      }
    }

    self
  }
}
