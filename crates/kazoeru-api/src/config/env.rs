//! Config loading from environment variables

use std::net::SocketAddr;

use super::constants::{BIND_ADDR_ENV, DEFAULT_BIND_ADDR};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:8000")
  pub bind_addr: SocketAddr,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary variable lookup
  ///
  /// `from_env` delegates here; tests pass a closure instead of mutating the
  /// process environment.
  ///
  /// # Errors
  /// Returns an error if the bind address cannot be parsed
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let raw = lookup(BIND_ADDR_ENV).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let bind_addr = raw.trim().parse::<SocketAddr>().map_err(|e| {
      ApiError::config(format!("{BIND_ADDR_ENV} が不正です: {raw:?} ({e})"))
    })?;

    Ok(Self { bind_addr })
  }
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn config_defaults_when_unset() {
    let config = Config::from_lookup(|_| None).unwrap();
    assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    assert_eq!(config, Config::default());
  }

  #[test]
  fn config_reads_bind_addr() {
    let config = Config::from_lookup(|key| {
      assert_eq!(key, BIND_ADDR_ENV);
      Some("0.0.0.0:9090".to_string())
    })
    .unwrap();
    assert_eq!(config.bind_addr.port(), 9090);
    assert!(config.bind_addr.ip().is_unspecified());
  }

  #[test]
  fn config_trims_whitespace() {
    let config = Config::from_lookup(|_| Some(" 127.0.0.1:1234\n".to_string())).unwrap();
    assert_eq!(config.bind_addr.port(), 1234);
  }

  #[test]
  fn config_rejects_invalid_addr() {
    let err = Config::from_lookup(|_| Some("localhost".to_string())).unwrap_err();
    assert_eq!(err.code(), "config_error");
    assert!(err.to_string().contains(BIND_ADDR_ENV));
  }

  #[test]
  fn config_from_env_does_not_panic() {
    // 環境変数が設定されていればその値、なければデフォルト値
    // Rust 2024 では set_var / remove_var が unsafe のため、ここでは触らない
    if std::env::var(BIND_ADDR_ENV).is_err() {
      assert_eq!(Config::from_env().unwrap(), Config::default());
    }
  }
}
