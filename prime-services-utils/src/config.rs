use std::env;
use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid socket address in {var}: {source}")]
    BadAddr {
        var: &'static str,
        source: AddrParseError,
    },
}

/// Returns the value of `var`, or `default` when unset.
pub fn var_or(var: &str, default: &str) -> String {
    env::var(var).unwrap_or_else(|_| default.to_owned())
}

/// Resolves a bind address from `var`, falling back to `default` when unset.
pub fn bind_addr_from_env(
    var: &'static str,
    default: SocketAddr,
) -> Result<SocketAddr, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .parse()
            .map_err(|source| ConfigError::BadAddr { var, source }),
        Err(_) => Ok(default),
    }
}
