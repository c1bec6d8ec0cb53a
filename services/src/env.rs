//! Environment variable readers shared by the configuration layers.
//!
//! All readers treat an empty or whitespace-only value as unset.

use thiserror::Error;

/// Errors raised while reading configuration from the environment.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum EnvError {
    /// Required environment variable is missing or empty.
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A number failed to parse (ports, limits, dimensions).
    #[error("invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g., `EMBEDDING_DIM`).
        var: &'static str,
        /// Human-readable reason (e.g., `expected usize`).
        reason: &'static str,
    },

    /// Value had the wrong format (e.g., unknown similarity metric).
    #[error("invalid value in {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        reason: String,
    },
}

/// Fetches a required, non-empty environment variable.
///
/// # Errors
/// Returns [`EnvError::MissingVar`] if the variable is absent or empty.
pub fn must_env(name: &'static str) -> Result<String, EnvError> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(EnvError::MissingVar(name)),
    }
}

/// Fetches an optional environment variable (`None` if unset/empty).
pub fn env_opt(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Parses an optional `usize` from env (`Ok(None)` if unset/empty).
///
/// # Errors
/// Returns [`EnvError::InvalidNumber`] if the variable is set but not a
/// valid `usize`.
pub fn env_opt_usize(name: &'static str) -> Result<Option<usize>, EnvError> {
    match env_opt(name) {
        Some(v) => v
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| EnvError::InvalidNumber {
                var: name,
                reason: "expected usize",
            }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn must_env_rejects_empty() {
        // SAFETY: tests in this module run single-threaded over unique keys.
        unsafe { std::env::set_var("SVC_TEST_EMPTY", "  ") };
        assert!(matches!(
            must_env("SVC_TEST_EMPTY"),
            Err(EnvError::MissingVar("SVC_TEST_EMPTY"))
        ));
    }

    #[test]
    fn env_opt_usize_parses() {
        unsafe { std::env::set_var("SVC_TEST_NUM", "42") };
        assert_eq!(env_opt_usize("SVC_TEST_NUM").unwrap(), Some(42));

        unsafe { std::env::set_var("SVC_TEST_BAD", "forty-two") };
        assert!(env_opt_usize("SVC_TEST_BAD").is_err());
    }
}
