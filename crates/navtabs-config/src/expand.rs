//! `${VAR}` substitution in `assets.base_url`.
//!
//! Lets one `tabs.toml` point at different static hosts, e.g.
//! `base_url = "${NAVTABS_STATIC_URL:-/static}"`. An unset variable without a
//! `:-` fallback is a configuration error.

use crate::ConfigError;

/// Substitute braced variables in `value`, naming `field` on failure.
///
/// Only `${...}` is recognised; a bare `$` (as in `/$static`) is kept.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let lookup = |var: &str| std::env::var(var).map(Some).map_err(|_| UnsetVar(var.to_owned()));
    match shellexpand::env_with_context(value, lookup) {
        Ok(expanded) => Ok(expanded.into_owned()),
        Err(err) => Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("environment variable {} is not set", err.cause.0),
        }),
    }
}

struct UnsetVar(String);
