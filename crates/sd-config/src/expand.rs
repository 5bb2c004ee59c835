//! `${VAR}` and `${VAR:-default}` expansion for declaration strings.

use std::borrow::Cow;

use crate::ConfigError;

/// Expand `${...}` references in the value of `field`.
///
/// Values without `${` pass through untouched, so a bare `$` in a URL
/// is never treated as a variable.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let lookup = |name: &str| std::env::var(name).map(Some).map_err(|_| name.to_owned());
    shellexpand::env_with_context(value, lookup)
        .map(Cow::into_owned)
        .map_err(|err| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", err.cause),
        })
}
