//! Infrastructure layer: config, errors, logging, and test stubs.

pub mod config;
pub mod error;
pub mod logging;
#[cfg(test)]
pub mod stubs;

/// Returns the infra module name for smoke checks.
pub fn module_name() -> &'static str {
    "infra"
}
