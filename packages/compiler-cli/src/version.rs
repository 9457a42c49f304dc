//! Version
//!
//! Version information for the CLI.

/// Schema generator version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version string shown in diagnostics.
pub fn version_string() -> String {
    format!("schegen v{}", VERSION)
}
