#![deny(clippy::all)]

/**
 * Schema Generator CLI
 *
 * Command-line driver, configuration and logging for enum extraction
 */
// Re-export compiler for convenience
pub use schegen_compiler as compiler;

// CLI-specific modules
pub mod config;
pub mod logging;
pub mod main_entry;
pub mod version;

/// CLI version
pub fn version() -> &'static str {
    version::VERSION
}
