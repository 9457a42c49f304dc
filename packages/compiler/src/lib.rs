#![deny(clippy::all)]

/**
 * Schema Generator - Enum Extraction
 *
 * Extracts enum declarations from a namespace of type declarations and
 * renders them as a YAML document
 */

// Core modules
pub mod chars;
pub mod compiler;
mod error;
pub mod keywords;
pub mod scope;

// Declaration modules
pub mod enum_member;
pub mod namespace;
pub mod typedef;

// Output
pub mod yaml;

// Re-exports
pub use compiler::{compile, CompileOptions, CompileOutput, DEFAULT_NAMESPACE};
pub use enum_member::EnumMember;
pub use error::{Result, SchemaError};
pub use keywords::TypeKind;
pub use namespace::Namespace;
pub use typedef::{TypeDeclaration, TypeMembers};
pub use yaml::DEFAULT_INDENT;
