//! Schema Extraction Errors
//!
//! Every variant is fatal for the conversion that raised it.

use thiserror::Error;

/// Error raised while extracting declarations or reading an output document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// No brace-delimited `namespace <name>` region exists in the source.
    #[error("can't find valid `namespace {name}` in source")]
    NamespaceNotFound { name: String },

    /// A declaration header was found but its body could not be resolved.
    #[error("can't find valid `class`, `struct`, `enum`, `interface` or `record` named `{name}`")]
    TypedefNotFound { name: String },

    /// A line expected to hold an enum member does not.
    #[error("can't find valid enum member in `{line}`")]
    EnumMemberNotFound { line: String },

    /// Reserved for class and struct member extraction.
    #[error("can't find valid class or struct field, property or method in `{line}`")]
    EncapMemberNotFound { line: String },

    #[error("malformed document at line {line_number}: `{line}`")]
    MalformedDocument { line_number: usize, line: String },
}

pub type Result<T> = std::result::Result<T, SchemaError>;
