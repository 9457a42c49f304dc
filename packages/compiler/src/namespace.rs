//! Namespace Extraction
//!
//! Finds the `namespace <Name> { ... }` region of a declaration file and
//! normalizes it into a standalone block.

use crate::error::{Result, SchemaError};
use crate::scope;
use crate::typedef::{self, TypeDeclaration};
use once_cell::sync::Lazy;
use regex::Regex;

/// Regex to read the name back out of a normalized namespace block
static NAMESPACE_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"namespace\s+(\w+)").unwrap());

/// The normalized text of one namespace, header and closing brace included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub name: String,
    pub code: String,
}

impl Namespace {
    /// Extract the first namespace called `name` from `source`.
    pub fn extract(source: &str, name: &str) -> Result<Self> {
        let not_found = || SchemaError::NamespaceNotFound {
            name: name.to_string(),
        };

        let header = Regex::new(&format!(
            r"(?m)^[ \t]*namespace\s+{}\b",
            regex::escape(name)
        ))
        .map_err(|_| not_found())?;
        // Match on a blanked copy so headers and braces inside comments or
        // literals are never seen. Offsets are shared with `source`.
        let blanked = scope::blank_trivia(source);
        let header_match = header.find(&blanked).ok_or_else(not_found)?;

        let open = scope::find_block_open(&blanked, header_match.end()).ok_or_else(not_found)?;
        // Anything but whitespace between the name and `{` means this is not
        // a block namespace (e.g. `namespace FlatData;`).
        if !blanked[header_match.end()..open].trim().is_empty() {
            return Err(not_found());
        }
        let close = scope::find_matching_brace(&blanked, open).ok_or_else(not_found)?;

        let code = scope::normalize_block(&source[header_match.start()..=close]);
        let name = NAMESPACE_NAME_RE
            .captures(&code)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(not_found)?;

        Ok(Self { name, code })
    }

    /// Top-level type declarations of this namespace, in source order.
    pub fn typedefs(&self) -> Result<Vec<TypeDeclaration>> {
        typedef::scan(&self.code)
    }
}
