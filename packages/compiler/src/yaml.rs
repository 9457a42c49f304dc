//! Enum Document Serializer
//!
//! Renders enums as a small YAML subset:
//!
//! ```text
//! Color:
//!   - Red: 0
//!   - Blue:
//! ```
//!
//! Blocks are separated by one blank line and the document has no trailing
//! newline. A reader for the same layout is provided for round-tripping.

use crate::enum_member::EnumMember;
use crate::error::{Result, SchemaError};
use crate::typedef::TypeDeclaration;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// Default number of spaces before each member entry
pub const DEFAULT_INDENT: usize = 2;

/// Separator between two enum blocks
const BLOCK_SEPARATOR: &str = "\n\n";

static KEY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+):\s*$").unwrap());

static ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*-\s+(\w+):(?:[ \t]+(-?\d+))?[ \t]*$").unwrap());

/// Serialize one enum. Members without an explicit value render with an
/// empty value after `: `.
pub fn serialize_enum(name: &str, members: &[EnumMember], indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut lines = Vec::with_capacity(members.len() + 1);
    lines.push(format!("{}:", name));
    for member in members {
        lines.push(format!(
            "{}- {}: {}",
            pad,
            member.name,
            member.value.as_deref().unwrap_or("")
        ));
    }
    lines.join("\n")
}

/// Serialize every enum among `typedefs`; other kinds are skipped.
pub fn render_document(typedefs: &[TypeDeclaration], indent: usize) -> Result<String> {
    let mut blocks = Vec::new();
    for typedef in typedefs {
        if let Some(block) = typedef.export_yaml(indent)? {
            blocks.push(block);
        }
    }
    Ok(blocks.join(BLOCK_SEPARATOR))
}

/// Read a document produced by [`render_document`] back into
/// `enum name -> members`, preserving order.
pub fn read_enum_document(text: &str) -> Result<IndexMap<String, Vec<EnumMember>>> {
    let mut result: IndexMap<String, Vec<EnumMember>> = IndexMap::new();
    let mut current: Option<String> = None;

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let malformed = || SchemaError::MalformedDocument {
            line_number: index + 1,
            line: line.to_string(),
        };

        if let Some(caps) = KEY_RE.captures(line) {
            let name = caps[1].to_string();
            result.entry(name.clone()).or_default();
            current = Some(name);
        } else if let Some(caps) = ITEM_RE.captures(line) {
            let key = current.as_ref().ok_or_else(malformed)?;
            let member = EnumMember::new(&caps[1], caps.get(2).map(|m| m.as_str()));
            result.entry(key.clone()).or_default().push(member);
        } else {
            return Err(malformed());
        }
    }

    Ok(result)
}
