//! Enum Members
//!
//! Reads `Name` / `Name = 42` entries out of an enum declaration.

use crate::error::{Result, SchemaError};
use crate::scope;
use once_cell::sync::Lazy;
use regex::Regex;

/// Regex to match one member line: identifier and optional integer value
static ENUM_MEMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([\p{L}_]\w*)(?:\s*=\s*(-?\d+)\b)?").unwrap());

/// One enum member. `value` is `None` when the member takes its value from
/// its position; that value is not computed here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumMember {
    pub name: String,
    pub value: Option<String>,
}

impl EnumMember {
    pub fn new(name: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            name: name.into(),
            value: value.map(str::to_string),
        }
    }
}

/// Parse a single line expected to hold exactly one member.
pub fn parse_member(line: &str) -> Result<EnumMember> {
    let caps = ENUM_MEMBER_RE
        .captures(line)
        .ok_or_else(|| SchemaError::EnumMemberNotFound {
            line: line.to_string(),
        })?;

    let name = caps.get(1).map(|m| m.as_str()).unwrap_or("");
    let value = caps.get(2).map(|m| m.as_str());
    Ok(EnumMember::new(name, value))
}

/// Parse the members of an enum in source order.
///
/// `code` is either a whole declaration, in which case only the lines
/// between its braces are read, or a bare member list. Comments are
/// ignored, as are lines that do not start with an identifier (attributes,
/// blank lines, the wrapped tail of a value).
pub fn parse_members(code: &str) -> Result<Vec<EnumMember>> {
    let body = match scope::find_block_open(code, 0) {
        Some(open) => {
            let close = scope::find_matching_brace(code, open).unwrap_or(code.len());
            &code[open + 1..close]
        }
        None => code,
    };

    scope::blank_trivia(body)
        .lines()
        .filter(|line| ENUM_MEMBER_RE.is_match(line))
        .map(parse_member)
        .collect()
}
