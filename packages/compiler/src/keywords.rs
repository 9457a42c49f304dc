//! Declaration Keywords
//!
//! Keyword tables recognized in front of a type declaration. Modifiers are
//! only skipped; the declaration kind is the one keyword that is kept.

use std::fmt;
use std::str::FromStr;

/// Modifiers with no bearing on the extracted schema.
pub const UNUSED_KEYWORDS: &[&str] = &[
    "abstract",
    "checked",
    "const",
    "default",
    "event",
    "explicit",
    "extern",
    "fixed",
    "implicit",
    "new",
    "override",
    "readonly",
    "ref",
    "sealed",
    "stackalloc",
    "static",
    "unchecked",
    "unsafe",
    "virtual",
    "volatile",
    // `partial class`, `record struct`
    "partial",
    "record",
];

pub const ACCESSIBILITY: &[&str] = &[
    "private",
    "private protected",
    "internal",
    "protected",
    "protected internal",
    "public",
];

pub const TYPEDEF_KINDS: &[&str] = &["class", "struct", "enum", "interface", "record"];

/// Kind of a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Struct,
    Enum,
    Interface,
    Record,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
            TypeKind::Enum => "enum",
            TypeKind::Interface => "interface",
            TypeKind::Record => "record",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "class" => Ok(TypeKind::Class),
            "struct" => Ok(TypeKind::Struct),
            "enum" => Ok(TypeKind::Enum),
            "interface" => Ok(TypeKind::Interface),
            "record" => Ok(TypeKind::Record),
            _ => Err(format!("unknown declaration kind `{}`", s)),
        }
    }
}

/// Build a regex alternation from a keyword table. Multi-word keywords
/// accept any whitespace between their words.
pub fn alternation(keywords: &[&str]) -> String {
    keywords
        .iter()
        .map(|kw| {
            kw.split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .collect::<Vec<_>>()
        .join("|")
}
