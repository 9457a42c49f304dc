//! Type Declarations
//!
//! Scans a namespace block for its top-level `class`, `struct`, `enum`,
//! `interface` and `record` declarations.

use crate::chars;
use crate::enum_member::{self, EnumMember};
use crate::error::{Result, SchemaError};
use crate::keywords::{self, TypeKind, ACCESSIBILITY, TYPEDEF_KINDS, UNUSED_KEYWORDS};
use crate::scope;
use crate::yaml;
use once_cell::sync::Lazy;
use regex::Regex;

/// Declaration header: optional modifiers, the kind keyword and the name.
///
/// Group 1 is the kind, group 2 the name.
static TYPEDEF_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    let modifiers = keywords::alternation(&[ACCESSIBILITY, UNUSED_KEYWORDS].concat());
    let kinds = keywords::alternation(TYPEDEF_KINDS);
    Regex::new(&format!(
        r"(?m)^[ \t]*(?:(?:{})\s+)*({})\s+(\w+)",
        modifiers, kinds
    ))
    .unwrap()
});

/// Members of a declaration, by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeMembers {
    Enum(Vec<EnumMember>),
    /// Member extraction is only implemented for enums.
    Unsupported(TypeKind),
}

/// One top-level type declaration with its normalized source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub name: String,
    pub kind: TypeKind,
    pub code: String,
}

impl TypeDeclaration {
    /// Normalize a captured declaration and read its kind and name back
    /// from the header. The header must declare `expected_name`.
    pub fn resolve(code: &str, expected_name: &str) -> Result<Self> {
        let not_found = || SchemaError::TypedefNotFound {
            name: expected_name.to_string(),
        };

        let code = scope::normalize_block(code);
        let blanked = scope::blank_trivia(&code);
        let caps = TYPEDEF_HEADER_RE.captures(&blanked).ok_or_else(not_found)?;
        let (kind, name) = match (caps.get(1), caps.get(2)) {
            (Some(kind), Some(name)) if name.as_str() == expected_name => (kind, name),
            _ => return Err(not_found()),
        };
        let kind = kind.as_str().parse::<TypeKind>().map_err(|_| not_found())?;
        let name = name.as_str().to_string();

        Ok(Self { name, kind, code })
    }

    pub fn is_enum(&self) -> bool {
        self.kind == TypeKind::Enum
    }

    pub fn members(&self) -> Result<TypeMembers> {
        match self.kind {
            TypeKind::Enum => Ok(TypeMembers::Enum(enum_member::parse_members(&self.code)?)),
            kind => Ok(TypeMembers::Unsupported(kind)),
        }
    }

    /// Render this declaration as a document block. Only enums produce one.
    pub fn export_yaml(&self, indent: usize) -> Result<Option<String>> {
        match self.members()? {
            TypeMembers::Enum(members) => {
                Ok(Some(yaml::serialize_enum(&self.name, &members, indent)))
            }
            TypeMembers::Unsupported(_) => Ok(None),
        }
    }
}

/// Collect the top-level declarations of a namespace block in source order.
///
/// Declarations nested inside another declaration are skipped. Bodiless
/// declarations (`record Point(int X, int Y);`) produce no entry.
pub fn scan(code: &str) -> Result<Vec<TypeDeclaration>> {
    let mut result = Vec::new();
    let mut pos = 0;
    // Headers and braces are located on the blanked copy; spans are cut
    // from `code` at the same offsets.
    let blanked = scope::blank_trivia(code);

    while let Some(caps) = TYPEDEF_HEADER_RE.captures_at(&blanked, pos) {
        let (header, name) = match (caps.get(0), caps.get(2)) {
            (Some(header), Some(name)) => (header, name.as_str()),
            _ => break,
        };
        let not_found = || SchemaError::TypedefNotFound {
            name: name.to_string(),
        };

        match scope::find_first_of(&blanked, header.end(), &[chars::LBRACE, chars::SEMICOLON]) {
            Some((end, chars::SEMICOLON)) => {
                pos = end + 1;
            }
            Some((open, _)) => {
                let close = scope::find_matching_brace(&blanked, open).ok_or_else(not_found)?;
                result.push(TypeDeclaration::resolve(&code[header.start()..=close], name)?);
                pos = close + 1;
            }
            None => return Err(not_found()),
        }
    }

    Ok(result)
}
