/*
 * Character Codes
 *
 * Delimiters recognized while scanning declaration source text
 */

//! Character constants used by the scope scanner

pub const LF: char = '\n';
pub const CR: char = '\r';

pub const DQ: char = '"';
pub const SQ: char = '\'';
pub const AT: char = '@';
pub const DOLLAR: char = '$';
pub const BACKSLASH: char = '\\';
pub const SLASH: char = '/';
pub const STAR: char = '*';

// Braces
pub const LBRACE: char = '{';
pub const RBRACE: char = '}';

pub const SEMICOLON: char = ';';

/// Check if character is a line terminator
pub fn is_newline(code: char) -> bool {
    code == LF || code == CR
}
