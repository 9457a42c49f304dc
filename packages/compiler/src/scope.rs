//! Scope Scanner
//!
//! Locates brace-delimited regions in declaration source text by counting
//! brace depth. Braces inside string literals, character literals and
//! comments never count.

use crate::chars;
use std::iter::Peekable;
use std::str::CharIndices;

/// Iterator over the code characters of a source text.
///
/// Yields `(byte_offset, char)` for every character outside comments and
/// literals. Literal and comment delimiters themselves are not yielded.
pub struct CodeChars<'a> {
    chars: Peekable<CharIndices<'a>>,
    prev: Option<char>,
    prev2: Option<char>,
}

impl<'a> CodeChars<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.char_indices().peekable(),
            prev: None,
            prev2: None,
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn remember(&mut self, c: char) {
        self.prev2 = self.prev;
        self.prev = Some(c);
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek_char() {
            if chars::is_newline(c) {
                break;
            }
            self.chars.next();
        }
    }

    fn skip_block_comment(&mut self) {
        // consume the opening '*'
        self.chars.next();
        while let Some((_, c)) = self.chars.next() {
            if c == chars::STAR && self.peek_char() == Some(chars::SLASH) {
                self.chars.next();
                break;
            }
        }
    }

    fn skip_string(&mut self, verbatim: bool) {
        while let Some((_, c)) = self.chars.next() {
            if verbatim {
                if c == chars::DQ {
                    if self.peek_char() == Some(chars::DQ) {
                        self.chars.next();
                        continue;
                    }
                    break;
                }
            } else if c == chars::BACKSLASH {
                self.chars.next();
            } else if c == chars::DQ || chars::is_newline(c) {
                break;
            }
        }
    }

    fn skip_char_literal(&mut self) {
        while let Some((_, c)) = self.chars.next() {
            if c == chars::BACKSLASH {
                self.chars.next();
            } else if c == chars::SQ || chars::is_newline(c) {
                break;
            }
        }
    }

    /// `@"..."`, `@$"..."` and `$@"..."` are verbatim strings.
    fn at_verbatim_prefix(&self) -> bool {
        self.prev == Some(chars::AT)
            || (self.prev == Some(chars::DOLLAR) && self.prev2 == Some(chars::AT))
    }
}

impl Iterator for CodeChars<'_> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (offset, c) = self.chars.next()?;
            match c {
                chars::SLASH if self.peek_char() == Some(chars::SLASH) => {
                    self.skip_line_comment();
                }
                chars::SLASH if self.peek_char() == Some(chars::STAR) => {
                    self.skip_block_comment();
                }
                chars::DQ => {
                    let verbatim = self.at_verbatim_prefix();
                    self.skip_string(verbatim);
                    self.remember(chars::DQ);
                }
                chars::SQ => {
                    self.skip_char_literal();
                    self.remember(chars::SQ);
                }
                _ => {
                    self.remember(c);
                    return Some((offset, c));
                }
            }
        }
    }
}

/// First code character at or after `from` that is one of `targets`.
pub fn find_first_of(text: &str, from: usize, targets: &[char]) -> Option<(usize, char)> {
    CodeChars::new(&text[from..])
        .find(|(_, c)| targets.contains(c))
        .map(|(offset, c)| (from + offset, c))
}

/// Byte offset of the first `{` at or after `from` that is not inside a
/// literal or comment.
pub fn find_block_open(text: &str, from: usize) -> Option<usize> {
    find_first_of(text, from, &[chars::LBRACE]).map(|(offset, _)| offset)
}

/// Byte offset of the `}` closing the brace at `open`.
///
/// Returns `None` when `open` is not a `{` or the region never closes.
pub fn find_matching_brace(text: &str, open: usize) -> Option<usize> {
    if !text[open..].starts_with(chars::LBRACE) {
        return None;
    }

    let mut depth = 0usize;
    for (offset, c) in CodeChars::new(&text[open..]) {
        if c == chars::LBRACE {
            depth += 1;
        } else if c == chars::RBRACE {
            depth -= 1;
            if depth == 0 {
                return Some(open + offset);
            }
        }
    }
    None
}

/// Copy of `text` with comments and literals blanked out.
///
/// Every skipped character becomes spaces of the same byte length and line
/// breaks are kept, so byte offsets into the copy are valid in `text`.
pub fn blank_trivia(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (offset, c) in CodeChars::new(text) {
        push_blanked(&mut out, &text[last..offset]);
        out.push(c);
        last = offset + c.len_utf8();
    }
    push_blanked(&mut out, &text[last..]);
    out
}

fn push_blanked(out: &mut String, skipped: &str) {
    for c in skipped.chars() {
        if chars::is_newline(c) {
            out.push(c);
        } else {
            out.extend(std::iter::repeat(' ').take(c.len_utf8()));
        }
    }
}

/// Remove the longest leading whitespace shared by all non-blank lines.
/// Whitespace-only lines become empty.
pub fn dedent(text: &str) -> String {
    let mut margin: Option<&str> = None;
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let indent = &line[..line.len() - line.trim_start().len()];
        margin = Some(match margin {
            None => indent,
            Some(current) => common_prefix(current, indent),
        });
    }
    let margin_len = margin.map(str::len).unwrap_or(0);

    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                &line[margin_len..]
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, x), y)| x != y)
        .map(|((i, _), _)| i)
        .unwrap_or_else(|| a.len().min(b.len()));
    &a[..end]
}

/// Dedent a captured region and strip surrounding blank lines.
pub fn normalize_block(text: &str) -> String {
    dedent(text).trim().to_string()
}
