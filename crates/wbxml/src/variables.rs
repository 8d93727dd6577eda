//! WML variable references.
//!
//! Three forms are recognized: `$$` (a literal dollar), `$name` and
//! `$(name[:mode])`. A malformed reference is dropped on its own; scanning
//! resumes right after the span it consumed.

use crate::tokens::{EXT_T_0, EXT_T_1, EXT_T_2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EscapeMode {
    Escape,
    Unescape,
    #[default]
    NoEscape,
}

impl EscapeMode {
    /// Extension token announcing a variable in this mode.
    pub fn token(self) -> u8 {
        match self {
            EscapeMode::Escape => EXT_T_0,
            EscapeMode::Unescape => EXT_T_1,
            EscapeMode::NoEscape => EXT_T_2,
        }
    }

    /// Parses a `:mode` keyword, case-insensitively.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "escape" | "e" => Some(EscapeMode::Escape),
            "unesc" | "u" => Some(EscapeMode::Unescape),
            "noesc" | "n" => Some(EscapeMode::NoEscape),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Variable { name: String, mode: EscapeMode },
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

enum Reference {
    Dollar,
    Variable(String, EscapeMode),
    Malformed(&'static str),
}

/// Parses the reference that follows a `$`. Returns the number of bytes
/// consumed after the `$` and what was found.
fn parse_reference(after: &str, default_mode: EscapeMode) -> (usize, Reference) {
    if after.starts_with('$') {
        return (1, Reference::Dollar);
    }

    if let Some(body) = after.strip_prefix('(') {
        let Some(close) = body.find(')') else {
            return (after.len(), Reference::Malformed("unterminated '$('"));
        };
        let consumed = close + 2;
        let (name, mode) = match body[..close].split_once(':') {
            Some((name, keyword)) => match EscapeMode::from_keyword(keyword) {
                Some(mode) => (name, mode),
                None => return (consumed, Reference::Malformed("unknown escape mode")),
            },
            None => (&body[..close], default_mode),
        };
        if !is_valid_name(name) {
            return (consumed, Reference::Malformed("invalid variable name"));
        }
        return (consumed, Reference::Variable(name.to_string(), mode));
    }

    let run = after
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(after.len());
    let name = &after[..run];
    if is_valid_name(name) {
        (run, Reference::Variable(name.to_string(), default_mode))
    } else if name.is_empty() {
        (0, Reference::Malformed("'$' without a variable name"))
    } else {
        (run, Reference::Malformed("variable name starts with a digit"))
    }
}

/// Splits `text` into literal runs and variable references.
///
/// Adjacent literal text (including `$$` escapes) is merged into a single
/// [`Segment::Literal`]. Malformed references produce no segment at all.
pub fn scan(text: &str, default_mode: EscapeMode) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    while let Some(at) = rest.find('$') {
        literal.push_str(&rest[..at]);
        let after = &rest[at + 1..];
        let (consumed, reference) = parse_reference(after, default_mode);
        match reference {
            Reference::Dollar => literal.push('$'),
            Reference::Variable(name, mode) => {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Variable { name, mode });
            }
            Reference::Malformed(reason) => {
                log::warn!(
                    "Dropping malformed variable reference '${}': {}",
                    &after[..consumed],
                    reason
                );
            }
        }
        rest = &after[consumed..];
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}
