//! Name-to-token lookup against a dialect's tables.

use crate::dialect::{DialectConfig, TokenEntry, ValueKind, ValueMatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementResolution {
    Token(u8),
    /// Not in the table; written with the literal-name fallback.
    Literal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeMatch {
    pub token: u8,
    pub code_page: u8,
    /// Bytes of the value covered by the start token.
    pub consumed: usize,
    pub kind: ValueKind,
    /// The entry named a value, i.e. the token encodes part of the value
    /// and not just the attribute name.
    pub tokenized_value: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeResolution {
    Match(AttributeMatch),
    Literal,
}

/// A piece of an attribute value after value-token splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuePiece<'a> {
    Literal(&'a str),
    Token(u8),
}

#[derive(Debug, Clone, Copy)]
pub struct TokenResolver<'c> {
    config: &'c DialectConfig,
}

impl<'c> TokenResolver<'c> {
    pub fn new(config: &'c DialectConfig) -> Self {
        Self { config }
    }

    pub fn resolve_element(&self, name: &str) -> ElementResolution {
        self.resolve_element_in(self.config.elements, name)
    }

    /// Looks `name` up in an explicit element table (used while a table
    /// switch is active).
    pub fn resolve_element_in(&self, table: &[TokenEntry], name: &str) -> ElementResolution {
        table
            .iter()
            .find(|entry| self.config.names_match(entry.name, name))
            .map_or(ElementResolution::Literal, |entry| {
                ElementResolution::Token(entry.token)
            })
    }

    /// First entry in declaration order whose name matches and whose value
    /// prefix (if any) matches `value`.
    pub fn resolve_attribute(&self, name: &str, value: &str) -> AttributeResolution {
        for entry in self.config.attributes {
            if !self.config.names_match(entry.name, name) {
                continue;
            }
            let consumed = match entry.value_prefix {
                None => Some(0),
                Some(prefix) => self.value_matches(prefix, value),
            };
            if let Some(consumed) = consumed {
                return AttributeResolution::Match(AttributeMatch {
                    token: entry.token,
                    code_page: entry.code_page,
                    consumed,
                    kind: entry.kind,
                    tokenized_value: entry.value_prefix.is_some(),
                });
            }
        }
        AttributeResolution::Literal
    }

    fn value_matches(&self, prefix: &str, value: &str) -> Option<usize> {
        let eq = |a: &[u8], b: &[u8]| {
            if self.config.case_sensitive {
                a == b
            } else {
                a.eq_ignore_ascii_case(b)
            }
        };
        match self.config.value_match {
            ValueMatch::Prefix => {
                let head = value.as_bytes().get(..prefix.len())?;
                eq(head, prefix.as_bytes()).then_some(prefix.len())
            }
            ValueMatch::Whole => eq(value.as_bytes(), prefix.as_bytes()).then_some(value.len()),
        }
    }

    /// Splits a value remainder on the value tokens for `kind`.
    ///
    /// Tokens are tried once each, in table order, against what is left
    /// after the previous hit; text before a hit is never re-examined for
    /// tokens later in the table.
    pub fn split_value<'v>(&self, value: &'v str, kind: ValueKind) -> Vec<ValuePiece<'v>> {
        let table = match kind {
            ValueKind::Text => self.config.values,
            ValueKind::Url => self.config.url_values,
            ValueKind::Date => &[],
        };
        let mut pieces = Vec::new();
        let mut rest = value;
        for entry in table {
            if rest.is_empty() {
                break;
            }
            let Some(at) = rest.find(entry.name) else {
                continue;
            };
            if at > 0 {
                pieces.push(ValuePiece::Literal(&rest[..at]));
            }
            pieces.push(ValuePiece::Token(entry.token));
            rest = &rest[at + entry.name.len()..];
        }
        if !rest.is_empty() {
            pieces.push(ValuePiece::Literal(rest));
        }
        pieces
    }
}
