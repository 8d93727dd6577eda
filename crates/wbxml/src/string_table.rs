//! String table: interning pre-pass and literal splicing.
//!
//! The table is filled by [`StringTableBuilder`] before any token is written,
//! so offsets handed out during the walk never move. Variable names interned
//! later are appended behind the pre-pass entries.

use crate::text::{shrink_blanks, strip_non_alphanumerics};
use crate::tokens::STRING_TABLE_MIN;
use indexmap::IndexMap;
use memchr::memmem;
use std::collections::HashMap;
use wapgate_markup::charset::Charset;
use wapgate_markup::{MarkupNode, NodeKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTableEntry {
    pub offset: u32,
    pub bytes: Vec<u8>,
}

/// Append-only pool of NUL-terminated strings addressed by byte offset.
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    entries: Vec<StringTableEntry>,
    index: HashMap<Vec<u8>, u32>,
    length: u32,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `bytes`, returning the offset of the existing copy if there is one.
    pub fn add(&mut self, bytes: &[u8]) -> u32 {
        if let Some(&offset) = self.index.get(bytes) {
            return offset;
        }
        let offset = self.length;
        self.length += bytes.len() as u32 + 1;
        self.index.insert(bytes.to_vec(), offset);
        self.entries.push(StringTableEntry {
            offset,
            bytes: bytes.to_vec(),
        });
        offset
    }

    pub fn offset_of(&self, bytes: &[u8]) -> Option<u32> {
        self.index.get(bytes).copied()
    }

    pub fn entries(&self) -> &[StringTableEntry] {
        &self.entries
    }

    /// Size of the serialized table in bytes, terminators included.
    pub fn byte_len(&self) -> u32 {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        for entry in &self.entries {
            out.extend_from_slice(&entry.bytes);
            out.push(0x00);
        }
    }
}

/// Selects the strings of a document worth interning.
///
/// Text nodes and attribute values are normalized (blank runs collapsed,
/// trimmed, and for long strings, punctuation stripped from both ends).
/// Whole strings seen more than once are interned in first-seen order; the
/// words of the remaining strings then get the same treatment. Entries are
/// stored encoded in the output charset.
#[derive(Debug, Default)]
pub struct StringTableBuilder {
    candidates: Vec<String>,
    charset: Charset,
}

impl StringTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// Collects candidates from `root` and its descendants in document order.
    pub fn collect(&mut self, root: &MarkupNode) {
        for node in root.descendants() {
            match node.kind {
                NodeKind::Text => {
                    if let Some(content) = &node.content {
                        self.push_candidate(content);
                    }
                }
                NodeKind::Element => {
                    for (_, value) in &node.attributes {
                        self.push_candidate(value);
                    }
                }
                _ => {}
            }
        }
    }

    pub fn push_candidate(&mut self, raw: &str) {
        let shrunk = shrink_blanks(raw);
        let mut candidate = shrunk.trim();
        if candidate.len() > STRING_TABLE_MIN {
            candidate = strip_non_alphanumerics(candidate);
        }
        if candidate.len() > STRING_TABLE_MIN {
            self.candidates.push(candidate.to_string());
        }
    }

    pub fn build(self) -> StringTable {
        let mut table = StringTable::new();
        let singles = intern_repeated(tally(self.candidates), &self.charset, &mut table);
        let words = singles
            .iter()
            .flat_map(|s| s.split_whitespace().map(str::to_string))
            .collect::<Vec<_>>();
        intern_repeated(tally(words), &self.charset, &mut table);
        log::debug!(
            "String table holds {} entries ({} bytes)",
            table.entries().len(),
            table.byte_len()
        );
        table
    }
}

fn tally(strings: impl IntoIterator<Item = String>) -> IndexMap<String, usize> {
    let mut counts = IndexMap::new();
    for s in strings {
        *counts.entry(s).or_insert(0) += 1;
    }
    counts
}

/// Interns every string seen more than once; returns the rest.
fn intern_repeated(
    counts: IndexMap<String, usize>,
    charset: &Charset,
    table: &mut StringTable,
) -> Vec<String> {
    let mut rejected = Vec::new();
    for (s, count) in counts {
        if count > 1 && s.len() > STRING_TABLE_MIN {
            table.add(&charset.encode(&s));
        } else {
            rejected.push(s);
        }
    }
    rejected
}

/// One piece of a spliced literal run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Written as `STR_I bytes STR_END`.
    Inline(&'a [u8]),
    /// Written as `STR_T offset`.
    Reference(u32),
}

/// Splits `run` into inline pieces and table references.
///
/// Entries are tried once each, in table order, against the span left over
/// after the previous reference. Text before a hit becomes an inline piece;
/// the span after it carries on to the next entry. Entries no longer than
/// [`STRING_TABLE_MIN`] (variable names) never take part.
pub fn splice<'a>(run: &'a [u8], table: &StringTable) -> Vec<Piece<'a>> {
    let mut pieces = Vec::new();
    let mut remaining = run;
    for entry in table
        .entries()
        .iter()
        .filter(|e| e.bytes.len() > STRING_TABLE_MIN)
    {
        if remaining.is_empty() {
            break;
        }
        let Some(at) = memmem::find(remaining, &entry.bytes) else {
            continue;
        };
        if at > 0 {
            pieces.push(Piece::Inline(&remaining[..at]));
        }
        pieces.push(Piece::Reference(entry.offset));
        remaining = &remaining[at + entry.bytes.len()..];
    }
    if !remaining.is_empty() {
        pieces.push(Piece::Inline(remaining));
    }
    pieces
}
