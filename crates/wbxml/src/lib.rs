//! # wapgate-wbxml
//!
//! A table-driven compiler from markup trees to WBXML.
//!
//! Every supported document type is the same engine run with a different
//! [`DialectConfig`]: token tables for elements, attributes and attribute
//! values, plus a few switches (string table on or off, variables, text
//! handling, structural rules).
//!
//! ## Key Abstractions
//!
//! - [`TokenResolver`]: element and attribute lookup in declaration order.
//! - [`StringTableBuilder`]: the pre-pass that decides which strings are
//!   interned, and [`string_table::splice`] which replaces them in literal runs.
//! - [`BinaryOutput`]: the per-compile buffer (header, table, token stream).
//! - [`variables::scan`]: `$name` / `$(name:mode)` recognition.
//! - [`TreeCompiler`]: the depth-first walk tying the pieces together.
//!
//! The engine only encodes; there is no decoder.

pub mod binary;
pub mod compiler;
pub mod date;
pub mod dialect;
pub mod error;
pub mod resolver;
pub mod string_table;
pub mod text;
pub mod tokens;
pub mod uintvar;
pub mod variables;

pub use binary::{BinaryOutput, Header};
pub use compiler::{CompileStatus, TreeCompiler};
pub use dialect::{
    AttributeEntry, DialectConfig, ElementRule, LiteralMode, TableSwitch, TextPolicy, TokenEntry,
    ValueAttribute, ValueKind, ValueMatch,
};
pub use error::CompileError;
pub use resolver::{AttributeMatch, AttributeResolution, ElementResolution, TokenResolver};
pub use string_table::{StringTable, StringTableBuilder, StringTableEntry};
pub use uintvar::{read_uintvar, uintvar, write_uintvar};
pub use variables::{EscapeMode, Segment};
