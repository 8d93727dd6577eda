//! # wapgate-markup
//!
//! The document model consumed by the WBXML compilers, and the reader that
//! builds it from XML source text.
//!
//! ## Key Abstractions
//!
//! - [`MarkupNode`]: an owned element/text/CDATA/comment/PI node with ordered
//!   attributes and children. Siblings are the neighbouring entries of the
//!   parent's `children` vector.
//! - [`MarkupDocument`]: the root element plus the DOCTYPE public identifier,
//!   which some dialects use to pick header constants.
//! - [`parse_document`]: an event-driven reader that builds a document with an
//!   element stack.
//! - [`charset`]: IANA MIBenum lookup for the header charset field, and
//!   the codec used to decode sources and encode compiled strings.

pub mod charset;
pub mod error;
pub mod node;
pub mod parser;

pub use error::{Location, MarkupError};
pub use node::{MarkupDocument, MarkupNode, NodeKind};
pub use parser::parse_document;
