//! The tree compiler.
//!
//! One depth-first walk over the markup tree writes the token stream. Each
//! node is visited before its children and reports whether it opened
//! content; the walk appends `END` after the children of those that did.
//! The walk keeps its own stack of sibling lists, so nesting depth is only
//! bounded by memory. Recoverable problems are logged and compiled around,
//! fatal ones abort the walk and the partial output is dropped.

use crate::binary::{BinaryOutput, Header};
use crate::date::pack_date;
use crate::dialect::{DialectConfig, ElementRule, LiteralMode, TextPolicy, TokenEntry, ValueKind};
use crate::error::CompileError;
use crate::resolver::{
    AttributeMatch, AttributeResolution, ElementResolution, TokenResolver, ValuePiece,
};
use crate::string_table::{StringTable, StringTableBuilder};
use crate::text::shrink_blanks;
use crate::tokens::{ATTR_BIT, CONTENT_BIT, END, LITERAL, OPAQUE};
use crate::variables::{EscapeMode, Segment, is_valid_name, scan};
use std::collections::HashSet;
use wapgate_markup::charset::Charset;
use wapgate_markup::{MarkupNode, NodeKind};

/// Outcome of visiting one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileStatus {
    NoEndTag,
    NeedsEndTag,
    /// The node was dropped together with its subtree.
    Skipped,
}

/// Mutable state of one walk.
#[derive(Debug)]
struct WalkContext {
    elements: &'static [TokenEntry],
    text: TextPolicy,
    switched: bool,
}

impl WalkContext {
    fn new(config: &DialectConfig) -> Self {
        Self {
            elements: config.elements,
            text: config.text,
            switched: false,
        }
    }
}

/// A sibling list being walked, and whether its parent waits for an `END`.
struct Frame<'t> {
    siblings: &'t [MarkupNode],
    next: usize,
    close: bool,
}

/// An attribute that survived validation, ready to be written.
enum PlannedAttribute<'v> {
    Literal { name: &'v str, value: &'v str },
    Token {
        name: &'v str,
        m: AttributeMatch,
        rest: &'v str,
        date: Option<Vec<u8>>,
    },
}

pub struct TreeCompiler<'c> {
    config: &'c DialectConfig,
    resolver: TokenResolver<'c>,
}

impl<'c> TreeCompiler<'c> {
    pub fn new(config: &'c DialectConfig) -> Self {
        Self {
            config,
            resolver: TokenResolver::new(config),
        }
    }

    pub fn config(&self) -> &DialectConfig {
        self.config
    }

    /// Compiles the tree rooted at `root` into a complete WBXML document
    /// with UTF-8 strings.
    pub fn compile(&self, root: &MarkupNode, header: Header) -> Result<Vec<u8>, CompileError> {
        self.compile_with_charset(root, header, Charset::utf8())
    }

    /// Like [`TreeCompiler::compile`], writing every string in `charset`.
    /// `header.charset` should name the same charset.
    pub fn compile_with_charset(
        &self,
        root: &MarkupNode,
        header: Header,
        charset: Charset,
    ) -> Result<Vec<u8>, CompileError> {
        let table = match self.config.literal_mode {
            LiteralMode::Tabled => {
                let mut builder = StringTableBuilder::new().with_charset(charset);
                builder.collect(root);
                builder.build()
            }
            LiteralMode::Simple => StringTable::new(),
        };
        let mut out =
            BinaryOutput::new(header, self.config.literal_mode, table).with_charset(charset);
        let mut ctx = WalkContext::new(self.config);

        self.walk(root, &mut out, &mut ctx)?;

        log::debug!(
            "Compiled {} document: {} stream bytes, {} string table bytes",
            self.config.name,
            out.stream().len(),
            out.table().byte_len()
        );
        Ok(out.into_bytes())
    }

    fn walk(
        &self,
        root: &MarkupNode,
        out: &mut BinaryOutput,
        ctx: &mut WalkContext,
    ) -> Result<(), CompileError> {
        let mut stack = vec![Frame {
            siblings: std::slice::from_ref(root),
            next: 0,
            close: false,
        }];
        while let Some(frame) = stack.last_mut() {
            let (siblings, index) = (frame.siblings, frame.next);
            let Some(node) = siblings.get(index) else {
                let close = frame.close;
                stack.pop();
                if close {
                    out.append_byte(END);
                }
                continue;
            };
            frame.next += 1;

            let status = self.visit(siblings, index, out, ctx)?;
            match status {
                CompileStatus::Skipped => {}
                _ if !node.children.is_empty() => stack.push(Frame {
                    siblings: &node.children,
                    next: 0,
                    close: status == CompileStatus::NeedsEndTag,
                }),
                CompileStatus::NeedsEndTag => out.append_byte(END),
                CompileStatus::NoEndTag => {}
            }
        }
        Ok(())
    }

    fn visit(
        &self,
        siblings: &[MarkupNode],
        index: usize,
        out: &mut BinaryOutput,
        ctx: &mut WalkContext,
    ) -> Result<CompileStatus, CompileError> {
        let node = &siblings[index];
        match node.kind {
            NodeKind::Element => self.compile_element(node, out, ctx),
            NodeKind::Text => {
                self.compile_text(siblings, index, out, ctx);
                Ok(CompileStatus::NoEndTag)
            }
            NodeKind::CData if self.config.accepts_cdata => {
                // Verbatim: no normalization and no variables.
                out.append_literal(node.content.as_deref().unwrap_or_default());
                Ok(CompileStatus::NoEndTag)
            }
            NodeKind::CData => Err(CompileError::malformed(format!(
                "CDATA section in a {} document",
                self.config.name
            ))),
            NodeKind::Comment | NodeKind::ProcessingInstruction => Ok(CompileStatus::NoEndTag),
            NodeKind::EntityReference => Err(CompileError::malformed(format!(
                "unresolved entity '&{};'",
                node.name.as_deref().unwrap_or_default()
            ))),
        }
    }

    fn compile_element(
        &self,
        node: &MarkupNode,
        out: &mut BinaryOutput,
        ctx: &mut WalkContext,
    ) -> Result<CompileStatus, CompileError> {
        let name = node
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| CompileError::malformed("element without a name"))?;

        let resolution = self.resolver.resolve_element_in(ctx.elements, name);
        if matches!(resolution, ElementResolution::Token(_)) && !self.check_rules(node, name)? {
            return Ok(CompileStatus::Skipped);
        }

        let attributes: Vec<_> = node
            .attributes
            .iter()
            .filter_map(|(attr_name, value)| self.plan_attribute(attr_name, value))
            .collect();

        let mut bits = 0;
        if !attributes.is_empty() {
            bits |= ATTR_BIT;
        }
        if node.has_real_content() {
            bits |= CONTENT_BIT;
        }

        match resolution {
            ElementResolution::Token(token) => {
                out.append_byte(token | bits);
                self.maybe_switch_tables(token, ctx);
            }
            ElementResolution::Literal => {
                log::warn!("Unknown element <{}> in {} source", name, self.config.name);
                out.append_byte(LITERAL | bits);
                self.write_literal_name(name, out);
            }
        }

        if !attributes.is_empty() {
            for attribute in attributes {
                self.write_attribute(attribute, out);
            }
            out.append_byte(END);
        }

        Ok(if bits & CONTENT_BIT != 0 {
            CompileStatus::NeedsEndTag
        } else {
            CompileStatus::NoEndTag
        })
    }

    fn maybe_switch_tables(&self, token: u8, ctx: &mut WalkContext) {
        let Some(switch) = self.config.table_switch else {
            return;
        };
        if !ctx.switched && token == switch.trigger {
            log::debug!("Switching {} element table after token {:#04x}", self.config.name, token);
            ctx.elements = switch.elements;
            ctx.text = switch.text;
            ctx.switched = true;
        }
    }

    /// Applies the dialect's structural rules. `Ok(false)` means the element
    /// is to be skipped.
    fn check_rules(&self, node: &MarkupNode, name: &str) -> Result<bool, CompileError> {
        for rule in &self.config.rules {
            match *rule {
                ElementRule::UniqueChildNames {
                    parents,
                    child,
                    key_attributes,
                } if parents.iter().any(|p| self.config.names_match(p, name)) => {
                    let mut seen = HashSet::new();
                    for sibling in node.children.iter().filter(|c| c.is_element_named(child)) {
                        let key = key_attributes
                            .iter()
                            .find_map(|attr| sibling.attribute(attr))
                            .ok_or_else(|| {
                                CompileError::structural(
                                    name,
                                    format!("<{}> has no {} attribute", child, key_attributes.join(" or ")),
                                )
                            })?;
                        if !seen.insert(key) {
                            return Err(CompileError::structural(
                                name,
                                format!("two <{}> elements named '{}'", child, key),
                            ));
                        }
                    }
                }
                ElementRule::VariableNameAttribute { element, attribute }
                    if self.config.names_match(element, name) =>
                {
                    match node.attribute(attribute) {
                        Some(value) if is_valid_name(value) => {}
                        Some(value) => {
                            log::warn!("Skipping <{}> with invalid variable name '{}'", name, value);
                            return Ok(false);
                        }
                        None => {
                            log::warn!("Skipping <{}> without a {} attribute", name, attribute);
                            return Ok(false);
                        }
                    }
                }
                _ => {}
            }
        }
        Ok(true)
    }

    fn write_literal_name(&self, name: &str, out: &mut BinaryOutput) {
        match out.mode() {
            LiteralMode::Tabled => {
                let offset = out.intern(name);
                out.append_uintvar(offset);
            }
            LiteralMode::Simple => out.append_inline_text(name),
        }
    }

    /// Resolves one attribute. `None` means it is dropped: a date value
    /// that does not pack.
    fn plan_attribute<'v>(&self, name: &'v str, value: &'v str) -> Option<PlannedAttribute<'v>> {
        let m = match self.resolver.resolve_attribute(name, value) {
            AttributeResolution::Match(m) => m,
            AttributeResolution::Literal => {
                log::warn!(
                    "Unknown attribute {}=\"{}\" in {} source",
                    name,
                    value,
                    self.config.name
                );
                return Some(PlannedAttribute::Literal { name, value });
            }
        };

        let rest = value.get(m.consumed..).unwrap_or_default();
        let date = match m.kind {
            ValueKind::Date => match pack_date(rest) {
                Some(packed) => Some(packed),
                None => {
                    log::warn!("Dropping attribute {}: '{}' is not a valid date", name, rest);
                    return None;
                }
            },
            _ => None,
        };
        Some(PlannedAttribute::Token {
            name,
            m,
            rest,
            date,
        })
    }

    fn write_attribute(&self, attribute: PlannedAttribute<'_>, out: &mut BinaryOutput) {
        let (name, m, rest, date) = match attribute {
            PlannedAttribute::Literal { name, value } => {
                out.append_byte(LITERAL);
                self.write_literal_name(name, out);
                self.compile_value(name, value, ValueKind::Text, out);
                return;
            }
            PlannedAttribute::Token {
                name,
                m,
                rest,
                date,
            } => (name, m, rest, date),
        };

        out.switch_code_page(m.code_page);
        if let Some(value_attribute) = self.config.value_attribute {
            if m.tokenized_value && self.config.names_match(value_attribute.name, name) {
                out.append_byte(value_attribute.start_token);
            }
        }
        out.append_byte(m.token);

        match date {
            Some(packed) => {
                out.append_byte(OPAQUE);
                out.append_uintvar(packed.len() as u32);
                out.append_bytes(&packed);
            }
            None => self.compile_value(name, rest, m.kind, out),
        }
    }

    /// Writes the part of an attribute value not covered by its start token.
    fn compile_value(&self, name: &str, rest: &str, kind: ValueKind, out: &mut BinaryOutput) {
        if rest.is_empty() {
            return;
        }
        let mode = self.config.escape_mode_for(name);
        // Variables win over value tokens so that a token can never split
        // a variable name.
        if self.config.variables && rest.contains('$') {
            self.write_text(rest, mode, out);
            return;
        }
        for piece in self.resolver.split_value(rest, kind) {
            match piece {
                ValuePiece::Literal(text) => self.write_text(text, mode, out),
                ValuePiece::Token(token) => out.append_byte(token),
            }
        }
    }

    fn compile_text(
        &self,
        siblings: &[MarkupNode],
        index: usize,
        out: &mut BinaryOutput,
        ctx: &WalkContext,
    ) {
        let TextPolicy::Normalize { keep_blanks_next_to } = ctx.text else {
            return;
        };
        let content = siblings[index].content.as_deref().unwrap_or_default();
        let shrunk = shrink_blanks(content);

        let inline_neighbour = |neighbour: Option<&MarkupNode>| {
            neighbour.is_some_and(|n| {
                n.is_element()
                    && n.name
                        .as_deref()
                        .is_some_and(|name| keep_blanks_next_to.contains(&name))
            })
        };
        let prev = index.checked_sub(1).and_then(|i| siblings.get(i));
        let next = siblings.get(index + 1);
        let text = if inline_neighbour(prev) || inline_neighbour(next) {
            shrunk.as_str()
        } else {
            shrunk.trim()
        };

        if !text.is_empty() {
            self.write_text(text, EscapeMode::NoEscape, out);
        }
    }

    /// Writes text, turning variable references into extension tokens when
    /// the dialect has variables.
    fn write_text(&self, text: &str, default_mode: EscapeMode, out: &mut BinaryOutput) {
        if !self.config.variables {
            out.append_literal(text);
            return;
        }
        for segment in scan(text, default_mode) {
            match segment {
                Segment::Literal(run) => out.append_literal(&run),
                Segment::Variable { name, mode } => {
                    let offset = out.intern(&name);
                    out.append_byte(mode.token());
                    out.append_uintvar(offset);
                }
            }
        }
    }
}
