//! XML reader that builds a [`MarkupDocument`].
//!
//! The reader is a thin event loop over `quick_xml`: start tags push onto an
//! element stack, end tags pop and attach the finished element to its parent.
//! Character and entity references are resolved here, including the two
//! named entities WML documents commonly use without declaring them.

use crate::error::{Location, MarkupError};
use crate::node::{MarkupDocument, MarkupNode, NodeKind};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event as XmlEvent};
use std::borrow::Cow;

/// Resolves the XML predefined entities plus `nbsp` and `shy`.
fn resolve_entity(name: &str) -> Option<&'static str> {
    quick_xml::escape::resolve_predefined_entity(name).or(match name {
        "nbsp" => Some("\u{a0}"),
        "shy" => Some("\u{ad}"),
        _ => None,
    })
}

fn unescape<'a>(raw: &'a str, source: &str, pos: usize) -> Result<Cow<'a, str>, MarkupError> {
    quick_xml::escape::unescape_with(raw, resolve_entity).map_err(|e| MarkupError::Syntax {
        message: e.to_string(),
        location: Location::from_pos(source, pos),
    })
}

fn char_reference(reference: &str) -> Option<char> {
    let code = match reference.strip_prefix('x') {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => reference.parse().ok()?,
    };
    char::from_u32(code)
}

/// Extracts the public identifier from the body of a DOCTYPE declaration,
/// i.e. the first quoted literal after the `PUBLIC` keyword.
fn doctype_public_id(doctype: &str) -> Option<String> {
    let after = &doctype[doctype.find("PUBLIC")? + "PUBLIC".len()..];
    let after = after.trim_start();
    let quote = after.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let body = &after[1..];
    let end = body.find(quote)?;
    Some(body[..end].to_string())
}

/// Builds the tree while the event loop runs.
struct TreeBuilder<'s> {
    source: &'s str,
    stack: Vec<MarkupNode>,
    root: Option<MarkupNode>,
    public_id: Option<String>,
}

impl<'s> TreeBuilder<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            stack: Vec::new(),
            root: None,
            public_id: None,
        }
    }

    fn location(&self, pos: usize) -> Location {
        Location::from_pos(self.source, pos)
    }

    fn element_from(&self, e: &BytesStart<'_>, pos: usize) -> Result<MarkupNode, MarkupError> {
        let name = std::str::from_utf8(e.name().into_inner())?;
        let mut node = MarkupNode::element(name);
        for attr in e.attributes() {
            let attr = attr.map_err(|err| MarkupError::Syntax {
                message: err.to_string(),
                location: self.location(pos),
            })?;
            let key = std::str::from_utf8(attr.key.as_ref())?;
            let raw_value = std::str::from_utf8(&attr.value)?;
            let value = unescape(raw_value, self.source, pos)?;
            node.attributes.push((key.to_string(), value.into_owned()));
        }
        Ok(node)
    }

    fn attach(&mut self, node: MarkupNode, pos: usize) -> Result<(), MarkupError> {
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(node);
            return Ok(());
        }
        match node.kind {
            NodeKind::Element if self.root.is_none() => {
                self.root = Some(node);
                Ok(())
            }
            NodeKind::Element => Err(MarkupError::MultipleRoots {
                name: node.name.clone().unwrap_or_default(),
                location: self.location(pos),
            }),
            // Prolog and epilog comments/PIs carry nothing the compilers use.
            NodeKind::Comment | NodeKind::ProcessingInstruction => Ok(()),
            _ => Err(MarkupError::ContentOutsideRoot {
                location: self.location(pos),
            }),
        }
    }

    /// Appends character data, merging with a directly preceding text node
    /// so that `a &amp; b` stays one node.
    fn push_text(&mut self, text: &str, pos: usize) -> Result<(), MarkupError> {
        let Some(parent) = self.stack.last_mut() else {
            if text.chars().all(char::is_whitespace) {
                return Ok(());
            }
            return Err(MarkupError::ContentOutsideRoot {
                location: self.location(pos),
            });
        };
        match parent.children.last_mut() {
            Some(MarkupNode {
                kind: NodeKind::Text,
                content: Some(existing),
                ..
            }) => existing.push_str(text),
            _ => parent.children.push(MarkupNode::text(text)),
        }
        Ok(())
    }

    fn general_reference(&mut self, name: &str, pos: usize) -> Result<(), MarkupError> {
        if let Some(reference) = name.strip_prefix('#') {
            let ch = char_reference(reference).ok_or_else(|| MarkupError::Syntax {
                message: format!("invalid character reference &{};", name),
                location: self.location(pos),
            })?;
            return self.push_text(ch.encode_utf8(&mut [0u8; 4]), pos);
        }
        if let Some(text) = resolve_entity(name) {
            return self.push_text(text, pos);
        }
        log::debug!("Keeping unresolved entity '&{};' as a reference node", name);
        self.attach(MarkupNode::entity_reference(name), pos)
    }

    fn finish(self) -> Result<MarkupDocument, MarkupError> {
        if let Some(open) = self.stack.last() {
            return Err(MarkupError::Syntax {
                message: format!(
                    "unclosed element <{}>",
                    open.name.as_deref().unwrap_or_default()
                ),
                location: self.location(self.source.len()),
            });
        }
        let root = self.root.ok_or(MarkupError::MissingRoot)?;
        Ok(MarkupDocument {
            public_id: self.public_id,
            root,
        })
    }
}

/// Parses XML source text into a [`MarkupDocument`].
///
/// Leading and trailing blanks are ignored. A NUL character anywhere in the
/// source is rejected, as are mismatched tags and multiple root elements.
pub fn parse_document(source: &str) -> Result<MarkupDocument, MarkupError> {
    let source = source.trim();
    if let Some(pos) = source.find('\0') {
        return Err(MarkupError::NulCharacter {
            location: Location::from_pos(source, pos),
        });
    }

    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(false);
    // End tags are matched against the element stack below.
    reader.config_mut().check_end_names = false;
    let mut builder = TreeBuilder::new(source);
    let mut buf = Vec::new();

    loop {
        let pos = reader.buffer_position() as usize;
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| MarkupError::Syntax {
                message: e.to_string(),
                location: Location::from_pos(source, reader.buffer_position() as usize),
            })?;
        match event {
            XmlEvent::Start(e) => {
                let node = builder.element_from(&e, pos)?;
                if builder.stack.is_empty() && builder.root.is_some() {
                    return Err(MarkupError::MultipleRoots {
                        name: node.name.clone().unwrap_or_default(),
                        location: builder.location(pos),
                    });
                }
                builder.stack.push(node);
            }
            XmlEvent::Empty(e) => {
                let node = builder.element_from(&e, pos)?;
                builder.attach(node, pos)?;
            }
            XmlEvent::End(e) => {
                let found = std::str::from_utf8(e.name().into_inner())?.to_string();
                let node = builder.stack.pop().ok_or_else(|| MarkupError::Syntax {
                    message: format!("end tag </{}> without start tag", found),
                    location: builder.location(pos),
                })?;
                let expected = node.name.clone().unwrap_or_default();
                if expected != found {
                    return Err(MarkupError::MismatchedEndTag {
                        expected,
                        found,
                        location: builder.location(pos),
                    });
                }
                builder.attach(node, pos)?;
            }
            XmlEvent::Text(e) => {
                let raw_text = std::str::from_utf8(&e)?;
                let text = unescape(raw_text, source, pos)?;
                builder.push_text(&text, pos)?;
            }
            XmlEvent::GeneralRef(e) => {
                let name = std::str::from_utf8(&e)?;
                builder.general_reference(name, pos)?;
            }
            XmlEvent::CData(e) => {
                let text = std::str::from_utf8(&e)?;
                builder.attach(MarkupNode::cdata(text), pos)?;
            }
            XmlEvent::Comment(e) => {
                let text = std::str::from_utf8(&e)?;
                builder.attach(MarkupNode::comment(text), pos)?;
            }
            XmlEvent::PI(e) => {
                let target = std::str::from_utf8(e.target())?;
                let data = std::str::from_utf8(e.content())?.trim_start();
                builder.attach(MarkupNode::processing_instruction(target, data), pos)?;
            }
            XmlEvent::DocType(e) => {
                let doctype = std::str::from_utf8(&e)?;
                builder.public_id = doctype_public_id(doctype);
            }
            XmlEvent::Eof => break,
            _ => (),
        }
        buf.clear();
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WML: &str = r#"<?xml version="1.0"?>
<!DOCTYPE wml PUBLIC "-//WAPFORUM//DTD WML 1.1//EN" "http://www.wapforum.org/DTD/wml_1.1.xml">
<wml>
  <card id="main" title="A &amp; B">
    <p>Hello&nbsp;world &#65;<![CDATA[<raw>]]></p>
  </card>
</wml>
"#;

    #[test]
    fn parses_doctype_and_tree() {
        let doc = parse_document(WML).unwrap();
        assert_eq!(
            doc.public_id.as_deref(),
            Some("-//WAPFORUM//DTD WML 1.1//EN")
        );
        assert!(doc.root.is_element_named("wml"));
        let card = doc.root.children.iter().find(|n| n.is_element()).unwrap();
        assert_eq!(card.attribute("title"), Some("A & B"));
        assert_eq!(card.attribute("id"), Some("main"));
    }

    #[test]
    fn merges_text_around_references() {
        let doc = parse_document(WML).unwrap();
        let p = doc
            .root
            .descendants()
            .find(|n| n.is_element_named("p"))
            .unwrap();
        assert_eq!(p.children.len(), 2);
        assert_eq!(p.children[0].content.as_deref(), Some("Hello\u{a0}world A"));
        assert_eq!(p.children[1].kind, NodeKind::CData);
        assert_eq!(p.children[1].content.as_deref(), Some("<raw>"));
    }

    #[test]
    fn unknown_entity_becomes_reference_node() {
        let doc = parse_document("<p>a&copy;b</p>").unwrap();
        let kinds: Vec<_> = doc.root.children.iter().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![NodeKind::Text, NodeKind::EntityReference, NodeKind::Text]
        );
        assert_eq!(doc.root.children[1].name.as_deref(), Some("copy"));
    }

    #[test]
    fn rejects_nul_and_second_root() {
        assert!(matches!(
            parse_document("<a>\0</a>"),
            Err(MarkupError::NulCharacter { .. })
        ));
        assert!(matches!(
            parse_document("<a/><b/>"),
            Err(MarkupError::MultipleRoots { .. })
        ));
        assert!(matches!(parse_document("  "), Err(MarkupError::MissingRoot)));
    }

    #[test]
    fn reports_mismatched_end_tag() {
        let err = parse_document("<a>\n<b></c></a>").unwrap_err();
        assert_eq!(
            err,
            MarkupError::MismatchedEndTag {
                expected: "b".to_string(),
                found: "c".to_string(),
                location: Location { line: 2, col: 4 },
            }
        );
        assert!(matches!(
            parse_document("<a></a></b>"),
            Err(MarkupError::Syntax { .. })
        ));
    }

    #[test]
    fn keeps_comments_and_processing_instructions() {
        let doc = parse_document("<a><!-- note --><?php echo ?></a>").unwrap();
        assert_eq!(doc.root.children[0].kind, NodeKind::Comment);
        assert_eq!(doc.root.children[1].kind, NodeKind::ProcessingInstruction);
        assert_eq!(doc.root.children[1].name.as_deref(), Some("php"));
    }

    #[test]
    fn public_id_accepts_single_quotes() {
        assert_eq!(
            doctype_public_id("si PUBLIC '-//WAPFORUM//DTD SI 1.0//EN' 'x'").as_deref(),
            Some("-//WAPFORUM//DTD SI 1.0//EN")
        );
        assert_eq!(doctype_public_id("wml SYSTEM \"wml.dtd\""), None);
    }
}
