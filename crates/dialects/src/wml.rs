//! WML 1.1 tokens (code page 0) and the WML header rules.
//!
//! Attribute entries with a value prefix are listed before the
//! unconditional entry for the same name so the resolver can take the
//! first match.

use crate::public_ids::public_id_for;
use wapgate_wbxml::{AttributeEntry, DialectConfig, ElementRule, LiteralMode, TextPolicy, TokenEntry};

/// Public id used when the DOCTYPE is absent or not recognized (WML 1.1).
pub const DEFAULT_PUBLIC_ID: u32 = 0x04;
pub const DEFAULT_VERSION: u8 = 0x01;

/// Inline elements whose neighbouring blanks are kept.
pub const EMPHASIS: &[&str] = &["b", "big", "em", "i", "small", "strong", "u"];

pub const ELEMENTS: &[TokenEntry] = &[
    TokenEntry::new("wml", 0x3F),
    TokenEntry::new("card", 0x27),
    TokenEntry::new("do", 0x28),
    TokenEntry::new("onevent", 0x33),
    TokenEntry::new("head", 0x2C),
    TokenEntry::new("template", 0x3B),
    TokenEntry::new("access", 0x23),
    TokenEntry::new("meta", 0x30),
    TokenEntry::new("go", 0x2B),
    TokenEntry::new("prev", 0x32),
    TokenEntry::new("refresh", 0x36),
    TokenEntry::new("noop", 0x31),
    TokenEntry::new("postfield", 0x21),
    TokenEntry::new("setvar", 0x3E),
    TokenEntry::new("select", 0x37),
    TokenEntry::new("optgroup", 0x34),
    TokenEntry::new("option", 0x35),
    TokenEntry::new("input", 0x2F),
    TokenEntry::new("fieldset", 0x2A),
    TokenEntry::new("timer", 0x3C),
    TokenEntry::new("img", 0x2E),
    TokenEntry::new("anchor", 0x22),
    TokenEntry::new("a", 0x1C),
    TokenEntry::new("table", 0x1F),
    TokenEntry::new("tr", 0x1E),
    TokenEntry::new("td", 0x1D),
    TokenEntry::new("em", 0x29),
    TokenEntry::new("strong", 0x39),
    TokenEntry::new("b", 0x24),
    TokenEntry::new("i", 0x2D),
    TokenEntry::new("u", 0x3D),
    TokenEntry::new("big", 0x25),
    TokenEntry::new("small", 0x38),
    TokenEntry::new("p", 0x20),
    TokenEntry::new("br", 0x26),
];

pub const ATTRIBUTES: &[AttributeEntry] = &[
    AttributeEntry::new("accept-charset", None, 0x05),
    AttributeEntry::new("accesskey", None, 0x5E),
    AttributeEntry::new("align", Some("bottom"), 0x06),
    AttributeEntry::new("align", Some("center"), 0x07),
    AttributeEntry::new("align", Some("left"), 0x08),
    AttributeEntry::new("align", Some("middle"), 0x09),
    AttributeEntry::new("align", Some("right"), 0x0A),
    AttributeEntry::new("align", Some("top"), 0x0B),
    AttributeEntry::new("align", None, 0x52),
    AttributeEntry::new("alt", None, 0x0C),
    AttributeEntry::new("cache-control", Some("no-cache"), 0x64),
    AttributeEntry::new("class", None, 0x54),
    AttributeEntry::new("columns", None, 0x53),
    AttributeEntry::new("content", Some("application/vnd.wap.wmlc;charset="), 0x5C),
    AttributeEntry::new("content", None, 0x0D),
    AttributeEntry::new("domain", None, 0x0F),
    AttributeEntry::new("emptyok", Some("false"), 0x10),
    AttributeEntry::new("emptyok", Some("true"), 0x11),
    AttributeEntry::new("enctype", Some("application/x-www-form-urlencoded"), 0x60),
    AttributeEntry::new("enctype", Some("multipart/form-data"), 0x61),
    AttributeEntry::new("enctype", None, 0x5F),
    AttributeEntry::new("format", None, 0x12),
    AttributeEntry::new("forua", Some("false"), 0x56),
    AttributeEntry::new("forua", Some("true"), 0x57),
    AttributeEntry::new("height", None, 0x13),
    AttributeEntry::new("href", Some("https://"), 0x4C).url(),
    AttributeEntry::new("href", Some("http://"), 0x4B).url(),
    AttributeEntry::new("href", None, 0x4A).url(),
    AttributeEntry::new("hspace", None, 0x14),
    AttributeEntry::new("http-equiv", Some("Content-Type"), 0x5B),
    AttributeEntry::new("http-equiv", Some("Expires"), 0x5D),
    AttributeEntry::new("http-equiv", None, 0x5A),
    AttributeEntry::new("id", None, 0x55),
    AttributeEntry::new("ivalue", None, 0x15),
    AttributeEntry::new("iname", None, 0x16),
    AttributeEntry::new("label", None, 0x18),
    AttributeEntry::new("localsrc", None, 0x19),
    AttributeEntry::new("maxlength", None, 0x1A),
    AttributeEntry::new("method", Some("get"), 0x1B),
    AttributeEntry::new("method", Some("post"), 0x1C),
    AttributeEntry::new("mode", Some("nowrap"), 0x1D),
    AttributeEntry::new("mode", Some("wrap"), 0x1E),
    AttributeEntry::new("multiple", Some("false"), 0x1F),
    AttributeEntry::new("multiple", Some("true"), 0x20),
    AttributeEntry::new("name", None, 0x21),
    AttributeEntry::new("newcontext", Some("false"), 0x22),
    AttributeEntry::new("newcontext", Some("true"), 0x23),
    AttributeEntry::new("onenterbackward", None, 0x25),
    AttributeEntry::new("onenterforward", None, 0x26),
    AttributeEntry::new("onpick", None, 0x24),
    AttributeEntry::new("ontimer", None, 0x27),
    AttributeEntry::new("optional", Some("false"), 0x28),
    AttributeEntry::new("optional", Some("true"), 0x29),
    AttributeEntry::new("path", None, 0x2A),
    AttributeEntry::new("scheme", None, 0x2E),
    AttributeEntry::new("sendreferer", Some("false"), 0x2F),
    AttributeEntry::new("sendreferer", Some("true"), 0x30),
    AttributeEntry::new("size", None, 0x31),
    AttributeEntry::new("src", Some("https://"), 0x59).url(),
    AttributeEntry::new("src", Some("http://"), 0x58).url(),
    AttributeEntry::new("src", None, 0x32).url(),
    AttributeEntry::new("ordered", Some("true"), 0x33),
    AttributeEntry::new("ordered", Some("false"), 0x34),
    AttributeEntry::new("tabindex", None, 0x35),
    AttributeEntry::new("title", None, 0x36),
    AttributeEntry::new("type", Some("accept"), 0x38),
    AttributeEntry::new("type", Some("delete"), 0x39),
    AttributeEntry::new("type", Some("help"), 0x3A),
    AttributeEntry::new("type", Some("password"), 0x3B),
    AttributeEntry::new("type", Some("onpick"), 0x3C),
    AttributeEntry::new("type", Some("onenterbackward"), 0x3D),
    AttributeEntry::new("type", Some("onenterforward"), 0x3E),
    AttributeEntry::new("type", Some("ontimer"), 0x3F),
    AttributeEntry::new("type", Some("options"), 0x45),
    AttributeEntry::new("type", Some("prev"), 0x46),
    AttributeEntry::new("type", Some("reset"), 0x47),
    AttributeEntry::new("type", Some("text"), 0x48),
    AttributeEntry::new("type", Some("vnd."), 0x49),
    AttributeEntry::new("type", None, 0x37),
    AttributeEntry::new("value", None, 0x4D),
    AttributeEntry::new("vspace", None, 0x4E),
    AttributeEntry::new("width", None, 0x4F),
    AttributeEntry::new("xml:lang", None, 0x50),
    AttributeEntry::new("xml:space", Some("preserve"), 0x62),
    AttributeEntry::new("xml:space", Some("default"), 0x63),
];

pub const VALUES: &[TokenEntry] = &[
    TokenEntry::new("accept", 0x89),
    TokenEntry::new("bottom", 0x8A),
    TokenEntry::new("clear", 0x8B),
    TokenEntry::new("delete", 0x8C),
    TokenEntry::new("help", 0x8D),
    TokenEntry::new("middle", 0x93),
    TokenEntry::new("nowrap", 0x94),
    TokenEntry::new("onenterbackward", 0x96),
    TokenEntry::new("onenterforward", 0x97),
    TokenEntry::new("onpick", 0x95),
    TokenEntry::new("ontimer", 0x98),
    TokenEntry::new("options", 0x99),
    TokenEntry::new("password", 0x9A),
    TokenEntry::new("reset", 0x9B),
    TokenEntry::new("text", 0x9D),
    TokenEntry::new("top", 0x9E),
    TokenEntry::new("unknown", 0x9F),
    TokenEntry::new("wrap", 0xA0),
];

pub const URL_VALUES: &[TokenEntry] = &[
    TokenEntry::new("www.", 0xA1),
    TokenEntry::new(".com/", 0x85),
    TokenEntry::new(".edu/", 0x86),
    TokenEntry::new(".net/", 0x87),
    TokenEntry::new(".org/", 0x88),
    TokenEntry::new("http://", 0x8E),
    TokenEntry::new("http://www.", 0x8F),
    TokenEntry::new("https://", 0x90),
    TokenEntry::new("https://www.", 0x91),
];

const VERSIONS: &[(&str, u8)] = &[
    ("1.1", 0x01),
    ("1.2", 0x02),
    ("1.3", 0x03),
    ("1.4", 0x04),
    ("1.5", 0x05),
];

pub fn config() -> DialectConfig {
    DialectConfig::new("WML", ELEMENTS, ATTRIBUTES)
        .with_header(DEFAULT_VERSION, DEFAULT_PUBLIC_ID)
        .with_literal_mode(LiteralMode::Tabled)
        .with_value_tokens(VALUES, URL_VALUES)
        .with_variables(&["href"])
        .with_text_policy(TextPolicy::Normalize {
            keep_blanks_next_to: EMPHASIS,
        })
        .with_rule(ElementRule::UniqueChildNames {
            parents: &["card", "template"],
            child: "do",
            key_attributes: &["name", "type"],
        })
        .with_rule(ElementRule::VariableNameAttribute {
            element: "setvar",
            attribute: "name",
        })
}

/// WBXML version byte for a version label such as `"1.3"`.
pub fn version_for(label: Option<&str>) -> u8 {
    let Some(label) = label else {
        log::info!("No WBXML version given, using WBXML 1.1");
        return DEFAULT_VERSION;
    };
    match VERSIONS.iter().find(|(name, _)| *name == label.trim()) {
        Some((_, version)) => *version,
        None => {
            log::warn!("Unknown WBXML version '{}', using WBXML 1.1", label);
            DEFAULT_VERSION
        }
    }
}

/// Public id from the DOCTYPE public identifier, WML 1.1 when absent or
/// unknown.
pub fn public_id_from_doctype(public_id: Option<&str>) -> u32 {
    match public_id {
        None => {
            log::warn!("WML document has no DOCTYPE public identifier, assuming WML 1.1");
            DEFAULT_PUBLIC_ID
        }
        Some(dtd) => public_id_for(dtd).unwrap_or_else(|| {
            log::warn!("Unknown public identifier '{}', assuming WML 1.1", dtd);
            DEFAULT_PUBLIC_ID
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_labels() {
        assert_eq!(version_for(Some("1.1")), 0x01);
        assert_eq!(version_for(Some("1.3")), 0x03);
        assert_eq!(version_for(Some("1.5")), 0x05);
        assert_eq!(version_for(Some("2.0")), 0x01);
        assert_eq!(version_for(None), 0x01);
    }

    #[test]
    fn doctype_public_ids() {
        assert_eq!(
            public_id_from_doctype(Some("-//WAPFORUM//DTD WML 1.2//EN")),
            0x09
        );
        assert_eq!(public_id_from_doctype(Some("-//FOO//DTD BAR//EN")), 0x04);
        assert_eq!(public_id_from_doctype(None), 0x04);
    }

    #[test]
    fn prefixed_entries_precede_catch_all() {
        for (i, entry) in ATTRIBUTES.iter().enumerate() {
            if entry.value_prefix.is_none() {
                assert!(ATTRIBUTES[i + 1..].iter().all(|e| e.name != entry.name));
            }
        }
    }
}
