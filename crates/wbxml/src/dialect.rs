//! Dialect configuration: token tables plus the handful of switches that
//! make one tree compiler behave like the WML, SI, SL or OTA compiler.
//!
//! A [`DialectConfig`] is plain data. It is built once, holds no interior
//! mutability, and can be shared by any number of concurrent compiles.

use crate::variables::EscapeMode;

/// Element or value token: `(name, token)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenEntry {
    pub name: &'static str,
    pub token: u8,
}

impl TokenEntry {
    pub const fn new(name: &'static str, token: u8) -> Self {
        Self { name, token }
    }
}

/// How the part of an attribute value not covered by its start token is
/// written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueKind {
    /// Split on the attribute value tokens, the rest as literal text.
    #[default]
    Text,
    /// Split on the URL value tokens (`.com/`, `.org/`, ...).
    Url,
    /// An ISO 8601 UTC timestamp packed into an opaque BCD field.
    Date,
}

/// Attribute start token: `(name, value_prefix, token, code_page)`.
///
/// `value_prefix = None` matches any value of the attribute. Entries are
/// tried in declaration order, so prefixed entries for a name must come
/// before its unconditional one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeEntry {
    pub name: &'static str,
    pub value_prefix: Option<&'static str>,
    pub token: u8,
    pub code_page: u8,
    pub kind: ValueKind,
}

impl AttributeEntry {
    pub const fn new(name: &'static str, value_prefix: Option<&'static str>, token: u8) -> Self {
        Self {
            name,
            value_prefix,
            token,
            code_page: 0,
            kind: ValueKind::Text,
        }
    }

    pub const fn on_page(mut self, code_page: u8) -> Self {
        self.code_page = code_page;
        self
    }

    pub const fn url(mut self) -> Self {
        self.kind = ValueKind::Url;
        self
    }

    pub const fn date(mut self) -> Self {
        self.kind = ValueKind::Date;
        self
    }
}

/// Whether literal runs may be replaced by string-table references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiteralMode {
    /// A string table is built and literals are spliced against it.
    Tabled,
    /// No string table; every literal is an inline string.
    #[default]
    Simple,
}

/// How an attribute entry's `value_prefix` is compared with a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueMatch {
    #[default]
    Prefix,
    Whole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPolicy {
    /// Collapse blank runs and trim, except next to the listed inline
    /// elements where the surrounding blank is significant.
    Normalize {
        keep_blanks_next_to: &'static [&'static str],
    },
    /// Text nodes are not part of the document's binary form.
    Ignore,
}

impl Default for TextPolicy {
    fn default() -> Self {
        TextPolicy::Normalize {
            keep_blanks_next_to: &[],
        }
    }
}

/// Sticky switch to another element table, taken once `trigger` has been
/// written as an element token from the default table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSwitch {
    pub trigger: u8,
    pub elements: &'static [TokenEntry],
    pub text: TextPolicy,
}

/// An attribute whose tokenized values are preceded by a start token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueAttribute {
    pub name: &'static str,
    pub start_token: u8,
}

/// Structural checks applied to resolved elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRule {
    /// Children named `child` of any of `parents` must have distinct keys.
    /// The key is the first of `key_attributes` present; a child with none
    /// of them violates the rule too.
    UniqueChildNames {
        parents: &'static [&'static str],
        child: &'static str,
        key_attributes: &'static [&'static str],
    },
    /// `element` is dropped (with its subtree) unless `attribute` holds a
    /// valid variable name.
    VariableNameAttribute {
        element: &'static str,
        attribute: &'static str,
    },
}

#[derive(Debug, Clone)]
pub struct DialectConfig {
    pub name: &'static str,
    pub version: u8,
    pub public_id: u32,
    pub literal_mode: LiteralMode,
    pub case_sensitive: bool,
    pub value_match: ValueMatch,
    pub elements: &'static [TokenEntry],
    pub attributes: &'static [AttributeEntry],
    pub values: &'static [TokenEntry],
    pub url_values: &'static [TokenEntry],
    /// `$name` references are recognized in text and attribute values.
    pub variables: bool,
    /// Attributes whose variables default to [`EscapeMode::Escape`].
    pub escaped_attributes: &'static [&'static str],
    pub text: TextPolicy,
    pub accepts_cdata: bool,
    pub value_attribute: Option<ValueAttribute>,
    pub table_switch: Option<TableSwitch>,
    pub rules: Vec<ElementRule>,
}

impl DialectConfig {
    pub fn new(
        name: &'static str,
        elements: &'static [TokenEntry],
        attributes: &'static [AttributeEntry],
    ) -> Self {
        Self {
            name,
            version: 0x01,
            public_id: 0x01,
            literal_mode: LiteralMode::Simple,
            case_sensitive: true,
            value_match: ValueMatch::Prefix,
            elements,
            attributes,
            values: &[],
            url_values: &[],
            variables: false,
            escaped_attributes: &[],
            text: TextPolicy::default(),
            accepts_cdata: true,
            value_attribute: None,
            table_switch: None,
            rules: Vec::new(),
        }
    }

    pub fn with_header(mut self, version: u8, public_id: u32) -> Self {
        self.version = version;
        self.public_id = public_id;
        self
    }

    pub fn with_literal_mode(mut self, mode: LiteralMode) -> Self {
        self.literal_mode = mode;
        self
    }

    pub fn with_case_insensitive_names(mut self) -> Self {
        self.case_sensitive = false;
        self
    }

    pub fn with_value_match(mut self, value_match: ValueMatch) -> Self {
        self.value_match = value_match;
        self
    }

    pub fn with_value_tokens(
        mut self,
        values: &'static [TokenEntry],
        url_values: &'static [TokenEntry],
    ) -> Self {
        self.values = values;
        self.url_values = url_values;
        self
    }

    pub fn with_variables(mut self, escaped_attributes: &'static [&'static str]) -> Self {
        self.variables = true;
        self.escaped_attributes = escaped_attributes;
        self
    }

    pub fn with_text_policy(mut self, text: TextPolicy) -> Self {
        self.text = text;
        self
    }

    pub fn without_cdata(mut self) -> Self {
        self.accepts_cdata = false;
        self
    }

    pub fn with_value_attribute(mut self, name: &'static str, start_token: u8) -> Self {
        self.value_attribute = Some(ValueAttribute { name, start_token });
        self
    }

    pub fn with_table_switch(mut self, switch: TableSwitch) -> Self {
        self.table_switch = Some(switch);
        self
    }

    pub fn with_rule(mut self, rule: ElementRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Default escape mode for variables in the value of `attribute`.
    pub fn escape_mode_for(&self, attribute: &str) -> EscapeMode {
        if self.escaped_attributes.contains(&attribute) {
            EscapeMode::Escape
        } else {
            EscapeMode::NoEscape
        }
    }

    pub fn names_match(&self, a: &str, b: &str) -> bool {
        if self.case_sensitive {
            a == b
        } else {
            a.eq_ignore_ascii_case(b)
        }
    }
}
