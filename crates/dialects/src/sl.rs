//! Service Loading (WAP-168) tokens.

use wapgate_wbxml::{AttributeEntry, DialectConfig, TokenEntry};

pub const VERSION: u8 = 0x02;
pub const PUBLIC_ID: u32 = 0x06;

pub const ELEMENTS: &[TokenEntry] = &[TokenEntry::new("sl", 0x05)];

// The `www.` forms must be tried before the bare scheme prefixes.
pub const ATTRIBUTES: &[AttributeEntry] = &[
    AttributeEntry::new("action", Some("execute-low"), 0x05),
    AttributeEntry::new("action", Some("execute-high"), 0x06),
    AttributeEntry::new("action", Some("cache"), 0x07),
    AttributeEntry::new("href", Some("http://www."), 0x0A).url(),
    AttributeEntry::new("href", Some("http://"), 0x09).url(),
    AttributeEntry::new("href", Some("https://www."), 0x0C).url(),
    AttributeEntry::new("href", Some("https://"), 0x0B).url(),
    AttributeEntry::new("href", None, 0x08).url(),
];

pub const URL_VALUES: &[TokenEntry] = &[
    TokenEntry::new(".com/", 0x85),
    TokenEntry::new(".edu/", 0x86),
    TokenEntry::new(".net/", 0x87),
    TokenEntry::new(".org/", 0x88),
];

pub fn config() -> DialectConfig {
    DialectConfig::new("SL", ELEMENTS, ATTRIBUTES)
        .with_header(VERSION, PUBLIC_ID)
        .with_value_tokens(&[], URL_VALUES)
}
