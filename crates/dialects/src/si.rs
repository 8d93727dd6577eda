//! Service Indication (WAP-167) tokens.

use wapgate_wbxml::{AttributeEntry, DialectConfig, TokenEntry};

pub const VERSION: u8 = 0x02;
pub const PUBLIC_ID: u32 = 0x05;

pub const ELEMENTS: &[TokenEntry] = &[
    TokenEntry::new("si", 0x05),
    TokenEntry::new("indication", 0x06),
    TokenEntry::new("info", 0x07),
    TokenEntry::new("item", 0x08),
];

pub const ATTRIBUTES: &[AttributeEntry] = &[
    AttributeEntry::new("action", Some("signal-none"), 0x05),
    AttributeEntry::new("action", Some("signal-low"), 0x06),
    AttributeEntry::new("action", Some("signal-medium"), 0x07),
    AttributeEntry::new("action", Some("signal-high"), 0x08),
    AttributeEntry::new("action", Some("delete"), 0x09),
    AttributeEntry::new("created", None, 0x0A).date(),
    AttributeEntry::new("href", Some("https://www."), 0x0F).url(),
    AttributeEntry::new("href", Some("http://www."), 0x0D).url(),
    AttributeEntry::new("href", Some("https://"), 0x0E).url(),
    AttributeEntry::new("href", Some("http://"), 0x0C).url(),
    AttributeEntry::new("href", None, 0x0B).url(),
    AttributeEntry::new("si-expires", None, 0x10).date(),
    AttributeEntry::new("si-id", None, 0x11),
    AttributeEntry::new("class", None, 0x12),
];

pub const URL_VALUES: &[TokenEntry] = &[
    TokenEntry::new(".com/", 0x85),
    TokenEntry::new(".edu/", 0x86),
    TokenEntry::new(".net/", 0x87),
    TokenEntry::new(".org/", 0x88),
];

pub fn config() -> DialectConfig {
    DialectConfig::new("SI", ELEMENTS, ATTRIBUTES)
        .with_header(VERSION, PUBLIC_ID)
        .with_value_tokens(&[], URL_VALUES)
}
