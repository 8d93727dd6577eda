//! Global WBXML tokens shared by every code page.

pub const SWITCH_PAGE: u8 = 0x00;
pub const END: u8 = 0x01;
pub const STR_I: u8 = 0x03;
pub const LITERAL: u8 = 0x04;
pub const EXT_T_0: u8 = 0x80;
pub const EXT_T_1: u8 = 0x81;
pub const EXT_T_2: u8 = 0x82;
pub const STR_T: u8 = 0x83;
pub const OPAQUE: u8 = 0xC3;

/// Terminator of an inline string.
pub const STR_END: u8 = 0x00;

/// OR'd into an element token when the element has content.
pub const CONTENT_BIT: u8 = 0x40;
/// OR'd into an element token when the element has attributes.
pub const ATTR_BIT: u8 = 0x80;

/// Strings this long or shorter are never worth a table reference.
pub const STRING_TABLE_MIN: usize = 4;
