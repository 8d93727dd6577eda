//! Character sets: IANA identifiers (MIBenum) for the WBXML header and the
//! `encoding_rs` codec that decodes sources and encodes compiled strings.

use crate::error::MarkupError;
use encoding_rs::Encoding;
use std::borrow::Cow;

pub const UTF_8: u32 = 106;

/// (family prefix, first member number, MIBenum of the first member, members)
const FAMILIES: &[(&str, u32, u32, u32)] = &[
    ("ISO-8859", 1, 4, 9),
    ("WINDOWS", 1250, 2250, 9),
];

/// Returns the MIBenum for a charset name, if it is one the header can name.
///
/// Matching is case-insensitive and accepts `_` in place of `-`.
pub fn lookup(name: &str) -> Option<u32> {
    let normalized = name.trim().to_ascii_uppercase().replace('_', "-");
    if normalized == "UTF-8" || normalized == "UTF8" {
        return Some(UTF_8);
    }
    FAMILIES.iter().find_map(|&(prefix, first, mib, count)| {
        let number: u32 = normalized
            .strip_prefix(prefix)?
            .strip_prefix('-')?
            .parse()
            .ok()?;
        (first..first + count)
            .contains(&number)
            .then(|| mib + (number - first))
    })
}

/// A character set the compiler can both declare and produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset {
    pub mib: u32,
    pub encoding: &'static Encoding,
}

impl Default for Charset {
    fn default() -> Self {
        Self::utf8()
    }
}

impl Charset {
    pub fn utf8() -> Self {
        Self {
            mib: UTF_8,
            encoding: encoding_rs::UTF_8,
        }
    }

    /// Resolves a charset name for output. Names without a MIBenum, or
    /// without an encoder (UTF-16), fall back to UTF-8.
    pub fn resolve(name: Option<&str>) -> Self {
        let Some(name) = name else {
            return Self::utf8();
        };
        let Some(encoding) = Encoding::for_label(name.trim().as_bytes()) else {
            log::warn!("Unknown charset '{}', using UTF-8", name);
            return Self::utf8();
        };
        if encoding.output_encoding() != encoding {
            log::warn!("Cannot encode output as '{}', using UTF-8", name);
            return Self::utf8();
        }
        match lookup(name).or_else(|| lookup(encoding.name())) {
            Some(mib) => Self { mib, encoding },
            None => {
                log::warn!("Charset '{}' has no WBXML identifier, using UTF-8", name);
                Self::utf8()
            }
        }
    }

    pub fn is_utf8(&self) -> bool {
        self.mib == UTF_8
    }

    /// Encodes `text` in this charset. Characters the charset cannot hold
    /// become numeric character references.
    pub fn encode<'a>(&self, text: &'a str) -> Cow<'a, [u8]> {
        let (bytes, _, unmappable) = self.encoding.encode(text);
        if unmappable {
            log::warn!(
                "'{}' has characters outside {}, written as character references",
                text,
                self.encoding.name()
            );
        }
        bytes
    }
}

/// Decodes a source document sent in `charset` (UTF-8 when `None` or
/// unknown). A byte order mark overrides the declared charset.
pub fn decode<'a>(source: &'a [u8], charset: Option<&str>) -> Result<Cow<'a, str>, MarkupError> {
    let encoding = charset
        .and_then(|name| {
            let found = Encoding::for_label(name.trim().as_bytes());
            if found.is_none() {
                log::warn!("Unknown source charset '{}', decoding as UTF-8", name);
            }
            found
        })
        .unwrap_or(encoding_rs::UTF_8);
    let (text, used, malformed) = encoding.decode(source);
    if malformed {
        return Err(MarkupError::Decode {
            charset: used.name().to_string(),
        });
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_charsets() {
        assert_eq!(lookup("UTF-8"), Some(106));
        assert_eq!(lookup("iso-8859-1"), Some(4));
        assert_eq!(lookup("ISO_8859_9"), Some(12));
        assert_eq!(lookup("windows-1252"), Some(2252));
        assert_eq!(lookup("WINDOWS-1258"), Some(2258));
        assert_eq!(lookup("ISO-8859-15"), None);
    }

    #[test]
    fn resolve_keeps_the_requested_identifier() {
        let latin1 = Charset::resolve(Some("ISO-8859-1"));
        assert_eq!(latin1.mib, 4);
        assert_eq!(latin1.encode("café").as_ref(), b"caf\xE9");

        let cp1252 = Charset::resolve(Some("windows-1252"));
        assert_eq!(cp1252.mib, 2252);
        assert!(!cp1252.is_utf8());
    }

    #[test]
    fn resolve_falls_back_to_utf8() {
        assert_eq!(Charset::resolve(None), Charset::utf8());
        assert_eq!(Charset::resolve(Some("no-such-charset")), Charset::utf8());
        assert_eq!(Charset::resolve(Some("UTF-16LE")), Charset::utf8());
        assert_eq!(Charset::resolve(Some("KOI8-R")), Charset::utf8());
    }

    #[test]
    fn unmappable_characters_become_references() {
        let latin1 = Charset::resolve(Some("ISO-8859-1"));
        assert_eq!(latin1.encode("a\u{0100}").as_ref(), b"a&#256;");
    }

    #[test]
    fn decode_in_declared_charset() {
        assert_eq!(decode(b"caf\xE9", Some("ISO-8859-1")).unwrap(), "café");
        assert_eq!(decode("café".as_bytes(), None).unwrap(), "café");
        assert!(matches!(
            decode(b"caf\xE9", Some("UTF-8")),
            Err(MarkupError::Decode { .. })
        ));
    }

    #[test]
    fn byte_order_mark_wins() {
        assert_eq!(decode(b"\xEF\xBB\xBFok", Some("ISO-8859-1")).unwrap(), "ok");
    }
}
