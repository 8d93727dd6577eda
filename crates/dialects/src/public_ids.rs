//! WBXML public identifiers (WAP-192 section 7.2.1).

/// Value written when the document type is not in the table.
pub const UNKNOWN: u32 = 0x01;

const PUBLIC_IDS: &[(&str, u32)] = &[
    ("-//WAPFORUM//DTD WML 1.0//EN", 0x02),
    ("-//WAPFORUM//DTD WTA 1.0//EN", 0x03),
    ("-//WAPFORUM//DTD WML 1.1//EN", 0x04),
    ("-//WAPFORUM//DTD SI 1.0//EN", 0x05),
    ("-//WAPFORUM//DTD SL 1.0//EN", 0x06),
    ("-//WAPFORUM//DTD CO 1.0//EN", 0x07),
    ("-//WAPFORUM//DTD CHANNEL 1.1//EN", 0x08),
    ("-//WAPFORUM//DTD WML 1.2//EN", 0x09),
    ("-//WAPFORUM//DTD WML 1.3//EN", 0x0A),
    ("-//WAPFORUM//DTD PROV 1.0//EN", 0x0B),
    ("-//WAPFORUM//DTD WTA-WML 1.2//EN", 0x0C),
    ("-//WAPFORUM//DTD CHANNEL 1.2//EN", 0x0D),
];

pub fn public_id_for(dtd: &str) -> Option<u32> {
    PUBLIC_IDS
        .iter()
        .find(|(name, _)| *name == dtd)
        .map(|(_, id)| *id)
}
