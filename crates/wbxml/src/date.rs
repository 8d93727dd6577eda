//! Opaque date values (`YYYY-MM-DDThh:mm:ssZ` packed as BCD).

use chrono::NaiveDateTime;

const LAYOUT: &[u8; 20] = b"dddd-dd-ddTdd:dd:ddZ";

/// Packs a UTC timestamp into BCD octets, two digits per octet, with
/// trailing zero octets removed. Returns `None` for anything that is not
/// a valid date in exactly that layout.
pub fn pack_date(value: &str) -> Option<Vec<u8>> {
    let bytes = value.as_bytes();
    if bytes.len() != LAYOUT.len() {
        return None;
    }
    let layout_ok = bytes.iter().zip(LAYOUT).all(|(b, l)| match l {
        b'd' => b.is_ascii_digit(),
        other => b == other,
    });
    if !layout_ok || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%SZ").is_err() {
        return None;
    }

    let digits: Vec<u8> = bytes
        .iter()
        .filter(|b| b.is_ascii_digit())
        .map(|b| b - b'0')
        .collect();
    let mut packed: Vec<u8> = digits.chunks(2).map(|pair| (pair[0] << 4) | pair[1]).collect();
    while packed.last() == Some(&0) {
        packed.pop();
    }
    Some(packed)
}
