//! Multi-byte unsigned integers: big-endian 7-bit groups, the high bit set on
//! every octet but the last.

/// Appends the minimal encoding of `value` to `out`.
pub fn write_uintvar(out: &mut Vec<u8>, value: u32) {
    let mut groups = [0u8; 5];
    let mut count = 0;
    let mut rest = value;
    loop {
        groups[count] = (rest & 0x7F) as u8;
        count += 1;
        rest >>= 7;
        if rest == 0 {
            break;
        }
    }
    for i in (0..count).rev() {
        let continuation = if i > 0 { 0x80 } else { 0x00 };
        out.push(groups[i] | continuation);
    }
}

pub fn uintvar(value: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(value));
    write_uintvar(&mut out, value);
    out
}

/// Number of octets [`write_uintvar`] emits for `value`.
pub fn encoded_len(value: u32) -> usize {
    let bits = 32 - value.leading_zeros() as usize;
    bits.div_ceil(7).max(1)
}

/// Reads one uintvar from the front of `bytes`, returning the value and the
/// number of octets consumed. Overlong (leading `0x80`), truncated and
/// overflowing encodings yield `None`.
pub fn read_uintvar(bytes: &[u8]) -> Option<(u32, usize)> {
    if bytes.first() == Some(&0x80) {
        return None;
    }
    let mut value: u64 = 0;
    for (i, &byte) in bytes.iter().take(5).enumerate() {
        value = (value << 7) | u64::from(byte & 0x7F);
        if byte & 0x80 == 0 {
            return u32::try_from(value).ok().map(|v| (v, i + 1));
        }
    }
    None
}
