/// `STR_I text STR_END`
pub fn inline(text: &str) -> Vec<u8> {
    let mut bytes = vec![0x03];
    bytes.extend_from_slice(text.as_bytes());
    bytes.push(0x00);
    bytes
}

/// Concatenates byte pieces, for writing expected streams readably.
pub fn concat(pieces: &[&[u8]]) -> Vec<u8> {
    pieces.iter().flat_map(|p| p.iter().copied()).collect()
}

/// Splits a string table into `(offset, entry)` pairs.
pub fn table_entries(table: &[u8]) -> Vec<(u32, String)> {
    let mut entries = Vec::new();
    let mut offset = 0u32;
    for chunk in table.split_inclusive(|b| *b == 0) {
        assert_eq!(chunk.last(), Some(&0), "string table entry is not terminated");
        let text = String::from_utf8_lossy(&chunk[..chunk.len() - 1]).into_owned();
        entries.push((offset, text));
        offset += chunk.len() as u32;
    }
    entries
}

/// Offset of `text` in the string table, if present.
pub fn offset_of(table: &[u8], text: &str) -> Option<u32> {
    table_entries(table)
        .into_iter()
        .find(|(_, entry)| entry == text)
        .map(|(offset, _)| offset)
}

pub fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Byte comparison with a readable failure message.
pub fn assert_bytes_eq(actual: &[u8], expected: &[u8]) {
    assert!(
        actual == expected,
        "byte mismatch\n  actual:   {}\n  expected: {}",
        hex(actual),
        hex(expected)
    );
}
