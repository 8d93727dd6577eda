//! Output buffer of one compile: header fields, string table and token
//! stream.

use crate::dialect::LiteralMode;
use crate::string_table::{Piece, StringTable, splice};
use crate::tokens::{STR_END, STR_I, STR_T, SWITCH_PAGE};
use crate::uintvar::write_uintvar;
use wapgate_markup::charset::Charset;

/// Header fields written in front of the string table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version: u8,
    pub public_id: u32,
    pub charset: u32,
}

/// Owned by a single compile call and consumed by [`BinaryOutput::into_bytes`].
///
/// Text handed to the buffer is encoded in its charset; the string table
/// must already hold entries in the same charset.
#[derive(Debug)]
pub struct BinaryOutput {
    header: Header,
    mode: LiteralMode,
    table: StringTable,
    stream: Vec<u8>,
    code_page: u8,
    charset: Charset,
}

impl BinaryOutput {
    pub fn new(header: Header, mode: LiteralMode, table: StringTable) -> Self {
        Self {
            header,
            mode,
            table,
            stream: Vec::new(),
            code_page: 0,
            charset: Charset::utf8(),
        }
    }

    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    pub fn append_byte(&mut self, byte: u8) {
        self.stream.push(byte);
    }

    pub fn append_bytes(&mut self, bytes: &[u8]) {
        self.stream.extend_from_slice(bytes);
    }

    pub fn append_uintvar(&mut self, value: u32) {
        write_uintvar(&mut self.stream, value);
    }

    /// Writes `SWITCH_PAGE page` unless `page` is already current.
    pub fn switch_code_page(&mut self, page: u8) {
        if page != self.code_page {
            self.stream.push(SWITCH_PAGE);
            self.stream.push(page);
            self.code_page = page;
        }
    }

    pub fn code_page(&self) -> u8 {
        self.code_page
    }

    /// Writes `STR_I bytes STR_END`.
    pub fn append_inline(&mut self, run: &[u8]) {
        self.stream.push(STR_I);
        self.stream.extend_from_slice(run);
        self.stream.push(STR_END);
    }

    /// Writes `text` encoded as one inline string.
    pub fn append_inline_text(&mut self, text: &str) {
        let bytes = self.charset.encode(text);
        self.append_inline(&bytes);
    }

    /// Writes a literal run, replacing interned substrings with table
    /// references when the string table is in use.
    pub fn append_literal(&mut self, run: &str) {
        if run.is_empty() {
            return;
        }
        let run = self.charset.encode(run);
        match self.mode {
            LiteralMode::Simple => self.append_inline(&run),
            LiteralMode::Tabled => {
                let pieces = splice(&run, &self.table);
                for piece in pieces {
                    match piece {
                        Piece::Inline(bytes) => self.append_inline(bytes),
                        Piece::Reference(offset) => {
                            self.stream.push(STR_T);
                            self.append_uintvar(offset);
                        }
                    }
                }
            }
        }
    }

    /// Interns `text` in the string table and returns its offset.
    pub fn intern(&mut self, text: &str) -> u32 {
        let bytes = self.charset.encode(text);
        self.table.add(&bytes)
    }

    pub fn mode(&self) -> LiteralMode {
        self.mode
    }

    pub fn table(&self) -> &StringTable {
        &self.table
    }

    pub fn stream(&self) -> &[u8] {
        &self.stream
    }

    /// `[version][public_id][charset][table length][table][stream]`
    pub fn into_bytes(self) -> Vec<u8> {
        let table_len = self.table.byte_len();
        let mut out = Vec::with_capacity(16 + table_len as usize + self.stream.len());
        out.push(self.header.version);
        write_uintvar(&mut out, self.header.public_id);
        write_uintvar(&mut out, self.header.charset);
        write_uintvar(&mut out, table_len);
        self.table.write_to(&mut out);
        out.extend_from_slice(&self.stream);
        out
    }
}
