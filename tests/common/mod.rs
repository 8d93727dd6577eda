pub mod fixtures;
pub mod wbxml_assertions;

use wapgate::{Dialect, Gateway, GatewayError};
use wapgate_wbxml::read_uintvar;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A compiled document split into its header fields, string table and
/// token stream.
#[derive(Debug)]
pub struct CompiledDocument {
    pub bytes: Vec<u8>,
    pub version: u8,
    pub public_id: u32,
    pub charset: u32,
    pub table: Vec<u8>,
    pub stream: Vec<u8>,
}

impl CompiledDocument {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let version = *bytes.first().ok_or("empty document")?;
        let mut pos = 1;
        let mut fields = [0u32; 3];
        for field in fields.iter_mut() {
            let (value, used) =
                read_uintvar(bytes.get(pos..).unwrap_or_default()).ok_or("bad uintvar in header")?;
            *field = value;
            pos += used;
        }
        let [public_id, charset, table_len] = fields;
        let table_end = pos + table_len as usize;
        let table = bytes
            .get(pos..table_end)
            .ok_or("string table runs past the end")?
            .to_vec();
        let stream = bytes[table_end..].to_vec();
        Ok(Self {
            version,
            public_id,
            charset,
            table,
            stream,
            bytes,
        })
    }
}

/// Compiles `source` with a default gateway.
pub fn compile(dialect: Dialect, source: &str) -> Result<Vec<u8>, GatewayError> {
    Gateway::default().compile(dialect, source.as_bytes(), None, None)
}

pub fn compile_document(
    dialect: Dialect,
    source: &str,
) -> Result<CompiledDocument, Box<dyn std::error::Error>> {
    CompiledDocument::from_bytes(compile(dialect, source)?)
}
