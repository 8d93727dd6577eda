//! # wapgate-dialects
//!
//! Token tables and header rules for the four WAP content types compiled
//! to WBXML, and the entry points that run the shared tree compiler with
//! them.
//!
//! ## Key Abstractions
//!
//! - [`DialectSet`]: the five dialect configurations (WML, SI, SL, Nokia
//!   OTA, OMA provisioning), built once and shared by any number of
//!   threads.
//! - [`wml`], [`si`], [`sl`], [`ota`]: the static tables of each dialect.
//! - [`public_ids`]: the WBXML public identifier table.

pub mod ota;
pub mod public_ids;
pub mod si;
pub mod sl;
pub mod wml;

use wapgate_markup::charset::{self, Charset, UTF_8};
use wapgate_markup::MarkupDocument;
use wapgate_wbxml::{CompileError, DialectConfig, Header, TreeCompiler};

#[derive(Debug, Clone)]
pub struct DialectSet {
    wml: DialectConfig,
    si: DialectConfig,
    sl: DialectConfig,
    ota: DialectConfig,
    oma: DialectConfig,
}

impl Default for DialectSet {
    fn default() -> Self {
        Self::new()
    }
}

impl DialectSet {
    pub fn new() -> Self {
        Self {
            wml: wml::config(),
            si: si::config(),
            sl: sl::config(),
            ota: ota::nokia_config(),
            oma: ota::oma_config(),
        }
    }

    pub fn wml(&self) -> &DialectConfig {
        &self.wml
    }

    pub fn si(&self) -> &DialectConfig {
        &self.si
    }

    pub fn sl(&self) -> &DialectConfig {
        &self.sl
    }

    /// The OTA configuration a document will be compiled with.
    pub fn ota_for(&self, doc: &MarkupDocument) -> &DialectConfig {
        if ota::is_oma(doc.public_id.as_deref()) {
            &self.oma
        } else {
            &self.ota
        }
    }

    /// Compiles a WML deck. `charset` names the character set the deck is
    /// sent in (UTF-8 when `None`): the header declares it and every string
    /// is encoded in it. `version` is a WBXML version label such as `"1.3"`.
    pub fn compile_wml(
        &self,
        doc: &MarkupDocument,
        charset: Option<&str>,
        version: Option<&str>,
    ) -> Result<Vec<u8>, CompileError> {
        let charset = Charset::resolve(charset);
        let header = Header {
            version: wml::version_for(version),
            public_id: wml::public_id_from_doctype(doc.public_id.as_deref()),
            charset: charset.mib,
        };
        TreeCompiler::new(&self.wml).compile_with_charset(&doc.root, header, charset)
    }

    pub fn compile_si(
        &self,
        doc: &MarkupDocument,
        charset: Option<&str>,
    ) -> Result<Vec<u8>, CompileError> {
        compile_utf8(&self.si, doc, charset)
    }

    pub fn compile_sl(
        &self,
        doc: &MarkupDocument,
        charset: Option<&str>,
    ) -> Result<Vec<u8>, CompileError> {
        compile_utf8(&self.sl, doc, charset)
    }

    /// Compiles an OTA settings or OMA provisioning document, chosen by
    /// the DOCTYPE.
    pub fn compile_ota(
        &self,
        doc: &MarkupDocument,
        charset: Option<&str>,
    ) -> Result<Vec<u8>, CompileError> {
        compile_utf8(self.ota_for(doc), doc, charset)
    }
}

/// SI, SL and OTA documents are always sent as UTF-8.
fn compile_utf8(
    config: &DialectConfig,
    doc: &MarkupDocument,
    charset: Option<&str>,
) -> Result<Vec<u8>, CompileError> {
    if let Some(name) = charset
        && charset::lookup(name) != Some(UTF_8)
    {
        log::info!(
            "{} documents are encoded as UTF-8, ignoring charset '{}'",
            config.name,
            name
        );
    }
    let header = Header {
        version: config.version,
        public_id: config.public_id,
        charset: UTF_8,
    };
    TreeCompiler::new(config).compile(&doc.root, header)
}
