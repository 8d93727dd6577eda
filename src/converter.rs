// src/converter.rs
use crate::config::GatewayConfig;
use crate::error::GatewayError;
use std::path::Path;
use std::sync::Arc;
use wapgate_dialects::DialectSet;
use wapgate_markup::charset;
use wapgate_markup::parse_document;

/// The document types the gateway can compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Wml,
    Si,
    Sl,
    Ota,
}

impl Dialect {
    /// Guesses the dialect from a source file extension.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "wml" => Some(Dialect::Wml),
            "si" => Some(Dialect::Si),
            "sl" => Some(Dialect::Sl),
            "xml" => Some(Dialect::Ota),
            _ => None,
        }
    }

    pub fn converter(self) -> &'static Converter {
        match self {
            Dialect::Wml => &CONVERTERS[0],
            Dialect::Si => &CONVERTERS[1],
            Dialect::Sl => &CONVERTERS[2],
            Dialect::Ota => &CONVERTERS[3],
        }
    }
}

/// One row of the content conversion table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    pub source_type: &'static str,
    pub target_type: &'static str,
    pub dialect: Dialect,
}

pub const CONVERTERS: &[Converter] = &[
    Converter {
        source_type: "text/vnd.wap.wml",
        target_type: "application/vnd.wap.wmlc",
        dialect: Dialect::Wml,
    },
    Converter {
        source_type: "text/vnd.wap.si",
        target_type: "application/vnd.wap.sic",
        dialect: Dialect::Si,
    },
    Converter {
        source_type: "text/vnd.wap.sl",
        target_type: "application/vnd.wap.slc",
        dialect: Dialect::Sl,
    },
    Converter {
        source_type: "text/vnd.wap.connectivity-xml",
        target_type: "application/vnd.wap.connectivity-wbxml",
        dialect: Dialect::Ota,
    },
];

/// Finds the converter for a content type, ignoring any parameters.
pub fn converter_for(content_type: &str) -> Option<&'static Converter> {
    let media_type = content_type.split(';').next().unwrap_or_default().trim();
    CONVERTERS
        .iter()
        .find(|c| c.source_type.eq_ignore_ascii_case(media_type))
}

/// The `charset` parameter of a content type, if it has one.
pub fn charset_parameter(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
    })
}

/// A compiled payload and the content type to send it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

/// Converts textual WAP content to its binary form.
///
/// Cloning is cheap; clones share the dialect tables.
#[derive(Debug, Clone)]
pub struct Gateway {
    dialects: Arc<DialectSet>,
    config: GatewayConfig,
}

impl Default for Gateway {
    fn default() -> Self {
        Self::new(GatewayConfig::default())
    }
}

impl Gateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            dialects: Arc::new(DialectSet::new()),
            config,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn dialects(&self) -> &DialectSet {
        &self.dialects
    }

    /// Parses `body` as the given content type and compiles it. `charset`
    /// falls back to the content type's `charset` parameter, then to the
    /// configured default; `version` falls back to the configured default.
    pub fn convert(
        &self,
        content_type: &str,
        body: &[u8],
        charset: Option<&str>,
        version: Option<&str>,
    ) -> Result<Converted, GatewayError> {
        let converter = converter_for(content_type)
            .ok_or_else(|| GatewayError::UnsupportedContentType(content_type.to_string()))?;
        let charset = charset.or_else(|| charset_parameter(content_type));
        let body = self.compile(converter.dialect, body, charset, version)?;
        Ok(Converted {
            content_type: converter.target_type,
            body,
        })
    }

    /// Decodes `source` from `charset` and compiles it as `dialect`.
    pub fn compile(
        &self,
        dialect: Dialect,
        source: &[u8],
        charset: Option<&str>,
        version: Option<&str>,
    ) -> Result<Vec<u8>, GatewayError> {
        let charset = charset.or(Some(self.config.default_charset.as_str()));
        let source = charset::decode(source, charset)?;
        let doc = parse_document(&source)?;
        let version = version.or(self.config.wbxml_version.as_deref());
        log::debug!("Compiling {:?} document", dialect);

        let bytes = match dialect {
            Dialect::Wml => self.dialects.compile_wml(&doc, charset, version)?,
            Dialect::Si => self.dialects.compile_si(&doc, charset)?,
            Dialect::Sl => self.dialects.compile_sl(&doc, charset)?,
            Dialect::Ota => self.dialects.compile_ota(&doc, charset)?,
        };
        Ok(bytes)
    }
}

/// A builder for creating a [`Gateway`].
#[derive(Debug, Default)]
pub struct GatewayBuilder {
    config: GatewayConfig,
}

impl GatewayBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Starts from a JSON configuration file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, GatewayError> {
        self.config = GatewayConfig::from_file(path)?;
        Ok(self)
    }

    pub fn with_config(mut self, config: GatewayConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_default_charset(mut self, charset: impl Into<String>) -> Self {
        self.config.default_charset = charset.into();
        self
    }

    pub fn with_wbxml_version(mut self, version: impl Into<String>) -> Self {
        self.config.wbxml_version = Some(version.into());
        self
    }

    pub fn build(self) -> Gateway {
        Gateway::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wapgate_markup::MarkupError;

    #[test]
    fn content_type_parameters_are_ignored() {
        let converter = converter_for("text/vnd.wap.wml; charset=ISO-8859-1").unwrap();
        assert_eq!(converter.target_type, "application/vnd.wap.wmlc");
        assert_eq!(
            converter_for("TEXT/VND.WAP.SI").map(|c| c.dialect),
            Some(Dialect::Si)
        );
        assert!(converter_for("text/html").is_none());
    }

    #[test]
    fn charset_parameter_is_found() {
        assert_eq!(
            charset_parameter("text/vnd.wap.wml; level=1; Charset=\"ISO-8859-1\""),
            Some("ISO-8859-1")
        );
        assert_eq!(charset_parameter("text/vnd.wap.wml"), None);
    }

    #[test]
    fn dialect_from_extension() {
        assert_eq!(Dialect::from_extension(Path::new("deck.wml")), Some(Dialect::Wml));
        assert_eq!(Dialect::from_extension(Path::new("push.SI")), Some(Dialect::Si));
        assert_eq!(Dialect::from_extension(Path::new("prov.xml")), Some(Dialect::Ota));
        assert_eq!(Dialect::from_extension(Path::new("notes.txt")), None);
        assert_eq!(Dialect::from_extension(Path::new("Makefile")), None);
    }

    #[test]
    fn every_dialect_has_a_converter() {
        for dialect in [Dialect::Wml, Dialect::Si, Dialect::Sl, Dialect::Ota] {
            assert_eq!(dialect.converter().dialect, dialect);
        }
    }

    #[test]
    fn unsupported_content_type() {
        let err = Gateway::default()
            .convert("image/png", b"<x/>", None, None)
            .unwrap_err();
        assert!(matches!(err, GatewayError::UnsupportedContentType(ref t) if t == "image/png"));
    }

    #[test]
    fn invalid_utf8_body_is_a_markup_error() {
        let err = Gateway::default()
            .convert("text/vnd.wap.sl", &[0x3C, 0xFF, 0x3E], None, None)
            .unwrap_err();
        assert!(matches!(err, GatewayError::Markup(MarkupError::Decode { .. })));
    }

    #[test]
    fn latin1_body_is_decoded_and_reencoded() {
        let body = b"<wml><card><p>caf\xE9</p></card></wml>";
        let converted = Gateway::default()
            .convert("text/vnd.wap.wml", body, Some("ISO-8859-1"), None)
            .unwrap();
        assert_eq!(
            converted.body,
            vec![
                0x01, 0x04, 0x04, 0x00, 0x7F, 0x67, 0x60, 0x03, b'c', b'a', b'f', 0xE9, 0x00,
                0x01, 0x01, 0x01
            ]
        );
    }

    #[test]
    fn latin1_push_body_is_sent_as_utf8() {
        let body = b"<si><indication href=\"http://a.b/\">caf\xE9</indication></si>";
        let converted = Gateway::default()
            .convert("text/vnd.wap.si", body, Some("ISO-8859-1"), None)
            .unwrap();
        assert_eq!(converted.body[2], 0x6A);
        assert!(converted.body.windows(2).any(|w| w == [0xC3, 0xA9]));
    }

    #[test]
    fn builder_overrides_config() {
        let gateway = GatewayBuilder::new()
            .with_default_charset("ISO-8859-1")
            .with_wbxml_version("1.3")
            .build();
        let converted = gateway
            .convert("text/vnd.wap.wml", b"<wml/>", None, None)
            .unwrap();
        assert_eq!(converted.body, vec![0x03, 0x04, 0x04, 0x00, 0x3F]);
    }
}
