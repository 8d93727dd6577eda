//! # wapgate
//!
//! Compiles textual WAP content (WML decks, Service Indication and Service
//! Loading push messages, OTA provisioning documents) into WBXML for
//! delivery over the air.
//!
//! ```no_run
//! use wapgate::Gateway;
//!
//! let gateway = Gateway::default();
//! let converted = gateway
//!     .convert("text/vnd.wap.sl", br#"<sl href="http://www.example.com/"/>"#, None, None)
//!     .unwrap();
//! assert_eq!(converted.content_type, "application/vnd.wap.slc");
//! ```

pub mod config;
pub mod converter;
pub mod error;

pub use config::GatewayConfig;
pub use converter::{CONVERTERS, Converted, Converter, Dialect, Gateway, GatewayBuilder, converter_for};
pub use error::{ConfigError, GatewayError};

pub use wapgate_dialects::DialectSet;
pub use wapgate_markup::{MarkupDocument, MarkupNode, parse_document};
pub use wapgate_wbxml::CompileError;
