mod common;

use common::fixtures::*;
use common::wbxml_assertions::*;
use common::{TestResult, compile, compile_document};
use wapgate::{CompileError, Dialect, GatewayError};

#[test]
fn oma_document_uses_provisioning_tables() -> TestResult {
    let doc = compile_document(Dialect::Ota, OMA_BOOTSTRAP)?;
    assert_eq!((doc.version, doc.public_id, doc.charset), (0x03, 0x0B, 106));
    assert_bytes_eq(
        &doc.stream,
        &concat(&[
            &[0xC5, 0x46, 0x01],
            &[0xC6, 0x56, 0x01],
            &[0x87, 0x07, 0x06],
            &inline("Example"),
            &[0x01],
            &[0x01],
            &[0xC6, 0x55, 0x01],
            &[0x87, 0x08, 0x06],
            &inline("internet"),
            &[0x01],
            // Tokenized VALUE: start token, then the value token.
            &[0x87, 0x09, 0x06, 0x89, 0x01],
            &[0x01],
            &[0x01],
        ]),
    );
    Ok(())
}

#[test]
fn nokia_settings_match_whole_values() -> TestResult {
    let doc = compile_document(Dialect::Ota, NOKIA_SETTINGS)?;
    assert_eq!((doc.version, doc.public_id), (0x01, 0x01));
    assert_bytes_eq(
        &doc.stream,
        &concat(&[
            &[0x45],
            &[0xC6, 0x06, 0x01],
            &[0x87, 0x12, 0x45, 0x01],
            &[0x87, 0x13, 0x11],
            &inline("10.11.12.13"),
            &[0x01],
            &[0x01, 0x01],
        ]),
    );
    Ok(())
}

#[test]
fn syncsettings_switches_element_table() -> TestResult {
    let doc = compile_document(Dialect::Ota, NOKIA_SYNCSETTINGS)?;
    assert_bytes_eq(
        &doc.stream,
        &concat(&[
            &[0x55],
            &[0x58],
            &inline("1.0"),
            &[0x01],
            &[0x50],
            &inline("http://sync.example.com"),
            &[0x01],
            &[0x01],
        ]),
    );
    Ok(())
}

#[test]
fn cdata_is_rejected() {
    let err = compile(Dialect::Ota, OTA_WITH_CDATA).unwrap_err();
    assert!(matches!(
        err,
        GatewayError::Compile(CompileError::MalformedInput(_))
    ));
}
