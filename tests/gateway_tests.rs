mod common;

use common::fixtures::*;
use common::wbxml_assertions::*;
use common::{CompiledDocument, TestResult};
use proptest::prelude::*;
use std::io::Write;
use wapgate::{DialectSet, Gateway, GatewayBuilder, GatewayError, parse_document};
use wapgate_wbxml::{LiteralMode, TreeCompiler};

#[test]
fn converts_by_content_type() -> TestResult {
    let gateway = Gateway::default();
    let cases = [
        ("text/vnd.wap.wml", WML_GO, "application/vnd.wap.wmlc"),
        ("text/vnd.wap.si", SI_EMAIL, "application/vnd.wap.sic"),
        ("text/vnd.wap.sl; charset=utf-8", SL_EXECUTE, "application/vnd.wap.slc"),
        (
            "text/vnd.wap.connectivity-xml",
            OMA_BOOTSTRAP,
            "application/vnd.wap.connectivity-wbxml",
        ),
    ];
    for (source_type, body, target_type) in cases {
        let converted = gateway.convert(source_type, body.as_bytes(), None, None)?;
        assert_eq!(converted.content_type, target_type);
        assert!(!converted.body.is_empty());
    }
    Ok(())
}

#[test]
fn explicit_charset_and_version_reach_the_wml_header() -> TestResult {
    let converted = Gateway::default().convert(
        "text/vnd.wap.wml",
        WML_REPEATED_TEXT.as_bytes(),
        Some("ISO-8859-1"),
        Some("1.2"),
    )?;
    let doc = CompiledDocument::from_bytes(converted.body)?;
    assert_eq!((doc.version, doc.charset), (0x02, 4));
    Ok(())
}

#[test]
fn latin1_deck_stays_latin1() -> TestResult {
    let gateway = Gateway::default();
    let converted = gateway.convert("text/vnd.wap.wml", WML_LATIN1, Some("ISO-8859-1"), None)?;
    let doc = CompiledDocument::from_bytes(converted.body)?;
    assert_eq!(doc.charset, 4);
    assert_bytes_eq(&doc.table, b"Caf\xE9 menu\0");
    assert_bytes_eq(
        &doc.stream,
        &[0x7F, 0x67, 0x60, 0x83, 0x00, 0x01, 0x60, 0x83, 0x00, 0x01, 0x01, 0x01],
    );

    let from_parameter = gateway.convert(
        "text/vnd.wap.wml; charset=iso-8859-1",
        WML_LATIN1,
        None,
        None,
    )?;
    assert_bytes_eq(&from_parameter.body, &doc.bytes);
    Ok(())
}

#[test]
fn latin1_deck_read_as_utf8_is_rejected() {
    let err = Gateway::default()
        .convert("text/vnd.wap.wml", WML_LATIN1, None, None)
        .unwrap_err();
    assert!(matches!(err, GatewayError::Markup(_)));
}

#[test]
fn malformed_markup_is_reported() {
    let err = Gateway::default()
        .convert("text/vnd.wap.wml", b"<wml><card></wml>", None, None)
        .unwrap_err();
    assert!(matches!(err, GatewayError::Markup(_)));
}

#[test]
fn config_file_supplies_defaults() -> TestResult {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"{{ "defaultCharset": "windows-1252", "wbxmlVersion": "1.3", "logLevel": "warn" }}"#
    )?;
    let gateway = GatewayBuilder::new().with_config_file(file.path())?.build();
    assert_eq!(gateway.config().log_filter()?, log::LevelFilter::Warn);

    let converted = gateway.convert("text/vnd.wap.wml", b"<wml/>", None, None)?;
    assert_bytes_eq(&converted.body, &[0x03, 0x04, 0x91, 0x4C, 0x00, 0x3F]);
    Ok(())
}

#[test]
fn missing_config_file_is_an_error() {
    let err = GatewayBuilder::new()
        .with_config_file("/nonexistent/wapgate.json")
        .unwrap_err();
    assert!(matches!(err, GatewayError::Config(_)));
}

#[test]
fn concurrent_compiles_share_one_dialect_set() -> TestResult {
    let dialects = DialectSet::new();
    let docs = [WML_REPEATED_TEXT, WML_GO, WML_EMPHASIS]
        .into_iter()
        .map(parse_document)
        .collect::<Result<Vec<_>, _>>()?;
    let expected = docs
        .iter()
        .map(|doc| dialects.compile_wml(doc, None, None))
        .collect::<Result<Vec<_>, _>>()?;

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    docs.iter()
                        .map(|doc| dialects.compile_wml(doc, None, None).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
    Ok(())
}

proptest! {
    #[test]
    fn interning_never_grows_repeated_text(
        words in prop::collection::hash_set("[a-z]{6}", 1..6),
        repeats in 2usize..4,
    ) {
        let words: Vec<&str> = words.iter().map(String::as_str).collect();
        let mut paragraphs = Vec::new();
        for _ in 0..repeats {
            paragraphs.extend(words.iter().copied());
        }
        let doc = parse_document(&wml_with_paragraphs(&paragraphs)).unwrap();

        let tabled = DialectSet::new().compile_wml(&doc, None, None).unwrap();
        let simple_config = wapgate_dialects::wml::config().with_literal_mode(LiteralMode::Simple);
        let header = wapgate_wbxml::Header { version: 0x01, public_id: 0x04, charset: 106 };
        let simple = TreeCompiler::new(&simple_config).compile(&doc.root, header).unwrap();
        prop_assert!(tabled.len() <= simple.len());

        let compiled = CompiledDocument::from_bytes(tabled).unwrap();
        let entries = table_entries(&compiled.table);
        prop_assert_eq!(entries.len(), words.len());
        let mut expected_offset = 0;
        for (offset, entry) in entries {
            prop_assert_eq!(offset, expected_offset);
            expected_offset += entry.len() as u32 + 1;
        }
    }
}
