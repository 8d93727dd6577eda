mod common;

use common::fixtures::*;
use common::wbxml_assertions::*;
use common::{TestResult, compile_document};
use wapgate::Dialect;

#[test]
fn service_indication_matches_reference_encoding() -> TestResult {
    let doc = compile_document(Dialect::Si, SI_EMAIL)?;
    assert_eq!((doc.version, doc.public_id, doc.charset), (0x02, 0x05, 106));
    assert!(doc.table.is_empty());
    assert_bytes_eq(
        &doc.stream,
        &concat(&[
            &[0x45, 0xC6],
            &[0x0D],
            &inline("xyz"),
            &[0x85],
            &inline("email/123/abc.wml"),
            &[0x11],
            &inline("123"),
            &[0x0A, 0xC3, 0x07, 0x19, 0x99, 0x06, 0x25, 0x15, 0x23, 0x15],
            &[0x10, 0xC3, 0x04, 0x19, 0x99, 0x06, 0x30],
            &[0x08],
            &[0x01],
            &inline("You have 4 new emails"),
            &[0x01, 0x01],
        ]),
    );
    Ok(())
}

#[test]
fn invalid_date_drops_only_that_attribute() -> TestResult {
    let doc = compile_document(Dialect::Si, SI_BAD_DATE)?;
    assert_bytes_eq(
        &doc.stream,
        &concat(&[
            &[0x45, 0xC6],
            &[0x11],
            &inline("7"),
            &[0x01],
            &inline("x"),
            &[0x01, 0x01],
        ]),
    );
    Ok(())
}

#[test]
fn service_loading_matches_reference_encoding() -> TestResult {
    let doc = compile_document(Dialect::Sl, SL_EXECUTE)?;
    assert_bytes_eq(
        &doc.bytes,
        &concat(&[
            &[0x02, 0x06, 0x6A, 0x00],
            &[0x85, 0x0A],
            &inline("example"),
            &[0x85],
            &inline("ppaid/123/abc.wml"),
            &[0x06, 0x01],
        ]),
    );
    Ok(())
}
