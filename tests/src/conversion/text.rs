#![cfg(test)]
use ipconv_common::buffer::parse_buffer;
use ipconv_core::classifier::classify;
use ipconv_core::convert::buffer_to_address_text;

fn text(buffer: &[u8], offset: Option<i64>, length: Option<i64>) -> Option<String> {
    buffer_to_address_text(buffer, offset, length)
}

#[test]
fn to_text_ipv4() {
    assert_eq!(text(&[0, 0, 0, 0], None, None).as_deref(), Some("0.0.0.0"));
    assert_eq!(text(&[0, 0, 127, 1, 2, 3], Some(2), None).as_deref(), Some("127.1.2.3"));
    assert_eq!(
        text(&[0, 0, 255, 255, 255, 255, 0, 0], Some(2), Some(4)).as_deref(),
        Some("255.255.255.255")
    );
    assert_eq!(text(&[8, 255, 254, 0], None, None).as_deref(), Some("8.255.254.0"));
}

#[test]
fn to_text_ipv6() {
    let cases = [
        ("00000000000000000000000000000000", "::"),
        ("00000000000000000000ffffabcd1234", "::ffff:171.205.18.52"),
        ("1234000000000000000000000000abcd", "1234::abcd"),
        ("123456789abcdef043218765cba90fed", "1234:5678:9abc:def0:4321:8765:cba9:fed"),
    ];
    for (hex, expected) in cases {
        let bytes = parse_buffer(hex).unwrap();
        assert_eq!(text(&bytes, None, None).as_deref(), Some(expected));
    }
}

#[test]
fn to_text_compatible_form_is_equivalent() {
    let bytes = parse_buffer("000000000000000000000000abcd1234").unwrap();
    let formatted = text(&bytes, None, None).unwrap();
    assert_eq!(classify(&formatted).unwrap().as_bytes(), &bytes[..]);
}

#[test]
fn to_text_negative_offset() {
    let buffer = [9, 9, 10, 0, 0, 1];
    assert_eq!(text(&buffer, Some(-4), None).as_deref(), Some("10.0.0.1"));
    assert_eq!(text(&buffer, Some(-4), Some(4)).as_deref(), Some("10.0.0.1"));
    assert_eq!(text(&buffer, Some(-10), Some(4)), None);
}

#[test]
fn to_text_rejects_wrong_lengths() {
    assert_eq!(text(&[], None, None), None);
    assert_eq!(text(&[0; 5], None, None), None);
    assert_eq!(text(&[0; 1], None, None), None);
    assert_eq!(text(&[0; 15], None, None), None);
    assert_eq!(text(&[0; 16], Some(1), None), None);
    assert_eq!(text(&[0; 4], Some(1), Some(4)), None);
    assert_eq!(text(&[0; 6], Some(1), Some(16)), None);
}
