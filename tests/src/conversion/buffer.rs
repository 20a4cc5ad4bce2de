#![cfg(test)]
use ipconv_core::convert::{address_into_buffer, address_to_buffer};

fn hex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

#[test]
fn to_buffer_ipv4() {
    assert_eq!(address_to_buffer("0.0.0.0"), Some(vec![0, 0, 0, 0]));
    assert_eq!(address_to_buffer("127.1.2.3"), Some(vec![127, 1, 2, 3]));
    assert_eq!(address_to_buffer("255.255.255.255"), Some(vec![255, 255, 255, 255]));
}

#[test]
fn to_buffer_mapped_is_four_bytes() {
    assert_eq!(address_to_buffer("::ffff:8.255.254.0"), Some(vec![8, 255, 254, 0]));
    assert_eq!(address_to_buffer("::ffff:ffff:ffff"), Some(vec![255, 255, 255, 255]));
    assert_eq!(address_to_buffer("::ffff:192.0.2.1"), Some(vec![192, 0, 2, 1]));
}

#[test]
fn to_buffer_ipv6() {
    assert_eq!(address_to_buffer("::"), Some(hex("00000000000000000000000000000000")));
    assert_eq!(address_to_buffer("1234::abcd"), Some(hex("1234000000000000000000000000abcd")));
    assert_eq!(
        address_to_buffer("1234:5678:9abc:def0:4321:8765:cba9:0fed"),
        Some(hex("123456789abcdef043218765cba90fed"))
    );
    assert_eq!(
        address_to_buffer("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"),
        Some(hex("ffffffffffffffffffffffffffffffff"))
    );
    assert_eq!(
        address_to_buffer("ffff:ffff:ffff:ffff:ffff:ffff:255.255.255.255"),
        Some(hex("ffffffffffffffffffffffffffffffff"))
    );
}

#[test]
fn to_buffer_rejects_invalid_text() {
    for text in [
        "",
        "1.2.3.4.5",
        ":::",
        "foo",
        "-1",
        "[]",
        "true",
        "null",
        "not-an-ip",
        "ffff:ffff:ffff:ffff:ffff:ffff:255.255.255.2555",
    ] {
        assert_eq!(address_to_buffer(text), None, "{text:?}");
    }
}

#[test]
fn into_buffer_invalid_text_writes_nothing() {
    let mut buffer = [0xaa_u8; 20];
    assert_eq!(address_into_buffer("not-an-ip", &mut buffer, 0), None);
    assert_eq!(address_into_buffer("not-an-ip", &mut buffer, -4), None);
    assert_eq!(buffer, [0xaa_u8; 20]);
}

#[test]
fn into_buffer_sequence() {
    let mut buffer = [0u8; 20];

    assert_eq!(address_into_buffer("0.0.0.0", &mut buffer, 0), Some(4));
    assert_eq!(buffer[..4], [0, 0, 0, 0]);

    assert_eq!(address_into_buffer("127.1.2.3", &mut buffer, 4), Some(4));
    assert_eq!(buffer[..8], [0, 0, 0, 0, 127, 1, 2, 3]);

    assert_eq!(address_into_buffer("255.255.255.255", &mut buffer, 8), Some(4));
    assert_eq!(buffer[..12], [0, 0, 0, 0, 127, 1, 2, 3, 255, 255, 255, 255]);

    assert_eq!(address_into_buffer("::ffff:8.255.254.0", &mut buffer, 12), Some(4));
    assert_eq!(
        buffer[..16],
        [0, 0, 0, 0, 127, 1, 2, 3, 255, 255, 255, 255, 8, 255, 254, 0]
    );

    // -22 + 20 = -2: the first two address bytes fall before the buffer
    assert_eq!(address_into_buffer("::ffff:ffff:ffff", &mut buffer, -22), Some(4));
    assert_eq!(
        buffer[..16],
        [255, 255, 0, 0, 127, 1, 2, 3, 255, 255, 255, 255, 8, 255, 254, 0]
    );

    assert_eq!(address_into_buffer("::", &mut buffer, 0), Some(6));
    assert_eq!(buffer.to_vec(), hex("0000000000000000000000000000000000000000"));

    assert_eq!(address_into_buffer("1234::abcd", &mut buffer, 0), Some(6));
    assert_eq!(buffer.to_vec(), hex("1234000000000000000000000000abcd00000000"));

    assert_eq!(
        address_into_buffer("1234:5678:9abc:def0:4321:8765:cba9:0fed", &mut buffer, 4),
        Some(6)
    );
    assert_eq!(buffer.to_vec(), hex("12340000123456789abcdef043218765cba90fed"));
}

#[test]
fn into_buffer_clamps_at_end() {
    let mut buffer = [0u8; 6];
    assert_eq!(address_into_buffer("1.2.3.4", &mut buffer, 4), Some(4));
    assert_eq!(buffer, [0, 0, 0, 0, 1, 2]);

    let mut buffer = [0u8; 6];
    assert_eq!(address_into_buffer("1.2.3.4", &mut buffer, -1), Some(4));
    assert_eq!(buffer, [0, 0, 0, 0, 0, 1]);
}

#[test]
fn into_buffer_offset_at_boundary_copies_nothing() {
    let mut buffer = [9u8; 4];
    assert_eq!(address_into_buffer("1.2.3.4", &mut buffer, 4), Some(4));
    assert_eq!(address_into_buffer("1.2.3.4", &mut buffer, -8), Some(4));
    assert_eq!(address_into_buffer("::1", &mut buffer, 40), Some(6));
    assert_eq!(buffer, [9u8; 4]);
}
