#![cfg(test)]
use ipconv_core::convert::{AddressNumber, address_to_number};

fn v6(text: &str) -> String {
    match address_to_number(text) {
        Some(AddressNumber::V6(digits)) => digits.to_string(),
        other => panic!("expected an IPv6 number for {text:?}, got {other:?}"),
    }
}

#[test]
fn to_number_ipv4() {
    assert_eq!(address_to_number("0.0.0.0"), Some(AddressNumber::V4(0)));
    assert_eq!(address_to_number("127.1.2.3"), Some(AddressNumber::V4(0x7f01_0203)));
    assert_eq!(address_to_number("255.255.255.255"), Some(AddressNumber::V4(0xffff_ffff)));
    assert_eq!(address_to_number("255.255.255.254"), Some(AddressNumber::V4(0xffff_fffe)));
}

#[test]
fn to_number_mapped_is_ipv4() {
    assert_eq!(address_to_number("::ffff:8.255.254.0"), Some(AddressNumber::V4(0x08ff_fe00)));
    assert_eq!(address_to_number("::ffff:ffff:ffff"), Some(AddressNumber::V4(0xffff_ffff)));
}

#[test]
fn to_number_ipv6() {
    assert_eq!(v6("::"), "0");
    assert_eq!(v6("::0123:abcd"), 0x0123_abcd_u32.to_string());
    assert_eq!(
        v6("ffff:ffff:ffff:ffff:ffff:ffff:255.255.255.255"),
        "340282366920938463463374607431768211455"
    );
    assert_eq!(
        v6("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"),
        "340282366920938463463374607431768211455"
    );
    assert_eq!(
        v6("ffff:ffff:ffff:ffff:ffff:ffff:ffff:fffe"),
        "340282366920938463463374607431768211454"
    );
    assert_eq!(v6("2001:db8::1"), "42540766411282592856903984951653826561");
}

#[test]
fn to_number_rejects_invalid_text() {
    for text in ["", "1.2.3.4.5", ":::", "foo", "-1", "[]", "{}", "true", "false"] {
        assert_eq!(address_to_number(text), None, "{text:?}");
    }
}
