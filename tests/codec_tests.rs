//! tests/codec_tests.rs
//! Base64 and percent-encoding

mod common;

use bytekit::codec::is_unreserved;
use bytekit::{
    decode_base64, decode_base64_to_text, decode_base64_url_safe, decode_percent, encode_base64,
    encode_base64_url_safe, encode_percent, BytekitError,
};
use common::test_payload;

#[test]
fn base64_hello() {
    assert_eq!(encode_base64(b"hello"), "aGVsbG8=");
    assert_eq!(decode_base64("aGVsbG8=").unwrap(), b"hello");
    assert_eq!(decode_base64_to_text("aGVsbG8=").unwrap(), "hello");
}

#[test]
fn base64_rfc4648_vectors() {
    let cases = [
        ("", ""),
        ("f", "Zg=="),
        ("fo", "Zm8="),
        ("foo", "Zm9v"),
        ("foob", "Zm9vYg=="),
        ("fooba", "Zm9vYmE="),
        ("foobar", "Zm9vYmFy"),
    ];
    for (plain, encoded) in cases {
        assert_eq!(encode_base64(plain.as_bytes()), encoded);
        assert_eq!(decode_base64(encoded).unwrap(), plain.as_bytes());
    }
}

#[test]
fn base64_roundtrip_binary() {
    for len in [0usize, 1, 2, 3, 4, 255, 256, 1000] {
        let data = test_payload(len);
        assert_eq!(decode_base64(&encode_base64(&data)).unwrap(), data);
        assert_eq!(
            decode_base64_url_safe(&encode_base64_url_safe(&data)).unwrap(),
            data
        );
    }
}

#[test]
fn base64_url_safe_alphabet() {
    let data = [0xfbu8, 0xff, 0xfe];
    assert_eq!(encode_base64(&data), "+//+");
    assert_eq!(encode_base64_url_safe(&data), "-__-");
    // padding is kept in the URL-safe variant
    assert_eq!(encode_base64_url_safe(b"f"), "Zg==");
}

#[test]
fn base64_alphabets_are_not_mixed() {
    assert_eq!(decode_base64("-__-"), Err(BytekitError::InvalidBase64));
    assert_eq!(decode_base64_url_safe("+//+"), Err(BytekitError::InvalidBase64));
}

#[test]
fn base64_rejects_malformed_input() {
    for bad in ["aGVsbG8", "aGVsbG8==", "aGVs bG8=", "aGVsbG8=\n", "a===", "*GVsbG8=", "Zh=="] {
        assert_eq!(decode_base64(bad), Err(BytekitError::InvalidBase64), "{bad:?}");
    }
}

#[test]
fn base64_text_requires_utf8() {
    let encoded = encode_base64(&[0xff, 0xfe]);
    assert_eq!(decode_base64_to_text(&encoded), Err(BytekitError::InvalidUtf8));
}

#[test]
fn percent_basic() {
    assert_eq!(encode_percent("a b/c"), "a%20b%2Fc");
    assert_eq!(decode_percent("a%20b%2Fc").unwrap(), "a b/c");
}

#[test]
fn percent_keeps_unreserved_set() {
    let unreserved = "ABCXYZabcxyz0123456789-_.~";
    assert_eq!(encode_percent(unreserved), unreserved);
    for byte in 0u8..=255 {
        let expected = byte.is_ascii_alphanumeric() || b"-_.~".contains(&byte);
        assert_eq!(is_unreserved(byte), expected, "{byte:#04x}");
    }
}

#[test]
fn percent_escapes_exactly_the_reserved_ascii_bytes() {
    for byte in 0u8..0x80 {
        let text = (byte as char).to_string();
        let expected = if is_unreserved(byte) {
            text.clone()
        } else {
            format!("%{byte:02X}")
        };
        assert_eq!(encode_percent(&text), expected, "{byte:#04x}");
    }
}

#[test]
fn percent_escapes_reserved_and_uses_uppercase_hex() {
    assert_eq!(
        encode_percent("!*'();:@&=+$,/?#[]"),
        "%21%2A%27%28%29%3B%3A%40%26%3D%2B%24%2C%2F%3F%23%5B%5D"
    );
    assert_eq!(encode_percent("%"), "%25");
    assert_eq!(encode_percent("\n"), "%0A");
}

#[test]
fn percent_non_ascii_roundtrip() {
    let text = "héllo wörld 你好 🔐";
    let encoded = encode_percent(text);
    assert!(encoded.is_ascii());
    assert!(encoded.starts_with("h%C3%A9llo%20"));
    assert_eq!(decode_percent(&encoded).unwrap(), text);
}

#[test]
fn percent_decode_accepts_lowercase_hex_and_plus() {
    assert_eq!(decode_percent("%2f%2F").unwrap(), "//");
    assert_eq!(decode_percent("a+b").unwrap(), "a+b");
    assert_eq!(decode_percent("").unwrap(), "");
}

#[test]
fn percent_decode_rejects_bad_escapes() {
    for bad in ["%", "abc%", "abc%2", "%zz", "%2g", "%%20"] {
        assert_eq!(
            decode_percent(bad),
            Err(BytekitError::InvalidPercentEncoding),
            "{bad:?}"
        );
    }
}

#[test]
fn percent_decode_requires_utf8() {
    assert_eq!(decode_percent("%FF%FE"), Err(BytekitError::InvalidUtf8));
    assert_eq!(decode_percent("%E2%82"), Err(BytekitError::InvalidUtf8));
}
