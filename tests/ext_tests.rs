//! tests/ext_tests.rs
//! Method-style helpers on str and [u8]

mod common;

use bytekit::ext::{BytesExt, HashExt, StrExt};
use bytekit::{BytekitError, DigestAlgorithm, QueryParameterMap};
use common::{TEST_IV, TEST_IV_HEX, TEST_KEY_16};

#[test]
fn hash_strings() {
    assert_eq!("hello".md5_hash_string(), "5d41402abc4b2a76b9719d911017c592");
    assert_eq!("hello".sha1_hash_string(), "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d");
    assert_eq!(
        "hello".sha256_hash_string(),
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
    assert_eq!("abc".sha224_hash_data().len(), 28);
    assert_eq!("abc".sha384_hash_data().len(), 48);
    assert_eq!("abc".sha512_hash_data().len(), 64);
}

#[test]
fn str_and_bytes_hash_identically() {
    for alg in DigestAlgorithm::ALL {
        assert_eq!("payload".hash_data(alg), b"payload".hash_data(alg));
        assert_eq!("payload".hash_string(alg), b"payload"[..].hash_string(alg));
    }
}

#[test]
fn hmac_helpers() {
    let tag = "The quick brown fox jumps over the lazy dog"
        .hmac_sha256_hash_string_with_key("key")
        .unwrap();
    assert_eq!(
        tag,
        "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
    );

    let raw = b"The quick brown fox jumps over the lazy dog"
        .hmac_md5_hash_data_with_key(b"key")
        .unwrap();
    assert_eq!(hex::encode(raw), "80070713463e7749b90c2dc24911e275");

    assert_eq!("m".hmac_sha512_hash_data_with_key(b"k").unwrap().len(), 64);
    assert_eq!("m".hmac_sha384_hash_string_with_key("k").unwrap().len(), 96);
    assert_eq!("m".hmac_sha224_hash_string_with_key("k").unwrap().len(), 56);
    assert_eq!("m".hmac_sha1_hash_string_with_key("k").unwrap().len(), 40);
}

#[test]
fn base64_helpers() {
    assert_eq!("hello".base64_encoded_string(), "aGVsbG8=");
    assert_eq!("hello".base64_encoded_data(), b"aGVsbG8=");
    assert_eq!("aGVsbG8=".base64_decoded_data().unwrap(), b"hello");
    assert_eq!("aGVsbG8=".base64_decoded_string().unwrap(), "hello");
    assert_eq!([0xfbu8, 0xff, 0xfe].base64_encoded_url_safe_string(), "-__-");
    assert_eq!("not base64!".base64_decoded_data(), Err(BytekitError::InvalidBase64));
}

#[test]
fn url_helpers() {
    assert_eq!("a b/c".url_encoded_string(), "a%20b%2Fc");
    assert_eq!("a%20b%2Fc".url_decoded_string().unwrap(), "a b/c");

    let params = "https://x.test/p?a=1&b=2&a=3".url_query_parameters().unwrap();
    assert_eq!(params.get_text("a"), Some("3"));

    let extra: QueryParameterMap = [("q", "rust lang")].into_iter().collect();
    assert_eq!(
        "https://x.test/search".string_by_adding_url_query_parameters(&extra),
        "https://x.test/search?q=rust%20lang"
    );
}

#[test]
fn aes_helpers_roundtrip() {
    let text = "attack at dawn";

    let by_string = text
        .aes_encrypted_data_with_key_string(TEST_KEY_16, TEST_IV)
        .unwrap();
    let by_bytes = text
        .aes_encrypted_data_with_key(TEST_KEY_16.as_bytes(), TEST_IV.as_bytes())
        .unwrap();
    assert_eq!(by_string, by_bytes);

    let decrypted = by_string
        .aes_decrypted_data_with_key_string(TEST_KEY_16, TEST_IV)
        .unwrap();
    assert_eq!(decrypted.utf8_string().unwrap(), text);

    let hex_key = hex::encode(TEST_KEY_16);
    let by_hex = text
        .aes_encrypted_data_with_hex_key(&hex_key, TEST_IV_HEX)
        .unwrap();
    assert_eq!(
        by_hex
            .aes_decrypted_data_with_hex_key(&hex_key, TEST_IV_HEX)
            .unwrap(),
        text.as_bytes()
    );
    assert_eq!(
        by_hex
            .aes_decrypted_data_with_key(TEST_KEY_16.as_bytes(), &hex::decode(TEST_IV_HEX).unwrap())
            .unwrap(),
        text.as_bytes()
    );
}

#[test]
fn aes_helpers_report_errors() {
    assert_eq!(
        "x".aes_encrypted_data_with_key_string("short", TEST_IV),
        Err(BytekitError::InvalidKeyLength(5))
    );
    assert_eq!(
        "x".aes_encrypted_data_with_hex_key("xyz", TEST_IV_HEX),
        Err(BytekitError::InvalidHexEncoding)
    );
}

#[test]
fn string_helpers() {
    assert_eq!("  \n hello \t\n".trimmed_string(), "hello");
    assert_eq!(
        "a-b_c-d".string_by_deleting_characters_in_string("-_"),
        "abcd"
    );
    assert_eq!(
        "Hello {name}, {greet}!".string_by_replacing_with_pairs(&[
            ("{name}", "Bo"),
            ("{greet}", "welcome"),
            ("", "ignored"),
        ]),
        "Hello Bo, welcome!"
    );
    assert_eq!("hi".data_value(), b"hi");
    assert_eq!(b"hi".hex_string(), "6869");
}

#[test]
fn json_helper() {
    let value = r#"{"a": [1, 2], "b": "x"}"#.json_value().unwrap();
    assert_eq!(value["a"][1], 2);
    assert_eq!(value["b"], "x");

    assert!(matches!(
        "{not json".json_value(),
        Err(BytekitError::InvalidJson(_))
    ));
}

#[test]
fn utf8_string_rejects_invalid_bytes() {
    assert_eq!([0xffu8, 0x00].utf8_string(), Err(BytekitError::InvalidUtf8));
}
