use super::*;

#[test]
fn encode_produces_expected_prefix() {
    let uri = DataUri::encode("image/png", b"abc");
    assert!(uri.starts_with("data:image/png;base64,"));
}

#[test]
fn parse_recovers_content_type_and_byte_length() {
    let payload = vec![0u8, 1, 2, 3, 254, 255];
    let uri = DataUri::encode("image/jpeg", &payload);
    let parsed = DataUri::parse(&uri).unwrap();
    assert_eq!(parsed.content_type, "image/jpeg");
    assert_eq!(parsed.bytes, payload);
}

#[test]
fn parse_rejects_missing_data_prefix() {
    assert!(matches!(DataUri::parse("image/png;base64,QUJD"), Err(DataUriError::BadFormat)));
}

#[test]
fn parse_rejects_non_base64_marker() {
    assert!(matches!(DataUri::parse("data:image/png,rawtext"), Err(DataUriError::BadFormat)));
}

#[test]
fn parse_rejects_invalid_base64_payload() {
    assert!(matches!(
        DataUri::parse("data:image/png;base64,%%%"),
        Err(DataUriError::BadPayload(_))
    ));
}
