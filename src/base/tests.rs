use crate::base::neterror::NetError;

#[test]
fn test_net_error_codes() {
    assert_eq!(NetError::InvalidUrl.as_i32(), -300);
    assert_eq!(NetError::unsupported_shape("json").as_i32(), -10001);
    assert_eq!(
        NetError::cookie_decode_failed("bytes", "eof").as_i32(),
        -10002
    );
}

#[test]
fn test_collision_avoidance() {
    // Verify that we are not using the Blob error range (-900 to -906)
    // defined in Chromium's net_error_list.h
    let blob_range = -906..=-900;

    for err in [
        NetError::unsupported_shape("json"),
        NetError::cookie_decode_failed("bytes", "eof"),
    ] {
        assert!(!blob_range.contains(&err.as_i32()));
    }
}

#[test]
fn test_cookie_error_classification() {
    assert!(NetError::unsupported_shape("json").is_cookie_error());
    assert!(NetError::cookie_decode_failed("bytes", "eof").is_cookie_error());
    assert!(!NetError::InvalidUrl.is_cookie_error());
}

#[test]
fn test_error_display() {
    let err = NetError::unsupported_shape("json array");
    assert_eq!(
        err.to_string(),
        "Unsupported cookie input shape: json array"
    );

    let err = NetError::cookie_decode_failed("bytes", "EOF while parsing");
    assert_eq!(
        err.to_string(),
        "Cookie input could not be decoded: bytes: EOF while parsing"
    );
}
