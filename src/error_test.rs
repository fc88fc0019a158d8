use super::*;

#[test]
fn configuration_errors_are_classified() {
    assert!(DashboardError::MissingBaseUrl.is_configuration());
    assert!(DashboardError::Unconfigured.is_configuration());
    let invalid = DashboardError::InvalidBaseUrl {
        url: "nope".to_owned(),
        source: url::ParseError::RelativeUrlWithoutBase,
    };
    assert!(invalid.is_configuration());
    assert!(!invalid.is_transport());
}

#[test]
fn status_error_is_transport() {
    let err = DashboardError::Status {
        request: "GET stats".to_owned(),
        status: 502,
    };
    assert!(err.is_transport());
    assert!(!err.is_parse());
    assert_eq!(err.to_string(), "GET stats failed with status 502");
}

#[test]
fn parse_error_message_names_request() {
    let err = DashboardError::Parse {
        request: "GET orders".to_owned(),
        message: "missing field `orders`".to_owned(),
    };
    assert!(err.is_parse());
    assert_eq!(err.to_string(), "malformed response from GET orders: missing field `orders`");
}
