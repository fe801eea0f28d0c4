// Unit tests for HttpStatusCode range classification

use crate::HttpStatusCode;

/// **VALUE**: Verifies the 2xx range matches the conventional success window.
///
/// **BUG THIS CATCHES**: An off-by-one on either boundary (199 treated as
/// success, or 299 treated as failure) would silently flip error relay
/// decisions in the generate route.
#[test]
fn given_boundary_codes_when_checking_success_then_range_is_200_to_299() {
    assert!(!HttpStatusCode(199).is_success());
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode(300).is_success());
}

#[test]
fn given_client_and_server_errors_when_classifying_then_ranges_do_not_overlap() {
    let not_found = HttpStatusCode::from(404);
    assert!(not_found.is_client_error());
    assert!(!not_found.is_server_error());

    let unavailable = HttpStatusCode::from(503);
    assert!(unavailable.is_server_error());
    assert!(!unavailable.is_client_error());
}

#[test]
fn given_status_code_when_displayed_then_shows_bare_number() {
    assert_eq!(HttpStatusCode(502).to_string(), "502");
}
