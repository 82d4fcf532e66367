use super::*;

#[test]
fn status_error_maps_unauthorized() {
    assert_eq!(status_error(401), ApiError::Unauthorized);
}

#[test]
fn status_error_keeps_other_statuses() {
    assert_eq!(status_error(403), ApiError::Status(403));
    assert_eq!(status_error(500), ApiError::Status(500));
}

#[test]
fn source_endpoints_format_expected_paths() {
    assert_eq!(source_endpoint(7), "/api/sources/7/");
    assert_eq!(source_run_endpoint(7, false), "/api/sources/7/run/");
    assert_eq!(source_run_endpoint(7, true), "/api/sources/7/dryrun/");
}

#[test]
fn client_exposes_shared_defaults() {
    let http = HttpDefaults::new("https://sync.example.test");
    let client = ApiClient::new(http.clone());
    http.set_token("abc");
    assert_eq!(client.http().authorization().as_deref(), Some("Token abc"));
    assert_eq!(client.http().url(SOURCES_ENDPOINT), "https://sync.example.test/api/sources/");
}

#[cfg(not(feature = "csr"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    let client = ApiClient::default();
    assert_eq!(futures::executor::block_on(client.list_sources()), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(client.obtain_token("a@b.test", "pw")), Err(ApiError::Unavailable));
}
