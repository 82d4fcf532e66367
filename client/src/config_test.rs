use super::*;

#[test]
fn missing_backend_host_is_same_origin() {
    assert_eq!(ClientConfig::from_backend_host(None).backend_host, "");
}

#[test]
fn backend_host_is_trimmed() {
    let config = ClientConfig::from_backend_host(Some("  https://sync.example.test/ "));
    assert_eq!(config.backend_host, "https://sync.example.test");
}
