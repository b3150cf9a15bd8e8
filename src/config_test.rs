use super::*;

#[test]
fn resolve_base_url_defaults_when_unset() {
    assert_eq!(resolve_base_url(None), DEFAULT_API_URL);
}

#[test]
fn resolve_base_url_defaults_when_blank() {
    assert_eq!(resolve_base_url(Some("   ")), DEFAULT_API_URL);
}

#[test]
fn resolve_base_url_prefers_override() {
    assert_eq!(resolve_base_url(Some("https://api.booklyn.test/v1")), "https://api.booklyn.test/v1");
}

#[test]
fn new_trims_trailing_slashes() {
    let cfg = ApiConfig::new("https://api.booklyn.test/v1//");
    assert_eq!(cfg.base_url, "https://api.booklyn.test/v1");
}

#[test]
fn url_joins_paths_with_and_without_leading_slash() {
    let cfg = ApiConfig::new("http://localhost:8000/api/v1");
    assert_eq!(cfg.url("/users/me"), "http://localhost:8000/api/v1/users/me");
    assert_eq!(cfg.url("gigs/"), "http://localhost:8000/api/v1/gigs/");
}
