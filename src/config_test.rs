use super::*;

#[test]
fn default_config_has_no_base_url() {
    let config = DashboardConfig::default();
    assert_eq!(config.base_url(), None);
    assert_eq!(config.login_page, "login.html");
    assert_eq!(config.default_section, "dashboard");
    assert_eq!(config.user_storage_key, "userData");
}

#[test]
fn with_base_url_keeps_fixed_defaults() {
    let config = DashboardConfig::with_base_url("https://api.example.com/exec");
    assert_eq!(config.base_url(), Some("https://api.example.com/exec"));
    assert_eq!(config.login_page, DEFAULT_LOGIN_PAGE);
}

#[test]
fn normalize_base_url_trims_and_drops_blank() {
    assert_eq!(
        normalize_base_url(Some("  https://x.test  ".to_owned())),
        Some("https://x.test".to_owned())
    );
    assert_eq!(normalize_base_url(Some("   ".to_owned())), None);
    assert_eq!(normalize_base_url(None), None);
}

#[test]
fn resolve_prefers_page_value() {
    assert_eq!(
        resolve_base_url(Some("https://page.test/exec".to_owned()), Some("https://build.test")),
        Some("https://page.test/exec".to_owned())
    );
}

#[test]
fn resolve_falls_back_to_build_value_when_page_is_blank_or_undefined() {
    assert_eq!(
        resolve_base_url(Some("  ".to_owned()), Some(" https://build.test ")),
        Some("https://build.test".to_owned())
    );
    assert_eq!(
        resolve_base_url(None, Some("https://build.test")),
        Some("https://build.test".to_owned())
    );
}

#[test]
fn resolve_without_any_value_is_unset() {
    assert_eq!(resolve_base_url(None, None), None);
    assert_eq!(resolve_base_url(Some(String::new()), Some("")), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn page_value_is_absent_off_browser() {
    assert_eq!(page_base_url(), None);
}
