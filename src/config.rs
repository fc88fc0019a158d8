//! Dashboard configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend address is supplied by the hosting page as the global
//! `API_BASE_URL`, declared by a script ahead of the bundle either as
//! `const API_BASE_URL = "..."` or as a `window` property. When the page
//! leaves it undefined or blank the `DASHBOARD_API_BASE_URL` variable captured
//! at compile time is used. Everything else is fixed.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Looks the page global up by name the way `typeof` does, so a classic
/// `const API_BASE_URL = ...` binding is found even though it never becomes a
/// `window` property.
#[cfg(feature = "hydrate")]
const BASE_URL_LOOKUP: &str =
    "return typeof API_BASE_URL === 'undefined' ? undefined : API_BASE_URL;";

pub const DEFAULT_LOGIN_PAGE: &str = "login.html";
pub const DEFAULT_SECTION: &str = "dashboard";
pub const USER_STORAGE_KEY: &str = "userData";

/// Settings the dashboard controller reads at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Backend base address; `None` means startup must fail closed.
    pub api_base_url: Option<String>,
    /// Page the browser is sent to after logout.
    pub login_page: String,
    /// Section revealed once the initial load settles.
    pub default_section: String,
    /// `localStorage` slot holding the serialized user record.
    pub user_storage_key: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            login_page: DEFAULT_LOGIN_PAGE.to_owned(),
            default_section: DEFAULT_SECTION.to_owned(),
            user_storage_key: USER_STORAGE_KEY.to_owned(),
        }
    }
}

impl DashboardConfig {
    /// Build a config pointing at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: Some(base_url.into()),
            ..Self::default()
        }
    }

    /// Resolve the base address from the hosting page, then from the
    /// compile-time environment.
    pub fn from_environment() -> Self {
        Self {
            api_base_url: resolve_base_url(
                page_base_url(),
                option_env!("DASHBOARD_API_BASE_URL"),
            ),
            ..Self::default()
        }
    }

    /// The configured base address, if any.
    pub fn base_url(&self) -> Option<&str> {
        self.api_base_url.as_deref()
    }
}

/// Blank values count as undefined.
fn normalize_base_url(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Page value wins when it is set and non-blank; otherwise the build value.
fn resolve_base_url(page: Option<String>, build: Option<&str>) -> Option<String> {
    normalize_base_url(page).or_else(|| normalize_base_url(build.map(ToOwned::to_owned)))
}

fn page_base_url() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let lookup = js_sys::Function::new_no_args(BASE_URL_LOOKUP);
        lookup
            .call0(&wasm_bindgen::JsValue::UNDEFINED)
            .ok()
            .and_then(|value| value.as_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
