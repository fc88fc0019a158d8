//! Browser shell: blocking alerts, the session cookie, and page navigation.
//!
//! TRADE-OFFS
//! ==========
//! These are fire-and-forget browser side effects; SSR paths no-op so server
//! rendering stays deterministic.

/// Cookie assignment that expires the `session` credential.
pub const EXPIRED_SESSION_COOKIE: &str = "session=; expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/;";

/// Side effects the controller needs from the hosting page.
pub trait Shell {
    /// Show a blocking, modal notice.
    fn alert(&self, message: &str);
    /// Expire the externally-set session credential.
    fn expire_session(&self);
    /// Leave the dashboard for `href`.
    fn redirect(&self, href: &str);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserShell;

impl Shell for BrowserShell {
    fn alert(&self, message: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message;
        }
    }

    fn expire_session(&self) {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let document = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok());
            if let Some(document) = document {
                let _ = document.set_cookie(EXPIRED_SESSION_COOKIE);
            }
        }
    }

    fn redirect(&self, href: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(href);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = href;
        }
    }
}
