use tauri::{AppHandle, Emitter};
use url::Url;

use crate::{AUTH_CALLBACK_SCHEME, AUTH_REDIRECT_EVENT, MAIN_WINDOW_LABEL};

pub(crate) fn is_auth_redirect(url: &Url) -> bool {
    url.scheme() == AUTH_CALLBACK_SCHEME
}

/// Identity-provider redirect completion: claims URLs on the OAuth callback
/// scheme and hands the full redirect URL to the webview identity layer.
/// Both router entry shapes funnel through here, so redirect handling and
/// its error reporting live in one place.
pub(crate) fn handle<R: tauri::Runtime>(app_handle: &AppHandle<R>, url: &Url) -> bool {
    if !is_auth_redirect(url) {
        return false;
    }

    log::debug!("completing oauth redirect");
    if let Err(error) = app_handle.emit_to(MAIN_WINDOW_LABEL, AUTH_REDIRECT_EVENT, url.as_str()) {
        log::warn!("failed to forward oauth redirect to webview: {error}");
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_auth_redirect_claims_callback_scheme() {
        let url = Url::parse("com.yourapp.auth://callback?code=abc").expect("url should parse");
        assert!(is_auth_redirect(&url));
    }

    #[test]
    fn is_auth_redirect_rejects_other_schemes() {
        for raw in ["yourapp://places/42", "https://oauth.example/callback"] {
            let url = Url::parse(raw).expect("url should parse");
            assert!(!is_auth_redirect(&url), "{raw} should not be an auth redirect");
        }
    }
}
