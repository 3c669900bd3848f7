use tauri::{AppHandle, Emitter};
use url::Url;

use crate::{APP_LINK_SCHEME, MAIN_WINDOW_LABEL, SHELL_NAVIGATE_EVENT};

pub(crate) fn is_internal_link(url: &Url) -> bool {
    url.scheme() == APP_LINK_SCHEME
}

/// The shell's own deep-link routing: claims `yourapp://` links and hands
/// them to the webview for in-app navigation. A claimed link stays claimed
/// even if the forwarding emit fails; the event was consumed here.
pub(crate) fn handle<R: tauri::Runtime>(app_handle: &AppHandle<R>, url: &Url) -> bool {
    if !is_internal_link(url) {
        return false;
    }

    log::debug!("routing internal link {url}");
    if let Err(error) = app_handle.emit_to(MAIN_WINDOW_LABEL, SHELL_NAVIGATE_EVENT, url.as_str()) {
        log::warn!("failed to forward internal link {url} to webview: {error}");
    }
    true
}
