use tauri::AppHandle;
use tauri_plugin_deep_link::DeepLinkExt;
use url::Url;

use crate::{auth_redirect, framework_links, APP_LINK_SCHEME, AUTH_CALLBACK_SCHEME};

/// Tries each handler in order and short-circuits on the first claim. An
/// unclaimed event is not an error; the caller gets `false` back unchanged.
pub(crate) fn route_open_url(url: &Url, handlers: &mut [&mut dyn FnMut(&Url) -> bool]) -> bool {
    for handler in handlers.iter_mut() {
        if handler(url) {
            return true;
        }
    }
    false
}

/// Current-shape URL-open entry point. Framework deep links take priority
/// over OAuth redirects; reversing the order would let the identity handler
/// swallow in-app links.
pub fn on_open_url<R: tauri::Runtime>(app_handle: &AppHandle<R>, url: &Url) -> bool {
    let mut framework = |url: &Url| framework_links::handle(app_handle, url);
    let mut identity = |url: &Url| auth_redirect::handle(app_handle, url);

    let handled = route_open_url(url, &mut [&mut framework, &mut identity]);
    if !handled {
        log::debug!("url event left unhandled: {url}");
    }
    handled
}

/// Legacy-shape entry point for older hosts that deliver a source-application
/// identifier instead of an options map and carry no prior handled flag. It
/// delegates straight to redirect completion, with no fallback chain.
pub fn on_open_url_legacy<R: tauri::Runtime>(
    app_handle: &AppHandle<R>,
    url: &Url,
    source_application: Option<&str>,
) -> bool {
    if let Some(source) = source_application {
        log::debug!("legacy url event delivered by {source}");
    }
    auth_redirect::handle(app_handle, url)
}

/// Subscribes the router to the OS open-by-URL hook. The launch coordinator
/// installs this once; every delivered URL runs the full chain.
pub(crate) fn install_open_url_forwarding<R: tauri::Runtime>(app_handle: &AppHandle<R>) {
    let forwarding_handle = app_handle.clone();
    app_handle.deep_link().on_open_url(move |event| {
        for url in event.urls() {
            on_open_url(&forwarding_handle, &url);
        }
    });
}

/// Open-URL events smuggled in a second desktop instance's argv. Only the
/// schemes this shell routes are considered, so stray flags and paths are
/// ignored.
#[cfg(desktop)]
pub(crate) fn urls_from_argv(argv: &[String]) -> Vec<Url> {
    argv.iter()
        .skip(1)
        .filter_map(|arg| Url::parse(arg).ok())
        .filter(|url| {
            url.scheme() == APP_LINK_SCHEME || url.scheme() == AUTH_CALLBACK_SCHEME
        })
        .collect()
}
