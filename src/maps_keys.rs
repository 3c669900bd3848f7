use tauri::{AppHandle, Emitter, Manager};

use crate::{app_types::MapsKeyState, MAIN_WINDOW_LABEL, MAPS_API_KEY_EVENT};

/// Applies a runtime-supplied maps API key: records it in managed state and
/// forwards it to the webview maps layer. Key format validation is the maps
/// SDK's concern, not the shell's.
pub(crate) fn provision_api_key<R: tauri::Runtime>(app_handle: &AppHandle<R>, api_key: &str) {
    let state = app_handle.state::<MapsKeyState>();
    if state.record(api_key).is_some() {
        log::info!("maps api key re-provisioned");
    } else {
        log::info!("maps api key provisioned");
    }

    if let Err(error) = app_handle.emit_to(MAIN_WINDOW_LABEL, MAPS_API_KEY_EVENT, api_key) {
        log::warn!("failed to forward maps api key to webview: {error}");
    }
}
