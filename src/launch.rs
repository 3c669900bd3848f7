use tauri::{AppHandle, Manager, WebviewWindow};

use crate::{
    app_types::LaunchConfiguration, backend_services, command_channel, notification_delegate,
    url_events,
};

/// One-time launch sequence, run from the setup hook before any UI is
/// interactive. Ordering matters: backend services come up before the
/// command channel accepts requests, and both precede the base framework's
/// own setup. Any `Err` is a fatal startup condition with no retry.
pub(crate) fn on_launch<R: tauri::Runtime>(
    app_handle: &AppHandle<R>,
    config: &LaunchConfiguration,
) -> Result<(), String> {
    let manifest = backend_services::initialize(app_handle, config)?;
    if let Some(endpoint) = manifest.api_endpoint.as_deref() {
        log::debug!("backend services endpoint {endpoint}");
    }

    let window = messaging_window(app_handle, config)?;
    command_channel::register_command_listener(app_handle, &window);

    if !notification_delegate::bind_notification_delegate(app_handle) {
        log::info!("continuing launch without a notification delegate");
    }

    url_events::install_open_url_forwarding(app_handle);
    Ok(())
}

/// The messaging surface named by the launch configuration. The host runtime
/// is expected to always provide it; absence is a contract violation and the
/// command listener must not be registered.
fn messaging_window<R: tauri::Runtime>(
    app_handle: &AppHandle<R>,
    config: &LaunchConfiguration,
) -> Result<WebviewWindow<R>, String> {
    app_handle
        .get_webview_window(&config.main_window_label)
        .ok_or_else(|| {
            format!(
                "Launch configuration names no usable messaging surface: window '{}' not found",
                config.main_window_label
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_launch_aborts_before_command_registration_when_surface_is_missing() {
        let manifest_dir = tempfile::tempdir().expect("temp dir should be created");
        let manifest_path = manifest_dir.path().join("services.json");
        std::fs::write(&manifest_path, r#"{"projectId": "yourapp-test"}"#)
            .expect("manifest should be written");

        let app = tauri::test::mock_app();
        let config = LaunchConfiguration {
            main_window_label: "main".to_string(),
            services_manifest_override: Some(manifest_path),
        };

        let error = on_launch(app.handle(), &config)
            .expect_err("launch must fail without a messaging surface");
        assert!(error.contains("messaging surface"));
    }

    #[test]
    fn messaging_window_fails_loudly_when_surface_is_missing() {
        let app = tauri::test::mock_app();
        let config = LaunchConfiguration {
            main_window_label: "main".to_string(),
            services_manifest_override: None,
        };

        let error = messaging_window(app.handle(), &config)
            .expect_err("missing window should be a contract violation");
        assert!(error.contains("messaging surface"));
    }
}
