// YourApp mobile shell: process bootstrap and external-event routing only.
// Business logic, UI, and vendor SDK behavior live behind the webview and
// the registered plugins.

mod app_constants;
mod app_types;
mod auth_redirect;
mod backend_services;
mod command_channel;
mod framework_links;
mod launch;
mod maps_keys;
mod notification_delegate;
mod url_events;

pub(crate) use app_constants::*;
pub use url_events::{on_open_url, on_open_url_legacy};

use app_types::{LaunchConfiguration, MapsKeyState};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let config = LaunchConfiguration::from_env();

    let builder = tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Info)
                .build(),
        )
        .plugin(tauri_plugin_notification::init())
        .plugin(tauri_plugin_deep_link::init())
        .manage(MapsKeyState::default());

    // A second desktop instance must not spawn; its argv may smuggle
    // open-URL events, which get routed through the standard chain.
    #[cfg(desktop)]
    let builder = builder.plugin(tauri_plugin_single_instance::init(
        |app_handle, argv, _cwd| {
            for url in url_events::urls_from_argv(&argv) {
                url_events::on_open_url(app_handle, &url);
            }
        },
    ));

    builder
        .setup(move |app| {
            launch::on_launch(app.handle(), &config).map_err(|error| {
                log::error!("fatal launch failure: {error}");
                error.into()
            })
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
