/// Label of the webview window that carries the command channel.
pub(crate) const MAIN_WINDOW_LABEL: &str = "main";

/// Well-known name of the maps command channel shared with the UI layer.
pub(crate) const MAPS_COMMAND_CHANNEL: &str = "com.yourapp.maps";

/// URL scheme claimed by the shell's own deep-link routing.
pub(crate) const APP_LINK_SCHEME: &str = "yourapp";

/// Callback scheme the identity provider redirects to after OAuth sign-in.
pub(crate) const AUTH_CALLBACK_SCHEME: &str = "com.yourapp.auth";

pub(crate) const MAPS_API_KEY_EVENT: &str = "maps://api-key";
pub(crate) const AUTH_REDIRECT_EVENT: &str = "auth://redirect";
pub(crate) const SHELL_NAVIGATE_EVENT: &str = "shell://navigate";

/// Overrides the bundled services manifest, mainly for development builds.
pub(crate) const SERVICES_MANIFEST_ENV: &str = "YOURAPP_SERVICES_MANIFEST";

/// Manifest path relative to the resource dir. Array-form bundle resources
/// keep their relative path, so this must match the entry in tauri.conf.json.
pub(crate) const SERVICES_MANIFEST_FILE: &str = "resources/services.json";
