use std::{env, path::PathBuf, sync::Mutex};

use crate::{MAIN_WINDOW_LABEL, SERVICES_MANIFEST_ENV};

/// Options bag handed to the launch coordinator. Assembled once in `run()`
/// and consumed during the single `on_launch` invocation.
#[derive(Debug, Clone)]
pub(crate) struct LaunchConfiguration {
    pub(crate) main_window_label: String,
    pub(crate) services_manifest_override: Option<PathBuf>,
}

impl LaunchConfiguration {
    pub(crate) fn from_env() -> Self {
        Self {
            main_window_label: MAIN_WINDOW_LABEL.to_string(),
            services_manifest_override: env::var_os(SERVICES_MANIFEST_ENV).map(PathBuf::from),
        }
    }
}

/// Maps API key provisioned over the command channel. Held so a maps layer
/// that loads after provisioning can still be handed the key.
#[derive(Debug, Default)]
pub(crate) struct MapsKeyState {
    api_key: Mutex<Option<String>>,
}

impl MapsKeyState {
    /// Stores the key and returns the one it replaced, if any. Repeat
    /// provisioning overwrites; idempotency is the maps SDK's concern.
    /// A poisoned lock still holds a coherent `Option<String>`, so the
    /// write goes through either way.
    pub(crate) fn record(&self, api_key: &str) -> Option<String> {
        let mut guard = match self.api_key.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::warn!("maps key state lock poisoned, recovering");
                poisoned.into_inner()
            }
        };
        guard.replace(api_key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_returns_none_on_first_provisioning() {
        let state = MapsKeyState::default();
        assert_eq!(state.record("AIza123"), None);
    }

    #[test]
    fn record_returns_previous_key_when_reprovisioned() {
        let state = MapsKeyState::default();
        state.record("AIza123");
        assert_eq!(state.record("AIza456"), Some("AIza123".to_string()));
    }

    #[test]
    fn record_survives_a_poisoned_lock() {
        use std::sync::Arc;

        let state = Arc::new(MapsKeyState::default());
        let poisoner = Arc::clone(&state);
        std::thread::spawn(move || {
            let _guard = poisoner.api_key.lock().unwrap();
            panic!("poison the lock");
        })
        .join()
        .expect_err("the poisoning thread must panic");

        assert_eq!(state.record("AIza123"), None);
        assert_eq!(state.record("AIza456"), Some("AIza123".to_string()));
    }
}
