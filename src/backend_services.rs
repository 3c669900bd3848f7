use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tauri::{path::BaseDirectory, AppHandle, Manager};

use crate::{app_types::LaunchConfiguration, SERVICES_MANIFEST_FILE};

/// Bundled backend-services manifest, the shell's equivalent of a vendor
/// service configuration file shipped inside the app package.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ServicesManifest {
    pub(crate) project_id: String,
    pub(crate) api_endpoint: Option<String>,
    #[serde(default)]
    pub(crate) crash_reporting_enabled: bool,
}

/// One-time backend-services initialization. Any failure here is a fatal
/// startup condition; the caller must not continue into UI.
pub(crate) fn initialize<R: tauri::Runtime>(
    app_handle: &AppHandle<R>,
    config: &LaunchConfiguration,
) -> Result<ServicesManifest, String> {
    let path = resolve_manifest_path(config.services_manifest_override.clone(), || {
        bundled_manifest_path(app_handle)
    })?;
    let manifest = load_manifest(&path)?;
    log::info!(
        "backend services initialized for project {}",
        manifest.project_id
    );
    if manifest.crash_reporting_enabled {
        log::info!("crash reporting enabled");
    }
    Ok(manifest)
}

fn bundled_manifest_path<R: tauri::Runtime>(app_handle: &AppHandle<R>) -> Result<PathBuf, String> {
    app_handle
        .path()
        .resolve(SERVICES_MANIFEST_FILE, BaseDirectory::Resource)
        .map_err(|error| format!("Failed to resolve bundled services manifest: {error}"))
}

pub(crate) fn resolve_manifest_path<F>(
    override_path: Option<PathBuf>,
    bundled: F,
) -> Result<PathBuf, String>
where
    F: FnOnce() -> Result<PathBuf, String>,
{
    match override_path {
        Some(path) => Ok(path),
        None => bundled(),
    }
}

pub(crate) fn load_manifest(path: &Path) -> Result<ServicesManifest, String> {
    let raw = fs::read_to_string(path).map_err(|error| {
        format!(
            "Failed to read services manifest {}: {error}",
            path.display()
        )
    })?;
    parse_manifest(&raw)
}

pub(crate) fn parse_manifest(raw: &str) -> Result<ServicesManifest, String> {
    let manifest: ServicesManifest = serde_json::from_str(raw)
        .map_err(|error| format!("Malformed services manifest: {error}"))?;
    if manifest.project_id.trim().is_empty() {
        return Err("Services manifest is missing a projectId".to_string());
    }
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_manifest_accepts_complete_manifest() {
        let manifest = parse_manifest(
            r#"{
                "projectId": "yourapp-prod",
                "apiEndpoint": "https://api.yourapp.example",
                "crashReportingEnabled": true
            }"#,
        )
        .expect("manifest should parse");
        assert_eq!(manifest.project_id, "yourapp-prod");
        assert_eq!(
            manifest.api_endpoint.as_deref(),
            Some("https://api.yourapp.example")
        );
        assert!(manifest.crash_reporting_enabled);
    }

    #[test]
    fn parse_manifest_defaults_optional_fields() {
        let manifest =
            parse_manifest(r#"{"projectId": "yourapp-dev"}"#).expect("manifest should parse");
        assert_eq!(manifest.api_endpoint, None);
        assert!(!manifest.crash_reporting_enabled);
    }

    #[test]
    fn parse_manifest_rejects_blank_project_id() {
        let error = parse_manifest(r#"{"projectId": "   "}"#).expect_err("blank id should fail");
        assert!(error.contains("projectId"));
    }

    #[test]
    fn parse_manifest_rejects_malformed_json() {
        let error = parse_manifest("{not json").expect_err("malformed json should fail");
        assert!(error.contains("Malformed services manifest"));
    }

    #[test]
    fn resolve_manifest_path_prefers_override() {
        let resolved = resolve_manifest_path(Some(PathBuf::from("/tmp/override.json")), || {
            panic!("bundled path should not be resolved when an override is set")
        })
        .expect("override should resolve");
        assert_eq!(resolved, PathBuf::from("/tmp/override.json"));
    }

    #[test]
    fn resolve_manifest_path_falls_back_to_bundled() {
        let resolved =
            resolve_manifest_path(None, || Ok(PathBuf::from("/bundle/services.json")))
                .expect("bundled path should resolve");
        assert_eq!(resolved, PathBuf::from("/bundle/services.json"));
    }

    #[test]
    fn load_manifest_reads_manifest_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("services.json");
        fs::write(&path, r#"{"projectId": "yourapp-prod"}"#).expect("write manifest");

        let manifest = load_manifest(&path).expect("manifest should load");
        assert_eq!(manifest.project_id, "yourapp-prod");
    }

    #[test]
    fn bundled_manifest_path_matches_declared_bundle_resource() {
        // Array-form resources land under the resource dir at their relative
        // path, so the resolved subpath must equal the declared entry.
        let conf: serde_json::Value =
            serde_json::from_str(include_str!("../tauri.conf.json")).expect("config should parse");
        let resources = conf["bundle"]["resources"]
            .as_array()
            .expect("bundle resources should be a list");
        assert!(
            resources
                .iter()
                .any(|entry| entry.as_str() == Some(SERVICES_MANIFEST_FILE)),
            "{SERVICES_MANIFEST_FILE} is not declared in bundle resources"
        );
    }

    #[test]
    fn load_manifest_reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.json");

        let error = load_manifest(&path).expect_err("missing file should fail");
        assert!(error.contains("Failed to read services manifest"));
    }
}
