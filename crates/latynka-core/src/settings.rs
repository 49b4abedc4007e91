//! Pipeline settings loaded from TOML.
//!
//! - `default_toml()` returns the embedded defaults (`default_settings.toml`)
//! - `parse_settings_toml()` parses and validates custom TOML
//! - `load_settings(path)` reads a file, or falls back to the defaults

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::table::{SubstitutionTable, TableError};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub remote: RemoteSettings,
    pub pack: PackSettings,
    #[serde(default)]
    pub transliteration: TransliterationSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteSettings {
    /// Version manifest listing the latest release and snapshot ids.
    pub manifest_url: String,
    /// Content-addressed object store root.
    pub resource_base_url: String,
    /// Asset index path of the source language file.
    pub source_asset: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PackSettings {
    pub output: PathBuf,
    pub language_entry: String,
    /// Replaces the built-in pack descriptor when set.
    #[serde(default)]
    pub metadata_file: Option<PathBuf>,
    pub metadata_entry: String,
    /// Replaces the built-in pack icon when set.
    #[serde(default)]
    pub icon_file: Option<PathBuf>,
    pub icon_entry: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransliterationSettings {
    #[serde(default)]
    pub table: Option<PathBuf>,
}

impl Settings {
    /// The custom table if one is configured, otherwise the embedded one.
    pub fn load_table(&self) -> Result<SubstitutionTable, TableError> {
        match &self.transliteration.table {
            Some(path) => SubstitutionTable::load(path),
            None => Ok(SubstitutionTable::default()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("settings TOML must be valid")
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

/// Read settings from `path`, or use the embedded defaults when `None`.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, SettingsError> {
    match path {
        Some(path) => parse_settings_toml(&fs::read_to_string(path)?),
        None => Ok(Settings::default()),
    }
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_url {
        ($section:ident . $field:ident) => {
            let url = &s.$section.$field;
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be an http(s) URL".to_string(),
                });
            }
        };
    }
    macro_rules! check_relative {
        ($section:ident . $field:ident) => {
            if let Some(reason) = relative_path_problem(&s.$section.$field) {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: reason.to_string(),
                });
            }
        };
    }

    check_url!(remote.manifest_url);
    check_url!(remote.resource_base_url);
    check_relative!(remote.source_asset);

    check_relative!(pack.language_entry);
    check_relative!(pack.metadata_entry);
    check_relative!(pack.icon_entry);
    if s.pack.output.as_os_str().is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "pack.output".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    Ok(())
}

/// Archive entries and asset keys are forward-slash relative paths.
fn relative_path_problem(path: &str) -> Option<&'static str> {
    if path.is_empty() {
        return Some("must not be empty");
    }
    if path.starts_with('/') || path.contains('\\') {
        return Some("must be a relative path using '/' separators");
    }
    if Path::new(path)
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Some("must not contain '..'");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
[remote]
manifest_url = "https://example.com/manifest.json"
resource_base_url = "http://localhost:8080/objects"
source_asset = "minecraft/lang/uk_ua.json"

[pack]
output = "out/latin.zip"
language_entry = "assets/minecraft/lang/uk_la.json"
metadata_entry = "pack.mcmeta"
icon_entry = "pack.png"
"#;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(
            s.remote.manifest_url,
            "https://launchermeta.mojang.com/mc/game/version_manifest.json"
        );
        assert_eq!(
            s.remote.resource_base_url,
            "https://resources.download.minecraft.net"
        );
        assert_eq!(s.remote.source_asset, "minecraft/lang/uk_ua.json");
        assert_eq!(s.pack.output, PathBuf::from("latin.zip"));
        assert_eq!(s.pack.language_entry, "assets/minecraft/lang/uk_la.json");
        assert_eq!(s.pack.metadata_entry, "pack.mcmeta");
        assert_eq!(s.pack.icon_entry, "pack.png");
        assert!(s.pack.metadata_file.is_none());
        assert!(s.pack.icon_file.is_none());
        assert!(s.transliteration.table.is_none());
    }

    #[test]
    fn parse_valid_custom_toml() {
        let s = parse_settings_toml(VALID).unwrap();
        assert_eq!(s.pack.output, PathBuf::from("out/latin.zip"));
        assert_eq!(s.remote.resource_base_url, "http://localhost:8080/objects");
    }

    #[test]
    fn pack_asset_overrides() {
        let toml = VALID.replace(
            "metadata_entry = \"pack.mcmeta\"",
            "metadata_file = \"art/pack.mcmeta\"\nmetadata_entry = \"pack.mcmeta\"",
        );
        let s = parse_settings_toml(&toml).unwrap();
        assert_eq!(s.pack.metadata_file, Some(PathBuf::from("art/pack.mcmeta")));
        assert!(s.pack.icon_file.is_none());
    }

    #[test]
    fn transliteration_section_optional() {
        let s = parse_settings_toml(VALID).unwrap();
        let table = s.load_table().unwrap();
        assert_eq!(table, SubstitutionTable::default());
    }

    #[test]
    fn custom_table_path() {
        let dir = tempfile::tempdir().unwrap();
        let table_path = dir.path().join("table.toml");
        fs::write(&table_path, "mappings = [[\"а\", \"a\"]]\n").unwrap();
        let toml = format!(
            "{VALID}\n[transliteration]\ntable = {:?}\n",
            table_path.to_string_lossy()
        );
        let s = parse_settings_toml(&toml).unwrap();
        assert_eq!(s.load_table().unwrap().len(), 1);
    }

    #[test]
    fn error_non_http_url() {
        let toml = VALID.replace("https://example.com/manifest.json", "ftp://example.com/m");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("remote.manifest_url"));
    }

    #[test]
    fn error_parent_dir_entry() {
        let toml = VALID.replace(
            "language_entry = \"assets/minecraft/lang/uk_la.json\"",
            "language_entry = \"../uk_la.json\"",
        );
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("pack.language_entry"));
    }

    #[test]
    fn error_absolute_entry() {
        let toml = VALID.replace("icon_entry = \"pack.png\"", "icon_entry = \"/pack.png\"");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("pack.icon_entry"));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[remote]
manifest_url = "https://example.com/manifest.json"
resource_base_url = "https://example.com"
source_asset = "minecraft/lang/uk_ua.json"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn load_settings_defaults_without_path() {
        let s = load_settings(None).unwrap();
        assert_eq!(s.pack.output, PathBuf::from("latin.zip"));
    }

    #[test]
    fn load_settings_missing_file() {
        let err = load_settings(Some(Path::new("/nonexistent/settings.toml"))).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
