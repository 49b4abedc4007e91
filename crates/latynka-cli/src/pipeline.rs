//! fetch → transliterate → package, strictly in sequence.

use std::path::PathBuf;

use tracing::{info, warn};

use latynka_core::settings::{Settings, SettingsError};
use latynka_core::unicode::residual_cyrillic;
use latynka_core::{transliterate, SubstitutionTable, TableError, TranslationDocument};

use crate::pack::{create_pack, PackError};
use crate::remote::{fetch_translation, Channel, FetchError, Fetcher};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Pack(#[from] PackError),
}

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub version: String,
    pub entries: usize,
    /// Entries still containing Cyrillic after transliteration.
    pub residual: usize,
    pub output: PathBuf,
}

/// Build the pack for the latest version on `channel`.
pub fn run(
    fetcher: &dyn Fetcher,
    settings: &Settings,
    table: &SubstitutionTable,
    channel: Channel,
) -> Result<PipelineReport, PipelineError> {
    info!("Fetching current translation...");
    let fetched = fetch_translation(fetcher, &settings.remote, channel)?;
    let mut report = package(&fetched.document, settings, table)?;
    report.version = fetched.asset.version;
    Ok(report)
}

/// Transliterate an already loaded language file and write the pack.
///
/// The returned report has an empty `version`.
pub fn package(
    source: &TranslationDocument,
    settings: &Settings,
    table: &SubstitutionTable,
) -> Result<PipelineReport, PipelineError> {
    info!("Transliterating...");
    let result = transliterate(table, source);
    let residual = residual_cyrillic(&result).len();
    if residual > 0 {
        warn!(residual, "entries still contain Cyrillic characters");
    }

    info!("Archiving...");
    create_pack(&result, &settings.pack)?;
    info!("Done!");

    Ok(PipelineReport {
        version: String::new(),
        entries: result.len(),
        residual,
        output: settings.pack.output.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Read;
    use std::path::Path;

    use latynka_core::settings::parse_settings_toml;

    use crate::remote::testutil::{fake_remote, remote_missing_release, MANIFEST_URL, OBJECTS_URL};

    fn settings_in(dir: &Path) -> Settings {
        let toml = format!(
            r#"
[remote]
manifest_url = "{MANIFEST_URL}"
resource_base_url = "{OBJECTS_URL}"
source_asset = "minecraft/lang/uk_ua.json"

[pack]
output = {output:?}
language_entry = "assets/minecraft/lang/uk_la.json"
metadata_entry = "pack.mcmeta"
icon_entry = "pack.png"
"#,
            output = dir.join("latin.zip").to_string_lossy(),
        );
        parse_settings_toml(&toml).unwrap()
    }

    fn archived_language(path: &Path) -> TranslationDocument {
        let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
        let mut json = String::new();
        archive
            .by_name("assets/minecraft/lang/uk_la.json")
            .unwrap()
            .read_to_string(&mut json)
            .unwrap();
        TranslationDocument::from_json(&json).unwrap()
    }

    #[test]
    fn test_run_stable() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        let fetcher = fake_remote(
            r#"{"menu.quit": "Вийти з гри", "gui.done": "Готово", "gui.none": null}"#,
            r#"{"menu.quit": "Снепшот"}"#,
        );

        let table = SubstitutionTable::default();
        let report = run(&fetcher, &settings, &table, Channel::Stable).unwrap();
        assert_eq!(report.version, "1.21");
        assert_eq!(report.entries, 3);
        assert_eq!(report.residual, 0);
        assert_eq!(report.output, dir.path().join("latin.zip"));

        let doc = archived_language(&report.output);
        let keys: Vec<&str> = doc.keys().collect();
        assert_eq!(keys, ["menu.quit", "gui.done", "gui.none"]);
        assert_eq!(doc.get("menu.quit"), Some("Vyjty z hry"));
        assert_eq!(doc.get("gui.done"), Some("Hotovo"));
        assert_eq!(doc.get("gui.none"), Some(""));
    }

    #[test]
    fn test_run_edge() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        let fetcher = fake_remote(r#"{"a": "Реліз"}"#, r#"{"a": "Знімок"}"#);

        let table = SubstitutionTable::default();
        let report = run(&fetcher, &settings, &table, Channel::Edge).unwrap();
        assert_eq!(report.version, "24w10a");
        assert_eq!(archived_language(&report.output).get("a"), Some("Znimok"));
    }

    #[test]
    fn test_run_counts_residue() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        let fetcher = fake_remote(r#"{"a": "Ёлка", "b": "Так"}"#, "{}");

        let table = SubstitutionTable::default();
        let report = run(&fetcher, &settings, &table, Channel::Stable).unwrap();
        assert_eq!(report.residual, 1);
    }

    #[test]
    fn test_run_missing_version_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());

        let err = run(
            &remote_missing_release(),
            &settings,
            &SubstitutionTable::default(),
            Channel::Stable,
        )
        .unwrap_err();
        assert!(matches!(err, PipelineError::Fetch(FetchError::VersionNotFound(_))));
        assert!(!settings.pack.output.exists());
    }
}
