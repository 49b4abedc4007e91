use std::path::{Path, PathBuf};

use tracing::info;

use latynka_core::TranslationDocument;

use super::settings_from_env;
use crate::pipeline::{self, PipelineReport};
use crate::remote::{Channel, HttpFetcher};

fn log_report(report: &PipelineReport) {
    info!(
        version = %report.version,
        entries = report.entries,
        residual = report.residual,
        "wrote {}",
        report.output.display()
    );
}

/// Download the latest language file for `channel` and build the pack.
pub fn build(channel: Channel) {
    let settings = settings_from_env();
    let table = die!(settings.load_table(), "Error loading table: {}");
    let report = die!(
        pipeline::run(&HttpFetcher, &settings, &table, channel),
        "Error: {}"
    );
    log_report(&report);
}

/// Build the pack from a local language file instead of downloading one.
pub fn pack_local(input: &str, output: Option<&str>) {
    let mut settings = settings_from_env();
    if let Some(output) = output {
        settings.pack.output = PathBuf::from(output);
    }
    let table = die!(settings.load_table(), "Error loading table: {}");
    let source = die!(
        TranslationDocument::load(Path::new(input)),
        "Error reading {input}: {}"
    );
    let report = die!(
        pipeline::package(&source, &settings, &table),
        "Error: {}"
    );
    log_report(&report);
}
