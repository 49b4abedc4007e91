use std::path::Path;

use tracing::info;

use latynka_core::unicode::residual_cyrillic;
use latynka_core::{rewrite, transliterate, TranslationDocument};

use super::resolve_table;

pub fn rewrite_text(text: &str, table_file: Option<&str>) {
    let table = resolve_table(table_file);
    println!("{}", rewrite(&table, text));
}

pub fn convert(input: &str, output: &str, table_file: Option<&str>, residue: bool) {
    let table = resolve_table(table_file);
    let source = die!(
        TranslationDocument::load(Path::new(input)),
        "Error reading {input}: {}"
    );
    let result = transliterate(&table, &source);
    die!(result.save(Path::new(output)), "Error writing {output}: {}");
    info!(entries = result.len(), "wrote {output}");

    if residue {
        for key in residual_cyrillic(&result) {
            println!("{key}\t{}", result.get(key).unwrap_or_default());
        }
    }
}
