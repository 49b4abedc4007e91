use std::fs;
use std::process;

pub fn table_export() {
    print!("{}", latynka_core::table::default_toml());
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(
        latynka_core::SubstitutionTable::from_toml(&content),
        "Error: {}"
    );
    println!("OK: {} mappings", table.len());
}

pub fn settings_export() {
    print!("{}", latynka_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        latynka_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    if let Some(table) = &s.transliteration.table {
        if !table.is_file() {
            eprintln!("Error: table file {} does not exist", table.display());
            process::exit(1);
        }
    }
    println!(
        "OK: source_asset={}, output={}, language_entry={}",
        s.remote.source_asset,
        s.pack.output.display(),
        s.pack.language_entry
    );
}
