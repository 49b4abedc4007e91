//! Operations behind the command-line binaries. Failures print to stderr and
//! exit with status 1.

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod convert_ops;
pub mod pack_ops;

use std::env;
use std::path::{Path, PathBuf};

use latynka_core::settings::{load_settings, Settings};
use latynka_core::SubstitutionTable;

/// Environment variable naming a custom settings TOML file.
pub const SETTINGS_ENV: &str = "LATYNKA_SETTINGS";

fn settings_from_env() -> Settings {
    let path = env::var_os(SETTINGS_ENV).map(PathBuf::from);
    die!(
        load_settings(path.as_deref()),
        "Error loading settings: {}"
    )
}

/// `--table` if given, else the table named in the settings.
fn resolve_table(table_file: Option<&str>) -> SubstitutionTable {
    match table_file {
        Some(file) => die!(
            SubstitutionTable::load(Path::new(file)),
            "Error loading table {file}: {}"
        ),
        None => die!(settings_from_env().load_table(), "Error loading table: {}"),
    }
}
