use clap::{Parser, Subcommand};

use latynka_cli::commands::{config_ops, convert_ops, pack_ops};
use latynka_cli::logging::init_logging;

#[derive(Parser)]
#[command(name = "latynka-tool", about = "Latynka table and language file tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Export the default substitution table as TOML
    TableExport,
    /// Validate a custom substitution table TOML file
    TableValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Transliterate a single string
    Rewrite {
        /// Cyrillic text
        text: String,
        /// Substitution table file (optional)
        #[arg(long)]
        table: Option<String>,
    },
    /// Transliterate a local language JSON file
    Convert {
        /// Input language file (uk_ua.json)
        input: String,
        /// Output language file
        output: String,
        /// Substitution table file (optional)
        #[arg(long)]
        table: Option<String>,
        /// List entries still containing Cyrillic after conversion
        #[arg(long)]
        residue: bool,
    },
    /// Build the resource pack from a local language file
    Pack {
        /// Input language file (uk_ua.json)
        input: String,
        /// Output archive (default: pack.output from settings)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Command::TableExport => config_ops::table_export(),
        Command::TableValidate { file } => config_ops::table_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::Rewrite { text, table } => convert_ops::rewrite_text(&text, table.as_deref()),
        Command::Convert {
            input,
            output,
            table,
            residue,
        } => convert_ops::convert(&input, &output, table.as_deref(), residue),
        Command::Pack { input, output } => pack_ops::pack_local(&input, output.as_deref()),
    }
}
