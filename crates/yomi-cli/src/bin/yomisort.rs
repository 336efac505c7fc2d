use clap::{Parser, Subcommand};

use yomi_cli::commands::sort_ops::SortOptions;
use yomi_cli::commands::{compare_ops, config_ops, sort_ops};
use yomi_cli::logging::init_logging;

#[derive(Parser)]
#[command(name = "yomisort", about = "Sort Japanese readings in dictionary order")]
struct Cli {
    /// Custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sort lines by reading
    Sort {
        /// Input file (default: stdin)
        file: Option<String>,
        /// Zero-based field holding the reading
        #[arg(short, long)]
        field: Option<usize>,
        /// Field delimiter
        #[arg(short, long)]
        delimiter: Option<char>,
        /// Compare kana only, keeping input order on ties
        #[arg(long)]
        primary_only: bool,
        /// Print the per-unit flags
        #[arg(long)]
        flags: bool,
        /// Emit one JSON object per line
        #[arg(long)]
        json: bool,
    },
    /// Show the canonical key and unit decomposition of readings
    Key {
        /// Emit one JSON object per reading
        #[arg(long)]
        json: bool,
        /// Readings
        #[arg(required = true)]
        readings: Vec<String>,
    },
    /// Compare two readings
    Compare {
        /// Compare kana only
        #[arg(long)]
        primary_only: bool,
        a: String,
        b: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Sort {
            file,
            field,
            delimiter,
            primary_only,
            flags,
            json,
        } => {
            let settings = config_ops::load_settings(cli.settings.as_deref());
            let mut opts = SortOptions::from_settings(settings);
            if let Some(field) = field {
                opts.field = field;
            }
            if let Some(delimiter) = delimiter {
                opts.delimiter = delimiter;
            }
            opts.tie_break &= !primary_only;
            opts.show_flags |= flags;
            opts.json = json;
            sort_ops::sort_cmd(file.as_deref(), &opts);
        }
        Command::Key { json, readings } => compare_ops::key_cmd(&readings, json),
        Command::Compare {
            primary_only,
            a,
            b,
        } => {
            let settings = config_ops::load_settings(cli.settings.as_deref());
            let tie_break = settings.collation.tie_break && !primary_only;
            compare_ops::compare_cmd(&a, &b, tie_break);
        }
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
