use std::fs;

use yomi_core::settings::{self, Settings};

/// Install the settings file, if any, and return the active settings.
pub fn load_settings(file: Option<&str>) -> &'static Settings {
    if let Some(file) = file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(settings::init_custom(content), "Error in {file}: {}");
    }
    settings::settings()
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: collation.tie_break={}, input.delimiter={:?}, input.reading_field={}",
        s.collation.tie_break,
        s.input.delimiter(),
        s.input.reading_field
    );
}
