//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub collation: CollationSettings,
    pub input: InputSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollationSettings {
    pub tie_break: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    delimiter: String,
    pub reading_field: usize,
    pub skip_blank: bool,
}

impl InputSettings {
    /// The record separator. Validation guarantees exactly one character.
    pub fn delimiter(&self) -> char {
        self.delimiter.chars().next().unwrap_or('\t')
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    pub show_key: bool,
    pub show_flags: bool,
    pub index_base: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.input.delimiter.chars().count() != 1 {
        return Err(SettingsError::InvalidValue {
            field: "input.delimiter".to_string(),
            reason: "must be exactly one character".to_string(),
        });
    }
    if s.output.index_base > 1 {
        return Err(SettingsError::InvalidValue {
            field: "output.index_base".to_string(),
            reason: "must be 0 or 1".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert!(s.collation.tie_break);
        assert_eq!(s.input.delimiter(), '\t');
        assert_eq!(s.input.reading_field, 0);
        assert!(s.input.skip_blank);
        assert!(s.output.show_key);
        assert!(!s.output.show_flags);
        assert_eq!(s.output.index_base, 0);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[collation]
tie_break = false

[input]
delimiter = ","
reading_field = 2
skip_blank = false

[output]
show_key = false
show_flags = true
index_base = 1
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert!(!s.collation.tie_break);
        assert_eq!(s.input.delimiter(), ',');
        assert_eq!(s.input.reading_field, 2);
        assert_eq!(s.output.index_base, 1);
    }

    #[test]
    fn error_long_delimiter() {
        let toml = r#"
[collation]
tie_break = true

[input]
delimiter = "::"
reading_field = 0
skip_blank = true

[output]
show_key = true
show_flags = false
index_base = 0
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("input.delimiter"));
    }

    #[test]
    fn error_index_base() {
        let toml = r#"
[collation]
tie_break = true

[input]
delimiter = "\t"
reading_field = 0
skip_blank = true

[output]
show_key = true
show_flags = false
index_base = 2
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("output.index_base"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[collation]
tie_break = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
