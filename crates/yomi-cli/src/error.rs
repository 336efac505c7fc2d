use std::io;

use yomi_core::settings::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: no field {field} in {line_text:?}")]
    MissingField {
        line: usize,
        field: usize,
        line_text: String,
    },
    #[error(transparent)]
    Collate(#[from] yomi_core::CollateError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
