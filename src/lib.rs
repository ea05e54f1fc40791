pub mod client;
pub mod config;
pub mod keycode;
pub mod layout;
pub mod planner;
pub mod selection;
pub mod session;
pub mod snapshot;
pub mod staging;
pub mod wire;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RemapKitError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Export Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Transport Error: {0}")]
    Transport(String),

    #[error("Layout Parse Error: {0}")]
    Parse(String),

    #[error("Layout Join Error: {0}")]
    Join(String),

    #[error("Location Not Found: layer {layer} row {row} col {col} matched {matches} staged entries")]
    NotFound {
        row: u8,
        col: u8,
        layer: u8,
        matches: usize,
    },

    #[error("Unknown {kind} Variant: {tag}")]
    UnknownVariant { kind: &'static str, tag: String },

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type RkResult<T> = Result<T, RemapKitError>;
