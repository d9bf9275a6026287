use crate::models::{Event, PositionedToken};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error")]
    Io(#[from] std::io::Error),
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

/// Read positioned tokens from a JSON array file
pub fn read_tokens(path: &Path) -> Result<Vec<PositionedToken>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    tokens_from_str(&content)
}

/// Parse positioned tokens from a JSON array string
pub fn tokens_from_str(content: &str) -> Result<Vec<PositionedToken>, IoError> {
    Ok(serde_json::from_str(content)?)
}

/// Write events as a JSON array, one object per event
pub fn write_events<W: Write>(mut writer: W, events: &[Event], pretty: bool) -> Result<(), IoError> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, events)?;
    } else {
        serde_json::to_writer(&mut writer, events)?;
    }
    writeln!(writer)?;
    Ok(())
}
