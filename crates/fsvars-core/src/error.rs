//! Errors raised outside the normalization engine, which is total.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),
}
