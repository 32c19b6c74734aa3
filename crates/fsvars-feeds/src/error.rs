use std::path::PathBuf;

/// Errors produced while reading a feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: invalid JSON: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: expected a JSON object")]
    NotAnObject { line: usize },
}

impl FeedError {
    /// 1-based line number for per-line errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            FeedError::Decode { line, .. } | FeedError::NotAnObject { line } => Some(*line),
            FeedError::Open { .. } | FeedError::Io(_) => None,
        }
    }

    /// Whether the feed can keep going after this error.
    pub fn is_recoverable(&self) -> bool {
        self.line().is_some()
    }
}
