//! Line-oriented feed sources.
//!
//! A [`Feed`] wraps a buffered reader over stdin or a file and yields one
//! decoded item per non-blank line. Decode failures are reported with their
//! 1-based line number and do not end the iteration; read failures do.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use fsvars_core::PropertyBag;
use serde_json::error::Category;

use crate::error::FeedError;
use crate::event::Event;

/// Where a feed reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedKind {
    Stdin,
    File(PathBuf),
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedKind::Stdin => write!(f, "stdin"),
            FeedKind::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}

impl From<Option<PathBuf>> for FeedKind {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) if p.as_os_str() != "-" => FeedKind::File(p),
            _ => FeedKind::Stdin,
        }
    }
}

pub struct Feed {
    kind: FeedKind,
    reader: Box<dyn BufRead + Send>,
}

impl std::fmt::Debug for Feed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Feed").field("kind", &self.kind).finish_non_exhaustive()
    }
}

impl Feed {
    pub fn open(kind: FeedKind) -> Result<Self, FeedError> {
        let reader: Box<dyn BufRead + Send> = match &kind {
            FeedKind::Stdin => Box::new(BufReader::new(io::stdin())),
            FeedKind::File(path) => {
                let file = File::open(path).map_err(|source| FeedError::Open {
                    path: path.clone(),
                    source,
                })?;
                Box::new(BufReader::new(file))
            }
        };
        tracing::debug!(feed = %kind, "opened feed");
        Ok(Self { kind, reader })
    }

    /// Wrap an arbitrary reader, reported as stdin.
    pub fn from_reader(reader: impl BufRead + Send + 'static) -> Self {
        Self {
            kind: FeedKind::Stdin,
            reader: Box::new(reader),
        }
    }

    pub fn kind(&self) -> &FeedKind {
        &self.kind
    }

    /// Each line is a flat JSON object.
    pub fn bags(self) -> impl Iterator<Item = Result<PropertyBag, FeedError>> {
        self.lines().map(|item| {
            let (line, text) = item?;
            // Straight into the bag so keys keep their input order. A data
            // error can only mean the line is valid JSON but not an object.
            serde_json::from_str::<PropertyBag>(&text).map_err(|source| match source.classify() {
                Category::Data => FeedError::NotAnObject { line },
                _ => FeedError::Decode { line, source },
            })
        })
    }

    /// Each line is an [`Event`].
    pub fn events(self) -> impl Iterator<Item = Result<Event, FeedError>> {
        self.lines().map(|item| {
            let (line, text) = item?;
            serde_json::from_str::<Event>(&text).map_err(|source| FeedError::Decode { line, source })
        })
    }

    /// Non-blank lines with their 1-based line numbers.
    fn lines(self) -> impl Iterator<Item = Result<(usize, String), FeedError>> {
        self.reader
            .lines()
            .enumerate()
            .filter_map(|(i, line)| match line {
                Ok(text) if text.trim().is_empty() => None,
                Ok(text) => Some(Ok((i + 1, text))),
                Err(e) => Some(Err(FeedError::Io(e))),
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
