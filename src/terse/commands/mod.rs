//! # Commands
//!
//! Business logic for every operation the API exposes. Each command loads
//! the document it works on from a [`DocumentStore`](crate::store::DocumentStore),
//! acts on a [`TerseModel`](crate::model::TerseModel) and, for edits, writes
//! the re-encoded text back. Commands never print; they return a
//! [`CmdResult`] for the caller to present.

use crate::config::TerseConfig;
use crate::coordinate::Coordinate;
use crate::model::DocumentStats;
use std::path::PathBuf;

pub mod config;
pub mod export;
pub mod helpers;
pub mod list;
pub mod locate;
pub mod show;
pub mod stats;
pub mod write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A Scroll as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollEntry {
    pub coordinate: Coordinate,
    /// The coordinate spelled in the configured syntax.
    pub address: String,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub scrolls: Vec<ScrollEntry>,
    pub stats: Option<DocumentStats>,
    pub offset: Option<usize>,
    pub coordinate: Option<Coordinate>,
    pub paths: Vec<PathBuf>,
    pub config: Option<TerseConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_scrolls(mut self, scrolls: Vec<ScrollEntry>) -> Self {
        self.scrolls = scrolls;
        self
    }

    pub fn with_stats(mut self, stats: DocumentStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_coordinate(mut self, coordinate: Coordinate) -> Self {
        self.coordinate = Some(coordinate);
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: TerseConfig) -> Self {
        self.config = Some(config);
        self
    }
}
