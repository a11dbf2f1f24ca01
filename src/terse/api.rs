//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every operation, whatever the UI.
//!
//! It:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (coordinate literals become [`Coordinate`] values)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does not print, format, or decide how results are presented.
//!
//! `TerseApi<S: DocumentStore>` is generic over the storage backend:
//! - Production: `TerseApi<FileStore>`
//! - Testing: `TerseApi<InMemoryStore>`

use crate::commands;
use crate::config::TerseConfig;
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::store::DocumentStore;
use std::path::{Path, PathBuf};

pub struct TerseApi<S: DocumentStore> {
    store: S,
    config: TerseConfig,
    config_dir: PathBuf,
}

impl<S: DocumentStore> TerseApi<S> {
    pub fn new(store: S, config: TerseConfig, config_dir: PathBuf) -> Self {
        Self {
            store,
            config,
            config_dir,
        }
    }

    pub fn show(&self, doc: &str, coordinate: &str) -> Result<commands::CmdResult> {
        let coordinate = parse_coordinate(coordinate)?;
        commands::show::run(&self.store, doc, coordinate, self.config.tagged)
    }

    pub fn write(
        &mut self,
        doc: &str,
        coordinate: &str,
        text: String,
    ) -> Result<commands::CmdResult> {
        let coordinate = parse_coordinate(coordinate)?;
        commands::write::run(&mut self.store, doc, coordinate, text, self.config.tagged)
    }

    pub fn list(&self, doc: &str, search: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, doc, search, self.config.tagged)
    }

    pub fn stats(&self, doc: &str) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store, doc)
    }

    pub fn locate(&self, doc: &str, coordinate: &str) -> Result<commands::CmdResult> {
        let coordinate = parse_coordinate(coordinate)?;
        commands::locate::run(&self.store, doc, coordinate, self.config.tagged)
    }

    /// Parses a coordinate literal and hands it back normalized.
    pub fn coordinate(&self, coordinate: &str) -> Result<commands::CmdResult> {
        let coordinate = parse_coordinate(coordinate)?;
        Ok(commands::CmdResult::default().with_coordinate(coordinate))
    }

    pub fn export<I: AsRef<str>>(
        &self,
        doc: &str,
        coordinates: &[I],
        out_dir: &Path,
    ) -> Result<commands::CmdResult> {
        let coordinates = parse_coordinates(coordinates)?;
        commands::export::run(&self.store, doc, &coordinates, out_dir)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn document_path(&self, doc: &str) -> PathBuf {
        self.store.document_path(doc)
    }

    pub fn settings(&self) -> &TerseConfig {
        &self.config
    }
}

fn parse_coordinate(input: &str) -> Result<Coordinate> {
    Ok(input.parse::<Coordinate>()?)
}

fn parse_coordinates<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<Coordinate>> {
    inputs.iter().map(|s| parse_coordinate(s.as_ref())).collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, ScrollEntry};
