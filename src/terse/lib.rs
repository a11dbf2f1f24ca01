//! # Terse Architecture
//!
//! Terse stores a whole shelf of writing in one plain text file. A document
//! is a sparse nine-level tree (Library → Shelf → Series → Collection →
//! Volume → Book → Chapter → Section → Scroll) whose leaves hold text, and the
//! file is that tree flattened with reserved control characters marking the
//! jumps between levels.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, parses coordinate literals    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Load a document, act on the model, store it back         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model.rs, codec.rs, tree.rs, coordinate.rs)          │
//! │  - No I/O at all                                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The core is what an editor embeds: [`model::TerseModel`] loads raw text,
//! exposes the Scroll at its current [`coordinate::Coordinate`] for reading
//! and writing, and serializes the document back.
//!
//! ## Module Overview
//!
//! - [`coordinate`]: Nine-level locators and their two literal syntaxes
//! - [`tree`]: The sparse document tree
//! - [`codec`]: Text encoding and decoding, offset arithmetic
//! - [`model`]: The document model an editing surface drives
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Document storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod coordinate;
pub mod error;
pub mod model;
pub mod store;
pub mod tree;
