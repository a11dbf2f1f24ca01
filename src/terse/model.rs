//! # Document Model
//!
//! [`TerseModel`] is what an editing surface talks to. It owns one decoded
//! document plus a current [`Coordinate`], and every read or write of Scroll
//! text goes through that coordinate.
//!
//! ```text
//! raw text ──load──▶ DocumentTree ──serialize──▶ raw text
//!                         ▲
//!              scroll() / set_scroll() at coords()
//! ```

use crate::codec;
use crate::coordinate::{Coordinate, Level};
use crate::tree::DocumentTree;
use serde::Serialize;
use std::ops::Bound::{Excluded, Unbounded};

/// Aggregate figures for a whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DocumentStats {
    pub scrolls: usize,
    pub words: usize,
    pub bytes: usize,
}

#[derive(Debug, Clone)]
pub struct TerseModel {
    tree: DocumentTree,
    coords: Coordinate,
    tagged: bool,
}

impl Default for TerseModel {
    fn default() -> Self {
        Self {
            tree: DocumentTree::new(),
            coords: Coordinate::default(),
            tagged: true,
        }
    }
}

impl TerseModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str, tagged: bool) -> Self {
        let mut model = Self::new();
        model.load(text, tagged);
        model
    }

    /// Replaces the document with the decoded `text` and goes back to the
    /// first Scroll. `tagged` picks how [`TerseModel::address`] spells the
    /// current coordinate.
    pub fn load(&mut self, text: &str, tagged: bool) {
        self.tree = codec::decode(text);
        self.coords = Coordinate::default();
        self.tagged = tagged;
        tracing::debug!(
            scrolls = self.tree.leaf_count(),
            tagged,
            "loaded document"
        );
    }

    pub fn serialize(&self) -> String {
        codec::encode(&self.tree)
    }

    pub fn tree(&self) -> &DocumentTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut DocumentTree {
        &mut self.tree
    }

    pub fn coords(&self) -> Coordinate {
        self.coords
    }

    pub fn coords_mut(&mut self) -> &mut Coordinate {
        &mut self.coords
    }

    pub fn set_coords(&mut self, coords: Coordinate) {
        self.coords = coords;
    }

    /// The current coordinate in the syntax chosen at load time.
    pub fn address(&self) -> String {
        if self.tagged {
            self.coords.to_string()
        } else {
            self.coords.to_dashed()
        }
    }

    /// Text of the current Scroll, empty if it was never written.
    pub fn scroll(&self) -> &str {
        self.tree.read_text(&self.coords)
    }

    pub fn set_scroll(&mut self, text: impl Into<String>) {
        self.tree.write_text(&self.coords, text);
    }

    pub fn leaf_count(&self) -> usize {
        self.tree.leaf_count()
    }

    pub fn word_count(&self) -> usize {
        self.tree.word_count()
    }

    pub fn stats(&self) -> DocumentStats {
        DocumentStats {
            scrolls: self.leaf_count(),
            words: self.word_count(),
            bytes: codec::encoded_len(&self.tree),
        }
    }

    /// Byte offset of the current Scroll in the serialized document.
    pub fn scroll_offset(&self) -> Option<usize> {
        codec::scroll_offset(&self.tree, &self.coords)
    }

    /// Steps one index forward at `level`, whether or not anything is there.
    pub fn advance(&mut self, level: Level) {
        self.coords.advance(level);
    }

    /// Steps one index back at `level`. Returns false at index 1.
    pub fn retreat(&mut self, level: Level) -> bool {
        let prev = self.coords.index(level).checked_sub(1);
        self.jump(level, prev)
    }

    /// Jumps to the next existing sibling at `level`, skipping empty gaps.
    /// Returns false when there is none.
    pub fn next_sibling(&mut self, level: Level) -> bool {
        let current = self.coords.index(level);
        let next = self
            .tree
            .siblings(&self.coords, level)
            .and_then(|siblings| siblings.range((Excluded(current), Unbounded)).next())
            .map(|(&index, _)| index);
        self.jump(level, next)
    }

    /// Jumps to the previous existing sibling at `level`.
    pub fn prev_sibling(&mut self, level: Level) -> bool {
        let current = self.coords.index(level);
        let prev = self
            .tree
            .siblings(&self.coords, level)
            .and_then(|siblings| siblings.range(..current).next_back())
            .map(|(&index, _)| index);
        self.jump(level, prev)
    }

    fn jump(&mut self, level: Level, target: Option<u32>) -> bool {
        match target {
            Some(index) if self.coords.set(level, index).is_ok() => {
                self.coords.reset_below(level);
                true
            }
            _ => false,
        }
    }
}
