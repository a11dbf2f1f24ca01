//! # Document Tree
//!
//! A document is a sparse, nine-level tree. Every container level maps
//! positive indexes to child nodes through a [`BTreeMap`], so only indexes
//! that were actually written exist and siblings are always visited in
//! ascending order. Scroll nodes (the ninth level) carry the text.
//!
//! Nodes are only created by writing: [`DocumentTree::write_text`] creates
//! every missing ancestor on the way down. Nothing is ever removed.

use crate::coordinate::{Coordinate, Level};
use std::collections::BTreeMap;

/// Sparse mapping from sibling index to node.
pub type Children = BTreeMap<u32, Node>;

/// A node at any level. Container levels use `children`, Scrolls use `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    children: Children,
    text: String,
}

impl Node {
    pub fn children(&self) -> &Children {
        &self.children
    }

    pub fn child(&self, index: u32) -> Option<&Node> {
        self.children.get(&index)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Whether any Scroll at or below this node holds text.
    pub fn has_text(&self) -> bool {
        !self.text.is_empty() || self.children.values().any(Node::has_text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentTree {
    libraries: Children,
}

impl DocumentTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// The top-level Library map.
    pub fn libraries(&self) -> &Children {
        &self.libraries
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }

    /// Returns the node addressed by `coord` down to `level`, creating any
    /// missing node along the path.
    pub fn get_or_create(&mut self, coord: &Coordinate, level: Level) -> &mut Node {
        let mut children = &mut self.libraries;
        for depth in 0..level.depth() {
            children = &mut children
                .entry(coord.indexes()[depth])
                .or_default()
                .children;
        }
        children.entry(coord.index(level)).or_default()
    }

    pub fn get(&self, coord: &Coordinate, level: Level) -> Option<&Node> {
        self.siblings(coord, level)?.get(&coord.index(level))
    }

    /// The map that holds `coord`'s node at `level`, if its parent exists.
    pub fn siblings(&self, coord: &Coordinate, level: Level) -> Option<&Children> {
        let mut children = &self.libraries;
        for depth in 0..level.depth() {
            children = &children.get(&coord.indexes()[depth])?.children;
        }
        Some(children)
    }

    /// Text of the Scroll at `coord`; empty when the Scroll does not exist.
    pub fn read_text(&self, coord: &Coordinate) -> &str {
        self.get(coord, Level::Scroll)
            .map(Node::text)
            .unwrap_or_default()
    }

    pub fn write_text(&mut self, coord: &Coordinate, text: impl Into<String>) {
        self.get_or_create(coord, Level::Scroll).text = text.into();
    }

    /// Number of Scroll nodes in the whole tree.
    pub fn leaf_count(&self) -> usize {
        self.scrolls().len()
    }

    /// Total count of whitespace separated words over every Scroll.
    pub fn word_count(&self) -> usize {
        self.scrolls()
            .into_iter()
            .map(|(_, text)| count_words(text))
            .sum()
    }

    /// Every Scroll with its coordinate, in document order.
    pub fn scrolls(&self) -> Vec<(Coordinate, &str)> {
        let mut out = Vec::new();
        collect_scrolls(&self.libraries, Level::Library, Coordinate::default(), &mut out);
        out
    }
}

fn collect_scrolls<'a>(
    children: &'a Children,
    level: Level,
    mut coord: Coordinate,
    out: &mut Vec<(Coordinate, &'a str)>,
) {
    for (&index, node) in children {
        // Keys come from validated coordinates, so they are never zero.
        if coord.set(level, index).is_err() {
            continue;
        }
        match level.child() {
            Some(next) => collect_scrolls(&node.children, next, coord, out),
            None => out.push((coord, node.text.as_str())),
        }
    }
}

/// Counts tokens separated by runs of spaces, tabs and newlines.
pub fn count_words(text: &str) -> usize {
    text.split([' ', '\t', '\n'])
        .filter(|token| !token.is_empty())
        .count()
}
