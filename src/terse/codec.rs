//! # Terse Codec
//!
//! Converts a [`DocumentTree`] to and from flat text. Scroll text is written
//! verbatim; the tree structure is carried by nine reserved control
//! characters, one per level. Each separator moves the reader one index
//! forward at its level and rewinds every deeper level to 1:
//!
//! ```text
//! Level       Separator
//! Scroll      0x17
//! Section     0x18
//! Chapter     0x19
//! Book        0x1A
//! Volume      0x1B
//! Collection  0x1C
//! Series      0x1D
//! Shelf       0x1E
//! Library     0x1F
//! ```
//!
//! ## Gaps
//!
//! On entering a parent the reader sits at index 1 of every deeper level, so
//! a child at index `idx` following a sibling at `prev` costs `idx - prev`
//! separators (`idx - 1` for the first child). Missing siblings cost nothing
//! beyond those separators, which keeps far-out content cheap and lets the
//! offset of any Scroll be computed from index gaps and subtree lengths, see
//! [`scroll_offset`].
//!
//! ## Limitations
//!
//! Separators only precede content: a subtree with no text anywhere below it
//! is skipped entirely, so an empty Scroll leaves no trace in the output.
//! Scroll text containing a separator character does not round trip; use
//! [`contains_separator`] to reject such text before writing it.

use crate::coordinate::{Coordinate, Level};
use crate::tree::{Children, DocumentTree, Node};
use std::iter;

const SEPARATORS: [char; 9] = [
    '\u{1F}', // Library
    '\u{1E}', // Shelf
    '\u{1D}', // Series
    '\u{1C}', // Collection
    '\u{1B}', // Volume
    '\u{1A}', // Book
    '\u{19}', // Chapter
    '\u{18}', // Section
    '\u{17}', // Scroll
];

/// The separator character that advances `level`.
pub fn separator(level: Level) -> char {
    SEPARATORS[level.depth()]
}

/// The level a separator character advances, if `c` is one.
pub fn separator_level(c: char) -> Option<Level> {
    SEPARATORS
        .iter()
        .position(|&s| s == c)
        .and_then(Level::from_depth)
}

pub fn is_separator(c: char) -> bool {
    separator_level(c).is_some()
}

/// Whether `text` holds a character the codec reserves.
pub fn contains_separator(text: &str) -> bool {
    text.chars().any(is_separator)
}

/// Serializes the whole tree.
pub fn encode(tree: &DocumentTree) -> String {
    let mut out = String::with_capacity(encoded_len(tree));
    encode_children(tree.libraries(), Level::Library, &mut out);
    tracing::debug!(
        scrolls = tree.leaf_count(),
        bytes = out.len(),
        "encoded document"
    );
    out
}

fn encode_children(children: &Children, level: Level, out: &mut String) {
    let mut prev = 1;
    for (&index, node) in children.iter().filter(|(_, node)| node.has_text()) {
        let gap = index.saturating_sub(prev) as usize;
        out.extend(iter::repeat(separator(level)).take(gap));
        match level.child() {
            Some(next) => encode_children(node.children(), next, out),
            None => out.push_str(node.text()),
        }
        prev = index;
    }
}

/// Parses encoded text into a tree. Every input is accepted.
pub fn decode(text: &str) -> DocumentTree {
    let mut tree = DocumentTree::new();
    let mut cursor = Coordinate::default();
    let mut pending = String::new();

    for c in text.chars() {
        match separator_level(c) {
            Some(level) => {
                flush(&mut tree, &cursor, &mut pending);
                cursor.advance(level);
            }
            None => pending.push(c),
        }
    }
    flush(&mut tree, &cursor, &mut pending);

    tracing::debug!(
        bytes = text.len(),
        scrolls = tree.leaf_count(),
        "decoded document"
    );
    tree
}

fn flush(tree: &mut DocumentTree, cursor: &Coordinate, pending: &mut String) {
    if pending.is_empty() {
        return;
    }
    tree.get_or_create(cursor, Level::Scroll)
        .text_mut()
        .push_str(pending);
    pending.clear();
}

/// Length in bytes of `encode(tree)`, computed without building it.
pub fn encoded_len(tree: &DocumentTree) -> usize {
    children_len(tree.libraries(), Level::Library)
}

fn children_len(children: &Children, level: Level) -> usize {
    let mut prev = 1;
    let mut len = 0;
    for (&index, node) in children.iter().filter(|(_, node)| node.has_text()) {
        len += separator_bytes(level, index.saturating_sub(prev)) + node_len(node, level);
        prev = index;
    }
    len
}

fn node_len(node: &Node, level: Level) -> usize {
    match level.child() {
        Some(next) => children_len(node.children(), next),
        None => node.text().len(),
    }
}

fn separator_bytes(level: Level, count: u32) -> usize {
    separator(level).len_utf8() * count as usize
}

/// Byte offset at which the text of the Scroll at `coord` starts in
/// `encode(tree)`, or `None` when that Scroll does not exist or is empty.
///
/// Only the subtrees preceding the path are measured; nothing after it is
/// visited.
pub fn scroll_offset(tree: &DocumentTree, coord: &Coordinate) -> Option<usize> {
    let mut children = tree.libraries();
    let mut offset = 0;

    for level in Level::ALL {
        let target = coord.index(level);
        let node = children.get(&target).filter(|node| node.has_text())?;
        let mut prev = 1;
        for (&index, node) in children.range(..target).filter(|(_, node)| node.has_text()) {
            offset += separator_bytes(level, index.saturating_sub(prev)) + node_len(node, level);
            prev = index;
        }
        offset += separator_bytes(level, target.saturating_sub(prev));
        children = node.children();
    }

    Some(offset)
}
