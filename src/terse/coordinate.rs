//! # Coordinates
//!
//! A [`Coordinate`] selects one Scroll in a document: nine positive indexes,
//! one per [`Level`], ordered from the outermost (Library) to the innermost
//! (Scroll).
//!
//! ## Literal Syntax
//!
//! Two spellings are accepted when parsing:
//!
//! - **Dashed**: nine numbers in fixed order, `1-2-3-4-5-6-7-8-9`.
//! - **Tagged**: numbers prefixed by a level letter, in any order, with any
//!   level omitted (it defaults to 1): `w50i33m22`, `p9-g8-s7`.
//!
//! Formatting always produces the full tagged form (`p1g2s3y4h5e6w7i8m9`), so
//! parsing and printing a coordinate normalizes it.
//!
//! | Level      | Tag |
//! |------------|-----|
//! | Library    | `p` |
//! | Shelf      | `g` |
//! | Series     | `s` |
//! | Collection | `y` |
//! | Volume     | `h` |
//! | Book       | `e` |
//! | Chapter    | `w` |
//! | Section    | `i` |
//! | Scroll     | `m` |

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of levels in a document tree.
pub const DEPTH: usize = 9;

/// One of the nine levels of the document hierarchy, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Library,
    Shelf,
    Series,
    Collection,
    Volume,
    Book,
    Chapter,
    Section,
    Scroll,
}

impl Level {
    pub const ALL: [Level; DEPTH] = [
        Level::Library,
        Level::Shelf,
        Level::Series,
        Level::Collection,
        Level::Volume,
        Level::Book,
        Level::Chapter,
        Level::Section,
        Level::Scroll,
    ];

    /// Position of the level, 0 for Library through 8 for Scroll.
    pub fn depth(self) -> usize {
        self as usize
    }

    pub fn from_depth(depth: usize) -> Option<Level> {
        Self::ALL.get(depth).copied()
    }

    /// The level directly below this one, `None` for Scroll.
    pub fn child(self) -> Option<Level> {
        Self::from_depth(self.depth() + 1)
    }

    pub fn tag(self) -> char {
        match self {
            Level::Library => 'p',
            Level::Shelf => 'g',
            Level::Series => 's',
            Level::Collection => 'y',
            Level::Volume => 'h',
            Level::Book => 'e',
            Level::Chapter => 'w',
            Level::Section => 'i',
            Level::Scroll => 'm',
        }
    }

    pub fn from_tag(tag: char) -> Option<Level> {
        Self::ALL.into_iter().find(|level| level.tag() == tag)
    }

    pub fn name(self) -> &'static str {
        match self {
            Level::Library => "library",
            Level::Shelf => "shelf",
            Level::Series => "series",
            Level::Collection => "collection",
            Level::Volume => "volume",
            Level::Book => "book",
            Level::Chapter => "chapter",
            Level::Section => "section",
            Level::Scroll => "scroll",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A malformed coordinate literal or an attempt to set an index below 1.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("expected 9 dash-separated indexes, found {0}")]
    TokenCount(usize),

    #[error("invalid index value: {0:?}")]
    InvalidValue(String),

    #[error("unknown level tag: {0:?}")]
    UnknownTag(char),

    #[error("{0} index must be at least 1")]
    ZeroIndex(Level),
}

/// Location of a single Scroll: one index per level, each at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    indexes: [u32; DEPTH],
}

impl Default for Coordinate {
    fn default() -> Self {
        Self {
            indexes: [1; DEPTH],
        }
    }
}

impl Coordinate {
    /// Builds a coordinate from indexes ordered Library first.
    pub fn new(indexes: [u32; DEPTH]) -> Result<Self, CoordinateError> {
        for (level, &value) in Level::ALL.iter().zip(indexes.iter()) {
            if value == 0 {
                return Err(CoordinateError::ZeroIndex(*level));
            }
        }
        Ok(Self { indexes })
    }

    pub fn index(&self, level: Level) -> u32 {
        self.indexes[level.depth()]
    }

    pub fn indexes(&self) -> &[u32; DEPTH] {
        &self.indexes
    }

    pub fn set(&mut self, level: Level, value: u32) -> Result<(), CoordinateError> {
        if value == 0 {
            return Err(CoordinateError::ZeroIndex(level));
        }
        self.indexes[level.depth()] = value;
        Ok(())
    }

    /// Builder form of [`Coordinate::set`].
    pub fn with(mut self, level: Level, value: u32) -> Result<Self, CoordinateError> {
        self.set(level, value)?;
        Ok(self)
    }

    /// Moves one step forward at `level` and rewinds every deeper level to 1.
    pub fn advance(&mut self, level: Level) {
        self.advance_by(level, 1);
    }

    pub fn advance_by(&mut self, level: Level, steps: u32) {
        let depth = level.depth();
        self.indexes[depth] = self.indexes[depth].saturating_add(steps);
        self.reset_below(level);
    }

    /// Sets every level deeper than `level` back to 1.
    pub fn reset_below(&mut self, level: Level) {
        for index in &mut self.indexes[level.depth() + 1..] {
            *index = 1;
        }
    }

    /// The dashed spelling, `1-1-1-1-1-1-1-1-1`.
    pub fn to_dashed(&self) -> String {
        self.indexes
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }

    fn parse_dashed(s: &str) -> Result<Self, CoordinateError> {
        let tokens: Vec<&str> = s.split('-').collect();
        if tokens.len() != DEPTH {
            return Err(CoordinateError::TokenCount(tokens.len()));
        }

        let mut indexes = [1; DEPTH];
        for (slot, token) in indexes.iter_mut().zip(tokens) {
            *slot = parse_index(token)?;
        }
        Ok(Self { indexes })
    }

    fn parse_tagged(s: &str) -> Result<Self, CoordinateError> {
        let mut coord = Self::default();
        let mut chars = s.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '-' {
                continue;
            }
            let level = Level::from_tag(c).ok_or(CoordinateError::UnknownTag(c))?;

            let mut digits = String::new();
            while let Some(&d) = chars.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                digits.push(d);
                chars.next();
            }
            coord.indexes[level.depth()] = parse_index(&digits)?;
        }

        Ok(coord)
    }
}

/// Decimal digits only; `u32::from_str` alone would also take a leading `+`.
fn parse_index(token: &str) -> Result<u32, CoordinateError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoordinateError::InvalidValue(token.to_string()));
    }
    match token.parse::<u32>() {
        Ok(0) | Err(_) => Err(CoordinateError::InvalidValue(token.to_string())),
        Ok(n) => Ok(n),
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (level, index) in Level::ALL.iter().zip(self.indexes.iter()) {
            write!(f, "{}{}", level.tag(), index)?;
        }
        Ok(())
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with(|c: char| c.is_ascii_alphabetic()) {
            Self::parse_tagged(s)
        } else {
            Self::parse_dashed(s)
        }
    }
}
