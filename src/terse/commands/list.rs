use crate::commands::{CmdMessage, CmdResult, ScrollEntry};
use crate::error::Result;
use crate::store::DocumentStore;

use super::helpers::{open_model, scroll_entry};

/// Lists every Scroll in document order, optionally only those whose text
/// contains `search` (case-insensitive).
pub fn run<S: DocumentStore>(
    store: &S,
    doc: &str,
    search: Option<&str>,
    tagged: bool,
) -> Result<CmdResult> {
    let model = open_model(store, doc, tagged)?;
    let term = search.map(str::to_lowercase);

    let entries: Vec<ScrollEntry> = model
        .tree()
        .scrolls()
        .into_iter()
        .filter(|(_, text)| match &term {
            Some(term) => text.to_lowercase().contains(term),
            None => true,
        })
        .map(|(coordinate, text)| scroll_entry(coordinate, text, tagged))
        .collect();

    let mut result = CmdResult::default();
    if entries.is_empty() {
        let message = match search {
            Some(term) => format!("No scrolls match \"{}\".", term),
            None => "No scrolls found.".to_string(),
        };
        result.add_message(CmdMessage::info(message));
    }
    Ok(result.with_scrolls(entries))
}
