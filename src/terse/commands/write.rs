use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::coordinate::Coordinate;
use crate::error::{Result, TerseError};
use crate::store::DocumentStore;
use crate::tree::count_words;

use super::helpers::{current_entry, open_model, save_model};

/// Replaces the text of one Scroll, creating it and its ancestors if needed.
/// Empty text clears the Scroll, which then no longer appears in the file.
pub fn run<S: DocumentStore>(
    store: &mut S,
    doc: &str,
    coordinate: Coordinate,
    text: String,
    tagged: bool,
) -> Result<CmdResult> {
    if codec::contains_separator(&text) {
        return Err(TerseError::Api(
            "Text contains reserved separator characters (0x17-0x1F)".into(),
        ));
    }

    let mut model = open_model(store, doc, tagged)?;
    model.set_coords(coordinate);
    let words = count_words(&text);
    model.set_scroll(text);
    save_model(store, doc, &model)?;

    let entry = current_entry(&model);
    let mut result = CmdResult::default();
    if entry.text.is_empty() {
        result.add_message(CmdMessage::success(format!("Cleared {}", entry.address)));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Wrote {} words to {}",
            words, entry.address
        )));
    }
    Ok(result.with_scrolls(vec![entry]))
}
