use crate::commands::{CmdMessage, CmdResult};
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::store::DocumentStore;

use super::helpers::open_model;

/// Finds the byte offset at which a Scroll's text starts in the stored file.
pub fn run<S: DocumentStore>(
    store: &S,
    doc: &str,
    coordinate: Coordinate,
    tagged: bool,
) -> Result<CmdResult> {
    let mut model = open_model(store, doc, tagged)?;
    model.set_coords(coordinate);

    let result = CmdResult::default().with_coordinate(coordinate);
    match model.scroll_offset() {
        Some(offset) => Ok(result.with_offset(offset)),
        None => {
            let mut result = result;
            result.add_message(CmdMessage::warning(format!(
                "No scroll at {}",
                model.address()
            )));
            Ok(result)
        }
    }
}
