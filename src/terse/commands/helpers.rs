use crate::commands::ScrollEntry;
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::model::TerseModel;
use crate::store::DocumentStore;

/// Loads a document into a model. A document that does not exist yet opens
/// empty.
pub fn open_model<S: DocumentStore>(store: &S, doc: &str, tagged: bool) -> Result<TerseModel> {
    let text = store.read_document(doc)?.unwrap_or_default();
    Ok(TerseModel::from_text(&text, tagged))
}

pub fn save_model<S: DocumentStore>(store: &mut S, doc: &str, model: &TerseModel) -> Result<()> {
    store.write_document(doc, &model.serialize())
}

pub fn address(coordinate: &Coordinate, tagged: bool) -> String {
    if tagged {
        coordinate.to_string()
    } else {
        coordinate.to_dashed()
    }
}

pub fn scroll_entry(coordinate: Coordinate, text: &str, tagged: bool) -> ScrollEntry {
    ScrollEntry {
        coordinate,
        address: address(&coordinate, tagged),
        text: text.to_string(),
    }
}

/// Current Scroll of `model` as an entry.
pub fn current_entry(model: &TerseModel) -> ScrollEntry {
    ScrollEntry {
        coordinate: model.coords(),
        address: model.address(),
        text: model.scroll().to_string(),
    }
}
