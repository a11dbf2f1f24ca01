use crate::commands::{CmdMessage, CmdResult};
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::store::DocumentStore;

use super::helpers::{current_entry, open_model};

pub fn run<S: DocumentStore>(
    store: &S,
    doc: &str,
    coordinate: Coordinate,
    tagged: bool,
) -> Result<CmdResult> {
    let mut model = open_model(store, doc, tagged)?;
    model.set_coords(coordinate);

    let entry = current_entry(&model);
    let mut result = CmdResult::default();
    if entry.text.is_empty() {
        result.add_message(CmdMessage::info(format!("Scroll {} is empty.", entry.address)));
    }
    Ok(result.with_scrolls(vec![entry]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_show_existing_scroll() {
        let fixture = StoreFixture::new().with_document("doc", &[("m1", "a"), ("w3m2", "deep")]);
        let coordinate = "w3m2".parse().unwrap();

        let result = run(&fixture.store, "doc", coordinate, true).unwrap();
        assert_eq!(result.scrolls.len(), 1);
        assert_eq!(result.scrolls[0].text, "deep");
        assert_eq!(result.scrolls[0].address, "p1g1s1y1h1e1w3i1m2");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_show_absent_scroll_is_empty() {
        let fixture = StoreFixture::new().with_document("doc", &[("m1", "a")]);
        let coordinate = "w9".parse().unwrap();

        let result = run(&fixture.store, "doc", coordinate, false).unwrap();
        assert_eq!(result.scrolls[0].text, "");
        assert_eq!(result.scrolls[0].address, "1-1-1-1-1-1-9-1-1");
        assert_eq!(result.messages.len(), 1);
    }
}
