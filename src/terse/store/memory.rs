use super::DocumentStore;
use crate::error::{Result, TerseError};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Default)]
pub struct InMemoryStore {
    documents: HashMap<String, String>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for InMemoryStore {
    fn read_document(&self, name: &str) -> Result<Option<String>> {
        Ok(self.documents.get(name).cloned())
    }

    fn write_document(&mut self, name: &str, text: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(TerseError::Store("simulated write error".to_string()));
        }
        self.documents.insert(name.to_string(), text.to_string());
        Ok(())
    }

    fn document_path(&self, name: &str) -> PathBuf {
        PathBuf::from("memory").join(name)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::coordinate::Coordinate;
    use crate::model::TerseModel;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Stores a document holding `scrolls`, each a (coordinate, text) pair.
        pub fn with_document(mut self, name: &str, scrolls: &[(&str, &str)]) -> Self {
            let mut model = TerseModel::new();
            for (coord, text) in scrolls {
                let coord: Coordinate = coord.parse().unwrap();
                model.tree_mut().write_text(&coord, *text);
            }
            self.store.write_document(name, &model.serialize()).unwrap();
            self
        }

        pub fn with_raw(mut self, name: &str, text: &str) -> Self {
            self.store.write_document(name, text).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut store = InMemoryStore::new();
        assert!(store.read_document("doc").unwrap().is_none());
        store.write_document("doc", "text").unwrap();
        assert_eq!(store.read_document("doc").unwrap().as_deref(), Some("text"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_simulated_write_error() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        assert!(store.write_document("doc", "text").is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_fixture_encodes_document() {
        let fixture = StoreFixture::new().with_document("doc", &[("m1", "a"), ("m2", "b")]);
        assert_eq!(
            fixture.store.read_document("doc").unwrap().as_deref(),
            Some("a\u{17}b")
        );
    }
}
