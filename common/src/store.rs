use std::collections::HashMap;

use anyhow::Result;
use api::diagram::DiagramStyle;
use tracing::debug;

use crate::port::{DiagramRenderer, PreferenceStore};

// preference store that lives as long as the process
//
// used by the cli and the tests; the browser uses local storage instead
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            items: HashMap::new(),
        }
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// renderer for environments without a diagram library, which just notes what would be drawn
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceRenderer;

impl DiagramRenderer for TraceRenderer {
    fn render(&mut self, page: &str, style: &DiagramStyle) {
        debug!({ page = page, style = ?style }, "skipping diagram render");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_back_what_was_written() {
        assert!(MemoryStore::new().is_empty());

        let mut store = MemoryStore::new().with_entry("theme", "green");
        assert!(!store.is_empty());

        assert_eq!(store.read("theme").as_deref(), Some("green"));
        assert_eq!(store.read("darkMode"), None);

        store.write("theme", "purple").unwrap();
        store.write("darkMode", "true").unwrap();

        assert_eq!(store.read("theme").as_deref(), Some("purple"));
        assert_eq!(store.len(), 2);
    }
}
