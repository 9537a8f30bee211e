use dyn_inventory::prelude::*;
use std::cell::Cell;

/// Mock InventorySource for testing
pub struct MockInventorySource {
    pub content: String,
    pub should_fail: bool,
    loads: Cell<usize>,
}

impl MockInventorySource {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            should_fail: false,
            loads: Cell::new(0),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
            loads: Cell::new(0),
        }
    }

    /// Number of times the document has been requested
    pub fn load_count(&self) -> usize {
        self.loads.get()
    }
}

impl InventorySource for MockInventorySource {
    fn load_document(&self) -> Result<InventoryDocument> {
        self.loads.set(self.loads.get() + 1);
        if self.should_fail {
            anyhow::bail!("Mock inventory source failure");
        }
        Ok(serde_json::from_str(&self.content)?)
    }

    fn describe(&self) -> String {
        "mock inventory".to_string()
    }
}

impl InventorySource for &MockInventorySource {
    fn load_document(&self) -> Result<InventoryDocument> {
        (*self).load_document()
    }

    fn describe(&self) -> String {
        (*self).describe()
    }
}
