use crate::inventory::domain::InventoryDocument;
use crate::ports::outbound::InventorySource;
use crate::shared::Result;

/// StaticInventorySource adapter serving a document held in memory
///
/// Used when no inventory file is configured (the empty inventory) and by
/// callers that embed the inventory in the binary.
#[derive(Debug, Clone, Default)]
pub struct StaticInventorySource {
    document: InventoryDocument,
}

impl StaticInventorySource {
    pub fn new(document: InventoryDocument) -> Self {
        Self { document }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a JSON document up front
    ///
    /// # Errors
    /// Returns an error if `json` is not a valid inventory document
    pub fn from_json(json: &str) -> Result<Self> {
        let document = serde_json::from_str(json)
            .map_err(|e| anyhow::anyhow!("Invalid embedded inventory: {}", e))?;
        Ok(Self::new(document))
    }
}

impl InventorySource for StaticInventorySource {
    fn load_document(&self) -> Result<InventoryDocument> {
        Ok(self.document.clone())
    }

    fn describe(&self) -> String {
        if self.document.is_empty() {
            "empty inventory".to_string()
        } else {
            format!("in-memory inventory ({} groups)", self.document.groups.len())
        }
    }
}
