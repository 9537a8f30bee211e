use crate::inventory::domain::InventoryDocument;
use crate::shared::Result;

/// InventorySource port for obtaining the raw inventory document
///
/// This port abstracts where the static inventory capture lives (a file on
/// disk, an in-memory document, ...). It is called once per invocation.
pub trait InventorySource {
    /// Loads and parses the inventory document
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source does not exist or cannot be read
    /// - The content is not a valid inventory document
    fn load_document(&self) -> Result<InventoryDocument>;

    /// Human-readable description of the source, used in log lines
    fn describe(&self) -> String;
}
