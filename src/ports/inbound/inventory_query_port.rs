use crate::inventory::domain::{HostVars, Inventory};
use crate::shared::Result;

/// InventoryQueryPort - Inbound port for the inventory script protocol
///
/// This is the contract the orchestrator relies on when it runs the
/// inventory executable. All three operations are read-only and total with
/// respect to their input: an unknown host is not an error.
pub trait InventoryQueryPort {
    /// Full inventory (`--list`): every group plus `_meta.hostvars`
    ///
    /// # Errors
    /// Returns an error only if the inventory source cannot be loaded
    fn list(&self) -> Result<Inventory>;

    /// Variables of one host (`--host <name>`); empty for unknown hosts
    ///
    /// # Errors
    /// Returns an error only if the inventory source cannot be loaded
    fn host(&self, hostname: &str) -> Result<HostVars>;

    /// Response when neither flag is given: always empty
    fn default_response(&self) -> HostVars {
        HostVars::new()
    }
}
