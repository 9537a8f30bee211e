use crate::inventory::domain::{HostVars, Inventory};
use crate::shared::Result;

/// InventoryFormatter port for rendering query results
///
/// Implementations must be deterministic: the same value always renders
/// to the same bytes.
pub trait InventoryFormatter {
    /// Renders the full inventory (`--list`)
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_inventory(&self, inventory: &Inventory) -> Result<String>;

    /// Renders a single host's variables (`--host`), or `{}` for no flags
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_host_vars(&self, vars: &HostVars) -> Result<String>;
}
