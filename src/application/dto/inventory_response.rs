use crate::inventory::domain::{HostVars, Inventory};
use crate::ports::outbound::InventoryFormatter;
use crate::shared::Result;

/// InventoryResponse - Result of a query, ready to be formatted
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryResponse {
    /// Full inventory for `--list`
    Inventory(Inventory),
    /// A host's variables for `--host`, or the empty map when no flag was given
    HostVars(HostVars),
}

impl InventoryResponse {
    pub fn render(&self, formatter: &dyn InventoryFormatter) -> Result<String> {
        match self {
            InventoryResponse::Inventory(inventory) => formatter.format_inventory(inventory),
            InventoryResponse::HostVars(vars) => formatter.format_host_vars(vars),
        }
    }
}
