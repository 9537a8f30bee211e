/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod inventory_query_port;

pub use inventory_query_port::InventoryQueryPort;
