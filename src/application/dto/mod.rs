/// Data Transfer Objects for application layer
///
/// DTOs carry a query from the CLI into the use case and its result back
/// out to the formatter, keeping the domain layer isolated.
mod inventory_request;
mod inventory_response;

pub use inventory_request::InventoryRequest;
pub use inventory_response::InventoryResponse;
