/// Use cases module containing application business logic orchestration
mod query_inventory;

pub use query_inventory::{QueryInventoryUseCase, QueryOptions};
