pub mod group_name;
mod host_filter;
mod inventory_builder;

pub use group_name::GroupNamePolicy;
pub use host_filter::HostFilter;
pub use inventory_builder::InventoryBuilder;
