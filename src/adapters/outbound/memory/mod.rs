/// In-memory adapters
mod static_source;

pub use static_source::StaticInventorySource;
