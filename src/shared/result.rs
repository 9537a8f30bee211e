/// Crate-wide Result alias with anyhow::Error as the error type.
/// Domain errors (`InventoryError`) convert into it with `?` or `.into()`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
