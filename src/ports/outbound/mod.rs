/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the inventory source and the output destination.
pub mod formatter;
pub mod inventory_source;
pub mod output_presenter;

pub use formatter::InventoryFormatter;
pub use inventory_source::InventorySource;
pub use output_presenter::OutputPresenter;
