/// Mock implementations for testing
mod mock_inventory_source;
mod mock_output_presenter;

pub use mock_inventory_source::MockInventorySource;
pub use mock_output_presenter::MockOutputPresenter;
