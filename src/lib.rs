//! dyn-inventory - dynamic inventory provider
//!
//! Serves a static host/group inventory through the inventory script
//! protocol used by configuration-management orchestrators: `--list` prints
//! every group plus `_meta.hostvars`, `--host <name>` prints one host's
//! variables, and no flag prints `{}`.
//!
//! # Architecture
//!
//! - **Domain Layer** (`inventory`): the inventory model and the services that build and filter it
//! - **Application Layer** (`application`): the query use case, DTOs and factories
//! - **Ports** (`ports`): interfaces for the inventory source, formatter and presenter
//! - **Adapters** (`adapters`): file-system, in-memory and JSON implementations of the ports
//! - **Shared** (`shared`): error types, result alias and file safety checks
//!
//! # Example
//!
//! ```
//! use dyn_inventory::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let source = StaticInventorySource::from_json(r#"{"web": ["10.0.0.1"]}"#)?;
//! let use_case = QueryInventoryUseCase::new(source, QueryOptions::default());
//!
//! let response = use_case.execute(InventoryRequest::List)?;
//! let output = response.render(&JsonFormatter::new())?;
//! assert!(output.contains("\"_meta\""));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod inventory;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::{
        FileSystemInventorySource, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::JsonFormatter;
    pub use crate::adapters::outbound::memory::StaticInventorySource;
    pub use crate::application::dto::{InventoryRequest, InventoryResponse};
    pub use crate::application::factories::{PresenterFactory, PresenterType};
    pub use crate::application::use_cases::{QueryInventoryUseCase, QueryOptions};
    pub use crate::inventory::domain::{
        Group, GroupName, HostName, HostVars, Inventory, InventoryDocument, MembershipIndex,
    };
    pub use crate::inventory::services::{GroupNamePolicy, HostFilter, InventoryBuilder};
    pub use crate::ports::inbound::InventoryQueryPort;
    pub use crate::ports::outbound::{InventoryFormatter, InventorySource, OutputPresenter};
    pub use crate::shared::Result;
}
