pub mod document;
pub mod group;
pub mod host;
pub mod inventory;
pub mod membership;

pub use document::{GroupEntry, GroupSpec, InventoryDocument, MetaSection};
pub use group::{Group, GroupName, META_KEY};
pub use host::{HostName, HostVars};
pub use inventory::Inventory;
pub use membership::MembershipIndex;
