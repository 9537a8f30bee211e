/// Inventory domain layer
///
/// Pure data model and services with no I/O: the document shape read from
/// disk, the validated `Inventory`, and the services that build and filter it.
pub mod domain;
pub mod services;
