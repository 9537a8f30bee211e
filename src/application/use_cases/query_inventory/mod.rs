use crate::application::dto::{InventoryRequest, InventoryResponse};
use crate::inventory::domain::{HostVars, Inventory};
use crate::inventory::services::{GroupNamePolicy, HostFilter, InventoryBuilder};
use crate::ports::inbound::InventoryQueryPort;
use crate::ports::outbound::InventorySource;
use crate::shared::Result;
use anyhow::Context;
use std::cell::OnceCell;

/// Knobs that shape the inventory after it is read from the source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Wildcard patterns of hosts to drop from the output
    pub exclude_patterns: Vec<String>,
    /// Rewriting applied to group names before validation
    pub group_name_policy: GroupNamePolicy,
}

/// QueryInventoryUseCase - Serves the inventory script protocol
///
/// The inventory is read from the source at most once, on the first query
/// that needs it, and is immutable from then on.
///
/// # Type Parameters
/// * `S` - InventorySource implementation
pub struct QueryInventoryUseCase<S> {
    source: S,
    options: QueryOptions,
    inventory: OnceCell<Inventory>,
}

impl<S> QueryInventoryUseCase<S>
where
    S: InventorySource,
{
    pub fn new(source: S, options: QueryOptions) -> Self {
        Self {
            source,
            options,
            inventory: OnceCell::new(),
        }
    }

    /// Executes a single query
    ///
    /// `InventoryRequest::Default` never touches the source.
    pub fn execute(&self, request: InventoryRequest) -> Result<InventoryResponse> {
        match request {
            InventoryRequest::List => Ok(InventoryResponse::Inventory(self.list()?)),
            InventoryRequest::Host(name) => Ok(InventoryResponse::HostVars(self.host(&name)?)),
            InventoryRequest::Default => Ok(InventoryResponse::HostVars(self.default_response())),
        }
    }

    fn inventory(&self) -> Result<&Inventory> {
        if let Some(inventory) = self.inventory.get() {
            return Ok(inventory);
        }
        let inventory = self.load()?;
        Ok(self.inventory.get_or_init(|| inventory))
    }

    fn load(&self) -> Result<Inventory> {
        let description = self.source.describe();
        tracing::info!(source = %description, "loading inventory");

        let document = self.source.load_document()?;

        let mut builder =
            InventoryBuilder::new().with_group_name_policy(self.options.group_name_policy);
        builder
            .merge_document(document)
            .with_context(|| format!("Invalid inventory in {}", description))?;
        let mut inventory = builder.build();

        if !self.options.exclude_patterns.is_empty() {
            inventory = self.apply_exclusions(inventory)?;
        }

        report_inconsistencies(&inventory);

        tracing::debug!(
            groups = inventory.group_count(),
            hosts = inventory.membership().host_count(),
            hostvars = inventory.hostvars().len(),
            "inventory ready"
        );

        Ok(inventory)
    }

    fn apply_exclusions(&self, inventory: Inventory) -> Result<Inventory> {
        let filter = HostFilter::new(self.options.exclude_patterns.clone())
            .context("Invalid host exclusion pattern")?;

        let before = inventory.membership();
        let filtered = filter.filter_inventory(inventory);
        let after = filtered.membership();

        let excluded: Vec<_> = before
            .hosts()
            .filter(|host| !after.contains_host(host.as_str()))
            .collect();
        if !excluded.is_empty() {
            tracing::info!(count = excluded.len(), "excluded host(s) based on filters");
            for host in excluded {
                tracing::debug!(
                    host = %host,
                    groups = before.groups_of(host.as_str()).len(),
                    "host excluded"
                );
            }
        }

        for pattern in filter.get_unmatched_patterns() {
            tracing::warn!("Exclude pattern '{}' did not match any host", pattern);
        }

        Ok(filtered)
    }
}

/// Logs references the orchestrator will silently ignore
fn report_inconsistencies(inventory: &Inventory) {
    for (parent, child) in inventory.dangling_children() {
        tracing::warn!(
            "Group '{}' lists child '{}' which is not defined in the inventory",
            parent,
            child
        );
    }
    for host in inventory.ungrouped_hostvars() {
        tracing::warn!("Host '{}' has hostvars but belongs to no group", host);
    }
}

impl<S> InventoryQueryPort for QueryInventoryUseCase<S>
where
    S: InventorySource,
{
    fn list(&self) -> Result<Inventory> {
        Ok(self.inventory()?.clone())
    }

    fn host(&self, hostname: &str) -> Result<HostVars> {
        let vars = self.inventory()?.host_vars(hostname);
        if vars.is_empty() {
            tracing::debug!(host = hostname, "no hostvars for host");
        }
        Ok(vars)
    }
}
