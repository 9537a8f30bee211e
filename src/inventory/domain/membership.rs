use super::group::GroupName;
use super::host::HostName;
use super::inventory::Inventory;
use std::collections::{BTreeMap, BTreeSet};

/// Two-way index of direct group membership: group→hosts and host→groups.
///
/// Only direct `hosts` entries count; membership inherited through
/// `children` is left to the orchestrator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipIndex {
    hosts_by_group: BTreeMap<GroupName, BTreeSet<HostName>>,
    groups_by_host: BTreeMap<HostName, BTreeSet<GroupName>>,
}

impl MembershipIndex {
    pub fn from_inventory(inventory: &Inventory) -> Self {
        let mut index = Self::default();
        for (group_name, group) in inventory.groups() {
            let members = index.hosts_by_group.entry(group_name.clone()).or_default();
            for host in group.hosts() {
                members.insert(host.clone());
                index
                    .groups_by_host
                    .entry(host.clone())
                    .or_default()
                    .insert(group_name.clone());
            }
        }
        index
    }

    /// Groups that list `host` directly, in name order
    pub fn groups_of(&self, host: &str) -> Vec<&GroupName> {
        self.groups_by_host
            .get(host)
            .map(|groups| groups.iter().collect())
            .unwrap_or_default()
    }

    /// Hosts listed directly in `group`, in name order
    pub fn hosts_of(&self, group: &str) -> Vec<&HostName> {
        self.hosts_by_group
            .get(group)
            .map(|hosts| hosts.iter().collect())
            .unwrap_or_default()
    }

    pub fn contains_host(&self, host: &str) -> bool {
        self.groups_by_host.contains_key(host)
    }

    /// Number of distinct hosts that belong to at least one group
    pub fn host_count(&self) -> usize {
        self.groups_by_host.len()
    }

    pub fn hosts(&self) -> impl Iterator<Item = &HostName> {
        self.groups_by_host.keys()
    }
}
