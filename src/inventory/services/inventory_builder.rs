use super::group_name::GroupNamePolicy;
use crate::inventory::domain::{
    Group, GroupEntry, GroupName, HostName, HostVars, Inventory, InventoryDocument,
};
use crate::shared::Result;
use serde_json::Value;
use std::collections::BTreeMap;

/// Incrementally assembles an `Inventory`.
///
/// Groups are created on first reference, hosts and children are appended
/// once, and every name goes through the configured `GroupNamePolicy`
/// before validation. Two raw names that sanitize to the same group merge.
#[derive(Debug, Default)]
pub struct InventoryBuilder {
    policy: GroupNamePolicy,
    groups: BTreeMap<GroupName, Group>,
    hostvars: BTreeMap<HostName, HostVars>,
}

impl InventoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group_name_policy(mut self, policy: GroupNamePolicy) -> Self {
        self.policy = policy;
        self
    }

    fn group_name(&self, raw: &str) -> Result<GroupName> {
        GroupName::new(self.policy.apply(raw).into_owned())
    }

    fn group_entry(&mut self, raw: &str) -> Result<&mut Group> {
        let name = self.group_name(raw)?;
        Ok(self.groups.entry(name).or_default())
    }

    /// Ensures a group exists, even with no hosts
    pub fn add_group(&mut self, group: &str) -> Result<()> {
        self.group_entry(group)?;
        Ok(())
    }

    pub fn add_host(&mut self, group: &str, host: &str) -> Result<()> {
        let host = HostName::new(host)?;
        self.group_entry(group)?.add_host(host);
        Ok(())
    }

    /// Nests `child` under `parent`. The child group itself is not created.
    pub fn add_child(&mut self, parent: &str, child: &str) -> Result<()> {
        let child = self.group_name(child)?;
        self.group_entry(parent)?.add_child(child);
        Ok(())
    }

    pub fn set_group_var(&mut self, group: &str, key: &str, value: Value) -> Result<()> {
        self.group_entry(group)?.set_var(key, value);
        Ok(())
    }

    pub fn set_host_var(&mut self, host: &str, key: &str, value: Value) -> Result<()> {
        let host = HostName::new(host)?;
        self.hostvars
            .entry(host)
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }

    /// Applies every group and hostvars entry of a raw document
    pub fn merge_document(&mut self, document: InventoryDocument) -> Result<()> {
        for (group, entry) in document.groups {
            self.add_group(&group)?;
            match entry {
                GroupEntry::Hosts(hosts) => {
                    for host in hosts {
                        self.add_host(&group, &host)?;
                    }
                }
                GroupEntry::Full(full) => {
                    for child in full.children {
                        self.add_child(&group, &child)?;
                    }
                    for host in full.hosts {
                        self.add_host(&group, &host)?;
                    }
                    for (key, value) in full.vars {
                        self.set_group_var(&group, &key, value)?;
                    }
                }
            }
        }

        for (host, vars) in document.meta.hostvars {
            let host = HostName::new(host)?;
            self.hostvars.entry(host).or_default().extend(vars);
        }

        Ok(())
    }

    pub fn build(self) -> Inventory {
        Inventory::from_parts(self.groups, self.hostvars)
    }
}
