use super::group::{Group, GroupName, META_KEY};
use super::host::{HostName, HostVars};
use super::membership::MembershipIndex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// The complete inventory served to the orchestrator.
///
/// Built once by `InventoryBuilder` and read-only afterwards. Groups iterate
/// in name order, which keeps the emitted document byte-stable across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    groups: BTreeMap<GroupName, Group>,
    hostvars: BTreeMap<HostName, HostVars>,
}

/// Serialized form of the `_meta` block
#[derive(serde::Serialize)]
struct Meta<'a> {
    hostvars: &'a BTreeMap<HostName, HostVars>,
}

impl Inventory {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(
        groups: BTreeMap<GroupName, Group>,
        hostvars: BTreeMap<HostName, HostVars>,
    ) -> Self {
        Self { groups, hostvars }
    }

    pub fn groups(&self) -> impl Iterator<Item = (&GroupName, &Group)> {
        self.groups.iter()
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn hostvars(&self) -> &BTreeMap<HostName, HostVars> {
        &self.hostvars
    }

    /// Variables for a single host; unknown hosts yield an empty map
    pub fn host_vars(&self, host: &str) -> HostVars {
        self.hostvars.get(host).cloned().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.hostvars.is_empty()
    }

    pub fn membership(&self) -> MembershipIndex {
        MembershipIndex::from_inventory(self)
    }

    /// Child references that point at groups this inventory does not define
    pub fn dangling_children(&self) -> Vec<(&GroupName, &GroupName)> {
        self.groups
            .iter()
            .flat_map(|(parent, group)| {
                group
                    .children()
                    .iter()
                    .filter(move |child| !self.groups.contains_key(child.as_str()))
                    .map(move |child| (parent, child))
            })
            .collect()
    }

    /// Hosts that carry hostvars but belong to no group
    pub fn ungrouped_hostvars(&self) -> Vec<&HostName> {
        let index = self.membership();
        self.hostvars
            .keys()
            .filter(|host| !index.contains_host(host.as_str()))
            .collect()
    }

    /// Drops every host for which `excluded` returns true, from both the
    /// group host lists and `_meta.hostvars`. Groups are kept even if emptied.
    pub fn without_hosts<F>(mut self, mut excluded: F) -> Self
    where
        F: FnMut(&HostName) -> bool,
    {
        for group in self.groups.values_mut() {
            group.retain_hosts(|h| !excluded(h));
        }
        self.hostvars.retain(|h, _| !excluded(h));
        self
    }
}

impl Serialize for Inventory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.groups.len() + 1))?;
        for (name, group) in &self.groups {
            map.serialize_entry(name, group)?;
        }
        map.serialize_entry(
            META_KEY,
            &Meta {
                hostvars: &self.hostvars,
            },
        )?;
        map.end()
    }
}
