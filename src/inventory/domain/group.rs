use super::host::{check_identifier, HostName};
use crate::shared::error::InventoryError;
use crate::shared::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Borrow;
use std::fmt;

/// Top-level key reserved for per-host metadata
pub const META_KEY: &str = "_meta";

/// NewType wrapper for a group name with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GroupName(String);

impl GroupName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name == META_KEY {
            return Err(InventoryError::InvalidGroupName {
                name,
                reason: format!("\"{}\" is reserved for host metadata", META_KEY),
            }
            .into());
        }

        if let Err(reason) = check_identifier(&name) {
            return Err(InventoryError::InvalidGroupName { name, reason }.into());
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for GroupName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named collection of hosts.
///
/// `children` and `hosts` behave as sets but keep first-seen order so the
/// emitted JSON follows the source document. Field order here is the
/// serialized key order: `children`, `hosts`, `vars`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Group {
    children: Vec<GroupName>,
    hosts: Vec<HostName>,
    vars: Map<String, Value>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn children(&self) -> &[GroupName] {
        &self.children
    }

    pub fn hosts(&self) -> &[HostName] {
        &self.hosts
    }

    pub fn vars(&self) -> &Map<String, Value> {
        &self.vars
    }

    pub fn contains_host(&self, host: &str) -> bool {
        self.hosts.iter().any(|h| h.as_str() == host)
    }

    /// Adds a host; returns false if it was already a member
    pub fn add_host(&mut self, host: HostName) -> bool {
        if self.hosts.contains(&host) {
            return false;
        }
        self.hosts.push(host);
        true
    }

    /// Adds a child group; returns false if it was already listed
    pub fn add_child(&mut self, child: GroupName) -> bool {
        if self.children.contains(&child) {
            return false;
        }
        self.children.push(child);
        true
    }

    /// Sets a group variable, returning the previous value
    pub fn set_var(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.vars.insert(key.into(), value)
    }

    pub(crate) fn retain_hosts<F>(&mut self, mut keep: F)
    where
        F: FnMut(&HostName) -> bool,
    {
        self.hosts.retain(|h| keep(h));
    }
}
