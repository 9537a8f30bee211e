//! Raw inventory document as read from disk.
//!
//! The document is deliberately loose: names are plain strings and groups
//! may use either the shorthand host-list form or the full object form.
//! `InventoryBuilder` validates and normalizes it into an `Inventory`.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Top-level inventory document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "RawDocument")]
pub struct InventoryDocument {
    pub meta: MetaSection,
    pub groups: BTreeMap<String, GroupEntry>,
}

/// Wire shape before each group value is classified
#[derive(Deserialize)]
struct RawDocument {
    #[serde(rename = "_meta", default)]
    meta: MetaSection,
    #[serde(flatten)]
    groups: BTreeMap<String, Value>,
}

impl TryFrom<RawDocument> for InventoryDocument {
    type Error = String;

    fn try_from(raw: RawDocument) -> Result<Self, Self::Error> {
        let groups = raw
            .groups
            .into_iter()
            .map(|(name, value)| {
                let entry = GroupEntry::from_value(value)
                    .map_err(|reason| format!("group '{}': {}", name, reason))?;
                Ok((name, entry))
            })
            .collect::<Result<_, String>>()?;

        Ok(Self {
            meta: raw.meta,
            groups,
        })
    }
}

/// The reserved `_meta` block
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetaSection {
    #[serde(default)]
    pub hostvars: BTreeMap<String, Map<String, Value>>,
}

/// A group as written in the document
#[derive(Debug, Clone, PartialEq)]
pub enum GroupEntry {
    /// `"group": ["host1", "host2"]`
    Hosts(Vec<String>),
    /// `"group": {"children": [...], "hosts": [...], "vars": {...}}`
    Full(GroupSpec),
}

impl GroupEntry {
    /// Classifies one group value; the error names the offending entry
    pub fn from_value(value: Value) -> Result<Self, String> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::String(host) => Ok(host),
                    other => Err(format!(
                        "host entry #{} is {}, expected a host name string (quote it in YAML)",
                        i, other
                    )),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(GroupEntry::Hosts),
            Value::Object(map) => serde_json::from_value(Value::Object(map))
                .map(GroupEntry::Full)
                .map_err(|e| e.to_string()),
            other => Err(format!(
                "expected a host list or a group object, found {}",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupSpec {
    #[serde(default)]
    pub children: Vec<String>,
    #[serde(default)]
    pub hosts: Vec<String>,
    #[serde(default)]
    pub vars: Map<String, Value>,
}

impl InventoryDocument {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.meta.hostvars.is_empty()
    }
}
