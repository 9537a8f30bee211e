use crate::shared::error::InventoryError;
use crate::shared::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Borrow;
use std::fmt;

/// Maximum length for host and group identifiers (DNS name limit)
pub(crate) const MAX_IDENTIFIER_LENGTH: usize = 255;

/// Per-host variable overrides as published under `_meta.hostvars`
pub type HostVars = Map<String, Value>;

/// NewType wrapper for a host identifier (IP address or DNS name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HostName(String);

impl HostName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if let Err(reason) = check_identifier(&name) {
            return Err(InventoryError::InvalidHostName { name, reason }.into());
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for HostName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HostName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rules shared by host and group identifiers.
///
/// Inventory scripts pass these names straight to the orchestrator's
/// pattern language, so whitespace and control characters are refused.
pub(crate) fn check_identifier(name: &str) -> std::result::Result<(), String> {
    if name.is_empty() {
        return Err("name cannot be empty".to_string());
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(format!(
            "name is too long ({} bytes). Maximum allowed: {} bytes",
            name.len(),
            MAX_IDENTIFIER_LENGTH
        ));
    }

    if let Some(ch) = name.chars().find(|c| c.is_whitespace() || c.is_control()) {
        return Err(format!("name contains forbidden character {:?}", ch));
    }

    Ok(())
}
