use crate::inventory::domain::{HostVars, Inventory};
use crate::ports::outbound::InventoryFormatter;
use crate::shared::Result;
use anyhow::Context;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Indent width used by inventory scripts unless configured otherwise
pub const DEFAULT_INDENT: usize = 4;

/// Largest accepted indent width
pub const MAX_INDENT: usize = 16;

/// JsonFormatter adapter - pretty-printed JSON with a configurable indent
///
/// Output always ends with a single newline.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    indent: Vec<u8>,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::with_indent(DEFAULT_INDENT)
    }

    /// Widths above `MAX_INDENT` are clamped
    pub fn with_indent(width: usize) -> Self {
        Self {
            indent: vec![b' '; width.min(MAX_INDENT)],
        }
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(&self.indent);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        value
            .serialize(&mut serializer)
            .context("Failed to serialize inventory to JSON")?;
        buffer.push(b'\n');
        String::from_utf8(buffer).context("Serialized JSON was not valid UTF-8")
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryFormatter for JsonFormatter {
    fn format_inventory(&self, inventory: &Inventory) -> Result<String> {
        self.render(inventory)
    }

    fn format_host_vars(&self, vars: &HostVars) -> Result<String> {
        self.render(vars)
    }
}
