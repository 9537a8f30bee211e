use crate::inventory::domain::InventoryDocument;
use crate::ports::outbound::InventorySource;
use crate::shared::error::InventoryError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk encodings accepted for inventory files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
    Toml,
}

impl SourceFormat {
    /// Picks the format from the file extension, falling back to JSON
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("yml") | Some("yaml") => SourceFormat::Yaml,
            Some("toml") => SourceFormat::Toml,
            _ => SourceFormat::Json,
        }
    }

    fn parse(self, content: &str) -> std::result::Result<InventoryDocument, String> {
        match self {
            SourceFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            SourceFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
            SourceFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// FileSystemInventorySource adapter for reading a static inventory capture
///
/// Implements the InventorySource port. The file is validated (exists,
/// regular file, not a symlink, size limit) before it is read.
#[derive(Debug, Clone)]
pub struct FileSystemInventorySource {
    path: PathBuf,
}

impl FileSystemInventorySource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_content(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(InventoryError::SourceNotFound {
                path: self.path.clone(),
                suggestion: "Check the --inventory option, the DYN_INVENTORY_SOURCE variable, or the `inventory` key of the config file".to_string(),
            }
            .into());
        }

        validate_regular_file(&self.path, "inventory")?;

        fs::read_to_string(&self.path).map_err(|e| {
            InventoryError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl InventorySource for FileSystemInventorySource {
    fn load_document(&self) -> Result<InventoryDocument> {
        let content = self.read_content()?;
        let format = SourceFormat::from_path(&self.path);

        tracing::debug!(
            path = %self.path.display(),
            ?format,
            bytes = content.len(),
            "parsing inventory source"
        );

        format.parse(&content).map_err(|details| {
            InventoryError::SourceParseError {
                path: self.path.clone(),
                details,
            }
            .into()
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
