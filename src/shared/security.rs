use crate::shared::error::InventoryError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum inventory/config file size (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that an existing path is not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "read", "write") for error messages
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        return Err(InventoryError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} operations on symbolic links are not allowed",
                operation
            ),
            hint: "Point at the real file instead of a link to it".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that a path is a regular file within the size limit
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "inventory", "config")
///
/// # Errors
/// Returns an error if:
/// - Metadata cannot be read
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file exceeds `MAX_FILE_SIZE`
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| InventoryError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(InventoryError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} file is a symbolic link", file_description),
            hint: "Symbolic links are not followed; pass the target path directly".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(InventoryError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "file is too large ({} bytes). Maximum allowed size is {} bytes",
                file_size, max_size
            ),
            hint: "Split the inventory or prune unused hostvars".to_string(),
        }
        .into());
    }
    Ok(())
}
