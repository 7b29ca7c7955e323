//! Client-side receipt validation.

use thiserror::Error;

/// Extensions accepted for receipt images, lowercase.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Reasons a receipt is refused before upload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReceiptError {
    /// File is not a jpg/jpeg/png image
    #[error("Seuls les fichiers .jpg, .jpeg et .png sont autorisés.")]
    UnsupportedExtension {
        /// Name of the refused file
        file_name: String,
    },
}

/// Returns the lowercased text after the last `.`, if any.
#[must_use]
pub fn extension_of(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
        .map(str::to_lowercase)
}

/// Checks that a receipt file name carries an accepted image extension.
pub fn validate_receipt_name(file_name: &str) -> Result<(), ReceiptError> {
    match extension_of(file_name) {
        Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(ReceiptError::UnsupportedExtension {
            file_name: file_name.to_string(),
        }),
    }
}
