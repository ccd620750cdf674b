//! Upload filename validation.

/// Checks candidate filenames against an allow-list of media extensions.
///
/// The check is a case-insensitive suffix test: `photo.JPG` passes for
/// `.jpg`, `archive` and the empty string never pass.
#[derive(Clone, Debug)]
pub struct UploadValidator {
    allowed_extensions: Vec<String>,
}

impl UploadValidator {
    /// `allowed_extensions` entries are expected as lowercase `.ext` suffixes.
    pub fn new(allowed_extensions: Vec<String>) -> Self {
        Self { allowed_extensions }
    }

    /// True iff the filename ends with one of the allowed suffixes.
    pub fn is_allowed(&self, filename: &str) -> bool {
        let lowered = filename.to_lowercase();
        self.allowed_extensions
            .iter()
            .any(|ext| lowered.ends_with(ext.as_str()))
    }
}
