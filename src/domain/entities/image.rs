use actix_multipart::form::{bytes::Bytes as MpBytes, MultipartForm};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

// ───── Wire Models ──────────────────────────────────────────────────

/// One stored asset as reported by the media store, and as sent to the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub public_id: String,
    pub secure_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_filename: Option<String>,
}

impl ImageDescriptor {
    /// Shape returned by the upload endpoint. The original filename is not part of it.
    pub fn for_upload(self) -> Self {
        Self {
            original_filename: None,
            ..self
        }
    }

    /// Shape returned by the list endpoint: the filename falls back to the identifier.
    pub fn for_listing(self) -> Self {
        let original_filename = self
            .original_filename
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.public_id.clone());

        Self {
            original_filename: Some(original_filename),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageListResponse {
    pub images: Vec<ImageDescriptor>,
    pub total_count: u64,
}

// ───── Page Model ───────────────────────────────────────────────────

/// Local projection of a stored asset, rebuilt from every listing.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredImage {
    pub public_id: String,
    pub url: String,
    pub original_name: String,
    pub uploaded_at: DateTime<Utc>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub format: Option<String>,
    pub bytes: Option<u64>,
}

impl StoredImage {
    /// Case-insensitive substring match on the display name or the identifier.
    pub fn matches(&self, search_term: &str) -> bool {
        let needle = search_term.to_lowercase();
        self.original_name.to_lowercase().contains(&needle)
            || self.public_id.to_lowercase().contains(&needle)
    }

    pub fn dimensions_label(&self) -> String {
        match (self.width, self.height) {
            (Some(w), Some(h)) => format!("{} × {}", w, h),
            _ => "Unknown".to_string(),
        }
    }

    pub fn format_label(&self) -> String {
        self.format
            .as_deref()
            .map(str::to_uppercase)
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

impl From<ImageDescriptor> for StoredImage {
    fn from(descriptor: ImageDescriptor) -> Self {
        let original_name = descriptor
            .original_filename
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| name_from_public_id(&descriptor.public_id));

        Self {
            public_id: descriptor.public_id,
            url: descriptor.secure_url,
            original_name,
            uploaded_at: descriptor.created_at,
            width: descriptor.width,
            height: descriptor.height,
            format: descriptor.format,
            bytes: descriptor.bytes,
        }
    }
}

/// Last path segment of a store identifier, e.g. `gallery/cat` -> `cat`.
pub fn name_from_public_id(public_id: &str) -> String {
    public_id
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(public_id)
        .to_string()
}

/// Keeps the entries matching `search_term`; an empty term keeps everything.
pub fn filter_images<'a>(images: &'a [StoredImage], search_term: &str) -> Vec<&'a StoredImage> {
    images.iter().filter(|image| image.matches(search_term)).collect()
}

// ───── Input & Validation ───────────────────────────────────────────

#[derive(Debug, MultipartForm)]
pub struct ImageUpload {
    #[multipart(rename = "file")]
    pub file: Option<MpBytes>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ImageListQuery {
    #[validate(length(min = 1, max = 255), custom(function = "validate_folder"))]
    pub folder: Option<String>,
}

impl ImageListQuery {
    /// A present-but-blank `folder` means the default folder.
    pub fn normalized(self) -> Self {
        let folder = self
            .folder
            .map(|folder| folder.trim().to_string())
            .filter(|folder| !folder.is_empty());
        ImageListQuery { folder }
    }
}

fn validate_folder(folder: &str) -> Result<(), ValidationError> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '/');
    if !folder.chars().all(allowed) || folder.starts_with('/') || folder.contains("//") {
        let mut err = ValidationError::new("invalid_folder");
        err.message = Some("Folder may only contain letters, digits, '_', '-' and '/'".into());
        return Err(err);
    }
    Ok(())
}
