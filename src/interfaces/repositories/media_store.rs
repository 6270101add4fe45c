use std::sync::Arc;

use async_trait::async_trait;

use crate::{entities::image::ImageDescriptor, errors::StoreError};

/// Resource type hint passed to the store on upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceType {
    /// Let the store decide between image, video and raw.
    #[default]
    Auto,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Auto => "auto",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    pub data: Vec<u8>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub folder: String,
    pub resource_type: ResourceType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub expression: String,
    pub max_results: u32,
}

impl SearchRequest {
    /// Everything stored under `<folder>/`.
    pub fn folder(folder: &str, max_results: u32) -> Self {
        SearchRequest {
            expression: format!("folder:{}/*", folder.trim_end_matches('/')),
            max_results,
        }
    }
}

/// One page of search results, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub resources: Vec<ImageDescriptor>,
    pub total_count: u64,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Stores one object and returns its descriptor.
    async fn upload(&self, request: UploadRequest) -> Result<ImageDescriptor, StoreError>;

    /// Searches stored objects, sorted by creation time descending.
    async fn search(&self, request: SearchRequest) -> Result<SearchPage, StoreError>;

    /// Whether credentials are present at all.
    fn is_configured(&self) -> bool;
}

#[async_trait]
impl<T> MediaStore for Arc<T>
where
    T: MediaStore + ?Sized,
{
    async fn upload(&self, request: UploadRequest) -> Result<ImageDescriptor, StoreError> {
        (**self).upload(request).await
    }

    async fn search(&self, request: SearchRequest) -> Result<SearchPage, StoreError> {
        (**self).search(request).await
    }

    fn is_configured(&self) -> bool {
        (**self).is_configured()
    }
}
