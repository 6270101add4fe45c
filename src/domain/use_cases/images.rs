use tracing::instrument;

use crate::{
    entities::image::{ImageDescriptor, ImageListResponse},
    errors::GalleryError,
    repositories::media_store::{MediaStore, ResourceType, SearchRequest, UploadRequest},
};

/// File received by the upload endpoint, already read into memory.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub data: Vec<u8>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

pub struct ImageHandler<S>
where
    S: MediaStore,
{
    pub store: S,
    pub folder: String,
    pub max_results: u32,
}

impl<S> ImageHandler<S>
where
    S: MediaStore,
{
    pub fn new(store: S, folder: impl Into<String>, max_results: u32) -> Self {
        ImageHandler {
            store,
            folder: folder.into(),
            max_results,
        }
    }

    /// Forwards one file to the store under the gallery folder.
    #[instrument(skip(self, file), fields(size = file.data.len(), file_name = ?file.file_name))]
    pub async fn upload_image(&self, file: IncomingFile) -> Result<ImageDescriptor, GalleryError> {
        if file.data.is_empty() {
            return Err(GalleryError::MissingFile);
        }

        let content_type = file.content_type.or_else(|| sniff_content_type(&file.data));

        let request = UploadRequest {
            data: file.data,
            file_name: file.file_name,
            content_type,
            folder: self.folder.clone(),
            resource_type: ResourceType::Auto,
        };

        let descriptor = self.store.upload(request).await.map_err(|e| {
            tracing::error!("Upload to media store failed: {}", e);
            GalleryError::UploadFailed
        })?;

        tracing::info!(public_id = %descriptor.public_id, "Stored new image");
        Ok(descriptor.for_upload())
    }

    /// Lists one capped page of `folder` (default: the gallery folder), newest first.
    #[instrument(skip(self))]
    pub async fn list_images(&self, folder: Option<&str>) -> Result<ImageListResponse, GalleryError> {
        let folder = folder.unwrap_or(&self.folder);
        let request = SearchRequest::folder(folder, self.max_results);

        let page = self.store.search(request).await.map_err(|e| {
            tracing::error!("Listing media store folder '{}' failed: {}", folder, e);
            GalleryError::FetchFailed
        })?;

        Ok(ImageListResponse {
            images: page.resources.into_iter().map(ImageDescriptor::for_listing).collect(),
            total_count: page.total_count,
        })
    }

    pub fn store_configured(&self) -> bool {
        self.store.is_configured()
    }
}

fn sniff_content_type(data: &[u8]) -> Option<String> {
    infer::get(data).map(|kind| kind.mime_type().to_string())
}
