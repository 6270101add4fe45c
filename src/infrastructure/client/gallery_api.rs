use async_trait::async_trait;
use reqwest::{multipart, Client, Response};
use serde::Deserialize;

use crate::{
    entities::image::{ImageDescriptor, ImageListResponse},
    errors::ClientError,
    use_cases::gallery::{GalleryApi, SelectedFile},
};

/// `GalleryApi` over HTTP against a running gallery server.
#[derive(Debug, Clone)]
pub struct HttpGalleryApi {
    client: Client,
    base_url: String,
}

impl HttpGalleryApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        HttpGalleryApi {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|_| status.to_string());

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl GalleryApi for HttpGalleryApi {
    async fn fetch_images(&self) -> Result<ImageListResponse, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/images", self.base_url))
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    async fn upload_image(&self, file: &SelectedFile) -> Result<ImageDescriptor, ClientError> {
        let mut part = multipart::Part::bytes(file.data.clone()).file_name(file.name.clone());
        if !file.mime_type.is_empty() {
            part = part.mime_str(&file.mime_type)?;
        }
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/api/upload", self.base_url))
            .multipart(form)
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }
}
