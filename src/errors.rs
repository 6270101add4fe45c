use actix_multipart::MultipartError;
use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;

/// Errors surfaced by the HTTP endpoints. The display text is the whole
/// client-facing message; upstream details are logged, never attached.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum GalleryError {
    #[display("No file provided")]
    MissingFile,

    #[display("File too large")]
    PayloadTooLarge,

    #[display("Invalid folder")]
    InvalidFolder,

    #[display("Invalid query: {_0}")]
    InvalidQuery(String),

    #[display("Upload failed")]
    UploadFailed,

    #[display("Failed to fetch images")]
    FetchFailed,
}

impl ResponseError for GalleryError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(serde_json::json!({"error": self.to_string()}))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            GalleryError::MissingFile => StatusCode::BAD_REQUEST,
            GalleryError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            GalleryError::InvalidFolder => StatusCode::BAD_REQUEST,
            GalleryError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            GalleryError::UploadFailed => StatusCode::INTERNAL_SERVER_ERROR,
            GalleryError::FetchFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MultipartError> for GalleryError {
    fn from(err: MultipartError) -> Self {
        match err {
            MultipartError::Payload(_) => GalleryError::PayloadTooLarge,
            _ => GalleryError::MissingFile,
        }
    }
}

impl From<validator::ValidationErrors> for GalleryError {
    fn from(_: validator::ValidationErrors) -> Self {
        GalleryError::InvalidFolder
    }
}

/// Failures talking to the media store.
#[derive(Debug, Display)]
pub enum StoreError {
    #[display("Media store is not configured")]
    NotConfigured,

    #[display("Invalid media store connection string: {_0}")]
    InvalidConnectionString(String),

    #[display("Media store request failed: {_0}")]
    Request(String),

    #[display("Media store returned {status}: {message}")]
    Api { status: u16, message: String },

    #[display("Unexpected media store response: {_0}")]
    Decode(String),
}

impl std::error::Error for StoreError {}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::Decode(err.to_string())
        } else {
            StoreError::Request(err.to_string())
        }
    }
}

impl From<url::ParseError> for StoreError {
    fn from(err: url::ParseError) -> Self {
        StoreError::InvalidConnectionString(err.to_string())
    }
}

/// Failures seen by the gallery page when calling the two endpoints.
#[derive(Debug, Display)]
pub enum ClientError {
    #[display("Request failed: {_0}")]
    Request(String),

    #[display("Server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[display("Invalid response body: {_0}")]
    Decode(String),
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Request(err.to_string())
        }
    }
}
