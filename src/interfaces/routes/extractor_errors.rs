use actix_multipart::form::MultipartFormConfig;
use actix_web::{error::QueryPayloadError, web};

use crate::errors::GalleryError;

/// Maps extractor failures onto the same `{ "error": ... }` bodies the handlers return.
pub fn config_routes(cfg: &mut web::ServiceConfig, max_upload_bytes: usize) {
    cfg.app_data(
        MultipartFormConfig::default()
            .total_limit(max_upload_bytes)
            .memory_limit(max_upload_bytes)
            .error_handler(|err, _req| {
                tracing::warn!("Rejected multipart upload: {}", err);
                GalleryError::from(err).into()
            }),
    );

    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        query_error(err).into()
    }));
}

fn query_error(err: QueryPayloadError) -> GalleryError {
    GalleryError::InvalidQuery(err.to_string())
}
