use actix_multipart::{form::MultipartForm, MultipartError};
use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use validator::Validate;

use crate::{
    entities::image::{ImageListQuery, ImageUpload},
    errors::GalleryError,
    use_cases::images::IncomingFile,
    AppState,
};

#[instrument(skip(state, form))]
pub async fn upload_image(
    state: web::Data<AppState>,
    form: Result<MultipartForm<ImageUpload>, actix_web::Error>,
) -> Result<impl Responder, GalleryError> {
    let upload = form.map_err(rejected_form)?.into_inner();

    let file = match upload.file {
        Some(file) if !file.data.is_empty() => file,
        _ => return Err(GalleryError::MissingFile),
    };

    let incoming = IncomingFile {
        data: file.data.to_vec(),
        file_name: file.file_name,
        content_type: file.content_type.map(|mime| mime.to_string()),
    };

    let descriptor = state.image_handler.upload_image(incoming).await?;

    Ok(HttpResponse::Ok().json(descriptor))
}

/// Content-type rejections happen before the multipart config's handler runs,
/// so anything that is not an oversized body collapses to `MissingFile`.
fn rejected_form(err: actix_web::Error) -> GalleryError {
    tracing::warn!("Rejected upload body: {}", err);

    let too_large = matches!(err.as_error::<GalleryError>(), Some(GalleryError::PayloadTooLarge))
        || matches!(err.as_error::<MultipartError>(), Some(MultipartError::Payload(_)));

    if too_large {
        GalleryError::PayloadTooLarge
    } else {
        GalleryError::MissingFile
    }
}

#[instrument(skip(state, query))]
pub async fn list_images(
    state: web::Data<AppState>,
    query: web::Query<ImageListQuery>,
) -> Result<impl Responder, GalleryError> {
    let query = query.into_inner().normalized();
    query.validate()?;

    let listing = state
        .image_handler
        .list_images(query.folder.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(listing))
}
