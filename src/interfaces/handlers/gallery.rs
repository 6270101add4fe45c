use actix_web::{http::header::ContentType, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    entities::image::{filter_images, StoredImage},
    use_cases::gallery::{ViewMode, LOAD_FAILED_ALERT},
    views::gallery_page::{render_gallery_page, GalleryView},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct GalleryPageQuery {
    #[serde(default)]
    pub q: String,
    pub view: Option<String>,
}

/// Server-rendered gallery of the default folder.
#[instrument(skip(state, query))]
pub async fn gallery_page(
    state: web::Data<AppState>,
    query: web::Query<GalleryPageQuery>,
) -> impl Responder {
    let query = query.into_inner();

    let (images, notice): (Vec<StoredImage>, Option<&str>) =
        match state.image_handler.list_images(None).await {
            Ok(listing) => (listing.images.into_iter().map(StoredImage::from).collect(), None),
            Err(_) => (Vec::new(), Some(LOAD_FAILED_ALERT)),
        };

    let html = render_gallery_page(&GalleryView {
        images: filter_images(&images, &query.q),
        total: images.len(),
        search_term: &query.q,
        view_mode: ViewMode::from_param(query.view.as_deref()),
        notice,
    });

    HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(html)
}
