use actix_web::web;

use crate::{handlers::{gallery::gallery_page, system::health_check}, settings::AppConfig};

mod images;
mod extractor_errors;

pub fn configure_routes(config: &AppConfig) -> impl Fn(&mut web::ServiceConfig) + Clone + use<> {
    let max_upload_bytes = config.max_upload_bytes;

    move |cfg: &mut web::ServiceConfig| {
        cfg.service(web::resource("/").route(web::get().to(gallery_page)));
        cfg.service(health_check);

        cfg.service(
            web::scope("/api")
                .configure(images::config_routes)
        );

        cfg.configure(|cfg| extractor_errors::config_routes(cfg, max_upload_bytes));
    }
}
