use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes, views};
pub use infrastructure::{client, media, utils};

use media::cloudinary::CloudinaryStore;
use repositories::media_store::MediaStore;
use use_cases::images::ImageHandler;

pub struct AppState {
    pub image_handler: AppImageHandler,
}

pub type AppImageHandler = ImageHandler<Arc<dyn MediaStore>>;

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Result<Self, errors::StoreError> {
        let store = CloudinaryStore::from_connection_string(config.media_store_url.as_deref())?;
        Ok(Self::with_store(config, Arc::new(store)))
    }

    /// State around any store implementation.
    pub fn with_store(config: &settings::AppConfig, store: Arc<dyn MediaStore>) -> Self {
        let image_handler = ImageHandler::new(store, config.gallery_folder.clone(), config.max_results);

        AppState { image_handler }
    }
}
