use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const DEFAULT_FOLDER: &str = "gallery";
/// Single page cap for folder listings, there is no pagination past it.
pub const DEFAULT_MAX_RESULTS: u32 = 500;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub const MEDIA_STORE_URL_ENV: &str = "CLOUDINARY_URL";
pub const DEFAULT_MEDIA_API_BASE: &str = "https://api.cloudinary.com";
