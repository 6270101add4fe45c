pub mod gallery_api;
