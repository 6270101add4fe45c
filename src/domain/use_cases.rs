pub mod gallery;
pub mod images;
