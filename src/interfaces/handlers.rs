pub mod gallery;
pub mod images;
pub mod system;
