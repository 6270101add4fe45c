pub mod client;
pub mod media;
pub mod utils;
