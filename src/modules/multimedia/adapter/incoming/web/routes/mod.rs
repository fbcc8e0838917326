mod serve_image;
mod upload_image;

pub use serve_image::serve_image_handler;
pub use upload_image::upload_image_handler;
