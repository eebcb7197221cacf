//! Content and image source adapters.

mod http;
mod image;
mod template;

pub use http::{ContentApiConfig, HttpContentSource};
pub use image::{HttpImageSource, ImageApiConfig};
pub use template::TemplateContentSource;
