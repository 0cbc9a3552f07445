//! Containers of image data.

pub use self::image::Image;

mod image;
