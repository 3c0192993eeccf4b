use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotomanError {
    #[error("no image is currently selected")]
    NoCurrentItem,

    #[error("not a supported image file: {}", .0.display())]
    UnsupportedExtension(PathBuf),

    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PhotomanError>;
