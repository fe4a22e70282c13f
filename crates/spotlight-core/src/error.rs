use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpotlightError {
    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, SpotlightError>;
