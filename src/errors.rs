use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageBufferError {
    #[error("Size of buffer is smaller than required")]
    InvalidBufferSize,
    #[error("Width, height and count of channels of image must be greater than zero")]
    ZeroDimensions,
}

#[derive(Error, Debug, Clone, Copy)]
#[error(
    "The dimensions of the source image are not equal to the dimensions of the destination image"
)]
pub struct DifferentDimensionsError;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error(transparent)]
    DifferentDimensions(#[from] DifferentDimensionsError),
    #[error("Count of worker threads must be greater than zero")]
    InvalidThreadCount,
    #[error("Failed to create pool of worker threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
