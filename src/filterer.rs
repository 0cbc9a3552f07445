use rayon::ThreadPoolBuilder;

use crate::images::Image;
use crate::kernels::{Kernel, KernelType};
use crate::partition::{split_rows, RowBand};
use crate::sampling::clamped_window;
use crate::{DifferentDimensionsError, FilterError};

/// Options of image filtering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterOptions {
    /// Convolution kernel applied to the image.
    pub kernel_type: KernelType,
    /// Count of worker threads used to convolve the image.
    ///
    /// The result of filtering doesn't depend on this value, only the
    /// speed does. Counts greater than the height of the image are
    /// clamped to the height.
    pub thread_count: u32,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            kernel_type: Default::default(),
            thread_count: 1,
        }
    }
}

impl FilterOptions {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn kernel_type(mut self, kernel_type: KernelType) -> Self {
        self.kernel_type = kernel_type;
        self
    }

    pub fn thread_count(mut self, thread_count: u32) -> Self {
        self.thread_count = thread_count;
        self
    }
}

/// Methods of this structure used to convolve images.
#[derive(Default, Debug, Clone, Copy)]
pub struct Filterer {}

impl Filterer {
    pub fn new() -> Self {
        Default::default()
    }

    /// Applies the kernel to the source image and saves the result
    /// into the pixel buffer of the destination image. The images must
    /// have equal dimensions and counts of channels.
    ///
    /// Rows of the image are split into contiguous bands, one per
    /// worker thread. Every worker reads the shared source image and
    /// writes its own disjoint part of the destination buffer, so the
    /// workers don't synchronize with each other. Worker threads are
    /// created for the duration of this call. The method returns only
    /// after all of them have finished, with the destination image
    /// fully populated.
    pub fn filter(
        &self,
        src_image: &Image,
        dst_image: &mut Image,
        options: &FilterOptions,
    ) -> Result<(), FilterError> {
        if src_image.width() != dst_image.width()
            || src_image.height() != dst_image.height()
            || src_image.channels() != dst_image.channels()
        {
            return Err(DifferentDimensionsError.into());
        }
        if options.thread_count == 0 {
            return Err(FilterError::InvalidThreadCount);
        }
        let kernel = options.kernel_type.kernel();
        let height = src_image.height();
        // More bands than rows would leave some workers without rows.
        let bands = split_rows(height, options.thread_count.min(height));

        // Disjoint mutable slice of the destination buffer for every band.
        let row_stride = src_image.row_stride();
        let mut band_buffers = Vec::with_capacity(bands.len());
        let mut rest = dst_image.buffer_mut();
        for band in &bands {
            let (band_buffer, tail) = rest.split_at_mut(band.len() as usize * row_stride);
            band_buffers.push(band_buffer);
            rest = tail;
        }

        let pool = ThreadPoolBuilder::new().num_threads(bands.len()).build()?;
        pool.scope(|scope| {
            for (band, band_buffer) in bands.iter().copied().zip(band_buffers) {
                scope.spawn(move |_| convolve_band(src_image, band_buffer, band, &kernel));
            }
        });
        Ok(())
    }
}

/// Convolves all rows of one band of the source image into the
/// destination buffer of the band.
fn convolve_band(src_image: &Image, dst_buffer: &mut [u8], band: RowBand, kernel: &Kernel) {
    let width = src_image.width();
    let channels = src_image.channels();
    // The loops visit samples in buffer order, so the destination
    // offset grows by one on every step.
    let mut dst_offset = 0;
    for y in band.start..band.end {
        for x in 0..width {
            for channel in 0..channels {
                dst_buffer[dst_offset] = convolve_channel(src_image, x, y, channel, kernel);
                dst_offset += 1;
            }
        }
    }
}

/// Computes the new value of one channel of one pixel as the weighted
/// sum of the channel values in the 3x3 neighborhood of the pixel.
/// Neighbors outside of the image are clamped to the nearest border
/// pixel.
///
/// The sum is rounded to the nearest integer and saturated into the
/// `0..=255` range. Kernels with negative weights (edge detection,
/// sharpening, emboss) can produce sums far outside of this range and
/// saturation turns such samples black or white instead of wrapping
/// them around.
pub(crate) fn convolve_channel(
    src_image: &Image,
    x: u32,
    y: u32,
    channel: u32,
    kernel: &Kernel,
) -> u8 {
    let window = clamped_window(x, y, src_image.width(), src_image.height());
    let mut sum = 0f32;
    for (k_row, &src_y) in window.ys.iter().enumerate() {
        for (k_col, &src_x) in window.xs.iter().enumerate() {
            sum += kernel.weight(k_row, k_col) * src_image.sample(src_x, src_y, channel) as f32;
        }
    }
    // Saturating cast.
    sum.round() as u8
}
