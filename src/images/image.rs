use crate::ImageBufferError;

#[derive(Debug)]
enum BufferContainer<'a> {
    Borrowed(&'a mut [u8]),
    Owned(Vec<u8>),
}

/// Simple container of image data: interleaved 8-bit samples plus
/// geometry (width, height and count of channels).
///
/// The sample of channel `c` of pixel `(x, y)` lives at the flat
/// offset `(y * width + x) * channels + c` of the buffer.
#[derive(Debug)]
pub struct Image<'a> {
    width: u32,
    height: u32,
    channels: u32,
    buffer: BufferContainer<'a>,
}

impl Image<'static> {
    /// Create an empty (zero-filled) image with given dimensions.
    pub fn new(width: u32, height: u32, channels: u32) -> Result<Self, ImageBufferError> {
        check_dimensions(width, height, channels)?;
        let buffer = vec![0; buffer_size(width, height, channels)];
        Ok(Self {
            width,
            height,
            channels,
            buffer: BufferContainer::Owned(buffer),
        })
    }

    /// Create an image from vector with pixels data.
    pub fn from_vec_u8(
        width: u32,
        height: u32,
        channels: u32,
        buffer: Vec<u8>,
    ) -> Result<Self, ImageBufferError> {
        check_dimensions(width, height, channels)?;
        if buffer.len() < buffer_size(width, height, channels) {
            return Err(ImageBufferError::InvalidBufferSize);
        }
        Ok(Self {
            width,
            height,
            channels,
            buffer: BufferContainer::Owned(buffer),
        })
    }
}

impl<'a> Image<'a> {
    /// Create an image from slice with pixels data.
    pub fn from_slice_u8(
        width: u32,
        height: u32,
        channels: u32,
        buffer: &'a mut [u8],
    ) -> Result<Self, ImageBufferError> {
        check_dimensions(width, height, channels)?;
        if buffer.len() < buffer_size(width, height, channels) {
            return Err(ImageBufferError::InvalidBufferSize);
        }
        Ok(Self {
            width,
            height,
            channels,
            buffer: BufferContainer::Borrowed(buffer),
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Count of channels (bytes per pixel).
    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Count of bytes per one row of the image.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    /// Buffer with image pixels data.
    #[inline]
    pub fn buffer(&self) -> &[u8] {
        match &self.buffer {
            BufferContainer::Borrowed(p) => p,
            BufferContainer::Owned(v) => v,
        }
    }

    /// Mutable buffer with image pixels data.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        match &mut self.buffer {
            BufferContainer::Borrowed(p) => p,
            BufferContainer::Owned(ref mut v) => v.as_mut_slice(),
        }
    }

    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        match self.buffer {
            BufferContainer::Borrowed(p) => p.into(),
            BufferContainer::Owned(v) => v,
        }
    }

    /// Creates a copy of the image.
    pub fn copy(&self) -> Image<'static> {
        Image {
            width: self.width,
            height: self.height,
            channels: self.channels,
            buffer: BufferContainer::Owned(self.buffer().into()),
        }
    }

    /// Value of the given channel of pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates or the channel are out of bounds of
    /// the image.
    #[inline]
    pub fn sample(&self, x: u32, y: u32, channel: u32) -> u8 {
        self.buffer()[self.sample_index(x, y, channel)]
    }

    /// Flat offset of the given channel of pixel `(x, y)` inside of
    /// the buffer.
    #[inline]
    pub fn sample_index(&self, x: u32, y: u32, channel: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels as usize
            + channel as usize
    }
}

fn check_dimensions(width: u32, height: u32, channels: u32) -> Result<(), ImageBufferError> {
    if width == 0 || height == 0 || channels == 0 {
        return Err(ImageBufferError::ZeroDimensions);
    }
    Ok(())
}

fn buffer_size(width: u32, height: u32, channels: u32) -> usize {
    width as usize * height as usize * channels as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_offsets_are_row_major_and_interleaved() {
        let buffer: Vec<u8> = (0..24).collect();
        let image = Image::from_vec_u8(4, 2, 3, buffer).unwrap();
        assert_eq!(image.sample(0, 0, 0), 0);
        assert_eq!(image.sample(0, 0, 2), 2);
        assert_eq!(image.sample(1, 0, 0), 3);
        assert_eq!(image.sample(3, 0, 2), 11);
        assert_eq!(image.sample(0, 1, 0), 12);
        assert_eq!(image.sample(3, 1, 2), 23);
    }

    #[test]
    fn invalid_buffer_size() {
        let result = Image::from_vec_u8(4, 4, 3, vec![0; 47]);
        assert_eq!(result.unwrap_err(), ImageBufferError::InvalidBufferSize);
    }

    #[test]
    fn zero_dimensions() {
        for (w, h, c) in [(0, 4, 3), (4, 0, 3), (4, 4, 0)] {
            let result = Image::new(w, h, c);
            assert_eq!(result.unwrap_err(), ImageBufferError::ZeroDimensions);
        }
    }
}
