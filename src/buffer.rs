//! RGBA8 pixel raster, row-major, 4 bytes per pixel.
//!
//! Every row but the last stays fully opaque; the last row's alpha bytes are
//! the payload channel.

use image::RgbaImage;
use rayon::prelude::ParallelSliceMut;

use crate::color::Rgba;
use crate::error::{CipherError, Result};

const CHANNELS: usize = 4;
const ALPHA: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Zeroed buffer. Panics if either dimension is zero.
    pub fn allocate(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "pixel buffer dimensions must be non-zero");
        PixelBuffer {
            width,
            height,
            data: vec![0; width as usize * height as usize * CHANNELS],
        }
    }

    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CipherError::EmptyBuffer);
        }
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(CipherError::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(PixelBuffer { width, height, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    pub fn get(&self, x: u32, y: u32) -> Rgba {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    pub fn set(&mut self, x: u32, y: u32, rgba: Rgba) {
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&rgba);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Mutable rows, `width * 4` bytes each, as a parallel iterator.
    pub fn par_rows_mut(&mut self) -> rayon::slice::ChunksExactMut<'_, u8> {
        let stride = self.width as usize * CHANNELS;
        self.data.par_chunks_exact_mut(stride)
    }

    fn last_row_start(&self) -> usize {
        (self.height as usize - 1) * self.width as usize * CHANNELS
    }

    /// Alpha bytes of the last row, left to right.
    pub fn last_row_alpha(&self) -> impl Iterator<Item = u8> + '_ {
        self.data[self.last_row_start()..]
            .chunks_exact(CHANNELS)
            .map(|px| px[ALPHA])
    }

    pub fn set_last_row_alpha(&mut self, x: u32, alpha: u8) {
        let y = self.height - 1;
        let i = self.offset(x, y);
        self.data[i + ALPHA] = alpha;
    }
}

impl From<PixelBuffer> for RgbaImage {
    fn from(buffer: PixelBuffer) -> Self {
        // Length is checked on construction, so this cannot fail.
        RgbaImage::from_raw(buffer.width, buffer.height, buffer.data)
            .unwrap_or_else(|| unreachable!("pixel buffer length is validated on construction"))
    }
}

impl TryFrom<RgbaImage> for PixelBuffer {
    type Error = CipherError;

    fn try_from(img: RgbaImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        PixelBuffer::from_raw(width, height, img.into_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_roundtrip() {
        let mut buf = PixelBuffer::allocate(3, 2);
        buf.set(2, 1, [1, 2, 3, 4]);
        assert_eq!(buf.get(2, 1), [1, 2, 3, 4]);
        assert_eq!(buf.get(0, 0), [0, 0, 0, 0]);
        assert_eq!(&buf.as_bytes()[20..24], &[1, 2, 3, 4]);
    }

    #[test]
    fn from_raw_rejects_wrong_length() {
        let err = PixelBuffer::from_raw(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(err, CipherError::BufferSizeMismatch { expected: 16, actual: 15, .. }));
    }

    #[test]
    fn from_raw_rejects_zero_size() {
        assert!(matches!(PixelBuffer::from_raw(0, 4, vec![]), Err(CipherError::EmptyBuffer)));
    }

    #[test]
    fn last_row_alpha_reads_bottom_row_only() {
        let mut buf = PixelBuffer::allocate(4, 3);
        buf.set_last_row_alpha(1, 9);
        buf.set(1, 0, [0, 0, 0, 200]);
        let alpha: Vec<u8> = buf.last_row_alpha().collect();
        assert_eq!(alpha, vec![0, 9, 0, 0]);
        assert_eq!(buf.get(1, 2)[3], 9);
    }

    #[test]
    fn image_conversion_keeps_bytes() {
        let mut buf = PixelBuffer::allocate(2, 2);
        buf.set(1, 1, [10, 20, 30, 40]);
        let img = RgbaImage::from(buf.clone());
        assert_eq!(img.get_pixel(1, 1).0, [10, 20, 30, 40]);
        let back = PixelBuffer::try_from(img).unwrap();
        assert_eq!(back, buf);
    }
}
