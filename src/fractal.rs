use log::debug;
use rayon::prelude::{IndexedParallelIterator, ParallelIterator};

use crate::buffer::PixelBuffer;
use crate::color::escape_color;
use crate::config::RenderConfig;
use crate::encoder::ComplexNumber;
use crate::math::C;

pub const DEFAULT_MAX_ITERATIONS: u32 = 150;
pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Escape radius 2, compared squared.
const ESCAPE_SQ: f64 = 4.0;

/// Iterates `z <- z^2 + c` from `z0` and returns the iteration budget left
/// when `|z| >= 2` first holds. Returns 0 if the point never escaped.
pub fn julia_escapes(z0: C, c: C, max_iter: u32) -> u32 {
    let mut z = z0;
    let mut i = max_iter;
    while z.abs_sq() < ESCAPE_SQ && i > 0 {
        z = z.square().add(c);
        i -= 1;
    }
    i
}

/// Pixel to plane coordinate. The real axis is stretched by 1.5.
pub fn pixel_to_plane(x: u32, y: u32, width: u32, height: u32) -> C {
    let (w, h) = (width as f64, height as f64);
    C::new(
        1.5 * (x as f64 - w / 2.0) / (0.5 * w),
        (y as f64 - h / 2.0) / (0.5 * h),
    )
}

/// Renders the Julia set for `param` into a fully opaque buffer.
///
/// Every pixel depends only on its coordinates, so rows are filled in
/// parallel.
pub fn render(param: ComplexNumber, width: u32, height: u32, max_iterations: u32) -> PixelBuffer {
    debug!("rendering {}x{} julia set for c = {} ({} iterations)", width, height, param, max_iterations);

    let c = param.to_c();
    let mut buffer = PixelBuffer::allocate(width, height);

    buffer
        .par_rows_mut()
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let z0 = pixel_to_plane(x as u32, y as u32, width, height);
                let remaining = julia_escapes(z0, c, max_iterations);
                px.copy_from_slice(&escape_color(remaining, max_iterations));
            }
        });

    buffer
}

pub fn render_with(param: ComplexNumber, config: &RenderConfig) -> PixelBuffer {
    render(param, config.width, config.height, config.max_iterations)
}
