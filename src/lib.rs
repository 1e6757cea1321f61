pub mod math;
pub mod error;
pub mod encoder;
pub mod color;
pub mod buffer;
pub mod fractal;
pub mod stego;
pub mod image;
pub mod config;
pub mod session;
pub mod visualizer;

pub use math::{C, map_range};
pub use error::{CipherError, Result};
pub use encoder::{ComplexNumber, DEFAULT_PARAMETER, encode_text};
pub use color::{Rgba, hsl_to_rgb};
pub use buffer::PixelBuffer;
pub use fractal::{
    DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_WIDTH, julia_escapes, pixel_to_plane,
    render, render_with
};
pub use stego::{capacity, embed, embed_in_place, extract};
pub use crate::image::{
    decode_image, decode_image_async, encode_png, export_png, export_text, import_image,
    import_text, import_text_async
};
pub use config::RenderConfig;
pub use session::Session;
pub use visualizer::show;
