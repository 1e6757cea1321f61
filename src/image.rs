// PNG import/export for fingerprint images.
// The payload lives in exact alpha bytes, so only containers that keep 8-bit
// alpha untouched are accepted.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat};
use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::buffer::PixelBuffer;
use crate::config::RenderConfig;
use crate::encoder::encode_text;
use crate::error::{CipherError, Result};
use crate::fractal::render_with;
use crate::stego::{embed, extract};

/// Formats that drop or quantize alpha and cannot carry the payload.
/// WebP may be lossy (VP8), so it is refused as a whole.
fn is_lossy(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Jpeg | ImageFormat::Gif | ImageFormat::Avif | ImageFormat::WebP
    )
}

/// Encode a buffer as an RGBA8 PNG byte stream
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(buffer.as_bytes(), buffer.width(), buffer.height(), ExtendedColorType::Rgba8)
        .map_err(|e| CipherError::EncodeFailure(e.to_string()))?;
    Ok(out)
}

/// Decode image bytes into an RGBA8 buffer
pub fn decode_image(bytes: &[u8]) -> Result<PixelBuffer> {
    let format = image::guess_format(bytes)
        .map_err(|e| CipherError::DecodeFailure(e.to_string()))?;
    if is_lossy(format) {
        return Err(CipherError::UnsupportedFormat(format!("{:?}", format)));
    }

    let img = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| CipherError::DecodeFailure(e.to_string()))?;
    debug!("decoded {:?} image {}x{}", format, img.width(), img.height());

    PixelBuffer::try_from(img.to_rgba8())
}

/// Decode on the blocking pool; the one async step of an import
pub async fn decode_image_async(bytes: Vec<u8>) -> Result<PixelBuffer> {
    tokio::task::spawn_blocking(move || decode_image(&bytes))
        .await
        .map_err(|e| CipherError::DecodeFailure(format!("decode task failed: {}", e)))?
}

pub fn export_png<P: AsRef<Path>>(path: P, buffer: &PixelBuffer) -> Result<()> {
    let bytes = encode_png(buffer)?;
    fs::write(&path, bytes)?;
    info!("wrote {}", path.as_ref().display());
    Ok(())
}

pub fn import_image<P: AsRef<Path>>(path: P) -> Result<PixelBuffer> {
    let bytes = fs::read(path)?;
    decode_image(&bytes)
}

/// Full export: text -> parameter -> render -> embed -> PNG file
pub fn export_text<P: AsRef<Path>>(path: P, text: &str, config: &RenderConfig) -> Result<PixelBuffer> {
    config.validate()?;
    let buffer = render_with(encode_text(text), config);
    let buffer = embed(buffer, text)?;
    export_png(path, &buffer)?;
    Ok(buffer)
}

/// Full import: PNG file -> buffer -> text
pub fn import_text<P: AsRef<Path>>(path: P) -> Result<String> {
    extract(&import_image(path)?)
}

pub async fn import_text_async<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = tokio::fs::read(path).await?;
    let buffer = decode_image_async(bytes).await?;
    extract(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use crate::fractal::render;

    #[test]
    fn png_roundtrip_is_pixel_exact() {
        let buf = embed(render(encode_text("png"), 50, 20, 150), "png").unwrap();
        let bytes = encode_png(&buf).unwrap();
        assert_eq!(decode_image(&bytes).unwrap(), buf);
    }

    #[test]
    fn garbage_is_decode_failure() {
        let err = decode_image(b"definitely not an image").unwrap_err();
        assert!(matches!(err, CipherError::DecodeFailure(_)));
    }

    #[test]
    fn truncated_png_is_decode_failure() {
        let buf = render(encode_text("cut"), 30, 30, 150);
        let bytes = encode_png(&buf).unwrap();
        let err = decode_image(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, CipherError::DecodeFailure(_)));
    }

    #[test]
    fn png_bytes_carry_png_signature() {
        let buf = render(encode_text("sig"), 4, 4, 150);
        let bytes = encode_png(&buf).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn webp_is_rejected() {
        let buf = embed(render(encode_text("webp"), 16, 16, 150), "webp").unwrap();
        let img: image::RgbaImage = buf.into();
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::WebP).unwrap();
        let err = decode_image(out.get_ref()).unwrap_err();
        assert!(matches!(err, CipherError::UnsupportedFormat(_)));
    }

    #[test]
    fn jpeg_is_rejected() {
        let img = image::RgbImage::new(8, 8);
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Jpeg).unwrap();
        let err = decode_image(out.get_ref()).unwrap_err();
        assert!(matches!(err, CipherError::UnsupportedFormat(_)));
    }

    #[tokio::test]
    async fn async_decode_matches_sync() {
        let buf = render(encode_text("async"), 24, 24, 150);
        let bytes = encode_png(&buf).unwrap();
        assert_eq!(decode_image_async(bytes).await.unwrap(), buf);
    }
}
