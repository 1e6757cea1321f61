use minifb::{Key, Window, WindowOptions};

use crate::buffer::PixelBuffer;

/// Packs RGBA bytes into minifb's 0RGB words. Alpha is not shown.
pub fn to_framebuffer(buffer: &PixelBuffer) -> Vec<u32> {
    buffer
        .as_bytes()
        .chunks_exact(4)
        .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
        .collect()
}

/// Shows the buffer until the window is closed or Escape is pressed.
pub fn show(buffer: &PixelBuffer, title: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = (buffer.width() as usize, buffer.height() as usize);
    let frame = to_framebuffer(buffer);

    let mut window = Window::new(title, width, height, WindowOptions::default())?;
    window.set_target_fps(30);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window.update_with_buffer(&frame, width, height)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_rgb_and_ignores_alpha() {
        let mut buf = PixelBuffer::allocate(2, 1);
        buf.set(0, 0, [0x12, 0x34, 0x56, 0x00]);
        buf.set(1, 0, [0xff, 0x00, 0x80, 0xff]);
        assert_eq!(to_framebuffer(&buf), vec![0x123456, 0xff0080]);
    }
}
