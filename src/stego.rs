//! Text payload in the alpha channel of the last pixel row.
//!
//! Layout: one char code per pixel starting at column 0, then a `0`
//! terminator. Untouched columns keep alpha 255, which reads as "nothing
//! here". Codes 0 and 255 therefore cannot be carried: 255 (and any code
//! above it, stored clamped) is dropped on extraction, and 0 ends the text.

use log::{debug, warn};

use crate::buffer::PixelBuffer;
use crate::error::{CipherError, Result};

pub const TERMINATOR: u8 = 0;
pub const EMPTY: u8 = 255;

/// Longest text the buffer can carry; one column is kept for the terminator.
pub fn capacity(buffer: &PixelBuffer) -> usize {
    buffer.width() as usize - 1
}

/// Embeds `text` and hands the buffer back. Nothing is written on error.
pub fn embed(mut buffer: PixelBuffer, text: &str) -> Result<PixelBuffer> {
    embed_in_place(&mut buffer, text)?;
    Ok(buffer)
}

pub fn embed_in_place(buffer: &mut PixelBuffer, text: &str) -> Result<()> {
    let len = text.chars().count();
    if len + 1 > buffer.width() as usize {
        return Err(CipherError::TextTooLong { len, capacity: capacity(buffer) });
    }

    for x in 0..buffer.width() {
        buffer.set_last_row_alpha(x, EMPTY);
    }

    let mut dropped = 0;
    for (x, ch) in text.chars().enumerate() {
        let code = (ch as u32).min(EMPTY as u32) as u8;
        if code == EMPTY || code == TERMINATOR {
            dropped += 1;
        }
        buffer.set_last_row_alpha(x as u32, code);
    }
    buffer.set_last_row_alpha(len as u32, TERMINATOR);

    if dropped > 0 {
        warn!("{} char(s) use a reserved code and will not survive extraction", dropped);
    }
    debug!("embedded {} chars into {}x{} buffer", len, buffer.width(), buffer.height());
    Ok(())
}

/// Reads the payload back. A row with nothing but 255s yields `NoPayload`.
pub fn extract(buffer: &PixelBuffer) -> Result<String> {
    let text: String = buffer
        .last_row_alpha()
        .take_while(|&a| a != TERMINATOR)
        .filter(|&a| a < EMPTY)
        .map(char::from)
        .collect();

    if text.is_empty() {
        return Err(CipherError::NoPayload);
    }
    debug!("extracted {} chars", text.chars().count());
    Ok(text)
}
