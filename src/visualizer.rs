use anyhow::Context;
use image::Rgb32FImage;
use minifb::{Key, Window, WindowOptions};

use crate::generator::Generation;

/// Height of the black band above the image that carries the title.
const TITLE_BAND: usize = 40;
const GLYPH_SCALE: usize = 2;
const GLYPH_ADVANCE: usize = 4 * GLYPH_SCALE;
const TEXT_COLOR: u32 = 0xFFFFFF;

pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub buffer: Vec<u32>,
}

// 3x5 pixel font, uppercase folded to lowercase
fn glyph(ch: char) -> [u8; 5] {
    match ch.to_ascii_lowercase() {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'a' => [0b111, 0b101, 0b111, 0b101, 0b101],
        'b' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'c' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'd' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'e' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'f' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'g' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'h' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'i' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'j' => [0b001, 0b001, 0b001, 0b101, 0b111],
        'k' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'l' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'm' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'n' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'o' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'p' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'r' => [0b110, 0b101, 0b110, 0b101, 0b101],
        's' => [0b111, 0b100, 0b111, 0b001, 0b111],
        't' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'u' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'v' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'w' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'x' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'y' => [0b101, 0b101, 0b111, 0b010, 0b010],
        'z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '_' => [0b000, 0b000, 0b000, 0b000, 0b111],
        '"' => [0b101, 0b101, 0b000, 0b000, 0b000],
        '\'' => [0b010, 0b010, 0b000, 0b000, 0b000],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '?' => [0b111, 0b001, 0b011, 0b000, 0b010],
        '(' => [0b001, 0b010, 0b010, 0b010, 0b001],
        ')' => [0b100, 0b010, 0b010, 0b010, 0b100],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        _ => [0b000; 5],
    }
}

fn draw_char(frame: &mut Frame, x: usize, y: usize, ch: char, color: u32) {
    for (dy, row) in glyph(ch).iter().enumerate() {
        for dx in 0..3 {
            if row & (1 << (2 - dx)) == 0 {
                continue;
            }
            for sy in 0..GLYPH_SCALE {
                for sx in 0..GLYPH_SCALE {
                    let px = x + dx * GLYPH_SCALE + sx;
                    let py = y + dy * GLYPH_SCALE + sy;
                    if px < frame.width && py < frame.height {
                        frame.buffer[py * frame.width + px] = color;
                    }
                }
            }
        }
    }
}

fn draw_text(frame: &mut Frame, x: usize, y: usize, text: &str, color: u32) {
    let mut offset_x = x;
    for ch in text.chars() {
        if offset_x + GLYPH_ADVANCE > frame.width { break; }
        draw_char(frame, offset_x, y, ch, color);
        offset_x += GLYPH_ADVANCE;
    }
}

pub fn window_title(input: &str) -> String {
    format!("Cursed Energy Fractal: \"{}\"", input)
}

fn channel_byte(v: f32) -> u32 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u32
}

/// Packs the image as 0RGB words, the layout minifb expects.
pub fn to_argb_buffer(image: &Rgb32FImage) -> Vec<u32> {
    image
        .pixels()
        .map(|p| (channel_byte(p[0]) << 16) | (channel_byte(p[1]) << 8) | channel_byte(p[2]))
        .collect()
}

/// Black frame with the centred title in a band above the image.
pub fn compose_frame(image: &Rgb32FImage, title: &str) -> Frame {
    let width = image.width() as usize;
    let height = image.height() as usize + TITLE_BAND;
    let mut frame = Frame { width, height, buffer: vec![0; width * height] };

    let text_width = title.chars().count() * GLYPH_ADVANCE;
    let text_x = width.saturating_sub(text_width) / 2;
    let text_y = (TITLE_BAND - 5 * GLYPH_SCALE) / 2;
    draw_text(&mut frame, text_x, text_y, title, TEXT_COLOR);

    let pixels = to_argb_buffer(image);
    frame.buffer[TITLE_BAND * width..].copy_from_slice(&pixels);
    frame
}

/// Opens a window showing the generated image and blocks until it is closed
/// or Escape is pressed.
pub fn show(generation: &Generation) -> anyhow::Result<()> {
    let title = window_title(&generation.input);
    let frame = compose_frame(&generation.image, &title);

    let mut window = Window::new(&title, frame.width, frame.height, WindowOptions::default())
        .context("failed to open fractal window")?;
    window.set_target_fps(30);
    log::info!("showing {}x{} frame", frame.width, frame.height);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window
            .update_with_buffer(&frame.buffer, frame.width, frame.height)
            .context("failed to present frame")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn title_embeds_input_verbatim() {
        assert_eq!(window_title("Gojo Satoru"), "Cursed Energy Fractal: \"Gojo Satoru\"");
        assert_eq!(window_title(""), "Cursed Energy Fractal: \"\"");
    }

    #[test]
    fn argb_packing() {
        let img = Rgb32FImage::from_fn(2, 1, |x, _| {
            if x == 0 { Rgb([1.0, 0.0, 0.5]) } else { Rgb([0.0, 1.0, 0.0]) }
        });
        assert_eq!(to_argb_buffer(&img), vec![0xFF0080, 0x00FF00]);
    }

    #[test]
    fn frame_has_black_band_with_title_and_image_below() {
        let img = Rgb32FImage::from_pixel(200, 10, Rgb([0.0, 0.0, 1.0]));
        let frame = compose_frame(&img, "toji");
        assert_eq!(frame.width, 200);
        assert_eq!(frame.height, 10 + TITLE_BAND);

        let band = &frame.buffer[..TITLE_BAND * frame.width];
        assert!(band.contains(&TEXT_COLOR));
        assert!(band.iter().all(|&p| p == 0 || p == TEXT_COLOR));
        assert!(frame.buffer[TITLE_BAND * frame.width..].iter().all(|&p| p == 0x0000FF));
    }

    #[test]
    fn long_titles_are_cut_at_the_edge() {
        let img = Rgb32FImage::new(16, 1);
        let frame = compose_frame(&img, "a very long title that cannot fit");
        assert_eq!(frame.buffer.len(), 16 * (1 + TITLE_BAND));
    }
}
