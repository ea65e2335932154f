use embedded_graphics::{
    Drawable, Pixel,
    image::Image,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Point, Size},
};
use log::debug;

use crate::{
    frame::Frame,
    input::{ButtonState, Buttons},
    size::SizeClass,
    table::SpriteTable,
};

pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;
pub const BUFFER_SIZE: usize = WIDTH * HEIGHT / 8;

/// Framebuffer of a 128x64 SSD1306 panel. Each byte is a column of 8
/// vertical pixels, LSB on top, pages of 128 bytes stacked downwards.
pub struct Panel {
    buffer: [u8; BUFFER_SIZE],
}

impl Default for Panel {
    fn default() -> Self {
        Self { buffer: [0; BUFFER_SIZE] }
    }
}

impl Panel {
    pub fn buffer(&self) -> &[u8; BUFFER_SIZE] {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: BinaryColor) {
        if x < 0 || y < 0 || x as usize >= WIDTH || y as usize >= HEIGHT {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        let byte_index = x + (y / 8) * WIDTH;
        let bit_index = y % 8;
        match color {
            BinaryColor::On => self.buffer[byte_index] |= 1 << bit_index,
            BinaryColor::Off => self.buffer[byte_index] &= !(1 << bit_index),
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.buffer[x + (y / 8) * WIDTH] & (1 << (y % 8)) != 0
    }

    /// Draws `frame` centered horizontally and resting on the bottom edge.
    pub fn blit(&mut self, frame: &Frame) {
        let origin = Point::new(
            (WIDTH as i32 - frame.width() as i32) / 2,
            HEIGHT as i32 - frame.height() as i32,
        );
        let raw = frame.image_raw();
        let Ok(()) = Image::new(&raw, origin).draw(self);
    }
}

impl OriginDimensions for Panel {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for Panel {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.set_pixel(coord.x, coord.y, color);
        }
        Ok(())
    }
}

/// Step applied to the simulated usage per Up/Down press.
pub const USAGE_STEP: f32 = 0.1;

/// Which animation the device would be showing, and where in it.
pub struct Preview {
    usage: f32,
    forced: Option<SizeClass>,
    counter: usize,
}

impl Preview {
    pub fn new(usage: f32) -> Self {
        Self {
            usage: usage.clamp(0.0, 1.0),
            forced: None,
            counter: 0,
        }
    }

    pub fn usage(&self) -> f32 {
        self.usage
    }

    /// Size requested for the current usage, unless one was picked by hand.
    pub fn size(&self) -> SizeClass {
        self.forced.unwrap_or_else(|| SizeClass::for_usage(self.usage))
    }

    /// Applies key presses. Returns whether anything changed.
    pub fn handle(&mut self, buttons: &ButtonState) -> bool {
        const CONTROLS: [Buttons; 5] = [
            Buttons::Up,
            Buttons::Down,
            Buttons::Left,
            Buttons::Right,
            Buttons::Reset,
        ];
        if !buttons.any_pressed(&CONTROLS) {
            return false;
        }
        if buttons.is_pressed(Buttons::Up) {
            self.usage = (self.usage + USAGE_STEP).min(1.0);
        } else if buttons.is_pressed(Buttons::Down) {
            self.usage = (self.usage - USAGE_STEP).max(0.0);
        } else if buttons.is_pressed(Buttons::Right) {
            self.forced = Some(self.size().next());
        } else if buttons.is_pressed(Buttons::Left) {
            self.forced = Some(self.size().prev());
        } else {
            self.forced = None;
        }
        debug!("Preview usage {:.2}, size {}", self.usage, self.size().name());
        true
    }

    /// Clears `panel` and draws the next frame of the selected animation.
    /// Returns the size shown and the frame position within it.
    pub fn render(&mut self, table: &SpriteTable, panel: &mut Panel) -> Option<(SizeClass, usize)> {
        panel.clear();
        let (size, frames) = table.animation(self.size())?;
        let position = self.counter % frames.len();
        panel.blit(&frames[position]);
        self.counter = self.counter.wrapping_add(1);
        Some((size, position))
    }
}
