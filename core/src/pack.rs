use alloc::vec::Vec;

/// Luminance values above this are "on" pixels.
pub const LUMA_THRESHOLD: u8 = 127;

/// A decoded 8-bit grayscale image.
pub trait LumaImage {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn luma(&self, x: u32, y: u32) -> u8;
}

/// Row-major grayscale pixels held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumaBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl LumaBuffer {
    /// Returns `None` when `pixels` does not hold exactly `width * height` values.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self { width, height, pixels })
    }

    pub fn filled(width: u32, height: u32, luma: u8) -> Self {
        Self {
            width,
            height,
            pixels: alloc::vec![luma; width as usize * height as usize],
        }
    }

    pub fn set(&mut self, x: u32, y: u32, luma: u8) {
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels[idx] = luma;
    }
}

impl LumaImage for LumaBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn luma(&self, x: u32, y: u32) -> u8 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

/// ITU-R 601 luma in 16.16 fixed point, rounded. The weights sum to 1.0
/// exactly, so gray input comes back unchanged.
pub fn rgb_to_luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

pub fn is_on(luma: u8) -> bool {
    luma > LUMA_THRESHOLD
}

pub fn row_bytes(width: u32) -> usize {
    (width as usize).div_ceil(8)
}

/// Packs an image to 1bpp, MSB first, each row padded to a whole byte.
pub fn pack(image: &impl LumaImage) -> Vec<u8> {
    let width = image.width();
    let height = image.height();
    let stride = row_bytes(width);
    let mut data = alloc::vec![0u8; stride * height as usize];
    for y in 0..height {
        let row = &mut data[y as usize * stride..(y as usize + 1) * stride];
        for x in 0..width {
            if is_on(image.luma(x, y)) {
                row[x as usize / 8] |= 0x80 >> (x % 8);
            }
        }
    }
    data
}
