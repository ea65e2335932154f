use alloc::{string::String, vec::Vec};
use embedded_graphics::{image::ImageRaw, pixelcolor::BinaryColor};
use log::debug;

use crate::{
    SpriteError,
    error::Result,
    pack::{self, LumaImage},
    size::SizeClass,
};

/// One encoded animation frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub size: SizeClass,
    pub index: u32,
    pub source_name: String,
    width: u8,
    height: u8,
    data: Vec<u8>,
}

impl Frame {
    /// Binarizes and packs `image`. `sprite_frame_t` stores dimensions as
    /// `uint8_t`, so frames have to fit in 255x255.
    pub fn encode(
        size: SizeClass,
        index: u32,
        source_name: &str,
        image: &impl LumaImage,
    ) -> Result<Self> {
        let (width, height) = (image.width(), image.height());
        let size_error = || SpriteError::FrameSize {
            file: source_name.into(),
            width,
            height,
        };
        if width == 0 || height == 0 {
            return Err(size_error());
        }
        let w = u8::try_from(width).map_err(|_| size_error())?;
        let h = u8::try_from(height).map_err(|_| size_error())?;
        let data = pack::pack(image);
        debug!("Encoded {source_name}: {width}x{height}, {} bytes", data.len());
        Ok(Self {
            size,
            index,
            source_name: source_name.into(),
            width: w,
            height: h,
            data,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn row_bytes(&self) -> usize {
        pack::row_bytes(self.width as u32)
    }

    pub fn pixel(&self, x: u8, y: u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.data[y as usize * self.row_bytes() + x as usize / 8];
        byte & (0x80 >> (x % 8)) != 0
    }

    /// The packed bits share embedded-graphics' 1bpp raw layout.
    pub fn image_raw(&self) -> ImageRaw<'_, BinaryColor> {
        ImageRaw::new(&self.data, self.width as u32)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pack::LumaBuffer;
    use alloc::vec;
    use embedded_graphics::prelude::{OriginDimensions, Size};

    #[test]
    fn encode_records_dimensions() {
        let image = LumaBuffer::filled(9, 3, 255);
        let frame = Frame::encode(SizeClass::Small, 1, "SMALL_1.bmp", &image).unwrap();
        assert_eq!((frame.width(), frame.height()), (9, 3));
        assert_eq!(frame.row_bytes(), 2);
        assert_eq!(frame.data(), &[0xff, 0x80, 0xff, 0x80, 0xff, 0x80]);
        assert_eq!(frame.source_name, "SMALL_1.bmp");
    }

    #[test]
    fn pixel_readback() {
        let mut image = LumaBuffer::filled(10, 2, 0);
        image.set(9, 1, 255);
        image.set(2, 0, 128);
        let frame = Frame::encode(SizeClass::Large, 0, "LARGE_0.bmp", &image).unwrap();
        assert!(frame.pixel(9, 1));
        assert!(frame.pixel(2, 0));
        assert!(!frame.pixel(8, 1));
        assert!(!frame.pixel(10, 1));
        assert!(!frame.pixel(0, 2));
    }

    #[test]
    fn rejects_oversized() {
        let image = LumaBuffer::filled(256, 1, 0);
        let err = Frame::encode(SizeClass::Large, 1, "LARGE_1.bmp", &image).unwrap_err();
        assert_eq!(
            err,
            SpriteError::FrameSize { file: "LARGE_1.bmp".into(), width: 256, height: 1 }
        );
        let image = LumaBuffer::filled(255, 255, 0);
        assert!(Frame::encode(SizeClass::Large, 1, "LARGE_1.bmp", &image).is_ok());
    }

    #[test]
    fn rejects_empty() {
        let image = LumaBuffer::new(0, 4, vec![]).unwrap();
        assert!(matches!(
            Frame::encode(SizeClass::Small, 1, "SMALL_1.bmp", &image),
            Err(SpriteError::FrameSize { .. })
        ));
    }

    #[test]
    fn image_raw_matches_frame() {
        let image = LumaBuffer::filled(12, 5, 255);
        let frame = Frame::encode(SizeClass::Medium, 2, "MEDIUM_2.bmp", &image).unwrap();
        assert_eq!(frame.image_raw().size(), Size::new(12, 5));
    }
}
