use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{info, warn};
use sprite_core::{
    Result, SpriteError,
    pack::{LumaImage, rgb_to_luma},
    source::FrameSource,
};

/// A decoded frame file. Luminance uses the ITU-R 601 weights.
pub struct RgbFrame(pub image::RgbImage);

impl LumaImage for RgbFrame {
    fn width(&self) -> u32 {
        self.0.width()
    }

    fn height(&self) -> u32 {
        self.0.height()
    }

    fn luma(&self, x: u32, y: u32) -> u8 {
        let [r, g, b] = self.0.get_pixel(x, y).0;
        rgb_to_luma(r, g, b)
    }
}

/// Frame files read straight from one directory.
pub struct DirSource {
    path: PathBuf,
    location: String,
}

pub(crate) fn io_error(path: &Path, err: std::io::Error) -> SpriteError {
    SpriteError::Io(format!("{}: {err}", path.display()))
}

impl DirSource {
    pub fn open(path: &Path) -> Result<Self> {
        let location = path.display().to_string();
        if !path.is_dir() {
            return Err(SpriteError::NotADirectory(location));
        }
        info!("Reading frames from {location}");
        Ok(Self { path: path.to_path_buf(), location })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FrameSource for DirSource {
    type Image = RgbFrame;

    fn location(&self) -> &str {
        &self.location
    }

    fn entries(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.path).map_err(|e| io_error(&self.path, e))? {
            let entry = entry.map_err(|e| io_error(&self.path, e))?;
            if !entry.path().is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => warn!("Skipping non UTF-8 file name {name:?}"),
            }
        }
        Ok(names)
    }

    fn load(&self, name: &str) -> Result<RgbFrame> {
        let path = self.path.join(name);
        let decode_error = |reason: String| SpriteError::Decode { file: name.into(), reason };
        let image = image::ImageReader::open(&path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| decode_error(e.to_string()))?
            .decode()
            .map_err(|e| decode_error(e.to_string()))?;
        Ok(RgbFrame(image.into_rgb8()))
    }
}
