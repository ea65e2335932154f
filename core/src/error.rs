use alloc::string::String;
use core::fmt;

use crate::size::SizeClass;

/// Everything that can abort a conversion run. None of these are recoverable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpriteError {
    NotADirectory(String),
    NoFrames(String),
    DuplicateFrame {
        size: SizeClass,
        index: u32,
        first: String,
        second: String,
    },
    Decode {
        file: String,
        reason: String,
    },
    FrameSize {
        file: String,
        width: u32,
        height: u32,
    },
    TooManyFrames {
        size: SizeClass,
        count: usize,
    },
    InvalidName(String),
    Io(String),
}

pub type Result<T> = core::result::Result<T, SpriteError>;

impl fmt::Display for SpriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpriteError::NotADirectory(path) => write!(f, "Not a directory: {path}"),
            SpriteError::NoFrames(path) => write!(
                f,
                "No BMP files found in {path}\nExpected files like: SMALL_1.bmp, MEDIUM_1.bmp, LARGE_1.bmp"
            ),
            SpriteError::DuplicateFrame { size, index, first, second } => write!(
                f,
                "Duplicate {} frame {index}: {first} and {second}",
                size.name()
            ),
            SpriteError::Decode { file, reason } => write!(f, "Failed to decode {file}: {reason}"),
            SpriteError::FrameSize { file, width, height } => write!(
                f,
                "{file} is {width}x{height}, frames must be between 1x1 and {max}x{max}",
                max = u8::MAX
            ),
            SpriteError::TooManyFrames { size, count } => write!(
                f,
                "{} has {count} frames, at most {} are supported",
                size.name(),
                u8::MAX
            ),
            SpriteError::InvalidName(name) => {
                write!(f, "Sprite name {name:?} is not a valid C identifier")
            }
            SpriteError::Io(reason) => write!(f, "I/O error: {reason}"),
        }
    }
}

impl core::error::Error for SpriteError {}
