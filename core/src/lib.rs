#![no_std]

pub mod emit;
pub mod error;
pub mod filename;
pub mod frame;
pub mod input;
pub mod pack;
pub mod panel;
pub mod size;
pub mod source;
pub mod table;

pub use error::{Result, SpriteError};

extern crate alloc;
