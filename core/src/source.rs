use alloc::{string::String, vec::Vec};

use crate::{error::Result, pack::LumaImage};

/// Where frame images come from, usually one directory on disk.
pub trait FrameSource {
    type Image: LumaImage;

    /// Human readable location, used in diagnostics.
    fn location(&self) -> &str;
    /// Names of the regular files in the source, non-recursive, in
    /// enumeration order.
    fn entries(&self) -> Result<Vec<String>>;
    fn load(&self, name: &str) -> Result<Self::Image>;
}
