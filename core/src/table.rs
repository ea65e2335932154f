use alloc::{string::String, vec::Vec};
use log::{debug, info, trace};
use strum::IntoEnumIterator;

use crate::{
    SpriteError,
    emit::is_c_identifier,
    error::Result,
    filename,
    frame::Frame,
    size::{SIZE_COUNT, SizeClass},
    source::FrameSource,
};

/// A matched frame file that has not been decoded yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameFile {
    pub size: SizeClass,
    pub index: u32,
    pub name: String,
}

/// Frame files grouped by size and sorted by index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Discovery {
    groups: [Vec<FrameFile>; SIZE_COUNT],
}

impl Discovery {
    /// Groups the given entry names. Names that are not frame files are skipped.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut discovery = Self::default();
        for name in names {
            let Some((size, index)) = filename::classify(name) else {
                trace!("Skipping {name}");
                continue;
            };
            discovery.groups[size.slot()].push(FrameFile {
                size,
                index,
                name: name.into(),
            });
        }
        for group in discovery.groups.iter_mut() {
            group.sort_by_key(|file| file.index);
            if let Some(pair) = group.windows(2).find(|w| w[0].index == w[1].index) {
                return Err(SpriteError::DuplicateFrame {
                    size: pair[0].size,
                    index: pair[0].index,
                    first: pair[0].name.clone(),
                    second: pair[1].name.clone(),
                });
            }
        }
        Ok(discovery)
    }

    /// Lists `source` and groups its frame files. Finding none is an error.
    pub fn scan(source: &impl FrameSource) -> Result<Self> {
        let entries = source.entries()?;
        let discovery = Self::from_names(entries.iter().map(String::as_str))?;
        if discovery.total() == 0 {
            return Err(SpriteError::NoFrames(source.location().into()));
        }
        debug!(
            "Found {} frame files in {} ({} entries)",
            discovery.total(),
            source.location(),
            entries.len()
        );
        Ok(discovery)
    }

    pub fn group(&self, size: SizeClass) -> &[FrameFile] {
        &self.groups[size.slot()]
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }
}

/// All frames of one named sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteTable {
    name: String,
    groups: [Vec<Frame>; SIZE_COUNT],
}

impl SpriteTable {
    /// Decodes and packs every discovered frame. The first failure aborts.
    pub fn build(name: &str, discovery: &Discovery, source: &impl FrameSource) -> Result<Self> {
        if !is_c_identifier(name) {
            return Err(SpriteError::InvalidName(name.into()));
        }
        let mut groups: [Vec<Frame>; SIZE_COUNT] = Default::default();
        for size in SizeClass::iter() {
            let files = discovery.group(size);
            if files.len() > u8::MAX as usize {
                return Err(SpriteError::TooManyFrames { size, count: files.len() });
            }
            for file in files {
                let image = source.load(&file.name)?;
                let frame = Frame::encode(size, file.index, &file.name, &image)?;
                groups[size.slot()].push(frame);
            }
        }
        let table = Self { name: name.into(), groups };
        info!("Built sprite {name} with {} frames", table.total());
        Ok(table)
    }

    /// Scans and builds in one go.
    pub fn load(name: &str, source: &impl FrameSource) -> Result<Self> {
        let discovery = Discovery::scan(source)?;
        Self::build(name, &discovery, source)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self, size: SizeClass) -> &[Frame] {
        &self.groups[size.slot()]
    }

    pub fn counts(&self) -> [usize; SIZE_COUNT] {
        core::array::from_fn(|slot| self.groups[slot].len())
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Frames the device would animate for `size`: the group itself, or the
    /// first non-empty group when it has none.
    pub fn animation(&self, size: SizeClass) -> Option<(SizeClass, &[Frame])> {
        core::iter::once(size)
            .chain(SizeClass::iter())
            .map(|size| (size, self.group(size)))
            .find(|(_, frames)| !frames.is_empty())
    }
}
