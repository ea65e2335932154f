use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use log::info;
use sprite_core::{
    Result, SpriteError,
    emit::{SPRITE_DECLARATIONS, emit_header},
    size::{SIZE_COUNT, SizeClass},
    table::SpriteTable,
};
use strum::IntoEnumIterator;

use crate::std_fs::{DirSource, io_error};

/// What to convert and where to put it.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub directory: PathBuf,
    /// Defaults to `<directory>/<name>.h`.
    pub output: Option<PathBuf>,
    /// Defaults to the directory's base name.
    pub name: Option<String>,
    /// Also write `sprite.h` here.
    pub declarations: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output: PathBuf,
    pub counts: [usize; SIZE_COUNT],
}

impl Summary {
    /// The lines printed after a successful run.
    pub fn report(&self) -> String {
        let mut out = format!("Generated {}\n", self.output.display());
        for size in SizeClass::iter() {
            let count = self.counts[size.slot()];
            if count > 0 {
                let _ = writeln!(out, "  {}: {count} frame(s)", size.name());
            }
        }
        out
    }
}

/// Base name of `directory`, resolved so `.` and `..` give a real name.
pub fn sprite_name(directory: &Path) -> Result<String> {
    let resolved = directory
        .canonicalize()
        .map_err(|e| io_error(directory, e))?;
    resolved
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_owned)
        .ok_or_else(|| SpriteError::InvalidName(resolved.display().to_string()))
}

/// Loads a sprite table from `directory`, named after the directory unless
/// `name` is given.
pub fn load_table(directory: &Path, name: Option<&str>) -> Result<SpriteTable> {
    let source = DirSource::open(directory)?;
    let name = match name {
        Some(name) => name.to_owned(),
        None => sprite_name(source.path())?,
    };
    SpriteTable::load(&name, &source)
}

/// Converts one sprite directory into a header. The header is not written
/// unless every frame was encoded and the declarations (if asked for) were
/// written.
pub fn run(options: &Options) -> Result<Summary> {
    let table = load_table(&options.directory, options.name.as_deref())?;
    let header = emit_header(&table);

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| options.directory.join(format!("{}.h", table.name())));
    if let Some(path) = &options.declarations {
        fs::write(path, SPRITE_DECLARATIONS).map_err(|e| io_error(path, e))?;
        info!("Wrote declarations to {}", path.display());
    }

    fs::write(&output, header).map_err(|e| io_error(&output, e))?;
    info!("Wrote {}", output.display());

    Ok(Summary {
        output,
        counts: table.counts(),
    })
}
