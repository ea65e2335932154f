use std::{path::PathBuf, process::ExitCode};

use argh::FromArgs;
use log::error;
use sprite_core::SpriteError;
use sprite_desktop::{Options, run};

#[derive(FromArgs)]
/// Convert BMP sprite frames (SMALL_1.bmp, MEDIUM_1.bmp, LARGE_1.bmp, ...)
/// into a C header for the SSD1306 sprite driver
struct Args {
    /// sprite directory, e.g. sprites/<character_name>
    #[argh(positional)]
    directory: PathBuf,

    /// output header path, defaults to <directory>/<name>.h
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,

    /// sprite name, defaults to the directory name
    #[argh(option, short = 'n')]
    name: Option<String>,

    /// also write the shared sprite.h declarations to this path
    #[argh(option)]
    decls: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    let options = Options {
        directory: args.directory,
        output: args.output,
        name: args.name,
        declarations: args.decls,
    };

    match run(&options) {
        Ok(summary) => {
            print!("{}", summary.report());
            ExitCode::SUCCESS
        }
        Err(err @ SpriteError::NotADirectory(_)) => {
            eprintln!("{err}");
            eprintln!("Usage: sprite2h sprites/<character_name>");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("Conversion failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
