use std::{
    path::PathBuf,
    process::ExitCode,
    time::{Duration, Instant},
};

use argh::FromArgs;
use log::{debug, info};
use sprite_core::panel::{Panel, Preview};
use sprite_desktop::convert::load_table;

use crate::panel_window::PanelWindow;

mod panel_window;

#[derive(FromArgs)]
/// Play a sprite directory on a simulated 128x64 OLED.
/// Up/Down change the simulated disk usage, Left/Right force a size,
/// Enter goes back to usage based sizing, S changes the scale, Escape quits.
struct Args {
    /// sprite directory, e.g. sprites/<character_name>
    #[argh(positional)]
    directory: PathBuf,

    /// sprite name, defaults to the directory name
    #[argh(option, short = 'n')]
    name: Option<String>,

    /// simulated disk usage between 0 and 1
    #[argh(option, short = 'u', default = "0.0")]
    usage: f32,

    /// milliseconds between animation frames
    #[argh(option, short = 'i', default = "2000")]
    interval_ms: u64,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    let table = match load_table(&args.directory, args.name.as_deref()) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    info!("Previewing {} ({} frames)", table.name(), table.total());

    let interval = Duration::from_millis(args.interval_ms);
    let mut panel = Panel::default();
    let mut preview = Preview::new(args.usage);
    let mut window = PanelWindow::default();
    let mut last_draw: Option<Instant> = None;

    while window.is_open() {
        window.update();
        let changed = preview.handle(&window.buttons());
        if !changed && last_draw.is_some_and(|at| at.elapsed() < interval) {
            continue;
        }
        if let Some((size, position)) = preview.render(&table, &mut panel) {
            let count = table.group(size).len();
            debug!("Showing {} frame {}/{count}", size.name(), position + 1);
            window.set_title(&format!(
                "{} - {} {}/{count} - usage {:.0}%",
                table.name(),
                size.name(),
                position + 1,
                preview.usage() * 100.0
            ));
        }
        window.show(&panel);
        last_draw = Some(Instant::now());
    }

    ExitCode::SUCCESS
}
