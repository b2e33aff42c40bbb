mod app;

use app::PickerApp;
use clap::{Parser, ValueEnum};
use eframe::egui;
use file_selector::{Config, SelectionType};
use log::{info, warn};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    File,
    Dir,
}

impl From<Mode> for SelectionType {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::File => SelectionType::File,
            Mode::Dir => SelectionType::Dir,
        }
    }
}

/// Pick a file or directory and print its path.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory shown first
    dir: Option<PathBuf>,

    /// What a selection picks
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Let Backspace close the picker instead of moving to the parent directory
    #[arg(long)]
    no_back_interception: bool,

    /// Ignore the directory remembered from the previous run
    #[arg(long)]
    fresh: bool,

    /// Write a default config file if there is none, then exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.write_default_config {
        match Config::create_default() {
            Ok(path) => println!("{}", path.display()),
            Err(e) => warn!("Could not write default config: {}", e),
        }
        return Ok(());
    }

    let mut config = Config::load();
    if let Some(mode) = args.mode {
        config.selector.selection_type = mode.into();
    }
    if args.no_back_interception {
        config.selector.back_key_interruption = false;
    }
    // An explicit directory wins over the remembered one.
    let restore = !args.fresh && args.dir.is_none();
    if let Some(dir) = args.dir {
        config.selector.start_dir = Some(dir);
    }
    info!("starting picker with {:?}", config.selector);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 640.0])
            .with_title("Select a file"),
        ..Default::default()
    };

    eframe::run_native(
        "file-selector",
        options,
        Box::new(move |cc| Ok(Box::new(PickerApp::new(cc, config, restore)))),
    )
}
