//! Color Wheel - terminal color picker
//!
//! Shows a palette arranged around a circle. Click a color to select it and
//! turn it to the top, right-click to lock it, drag to rotate the wheel.

mod constants;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use colorwheel::config::Config;
use colorwheel::logging;
use colorwheel::models::Palette;
use colorwheel::tui;
use colorwheel::wheel::{DragRelease, WheelState};
use constants::{APP_BINARY_NAME, APP_NAME};

/// Color Wheel - terminal color picker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Palette JSON file (defaults to the built-in palette)
    #[arg(short, long, value_name = "FILE")]
    palette: Option<PathBuf>,

    /// Config file to use instead of the platform default
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Wheel radius in pixels for --print
    #[arg(long, value_name = "PX")]
    radius: Option<f64>,

    /// Pointer movement in pixels before a click becomes a drag
    #[arg(long, value_name = "PX")]
    drag_threshold: Option<f64>,

    /// Keep the dragged rotation on release, or only preview it
    #[arg(long, value_enum)]
    drag_release: Option<ReleaseArg>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the placement of every color and exit
    #[arg(long)]
    print: bool,
}

/// Command-line values for `--drag-release`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ReleaseArg {
    /// Keep the dragged rotation
    Commit,
    /// Snap back after the drag
    Preview,
}

impl From<ReleaseArg> for DragRelease {
    fn from(arg: ReleaseArg) -> Self {
        match arg {
            ReleaseArg::Commit => Self::Commit,
            ReleaseArg::Preview => Self::Preview,
        }
    }
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load().unwrap_or_else(|err| {
                eprintln!("Warning: ignoring config file: {err:#}");
                Config::default()
            }),
        };

        if let Some(palette) = &self.palette {
            config.paths.palette = Some(palette.clone());
        }
        if let Some(radius) = self.radius {
            config.wheel.radius = radius;
        }
        if let Some(threshold) = self.drag_threshold {
            config.wheel.drag_threshold = threshold;
        }
        if let Some(release) = self.drag_release {
            config.wheel.drag_release = release.into();
        }

        config.validate()?;
        Ok(config)
    }
}

fn load_palette(config: &Config) -> Result<Palette> {
    match &config.paths.palette {
        Some(path) => Palette::load_from_file(path),
        None => Palette::load_default(),
    }
}

/// Print the placement table for an unrotated wheel.
fn print_placements(config: &Config, palette: Palette) -> Result<()> {
    let wheel = WheelState::new(palette, config.wheel.settings())?;

    println!("wheel: {}", wheel.wheel_transform());
    for item in wheel.placements(config.wheel.radius) {
        let color = &wheel.palette().colors()[item.index];
        println!(
            "{:>4}  {:<8} {}  x={:>8.1} y={:>8.1}  {}{}",
            item.id,
            color.label(),
            item.hex,
            item.placement.x_offset,
            item.placement.y_offset,
            item.placement.css_transform(),
            if item.locked { "  [locked]" } else { "" }
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    if let Err(err) = logging::default_log_path().and_then(|path| logging::init(cli.verbose, &path)) {
        eprintln!("Warning: logging disabled: {err:#}");
    }

    let palette = load_palette(&config)?;

    if cli.print {
        return print_placements(&config, palette);
    }

    let mut app = tui::App::new(config, palette)?;

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut app, &mut terminal);
    tui::restore_terminal(terminal)?;
    result.context(format!("{APP_NAME} exited with an error"))?;

    let selected = app.wheel.wheel().selected();
    if selected.is_empty() {
        println!("No color selected. Run `{APP_BINARY_NAME} --help` for options.");
    } else {
        println!("{APP_NAME}: selected {} color(s)", selected.len());
        for color in selected {
            println!("  {} {}", color.hex, color.label());
        }
    }

    Ok(())
}
