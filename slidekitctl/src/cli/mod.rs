//! Command-line surface for inspecting slider configurations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use slidekit_core::{RecordingScrollSink, Slider, WidthState, config};
use slidekit_model::{SliderOptions, SlotPresence};

pub mod layout;
pub mod simulate;
pub mod step;

#[derive(Parser)]
#[command(
    name = "slidekitctl",
    about = "Inspect slidekit slider layouts and navigation"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved layout, styles, and navigation state at one width
    Layout(layout::LayoutArgs),
    /// Drive a headless slider through a sequence of steps
    Simulate(simulate::SimulateArgs),
}

/// Inputs shared by every subcommand: options, collection, and widths.
#[derive(Args, Debug)]
pub struct SliderArgs {
    /// Options file (.json or .toml). Defaults apply when omitted.
    #[arg(long)]
    options: Option<PathBuf>,
    /// Number of items in the collection
    #[arg(long)]
    items: usize,
    /// Viewport width in px
    #[arg(long)]
    window: f32,
    /// Container width in px (defaults to the viewport width)
    #[arg(long)]
    container: Option<f32>,
    /// Render a leading content slot before the items
    #[arg(long)]
    leading: bool,
    /// Render a trailing content slot after the items
    #[arg(long)]
    trailing: bool,
}

impl SliderArgs {
    fn width(&self) -> WidthState {
        WidthState::new(self.window, self.container.unwrap_or(self.window))
    }

    fn load_options(&self) -> Result<SliderOptions> {
        match &self.options {
            Some(path) => config::load_path(path)
                .with_context(|| format!("loading options from {}", path.display())),
            None => Ok(SliderOptions::default()),
        }
    }

    /// Build and mount a slider that records its scroll commands.
    fn mounted_slider(&self) -> Result<Slider<RecordingScrollSink>> {
        let options = self.load_options()?;
        let mut slider = Slider::new(
            options,
            self.items,
            SlotPresence::new(self.leading, self.trailing),
            RecordingScrollSink::new(),
        )?;
        slider.mount(self.width()).context("mounting slider")?;
        Ok(slider)
    }
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Layout(args) => layout::run(&args),
        Command::Simulate(args) => simulate::run(&args),
    }
}
