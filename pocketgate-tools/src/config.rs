use crate::convert::AssetFormat;
use crate::palette::parse_color;
use crate::preview::Scene;
use clap::{Args, Parser, Subcommand};
use pocketgate_core::{DisplayConfig, Rgb565};
use std::path::PathBuf;

const MAX_SCALE: i64 = 16;

#[derive(Debug, Parser)]
#[command(name = "pocketgate", version, about = "Sprite assets and frame previews")]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a PNG image into a binary sprite
    Convert {
        #[arg(long = "input")]
        input: PathBuf,
        /// Defaults to the input path with a `.sprite` extension
        #[arg(long = "output")]
        output: Option<PathBuf>,
        #[arg(default_value = "alpha", long = "format", value_enum)]
        format: AssetFormat,
    },
    /// Print dimensions and transparency statistics of a sprite file
    Inspect {
        path: PathBuf,
        #[arg(default_value = "10", long = "samples")]
        samples: usize,
    },
    /// Render a test scene through the transfer layer into a PNG snapshot
    Preview(PreviewConfig),
    /// Turn a sprite file into a Rust module with the pixels as constants
    Embed {
        #[arg(long = "input")]
        input: PathBuf,
        /// Defaults to the input path with a `.rs` extension
        #[arg(long = "output")]
        output: Option<PathBuf>,
        /// Constant prefix, defaults to the input file stem
        #[arg(long = "name")]
        name: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct PreviewConfig {
    #[arg(value_enum)]
    pub scene: Scene,
    #[arg(long = "output")]
    pub output: PathBuf,
    /// Alpha sprite used by the `sprite` scene
    #[arg(long = "sprite")]
    pub sprite: Option<PathBuf>,
    #[arg(default_value = "yellow", long = "color", value_parser = parse_color)]
    pub color: Rgb565,
    #[arg(default_value = "160", long = "width")]
    pub width: u16,
    #[arg(default_value = "128", long = "height")]
    pub height: u16,
    #[arg(
        default_value = "4",
        long = "scale",
        value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE)
    )]
    pub scale: u32,
}

impl PreviewConfig {
    pub fn display(&self) -> DisplayConfig {
        DisplayConfig::new(self.width, self.height)
    }

    pub fn image_width(&self) -> u32 {
        self.width as u32 * self.scale
    }

    pub fn image_height(&self) -> u32 {
        self.height as u32 * self.scale
    }
}
