#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "terminal-thunder",
    version,
    about = "Animated terminal lightning backdrop"
)]
pub struct Cli {
    /// Use the electric-blue palette
    #[arg(long, conflicts_with = "hue_family")]
    pub blue: bool,

    /// Palette selector: non-zero is electric blue, 0 is white
    #[arg(long, allow_negative_numbers = true)]
    pub hue_family: Option<f64>,

    /// Hue rotation in degrees; non-zero picks blue unless a palette is given
    #[arg(long, allow_negative_numbers = true)]
    pub tint: Option<f64>,

    /// Label shown in the corner of the canvas
    #[arg(long)]
    pub class_name: Option<String>,

    /// Frame rate (15..120), default 60
    #[arg(long, value_parser = clap::value_parser!(u8).range(15..=120))]
    pub fps: Option<u8>,

    /// Seed for a reproducible storm
    #[arg(long)]
    pub seed: Option<u64>,

    /// Color output policy
    #[arg(long, value_enum, default_value_t = ColorArg::Auto, conflicts_with = "no_color")]
    pub color: ColorArg,

    /// Alias for --color never
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,

    /// JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (filter with THUNDER_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Simulate this many frames, print the canvas to stdout and exit
    #[arg(long, value_name = "FRAMES")]
    pub one_shot: Option<u32>,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.tint.is_some_and(|deg| !deg.is_finite()) {
            anyhow::bail!("--tint must be a finite number of degrees");
        }
        if self.hue_family.is_some_and(f64::is_nan) {
            anyhow::bail!("--hue-family must be a number");
        }
        if self.one_shot == Some(0) {
            anyhow::bail!("--one-shot needs at least one frame");
        }
        Ok(())
    }

    #[must_use]
    pub fn effective_color_mode(&self) -> ColorArg {
        if self.no_color {
            ColorArg::Never
        } else {
            self.color
        }
    }
}
