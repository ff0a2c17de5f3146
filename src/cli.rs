//! Command-line surface.
//!
//! Lives outside `main` so parsing is testable through
//! [`clap::Parser::try_parse_from`]. Flag defaults mirror
//! [`TransformConfig::default`], so a bare invocation reproduces the
//! stock profile.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Filter, TransformConfig};

#[derive(Parser)]
#[command(name = "imgprep")]
#[command(about = "Batch image preprocessor for machine-learning datasets")]
#[command(long_about = "\
Batch image preprocessor for machine-learning datasets

Processes every file in the input directory in sorted name order: decode,
normalize to RGB, optionally center-crop to a square, optionally rotate a
quarter turn counter-clockwise, then resize to the target dimensions and
save under the same file name. The output directory defaults to a sibling
of the input named <input>_dataset and is created on first write.

The first unreadable or non-image file aborts the run. Outputs written
before the failure are kept, and rerunning overwrites them in place.")]
#[command(version)]
pub struct Cli {
    /// Directory of images to process
    pub input_dir: PathBuf,

    /// Output directory (default: sibling of the input named <input>_dataset)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Target width in pixels
    #[arg(long, default_value_t = 512)]
    pub width: u32,

    /// Target height in pixels
    #[arg(long, default_value_t = 512)]
    pub height: u32,

    /// Crop to the largest centered square before resizing
    #[arg(long)]
    pub center_crop: bool,

    /// Rotate a quarter turn counter-clockwise before resizing
    #[arg(long)]
    pub rotate: bool,

    /// Resampling filter for the resize
    #[arg(long, value_enum, default_value_t = Filter::Bicubic)]
    pub filter: Filter,
}

impl Cli {
    /// The transform settings this invocation asked for.
    pub fn transform_config(&self) -> TransformConfig {
        TransformConfig {
            width: self.width,
            height: self.height,
            center_crop: self.center_crop,
            rotate: self.rotate,
            filter: self.filter,
        }
    }
}
