//! Transform configuration.
//!
//! A [`TransformConfig`] describes *what* the pipeline should do to every
//! image; the pipeline itself ([`crate::transform`]) stays a pure function
//! of image and config. The defaults are the tool's stock preprocessing
//! profile:
//!
//! ```text
//! width        = 512
//! height       = 512
//! center_crop  = false
//! rotate       = false
//! filter       = bicubic
//! ```
//!
//! There is no config file and no environment lookup. The CLI flags in
//! [`crate::cli`] are the only override surface, so a run is fully
//! described by its command line.

use clap::ValueEnum;
use image::imageops::FilterType;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

/// Resampling kernel used for the final resize.
///
/// The three kernels cover the quality/speed range that matters for
/// dataset preparation; anything fancier belongs in an image editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Filter {
    /// Linear interpolation. Fastest, softest.
    Bilinear,
    /// Cubic interpolation (Catmull-Rom). The default.
    Bicubic,
    /// Lanczos windowed sinc with a 3-pixel window. Sharpest, slowest.
    Lanczos,
}

impl Filter {
    /// The `image` crate kernel this filter selects.
    pub fn filter_type(self) -> FilterType {
        match self {
            Filter::Bilinear => FilterType::Triangle,
            Filter::Bicubic => FilterType::CatmullRom,
            Filter::Lanczos => FilterType::Lanczos3,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Filter::Bilinear => "bilinear",
            Filter::Bicubic => "bicubic",
            Filter::Lanczos => "lanczos",
        };
        f.write_str(name)
    }
}

/// Settings applied to every image in a run.
///
/// Built from CLI flags by [`crate::cli::Cli::transform_config`] and passed
/// by reference through the batch loop; nothing mutates it after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Take the largest centered square before resizing.
    pub center_crop: bool,
    /// Quarter-turn the image counter-clockwise before resizing.
    pub rotate: bool,
    /// Resampling kernel for the resize step.
    pub filter: Filter,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            center_crop: false,
            rotate: false,
            filter: Filter::Bicubic,
        }
    }
}

impl TransformConfig {
    /// Reject configurations that cannot produce an image.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Validation(
                "target width and height must be non-zero".into(),
            ));
        }
        Ok(())
    }
}
