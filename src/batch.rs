//! The I/O loop around [`transform::apply`].
//!
//! [`run`] walks the sorted listing one file at a time: open, decode,
//! transform, save under the same file name in the output directory.
//! The failure contract is deliberate: the first error of any kind stops
//! the run with the offending path. Outputs written before the failure
//! stay on disk, and nothing records progress, so a rerun starts over
//! from the first file. Saves overwrite, which makes reruns idempotent.
//!
//! The output directory is created right before each write, not up
//! front. A run over an empty directory, or one that fails before the
//! first save, leaves no output directory behind.

use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};
use thiserror::Error;

use crate::config::TransformConfig;
use crate::scan::{self, ScanError};
use crate::transform;

/// Appended to the input directory's name to derive the default output
/// directory, e.g. `photos` → `photos_dataset`.
pub const OUTPUT_SUFFIX: &str = "_dataset";

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("{0}")]
    Scan(#[from] ScanError),
    #[error("cannot derive an output directory from: {0}")]
    BadInputPath(PathBuf),
    #[error("output directory is the input directory: {0}")]
    OutputDirConflicts(PathBuf),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to write {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Derive the default output directory for `input`: a sibling directory
/// named after the input with [`OUTPUT_SUFFIX`] appended.
///
/// `data/photos` becomes `data/photos_dataset`. Paths with no final
/// component to rename (`/`, `.`, `..`) are rejected.
pub fn derive_output_dir(input: &Path) -> Result<PathBuf, BatchError> {
    let name = input
        .file_name()
        .ok_or_else(|| BatchError::BadInputPath(input.to_path_buf()))?;
    let mut with_suffix = name.to_os_string();
    with_suffix.push(OUTPUT_SUFFIX);
    Ok(input.with_file_name(with_suffix))
}

/// What a completed run did, for the final status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub output_dir: PathBuf,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} images written to {}",
            self.processed,
            self.output_dir.display()
        )
    }
}

/// Process every file in `input_dir` into `output_dir`.
///
/// Files are handled strictly in the sorted order of
/// [`scan::list_entries`], one at a time, each printed as it is picked
/// up. The first failure aborts the whole run; outputs already written
/// are left in place.
pub fn run(
    input_dir: &Path,
    output_dir: &Path,
    config: &TransformConfig,
) -> Result<BatchSummary, BatchError> {
    if input_dir == output_dir {
        return Err(BatchError::OutputDirConflicts(output_dir.to_path_buf()));
    }

    let names = scan::list_entries(input_dir)?;

    let mut processed = 0;
    for name in &names {
        println!("  {}", Path::new(name).display());

        let image = load_image(&input_dir.join(name))?;
        let image = transform::apply(image, config);
        save_image(&image, output_dir, name)?;
        processed += 1;
    }

    Ok(BatchSummary {
        processed,
        output_dir: output_dir.to_path_buf(),
    })
}

/// Open and decode one file. The format is sniffed from the content, so
/// a misnamed file still decodes; a non-image file fails here and takes
/// the run down with it.
fn load_image(path: &Path) -> Result<DynamicImage, BatchError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| BatchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    reader.decode().map_err(|source| BatchError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Write one image under its original file name. The encoder is chosen
/// by the file extension, so outputs keep their input format.
fn save_image(image: &DynamicImage, output_dir: &Path, name: &OsStr) -> Result<(), BatchError> {
    fs::create_dir_all(output_dir).map_err(|source| BatchError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(name);
    image
        .save(&path)
        .map_err(|source| BatchError::Encode { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    fn tiny_config() -> TransformConfig {
        TransformConfig {
            width: 16,
            height: 16,
            ..Default::default()
        }
    }

    fn write_png(path: &Path, width: u32, height: u32) {
        RgbImage::from_pixel(width, height, Rgb([120, 40, 200]))
            .save(path)
            .unwrap();
    }

    // =========================================================================
    // derive_output_dir
    // =========================================================================

    #[test]
    fn output_dir_is_a_suffixed_sibling() {
        assert_eq!(
            derive_output_dir(Path::new("data/photos")).unwrap(),
            Path::new("data/photos_dataset")
        );
        assert_eq!(
            derive_output_dir(Path::new("photos")).unwrap(),
            Path::new("photos_dataset")
        );
    }

    #[test]
    fn trailing_slash_is_normalized() {
        assert_eq!(
            derive_output_dir(Path::new("data/photos/")).unwrap(),
            Path::new("data/photos_dataset")
        );
    }

    #[test]
    fn paths_without_a_name_are_rejected() {
        for input in ["/", ".", ".."] {
            let result = derive_output_dir(Path::new(input));
            assert!(
                matches!(result, Err(BatchError::BadInputPath(_))),
                "{input}"
            );
        }
    }

    // =========================================================================
    // run
    // =========================================================================

    #[test]
    fn empty_input_creates_no_output_directory() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("photos");
        fs::create_dir(&input).unwrap();
        let output = tmp.path().join("photos_dataset");

        let summary = run(&input, &output, &tiny_config()).unwrap();

        assert_eq!(summary.processed, 0);
        assert!(!output.exists());
    }

    #[test]
    fn processes_one_image_end_to_end() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("photos");
        fs::create_dir(&input).unwrap();
        write_png(&input.join("shot.png"), 64, 48);
        let output = tmp.path().join("photos_dataset");

        let summary = run(&input, &output, &tiny_config()).unwrap();

        assert_eq!(summary.processed, 1);
        let saved = image::open(output.join("shot.png")).unwrap();
        assert_eq!((saved.width(), saved.height()), (16, 16));
        assert_eq!(saved.color(), image::ColorType::Rgb8);
    }

    #[test]
    fn output_into_input_is_refused() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("photos");
        fs::create_dir(&input).unwrap();
        write_png(&input.join("shot.png"), 8, 8);

        let result = run(&input, &input, &tiny_config());
        assert!(matches!(result, Err(BatchError::OutputDirConflicts(_))));
    }

    #[test]
    fn non_image_file_aborts_the_run() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("photos");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("notes.txt"), "not pixels").unwrap();
        let output = tmp.path().join("photos_dataset");

        let result = run(&input, &output, &tiny_config());

        assert!(matches!(result, Err(BatchError::Decode { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn missing_input_surfaces_the_scan_error() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("absent");
        let output = tmp.path().join("absent_dataset");

        let result = run(&input, &output, &tiny_config());
        assert!(matches!(result, Err(BatchError::Scan(ScanError::NotFound(_)))));
    }
}
