//! # imgprep
//!
//! A batch image preprocessor for machine-learning datasets. Point it at a
//! directory of images and it produces a sibling `<name>_dataset` directory
//! where every image has been normalized to RGB, optionally center-cropped
//! and/or rotated, and resized to a fixed target resolution.
//!
//! # Pipeline
//!
//! Every file goes through the same fixed sequence, one file at a time, in
//! lexicographic filename order:
//!
//! ```text
//! decode → normalize to RGB → center crop? → rotate? → resize → save
//! ```
//!
//! The per-pixel stages in the middle are a pure function from image to
//! image ([`transform::apply`]); decoding, directory listing, and writing
//! live in [`batch`]. That split keeps the pixel logic testable without
//! filesystem fixtures.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`cli`] | Command-line surface (clap derive) |
//! | [`config`] | [`TransformConfig`](config::TransformConfig): target size, crop/rotate flags, resampling filter |
//! | [`scan`] | Deterministic input-directory listing |
//! | [`transform`] | The pure pixel pipeline and its crop geometry |
//! | [`batch`] | The sequential decode/transform/save loop and output-directory derivation |
//!
//! # Design Decisions
//!
//! ## Exact Resize
//!
//! Output dimensions always equal the configured target, with no aspect
//! preservation: training corpora want uniform tensors, not letterboxes.
//! Aspect distortion is avoided by opting into `--center-crop`, which takes
//! the largest centered square before resizing.
//!
//! ## Abort, Don't Skip
//!
//! Any unreadable file or failed write aborts the whole run with the path
//! in the error. A dataset with silently missing members is worse than no
//! dataset: the filename sets of input and output are either equal or the
//! run failed. Outputs written before the failure are left in place.
//!
//! ## Sequential By Design
//!
//! Files are processed strictly one at a time in sorted order. Runs are
//! deterministic and progress output lines up with processing order, which
//! matters more here than wall-clock speed; re-running is cheap and
//! idempotent.

pub mod batch;
pub mod cli;
pub mod config;
pub mod scan;
pub mod transform;
