//! One-shot snapshots of raw Linux framebuffer devices as grayscale PNGs.
//!
//! Each supported pixel depth (1, 8 and 32 bpp) gets its own binary, but the
//! pipeline is always the same: open the device, query its geometry over
//! `FBIOGET_VSCREENINFO`, read one full frame, unpack the native layout into
//! PNG sample rows and write the file. The interesting part lives in
//! [`convert`]; everything else is resource acquisition and encoding.

#[macro_use]
extern crate log;

/// Shared `-d`/`-p` flag parsing for the snapshot binaries.
pub mod cli;

/// Pixel-format conversions from framebuffer layouts to PNG sample layouts.
pub mod convert;

/// Grayscale PNG output, full-image or one scanline at a time.
pub mod encode;

pub mod error;

/// Framebuffer device acquisition: open, geometry query, frame read.
pub mod framebuffer;

/// The acquire-read-convert-write pipelines, one per pixel depth.
pub mod snapshot;

pub use crate::error::SnapshotError;
