use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong during a snapshot. All of these are terminal:
/// the binaries print the message and exit, nothing is retried.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("cannot open framebuffer {path}: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("reading framebuffer variable information: {0}")]
    Screeninfo(#[source] io::Error),

    #[error("only {expected} bits per pixel supported, device reports {actual}")]
    UnsupportedDepth { expected: u32, actual: u32 },

    #[error("failed to read framebuffer: {0}")]
    FrameRead(#[source] io::Error),

    #[error("short read from framebuffer: expected {expected} bytes, got {actual}")]
    ShortRead { expected: usize, actual: usize },

    #[error("unable to create {path}: {source}")]
    Create { path: PathBuf, source: io::Error },

    #[error("error writing PNG: {0}")]
    Encode(#[from] png::EncodingError),
}
