use std::path::PathBuf;

use clap::Parser;

/// Flags shared by every snapshot binary. Unknown flags make clap print a
/// usage message to stderr and exit with a failing status.
#[derive(Debug, Parser)]
pub struct Args {
    /// Framebuffer device to snapshot
    #[clap(short = 'd', long = "device", default_value = "/dev/fb1")]
    pub device: PathBuf,

    /// Destination PNG path (created or truncated)
    #[clap(short = 'p', long = "png", default_value = "fb.png")]
    pub png: PathBuf,
}
