use std::path::Path;

use crate::convert;
use crate::encode::{self, RowEncoder};
use crate::error::SnapshotError;
use crate::framebuffer::Framebuffer;

/// Snapshot of a 1 bpp monochrome framebuffer as a 1-bit grayscale PNG.
pub fn mono(device: &Path, png: &Path) -> Result<(), SnapshotError> {
    let fb = Framebuffer::open(device)?;
    let descriptor = fb.descriptor();
    descriptor.expect_depth(1)?;
    let frame = fb.read_frame()?;

    let packed = convert::pack_mono(&frame, descriptor.xres as usize, descriptor.yres as usize);
    encode::write_bitmap(png, descriptor.xres, descriptor.yres, &packed)?;
    info!(
        "wrote {} ({}x{}, 1-bit grayscale)",
        png.display(),
        descriptor.xres,
        descriptor.yres
    );
    Ok(())
}

/// Snapshot of an 8 bpp grayscale framebuffer. Every framebuffer byte
/// already is an 8-bit sample, so rows stream through unmodified.
pub fn gray(device: &Path, png: &Path) -> Result<(), SnapshotError> {
    let fb = Framebuffer::open(device)?;
    let descriptor = fb.descriptor();
    descriptor.expect_depth(8)?;
    let frame = fb.read_frame()?;

    let mut encoder = RowEncoder::create(png, descriptor.xres, descriptor.yres)?;
    for row in frame.chunks_exact(descriptor.xres as usize) {
        encoder.write_row(row)?;
    }
    encoder.finish()?;
    info!(
        "wrote {} ({}x{}, 8-bit grayscale)",
        png.display(),
        descriptor.xres,
        descriptor.yres
    );
    Ok(())
}

/// Snapshot of a 32 bpp framebuffer, averaged down to 8-bit grayscale one
/// scanline at a time; only a single row buffer is ever held.
pub fn rgba(device: &Path, png: &Path) -> Result<(), SnapshotError> {
    let fb = Framebuffer::open(device)?;
    let descriptor = fb.descriptor();
    descriptor.expect_depth(32)?;
    let frame = fb.read_frame()?;

    let width = descriptor.xres as usize;
    let mut encoder = RowEncoder::create(png, descriptor.xres, descriptor.yres)?;
    let mut gray_row = vec![0u8; width];
    for row in frame.chunks_exact(width * 4) {
        convert::rgba_row_to_gray(row, &mut gray_row);
        encoder.write_row(&gray_row)?;
    }
    encoder.finish()?;
    info!(
        "wrote {} ({}x{}, 8-bit grayscale from 32 bpp)",
        png.display(),
        descriptor.xres,
        descriptor.yres
    );
    Ok(())
}
