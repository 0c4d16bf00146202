use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::SnapshotError;

/// Writes a complete 1-bit grayscale PNG from an MSB-first packed bit
/// buffer sized `ceil(width/8) * height` bytes.
pub fn write_bitmap(
    path: &Path,
    width: u32,
    height: u32,
    packed: &[u8],
) -> Result<(), SnapshotError> {
    let mut writer = grayscale_header(path, width, height, png::BitDepth::One)?;
    writer.write_image_data(packed)?;
    writer.finish()?;
    Ok(())
}

/// An 8-bit grayscale PNG being written one scanline at a time, so callers
/// never hold more than a single row of samples.
pub struct RowEncoder {
    stream: png::StreamWriter<'static, BufWriter<File>>,
}

impl RowEncoder {
    pub fn create(path: &Path, width: u32, height: u32) -> Result<RowEncoder, SnapshotError> {
        let writer = grayscale_header(path, width, height, png::BitDepth::Eight)?;
        let stream = writer.into_stream_writer_with_size(width as usize)?;
        Ok(RowEncoder { stream })
    }

    /// Emits one scanline of `width` grayscale samples.
    pub fn write_row(&mut self, row: &[u8]) -> Result<(), SnapshotError> {
        self.stream
            .write_all(row)
            .map_err(|err| SnapshotError::Encode(err.into()))
    }

    /// Flushes the last scanline and writes the trailer. If this is never
    /// called the file is left truncated, which is the documented behavior
    /// on encoder faults.
    pub fn finish(self) -> Result<(), SnapshotError> {
        self.stream.finish()?;
        Ok(())
    }
}

fn grayscale_header(
    path: &Path,
    width: u32,
    height: u32,
    depth: png::BitDepth,
) -> Result<png::Writer<BufWriter<File>>, SnapshotError> {
    let file = File::create(path).map_err(|source| SnapshotError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(depth);
    Ok(encoder.write_header()?)
}
