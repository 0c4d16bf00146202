use std::fs::{File, OpenOptions};
use std::io::Read;
use std::os::unix::io::AsRawFd;
use std::path::Path;

use libc::ioctl;

use crate::error::SnapshotError;
use crate::framebuffer::common::FBIOGET_VSCREENINFO;
use crate::framebuffer::screeninfo::VarScreeninfo;

/// The slice of the variable screen information a snapshot actually needs.
/// Captured once at open time and read-only for the rest of the run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FramebufferDescriptor {
    pub xres: u32,
    pub yres: u32,
    pub bits_per_pixel: u32,
}

impl FramebufferDescriptor {
    /// Rejects the device unless it reports exactly the bit depth this
    /// variant knows how to unpack. There is no fallback conversion path.
    pub fn expect_depth(&self, expected: u32) -> Result<(), SnapshotError> {
        if self.bits_per_pixel != expected {
            return Err(SnapshotError::UnsupportedDepth {
                expected,
                actual: self.bits_per_pixel,
            });
        }
        Ok(())
    }

    /// Exact byte count of one full frame, rounded up so that at 1 bpp a
    /// pixel count that is not a byte multiple still has its last pixels
    /// backed by a readable byte.
    pub fn frame_size(&self) -> usize {
        let bits = self.xres as usize * self.yres as usize * self.bits_per_pixel as usize;
        (bits + 7) / 8
    }
}

/// An open framebuffer device together with its geometry. Dropping it closes
/// the file descriptor, which happens on every exit path including errors.
pub struct Framebuffer {
    device: File,
    descriptor: FramebufferDescriptor,
}

impl Framebuffer {
    /// Opens the device read-only and queries its variable screen
    /// information over the
    /// [ioctl-based device interface](https://www.kernel.org/doc/html/latest/fb/internals.html).
    pub fn open(path: impl AsRef<Path>) -> Result<Framebuffer, SnapshotError> {
        let path = path.as_ref();
        let device = OpenOptions::new()
            .read(true)
            .open(path)
            .map_err(|source| SnapshotError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        let info = Framebuffer::get_var_screeninfo(&device)?;
        let descriptor = FramebufferDescriptor {
            xres: info.xres,
            yres: info.yres,
            bits_per_pixel: info.bits_per_pixel,
        };
        debug!(
            "opened {}: {}x{} at {} bpp",
            path.display(),
            descriptor.xres,
            descriptor.yres,
            descriptor.bits_per_pixel
        );
        Ok(Framebuffer { device, descriptor })
    }

    pub fn descriptor(&self) -> FramebufferDescriptor {
        self.descriptor
    }

    /// Reads one full frame in a single blocking `read(2)` and consumes the
    /// handle, so the device is closed as soon as the read is done no matter
    /// how it went. A byte count other than the exact frame size is fatal.
    pub fn read_frame(mut self) -> Result<Vec<u8>, SnapshotError> {
        let expected = self.descriptor.frame_size();
        read_full_frame(&mut self.device, expected)
    }

    fn get_var_screeninfo(device: &File) -> Result<VarScreeninfo, SnapshotError> {
        let mut info: VarScreeninfo = Default::default();
        let result = unsafe { ioctl(device.as_raw_fd(), FBIOGET_VSCREENINFO, &mut info) };
        if result != 0 {
            return Err(SnapshotError::Screeninfo(std::io::Error::last_os_error()));
        }
        Ok(info)
    }
}

fn read_full_frame(
    source: &mut impl Read,
    expected: usize,
) -> Result<Vec<u8>, SnapshotError> {
    let mut frame = vec![0u8; expected];
    let actual = source.read(&mut frame).map_err(SnapshotError::FrameRead)?;
    if actual != expected {
        return Err(SnapshotError::ShortRead { expected, actual });
    }
    Ok(frame)
}
