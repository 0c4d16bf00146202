/// ioctl request codes from /usr/include/linux/fb.h. Only the variable
/// screen information query is needed to size a frame read.
pub const FBIOGET_VSCREENINFO: libc::c_ulong = 0x4600;
