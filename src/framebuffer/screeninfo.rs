/// Bitfield which is a part of VarScreeninfo.
#[repr(C)]
#[derive(Clone, Debug)]
pub struct Bitfield {
    /// beginning of bitfield
    pub offset: u32,
    /// length of bitfield
    pub length: u32,
    /// != 0 : Most significant bit is right
    pub msb_right: u32,
}

/// Struct as defined in /usr/include/linux/fb.h, filled in by the
/// `FBIOGET_VSCREENINFO` ioctl. Only `xres`, `yres` and `bits_per_pixel`
/// matter for a snapshot; the rest is carried to keep the ABI layout exact.
#[repr(C)]
#[derive(Clone, Debug)]
pub struct VarScreeninfo {
    /// visible resolution
    pub xres: u32,
    pub yres: u32,
    /// virtual resolution
    pub xres_virtual: u32,
    pub yres_virtual: u32,
    /// offset from virtual to visible
    pub xoffset: u32,
    pub yoffset: u32,
    pub bits_per_pixel: u32,
    /// 0 = color, 1 = grayscale, >1 = FOURCC
    pub grayscale: u32,
    pub red: Bitfield,
    pub green: Bitfield,
    pub blue: Bitfield,
    pub transp: Bitfield,
    /// != 0 Non standard pixel format
    pub nonstd: u32,
    /// see FB_ACTIVATE_*
    pub activate: u32,
    /// height of picture in mm
    pub height: u32,
    /// width of picture in mm
    pub width: u32,
    /// (OBSOLETE) see fb_info.flags
    pub accel_flags: u32,
    /// pixel clock in ps (pico seconds)
    pub pixclock: u32,
    pub left_margin: u32,
    pub right_margin: u32,
    pub upper_margin: u32,
    pub lower_margin: u32,
    pub hsync_len: u32,
    pub vsync_len: u32,
    /// see FB_SYNC_*
    pub sync: u32,
    /// see FB_VMODE_*
    pub vmode: u32,
    /// angle we rotate counter clockwise
    pub rotate: u32,
    /// colorspace for FOURCC-based modes
    pub colorspace: u32,
    /// Reserved for future compatibility
    pub reserved: [u32; 4],
}

impl Default for Bitfield {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

impl Default for VarScreeninfo {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}
