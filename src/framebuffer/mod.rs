pub mod common;
pub mod core;
pub mod screeninfo;

pub use self::core::{Framebuffer, FramebufferDescriptor};
