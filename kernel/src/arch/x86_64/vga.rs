//! The memory-mapped CGA framebuffer and the global writer over it.
//!
//! This is the single place the raw `0xB8000` address is turned into a
//! [`FrameBuffer`]; everything else goes through the [`WRITER`] mutex.

use core::fmt;

use lazy_static::lazy_static;
use spin::Mutex;

use crate::cga::{FrameBuffer, Renderer};

/// Physical address of the VGA text buffer on x86 PCs, identity-mapped by
/// the boot stage.
pub const CGA_BASE: usize = 0xb8000;

/// Byte sink over the hardware text buffer. All stores are volatile so the
/// compiler cannot elide or reorder them.
pub struct MmioBuffer {
    base: *mut u8,
}

impl MmioBuffer {
    /// # Safety
    ///
    /// `base` must be the start of the mapped VGA text region, valid for
    /// writes for the lifetime of the value, and no other code may hold a
    /// handle to the same region.
    pub const unsafe fn new(base: *mut u8) -> MmioBuffer {
        MmioBuffer { base }
    }
}

// SAFETY: the handle is a bare MMIO pointer with no thread affinity; the
// sole instance lives inside WRITER's mutex, which serializes access.
unsafe impl Send for MmioBuffer {}

impl FrameBuffer for MmioBuffer {
    fn store(&mut self, offset: usize, value: u8) {
        // SAFETY: writes land in the region the constructor contract pins.
        // Offsets past the mapped extent are the documented renderer
        // precondition, not checked here.
        unsafe {
            self.base.add(offset).write_volatile(value);
        }
    }
}

lazy_static! {
    /// Global renderer over the hardware buffer.
    pub static ref WRITER: Mutex<Renderer<MmioBuffer>> = Mutex::new(Renderer::new(
        // SAFETY: 0xb8000 is the well-known physical address of the VGA
        // text buffer, mapped before _start runs. This is the only
        // construction site, so the exclusivity requirement holds.
        unsafe { MmioBuffer::new(CGA_BASE as *mut u8) },
    ));
}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    use core::fmt::Write;

    use x86_64::instructions::interrupts;

    interrupts::without_interrupts(|| {
        WRITER.lock().write_fmt(args).expect("CGA write_fmt failed");
    });
}
