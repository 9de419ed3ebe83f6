pub mod vga;

use x86_64::instructions::{hlt, interrupts};

/// Park the CPU. Interrupts stay disabled; nothing is expected to wake us.
pub fn halt() -> ! {
    interrupts::disable();
    loop {
        hlt();
    }
}
