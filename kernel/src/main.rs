//! hello64 freestanding entrypoint.
//!
//! The external boot stage loads the flat ELF64 image, places `.text`,
//! `.data` and `.bss`, sets up a stack and jumps straight to [`_start`]
//! with no runtime initialization of any kind. We print the greeting into
//! the CGA text buffer and park the CPU.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
use core::panic::PanicInfo;

#[cfg(target_os = "none")]
use hello64_kernel::{arch, logger, println, GREETING};

#[cfg(target_os = "none")]
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    println!("[KERNEL PANIC] {}", info);
    arch::halt();
}

#[cfg(target_os = "none")]
#[no_mangle]
pub extern "C" fn _start() -> ! {
    logger::init();
    log::info!("hello64 kernel v{}", env!("CARGO_PKG_VERSION"));

    let scanned = arch::x86_64::vga::WRITER.lock().print_bytes(GREETING);
    log::info!("greeting on screen, {} bytes scanned", scanned);

    arch::halt();
}

// Hosted builds (tests, tooling) have nothing to run; the real entrypoint
// only exists for target_os = "none".
#[cfg(not(target_os = "none"))]
fn main() {}
