//! hello64 kernel library.
//!
//! A freestanding "hello world" for 64-bit x86: the [`cga`] module renders
//! null-terminated byte strings straight into the VGA text buffer, and the
//! binary's `_start` does exactly that once and halts. The library builds
//! `no_std` for bare metal; under `cfg(test)` it builds hosted so the
//! renderer can be exercised against a simulated framebuffer.

#![cfg_attr(not(test), no_std)]

#[macro_use]
pub mod print;

pub mod arch;
pub mod cga;
#[cfg(target_arch = "x86_64")]
pub mod logger;
#[cfg(target_arch = "x86_64")]
pub mod serial;

pub use cga::{Color, ColorCode, FrameBuffer, Renderer};

/// The message `_start` prints. The numbered steps describe what the
/// external boot stage does to get control here; none of it is implemented
/// in this repository.
pub static GREETING: &[u8] = b"Hello from 64-bit Rust\n \
    1- compile to elf64-x86-64 with script loader\n \
    2- extract .text, .data and .bss\n \
    3- update boot loader to initialize sections\n \
    4- jump to entrypoint\0";
