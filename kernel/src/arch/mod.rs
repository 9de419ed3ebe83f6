//! Architecture support. Only x86_64 is wired up; the CGA text buffer this
//! crate exists to drive is an x86 platform fixture.

#[cfg(target_arch = "x86_64")]
pub mod x86_64;

#[cfg(target_arch = "x86_64")]
pub use x86_64::halt;
