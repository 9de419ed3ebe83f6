//! CGA text-mode renderer.
//!
//! The renderer owns a byte-granular cursor into a framebuffer of
//! (character, attribute) pairs and knows how to scan a null-terminated
//! byte string into it. It is generic over the [`FrameBuffer`] sink so the
//! same code drives the memory-mapped hardware buffer on bare metal and a
//! plain byte slice in tests.
//!
//! The cursor counts bytes, not cells: every visible character advances it
//! by 2 (one character byte, one attribute byte), so it is always even. A
//! newline performs a hard reset to the start of the next logical line,
//! computed from the absolute line index:
//!
//! ```text
//! line   = cursor / (80 * 2)
//! cursor = (line + 1) * (80 * 2)
//! ```
//!
//! The cursor is deliberately not clamped to the screen extent; writes past
//! the mapped region are the caller's problem, matching the hardware
//! contract.

use core::fmt;

/// Screen width in character cells.
pub const SCREEN_WIDTH: usize = 80;

/// Bytes per logical line (each cell is a character/attribute byte pair).
pub const LINE_STRIDE: usize = SCREEN_WIDTH * 2;

/// Row the cursor starts on. Rows above are left alone so boot-stage
/// diagnostics already on screen survive the greeting.
pub const INITIAL_ROW: usize = 6;

/// Byte offset of row [`INITIAL_ROW`], column 0.
pub const INITIAL_CURSOR: usize = INITIAL_ROW * LINE_STRIDE;

/// VGA text-mode color palette. Not all variants are used but the full
/// 16-color palette is defined per the VGA specification.
#[allow(dead_code)] // Full VGA color palette per specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

/// One attribute byte: `(background << 4) | foreground`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    pub const fn new(foreground: Color, background: Color) -> ColorCode {
        ColorCode(((background as u8) << 4) | (foreground as u8))
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

/// Attribute the renderer stamps on every cell: white on blue, 0x1F.
pub const ATTRIBUTE: ColorCode = ColorCode::new(Color::White, Color::Blue);

/// Byte-granular sink for character/attribute pairs.
///
/// Implementations decide what an out-of-range `offset` means: the
/// memory-mapped hardware buffer treats it as undefined behavior, the slice
/// implementation panics. The renderer never checks.
pub trait FrameBuffer {
    /// Write one byte at `offset` bytes from the start of the buffer.
    fn store(&mut self, offset: usize, value: u8);
}

impl FrameBuffer for &mut [u8] {
    fn store(&mut self, offset: usize, value: u8) {
        self[offset] = value;
    }
}

/// Text renderer: a framebuffer plus the cursor threading print calls.
pub struct Renderer<B: FrameBuffer> {
    buffer: B,
    cursor: usize,
    attribute: ColorCode,
}

impl<B: FrameBuffer> Renderer<B> {
    /// Renderer with the cursor parked at row [`INITIAL_ROW`], column 0.
    pub fn new(buffer: B) -> Renderer<B> {
        Renderer::with_cursor(buffer, INITIAL_CURSOR)
    }

    /// Renderer with an explicit starting cursor. `cursor` is a byte offset
    /// and must be even (cells are written as whole pairs).
    pub fn with_cursor(buffer: B, cursor: usize) -> Renderer<B> {
        debug_assert!(cursor % 2 == 0);
        Renderer {
            buffer,
            cursor,
            attribute: ATTRIBUTE,
        }
    }

    /// Current cursor, in bytes from the start of the framebuffer.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The underlying sink. Tests use this to inspect what was written.
    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    /// Render one byte: newline resets the cursor to the next line start,
    /// anything else becomes a cell at the cursor.
    pub fn put_byte(&mut self, byte: u8) {
        match byte {
            b'\n' => self.line_feed(),
            byte => {
                self.buffer.store(self.cursor, byte);
                self.cursor += 1;
                self.buffer.store(self.cursor, self.attribute.as_u8());
                self.cursor += 1;
            }
        }
    }

    /// Hard reset to the start of the next logical line. Based on the
    /// absolute line index, not the current column, so a newline at column 0
    /// still advances exactly one line.
    fn line_feed(&mut self) {
        let line = self.cursor / LINE_STRIDE;
        self.cursor = (line + 1) * LINE_STRIDE;
    }

    /// Scan `msg` up to and including its `0` terminator, rendering every
    /// byte before it. Stops at the end of the slice if no terminator is
    /// present. Returns the number of bytes scanned, terminator included.
    pub fn print_bytes(&mut self, msg: &[u8]) -> usize {
        let mut scanned = 0;
        for &byte in msg {
            scanned += 1;
            if byte == 0 {
                break;
            }
            self.put_byte(byte);
        }
        scanned
    }

    /// Unbounded variant of [`print_bytes`](Renderer::print_bytes): scans
    /// from `msg` until a `0` terminator, with no length limit. Returns the
    /// number of bytes scanned, terminator included.
    ///
    /// # Safety
    ///
    /// `msg` must point to a byte sequence containing a `0` terminator, and
    /// every byte up to and including the terminator must be readable. A
    /// missing terminator means the scan runs off the end of the allocation,
    /// which is undefined behavior.
    pub unsafe fn print_nul_terminated(&mut self, msg: *const u8) -> usize {
        let mut scanned = 0;
        loop {
            // SAFETY: the caller guarantees a terminator within readable
            // memory, so msg + scanned stays inside the sequence until the
            // loop breaks.
            let byte = unsafe { msg.add(scanned).read() };
            scanned += 1;
            if byte == 0 {
                break;
            }
            self.put_byte(byte);
        }
        scanned
    }
}

impl<B: FrameBuffer> fmt::Write for Renderer<B> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            self.put_byte(byte);
        }
        Ok(())
    }
}
