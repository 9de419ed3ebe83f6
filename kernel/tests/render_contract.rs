//! End-to-end renderer checks against a simulated framebuffer.
//!
//! There is no OS to run the real buffer under, so a byte slice stands in
//! for the mapped region and the public API is driven exactly the way the
//! entrypoint drives the hardware writer.

use hello64_kernel::cga::{INITIAL_CURSOR, INITIAL_ROW, LINE_STRIDE};
use hello64_kernel::{Renderer, GREETING};

const ROWS: usize = 25;

fn screen() -> Vec<u8> {
    vec![0u8; LINE_STRIDE * ROWS]
}

/// Decode the characters of one on-screen row, trimming trailing blanks.
fn row_text(cells: &[u8], row: usize) -> String {
    let line = &cells[row * LINE_STRIDE..(row + 1) * LINE_STRIDE];
    let text: String = line.chunks(2).map(|pair| pair[0] as char).collect();
    text.trim_end_matches('\0').to_string()
}

#[test]
fn greeting_lands_on_row_six() {
    let mut cells = screen();
    let mut renderer = Renderer::new(&mut cells[..]);
    let scanned = renderer.print_bytes(GREETING);

    assert_eq!(scanned, GREETING.len());
    drop(renderer);

    assert_eq!(row_text(&cells, INITIAL_ROW), "Hello from 64-bit Rust");
    assert_eq!(
        row_text(&cells, INITIAL_ROW + 1),
        " 1- compile to elf64-x86-64 with script loader"
    );
    assert_eq!(
        row_text(&cells, INITIAL_ROW + 4),
        " 4- jump to entrypoint"
    );
}

#[test]
fn greeting_cells_all_carry_white_on_blue() {
    let mut cells = screen();
    let mut renderer = Renderer::new(&mut cells[..]);
    renderer.print_bytes(GREETING);
    drop(renderer);

    for pair in cells.chunks(2) {
        if pair[0] != 0 {
            assert_eq!(pair[1], 0x1f);
        }
    }
}

#[test]
fn cursor_threads_across_calls_like_one_call() {
    let mut cells = screen();
    let mut renderer = Renderer::new(&mut cells[..]);

    renderer.print_bytes(b"boot ok\0");
    let mid = renderer.cursor();
    assert_eq!(mid, INITIAL_CURSOR + 14);

    renderer.print_bytes(b"\nnext line\0");
    assert_eq!(renderer.cursor(), (INITIAL_ROW + 1) * LINE_STRIDE + 18);
}

#[test]
fn buffer_accessor_sees_writes_in_place() {
    let mut cells = screen();
    let mut renderer = Renderer::new(&mut cells[..]);
    renderer.print_bytes(b"X\0");

    let written = renderer.buffer();
    assert_eq!(written[INITIAL_CURSOR], b'X');
    assert_eq!(written[INITIAL_CURSOR + 1], 0x1f);
}

#[test]
fn greeting_is_nul_terminated() {
    // The unbounded print variant depends on this terminator being there.
    assert_eq!(GREETING.last(), Some(&0));
    assert_eq!(GREETING.iter().filter(|&&b| b == 0).count(), 1);
}
