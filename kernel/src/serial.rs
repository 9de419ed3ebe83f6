// COM1 diagnostic output. Display goes to the CGA buffer; this port only
// carries log records and panic spew for whoever is watching the wire.

use core::fmt;

/// I/O port base of COM1.
const COM1_BASE: u16 = 0x3f8;

#[macro_export]
macro_rules! serial_print {
    ($($arg:tt)*) => {
        $crate::serial::_serial_print(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! serial_println {
    () => ($crate::serial_print!("\n"));
    ($($arg:tt)*) => {
        $crate::serial_print!("{}\n", format_args!($($arg)*))
    };
}

#[doc(hidden)]
pub fn _serial_print(args: fmt::Arguments) {
    use core::fmt::Write;

    use uart_16550::SerialPort;
    use x86_64::instructions::interrupts;

    interrupts::without_interrupts(|| {
        // SAFETY: COM1_BASE is the standard COM1 I/O port base; the UART is
        // either present or the writes land on an unused port range.
        let mut port = unsafe { SerialPort::new(COM1_BASE) };
        port.write_fmt(args).unwrap();
    });
}
