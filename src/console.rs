//! Line-oriented debug console on USART1.

use core::convert::Infallible;

use ufmt::uWrite;

use crate::hal::Uart1;

pub struct Console {
    uart: Uart1,
}

impl Console {
    pub fn new() -> Self {
        Self { uart: Uart1::new() }
    }

    pub fn write_line(&mut self, s: &str) {
        for byte in s.bytes() {
            self.uart.write_byte(byte);
        }
        self.uart.write_byte(b'\r');
        self.uart.write_byte(b'\n');
    }
}

impl uWrite for Console {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        for byte in s.bytes() {
            self.uart.write_byte(byte);
        }
        Ok(())
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
