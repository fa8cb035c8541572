//! The two USARTs: USART0 clocks the display chain in synchronous master
//! mode, USART1 is the plain asynchronous console.

use core::convert::Infallible;
use core::marker::PhantomData;

use avr_device::atmega128::{USART0, USART1};
use embedded_hal::serial::Write;

use crate::config::{BUS_BAUD, CONSOLE_BAUD, CPU_FREQ_HZ};

// UCSRnA flag bits
const UDRE: u8 = 0x20;
const TXC: u8 = 0x40;

/// USART0 as the byte-serial feed of the MAX6969 chain: synchronous
/// master, TX only, data clocked out on the falling XCK edge.
pub struct DisplayBus {
    _usart: PhantomData<USART0>,
}

impl DisplayBus {
    pub fn new() -> Self {
        // Synchronous master: baud = fosc / (2 * (UBRR + 1))
        let ubrr = (CPU_FREQ_HZ / (2 * BUS_BAUD) - 1) as u16;
        unsafe {
            let p = USART0::ptr();
            // XCK0 (PE2) has to be an output for master mode.
            (*avr_device::atmega128::PORTE::ptr())
                .ddre
                .modify(|r, w| w.bits(r.bits() | 0x04));

            (*p).ubrr0h.write(|w| w.bits((ubrr >> 8) as u8));
            (*p).ubrr0l.write(|w| w.bits(ubrr as u8));
            // Synchronous mode, 8 data bits, falling-edge sampling
            (*p).ucsr0c.write(|w| w.bits(0x47));
            // Transmitter only; the chain never talks back
            (*p).ucsr0b.write(|w| w.bits(0x08));
        }
        Self {
            _usart: PhantomData,
        }
    }
}

impl Write<u8> for DisplayBus {
    type Error = Infallible;

    fn write(&mut self, word: u8) -> nb::Result<(), Infallible> {
        unsafe {
            let p = USART0::ptr();
            if (*p).ucsr0a.read().bits() & UDRE == 0 {
                return Err(nb::Error::WouldBlock);
            }
            (*p).udr0.write(|w| w.bits(word));
        }
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Infallible> {
        unsafe {
            let p = USART0::ptr();
            // TXC rises once the shift register has drained.
            if (*p).ucsr0a.read().bits() & TXC == 0 {
                return Err(nb::Error::WouldBlock);
            }
        }
        Ok(())
    }
}

impl Default for DisplayBus {
    fn default() -> Self {
        Self::new()
    }
}

/// USART1 transmit side, 8N1 at the console baud rate.
pub struct Uart1 {
    _usart: PhantomData<USART1>,
}

impl Uart1 {
    pub fn new() -> Self {
        let ubrr = (CPU_FREQ_HZ / (16 * CONSOLE_BAUD) - 1) as u16;
        unsafe {
            let p = USART1::ptr();
            (*p).ubrr1h.write(|w| w.bits((ubrr >> 8) as u8));
            (*p).ubrr1l.write(|w| w.bits(ubrr as u8));
            // 8 data bits, no parity, one stop bit
            (*p).ucsr1c.write(|w| w.bits(0x06));
            (*p).ucsr1b.write(|w| w.bits(0x08));
        }
        Self {
            _usart: PhantomData,
        }
    }

    pub fn write_byte(&mut self, byte: u8) {
        unsafe {
            let p = USART1::ptr();
            while (*p).ucsr1a.read().bits() & UDRE == 0 {}
            (*p).udr1.write(|w| w.bits(byte));
        }
    }
}

impl Default for Uart1 {
    fn default() -> Self {
        Self::new()
    }
}
