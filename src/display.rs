//! Serializer for the MAX6969 shift-register chain.
//!
//! One refresh clocks all 64 buffer bytes out in layer order (layer 0
//! first, 4 bytes each), then pulses the latch strobe to commit the shifted
//! bits to the driver outputs in one go.

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;
use embedded_hal::serial::Write;

use crate::config::BUS_SPIN_LIMIT;
use crate::errors::{Error, Result};
use crate::framebuffer::FrameBuffer;

/// Latch hold time. The MAX6969 datasheet asks for >= 310 ns; one
/// microsecond is the shortest the delay trait can promise.
pub const LATCH_HOLD_US: u16 = 1;

/// Owns the display bus: the synchronous serial peripheral plus the latch
/// strobe pin.
pub struct Transmitter<TX, LE, D> {
    bus: TX,
    latch: LE,
    delay: D,
}

impl<TX, LE, D> Transmitter<TX, LE, D>
where
    TX: Write<u8>,
    LE: OutputPin,
    D: DelayUs<u16>,
{
    pub fn new(bus: TX, latch: LE, delay: D) -> Self {
        Self { bus, latch, delay }
    }

    /// Push the whole frame out and latch it.
    ///
    /// Blocks until every byte has left the shift register. A peripheral
    /// that never reports ready fails with [`Error::PeripheralTimeout`]
    /// once the spin budget runs out instead of hanging the tower.
    pub fn flush(&mut self, frame: &FrameBuffer) -> Result<()> {
        for layer in frame.layers() {
            for &byte in layer {
                self.send(byte)?;
            }
        }
        // Let the last byte clear the shift register before latching.
        self.drain()?;

        self.latch.set_high().map_err(|_| Error::LatchPin)?;
        self.delay.delay_us(LATCH_HOLD_US);
        self.latch.set_low().map_err(|_| Error::LatchPin)?;
        Ok(())
    }

    fn send(&mut self, byte: u8) -> Result<()> {
        let mut budget = BUS_SPIN_LIMIT;
        loop {
            match self.bus.write(byte) {
                Ok(()) => return Ok(()),
                Err(nb::Error::Other(_)) => return Err(Error::SerialBus),
                Err(nb::Error::WouldBlock) => {
                    budget -= 1;
                    if budget == 0 {
                        return Err(Error::PeripheralTimeout);
                    }
                }
            }
        }
    }

    fn drain(&mut self) -> Result<()> {
        let mut budget = BUS_SPIN_LIMIT;
        loop {
            match self.bus.flush() {
                Ok(()) => return Ok(()),
                Err(nb::Error::Other(_)) => return Err(Error::SerialBus),
                Err(nb::Error::WouldBlock) => {
                    budget -= 1;
                    if budget == 0 {
                        return Err(Error::PeripheralTimeout);
                    }
                }
            }
        }
    }
}
