use core::convert::Infallible;
use core::marker::PhantomData;

use avr_device::atmega128::{PORTB, PORTC, PORTD, PORTE};
use embedded_hal::digital::v2::OutputPin;

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

/// A single typed port pin. Pins come up as `Input` (the reset state) and
/// are claimed with [`Pin::into_output`].
pub struct Pin<PORT, const P: u8, MODE> {
    _port: PhantomData<PORT>,
    _mode: PhantomData<MODE>,
}

impl<PORT, const P: u8> Pin<PORT, P, Input> {
    pub const fn new() -> Self {
        Pin {
            _port: PhantomData,
            _mode: PhantomData,
        }
    }
}

// Internal trait for port register access
trait PortOps {
    /// Set or clear the DDR bit for this pin.
    fn direction(output: bool);
    /// Drive the PORT bit for this pin.
    fn drive(high: bool);
}

macro_rules! impl_port {
    ($PORT:ident, $port:ident, $ddr:ident) => {
        impl<const P: u8, MODE> PortOps for Pin<$PORT, P, MODE> {
            fn direction(output: bool) {
                unsafe {
                    (*$PORT::ptr()).$ddr.modify(|r, w| {
                        if output {
                            w.bits(r.bits() | (1 << P))
                        } else {
                            w.bits(r.bits() & !(1 << P))
                        }
                    });
                }
            }

            fn drive(high: bool) {
                unsafe {
                    (*$PORT::ptr()).$port.modify(|r, w| {
                        if high {
                            w.bits(r.bits() | (1 << P))
                        } else {
                            w.bits(r.bits() & !(1 << P))
                        }
                    });
                }
            }
        }
    };
}

impl_port!(PORTB, portb, ddrb);
impl_port!(PORTC, portc, ddrc);
impl_port!(PORTD, portd, ddrd);
impl_port!(PORTE, porte, ddre);

impl<PORT, const P: u8> Pin<PORT, P, Input>
where
    Pin<PORT, P, Input>: PortOps,
    Pin<PORT, P, Output>: PortOps,
{
    pub fn into_output(self) -> Pin<PORT, P, Output> {
        <Pin<PORT, P, Output> as PortOps>::direction(true);
        Pin {
            _port: PhantomData,
            _mode: PhantomData,
        }
    }
}

impl<PORT, const P: u8> OutputPin for Pin<PORT, P, Output>
where
    Self: PortOps,
{
    type Error = Infallible;

    fn set_high(&mut self) -> Result<(), Infallible> {
        Self::drive(true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Infallible> {
        Self::drive(false);
        Ok(())
    }
}

// Tower board pin map
pub mod board {
    use super::*;

    /// Latch strobe for the MAX6969 chain.
    pub type LatchStrobe = Pin<PORTC, 7, Input>;
}
