//! Timer0 as the scheduler's tick source.

use core::marker::PhantomData;

use avr_device::atmega128::TC0;

/// With the /64 prescaler at 16 MHz the 8-bit counter overflows every
/// 1.024 ms, which is the scheduler tick period.
const PRESCALER_64: u8 = 0x04;

pub struct TickTimer {
    _timer: PhantomData<TC0>,
}

impl TickTimer {
    /// Start free-running overflows and unmask the overflow interrupt.
    /// The handler lives in [`crate::scheduler::isr`].
    pub fn start() -> Self {
        unsafe {
            let p = TC0::ptr();
            (*p).tcnt0.write(|w| w.bits(0));
            (*p).tccr0.write(|w| w.bits(PRESCALER_64));
            (*p).timsk.modify(|r, w| w.bits(r.bits() | 0x01));
        }
        Self {
            _timer: PhantomData,
        }
    }
}
