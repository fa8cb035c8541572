//! Cycle-counted busy delays.
//!
//! Timer0 belongs to the scheduler tick and Timer2 to the dimmer, so
//! delays count instruction cycles instead of borrowing a timer.

use embedded_hal::blocking::delay::{DelayMs, DelayUs};

use crate::config::CPU_FREQ_HZ;

// A nop plus its loop overhead costs about four cycles.
const LOOPS_PER_US: u32 = CPU_FREQ_HZ / 4_000_000;

#[derive(Clone, Copy)]
pub struct CycleDelay;

impl DelayUs<u16> for CycleDelay {
    fn delay_us(&mut self, us: u16) {
        for _ in 0..u32::from(us) * LOOPS_PER_US {
            avr_device::asm::nop();
        }
    }
}

impl DelayMs<u16> for CycleDelay {
    fn delay_ms(&mut self, ms: u16) {
        for _ in 0..ms {
            self.delay_us(1000);
        }
    }
}
