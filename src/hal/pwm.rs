//! Global brightness control: Timer2 fast PWM on OC2 (PB7), which gates
//! the MAX6969 output-enable line.
//!
//! The output is inverting so the duty value reads as "off time": 0 is
//! full brightness, 255 is dark.

use core::marker::PhantomData;

use avr_device::atmega128::TC2;
use embedded_hal::PwmPin;

// TCCR2: fast PWM (WGM21|WGM20), inverting compare output (COM21|COM20)
const FAST_PWM_INVERTING: u8 = 0x78;
const CLK_DIRECT: u8 = 0x01;

pub struct Dimmer {
    _timer: PhantomData<TC2>,
}

impl Dimmer {
    pub fn new() -> Self {
        unsafe {
            let p = TC2::ptr();
            // OC2 pin is PB7; PWM needs it driven as an output.
            (*avr_device::atmega128::PORTB::ptr())
                .ddrb
                .modify(|r, w| w.bits(r.bits() | 0x80));
            (*p).tccr2.write(|w| w.bits(FAST_PWM_INVERTING | CLK_DIRECT));
            (*p).ocr2.write(|w| w.bits(0xFF));
        }
        Self {
            _timer: PhantomData,
        }
    }
}

impl PwmPin for Dimmer {
    type Duty = u8;

    fn enable(&mut self) {
        unsafe {
            (*TC2::ptr())
                .tccr2
                .modify(|r, w| w.bits(r.bits() | FAST_PWM_INVERTING));
        }
    }

    fn disable(&mut self) {
        unsafe {
            // Drop the compare output; the OE line floats high, tower dark.
            (*TC2::ptr()).tccr2.modify(|r, w| w.bits(r.bits() & !0x30));
        }
    }

    fn get_duty(&self) -> u8 {
        unsafe { (*TC2::ptr()).ocr2.read().bits() }
    }

    fn get_max_duty(&self) -> u8 {
        255
    }

    fn set_duty(&mut self, duty: u8) {
        unsafe {
            (*TC2::ptr()).ocr2.write(|w| w.bits(duty));
        }
    }
}

impl Default for Dimmer {
    fn default() -> Self {
        Self::new()
    }
}
