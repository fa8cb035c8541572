//! Ambient light input: an LDR divider on ADC7.

use core::marker::PhantomData;

use avr_device::atmega128::ADC;

pub struct Ldr {
    _adc: PhantomData<ADC>,
}

impl Ldr {
    pub fn new() -> Self {
        unsafe {
            let p = ADC::ptr();
            // Enable, prescaler /128 (125 kHz @ 16 MHz)
            (*p).adcsra.write(|w| w.bits(0x87));
            // AVCC reference, channel 7
            (*p).admux.write(|w| w.bits(0x47));
        }
        Self { _adc: PhantomData }
    }

    /// One blocking conversion, scaled to the 8-bit range the dimmer
    /// speaks.
    ///
    /// TODO: feed this into the global duty cycle once the LDR is fitted
    /// to the production boards.
    pub fn read(&mut self) -> u8 {
        unsafe {
            let p = ADC::ptr();
            // Start conversion and wait it out
            (*p).adcsra.modify(|r, w| w.bits(r.bits() | 0x40));
            while (*p).adcsra.read().bits() & 0x40 != 0 {}

            // ADCL first, then ADCH
            let low = (*p).adcl.read().bits() as u16;
            let high = (*p).adch.read().bits() as u16;
            (((high << 8) | low) / 4) as u8
        }
    }
}

impl Default for Ldr {
    fn default() -> Self {
        Self::new()
    }
}
