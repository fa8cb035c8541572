//! Register-level drivers for the tower's ATmega128 board.
//!
//! Everything here implements the `embedded-hal` traits the core consumes,
//! so the rest of the firmware never sees a register.

pub mod adc;
pub mod delay;
pub mod gpio;
pub mod pwm;
pub mod timer;
pub mod usart;

// Re-export commonly used types
pub use adc::Ldr;
pub use delay::CycleDelay;
pub use gpio::{Input, Output, Pin};
pub use pwm::Dimmer;
pub use timer::TickTimer;
pub use usart::{DisplayBus, Uart1};
