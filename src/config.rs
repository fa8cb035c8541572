//! Configuration constants for the LED tower firmware

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// Height of the tower in layers
pub const LAYERS: usize = 16;

/// LEDs per layer
pub const LEDS: usize = 32;

/// Bytes per layer on the shift-register chain
pub const BYTES: usize = 4;

/// Display bus bit rate (USART0 in synchronous master mode)
pub const BUS_BAUD: u32 = 1_000_000;

/// Console baud rate (USART1)
pub const CONSOLE_BAUD: u32 = 9600;

/// Scheduler tick period in microseconds (Timer0 overflow, 16 MHz / 64 / 256)
pub const TICK_PERIOD_US: u32 = 1024;

/// Ticks between animation changes: 15531 ticks of 1.024 ms, about 16 s of
/// wall clock per animation
pub const ROTATION_TICKS: u16 = 15_531;

/// Fixed seed for the animation RNG; the tower replays the same show after
/// every power cycle
pub const RNG_SEED: u64 = 23;

/// Global driver duty at power-on (0 = full brightness, 255 = dark)
pub const POWER_ON_BRIGHTNESS: u8 = 220;

/// Ready-flag spins allowed per byte before the display bus is declared
/// stuck; a healthy byte at 1 Mb/s clears in well under a hundred
pub const BUS_SPIN_LIMIT: u32 = 10_000;
