//! Fault taxonomy for the firmware core

/// A specialized result type for tower operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Faults the core can report.
///
/// There is no recovery machinery behind these: the dispatch loop logs the
/// fault and keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ufmt::derive::uDebug)]
pub enum Error {
    /// Pixel address outside the 16-layer x 32-LED grid.
    IndexOutOfRange,
    /// The display bus never signalled transmit-complete within the spin
    /// budget.
    PeripheralTimeout,
    /// The serial peripheral rejected a byte outright.
    SerialBus,
    /// The latch strobe pin could not be driven.
    LatchPin,
}
