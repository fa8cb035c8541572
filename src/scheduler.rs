//! Animation rotation: a tick counter advanced by the periodic timer
//! interrupt, and the flag animations poll to know their time is up.
//!
//! The interrupt handler only ever touches this state. The frame buffer and
//! the display bus belong to the main loop, so no locking is needed beyond
//! the critical section around the counters.

use crate::animation::Catalog;
use crate::config::ROTATION_TICKS;

/// The scheduler's whole state: tick count, current animation index, and
/// the pending-rotation flag.
pub struct Rotation {
    ticks: u16,
    index: u8,
    due: bool,
}

impl Rotation {
    pub const fn new() -> Self {
        Self {
            ticks: 0,
            index: 0,
            due: false,
        }
    }

    /// Advance one timer period. Past the rotation threshold the counter
    /// resets, the index moves to the next catalog entry (wrapping), and
    /// the running animation is asked to unwind.
    pub fn tick(&mut self) {
        self.ticks += 1;
        if self.ticks > ROTATION_TICKS {
            self.ticks = 0;
            self.index = (self.index + 1) % Catalog::LEN;
            self.due = true;
        }
    }

    /// Index of the animation that should be running. An out-of-range
    /// value (cannot happen through [`tick`](Self::tick), but the dispatch
    /// loop stays defensive) heals back to the first entry.
    pub fn current(&mut self) -> u8 {
        if self.index >= Catalog::LEN {
            self.index = 0;
        }
        self.index
    }

    /// True once a rotation is pending and the running animation should
    /// give the dispatch loop back.
    pub fn is_due(&self) -> bool {
        self.due
    }

    /// The dispatch loop is back at its checkpoint; stop unwinding.
    pub fn acknowledge(&mut self) {
        self.due = false;
    }

    #[cfg(test)]
    fn force_index(&mut self, index: u8) {
        self.index = index;
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of the pending-rotation flag, polled by animations at
/// every delay and flush point.
pub trait RotationFlag {
    fn is_due(&self) -> bool;
}

#[cfg(target_arch = "avr")]
pub mod isr {
    //! Board-side rotation state: one shared [`Rotation`] behind the AVR
    //! interrupt mutex, ticked from the Timer0 overflow vector.

    use core::cell::RefCell;

    use avr_device::interrupt::{self, Mutex};

    use super::Rotation;

    static ROTATION: Mutex<RefCell<Rotation>> = Mutex::new(RefCell::new(Rotation::new()));

    // Timer0 runs from the /64 prescaler at 16 MHz: one overflow every
    // 1.024 ms. Nothing else may run in interrupt context.
    #[avr_device::interrupt(atmega128)]
    fn TIMER0_OVF() {
        interrupt::free(|cs| ROTATION.borrow(cs).borrow_mut().tick());
    }

    /// Top of the dispatch loop: clear any pending rotation and return the
    /// index to run next.
    pub fn begin_pass() -> u8 {
        interrupt::free(|cs| {
            let mut rotation = ROTATION.borrow(cs).borrow_mut();
            rotation.acknowledge();
            rotation.current()
        })
    }

    /// Animation-side handle onto the shared flag.
    pub struct SharedRotation;

    impl super::RotationFlag for SharedRotation {
        fn is_due(&self) -> bool {
            interrupt::free(|cs| ROTATION.borrow(cs).borrow().is_due())
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn one_tick_changes_nothing() {
        let mut rotation = Rotation::new();
        rotation.tick();
        assert_eq!(rotation.current(), 0);
        assert!(!rotation.is_due());
    }

    #[test]
    fn crossing_the_threshold_rotates_exactly_once() {
        let mut rotation = Rotation::new();
        for _ in 0..ROTATION_TICKS {
            rotation.tick();
        }
        assert_eq!(rotation.current(), 0);
        assert!(!rotation.is_due());

        // Tick number threshold + 1 fires the rotation and resets the count.
        rotation.tick();
        assert_eq!(rotation.current(), 1);
        assert!(rotation.is_due());

        rotation.acknowledge();
        for _ in 0..ROTATION_TICKS {
            rotation.tick();
        }
        assert_eq!(rotation.current(), 1);
        assert!(!rotation.is_due());
    }

    #[test]
    fn rotations_walk_the_catalog_and_wrap() {
        let mut rotation = Rotation::new();
        for expected in 1..Catalog::LEN {
            for _ in 0..=ROTATION_TICKS {
                rotation.tick();
            }
            assert_eq!(rotation.current(), expected);
        }
        // One more full period wraps back to the first entry.
        for _ in 0..=ROTATION_TICKS {
            rotation.tick();
        }
        assert_eq!(rotation.current(), 0);
    }

    #[test]
    fn out_of_range_index_heals_to_zero() {
        let mut rotation = Rotation::new();
        rotation.force_index(Catalog::LEN + 3);
        assert_eq!(rotation.current(), 0);
    }
}
