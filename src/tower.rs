//! The surface an animation drives: frame buffer, display flush, delays,
//! global brightness, and randomness.
//!
//! Animations never see registers or pins. They get exclusive `&mut`
//! access to something implementing [`Tower`] for their whole run, which is
//! also what makes the single-writer rule hold: one animation at a time,
//! and the timer interrupt never touches the frame or the bus.

use embedded_hal::blocking::delay::{DelayMs, DelayUs};
use embedded_hal::digital::v2::OutputPin;
use embedded_hal::serial::Write;
use embedded_hal::PwmPin;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::display::Transmitter;
use crate::errors::Error;
use crate::framebuffer::FrameBuffer;
use crate::scheduler::RotationFlag;

/// Why an animation handed control back before its script finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unwind {
    /// The scheduler's rotation fired; the dispatch loop should pick up
    /// the next catalog entry.
    Rotation,
    /// The hardware failed underneath the animation.
    Fault(Error),
}

impl From<Error> for Unwind {
    fn from(fault: Error) -> Self {
        Unwind::Fault(fault)
    }
}

/// Result of driving the tower one step; `?` on this is what unwinds an
/// animation's loops back to the dispatch checkpoint.
pub type Outcome = core::result::Result<(), Unwind>;

/// Everything an animation may do to the tower.
pub trait Tower {
    /// The pixel grid, for mutation in place.
    fn frame(&mut self) -> &mut FrameBuffer;

    /// Push the current grid out to the drivers.
    ///
    /// Also a cancellation point: a pending rotation unwinds here before
    /// any byte is clocked out.
    fn flush(&mut self) -> Outcome;

    /// Wait, one millisecond slice at a time, polling for rotation between
    /// slices. A pending rotation unwinds at most one slice late.
    fn delay_ms(&mut self, ms: u16) -> Outcome;

    /// Global driver duty for the whole tower: 0 is full brightness, 255
    /// is dark.
    fn set_brightness(&mut self, level: u8);

    /// Uniform random value in `0..bound`.
    fn random(&mut self, bound: u8) -> u8;
}

/// The real tower: frame buffer plus the board peripherals behind it.
pub struct LedTower<TX, LE, D, P, F> {
    frame: FrameBuffer,
    link: Transmitter<TX, LE, D>,
    delay: D,
    dimmer: P,
    rng: SmallRng,
    rotation: F,
}

impl<TX, LE, D, P, F> LedTower<TX, LE, D, P, F>
where
    TX: Write<u8>,
    LE: OutputPin,
    D: DelayMs<u16> + DelayUs<u16>,
    P: PwmPin<Duty = u8>,
    F: RotationFlag,
{
    pub fn new(link: Transmitter<TX, LE, D>, delay: D, dimmer: P, rng: SmallRng, rotation: F) -> Self {
        Self {
            frame: FrameBuffer::new(),
            link,
            delay,
            dimmer,
            rng,
            rotation,
        }
    }
}

impl<TX, LE, D, P, F> Tower for LedTower<TX, LE, D, P, F>
where
    TX: Write<u8>,
    LE: OutputPin,
    D: DelayMs<u16> + DelayUs<u16>,
    P: PwmPin<Duty = u8>,
    F: RotationFlag,
{
    fn frame(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    fn flush(&mut self) -> Outcome {
        if self.rotation.is_due() {
            return Err(Unwind::Rotation);
        }
        self.link.flush(&self.frame)?;
        Ok(())
    }

    fn delay_ms(&mut self, ms: u16) -> Outcome {
        for _ in 0..ms {
            if self.rotation.is_due() {
                return Err(Unwind::Rotation);
            }
            self.delay.delay_ms(1);
        }
        Ok(())
    }

    fn set_brightness(&mut self, level: u8) {
        self.dimmer.set_duty(level);
    }

    fn random(&mut self, bound: u8) -> u8 {
        self.rng.gen_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::cell::Cell;
    use std::rc::Rc;

    use embedded_hal_mock::pin::Mock as PinMock;
    use embedded_hal_mock::serial::Mock as SerialMock;
    use rand::SeedableRng;

    use super::*;
    use crate::config::RNG_SEED;

    /// Rotation flag that comes due after a fixed number of polls.
    #[derive(Clone)]
    struct FuseFlag {
        polls_left: Rc<Cell<u32>>,
    }

    impl FuseFlag {
        fn new(polls: u32) -> Self {
            Self {
                polls_left: Rc::new(Cell::new(polls)),
            }
        }
    }

    impl RotationFlag for FuseFlag {
        fn is_due(&self) -> bool {
            let left = self.polls_left.get();
            if left == 0 {
                return true;
            }
            self.polls_left.set(left - 1);
            false
        }
    }

    /// Counts delay slices instead of sleeping.
    #[derive(Clone, Default)]
    struct SliceCounter(Rc<Cell<u32>>);

    impl DelayMs<u16> for SliceCounter {
        fn delay_ms(&mut self, ms: u16) {
            self.0.set(self.0.get() + u32::from(ms));
        }
    }

    impl DelayUs<u16> for SliceCounter {
        fn delay_us(&mut self, _us: u16) {}
    }

    struct DimmerStub(u8);

    impl PwmPin for DimmerStub {
        type Duty = u8;

        fn disable(&mut self) {}
        fn enable(&mut self) {}
        fn get_duty(&self) -> u8 {
            self.0
        }
        fn get_max_duty(&self) -> u8 {
            255
        }
        fn set_duty(&mut self, duty: u8) {
            self.0 = duty;
        }
    }

    fn tower_with_fuse(
        polls: u32,
    ) -> (
        LedTower<SerialMock<u8>, PinMock, SliceCounter, DimmerStub, FuseFlag>,
        SliceCounter,
    ) {
        let slices = SliceCounter::default();
        let link = Transmitter::new(SerialMock::new(&[]), PinMock::new(&[]), slices.clone());
        let tower = LedTower::new(
            link,
            slices.clone(),
            DimmerStub(0),
            SmallRng::seed_from_u64(RNG_SEED),
            FuseFlag::new(polls),
        );
        (tower, slices)
    }

    #[test]
    fn delay_unwinds_as_soon_as_rotation_is_due() {
        let (mut tower, slices) = tower_with_fuse(3);
        assert_eq!(tower.delay_ms(100), Err(Unwind::Rotation));
        // Three slices slept, then the pending rotation cut the wait short.
        assert_eq!(slices.0.get(), 3);
    }

    #[test]
    fn delay_runs_to_completion_without_rotation() {
        let (mut tower, slices) = tower_with_fuse(1_000);
        assert_eq!(tower.delay_ms(25), Ok(()));
        assert_eq!(slices.0.get(), 25);
    }

    #[test]
    fn flush_is_a_cancellation_point() {
        let (mut tower, _) = tower_with_fuse(0);
        // No serial transactions are expected on the mock: the pending
        // rotation has to unwind before any byte is clocked out.
        assert_eq!(tower.flush(), Err(Unwind::Rotation));
    }

    #[test]
    fn random_stays_in_bounds() {
        let (mut tower, _) = tower_with_fuse(u32::MAX);
        for _ in 0..1_000 {
            assert!(tower.random(16) < 16);
        }
    }
}
