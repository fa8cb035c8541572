//! The tower's playlist: one routine per catalog slot, dispatched by index.
//!
//! Every routine follows the same contract: it gets exclusive access to a
//! [`Tower`], mutates the frame and flushes between timed delays, and most
//! never finish on their own. The delay/flush calls double as cancellation
//! points, so a pending rotation unwinds the routine back to the dispatch
//! loop within a few milliseconds.

mod arrow;
mod checkerboard;
mod diagonal;
mod hsweep;
mod paparazzi;
pub mod patterns;
mod sine;
mod swirl;
mod text;
mod vsweep;

pub use arrow::ArrowScroll;
pub use checkerboard::Checkerboard;
pub use diagonal::DiagonalSweep;
pub use hsweep::HorizontalSweep;
pub use paparazzi::Paparazzi;
pub use sine::SineWave;
pub use swirl::Swirl;
pub use text::TextScroll;
pub use vsweep::VerticalSweep;

use crate::tower::{Outcome, Tower};

/// One playlist entry.
pub trait Animation {
    /// Drive the tower until the script finishes (the few finite routines)
    /// or a rotation or fault unwinds it.
    fn run(&mut self, tower: &mut dyn Tower) -> Outcome;
}

/// The fixed, ordered set of routines. Owns whatever state individual
/// entries keep between invocations (the diagonal's direction flag).
pub struct Catalog {
    sine: SineWave,
    paparazzi: Paparazzi,
    hsweep: HorizontalSweep,
    diagonal: DiagonalSweep,
    vsweep: VerticalSweep,
    checkerboard: Checkerboard,
    swirl: Swirl,
    arrow: ArrowScroll,
    text: TextScroll,
}

impl Catalog {
    /// Number of playlist entries.
    pub const LEN: u8 = 9;

    pub const fn new() -> Self {
        Self {
            sine: SineWave,
            paparazzi: Paparazzi,
            hsweep: HorizontalSweep,
            diagonal: DiagonalSweep::new(),
            vsweep: VerticalSweep,
            checkerboard: Checkerboard,
            swirl: Swirl,
            arrow: ArrowScroll,
            text: TextScroll,
        }
    }

    /// Run one pass of the indexed routine. The slot order matches the
    /// tower's original playlist wiring.
    pub fn run(&mut self, index: u8, tower: &mut dyn Tower) -> Outcome {
        match index {
            0 => self.sine.run(tower),
            1 => self.paparazzi.run(tower),
            2 => self.hsweep.run(tower),
            3 => self.diagonal.run(tower),
            4 => self.vsweep.run(tower),
            5 => self.checkerboard.run(tower),
            6 => self.swirl.run(tower),
            7 => self.arrow.run(tower),
            8 => self.text.run(tower),
            // The dispatch loop heals the index before calling in; an
            // unknown slot is a no-op pass.
            _ => Ok(()),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::config::{LAYERS, LEDS, RNG_SEED};
    use crate::framebuffer::FrameBuffer;
    use crate::tower::Unwind;

    /// Scripted stand-in for the real tower: records what a routine does
    /// and trips the rotation after a budget of delay milliseconds.
    struct Bench {
        frame: FrameBuffer,
        flushes: u32,
        delays: Vec<u16>,
        brightness: Vec<u8>,
        /// Milliseconds of delay before the rotation comes due.
        fuel_ms: u32,
        rng: SmallRng,
    }

    impl Bench {
        fn with_fuel(fuel_ms: u32) -> Self {
            Self {
                frame: FrameBuffer::new(),
                flushes: 0,
                delays: Vec::new(),
                brightness: Vec::new(),
                fuel_ms,
                rng: SmallRng::seed_from_u64(RNG_SEED),
            }
        }

        fn lit_pixels(&self) -> u32 {
            let mut count = 0;
            for layer in 0..LAYERS {
                for x in 0..LEDS {
                    if self.frame.pixel(layer, x).unwrap() {
                        count += 1;
                    }
                }
            }
            count
        }
    }

    impl Tower for Bench {
        fn frame(&mut self) -> &mut FrameBuffer {
            &mut self.frame
        }

        fn flush(&mut self) -> Outcome {
            if self.fuel_ms == 0 {
                return Err(Unwind::Rotation);
            }
            self.flushes += 1;
            Ok(())
        }

        fn delay_ms(&mut self, ms: u16) -> Outcome {
            self.delays.push(ms);
            if u32::from(ms) >= self.fuel_ms {
                self.fuel_ms = 0;
                return Err(Unwind::Rotation);
            }
            self.fuel_ms -= u32::from(ms);
            Ok(())
        }

        fn set_brightness(&mut self, level: u8) {
            self.brightness.push(level);
        }

        fn random(&mut self, bound: u8) -> u8 {
            self.rng.gen_range(0..bound)
        }
    }

    #[test]
    fn paparazzi_flashes_one_pixel_and_clears_it() {
        let mut bench = Bench::with_fuel(u32::MAX);
        Catalog::new().run(1, &mut bench).unwrap();

        assert_eq!(bench.brightness, [50]);
        // One flash shown, one dark frame shown.
        assert_eq!(bench.flushes, 2);
        assert_eq!(bench.delays, [50, 50]);
        assert_eq!(bench.lit_pixels(), 0);
    }

    #[test]
    fn forever_routines_unwind_when_rotation_fires() {
        // The swirl never returns on its own; a tank of fuel bounds it.
        for index in [0, 6, 7, 8] {
            let mut bench = Bench::with_fuel(10_000);
            assert_eq!(
                Catalog::new().run(index, &mut bench),
                Err(Unwind::Rotation),
                "routine {} ignored the rotation",
                index
            );
        }
    }

    #[test]
    fn finite_routines_finish_with_enough_fuel() {
        for index in [1, 2, 3, 4, 5] {
            let mut bench = Bench::with_fuel(u32::MAX);
            assert_eq!(Catalog::new().run(index, &mut bench), Ok(()));
        }
    }

    #[test]
    fn unknown_slot_is_a_no_op() {
        let mut bench = Bench::with_fuel(u32::MAX);
        assert_eq!(Catalog::new().run(Catalog::LEN, &mut bench), Ok(()));
        assert_eq!(bench.flushes, 0);
    }

    #[test]
    fn diagonal_alternates_direction_between_invocations() {
        let mut catalog = Catalog::new();

        let mut first = Bench::with_fuel(u32::MAX);
        catalog.run(3, &mut first).unwrap();
        let mut second = Bench::with_fuel(u32::MAX);
        catalog.run(3, &mut second).unwrap();
        let mut third = Bench::with_fuel(u32::MAX);
        catalog.run(3, &mut third).unwrap();

        // Successive runs walk opposite diagonals, so their delay scripts
        // differ; every second run repeats.
        assert_ne!(first.delays, second.delays);
        assert_eq!(first.delays, third.delays);
    }

    #[test]
    fn arrow_delays_follow_the_easing_curve() {
        let mut bench = Bench::with_fuel(50_000);
        assert_eq!(Catalog::new().run(7, &mut bench), Err(Unwind::Rotation));

        // Ease-out: 80 down to 11, then the fast run of 10s, then ease-in
        // climbing from 9.
        let slow_down: Vec<u16> = (11..=80).rev().collect();
        assert!(bench.delays.len() > slow_down.len() + 50);
        assert_eq!(&bench.delays[..slow_down.len()], &slow_down[..]);
        assert!(bench.delays[slow_down.len()..slow_down.len() + 50]
            .iter()
            .all(|&ms| ms == 10));
        assert_eq!(bench.delays[slow_down.len() + 50], 9);
    }

    #[test]
    fn sine_wave_scrolls_the_loaded_pattern_downward() {
        let mut bench = Bench::with_fuel(80);
        assert_eq!(Catalog::new().run(0, &mut bench), Err(Unwind::Rotation));

        // After one shift the pattern is the bitmap rotated down a layer.
        let mut expected = FrameBuffer::new();
        expected.load(&patterns::SINE);
        expected.shift_down();
        assert_eq!(bench.frame, expected);
    }
}
