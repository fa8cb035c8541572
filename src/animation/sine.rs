use crate::tower::{Outcome, Tower};

use super::patterns;
use super::Animation;

/// Sine trace rolling down the tower forever.
pub struct SineWave;

impl Animation for SineWave {
    fn run(&mut self, tower: &mut dyn Tower) -> Outcome {
        tower.set_brightness(240);
        tower.frame().load(&patterns::SINE);
        tower.flush()?;

        loop {
            tower.frame().shift_down();
            tower.flush()?;
            tower.delay_ms(80)?;
        }
    }
}
