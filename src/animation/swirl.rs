use crate::tower::{Outcome, Tower};

use super::patterns;
use super::Animation;

/// Helical bars spinning by scrolling the stack downward forever.
pub struct Swirl;

impl Animation for Swirl {
    fn run(&mut self, tower: &mut dyn Tower) -> Outcome {
        tower.set_brightness(240);
        tower.frame().load(&patterns::SWIRL);

        loop {
            tower.frame().shift_down();
            tower.flush()?;
            tower.delay_ms(70)?;
        }
    }
}
