use crate::tower::{Outcome, Tower};

use super::patterns;
use super::Animation;

/// Lettering circling the tower forever.
pub struct TextScroll;

impl Animation for TextScroll {
    fn run(&mut self, tower: &mut dyn Tower) -> Outcome {
        tower.set_brightness(240);
        tower.frame().load(&patterns::TEXT);

        loop {
            tower.frame().shift_right();
            tower.flush()?;
            tower.delay_ms(60)?;
        }
    }
}
