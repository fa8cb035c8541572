use crate::tower::{Outcome, Tower};

use super::patterns;
use super::Animation;

/// Chevrons scrolling sideways forever, surging and settling on an
/// ease-out / ease-in delay curve.
pub struct ArrowScroll;

impl Animation for ArrowScroll {
    fn run(&mut self, tower: &mut dyn Tower) -> Outcome {
        tower.set_brightness(240);
        tower.frame().load(&patterns::ARROWS);

        loop {
            // Pick up speed, hold the sprint, then coast back down.
            for ms in (11..=80).rev() {
                step(tower, ms)?;
            }
            for _ in 0..50 {
                step(tower, 10)?;
            }
            for ms in 9..80 {
                step(tower, ms)?;
            }
        }
    }
}

fn step(tower: &mut dyn Tower, ms: u16) -> Outcome {
    tower.frame().shift_right();
    tower.flush()?;
    tower.delay_ms(ms)?;
    Ok(())
}
