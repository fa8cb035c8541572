use crate::config::LAYERS;
use crate::tower::{Outcome, Tower};

use super::Animation;

/// Two-phase vertical sweep: a quick fill-and-wipe climbing the tower,
/// then a slower one falling back down.
pub struct VerticalSweep;

impl Animation for VerticalSweep {
    fn run(&mut self, tower: &mut dyn Tower) -> Outcome {
        tower.set_brightness(240);

        for on in [true, false] {
            for layer in 0..LAYERS {
                tower.frame().set_row(layer, on)?;
                tower.flush()?;
                tower.delay_ms(15)?;
            }
        }

        for on in [true, false] {
            for layer in (0..LAYERS).rev() {
                tower.frame().set_row(layer, on)?;
                tower.flush()?;
                tower.delay_ms(80)?;
            }
        }
        Ok(())
    }
}
