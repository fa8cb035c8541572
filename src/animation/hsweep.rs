use crate::config::{LAYERS, LEDS};
use crate::tower::{Outcome, Tower};

use super::Animation;

/// Random sparkle across the middle columns, then a column wipe running
/// into the center and back out.
pub struct HorizontalSweep;

impl Animation for HorizontalSweep {
    fn run(&mut self, tower: &mut dyn Tower) -> Outcome {
        tower.set_brightness(240);
        tower.frame().clear();

        for _ in 0..40 {
            let layer = tower.random(LAYERS as u8) as usize;
            // Sparkle stays on columns 4..=28, away from the seam.
            let x = 4 + tower.random(25) as usize;
            tower.frame().set_pixel(layer, x, true)?;
            tower.flush()?;
            tower.delay_ms(50)?;
        }
        tower.delay_ms(500)?;

        for x in 0..LEDS / 2 {
            pulse_pair(tower, x)?;
        }
        for x in (0..LEDS / 2).rev() {
            pulse_pair(tower, x)?;
        }
        Ok(())
    }
}

/// Light column `x` and its mirror together for one beat.
fn pulse_pair(tower: &mut dyn Tower, x: usize) -> Outcome {
    let mirror = (LEDS - 1) - x;

    tower.frame().set_column(x, true)?;
    tower.frame().set_column(mirror, true)?;
    tower.flush()?;
    tower.delay_ms(40)?;

    tower.frame().set_column(x, false)?;
    tower.frame().set_column(mirror, false)?;
    tower.flush()?;
    Ok(())
}
