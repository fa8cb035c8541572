use crate::config::{LAYERS, LEDS};
use crate::tower::{Outcome, Tower};

use super::Animation;

/// Diagonal stripes walking the tower, with framing rows at top and
/// bottom. Alternates between the descending and climbing diagonal on
/// successive invocations.
pub struct DiagonalSweep {
    // Survives rotation: the catalog owns this entry for the life of the
    // process.
    climbing: bool,
}

impl DiagonalSweep {
    pub const fn new() -> Self {
        Self { climbing: false }
    }
}

impl Animation for DiagonalSweep {
    fn run(&mut self, tower: &mut dyn Tower) -> Outcome {
        tower.frame().clear();
        tower.set_brightness(240);
        tower.frame().set_row(LAYERS - 1, true)?;
        tower.frame().set_row(0, true)?;
        tower.flush()?;

        if self.climbing {
            for step in 0..LAYERS {
                tower.delay_ms(100)?;
                stripe(tower, step, step)?;
            }
            // Quick scan of the inner rows, up then down.
            for layer in 0..LAYERS - 2 {
                blink_row(tower, layer, 20)?;
            }
            for layer in (1..LAYERS - 1).rev() {
                blink_row(tower, layer, 20)?;
            }
        } else {
            for step in 0..LAYERS {
                tower.delay_ms(100)?;
                stripe(tower, (LAYERS - 1) - step, step)?;
            }
            // Peel the inner rows off from the top.
            for layer in (1..LAYERS - 1).rev() {
                tower.frame().set_row(layer, false)?;
                tower.flush()?;
                tower.delay_ms(100)?;
            }
        }

        self.climbing = !self.climbing;
        Ok(())
    }
}

/// One dot every five columns on `layer`, offset by `step` and clipped at
/// the right edge.
fn stripe(tower: &mut dyn Tower, layer: usize, step: usize) -> Outcome {
    for repeat in 0..6 {
        let x = repeat * 5 + step;
        if x < LEDS {
            tower.frame().set_pixel(layer, x, true)?;
        }
    }
    tower.flush()?;
    Ok(())
}

fn blink_row(tower: &mut dyn Tower, layer: usize, ms: u16) -> Outcome {
    tower.frame().set_row(layer, true)?;
    tower.flush()?;
    tower.delay_ms(ms)?;
    tower.frame().set_row(layer, false)?;
    tower.flush()?;
    Ok(())
}
