use crate::config::{LAYERS, LEDS};
use crate::tower::{Outcome, Tower};

use super::Animation;

/// Camera-flash flicker: the tower dark except for one random LED popping
/// once per pass.
pub struct Paparazzi;

impl Animation for Paparazzi {
    fn run(&mut self, tower: &mut dyn Tower) -> Outcome {
        tower.set_brightness(50);
        tower.frame().clear();

        let layer = tower.random(LAYERS as u8) as usize;
        let x = tower.random(LEDS as u8) as usize;

        tower.frame().set_pixel(layer, x, true)?;
        tower.flush()?;
        tower.delay_ms(50)?;

        tower.frame().set_pixel(layer, x, false)?;
        tower.flush()?;
        tower.delay_ms(50)?;
        Ok(())
    }
}
