use crate::config::{LAYERS, LEDS};
use crate::tower::{Outcome, Tower};

use super::Animation;

/// Checkerboard woven in from the bottom and top at once, then repeatedly
/// inverted while the global duty climbs until the tower fades out.
pub struct Checkerboard;

impl Animation for Checkerboard {
    fn run(&mut self, tower: &mut dyn Tower) -> Outcome {
        tower.frame().clear();
        tower.set_brightness(240);
        tower.delay_ms(200)?;

        for y in 0..LAYERS / 2 {
            for x in 0..LEDS / 2 {
                tower.frame().set_pixel(y * 2, x * 2, true)?;
                tower.frame().set_pixel((LAYERS - 1) - y * 2, x * 2 + 1, true)?;
            }
            tower.flush()?;
            tower.delay_ms(100)?;
        }
        tower.delay_ms(1000)?;

        // Blink by inversion while dimming out: duty 240 up to dark.
        let mut level: u8 = 240;
        while level < 255 {
            level += 1;
            tower.set_brightness(level);
            tower.frame().invert();
            tower.flush()?;
            tower.delay_ms(150)?;
        }

        tower.frame().clear();
        tower.flush()?;
        tower.delay_ms(200)?;
        Ok(())
    }
}
