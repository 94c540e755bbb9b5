//! Frame production
//!
//! Turns the current mode and settings into pixel values for one frame.
//! The rainbow phase lives here as an explicit field so it can be reset
//! and inspected; it survives mode switches and resets only at boot.

use crate::color::{Rgb, palette_color, wheel};
use crate::settings::Mode;

/// Renders frames into a fixed-size buffer.
///
/// `LED_COUNT` is the number of pixels on the strip.
pub struct Renderer<const LED_COUNT: usize> {
    frame_buffer: [Rgb; LED_COUNT],
    phase: u8,
}

impl<const LED_COUNT: usize> Default for Renderer<LED_COUNT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const LED_COUNT: usize> Renderer<LED_COUNT> {
    pub const fn new() -> Self {
        Self {
            frame_buffer: [Rgb::new(0, 0, 0); LED_COUNT],
            phase: 0,
        }
    }

    /// Render one frame for the given mode and return it.
    ///
    /// Rainbow frames advance the phase by one step (mod 256) after
    /// rendering; static frames leave it untouched.
    pub fn render(&mut self, mode: Mode, color_index: u8) -> &[Rgb] {
        match mode {
            Mode::StaticColor => {
                let color = palette_color(color_index);
                self.frame_buffer.fill(color);
            }
            Mode::Rainbow => {
                for (i, led) in self.frame_buffer.iter_mut().enumerate() {
                    let hue = (i * 256 / LED_COUNT + usize::from(self.phase)) & 255;
                    #[allow(clippy::cast_possible_truncation)]
                    let hue = hue as u8;
                    *led = wheel(hue);
                }
                self.phase = self.phase.wrapping_add(1);
            }
        }
        &self.frame_buffer
    }

    /// Current rainbow phase.
    pub const fn phase(&self) -> u8 {
        self.phase
    }

    /// Reset the rainbow phase to its boot value.
    pub fn reset_phase(&mut self) {
        self.phase = 0;
    }
}
