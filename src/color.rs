//! Color definitions for the controller
//!
//! Provides the fixed palette used by the static mode and the `wheel`
//! hue function driving the rainbow animation.

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Number of selectable colors in the static palette.
pub const COLOR_COUNT: u8 = 7;

/// Fixed palette for the static mode.
///
/// Order: red, yellow, green, cyan, blue, magenta, white.
pub const PALETTE: [Rgb; COLOR_COUNT as usize] = [
    Rgb::new(255, 0, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 255, 255),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(255, 255, 255),
];

/// Look up a palette color by index.
///
/// The index must already be in range; `Settings` guarantees this
/// invariant for every value it hands out.
pub fn palette_color(index: u8) -> Rgb {
    PALETTE[index as usize % PALETTE.len()]
}

/// Three-segment color wheel mapping a position to an RGB hue.
///
/// Produces a smooth red -> blue -> green -> red cycle as `pos`
/// increases from 0 to 255.
pub fn wheel(pos: u8) -> Rgb {
    let mut p = 255 - pos;
    if p < 85 {
        return Rgb::new(255 - p * 3, 0, p * 3);
    }
    if p < 170 {
        p -= 85;
        return Rgb::new(0, p * 3, 255 - p * 3);
    }
    p -= 170;
    Rgb::new(p * 3, 255 - p * 3, 0)
}
