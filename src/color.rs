use smart_leds::{RGB8, hsv::Hsv as HSV};

pub use smart_leds::hsv::hsv2rgb;

use crate::math8::scale8;

pub type Rgb = RGB8;
pub type Hsv = HSV;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Fully saturated, full-value color on the 0-255 hue wheel.
#[inline]
pub fn hue_color(hue: u8) -> Rgb {
    hsv2rgb(Hsv {
        hue,
        sat: 255,
        val: 255,
    })
}

/// Scale every channel toward black by `fade` (out of 256).
///
/// `fade = 20` keeps 235/256 of each channel per call, producing the
/// decaying trail the chase pattern relies on. Channels reach zero in
/// finite time because `scale8` rounds down.
pub fn fade_to_black(leds: &mut [Rgb], fade: u8) {
    let keep = 255 - fade;
    for led in leds.iter_mut() {
        led.r = scale8(led.r, keep);
        led.g = scale8(led.g, keep);
        led.b = scale8(led.b, keep);
    }
}
