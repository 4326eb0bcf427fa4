/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}
