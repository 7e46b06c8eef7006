//! Linear RGB ↔ CIE XYZ and the plain power-law gamma used by the
//! simulator.

use rgb::RGB;

pub(crate) const GAMMA: f64 = 2.2;

/// Chromaticity of the reference white.
pub(crate) const WX: f64 = 0.312713;
pub(crate) const WY: f64 = 0.329016;
pub(crate) const WZ: f64 = 0.358271;

/// Raise every channel to the power [`GAMMA`].
#[inline]
pub(crate) fn decode(c: RGB<f64>) -> RGB<f64> {
    RGB { r: c.r.powf(GAMMA), g: c.g.powf(GAMMA), b: c.b.powf(GAMMA) }
}

/// Clamp `x` to \[0, 1\] and gamma encode it if it lies strictly
/// inside.
#[inline]
pub(crate) fn encode(x: f64) -> f64 {
    if x <= 0. { 0. }
    else if x >= 1. { 1. }
    else { x.powf(1. / GAMMA) }
}

/// Returns (X, Y, Z) stored in the `r`, `g`, `b` fields.
#[inline]
pub(crate) fn rgb_to_xyz(c: RGB<f64>) -> RGB<f64> {
    RGB { r: 0.430574 * c.r + 0.341550 * c.g + 0.178325 * c.b,
          g: 0.222015 * c.r + 0.706655 * c.g + 0.071330 * c.b,
          b: 0.020183 * c.r + 0.129553 * c.g + 0.939180 * c.b }
}

#[inline]
pub(crate) fn xyz_to_rgb(x: f64, y: f64, z: f64) -> RGB<f64> {
    RGB { r: 3.063218 * x - 1.393325 * y - 0.475802 * z,
          g: -0.969243 * x + 1.875966 * y + 0.041555 * z,
          b: 0.067871 * x - 0.228834 * y + 1.069251 * z }
}
