//! Simulation of color vision deficiencies.
//!
//! Dichromacies follow “The Color Blind Simulation function” by
//! Matthew Wickline and the Human-Computer Interaction Resource
//! Network (<http://hcirn.com/>), 2000–2001: the color is projected
//! along its confusion line onto the reduced gamut of the dichromat,
//! keeping its luminance, and pulled back towards the neutral axis
//! until it is displayable.

use rgb::{RGB, RGBA};
use crate::{xyz, RGBColor};

pub(crate) mod ty;
use ty::Axis;
pub use ty::VisionType;

/// Weight of the dichromat color in the simulation of anomalous
/// trichromacy (the original color has weight 1).
const ANOMALY: f64 = 1.75;

/// Returns how a person with `vision` perceives the color `c`.
///
/// Channels are expected in \[0, 1\].  Except for
/// [`VisionType::Normal`] (the identity), the result is always
/// clamped to \[0, 1\].  Alpha is left untouched.
pub fn simulate(c: RGBA<f64>, vision: VisionType) -> RGBA<f64> {
    use VisionType::*;
    match vision {
        Normal => c,
        Protanopia => dichromat(c, &ty::PROTAN),
        Protanomaly => anomalize(c, dichromat(c, &ty::PROTAN)),
        Deuteranopia => dichromat(c, &ty::DEUTAN),
        Deuteranomaly => anomalize(c, dichromat(c, &ty::DEUTAN)),
        Tritanopia => dichromat(c, &ty::TRITAN),
        Tritanomaly => anomalize(c, dichromat(c, &ty::TRITAN)),
        Achromatopsia => c.to_gray(),
        Achromatomaly => anomalize(c, c.to_gray()),
    }
}

impl VisionType {
    /// Same as [`simulate`]`(c, self)`.
    #[inline]
    pub fn simulate(self, c: RGBA<f64>) -> RGBA<f64> { simulate(c, self) }
}

/// Blend of the original color `c` with its full-loss simulation `s`.
fn anomalize(c: RGBA<f64>, s: RGBA<f64>) -> RGBA<f64> {
    let d = ANOMALY + 1.;
    RGBA { r: (ANOMALY * s.r + c.r) / d,
           g: (ANOMALY * s.g + c.g) / d,
           b: (ANOMALY * s.b + c.b) / d,
           a: c.a }
}

/// Ratio to apply to `d` to bring `s` exactly to 0 (if negative) or 1.
/// Ratios outside \[0, 1\] and a null direction give 0.
#[inline]
fn adjustment(s: f64, d: f64) -> f64 {
    if d == 0. { return 0. }
    let target = if s < 0. { 0. } else { 1. };
    let adj = (target - s) / d;
    if (0. ..= 1.).contains(&adj) { adj } else { 0. }
}

fn dichromat(c: RGBA<f64>, t: &Axis) -> RGBA<f64> {
    let xyz = xyz::rgb_to_xyz(xyz::decode(RGB { r: c.r, g: c.g, b: c.b }));
    let y = xyz.g;
    let sum = xyz.r + xyz.g + xyz.b;
    let (u, v) = if sum != 0. { (xyz.r / sum, y / sum) } else { (0., 0.) };
    // Neutral grey with the same luminance.
    let nx = xyz::WX * y / xyz::WY;
    let nz = xyz::WZ * y / xyz::WY;

    // Confusion line through (u, v); the slope is always measured
    // from the side of the confusion point the color lies on.
    let clm = if u < t.cpu { (t.cpv - v) / (t.cpu - u) }
              else { (v - t.cpv) / (u - t.cpu) };
    let clyi = v - u * clm;
    let du = (t.ayi - clyi) / (clm - t.am);
    let dv = clm * du + clyi;

    let sx = du * y / dv;
    let sz = (1. - (du + dv)) * y / dv;
    let s = xyz::xyz_to_rgb(sx, y, sz);
    let d = xyz::xyz_to_rgb(nx - sx, 0., nz - sz);

    let adjust = adjustment(s.r, d.r)
        .max(adjustment(s.g, d.g))
        .max(adjustment(s.b, d.b));
    RGBA { r: xyz::encode(s.r + adjust * d.r),
           g: xyz::encode(s.g + adjust * d.g),
           b: xyz::encode(s.b + adjust * d.b),
           a: c.a }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(r: f64, g: f64, b: f64) -> RGBA<f64> { RGBA { r, g, b, a: 1. } }

    fn samples() -> Vec<RGBA<f64>> {
        let mut v = vec![];
        for i in 0 ..= 4 {
            for j in 0 ..= 4 {
                for k in 0 ..= 4 {
                    v.push(rgba(0.25 * i as f64, 0.25 * j as f64,
                                0.25 * k as f64));
                }
            }
        }
        v.push(rgba(0.13, 0.87, 0.42));
        v.push(rgba(0.91, 0.05, 0.66));
        v
    }

    fn assert_close(x: RGBA<f64>, y: RGBA<f64>, eps: f64) {
        assert!((x.r - y.r).abs() <= eps && (x.g - y.g).abs() <= eps
                && (x.b - y.b).abs() <= eps, "{:?} ≉ {:?}", x, y);
    }

    #[test]
    fn normal_is_identity() {
        for c in samples() {
            assert_eq!(simulate(c, VisionType::Normal), c);
        }
        let out_of_range = rgba(-0.5, 1.5, 0.3);
        assert_eq!(simulate(out_of_range, VisionType::Normal), out_of_range);
    }

    #[test]
    fn stays_in_gamut() {
        for v in VisionType::ALL {
            for c in samples() {
                let s = simulate(c, v);
                for x in [s.r, s.g, s.b] {
                    assert!((0. ..= 1.).contains(&x),
                            "{v}: {:?} ↦ {:?}", c, s);
                }
                // Simulating twice is not the identity but stays valid.
                let s2 = simulate(s, v);
                for x in [s2.r, s2.g, s2.b] {
                    assert!((0. ..= 1.).contains(&x), "{v}: {:?}", s2);
                }
            }
        }
    }

    #[test]
    fn achromatopsia_is_grey() {
        for c in samples() {
            let s = simulate(c, VisionType::Achromatopsia);
            assert!(s.r == s.g && s.g == s.b, "{:?}", s);
            assert!((s.r - (0.299 * c.r + 0.587 * c.g + 0.114 * c.b)).abs()
                    < 1e-15);
        }
    }

    #[test]
    fn anomaly_on_segment() {
        use VisionType::*;
        let t = 1.75 / 2.75;
        for (full, partial) in [(Protanopia, Protanomaly),
                                (Deuteranopia, Deuteranomaly),
                                (Tritanopia, Tritanomaly),
                                (Achromatopsia, Achromatomaly)] {
            for c in samples() {
                let s = simulate(c, full);
                let expected = rgba(c.r + t * (s.r - c.r),
                                    c.g + t * (s.g - c.g),
                                    c.b + t * (s.b - c.b));
                assert_close(simulate(c, partial), expected, 1e-12);
            }
        }
    }

    #[test]
    fn black_and_white_preserved() {
        for v in VisionType::ALL {
            assert_close(simulate(rgba(0., 0., 0.), v), rgba(0., 0., 0.),
                         1e-12);
            let w = simulate(rgba(1., 1., 1.), v);
            assert_close(w, rgba(1., 1., 1.), 2e-3);
        }
    }

    #[test]
    fn red_regression() {
        let red = rgba(1., 0., 0.);
        assert_close(simulate(red, VisionType::Deuteranopia),
                     rgba(0.6354891691215263, 0.4792890235920323, 0.),
                     1e-9);
        assert_close(simulate(red, VisionType::Protanopia),
                     rgba(0.5665778133410732, 0.5055946705196708,
                          0.12950139014126855),
                     1e-9);
        assert_close(simulate(red, VisionType::Tritanopia),
                     rgba(0.9922352645007656, 0.0927147291992606, 0.),
                     1e-9);
        let blue = rgba(0., 0., 1.);
        assert_close(simulate(blue, VisionType::Tritanopia),
                     rgba(0., 0.33616083452675244, 0.3507988460871216),
                     1e-9);
    }

    #[test]
    fn alpha_untouched() {
        let c = RGBA { r: 0.3, g: 0.6, b: 0.9, a: 0.25 };
        for v in VisionType::ALL {
            assert_eq!(simulate(c, v).a, 0.25);
        }
    }

    #[test]
    fn method_matches_function() {
        let c = rgba(0.2, 0.6, 0.4);
        for v in VisionType::ALL {
            assert_eq!(v.simulate(c), simulate(c, v));
        }
    }
}
