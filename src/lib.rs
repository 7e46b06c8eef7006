//! Color blindness simulation and visually distinct colors.
//!
//! - [`simulate`] shows how a color is perceived with a given
//!   [`VisionType`].
//! - [`RGBColor::distinct_colors`] generates lists of colors that are
//!   as distinct as possible from each other, possibly for people with
//!   a color vision deficiency.
//! - [`text_color`] chooses black or white text for a background.
//!
//! All functions work on any color type implementing [`RGBColor`],
//! which is the case of the pixel types of the [`rgb`] crate.
//! Random numbers are drawn from a [`rand::Rng`] supplied by the
//! caller.

use rgb::{RGB, RGBA, RGB8, RGB16, RGBA8, RGBA16};

mod error;
mod xyz;
mod vision;
mod distinct;

pub use error::Error;
pub use vision::{simulate, VisionType};
pub use distinct::{distance, distinct_color, random_color,
                   AttemptScoring, DistinctColors,
                   CORNERS, MID_FACE, INTERIOR, POINTS_OF_INTEREST};

/// Default threshold of [`text_color`].
pub const DEFAULT_TEXT_THRESHOLD: f64 = 0.6;

/// ITU-R BT.601 luma.
#[inline]
fn luma(c: &RGBA<f64>) -> f64 { 0.299 * c.r + 0.587 * c.g + 0.114 * c.b }

/// Choose whether black or white text reads better on `background`:
/// black if its luma exceeds `threshold`, white otherwise.  The closer
/// `threshold` is to 1, the more often white is chosen.
pub fn text_color(background: RGBA<f64>, threshold: f64) -> RGBA<f64> {
    if luma(&background) > threshold { distinct::BLACK }
    else { distinct::WHITE }
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 1\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 1\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Convert the color to grayscale.
    fn to_gray(&self) -> Self {
        let c = Self::to_rgba(self);
        let x = luma(&c);
        Self::from_rgba(RGBA{ r: x, g: x, b: x, a: c.a })
    }

    /// Return the color as perceived with `vision`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use chromatic::{RGBColor, VisionType};
    /// let red = RGB8::new(255, 0, 0);
    /// let seen = red.simulate(VisionType::Deuteranopia);
    /// assert!(seen.g > 0);
    /// ```
    fn simulate(&self, vision: VisionType) -> Self {
        Self::from_rgba(simulate(Self::to_rgba(self), vision))
    }

    /// Black or white, whichever is more readable on top of `self`.
    /// See [`text_color`].
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use chromatic::{RGBColor, DEFAULT_TEXT_THRESHOLD};
    /// let yellow = RGB8::new(255, 255, 0);
    /// assert_eq!(yellow.text_color(DEFAULT_TEXT_THRESHOLD),
    ///            RGB8::new(0, 0, 0));
    /// ```
    fn text_color(&self, threshold: f64) -> Self {
        Self::from_rgba(text_color(Self::to_rgba(self), threshold))
    }

    /// Set up the generation of `n` visually distinct colors.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use rgb::RGB8;
    /// use chromatic::{RGBColor, VisionType};
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let colors = RGB8::distinct_colors(5)
    ///     .vision(VisionType::Deuteranomaly)
    ///     .generate(&mut rng)?;
    /// assert_eq!(colors.len(), 5);
    /// # Ok::<(), chromatic::Error>(())
    /// ```
    fn distinct_colors(n: usize) -> DistinctColors<Self> {
        DistinctColors::new(n)
    }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r, g: self.g, b: self.b, a: 1. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { RGB { r: c.r, g: c.g, b: c.b } }
}

impl RGBColor for RGBA<f32> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA{ r: c.r as f32, g: c.g as f32, b: c.b as f32, a: c.a as f32 }
    }
}

impl RGBColor for RGB<f32> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 1. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB { r: c.r as f32, g: c.g as f32, b: c.b as f32 }
    }
}

// Integer channels are scaled to [0, 1]; `as` saturates out of range
// values.

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 255., g: self.g as f64 / 255.,
              b: self.b as f64 / 255., a: 1. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: (255. * c.r).round() as u8,  g: (255. * c.g).round() as u8,
               b: (255. * c.b).round() as u8 }
    }
}

impl RGBColor for RGB16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 65535., g: self.g as f64 / 65535.,
              b: self.b as f64 / 65535., a: 1. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB16 { r: (65535. * c.r).round() as u16,
                g: (65535. * c.g).round() as u16,
                b: (65535. * c.b).round() as u16 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 255., g: self.g as f64 / 255.,
              b: self.b as f64 / 255., a: self.a as f64 / 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: (255. * c.r).round() as u8,  g: (255. * c.g).round() as u8,
                b: (255. * c.b).round() as u8,  a: (255. * c.a).round() as u8 }
    }
}

impl RGBColor for RGBA16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 65535., g: self.g as f64 / 65535.,
              b: self.b as f64 / 65535., a: self.a as f64 / 65535. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA16 { r: (65535. * c.r).round() as u16,
                 g: (65535. * c.g).round() as u16,
                 b: (65535. * c.b).round() as u16,
                 a: (65535. * c.a).round() as u16 }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readable_text() {
        let black = RGBA { r: 0., g: 0., b: 0., a: 1. };
        let white = RGBA { r: 1., g: 1., b: 1., a: 1. };
        assert_eq!(text_color(white, DEFAULT_TEXT_THRESHOLD), black);
        assert_eq!(text_color(black, DEFAULT_TEXT_THRESHOLD), white);
        // Pure green has luma 0.587.
        let green = RGBA { r: 0., g: 1., b: 0., a: 1. };
        assert_eq!(text_color(green, DEFAULT_TEXT_THRESHOLD), white);
        assert_eq!(text_color(green, 0.5), black);
        assert_eq!(RGB8::new(0, 0, 128).text_color(0.6), RGB8::new(255, 255, 255));
    }

    #[test]
    fn gray() {
        let c = RGB8::new(200, 30, 90).to_gray();
        assert!(c.r == c.g && c.g == c.b);
        assert_eq!(c, RGB8::new(200, 30, 90).simulate(VisionType::Achromatopsia));
    }

    #[test]
    fn integer_round_trip() {
        for c in [RGB8::new(0, 0, 0), RGB8::new(255, 128, 3),
                  RGB8::new(17, 255, 200)] {
            assert_eq!(RGB8::from_rgba(c.to_rgba()), c);
            assert_eq!(c.simulate(VisionType::Normal), c);
        }
        let c = RGBA16 { r: 65535, g: 1, b: 30000, a: 40000 };
        assert_eq!(RGBA16::from_rgba(c.to_rgba()), c);
    }

    #[test]
    fn simulated_pixels() {
        let red = RGB8::new(255, 0, 0);
        // 0.6354891691215263 * 255 = 162.05, 0.4792890235920323 * 255 = 122.22
        assert_eq!(red.simulate(VisionType::Deuteranopia),
                   RGB8::new(162, 122, 0));
        let c = RGBA8 { r: 10, g: 200, b: 30, a: 77 };
        for v in VisionType::ALL {
            assert_eq!(c.simulate(v).a, 77);
        }
    }
}
