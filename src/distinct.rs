//! Generation of visually distinct colors.
//!
//! A greedy search in the spirit of
//! [distinctipy](https://github.com/alan-turing-institute/distinctipy):
//! each new color maximizes its distance to the nearest color already
//! taken.  Well separated [`struct@POINTS_OF_INTEREST`] of the RGB cube are
//! tried first, then random colors.

use std::marker::PhantomData;
use lazy_static::lazy_static;
use rand::Rng;
use rgb::RGBA;
use crate::{simulate, Error, RGBColor, VisionType};

const fn rgba(r: f64, g: f64, b: f64) -> RGBA<f64> { RGBA { r, g, b, a: 1. } }

pub(crate) const WHITE: RGBA<f64> = rgba(1., 1., 1.);
pub(crate) const BLACK: RGBA<f64> = rgba(0., 0., 0.);

lazy_static! {
    /// The corners of the RGB cube.
    pub static ref CORNERS: Vec<RGBA<f64>> = vec![
        WHITE, BLACK,
        rgba(1., 0., 0.), rgba(0., 1., 0.), rgba(0., 0., 1.),
        rgba(0., 1., 1.), rgba(1., 1., 0.), rgba(1., 0., 1.)];

    /// Middles of the faces and edges of the RGB cube.
    pub static ref MID_FACE: Vec<RGBA<f64>> = vec![
        rgba(0., 0.5, 0.), rgba(0., 0., 0.5), rgba(0., 1., 0.5),
        rgba(0., 0.5, 1.), rgba(0., 0.5, 0.5), rgba(0.5, 0., 0.),
        rgba(0.5, 0.5, 0.), rgba(0.5, 1., 0.), rgba(0.5, 0., 0.5),
        rgba(0.5, 0., 1.), rgba(0.5, 1., 0.5), rgba(0.5, 1., 1.),
        rgba(0.5, 0.5, 1.), rgba(1., 0.5, 0.), rgba(1., 0., 0.5),
        rgba(1., 0.5, 0.5), rgba(1., 1., 0.5), rgba(1., 0.5, 1.)];

    /// The center of the RGB cube and its neighbors halfway to the
    /// faces.
    pub static ref INTERIOR: Vec<RGBA<f64>> = vec![
        rgba(0.5, 0.5, 0.5),
        rgba(0.75, 0.5, 0.5), rgba(0.25, 0.5, 0.5),
        rgba(0.5, 0.75, 0.5), rgba(0.5, 0.25, 0.5),
        rgba(0.5, 0.5, 0.75), rgba(0.5, 0.5, 0.25)];

    /// Candidates tried, in this order, before any random color:
    /// [`struct@CORNERS`], [`struct@MID_FACE`] then [`struct@INTERIOR`].
    pub static ref POINTS_OF_INTEREST: Vec<RGBA<f64>> =
        CORNERS.iter().chain(MID_FACE.iter()).chain(INTERIOR.iter())
        .copied().collect();
}

/// Which of the random colors drawn by a search are compared with the
/// colors to avoid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AttemptScoring {
    /// Draw all the attempts but only score the last one.  This is the
    /// behavior of distinctipy ports for Unity and the default, so
    /// that sequences generated from a given seed stay the same.
    #[default]
    LastDraw,
    /// Score every random color drawn and keep the best.
    EveryDraw,
}

/// Perceptual distance between two colors, weighting the squared
/// channel differences by the mean red level.
/// See <https://www.compuphase.com/cmetric.htm>.
pub fn distance(c1: RGBA<f64>, c2: RGBA<f64>) -> f64 {
    let mean_r = (c1.r + c2.r) / 2.;
    let dr = c1.r - c2.r;
    let dg = c1.g - c2.g;
    let db = c1.b - c2.b;
    (2. + mean_r) * dr * dr + 4. * dg * dg + (3. - mean_r) * db * db
}

/// Return a random color.  The larger `pastel_factor` ∈ \[0, 1\], the
/// paler the color.  Draws one number per channel, in the order red,
/// green, blue.
pub fn random_color<R>(pastel_factor: f64, rng: &mut R) -> RGBA<f64>
where R: Rng + ?Sized {
    let d = 1. + pastel_factor;
    let r = (rng.random::<f64>() + pastel_factor) / d;
    let g = (rng.random::<f64>() + pastel_factor) / d;
    let b = (rng.random::<f64>() + pastel_factor) / d;
    rgba(r, g, b)
}

#[derive(Clone, Copy, Debug)]
struct Search {
    pastel_factor: f64,
    attempts: usize,
    vision: VisionType,
    scoring: AttemptScoring,
}

#[inline]
fn same_rgb(c1: &RGBA<f64>, c2: &RGBA<f64>) -> bool {
    c1.r == c2.r && c1.g == c2.g && c1.b == c2.b
}

impl Search {
    /// Distance from `c`, as seen with `self.vision`, to the nearest
    /// color of `seen`.
    fn nearest(&self, c: RGBA<f64>, seen: &[RGBA<f64>]) -> f64 {
        let c = simulate(c, self.vision);
        seen.iter().map(|&e| distance(c, e)).fold(f64::INFINITY, f64::min)
    }

    /// Return the color most distinct from `exclude`.  `seen` holds the
    /// colors of `exclude` as perceived with `self.vision`.
    fn run<R>(&self, exclude: &[RGBA<f64>], seen: &[RGBA<f64>],
              rng: &mut R) -> RGBA<f64>
    where R: Rng + ?Sized {
        if exclude.is_empty() {
            return random_color(self.pastel_factor, rng)
        }
        let mut best = BLACK;
        let mut max_distance = f64::NEG_INFINITY;
        let mut consider = |c: RGBA<f64>| {
            let d = self.nearest(c, seen);
            if d > max_distance {
                max_distance = d;
                best = c;
            }
        };
        if self.pastel_factor == 0. {
            POINTS_OF_INTEREST.iter()
                .filter(|c| !exclude.iter().any(|e| same_rgb(e, c)))
                .for_each(|&c| consider(c));
        }
        match self.scoring {
            AttemptScoring::LastDraw => {
                let mut last = None;
                for _ in 0 .. self.attempts {
                    last = Some(random_color(self.pastel_factor, rng));
                }
                if let Some(c) = last { consider(c) }
            }
            AttemptScoring::EveryDraw => {
                for _ in 0 .. self.attempts {
                    consider(random_color(self.pastel_factor, rng))
                }
            }
        }
        best
    }
}

/// Return a color as distinct as possible from the colors in
/// `exclude`, as perceived by someone with `vision`.
///
/// If `exclude` is empty, a random color is returned.  Otherwise, when
/// `pastel_factor == 0`, the [`struct@POINTS_OF_INTEREST`] not in `exclude`
/// are tried first.  Then `attempts` random colors are drawn from
/// `rng` and the last one is compared with the best candidate so far
/// (use [`DistinctColors::scoring`] to compare all of them).
/// `exclude` is left as is.
pub fn distinct_color<Color, R>(
    exclude: &[Color], pastel_factor: f64, attempts: usize,
    vision: VisionType, rng: &mut R) -> Color
where Color: RGBColor, R: Rng + ?Sized {
    let search = Search { pastel_factor, attempts, vision,
                          scoring: AttemptScoring::LastDraw };
    let exclude: Vec<_> = exclude.iter().map(|c| c.to_rgba()).collect();
    let seen: Vec<_> = exclude.iter().map(|&c| simulate(c, vision)).collect();
    Color::from_rgba(search.run(&exclude, &seen, rng))
}

/// Set the parameters to generate a list of distinct colors.
///
/// Created by [`RGBColor::distinct_colors`].
#[derive(Clone, Debug)]
pub struct DistinctColors<Color> {
    n: usize,
    exclude: Vec<RGBA<f64>>,
    return_excluded: bool,
    search: Search,
    color: PhantomData<Color>,
}

impl<Color> DistinctColors<Color>
where Color: RGBColor {
    pub(crate) fn new(n: usize) -> Self {
        DistinctColors {
            n,
            exclude: vec![],
            return_excluded: false,
            search: Search { pastel_factor: 0., attempts: 1000,
                             vision: VisionType::Normal,
                             scoring: AttemptScoring::LastDraw },
            color: PhantomData,
        }
    }

    /// Colors the new colors must be distinct from.  If none are
    /// given, white and black are avoided.
    pub fn exclude(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.exclude = colors.into_iter().map(|c| c.to_rgba()).collect();
        self
    }

    /// Whether the excluded colors start the generated list (default:
    /// `false`).
    pub fn return_excluded(mut self, yes: bool) -> Self {
        self.return_excluded = yes;
        self
    }

    /// Number in \[0, 1\]; the larger, the paler the colors (default:
    /// `0.`).  A positive factor skips the [`struct@POINTS_OF_INTEREST`].
    pub fn pastel_factor(mut self, pastel_factor: f64) -> Self {
        self.search.pastel_factor = pastel_factor;
        self
    }

    /// Number of random colors drawn for each new color (default:
    /// 1000).
    pub fn attempts(mut self, attempts: usize) -> Self {
        self.search.attempts = attempts;
        self
    }

    /// Make the colors distinct for people with this type of vision
    /// (default: [`VisionType::Normal`]).
    pub fn vision(mut self, vision: VisionType) -> Self {
        self.search.vision = vision;
        self
    }

    /// Which random draws are scored (default:
    /// [`AttemptScoring::LastDraw`]).
    pub fn scoring(mut self, scoring: AttemptScoring) -> Self {
        self.search.scoring = scoring;
        self
    }

    /// Generate the colors, drawing random numbers from `rng`.
    ///
    /// Returns the `n` new colors, preceded by the excluded ones if
    /// [`Self::return_excluded`] was set.
    pub fn generate<R>(&self, rng: &mut R) -> Result<Vec<Color>, Error>
    where R: Rng + ?Sized {
        let pastel_factor = self.search.pastel_factor;
        if !(0. ..= 1.).contains(&pastel_factor) {
            return Err(Error::PastelFactor(pastel_factor))
        }
        let mut colors = if self.exclude.is_empty() { vec![WHITE, BLACK] }
                         else { self.exclude.clone() };
        let n_excluded = colors.len();
        let vision = self.search.vision;
        let mut seen: Vec<_> = colors.iter()
            .map(|&c| simulate(c, vision)).collect();
        colors.reserve(self.n);
        seen.reserve(self.n);
        for _ in 0 .. self.n {
            let c = self.search.run(&colors, &seen, rng);
            colors.push(c);
            seen.push(simulate(c, vision));
        }
        let first = if self.return_excluded { 0 } else { n_excluded };
        Ok(colors[first ..].iter().map(|&c| Color::from_rgba(c)).collect())
    }
}
