//! Print distinct colors for every type of vision, together with how
//! they are perceived and the text color to use on them.
//!
//! Usage: `cargo run --example distinct -- [N] [SEED]`

use std::{env,
          io::{self, BufWriter, Write},
          error::Error};
use rand::{rngs::StdRng, SeedableRng};
use rgb::RGB8;
use chromatic::{RGBColor, VisionType, DEFAULT_TEXT_THRESHOLD};

type Err = Box<dyn Error>;

fn css_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn main() -> Result<(), Err> {
    let mut args = env::args().skip(1);
    let n: usize = match args.next() { Some(n) => n.parse()?, None => 8 };
    let seed: u64 = match args.next() { Some(s) => s.parse()?, None => 0 };
    let mut fh = BufWriter::new(io::stdout().lock());
    for vision in VisionType::ALL {
        let mut rng = StdRng::seed_from_u64(seed);
        let colors = RGB8::distinct_colors(n).vision(vision)
            .generate(&mut rng)?;
        writeln!(fh, "{vision}")?;
        for c in colors {
            let text = c.text_color(DEFAULT_TEXT_THRESHOLD);
            writeln!(fh, "  {}  seen as {}  text {}", css_string(c),
                     css_string(c.simulate(vision)), css_string(text))?;
        }
    }
    Ok(())
}
