use std::str::FromStr;

use huechord::error::ColorFormatError;
use huechord::{discover, Color, HarmonyPattern};

/// A gradient ramp from apricot to deep violet, serving as candidate pool.
const RAMP: [&str; 9] = [
    "#FFB97A", "#FF957C", "#FF727F", "#FF5083", "#F02F87", "#C70084", "#9A007F", "#6A0076",
    "#33006B",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pool = RAMP
        .iter()
        .map(|s| Color::from_str(s))
        .collect::<Result<Vec<_>, ColorFormatError>>()?;

    let palettes = discover(&pool)?;

    for pattern in HarmonyPattern::all() {
        let palette = &palettes[pattern];
        let colors = palette
            .colors()
            .iter()
            .map(|color| color.to_hex_format())
            .collect::<Vec<_>>()
            .join(" ");

        println!(
            "{:<20} {:>10.4}   {}",
            pattern.name(),
            palette.variance(),
            colors
        );
    }

    Ok(())
}
