//! French Lambert coordinates, in kilometres: `X = 600.000 Y = 200.000`

use super::number;
use crate::authoring::*;

static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t=]+").expect("valid separator"));

const INVALID: &str = "invalid Lambert coordinate string";

/// Read either two bare numbers, `X Y`, or the labelled form `X = x Y = y`
/// (labels in any order and case). Values are in kilometres.
pub fn parse(text: &str) -> Result<ENPair, Error> {
    let parts: Vec<&str> = SEPARATOR.split(text.trim()).collect();
    let (x, y) = match parts.len() {
        2 => (number(parts[0], INVALID)?, number(parts[1], INVALID)?),
        4 => {
            let mut x = None;
            let mut y = None;
            for pair in parts.chunks(2) {
                if pair[0].eq_ignore_ascii_case("X") {
                    x = Some(number(pair[1], INVALID)?);
                } else if pair[0].eq_ignore_ascii_case("Y") {
                    y = Some(number(pair[1], INVALID)?);
                }
            }
            match (x, y) {
                (Some(x), Some(y)) => (x, y),
                _ => return Err(Error::GridFormat(format!("{INVALID}: '{text}'"))),
            }
        }
        _ => return Err(Error::GridFormat(format!("{INVALID}: '{text}'"))),
    };
    Ok(ENPair::new(x * 1000., y * 1000.))
}

#[must_use]
pub fn format(en: &ENPair) -> String {
    format!("X = {:11.3} Y = {:11.3}", en.east / 1000., en.north / 1000.)
}

// ----- Tests ---------------------------------------------------------------------
