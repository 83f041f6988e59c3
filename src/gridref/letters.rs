//! Lettered grid squares: the two-letter 100 km squares of the Ordnance
//! Survey National Grid (`SU 12345 67890`), and the one-letter 100 km
//! squares of the Irish Grid (`O 15904 34671`).

use super::number;
use crate::authoring::*;
use regex::Captures;

// 500 km squares (first letter) and 100 km squares (second letter)
// in formatting order, from the south-west corner
const OSGB_TABLE: &[u8] = b"VWXYZQRSTULMNOPFGHJKABCDE";

// The alphabet without I, row-major from the north-west corner
const GRID_LETTERS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

static OSGB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([HJNOST][A-HJ-Z])\s*(\d+)(?:\s+(\d+))?$").expect("valid OSGB regex")
});

static IRISH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-HJ-Z])\s*(\d+)(?:\s+(\d+))?$").expect("valid Irish regex"));

const OSGB_MAX_E: f64 = 700_000.;
const OSGB_MAX_N: f64 = 1_300_000.;
const IRISH_MAX: i64 = 500_000;

fn letter_index(letter: u8, what: &str) -> Result<usize, Error> {
    GRID_LETTERS
        .iter()
        .position(|&l| l == letter)
        .ok_or_else(|| Error::GridFormat(format!("{what}: bad grid letter")))
}

// The offsets within the 100 km square, either from one run of digits split
// in two halves, or from two separate runs of equal length
fn offsets(caps: &Captures, what: &str) -> Result<(f64, f64), Error> {
    let first = &caps[2];
    let (east, north) = match caps.get(3) {
        None => {
            if first.len() % 2 != 0 {
                return Err(Error::GridFormat(format!("{what} - odd number of digits")));
            }
            first.split_at(first.len() / 2)
        }
        Some(second) => {
            let second = second.as_str();
            if first.len() != second.len() {
                return Err(Error::GridFormat(format!(
                    "{what} - easting & northing have different lengths"
                )));
            }
            (first, second)
        }
    };
    let units = 10_f64.powi(5 - east.len() as i32);
    Ok((number(east, what)? * units, number(north, what)? * units))
}

// ----- O S G B -------------------------------------------------------------------

pub fn parse_osgb(text: &str) -> Result<ENPair, Error> {
    const WHAT: &str = "invalid OS grid reference";
    let arg = text.trim().to_uppercase();
    let caps = OSGB_RE
        .captures(&arg)
        .ok_or_else(|| Error::GridFormat(format!("{WHAT} '{text}'")))?;

    let letters = caps[1].as_bytes();
    let first = letter_index(letters[0], WHAT)? as i64;
    let second = letter_index(letters[1], WHAT)? as i64;
    let (i1, j1) = (first % 5, 4 - first / 5);
    let (i2, j2) = (second % 5, 4 - second / 5);
    let east_square = ((i1 - 2) * 500_000 + i2 * 100_000) as f64;
    let north_square = ((j1 - 1) * 500_000 + j2 * 100_000) as f64;

    let (e, n) = offsets(&caps, WHAT)?;
    Ok(ENPair::new(east_square + e, north_square + n))
}

/// Ten digit reference, e.g. `SU 12345 67890`. Points outside the grid
/// give an empty string.
#[must_use]
pub fn format_osgb(en: &ENPair) -> String {
    if !(0. ..OSGB_MAX_E).contains(&en.east) || !(0. ..OSGB_MAX_N).contains(&en.north) {
        warn!("({:.3}, {:.3}) is outside the OS grid", en.east, en.north);
        return String::new();
    }

    // Shift the false origin to the south-west corner of square SV
    let e = 1_000_000 + en.east.round() as usize;
    let n = en.north.round() as usize + 500_000;

    let first = OSGB_TABLE[e / 500_000 + (n / 500_000) * 5] as char;
    let (e, n) = (e % 500_000, n % 500_000);
    let second = OSGB_TABLE[(n / 100_000) * 5 + e / 100_000] as char;
    format!("{first}{second} {:05} {:05}", e % 100_000, n % 100_000)
}

// ----- I R I S H ---------------------------------------------------------------

pub fn parse_irish(text: &str) -> Result<ENPair, Error> {
    const WHAT: &str = "invalid Irish grid reference";
    let arg = text.trim().to_uppercase();
    let caps = IRISH_RE
        .captures(&arg)
        .ok_or_else(|| Error::GridFormat(format!("{WHAT} '{text}'")))?;

    let index = letter_index(caps[1].as_bytes()[0], WHAT)?;
    let column = (index % 5) as f64;
    let row = (4 - index / 5) as f64;

    let (e, n) = offsets(&caps, WHAT)?;
    Ok(ENPair::new(column * 100_000. + e, row * 100_000. + n))
}

/// Ten digit reference, e.g. `O 15904 34671`. Points outside the grid
/// give an empty string.
#[must_use]
pub fn format_irish(en: &ENPair) -> String {
    let e = en.east.round() as i64;
    let n = en.north.round() as i64;
    if !(0..IRISH_MAX).contains(&e) || !(0..IRISH_MAX).contains(&n) {
        warn!("({:.3}, {:.3}) is outside the Irish grid", en.east, en.north);
        return String::new();
    }
    let index = ((4 - n / 100_000) * 5 + e / 100_000) as usize;
    let letter = GRID_LETTERS[index] as char;
    format!("{letter} {:05} {:05}", e % 100_000, n % 100_000)
}

// ----- Tests ---------------------------------------------------------------------
