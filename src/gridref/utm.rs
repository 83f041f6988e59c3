//! UTM references: `31N 448251 mE 5411932 mN`, optionally prefixed by `UTM`

use super::number;
use crate::authoring::*;

static UTM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?ix)^
        (?:UTM\s*)?
        (\d{1,2})\s*([NS])          # zone and hemisphere
        \s+(\d+(?:\.\d+)?)(?:\s*mE)?  # easting
        \s+(\d+(?:\.\d+)?)(?:\s*mN)?  # northing
        $",
    )
    .expect("valid UTM regex")
});

fn hemisphere(north: bool) -> char {
    if north {
        'N'
    } else {
        'S'
    }
}

/// Read a UTM reference, which must name `zone` and the hemisphere given
/// by `north`.
pub fn parse(text: &str, zone: u8, north: bool) -> Result<ENPair, Error> {
    const WHAT: &str = "invalid UTM reference";
    let caps = UTM_RE
        .captures(text.trim())
        .ok_or_else(|| Error::GridFormat(format!("{WHAT} '{text}'")))?;

    let given_zone: u8 = caps[1]
        .parse()
        .map_err(|_| Error::GridFormat(format!("{WHAT}: bad zone '{}'", &caps[1])))?;
    let given_north = caps[2].eq_ignore_ascii_case("N");
    if given_zone != zone || given_north != north {
        return Err(Error::GridFormat(format!(
            "UTM reference for zone {given_zone}{} given to zone {zone}{}",
            hemisphere(given_north),
            hemisphere(north)
        )));
    }

    Ok(ENPair::new(number(&caps[3], WHAT)?, number(&caps[4], WHAT)?))
}

#[must_use]
pub fn format(en: &ENPair, zone: u8, north: bool) -> String {
    format!(
        "{zone}{} {:.0} mE {:.0} mN",
        hemisphere(north),
        en.east,
        en.north
    )
}

// ----- Tests ---------------------------------------------------------------------
