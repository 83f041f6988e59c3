//! Austrian Bundesmeldenetz coordinates: `M28 150000 5250000`, with the
//! zone prefix optional on input

use super::number;
use crate::authoring::*;

static BMN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(M\d\d)?\s*(\d+\.?\d*)\s+(\d+\.?\d*)$").expect("valid BMN regex")
});

/// Read a BMN reference for `zone` (e.g. `"M28"`). A zone prefix naming
/// another zone is an error.
pub fn parse(text: &str, zone: &str) -> Result<ENPair, Error> {
    let arg = text.trim().to_uppercase();
    let caps = BMN_RE
        .captures(&arg)
        .ok_or_else(|| Error::GridFormat(format!("invalid BMN grid reference '{text}'")))?;

    if let Some(prefix) = caps.get(1) {
        if prefix.as_str() != zone {
            return Err(Error::GridFormat(format!(
                "BMN reference for zone {} given to zone {zone}",
                prefix.as_str()
            )));
        }
    }

    let east = number(&caps[2], "illegal BMN format")?;
    let north = number(&caps[3], "illegal BMN format")?;
    Ok(ENPair::new(east, north))
}

#[must_use]
pub fn format(en: &ENPair, zone: &str) -> String {
    format!("{zone} {:.0} {:.0}", en.east, en.north)
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmn_text() -> Result<(), Error> {
        let en = ENPair::new(150_000., 5_250_000.);
        assert_eq!(parse("M28 150000 5250000", "M28")?, en);
        assert_eq!(parse("m28150000 5250000", "M28")?, en);
        assert_eq!(parse("150000.0 5250000", "M28")?, en);
        assert_eq!(format(&en, "M28"), "M28 150000 5250000");

        let mismatch = parse("M31 450000 5250000", "M28");
        assert!(matches!(mismatch, Err(Error::GridFormat(m)) if m.contains("zone M31")));
        assert!(matches!(parse("M28 150000", "M28"), Err(Error::GridFormat(_))));
        assert!(matches!(parse("-150000 5250000", "M28"), Err(Error::GridFormat(_))));
        Ok(())
    }
}
