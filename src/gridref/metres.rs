//! Plain metre pairs, as used by the New Zealand grids: `1576041 mE 5515143 mN`

use super::number;
use crate::authoring::*;

static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \tm]+").expect("valid separator"));

const INVALID: &str = "invalid metre coordinate string";

/// Read either two bare numbers, `E N`, or the labelled form `e mE n mN`
/// (labels in either order and case).
pub fn parse(text: &str) -> Result<ENPair, Error> {
    let parts: Vec<&str> = SEPARATOR.split(text.trim()).collect();
    match parts.len() {
        2 => Ok(ENPair::new(
            number(parts[0], INVALID)?,
            number(parts[1], INVALID)?,
        )),
        4 => {
            let mut east = None;
            let mut north = None;
            for pair in parts.chunks(2) {
                if pair[1].eq_ignore_ascii_case("E") {
                    east = Some(number(pair[0], INVALID)?);
                } else if pair[1].eq_ignore_ascii_case("N") {
                    north = Some(number(pair[0], INVALID)?);
                }
            }
            match (east, north) {
                (Some(e), Some(n)) => Ok(ENPair::new(e, n)),
                _ => Err(Error::GridFormat(format!("{INVALID}: '{text}'"))),
            }
        }
        _ => Err(Error::GridFormat(format!("{INVALID}: '{text}'"))),
    }
}

#[must_use]
pub fn format(en: &ENPair) -> String {
    format!("{:7.0} mE {:7.0} mN", en.east, en.north)
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metre_text() -> Result<(), Error> {
        let en = ENPair::new(1_576_041., 5_515_143.);
        assert_eq!(parse("1576041 mE 5515143 mN")?, en);
        assert_eq!(parse("5515143 N 1576041 e")?, en);
        assert_eq!(parse("1576041 5515143")?, en);
        assert_eq!(format(&en), "1576041 mE 5515143 mN");
        assert_eq!(format(&ENPair::new(99_999.4, 5.)), "  99999 mE       5 mN");

        assert!(matches!(parse("1576041 mE 5515143 mE"), Err(Error::GridFormat(_))));
        assert!(matches!(parse("1576041"), Err(Error::GridFormat(_))));
        assert!(matches!(parse("E1576041 N5515143"), Err(Error::GridFormat(_))));
        assert!(matches!(parse("NaN mE 5000000 mN"), Err(Error::GridFormat(_))));
        assert!(matches!(parse("1576041 inf"), Err(Error::GridFormat(_))));
        Ok(())
    }
}
