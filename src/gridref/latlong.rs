//! Latitude and longitude, either as signed decimal degrees (`52.6576 1.7179`)
//! or as degrees, minutes and seconds (`52 N 39' 27.25" 1 E 43' 04.52"`)

use crate::authoring::*;
use crate::math::angular::{dd_to_dms, dms_to_dd};
use regex::Captures;

const REAL: &str = r"([-+]?\d+(?:\.\d+)?)";
const LAT_DMS: &str = r#"(\d{1,2})\s*([NS])\s+(\d{1,2})'?\s+(\d{1,2}(?:\.\d+)?)"?"#;
const LON_DMS: &str = r#"(\d{1,3})\s*([EW])\s+(\d{1,2})'?\s+(\d{1,2}(?:\.\d+)?)"?"#;

static LATITUDE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^(?:{REAL}|{LAT_DMS})$")).expect("valid latitude regex")
});

static LONGITUDE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^(?:{REAL}|{LON_DMS})$")).expect("valid longitude regex")
});

// Group 1: decimal latitude, 2-5: DMS latitude, 6: decimal longitude, 7-10: DMS longitude
static PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?:{REAL}|{LAT_DMS})(?:\s*,\s*|\s+)(?:{REAL}|{LON_DMS})$"
    ))
    .expect("valid lat/long regex")
});

#[derive(Clone, Copy)]
enum Kind {
    Latitude,
    Longitude,
}

impl Kind {
    fn limit(self) -> f64 {
        match self {
            Kind::Latitude => 90.,
            Kind::Longitude => 180.,
        }
    }

    fn negative(self) -> &'static str {
        match self {
            Kind::Latitude => "S",
            Kind::Longitude => "W",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Kind::Latitude => "latitude",
            Kind::Longitude => "longitude",
        }
    }
}

// Decode the value starting at capture group `first`: either a decimal
// in group `first`, or degrees, hemisphere, minutes and seconds in the
// four groups following it
fn value(caps: &Captures, first: usize, kind: Kind) -> Result<f64, Error> {
    let bad = |what: &str| Error::LatLongFormat(format!("{} {what}", kind.name()));
    let limit = kind.limit();

    if let Some(decimal) = caps.get(first) {
        let v: f64 = decimal.as_str().parse().map_err(|_| bad("is not a number"))?;
        if v.abs() > limit {
            return Err(bad("out of range"));
        }
        return Ok(v);
    }

    let field = |i: usize| caps.get(first + i).map(|m| m.as_str()).unwrap_or_default();
    let d: i32 = field(1).parse().map_err(|_| bad("degrees"))?;
    let m: u16 = field(3).parse().map_err(|_| bad("minutes"))?;
    let s: f64 = field(4).parse().map_err(|_| bad("seconds"))?;
    if m >= 60 {
        return Err(bad("minutes out of range"));
    }
    if s >= 60. {
        return Err(bad("seconds out of range"));
    }

    let v = dms_to_dd(d, m, s);
    if v > limit {
        return Err(bad("out of range"));
    }
    if field(2) == kind.negative() {
        return Ok(-v);
    }
    Ok(v)
}

/// Read a single latitude
pub fn parse_latitude(text: &str) -> Result<f64, Error> {
    let arg = text.trim().to_uppercase();
    let caps = LATITUDE
        .captures(&arg)
        .ok_or_else(|| Error::LatLongFormat(format!("invalid latitude '{text}'")))?;
    value(&caps, 1, Kind::Latitude)
}

/// Read a single longitude
pub fn parse_longitude(text: &str) -> Result<f64, Error> {
    let arg = text.trim().to_uppercase();
    let caps = LONGITUDE
        .captures(&arg)
        .ok_or_else(|| Error::LatLongFormat(format!("invalid longitude '{text}'")))?;
    value(&caps, 1, Kind::Longitude)
}

/// Read a latitude/longitude pair, in that order, separated by white space
/// or a comma
pub fn parse(text: &str) -> Result<LatLong, Error> {
    let arg = text.trim().to_uppercase();
    let caps = PAIR
        .captures(&arg)
        .ok_or_else(|| Error::LatLongFormat(format!("invalid latitude/longitude '{text}'")))?;
    let latitude = value(&caps, 1, Kind::Latitude)?;
    let longitude = value(&caps, 6, Kind::Longitude)?;
    Ok(LatLong::new(latitude, longitude))
}

fn format_one(v: f64, kind: Kind) -> String {
    let hemisphere = match (kind, v < 0.) {
        (Kind::Latitude, false) => "N",
        (Kind::Longitude, false) => "E",
        (k, true) => k.negative(),
    };
    let (d, m, s) = dd_to_dms(v, 2);
    format!("{d} {hemisphere} {m:02}' {s:05.2}\"")
}

#[must_use]
pub fn format(lat_long: &LatLong) -> String {
    format!(
        "{} {}",
        format_one(lat_long.latitude, Kind::Latitude),
        format_one(lat_long.longitude, Kind::Longitude)
    )
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn formatting() {
        let ll = LatLong::new(dms_to_dd(52, 39, 27.2531), dms_to_dd(1, 43, 4.5177));
        assert_eq!(format(&ll), r#"52 N 39' 27.25" 1 E 43' 04.52""#);

        let ll = LatLong::new(-dms_to_dd(41, 0, 0.), -dms_to_dd(73, 5, 9.999));
        assert_eq!(format(&ll), r#"41 S 00' 00.00" 73 W 05' 10.00""#);
        assert_eq!(ll.to_string(), format(&ll));
    }

    #[test]
    fn parsing() -> Result<(), Error> {
        let ll = parse(r#"52 N 39' 27.25" 1 E 43' 04.52""#)?;
        assert_float_eq!(ll.latitude, dms_to_dd(52, 39, 27.25), abs <= 1e-12);
        assert_float_eq!(ll.longitude, dms_to_dd(1, 43, 4.52), abs <= 1e-12);

        let ll = parse("41 s 10 30 73 w 5 0")?;
        assert_float_eq!(ll.latitude, -41.175, abs <= 1e-12);
        assert_float_eq!(ll.longitude, -73.083_333_333_333, abs <= 1e-9);

        assert_eq!(parse("52.5, -1.25")?, LatLong::new(52.5, -1.25));
        assert_eq!(parse("-41 173")?, LatLong::new(-41., 173.));
        assert_eq!(parse(r#"-41 1 E 0 0"#)?, LatLong::new(-41., 1.));
        assert_eq!("55 12".parse::<LatLong>()?, LatLong::new(55., 12.));

        assert_eq!(parse_latitude("52 N 30' 0")?, 52.5);
        assert_eq!(parse_longitude("+12.5")?, 12.5);
        assert_eq!(parse_longitude("120 W 30 0")?, -120.5);
        assert_eq!(parse_longitude("0 W 30 0")?, -0.5);
        Ok(())
    }

    #[test]
    fn parse_errors() {
        for bad in [
            "91 12",
            "45 181",
            "45 N 60 0 12 E 0 0",
            "45 N 0 60 12 E 0 0",
            "91 N 0 0 12 E 0 0",
            "45 E 0 0 12 N 0 0",
            "45",
            "north south",
        ] {
            assert!(matches!(parse(bad), Err(Error::LatLongFormat(_))), "{bad}");
        }
        assert!(matches!(parse_latitude("12 E 0 0"), Err(Error::LatLongFormat(_))));
        assert!(matches!(parse_longitude("181 E 0 0"), Err(Error::LatLongFormat(_))));
    }
}
