use std::fmt;

/// Geodetic latitude and longitude, in degrees. Which ellipsoid and datum
/// they refer to is the business of the holder.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct LatLong {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLong {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> LatLong {
        LatLong {
            latitude,
            longitude,
        }
    }
}

/// Degrees-minutes-seconds, e.g. `52 N 39' 27.25" 1 E 43' 04.52"`
impl fmt::Display for LatLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::gridref::latlong::format(self))
    }
}

impl std::str::FromStr for LatLong {
    type Err = crate::Error;
    fn from_str(s: &str) -> Result<LatLong, Self::Err> {
        crate::gridref::latlong::parse(s)
    }
}

/// A planar easting/northing pair, in metres (or, for the degenerate
/// lat/long "projection", in degrees of longitude/latitude).
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct ENPair {
    pub east: f64,
    pub north: f64,
}

impl ENPair {
    #[must_use]
    pub const fn new(east: f64, north: f64) -> ENPair {
        ENPair { east, north }
    }
}

impl fmt::Display for ENPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} {:.3}", self.east, self.north)
    }
}

/// A generic triple, mostly used for earth centered cartesian coordinates
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct XYZ {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl XYZ {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> XYZ {
        XYZ { x, y, z }
    }

    #[must_use]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for XYZ {
    fn from(v: [f64; 3]) -> XYZ {
        XYZ::new(v[0], v[1], v[2])
    }
}

impl fmt::Display for XYZ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} {:.4} {:.4}", self.x, self.y, self.z)
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        let ll = LatLong::new(55., 12.);
        assert_eq!(ll.latitude, 55.);
        assert_eq!(ll.longitude, 12.);

        let en = ENPair::new(1., 2.);
        assert_eq!(en.to_string(), "1.000 2.000");

        let xyz = XYZ::from([1., 2., 3.]);
        assert_eq!(xyz, XYZ::new(1., 2., 3.));
        assert_eq!(xyz.to_array(), [1., 2., 3.]);
    }
}
