use crate::authoring::*;

/// An absolute position in 3D space, independent of ellipsoid and datum.
///
/// Internally the position is stored as a WGS84 earth centered cartesian
/// triple. Equality is the exact floating point comparison of that triple,
/// so two positions reached by different routes will rarely compare equal.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Position {
    wgs84: XYZ,
}

impl Position {
    /// From cartesian coordinates in the frame of `datum`
    #[must_use]
    pub fn from_xyz(xyz: &XYZ, datum: &Datum) -> Position {
        Position {
            wgs84: datum.to_wgs84(xyz),
        }
    }

    /// From latitude/longitude and ellipsoidal height, on `ellipsoid`
    /// in the frame of `datum`
    #[must_use]
    pub fn from_lat_long(
        lat_long: &LatLong,
        height: f64,
        ellipsoid: &Ellipsoid,
        datum: &Datum,
    ) -> Position {
        let local = ellipsoid.cartesian(lat_long, height);
        Position::from_xyz(&local, datum)
    }

    /// The cartesian coordinates in the frame of `datum`
    #[must_use]
    pub fn coords(&self, datum: &Datum) -> XYZ {
        datum.from_wgs84(&self.wgs84)
    }

    /// The WGS84 cartesian coordinates, as stored
    #[must_use]
    pub fn wgs84(&self) -> XYZ {
        self.wgs84
    }

    pub fn to_lat_long(&self, ellipsoid: &Ellipsoid, datum: &Datum) -> Result<LatLong, Error> {
        Ok(ellipsoid.geographic(&self.coords(datum))?.0)
    }

    /// The height above `ellipsoid`, in the frame of `datum`
    pub fn ellipsoid_height(&self, ellipsoid: &Ellipsoid, datum: &Datum) -> Result<f64, Error> {
        Ok(ellipsoid.geographic(&self.coords(datum))?.1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WGS84 XYZ {}", self.wgs84)
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn lat_long_roundtrip() -> Result<(), Error> {
        let ll = LatLong::new(52.657570301, 1.717921581);
        let p = Position::from_lat_long(&ll, 24.7, &AIRY, &OSGB_1936);
        let back = p.to_lat_long(&AIRY, &OSGB_1936)?;
        assert_float_eq!(back.latitude, ll.latitude, abs <= 1e-9);
        assert_float_eq!(back.longitude, ll.longitude, abs <= 1e-9);
        assert_float_eq!(p.ellipsoid_height(&AIRY, &OSGB_1936)?, 24.7, abs <= 1e-3);
        Ok(())
    }

    #[test]
    fn datum_shift() -> Result<(), Error> {
        // OSGB36 sits roughly 100 m east and 50 m south of WGS84 in East Anglia
        let ll = LatLong::new(52.657570301, 1.717921581);
        let p = Position::from_lat_long(&ll, 0., &GRS80, &WGS_1984);
        let osgb = p.to_lat_long(&AIRY, &OSGB_1936)?;
        assert!(osgb.latitude != ll.latitude);
        assert_float_eq!(osgb.latitude, ll.latitude, abs <= 0.01);
        assert_float_eq!(osgb.longitude, ll.longitude, abs <= 0.01);
        Ok(())
    }

    #[test]
    fn cartesian() {
        let xyz = XYZ::new(3_874_938.849, 116_218.624, 5_047_168.208);
        let p = Position::from_xyz(&xyz, &OSGB_1936);
        let back = p.coords(&OSGB_1936);
        assert_float_eq!(back.to_array(), xyz.to_array(), abs_all <= 1e-6);

        // Exact equality for identical construction
        assert_eq!(p, Position::from_xyz(&xyz, &OSGB_1936));
        assert_eq!(Position::from_xyz(&xyz, &WGS_1984).wgs84(), xyz);
    }
}
