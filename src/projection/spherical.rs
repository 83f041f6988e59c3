//! The degenerate "projection" exposing plain latitude and longitude
use crate::authoring::*;
use crate::gridref::latlong;

/// Identity projection: easting is the longitude and northing the latitude,
/// both in degrees. Grid north is true north everywhere, at unit scale.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Spherical;

pub static SPHERICAL: Spherical = Spherical;

impl ProjectionCore for Spherical {
    fn name(&self) -> &str {
        "Lat/Long"
    }

    fn fwd(&self, _ellps: &Ellipsoid, lat_long: &LatLong) -> Projected {
        Projected {
            en: ENPair::new(lat_long.longitude, lat_long.latitude),
            convergence: 0.,
            scale: 1.,
        }
    }

    fn inv(&self, _ellps: &Ellipsoid, en: &ENPair) -> Result<LatLong, Error> {
        Ok(LatLong::new(en.north, en.east))
    }

    fn parse(&self, text: &str) -> Result<ENPair, Error> {
        let ll = latlong::parse(text)?;
        Ok(ENPair::new(ll.longitude, ll.latitude))
    }

    fn format(&self, projected: &Projected) -> String {
        latlong::format(&LatLong::new(projected.en.north, projected.en.east))
    }

    fn default_ellipsoid(&self) -> &'static Ellipsoid {
        &GRS80
    }

    fn default_datum(&self) -> &'static Datum {
        &WGS_1984
    }
}

// ----- Tests ---------------------------------------------------------------------
