//! Map projections, and the uniform [`Projection`] handle binding a
//! [`Position`] to a projection, an ellipsoid and a datum.

use crate::authoring::*;

pub mod lambert;
pub mod orthomorphic;
pub mod spherical;
pub mod tmerc;

/// The outcome of a forward projection: the plane coordinates, the grid
/// convergence (degrees) and the point scale factor.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Projected {
    pub en: ENPair,
    pub convergence: f64,
    pub scale: f64,
}

/// The core functionality exposed by the individual projection families.
///
/// Each family is implemented by a struct holding the constants of one zone,
/// so the formulae are written once per family, and each zone is just data.
/// The grid convergence is the bearing of true north, measured clockwise
/// from grid north, in degrees.
pub trait ProjectionCore: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Geographic coordinates on `ellipsoid` to plane coordinates
    fn fwd(&self, ellipsoid: &Ellipsoid, lat_long: &LatLong) -> Projected;

    /// Plane coordinates to geographic coordinates on `ellipsoid`
    fn inv(&self, ellipsoid: &Ellipsoid, en: &ENPair) -> Result<LatLong, Error>;

    /// Read the grid reference text format of this projection
    fn parse(&self, text: &str) -> Result<ENPair, Error>;

    /// Write the grid reference text format of this projection
    fn format(&self, projected: &Projected) -> String;

    fn default_ellipsoid(&self) -> &'static Ellipsoid;

    fn default_datum(&self) -> &'static Datum;
}

/// A [`Position`] as seen through one projection, ellipsoid and datum.
///
/// Everything is derived from the owned position at construction, so
/// an instance constructed from plane coordinates is indistinguishable
/// from one constructed from the position it resolves to.
#[derive(Debug, Clone)]
pub struct Projection<'a> {
    core: &'a dyn ProjectionCore,
    ellipsoid: &'a Ellipsoid,
    datum: &'a Datum,
    position: Position,
    lat_long: LatLong,
    projected: Projected,
}

impl<'a> Projection<'a> {
    /// Forward construction: project `position`
    pub fn new(
        core: &'a dyn ProjectionCore,
        position: &Position,
        ellipsoid: &'a Ellipsoid,
        datum: &'a Datum,
    ) -> Result<Projection<'a>, Error> {
        let lat_long = position.to_lat_long(ellipsoid, datum)?;
        let projected = core.fwd(ellipsoid, &lat_long);
        debug!(
            "{}: ({:.9}, {:.9}) -> ({:.3}, {:.3})",
            core.name(),
            lat_long.latitude,
            lat_long.longitude,
            projected.en.east,
            projected.en.north
        );
        Ok(Projection {
            core,
            ellipsoid,
            datum,
            position: *position,
            lat_long,
            projected,
        })
    }

    /// Inverse construction: the position at plane coordinates `en`,
    /// at height zero above `ellipsoid`
    pub fn from_en(
        core: &'a dyn ProjectionCore,
        en: ENPair,
        ellipsoid: &'a Ellipsoid,
        datum: &'a Datum,
    ) -> Result<Projection<'a>, Error> {
        let lat_long = core.inv(ellipsoid, &en)?;
        let position = Position::from_lat_long(&lat_long, 0., ellipsoid, datum);
        Projection::new(core, &position, ellipsoid, datum)
    }

    /// Construction from grid reference text. Parse errors are returned as is,
    /// never replaced by a default coordinate.
    pub fn make_point(
        core: &'a dyn ProjectionCore,
        text: &str,
        ellipsoid: &'a Ellipsoid,
        datum: &'a Datum,
    ) -> Result<Projection<'a>, Error> {
        let en = core.parse(text)?;
        Projection::from_en(core, en, ellipsoid, datum)
    }

    #[must_use]
    pub fn to_en(&self) -> ENPair {
        self.projected.en
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Grid convergence in degrees
    #[must_use]
    pub fn grid_convergence(&self) -> f64 {
        self.projected.convergence
    }

    #[must_use]
    pub fn point_scale_factor(&self) -> f64 {
        self.projected.scale
    }

    /// Latitude and longitude on the ellipsoid and datum of this projection
    #[must_use]
    pub fn lat_long(&self) -> LatLong {
        self.lat_long
    }

    #[must_use]
    pub fn ellipsoid(&self) -> &'a Ellipsoid {
        self.ellipsoid
    }

    #[must_use]
    pub fn datum(&self) -> &'a Datum {
        self.datum
    }

    #[must_use]
    pub fn core(&self) -> &'a dyn ProjectionCore {
        self.core
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.core.name()
    }
}

/// The grid reference text
impl fmt::Display for Projection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.core.format(&self.projected))
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn forward_and_inverse_agree() -> Result<(), Error> {
        let p = Projection::make_point(&OSGB, "TG 51409 13177", &AIRY, &OSGB_1936)?;
        let q = Projection::new(&OSGB, p.position(), &AIRY, &OSGB_1936)?;
        assert_float_eq!(p.to_en().east, q.to_en().east, abs <= 1e-6);
        assert_float_eq!(p.to_en().north, q.to_en().north, abs <= 1e-6);
        assert_eq!(p.to_string(), "TG 51409 13177");
        assert_eq!(p.name(), "OSGB");
        assert_eq!(p.ellipsoid(), &AIRY);
        assert_eq!(p.datum(), &*OSGB_1936);
        assert_eq!(p.core().name(), "OSGB");
        Ok(())
    }

    #[test]
    fn parse_errors_propagate() {
        let p = Projection::make_point(&OSGB, "ST755619 1", &AIRY, &OSGB_1936);
        assert!(matches!(p, Err(Error::GridFormat(_))));
    }

    #[test]
    fn across_systems() -> Result<(), Error> {
        let osgb = Projection::make_point(&OSGB, "SU 00000 00000", &AIRY, &OSGB_1936)?;
        let ll = Projection::new(&SPHERICAL, osgb.position(), &GRS80, &WGS_1984)?;
        let back = Projection::new(&OSGB, ll.position(), &AIRY, &OSGB_1936)?;
        assert_float_eq!(back.to_en().east, 400_000., abs <= 1e-6);
        assert_float_eq!(back.to_en().north, 100_000., abs <= 1e-6);
        assert_eq!(back.to_string(), "SU 00000 00000");
        Ok(())
    }
}
