//! Lambert Conformal Conic, as used for the French national grids
use crate::authoring::*;
use crate::gridref::lambert;
use crate::math::ancillary::w;

const MAX_ITERATIONS: usize = 50;
const TOLERANCE: f64 = 1e-7;

/// The defining constants of one Lambert zone. Angles in degrees.
#[derive(Debug, Clone)]
pub struct LambertZone {
    pub name: &'static str,
    /// Upper standard parallel
    pub phi_u: f64,
    /// Lower standard parallel
    pub phi_l: f64,
    /// Latitude of the false origin
    pub phi_b: f64,
    /// Longitude of the grid origin
    pub lambda_0: f64,
    pub e_0: f64,
    pub n_0: f64,
    /// French practice sometimes prefixes the northing with the zone
    /// number, e.g. `Y = 2210.98` for 210.98 km in zone II
    pub zone_digit: Option<u8>,
    pub ellipsoid: &'static Ellipsoid,
    pub datum: &'static Lazy<Datum>,
}

pub static LAMBERT_I: LambertZone = LambertZone {
    name: "Lambert I",
    phi_u: 50.39591167,
    phi_l: 48.59852278,
    phi_b: 49.5,
    lambda_0: 2.337229167,
    e_0: 600_000.,
    n_0: 200_000.,
    zone_digit: Some(1),
    ellipsoid: &CLARKE,
    datum: &NTF,
};

pub static LAMBERT_II: LambertZone = LambertZone {
    name: "Lambert II",
    phi_u: 47.69601444,
    phi_l: 45.89891889,
    phi_b: 46.8,
    lambda_0: 2.337229167,
    e_0: 600_000.,
    n_0: 200_000.,
    zone_digit: Some(2),
    ellipsoid: &CLARKE,
    datum: &NTF,
};

pub static LAMBERT_III: LambertZone = LambertZone {
    name: "Lambert III",
    phi_u: 44.99609389,
    phi_l: 43.19929139,
    phi_b: 44.1,
    lambda_0: 2.337229167,
    e_0: 600_000.,
    n_0: 200_000.,
    zone_digit: Some(3),
    ellipsoid: &CLARKE,
    datum: &NTF,
};

pub static LAMBERT_IV: LambertZone = LambertZone {
    name: "Lambert IV",
    phi_u: 42.76766333,
    phi_l: 41.56038778,
    phi_b: 42.165,
    lambda_0: 2.337229167,
    e_0: 234.358,
    n_0: 185_861.369,
    zone_digit: Some(4),
    ellipsoid: &CLARKE,
    datum: &NTF,
};

pub static LAMBERT_II_EXTENDED: LambertZone = LambertZone {
    name: "Lambert II etendu",
    phi_u: 47.69601444,
    phi_l: 45.89891889,
    phi_b: 46.8,
    lambda_0: 2.337229167,
    e_0: 600_000.,
    n_0: 2_200_000.,
    zone_digit: None,
    ellipsoid: &CLARKE,
    datum: &NTF,
};

pub static LAMBERT_93: LambertZone = LambertZone {
    name: "Lambert 93",
    phi_u: 49.,
    phi_l: 44.,
    phi_b: 46.5,
    lambda_0: 3.,
    e_0: 700_000.,
    n_0: 6_600_000.,
    zone_digit: None,
    ellipsoid: &GRS80,
    datum: &RGF_1993,
};

// The cone constant n, the mapping radius at the equator k, and the
// radius at the latitude of the false origin r0
#[derive(Debug)]
struct Cone {
    n: f64,
    k: f64,
    r0: f64,
}

impl LambertZone {
    fn cone(&self, ellps: &Ellipsoid) -> Cone {
        let e = ellps.eccentricity();
        let es = ellps.eccentricity_squared();
        let phi_l = self.phi_l.to_radians();
        let phi_u = self.phi_u.to_radians();

        let q_l = isometric_latitude(phi_l, e);
        let q_u = isometric_latitude(phi_u, e);
        let q_b = isometric_latitude(self.phi_b.to_radians(), e);
        let w_l = w(phi_l.sin(), es);
        let w_u = w(phi_u.sin(), es);

        let n = (w_u * phi_l.cos() / (w_l * phi_u.cos())).ln() / (q_u - q_l);
        let k = ellps.semimajor_axis() * phi_l.cos() * (q_l * n).exp() / (w_l * n);
        let r0 = k / (q_b * n).exp();
        Cone { n, k, r0 }
    }

    fn point_scale(ellps: &Ellipsoid, cone: &Cone, r: f64, sinphi: f64) -> f64 {
        let cosphi = (1. - sinphi * sinphi).sqrt();
        w(sinphi, ellps.eccentricity_squared()) * r * cone.n / (ellps.semimajor_axis() * cosphi)
    }
}

impl ProjectionCore for LambertZone {
    fn name(&self) -> &str {
        self.name
    }

    // ----- F O R W A R D -----------------------------------------------------------

    fn fwd(&self, ellps: &Ellipsoid, lat_long: &LatLong) -> Projected {
        let cone = self.cone(ellps);
        let phi = lat_long.latitude.to_radians();

        let r = cone.k / (isometric_latitude(phi, ellps.eccentricity()) * cone.n).exp();
        let gamma = (self.lambda_0 - lat_long.longitude).to_radians() * cone.n;

        Projected {
            en: ENPair::new(
                self.e_0 - r * gamma.sin(),
                self.n_0 + cone.r0 - r * gamma.cos(),
            ),
            convergence: gamma.to_degrees(),
            scale: LambertZone::point_scale(ellps, &cone, r, phi.sin()),
        }
    }

    // ----- I N V E R S E -----------------------------------------------------------

    fn inv(&self, ellps: &Ellipsoid, en: &ENPair) -> Result<LatLong, Error> {
        let cone = self.cone(ellps);
        let e = ellps.eccentricity();
        let es = ellps.eccentricity_squared();

        let edash = self.e_0 - en.east;
        let rdash = cone.r0 - en.north + self.n_0;
        let r = edash.hypot(rdash);
        let q = (cone.k / r).ln() / cone.n;
        let gamma = edash.atan2(rdash);
        let lambda = self.lambda_0.to_radians() - gamma / cone.n;

        // Newton-Raphson on sin 𝜙, starting from the spherical solution
        let mut sinphi = q.tanh();
        for i in 1..=MAX_ITERATIONS {
            let f1 = isometric_latitude_from_sin(sinphi, e) - q;
            let f2 = 1. / (1. - sinphi * sinphi) - es / (1. - es * sinphi * sinphi);
            let correction = -f1 / f2;
            sinphi += correction;
            if correction.abs() <= TOLERANCE {
                trace!("{}: inverse converged after {i} iterations", self.name);
                return Ok(LatLong::new(sinphi.asin().to_degrees(), lambda.to_degrees()));
            }
        }

        Err(Error::Convergence {
            what: "Lambert inverse",
            iterations: MAX_ITERATIONS,
        })
    }

    // ----- T E X T -----------------------------------------------------------------

    fn parse(&self, text: &str) -> Result<ENPair, Error> {
        let mut en = lambert::parse(text)?;
        if let Some(digit) = self.zone_digit {
            let band = f64::from(digit) * 1e6;
            if (band..band + 1e6).contains(&en.north) {
                en.north -= band;
            }
        }
        Ok(en)
    }

    fn format(&self, projected: &Projected) -> String {
        lambert::format(&projected.en)
    }

    fn default_ellipsoid(&self) -> &'static Ellipsoid {
        self.ellipsoid
    }

    fn default_datum(&self) -> &'static Datum {
        self.datum
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn origin() -> Result<(), Error> {
        let p = LAMBERT_93.fwd(&GRS80, &LatLong::new(46.5, 3.));
        assert_float_eq!(p.en.east, 700_000., abs <= 1e-6);
        assert_float_eq!(p.en.north, 6_600_000., abs <= 1e-6);
        assert_float_eq!(p.convergence, 0., abs <= 1e-12);

        let ll = LAMBERT_I.inv(&CLARKE, &ENPair::new(600_000., 200_000.))?;
        assert_float_eq!(ll.latitude, 49.5, abs <= 1e-7);
        assert_float_eq!(ll.longitude, 2.337229167, abs <= 1e-9);
        Ok(())
    }

    #[test]
    fn roundtrip() -> Result<(), Error> {
        let zones = [
            &LAMBERT_I,
            &LAMBERT_II,
            &LAMBERT_III,
            &LAMBERT_IV,
            &LAMBERT_II_EXTENDED,
            &LAMBERT_93,
        ];
        let ll = LatLong::new(45.0, 5.5);
        for zone in zones {
            let ellps = zone.default_ellipsoid();
            let p = zone.fwd(ellps, &ll);
            let back = zone.inv(ellps, &p.en)?;
            assert_float_eq!(back.latitude, ll.latitude, abs <= 1e-6);
            assert_float_eq!(back.longitude, ll.longitude, abs <= 1e-9);
        }
        Ok(())
    }

    #[test]
    fn convergence_and_scale() {
        // East of the central meridian, true north lies west of grid north
        let p = LAMBERT_93.fwd(&GRS80, &LatLong::new(46.5, 6.));
        let n = (LAMBERT_93.cone(&GRS80)).n;
        assert_float_eq!(p.convergence, -3. * n, abs <= 1e-12);
        assert!(p.convergence < 0.);

        // Unit scale on the standard parallels, less than unit between them
        let p = LAMBERT_93.fwd(&GRS80, &LatLong::new(44., 3.));
        assert_float_eq!(p.scale, 1., abs <= 1e-9);
        let p = LAMBERT_93.fwd(&GRS80, &LatLong::new(49., 3.));
        assert_float_eq!(p.scale, 1., abs <= 1e-9);
        let p = LAMBERT_93.fwd(&GRS80, &LatLong::new(46.5, 3.));
        assert!(p.scale < 1.);
    }

    #[test]
    fn inverse_failure() {
        let ll = LAMBERT_I.inv(&CLARKE, &ENPair::new(f64::NAN, 0.));
        assert!(matches!(
            ll,
            Err(Error::Convergence {
                what: "Lambert inverse",
                iterations: MAX_ITERATIONS
            })
        ));
    }

    #[test]
    fn zone_digit() -> Result<(), Error> {
        assert_float_eq!(LAMBERT_II.parse("X = 600 Y = 2210.98")?.north, 210_980., abs <= 1e-6);
        assert_float_eq!(LAMBERT_II.parse("X = 600 Y = 210.98")?.north, 210_980., abs <= 1e-6);
        // Only the digit of the zone itself is stripped
        assert_float_eq!(LAMBERT_I.parse("600 2210.98")?.north, 2_210_980., abs <= 1e-6);
        assert_float_eq!(
            LAMBERT_II_EXTENDED.parse("600 2210.98")?.north,
            2_210_980.,
            abs <= 1e-6
        );
        assert!(matches!(LAMBERT_IV.parse("X = 1"), Err(Error::GridFormat(_))));
        Ok(())
    }
}
