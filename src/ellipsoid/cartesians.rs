use super::*;
use crate::coordinate::{LatLong, XYZ};
use log::trace;

use std::f64::consts::FRAC_PI_2;

const MAX_ITERATIONS: usize = 100;
const TOLERANCE: f64 = 1e-8;

impl Ellipsoid {
    // ----- Cartesian <--> Geographic conversion ----------------------------------

    /// Geographic to cartesian conversion, with the height `h` above
    /// the ellipsoid in metres.
    #[must_use]
    #[allow(non_snake_case)] // make it possible to mimic math notation
    pub fn cartesian(&self, geographic: &LatLong, h: f64) -> XYZ {
        let phi = geographic.latitude.to_radians();
        let lam = geographic.longitude.to_radians();

        let N = self.prime_vertical_radius_of_curvature(phi);
        let (sinphi, cosphi) = phi.sin_cos();
        let (sinlam, coslam) = lam.sin_cos();

        let X = (N + h) * cosphi * coslam;
        let Y = (N + h) * cosphi * sinlam;
        let Z = (N * (1.0 - self.eccentricity_squared()) + h) * sinphi;

        XYZ::new(X, Y, Z)
    }

    /// Cartesian to geographic conversion, returning the latitude/longitude
    /// and the height above the ellipsoid.
    ///
    /// Uses the classical fixed point iteration on the latitude,
    /// 𝜙ₙ₊₁ = atan((Z + 𝜈 e² sin 𝜙ₙ) / p), until two consecutive estimates
    /// differ by no more than 1e-8 radians.
    #[allow(non_snake_case)]
    pub fn geographic(&self, cartesian: &XYZ) -> Result<(LatLong, f64), Error> {
        let XYZ { x: X, y: Y, z: Z } = *cartesian;
        let es = self.eccentricity_squared();

        // The longitude is straightforward
        let lam = Y.atan2(X);

        // The perpendicular distance from the point coordinate to the Z-axis
        let p = X.hypot(Y);

        // For p < 1 picometer, we simplify things to avoid numerical havoc.
        if p < 1.0e-12 {
            // The sign of Z determines the hemisphere
            let phi = FRAC_PI_2.copysign(Z);
            // We have forced phi to one of the poles, so the height is |Z| - b
            let h = Z.abs() - self.semiminor_axis();
            return Ok((LatLong::new(phi.to_degrees(), lam.to_degrees()), h));
        }

        let mut phi = (Z / (p * (1. - es))).atan();
        for i in 1..=MAX_ITERATIONS {
            let N = self.prime_vertical_radius_of_curvature(phi);
            let next = ((Z + N * es * phi.sin()) / p).atan();
            let done = (next - phi).abs() <= TOLERANCE;
            phi = next;
            if done {
                trace!("geographic: converged after {i} iterations");
                let h = p / phi.cos() - self.prime_vertical_radius_of_curvature(phi);
                return Ok((LatLong::new(phi.to_degrees(), lam.to_degrees()), h));
            }
        }

        Err(Error::Convergence {
            what: "cartesian to geographic conversion",
            iterations: MAX_ITERATIONS,
        })
    }
}

// ----- Tests ---------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn geo_to_cart() -> Result<(), Error> {
        // Roundtrip geographic <-> cartesian
        let geo = LatLong::new(55., 12.);
        let cart = GRS80.cartesian(&geo, 100.);
        let (geo2, h) = GRS80.geographic(&cart)?;
        assert_float_eq!(geo.latitude, geo2.latitude, abs <= 1e-9);
        assert_float_eq!(geo.longitude, geo2.longitude, abs <= 1e-12);
        assert_float_eq!(h, 100., abs <= 1e-3);

        // Southern and western hemispheres
        let geo = LatLong::new(-41.2, -73.5);
        let (geo2, h) = INTERNATIONAL.geographic(&INTERNATIONAL.cartesian(&geo, -20.))?;
        assert_float_eq!(geo.latitude, geo2.latitude, abs <= 1e-9);
        assert_float_eq!(geo.longitude, geo2.longitude, abs <= 1e-12);
        assert_float_eq!(h, -20., abs <= 1e-3);
        Ok(())
    }

    #[test]
    fn no_convergence() {
        let res = GRS80.geographic(&XYZ::new(f64::NAN, 0., 0.));
        assert!(matches!(
            res,
            Err(Error::Convergence {
                what: "cartesian to geographic conversion",
                iterations: MAX_ITERATIONS
            })
        ));
    }

    #[test]
    fn equator_and_poles() -> Result<(), Error> {
        let cart = GRS80.cartesian(&LatLong::new(0., 0.), 0.);
        assert_float_eq!(cart.x, GRS80.semimajor_axis(), abs <= 1e-9);
        assert_float_eq!(cart.z, 0., abs <= 1e-9);

        let b = GRS80.semiminor_axis();
        let (geo, h) = GRS80.geographic(&XYZ::new(0., 0., b + 10.))?;
        assert_eq!(geo.latitude, 90.);
        assert_float_eq!(h, 10., abs <= 1e-9);

        let (geo, h) = GRS80.geographic(&XYZ::new(0., 0., -b))?;
        assert_eq!(geo.latitude, -90.);
        assert_float_eq!(h, 0., abs <= 1e-9);
        Ok(())
    }
}
