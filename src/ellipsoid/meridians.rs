use super::*;

// ----- Meridian geometry -----------------------------------------------------
impl Ellipsoid {
    /// The developed meridional arc, *M*, from latitude `phi_0` to latitude
    /// `phi` (both in radians), by the series in the third flattening, *n*,
    /// truncated after the *n³* terms (Ordnance Survey, "A guide to
    /// coordinate systems in Great Britain", eq. C3, with unit scale factor)
    #[must_use]
    pub fn meridional_arc(&self, phi: f64, phi_0: f64) -> f64 {
        let n = self.third_flattening();
        let n2 = n * n;
        let n3 = n2 * n;
        let d = phi - phi_0;
        let s = phi + phi_0;

        let ma = (1. + n + 1.25 * n2 + 1.25 * n3) * d;
        let mb = (3. * n + 3. * n2 + 21. / 8. * n3) * d.sin() * s.cos();
        let mc = (15. / 8. * n2 + 15. / 8. * n3) * (2. * d).sin() * (2. * s).cos();
        let md = 35. / 24. * n3 * (3. * d).sin() * (3. * s).cos();
        self.semiminor_axis() * (ma - mb + mc - md)
    }
}

// ----- Tests ---------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn meridional_arc() {
        // The meridian quadrant of GRS80
        assert_float_eq!(GRS80.meridional_arc(FRAC_PI_2, 0.), 10_001_965.7293, abs <= 1e-3);

        // Antisymmetric around the equator, and zero at the origin
        let phi = 55_f64.to_radians();
        assert_eq!(GRS80.meridional_arc(phi, phi), 0.);
        assert_float_eq!(
            GRS80.meridional_arc(phi, 0.),
            -GRS80.meridional_arc(-phi, 0.),
            abs <= 1e-9
        );

        // Additive
        let a = 10_f64.to_radians();
        let b = 20_f64.to_radians();
        assert_float_eq!(
            GRS80.meridional_arc(b, 0.),
            GRS80.meridional_arc(a, 0.) + GRS80.meridional_arc(b, a),
            abs <= 1e-6
        );
    }
}
