//! Transverse Mercator, by the series of the Ordnance Survey guide to
//! coordinate systems in Great Britain (Redfearn's series), for the
//! British, Irish, New Zealand, Austrian and UTM grids
use crate::authoring::*;
use crate::gridref::{bmn, letters, metres, utm};
use crate::math::angular::normalize_symmetric_degrees;
use std::borrow::Cow;

const MAX_ITERATIONS: usize = 100;
// 0.01 mm
const TOLERANCE: f64 = 1e-5;

/// The grid reference text format of a transverse Mercator grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCodec {
    /// Two letter 100 km squares, `SU 12345 67890`
    Osgb,
    /// One letter 100 km squares, `O 15904 34671`
    Irish,
    /// Plain metres, `1576041 mE 5515143 mN`
    Metres,
    /// Austrian Bundesmeldenetz, `M28 150000 5250000`
    Bmn(&'static str),
    /// `31N 448251 mE 5411932 mN`
    Utm { zone: u8, north: bool },
}

/// The defining constants of one transverse Mercator grid. Angles in degrees.
#[derive(Debug, Clone)]
pub struct TransverseMercatorZone {
    pub name: Cow<'static, str>,
    /// Scale factor on the central meridian
    pub f_0: f64,
    /// Latitude of the true origin
    pub phi_0: f64,
    /// Longitude of the true origin, i.e. the central meridian
    pub lambda_0: f64,
    pub e_0: f64,
    pub n_0: f64,
    pub codec: GridCodec,
    pub ellipsoid: &'static Ellipsoid,
    pub datum: &'static Lazy<Datum>,
}

pub static OSGB: TransverseMercatorZone = TransverseMercatorZone {
    name: Cow::Borrowed("OSGB"),
    f_0: 0.9996012717,
    phi_0: 49.,
    lambda_0: -2.,
    e_0: 400_000.,
    n_0: -100_000.,
    codec: GridCodec::Osgb,
    ellipsoid: &AIRY,
    datum: &OSGB_1936,
};

pub static IRISH_GRID: TransverseMercatorZone = TransverseMercatorZone {
    name: Cow::Borrowed("Irish Grid"),
    f_0: 1.000035,
    phi_0: 53.5,
    lambda_0: -8.,
    e_0: 200_000.,
    n_0: 250_000.,
    codec: GridCodec::Irish,
    ellipsoid: &MODIFIED_AIRY,
    datum: &IRELAND_1965,
};

pub static NZTM2000: TransverseMercatorZone = TransverseMercatorZone {
    name: Cow::Borrowed("NZTM2000"),
    f_0: 0.9996,
    phi_0: 0.,
    lambda_0: 173.,
    e_0: 1_600_000.,
    n_0: 10_000_000.,
    codec: GridCodec::Metres,
    ellipsoid: &GRS80,
    datum: &NZGD_2000,
};

pub static AUSTRIAN_M28: TransverseMercatorZone = TransverseMercatorZone {
    name: Cow::Borrowed("Austrian BMN M28"),
    f_0: 1.,
    phi_0: 0.,
    lambda_0: 10. + 1. / 3.,
    e_0: 150_000.,
    n_0: -5_000_000.,
    codec: GridCodec::Bmn("M28"),
    ellipsoid: &BESSEL,
    datum: &MGI,
};

pub static AUSTRIAN_M31: TransverseMercatorZone = TransverseMercatorZone {
    name: Cow::Borrowed("Austrian BMN M31"),
    f_0: 1.,
    phi_0: 0.,
    lambda_0: 13. + 1. / 3.,
    e_0: 450_000.,
    n_0: -5_000_000.,
    codec: GridCodec::Bmn("M31"),
    ellipsoid: &BESSEL,
    datum: &MGI,
};

pub static AUSTRIAN_M34: TransverseMercatorZone = TransverseMercatorZone {
    name: Cow::Borrowed("Austrian BMN M34"),
    f_0: 1.,
    phi_0: 0.,
    lambda_0: 16. + 1. / 3.,
    e_0: 750_000.,
    n_0: -5_000_000.,
    codec: GridCodec::Bmn("M34"),
    ellipsoid: &BESSEL,
    datum: &MGI,
};

// All 120 UTM zones, north then south for each zone number
static UTM_ZONES: Lazy<Vec<TransverseMercatorZone>> = Lazy::new(|| {
    let mut zones = Vec::with_capacity(120);
    for zone in 1..=60_u8 {
        for north in [true, false] {
            let hemisphere = if north { 'N' } else { 'S' };
            zones.push(TransverseMercatorZone {
                name: Cow::Owned(format!("UTM {zone}{hemisphere}")),
                f_0: 0.9996,
                phi_0: 0.,
                lambda_0: -183. + 6. * f64::from(zone),
                e_0: 500_000.,
                n_0: if north { 0. } else { 10_000_000. },
                codec: GridCodec::Utm { zone, north },
                ellipsoid: &WGS84,
                datum: &WGS_1984,
            });
        }
    }
    zones
});

/// The UTM zone numbered `zone` (1..=60), in the northern or southern hemisphere
pub fn utm_zone(zone: u8, north: bool) -> Result<&'static TransverseMercatorZone, Error> {
    if !(1..=60).contains(&zone) {
        error!("UTM: 'zone' must be in the interval 1..60, got {zone}");
        return Err(Error::InvalidZone(format!(
            "UTM zone {zone} outside the interval 1..60"
        )));
    }
    let index = (usize::from(zone) - 1) * 2 + usize::from(!north);
    Ok(&UTM_ZONES[index])
}

impl TransverseMercatorZone {
    // The latitude 𝜙' for which the developed meridional arc equals the
    // northing from the true origin
    fn footpoint(&self, ellps: &Ellipsoid, northing: f64) -> Result<f64, Error> {
        let af0 = ellps.semimajor_axis() * self.f_0;
        let phi_0 = self.phi_0.to_radians();

        let mut phi = phi_0 + northing / af0;
        for i in 0..MAX_ITERATIONS {
            let m = ellps.meridional_arc(phi, phi_0) * self.f_0;
            let residual = northing - m;
            if residual.abs() < TOLERANCE {
                trace!("{}: footpoint latitude after {i} iterations", self.name);
                return Ok(phi);
            }
            phi += residual / af0;
        }

        Err(Error::Convergence {
            what: "transverse Mercator footpoint latitude",
            iterations: MAX_ITERATIONS,
        })
    }

    // Radii of curvature, 𝜈 and 𝜌, scaled by f0, and 𝜂² = 𝜈/𝜌 - 1
    fn radii(&self, ellps: &Ellipsoid, sinphi: f64) -> (f64, f64, f64) {
        let es = ellps.eccentricity_squared();
        let af0 = ellps.semimajor_axis() * self.f_0;
        let w2 = 1. - es * sinphi * sinphi;
        let nu = af0 / w2.sqrt();
        let rho = af0 * (1. - es) / w2.powf(1.5);
        (nu, rho, nu / rho - 1.)
    }
}

#[allow(non_snake_case)]
impl ProjectionCore for TransverseMercatorZone {
    fn name(&self) -> &str {
        &self.name
    }

    // ----- F O R W A R D -----------------------------------------------------------

    fn fwd(&self, ellps: &Ellipsoid, lat_long: &LatLong) -> Projected {
        let phi = lat_long.latitude.to_radians();
        let dlam = normalize_symmetric_degrees(lat_long.longitude - self.lambda_0).to_radians();

        let (s, c) = phi.sin_cos();
        let t = phi.tan();
        let t2 = t * t;
        let t4 = t2 * t2;
        let c3 = c * c * c;
        let c5 = c3 * c * c;
        let (nu, rho, eta2) = self.radii(ellps, s);

        let M = ellps.meridional_arc(phi, self.phi_0.to_radians()) * self.f_0;
        let I = M + self.n_0;
        let II = nu / 2. * s * c;
        let III = nu / 24. * s * c3 * (5. - t2 + 9. * eta2);
        let IIIA = nu / 720. * s * c5 * (61. - 58. * t2 + t4);
        let IV = nu * c;
        let V = nu / 6. * c3 * (nu / rho - t2);
        let VI = nu / 120. * c5 * (5. - 18. * t2 + t4 + 14. * eta2 - 58. * t2 * eta2);

        let l2 = dlam * dlam;
        let north = I + l2 * horner(l2, &[II, III, IIIA]);
        let east = self.e_0 + dlam * horner(l2, &[IV, V, VI]);

        // Convergence, as the bearing of true north from grid north,
        // and point scale (Snyder, 1987, eq. 8-11)
        let a2 = (dlam * c).powi(2);
        let gamma = -dlam
            * s
            * (1. + a2 * (1. + 3. * eta2 + 2. * eta2 * eta2) / 3. + a2 * a2 * (2. - t2) / 15.);
        let ep2 = ellps.second_eccentricity_squared();
        let C = ep2 * c * c;
        let k = self.f_0
            * (1.
                + (1. + C) * a2 / 2.
                + (5. - 4. * t2 + 42. * C + 13. * C * C - 28. * ep2) * a2 * a2 / 24.
                + (61. - 148. * t2 + 16. * t4) * a2 * a2 * a2 / 720.);

        Projected {
            en: ENPair::new(east, north),
            convergence: gamma.to_degrees(),
            scale: k,
        }
    }

    // ----- I N V E R S E -----------------------------------------------------------

    fn inv(&self, ellps: &Ellipsoid, en: &ENPair) -> Result<LatLong, Error> {
        let phi = self.footpoint(ellps, en.north - self.n_0)?;

        let (s, c) = phi.sin_cos();
        let t = phi.tan();
        let t2 = t * t;
        let t4 = t2 * t2;
        let t6 = t4 * t2;
        let sec = 1. / c;
        let (nu, rho, eta2) = self.radii(ellps, s);
        let nu3 = nu * nu * nu;
        let nu5 = nu3 * nu * nu;
        let nu7 = nu5 * nu * nu;

        let VII = t / (2. * rho * nu);
        let VIII = t / (24. * rho * nu3) * (5. + 3. * t2 + eta2 - 9. * t2 * eta2);
        let IX = t / (720. * rho * nu5) * (61. + 90. * t2 + 45. * t4);
        let X = sec / nu;
        let XI = sec / (6. * nu3) * (nu / rho + 2. * t2);
        let XII = sec / (120. * nu5) * (5. + 28. * t2 + 24. * t4);
        let XIIA = sec / (5040. * nu7) * (61. + 662. * t2 + 1320. * t4 + 720. * t6);

        let de = en.east - self.e_0;
        let d2 = de * de;
        let lat = phi - d2 * horner(d2, &[VII, -VIII, IX]);
        let lon = self.lambda_0.to_radians() + de * horner(d2, &[X, -XI, XII, -XIIA]);

        Ok(LatLong::new(
            lat.to_degrees(),
            normalize_symmetric_degrees(lon.to_degrees()),
        ))
    }

    // ----- T E X T -----------------------------------------------------------------

    fn parse(&self, text: &str) -> Result<ENPair, Error> {
        match self.codec {
            GridCodec::Osgb => letters::parse_osgb(text),
            GridCodec::Irish => letters::parse_irish(text),
            GridCodec::Metres => metres::parse(text),
            GridCodec::Bmn(zone) => bmn::parse(text, zone),
            GridCodec::Utm { zone, north } => utm::parse(text, zone, north),
        }
    }

    fn format(&self, projected: &Projected) -> String {
        let en = &projected.en;
        match self.codec {
            GridCodec::Osgb => letters::format_osgb(en),
            GridCodec::Irish => letters::format_irish(en),
            GridCodec::Metres => metres::format(en),
            GridCodec::Bmn(zone) => bmn::format(en, zone),
            GridCodec::Utm { zone, north } => utm::format(en, zone, north),
        }
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
    use crate::math::angular::dms_to_dd;
    use float_eq::assert_float_eq;

    #[test]
    fn os_guide_example() -> Result<(), Error> {
        // Worked example from the OS "Guide to coordinate systems in Great Britain"
        let ll = LatLong::new(dms_to_dd(52, 39, 27.2531), dms_to_dd(1, 43, 4.5177));
        let p = OSGB.fwd(&AIRY, &ll);
        assert_float_eq!(p.en.east, 651_409.903, abs <= 1e-3);
        assert_float_eq!(p.en.north, 313_177.270, abs <= 1e-3);

        let back = OSGB.inv(&AIRY, &ENPair::new(651_409.903, 313_177.270))?;
        assert_float_eq!(back.latitude, ll.latitude, abs <= 3e-8);
        assert_float_eq!(back.longitude, ll.longitude, abs <= 3e-8);
        Ok(())
    }

    #[test]
    fn utm() -> Result<(), Error> {
        let zone = utm_zone(32, true)?;
        assert_eq!(zone.name, "UTM 32N");
        assert_eq!(zone.lambda_0, 9.);

        let p = zone.fwd(&WGS84, &LatLong::new(55., 12.));
        assert_float_eq!(p.en.east, 691_875.632_139_661, abs <= 1e-2);
        assert_float_eq!(p.en.north, 6_098_907.825_005_012, abs <= 1e-2);

        // Three degrees off the central meridian the series agree to a millimetre
        let back = zone.inv(&WGS84, &p.en)?;
        assert_float_eq!(back.latitude, 55., abs <= 1e-8);
        assert_float_eq!(back.longitude, 12., abs <= 1e-8);

        // Southern hemisphere, false northing
        let south = utm_zone(59, false)?;
        let p = south.fwd(&WGS84, &LatLong::new(-41., 171.));
        assert!(p.en.north < 10_000_000.);
        let back = south.inv(&WGS84, &p.en)?;
        assert_float_eq!(back.latitude, -41., abs <= 1e-9);
        assert_float_eq!(back.longitude, 171., abs <= 1e-9);

        // Across the antimeridian
        let p = utm_zone(1, true)?.fwd(&WGS84, &LatLong::new(10., 179.5));
        assert!(p.en.east < 500_000.);

        assert!(matches!(utm_zone(0, true), Err(Error::InvalidZone(_))));
        assert!(matches!(utm_zone(61, false), Err(Error::InvalidZone(_))));
        Ok(())
    }

    #[test]
    fn footpoint_failure() {
        let ll = OSGB.inv(&AIRY, &ENPair::new(0., f64::NAN));
        assert!(matches!(
            ll,
            Err(Error::Convergence {
                iterations: MAX_ITERATIONS,
                ..
            })
        ));
    }

    #[test]
    fn central_meridian() {
        // On the central meridian at the origin latitude, only the false origin remains
        let p = NZTM2000.fwd(&GRS80, &LatLong::new(0., 173.));
        assert_float_eq!(p.en.east, 1_600_000., abs <= 1e-9);
        assert_float_eq!(p.en.north, 10_000_000., abs <= 1e-9);
        assert_float_eq!(p.scale, 0.9996, abs <= 1e-15);
        assert_eq!(p.convergence, 0.);

        let p = AUSTRIAN_M28.fwd(&BESSEL, &LatLong::new(47., 10. + 1. / 3.));
        assert_float_eq!(p.en.east, 150_000., abs <= 1e-9);
        assert_float_eq!(p.scale, 1., abs <= 1e-15);
    }

    #[test]
    fn convergence_and_scale() {
        // East of the central meridian, true north lies west of grid north
        let p = OSGB.fwd(&AIRY, &LatLong::new(55., 1.));
        assert!(p.convergence < 0.);
        // Approximately -Δλ sin 𝜙
        assert_float_eq!(p.convergence, -3. * 55_f64.to_radians().sin(), abs <= 0.01);
        assert!(p.scale > OSGB.f_0);

        let p = OSGB.fwd(&AIRY, &LatLong::new(55., -5.));
        assert!(p.convergence > 0.);
    }

    #[test]
    fn roundtrip() -> Result<(), Error> {
        let cases = [
            (&IRISH_GRID, LatLong::new(53.35, -6.26)),
            (&NZTM2000, LatLong::new(-41.29, 174.78)),
            (&AUSTRIAN_M28, LatLong::new(47.26, 11.39)),
            (&AUSTRIAN_M31, LatLong::new(47.8, 13.04)),
            (&AUSTRIAN_M34, LatLong::new(48.21, 16.37)),
        ];
        for (zone, ll) in cases {
            let ellps = zone.default_ellipsoid();
            let p = zone.fwd(ellps, &ll);
            let back = zone.inv(ellps, &p.en)?;
            assert_float_eq!(back.latitude, ll.latitude, abs <= 1e-9);
            assert_float_eq!(back.longitude, ll.longitude, abs <= 1e-9);

            let text = zone.format(&p);
            let en = zone.parse(&text)?;
            assert_float_eq!(en.east, p.en.east, abs <= 1.);
            assert_float_eq!(en.north, p.en.north, abs <= 1.);
        }
        Ok(())
    }
}
