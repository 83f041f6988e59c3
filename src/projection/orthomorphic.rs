//! Orthomorphic (conformal) projections defined by complex polynomial
//! series, such as the New Zealand Map Grid.
//!
//! The forward projection maps latitude, through a real series in units of
//! 10⁵ seconds of arc, to an isometric-like latitude 𝜓. The complex number
//! 𝜁 = 𝜓 + iΔ𝜆 then maps to the normalized grid coordinate
//! z = Σ bᵢ 𝜁ⁱ⁺¹, with north along the real axis and east along the
//! imaginary axis.
use crate::authoring::*;
use crate::gridref::metres;

// Seconds of arc per degree, over 10⁵
const LT_UNIT: f64 = 3600e-5;

/// The defining constants of an orthomorphic projection. Angles in degrees.
#[derive(Debug, Clone)]
pub struct OrthomorphicZone {
    pub name: &'static str,
    pub n_0: f64,
    pub e_0: f64,
    pub phi_0: f64,
    pub lambda_0: f64,
    /// Latitude to 𝜓
    pub cfi: &'static [f64],
    /// 𝜓 to latitude
    pub cfl: &'static [f64],
    /// 𝜁 to z
    pub cfb1: &'static [Complex],
    /// z to 𝜁, first approximation
    pub cfb2: &'static [Complex],
    pub ellipsoid: &'static Ellipsoid,
    pub datum: &'static Lazy<Datum>,
}

pub static NZMG: OrthomorphicZone = OrthomorphicZone {
    name: "NZMG",
    n_0: 6_023_150.,
    e_0: 2_510_000.,
    phi_0: -41.,
    lambda_0: 173.,
    cfi: &[
        0.6399175073,
        -0.1358797613,
        0.063294409,
        -0.02526853,
        0.0117879,
        -0.0055161,
        0.0026906,
        -0.001333,
        0.00067,
        -0.00034,
    ],
    cfl: &[
        1.5627014243,
        0.5185406398,
        -0.03333098,
        -0.1052906,
        -0.0368594,
        0.007317,
        0.01220,
        0.00394,
        -0.0013,
    ],
    cfb1: &[
        Complex::new(0.7557853228, 0.0),
        Complex::new(0.249204646, 0.003371507),
        Complex::new(-0.001541739, 0.041058560),
        Complex::new(-0.10162907, 0.01727609),
        Complex::new(-0.26623489, -0.36249218),
        Complex::new(-0.6870983, -1.1651967),
    ],
    cfb2: &[
        Complex::new(1.3231270439, 0.0),
        Complex::new(-0.577245789, -0.007809598),
        Complex::new(0.508307513, -0.112208952),
        Complex::new(-0.15094762, 0.18200602),
        Complex::new(1.01418179, 1.64497696),
        Complex::new(1.9660549, 2.5127645),
    ],
    ellipsoid: &INTERNATIONAL,
    datum: &NZGD_1949,
};

impl OrthomorphicZone {
    // 𝜁 = 𝜓 + iΔ𝜆
    fn zeta(&self, lat_long: &LatLong) -> Complex {
        let lt = (lat_long.latitude - self.phi_0) * LT_UNIT;
        let psi = horner(lt, self.cfi) * lt;
        let dlam = (lat_long.longitude - self.lambda_0).to_radians();
        Complex::new(psi, dlam)
    }

    // dz/d𝜁 = Σ (i+1) bᵢ 𝜁ⁱ
    fn derivative(&self, zeta: Complex) -> Complex {
        let coefficients: Vec<Complex> = self
            .cfb1
            .iter()
            .enumerate()
            .map(|(i, b)| b.scale((i + 1) as f64))
            .collect();
        horner_complex(zeta, &coefficients)
    }
}

impl ProjectionCore for OrthomorphicZone {
    fn name(&self) -> &str {
        self.name
    }

    // ----- F O R W A R D -----------------------------------------------------------

    fn fwd(&self, ellps: &Ellipsoid, lat_long: &LatLong) -> Projected {
        let a = ellps.semimajor_axis();
        let zeta = self.zeta(lat_long);
        let z = horner_complex(zeta, self.cfb1).mul(zeta);

        // Convergence is the direction of the image of the meridian, and
        // scale the magnification of dz/d𝜁 against the parallel radius
        let dz = self.derivative(zeta);
        let phi = lat_long.latitude.to_radians();
        let nu = ellps.prime_vertical_radius_of_curvature(phi);

        Projected {
            en: ENPair::new(self.e_0 + a * z.im, self.n_0 + a * z.re),
            convergence: dz.argument().to_degrees(),
            scale: a * dz.modulus() / (nu * phi.cos()),
        }
    }

    // ----- I N V E R S E -----------------------------------------------------------

    fn inv(&self, ellps: &Ellipsoid, en: &ENPair) -> Result<LatLong, Error> {
        let a = ellps.semimajor_axis();
        let z0 = Complex::new((en.north - self.n_0) / a, (en.east - self.e_0) / a);

        // First approximation from the inverse series
        let mut z1 = horner_complex(z0, self.cfb2).mul(z0);

        // Then exactly two Newton-Raphson steps:
        // 𝜁 ← (z0 + Σ i·bᵢ 𝜁ⁱ⁺¹) / Σ (i+1)·bᵢ 𝜁ⁱ
        let k = self.cfb1.len() - 1;
        for _ in 0..2 {
            let mut zn = self.cfb1[k].scale(k as f64);
            let mut zd = self.cfb1[k].scale((k + 1) as f64);
            for i in (1..k).rev() {
                zn = zn.mul(z1).add(self.cfb1[i].scale(i as f64));
                zd = zd.mul(z1).add(self.cfb1[i].scale((i + 1) as f64));
            }
            zn = zn.mul(z1).mul(z1).add(z0);
            zd = zd.mul(z1).add(self.cfb1[0]);
            z1 = zn.div(zd);
        }

        let longitude = self.lambda_0 + z1.im.to_degrees();
        let latitude = self.phi_0 + horner(z1.re, self.cfl) * z1.re / LT_UNIT;
        Ok(LatLong::new(latitude, longitude))
    }

    // ----- T E X T -----------------------------------------------------------------

    fn parse(&self, text: &str) -> Result<ENPair, Error> {
        metres::parse(text)
    }

    fn format(&self, projected: &Projected) -> String {
        metres::format(&projected.en)
    }

    fn default_ellipsoid(&self) -> &'static Ellipsoid {
        self.ellipsoid
    }

    fn default_datum(&self) -> &'static Datum {
        self.datum
    }
}

// ----- Tests ---------------------------------------------------------------------
