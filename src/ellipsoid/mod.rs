use crate::{canonical_name, Error};
use std::fmt;

mod cartesians;
mod meridians;

/// Representation of a biaxial ellipsoid of revolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    name: &'static str,
    a: f64,
    // Inverse flattening, 1/f. Zero for a sphere.
    rf: f64,
}

pub const AIRY: Ellipsoid = Ellipsoid::new("Airy 1830", 6_377_563.396, 299.324_964_6);
pub const MODIFIED_AIRY: Ellipsoid = Ellipsoid::new("Modified Airy", 6_377_340.189, 299.324_964_6);
pub const GRS80: Ellipsoid = Ellipsoid::new("GRS 1980", 6_378_137.0, 298.257_222_101);
pub const WGS84: Ellipsoid = Ellipsoid::new("WGS 1984", 6_378_137.0, 298.257_223_563);
pub const CLARKE: Ellipsoid = Ellipsoid::new("Clarke 1880 (IGN)", 6_378_249.2, 293.466_021_293_627);
pub const INTERNATIONAL: Ellipsoid = Ellipsoid::new("International 1924", 6_378_388.0, 297.0);
pub const BESSEL: Ellipsoid = Ellipsoid::new("Bessel 1841", 6_377_397.155, 299.152_812_8);
pub const AUSTRALIAN_NATIONAL: Ellipsoid =
    Ellipsoid::new("Australian National", 6_378_160.0, 298.25);

static REGISTRY: [(&str, &Ellipsoid); 8] = [
    ("AIRY", &AIRY),
    ("MODIFIED_AIRY", &MODIFIED_AIRY),
    ("GRS80", &GRS80),
    ("WGS84", &WGS84),
    ("CLARKE", &CLARKE),
    ("INTERNATIONAL", &INTERNATIONAL),
    ("BESSEL", &BESSEL),
    ("AUSTRALIAN_NATIONAL", &AUSTRALIAN_NATIONAL),
];

/// GRS80 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        GRS80
    }
}

impl fmt::Display for Ellipsoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Ellipsoid {
    /// User defined ellipsoid, from its semimajor axis and inverse flattening.
    /// An inverse flattening of 0 gives a sphere.
    #[must_use]
    pub const fn new(name: &'static str, semimajor_axis: f64, inverse_flattening: f64) -> Ellipsoid {
        Ellipsoid {
            name,
            a: semimajor_axis,
            rf: inverse_flattening,
        }
    }

    /// Predefined ellipsoid, by its name or by the identifier of its constant.
    /// Case, blanks and punctuation are ignored.
    pub fn named(name: &str) -> Result<&'static Ellipsoid, Error> {
        let wanted = canonical_name(name);
        REGISTRY
            .iter()
            .find(|(id, ellps)| {
                canonical_name(id) == wanted || canonical_name(ellps.name) == wanted
            })
            .map(|(_, ellps)| *ellps)
            .ok_or_else(|| Error::NotFound(format!("ellipsoid '{name}'")))
    }

    /// All predefined ellipsoids
    pub fn all() -> Vec<&'static Ellipsoid> {
        REGISTRY.iter().map(|(_, ellps)| *ellps).collect()
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    // ----- Eccentricities --------------------------------------------------------

    /// The squared eccentricity *e² = (a² - b²) / a²*.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        let f = self.flattening();
        f * (2_f64 - f)
    }

    /// The eccentricity *e*
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_squared().sqrt()
    }

    /// The squared second eccentricity *e'² = (a² - b²) / b² = e² / (1 - e²)*
    #[must_use]
    pub fn second_eccentricity_squared(&self) -> f64 {
        let es = self.eccentricity_squared();
        es / (1.0 - es)
    }

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b*
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.a * (1.0 - self.flattening())
    }

    // ----- Flattenings -----------------------------------------------------------

    /// The flattening, *f = (a - b)/a*
    #[must_use]
    pub fn flattening(&self) -> f64 {
        if self.rf == 0. {
            return 0.;
        }
        1. / self.rf
    }

    /// The third flattening, *n = (a - b) / (a + b) = f / (2 - f)*
    #[must_use]
    pub fn third_flattening(&self) -> f64 {
        let f = self.flattening();
        f / (2.0 - f)
    }

    // ----- Curvatures ------------------------------------------------------------

    /// The radius of curvature in the prime vertical, *N* (or 𝜈)
    #[must_use]
    pub fn prime_vertical_radius_of_curvature(&self, latitude: f64) -> f64 {
        if self.rf == 0.0 {
            return self.a;
        }
        self.a / (1.0 - latitude.sin().powi(2) * self.eccentricity_squared()).sqrt()
    }

    /// The meridian radius of curvature, *M* (or 𝜌)
    #[must_use]
    pub fn meridian_radius_of_curvature(&self, latitude: f64) -> f64 {
        if self.rf == 0.0 {
            return self.a;
        }
        let num = self.a * (1.0 - self.eccentricity_squared());
        let denom = (1.0 - latitude.sin().powi(2) * self.eccentricity_squared()).powf(1.5);
        num / denom
    }
}

// ----- Tests ---------------------------------------------------------------------
