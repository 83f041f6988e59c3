//! Helmert (Bursa-Wolf) datum shifts between local reference frames and WGS84

use crate::coordinate::XYZ;
use crate::math::matrix::{self, Matrix3};
use crate::{canonical_name, Error};
use log::error;
use once_cell::sync::Lazy;
use std::fmt;

// Seconds of arc to radians
const ARCSEC: f64 = 4.848_136_811_095_360e-6;

/// A 7 parameter Helmert transformation between a local datum and WGS84.
///
/// The parameters are given the conventional way, as the local → WGS84
/// transformation, but are stored negated, so the stored matrix and
/// translation perform WGS84 → local directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Datum {
    name: String,
    t: [f64; 3],
    rx: f64,
    ry: f64,
    rz: f64,
    s: f64,
    rot: Matrix3,
    rin: Matrix3,
}

impl Datum {
    /// Translations in metres, rotations in seconds of arc, scale in ppm.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        tx: f64,
        ty: f64,
        tz: f64,
        rx: f64,
        ry: f64,
        rz: f64,
        scale: f64,
    ) -> Result<Datum, Error> {
        let t = [-tx, -ty, -tz];
        let rx = -rx * ARCSEC;
        let ry = -ry * ARCSEC;
        let rz = -rz * ARCSEC;
        let s = -scale * 1e-6;

        let rot = [
            [1. + s, -rz, ry],
            [rz, 1. + s, -rx],
            [-ry, rx, 1. + s],
        ];

        let Some(rin) = matrix::inverse(&rot) else {
            error!("Datum {name}: singular rotation matrix");
            return Err(Error::SingularDatum(name.to_string()));
        };

        Ok(Datum {
            name: name.to_string(),
            t,
            rx,
            ry,
            rz,
            s,
            rot,
            rin,
        })
    }

    /// Predefined datum, by its name or by the identifier of its constant.
    /// Case, blanks and punctuation are ignored.
    pub fn named(name: &str) -> Result<&'static Datum, Error> {
        let wanted = canonical_name(name);
        REGISTRY
            .iter()
            .find(|(id, datum)| {
                canonical_name(id) == wanted || canonical_name(&datum.name) == wanted
            })
            .map(|(_, datum)| *datum)
            .ok_or_else(|| Error::NotFound(format!("datum '{name}'")))
    }

    /// All predefined datums
    pub fn all() -> Vec<&'static Datum> {
        REGISTRY.iter().map(|(_, datum)| *datum).collect()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// WGS84 cartesian to local cartesian: *M·p + t*
    #[must_use]
    pub fn from_wgs84(&self, from: &XYZ) -> XYZ {
        let r = matrix::mul_vec(&self.rot, from.to_array());
        XYZ::new(r[0] + self.t[0], r[1] + self.t[1], r[2] + self.t[2])
    }

    /// Local cartesian to WGS84 cartesian: *M⁻¹·(q - t)*
    #[must_use]
    pub fn to_wgs84(&self, to: &XYZ) -> XYZ {
        let q = [to.x - self.t[0], to.y - self.t[1], to.z - self.t[2]];
        XYZ::from(matrix::mul_vec(&self.rin, q))
    }

    // ----- Accessors for the stored (negated) parameters -------------------------

    #[must_use]
    pub fn tx(&self) -> f64 {
        self.t[0]
    }
    #[must_use]
    pub fn ty(&self) -> f64 {
        self.t[1]
    }
    #[must_use]
    pub fn tz(&self) -> f64 {
        self.t[2]
    }
    /// Rotation around the x axis, radians
    #[must_use]
    pub fn rx(&self) -> f64 {
        self.rx
    }
    #[must_use]
    pub fn ry(&self) -> f64 {
        self.ry
    }
    #[must_use]
    pub fn rz(&self) -> f64 {
        self.rz
    }
    /// Scale, unitless (i.e. ppm × 1e-6)
    #[must_use]
    pub fn s(&self) -> f64 {
        self.s
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// ----- The predefined datums ---------------------------------------------------

macro_rules! datum {
    ($id:ident, $name:expr, $tx:expr, $ty:expr, $tz:expr, $rx:expr, $ry:expr, $rz:expr, $s:expr) => {
        pub static $id: Lazy<Datum> = Lazy::new(|| {
            Datum::new($name, $tx, $ty, $tz, $rx, $ry, $rz, $s)
                .expect(concat!("non-singular parameters for ", stringify!($id)))
        });
    };
}

datum!(ED_1950, "European Datum 1950 (Western Europe)", -87.0, -96.0, -120.0, 0., 0., 0., 0.);
datum!(IRELAND_1965, "Ireland 1965", 482.53, -130.596, 564.557, -1.042, -0.214, -0.631, 8.15);
datum!(NTF, "NTF Datum France (IGN)", -168.0, -60.0, 320.0, 0., 0., 0., 0.);
datum!(
    OSGB_1936,
    "Ordnance Survey of Great Britain 1936",
    446.448,
    -125.157,
    542.06,
    0.150,
    0.2470,
    0.8421,
    -20.49
);
datum!(WGS_1984, "WGS-84", 0., 0., 0., 0., 0., 0., 0.);
datum!(AUG_1984, "Australian Geodetic 1984", -116.0, -50.47, 141.69, 0.23, 0.39, 0.344, 0.0983);
datum!(MGI, "MGI Datum (Austria)", 577.3, 90.1, 463.9, 5.137, 1.474, 5.297, 2.42);
datum!(MGI_SLOVENIA, "MGI Datum (Slovenia)", 426.9, 142.6, 460.1, 4.91, 4.49, -12.42, 17.1);
datum!(NZGD_1949, "New Zealand 1949", 59.47, -5.04, 187.44, 0.47, -0.1, 1.024, -4.5993);
datum!(NZGD_2000, "New Zealand 2000", 0., 0., 0., 0., 0., 0., 0.);
datum!(RGF_1993, "RGF 1993 (France)", 0., 0., 0., 0., 0., 0., 0.);

static REGISTRY: Lazy<[(&'static str, &'static Datum); 11]> = Lazy::new(|| {
    [
        ("ED_1950", &*ED_1950),
        ("IRELAND_1965", &*IRELAND_1965),
        ("NTF", &*NTF),
        ("OSGB_1936", &*OSGB_1936),
        ("WGS_1984", &*WGS_1984),
        ("AUG_1984", &*AUG_1984),
        ("MGI", &*MGI),
        ("MGI_SLOVENIA", &*MGI_SLOVENIA),
        ("NZGD_1949", &*NZGD_1949),
        ("NZGD_2000", &*NZGD_2000),
        ("RGF_1993", &*RGF_1993),
    ]
});

// ----- Tests ---------------------------------------------------------------------
