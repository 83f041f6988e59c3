use crate::authoring::*;
use crate::canonical_name;

/// The closed list of named coordinate systems, each pairing a projection
/// with its customary ellipsoid and datum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSystem {
    LatLong,
    LambertI,
    LambertII,
    LambertIII,
    LambertIV,
    LambertIIExtended,
    Lambert93,
    Osgb,
    IrishGrid,
    Nztm2000,
    Nzmg,
    AustrianM28,
    AustrianM31,
    AustrianM34,
    Utm { zone: u8, north: bool },
}

const FIXED: [CoordinateSystem; 14] = [
    CoordinateSystem::LatLong,
    CoordinateSystem::LambertI,
    CoordinateSystem::LambertII,
    CoordinateSystem::LambertIII,
    CoordinateSystem::LambertIV,
    CoordinateSystem::LambertIIExtended,
    CoordinateSystem::Lambert93,
    CoordinateSystem::Osgb,
    CoordinateSystem::IrishGrid,
    CoordinateSystem::Nztm2000,
    CoordinateSystem::Nzmg,
    CoordinateSystem::AustrianM28,
    CoordinateSystem::AustrianM31,
    CoordinateSystem::AustrianM34,
];

static UTM_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^utm(\d{1,2})([ns])$").expect("valid UTM name regex"));

impl CoordinateSystem {
    /// Every system, UTM zones included
    pub fn all() -> Vec<CoordinateSystem> {
        let mut all = FIXED.to_vec();
        for zone in 1..=60 {
            all.push(CoordinateSystem::Utm { zone, north: true });
            all.push(CoordinateSystem::Utm { zone, north: false });
        }
        all
    }

    /// Look up a system by name, ignoring case, blanks and punctuation, so
    /// `"Lambert 93"`, `"lambert93"` and `"LAMBERT-93"` are all the same.
    /// UTM zones are named like `"UTM 32N"`.
    pub fn named(name: &str) -> Result<CoordinateSystem, Error> {
        let wanted = canonical_name(name);

        if let Some(caps) = UTM_NAME.captures(&wanted) {
            let zone: u8 = caps[1]
                .parse()
                .map_err(|_| Error::InvalidZone(name.to_string()))?;
            let north = &caps[2] == "n";
            utm_zone(zone, north)?;
            return Ok(CoordinateSystem::Utm { zone, north });
        }

        let aliases: &[(&str, CoordinateSystem)] = &[
            ("latlong", CoordinateSystem::LatLong),
            ("latlon", CoordinateSystem::LatLong),
            ("spherical", CoordinateSystem::LatLong),
            ("lambert1", CoordinateSystem::LambertI),
            ("lambert2", CoordinateSystem::LambertII),
            ("lambert3", CoordinateSystem::LambertIII),
            ("lambert4", CoordinateSystem::LambertIV),
            ("lambert2e", CoordinateSystem::LambertIIExtended),
            ("lambertiie", CoordinateSystem::LambertIIExtended),
            ("osgb36", CoordinateSystem::Osgb),
            ("irish", CoordinateSystem::IrishGrid),
            ("nztm", CoordinateSystem::Nztm2000),
            ("bmnm28", CoordinateSystem::AustrianM28),
            ("bmnm31", CoordinateSystem::AustrianM31),
            ("bmnm34", CoordinateSystem::AustrianM34),
            ("m28", CoordinateSystem::AustrianM28),
            ("m31", CoordinateSystem::AustrianM31),
            ("m34", CoordinateSystem::AustrianM34),
        ];
        if let Some((_, system)) = aliases.iter().find(|(alias, _)| *alias == wanted) {
            return Ok(*system);
        }

        FIXED
            .iter()
            .find(|system| canonical_name(&system.name()) == wanted)
            .copied()
            .ok_or_else(|| Error::NotFound(format!("coordinate system '{name}'")))
    }

    /// The projection formulae and grid reference format of this system
    pub fn core(&self) -> Result<&'static dyn ProjectionCore, Error> {
        let core: &'static dyn ProjectionCore = match self {
            CoordinateSystem::LatLong => &SPHERICAL,
            CoordinateSystem::LambertI => &LAMBERT_I,
            CoordinateSystem::LambertII => &LAMBERT_II,
            CoordinateSystem::LambertIII => &LAMBERT_III,
            CoordinateSystem::LambertIV => &LAMBERT_IV,
            CoordinateSystem::LambertIIExtended => &LAMBERT_II_EXTENDED,
            CoordinateSystem::Lambert93 => &LAMBERT_93,
            CoordinateSystem::Osgb => &OSGB,
            CoordinateSystem::IrishGrid => &IRISH_GRID,
            CoordinateSystem::Nztm2000 => &NZTM2000,
            CoordinateSystem::Nzmg => &NZMG,
            CoordinateSystem::AustrianM28 => &AUSTRIAN_M28,
            CoordinateSystem::AustrianM31 => &AUSTRIAN_M31,
            CoordinateSystem::AustrianM34 => &AUSTRIAN_M34,
            CoordinateSystem::Utm { zone, north } => utm_zone(*zone, *north)?,
        };
        Ok(core)
    }

    pub fn name(&self) -> String {
        match self.core() {
            Ok(core) => core.name().to_string(),
            Err(_) => format!("{self:?}"),
        }
    }

    pub fn default_ellipsoid(&self) -> Result<&'static Ellipsoid, Error> {
        Ok(self.core()?.default_ellipsoid())
    }

    pub fn default_datum(&self) -> Result<&'static Datum, Error> {
        Ok(self.core()?.default_datum())
    }

    /// Project `position` on the default ellipsoid and datum of the system
    pub fn from_position(&self, position: &Position) -> Result<Projection<'static>, Error> {
        let core = self.core()?;
        Projection::new(core, position, core.default_ellipsoid(), core.default_datum())
    }

    /// The point at plane coordinates `en`, on the default ellipsoid and datum
    pub fn from_en(&self, en: ENPair) -> Result<Projection<'static>, Error> {
        let core = self.core()?;
        Projection::from_en(core, en, core.default_ellipsoid(), core.default_datum())
    }

    /// The point given by the grid reference `text`, on the default
    /// ellipsoid and datum
    pub fn make_point(&self, text: &str) -> Result<Projection<'static>, Error> {
        let core = self.core()?;
        Projection::make_point(core, text, core.default_ellipsoid(), core.default_datum())
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ----- Tests ---------------------------------------------------------------------
