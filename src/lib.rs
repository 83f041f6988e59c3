//! *Datum shifts, map projections and grid references for national mapping grids*
//!
//! A position is held as a WGS84 earth centered cartesian triple, and may be
//! viewed through any of a closed set of coordinate systems:
//!
//! - The French Lambert conformal conic zones (I, II, III, IV, II étendu, 93)
//! - Transverse Mercator grids: the Ordnance Survey National Grid, the Irish
//!   Grid, NZTM2000, the Austrian Bundesmeldenetz and UTM
//! - The New Zealand Map Grid, a complex polynomial (orthomorphic) projection
//! - Plain latitude/longitude on any ellipsoid and datum
//!
//! ```rust
//! use gridref::prelude::*;
//! # fn main() -> Result<(), Error> {
//! let point = Projection::make_point(&OSGB, "SU 00000 00000", &AIRY, &OSGB_1936)?;
//! let lambert = Projection::new(&LAMBERT_93, point.position(), &GRS80, &RGF_1993)?;
//! println!("{lambert}");
//! # Ok(())}
//! ```

mod coordinate;
mod datum;
mod ellipsoid;
pub mod gridref;
pub mod math;
mod position;
pub mod projection;
mod system;

/// The bread-and-butter, shrink-wrapped and ready to use
pub mod prelude {
    pub use crate::coordinate::{ENPair, LatLong, XYZ};
    pub use crate::datum::*;
    pub use crate::ellipsoid::*;
    pub use crate::position::Position;
    pub use crate::projection::lambert::{
        LambertZone, LAMBERT_93, LAMBERT_I, LAMBERT_II, LAMBERT_III, LAMBERT_II_EXTENDED,
        LAMBERT_IV,
    };
    pub use crate::projection::orthomorphic::{OrthomorphicZone, NZMG};
    pub use crate::projection::spherical::{Spherical, SPHERICAL};
    pub use crate::projection::tmerc::{
        utm_zone, GridCodec, TransverseMercatorZone, AUSTRIAN_M28, AUSTRIAN_M31, AUSTRIAN_M34,
        IRISH_GRID, NZTM2000, OSGB,
    };
    pub use crate::projection::{Projected, Projection, ProjectionCore};
    pub use crate::system::CoordinateSystem;
    pub use crate::Error;
}

/// Preamble for the implementation of projection families
mod authoring {
    pub use crate::math::*;
    pub use crate::prelude::*;
    pub use log::{debug, error, trace, warn};
    pub use once_cell::sync::Lazy;
    pub use regex::Regex;
    pub use std::fmt;
}

// Lower case, without blanks and punctuation, for lookup of named things,
// so "WGS-84", "wgs84" and "WGS_84" are all the same
pub(crate) fn canonical_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// The crate error type. Everything that can go wrong is reported to the
/// caller; nothing is retried, and nothing is logged-and-swallowed.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid grid reference: {0}")]
    GridFormat(String),

    #[error("invalid latitude/longitude: {0}")]
    LatLongFormat(String),

    #[error("{what} failed to converge after {iterations} iterations")]
    Convergence {
        what: &'static str,
        iterations: usize,
    },

    #[error("singular Helmert matrix for datum {0}")]
    SingularDatum(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("invalid zone: {0}")]
    InvalidZone(String),
}
