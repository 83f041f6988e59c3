//! Text encodings of grid references, one submodule per family of formats.
//!
//! Every parser reports malformed text as [`Error::GridFormat`] (or
//! [`Error::LatLongFormat`]), naming the rule that was broken.

use crate::Error;

pub mod bmn;
pub mod lambert;
pub mod latlong;
pub mod letters;
pub mod metres;
pub mod utm;

// Parse a finite number, mapping failure to a grid format error
fn number(text: &str, what: &str) -> Result<f64, Error> {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::GridFormat(format!("{what}: bad number '{text}'"))),
    }
}
