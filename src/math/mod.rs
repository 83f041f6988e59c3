//! Miscellaneous math functions for general use

/// Free functions used in more than one projection family.
pub mod ancillary;
pub use ancillary::{isometric_latitude, isometric_latitude_from_sin};

/// Free functions for handling and converting between
/// different representations of angles.
pub mod angular;

/// A minimal complex number type for the orthomorphic projections
pub mod complex;
pub use complex::Complex;

/// 3×3 matrices for the Helmert transformations
pub mod matrix;
pub use matrix::Matrix3;

/// Polynomial evaluation
pub mod series;
pub use series::horner;
pub use series::horner_complex;
