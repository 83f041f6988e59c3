/// The isometric latitude, 𝜓, of the ellipsoidal latitude 𝜙 (radians), on an
/// ellipsoid of eccentricity *e*:
///
///   𝜓 = log(
///           tan(𝜋/4 + 𝜙/2) *
///           ( (1 - e × sin 𝜙) / (1 + e × sin 𝜙) ) ^ (e/2)
///       )
///     = asinh(tan 𝜙) - e × atanh(e × sin 𝜙)
///
/// This is the *q(𝜙)* of the conformal conic formulae.
#[must_use]
pub fn isometric_latitude(phi: f64, e: f64) -> f64 {
    phi.tan().asinh() - e * (e * phi.sin()).atanh()
}

/// The isometric latitude, given sin 𝜙 rather than 𝜙. Used by the Newton
/// iteration of the conformal conic inverse, which works on sin 𝜙 directly.
#[must_use]
pub fn isometric_latitude_from_sin(sinphi: f64, e: f64) -> f64 {
    0.5 * ((1. + sinphi) / (1. - sinphi)).ln() - e * (e * sinphi).atanh()
}

/// *w(𝜙) = sqrt(1 - e² sin² 𝜙)*, the ratio between the semimajor axis and the
/// prime vertical radius of curvature
#[must_use]
pub fn w(sinphi: f64, es: f64) -> f64 {
    (1. - es * sinphi * sinphi).sqrt()
}

// ----- Tests ---------------------------------------------------------------------
