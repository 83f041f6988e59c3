/// Degrees, minutes and seconds to decimal degrees. The sign is taken from
/// the degrees, so angles within a degree south or west of zero cannot be
/// written this way.
pub fn dms_to_dd(d: i32, m: u16, s: f64) -> f64 {
    let dd = f64::from(d.unsigned_abs()) + (f64::from(m) + s / 60.) / 60.;
    if d < 0 {
        -dd
    } else {
        dd
    }
}

/// Split the absolute value of an angle in degrees-with-decimals into
/// whole degrees, whole minutes and seconds-with-decimals. The seconds
/// are rounded to `decimals` places *before* the split, so that formatting
/// never produces `60.00` seconds.
pub fn dd_to_dms(dd: f64, decimals: i32) -> (u32, u32, f64) {
    let scale = 10_f64.powi(decimals);
    let total = (dd.abs() * 3600. * scale).round() / scale;
    let d = (total / 3600.).floor();
    let rest = total - d * 3600.;
    let m = (rest / 60.).floor();
    let s = rest - m * 60.;
    (d as u32, m as u32, s)
}

/// Longitude style wrap of an angle in degrees, into [-180, 180)
pub fn normalize_symmetric_degrees(angle: f64) -> f64 {
    let angle = (angle + 180.).rem_euclid(360.);
    angle - 180.
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn test_angular() {
        // dms
        assert_eq!(dms_to_dd(55, 30, 36.), 55.51);
        assert_eq!(dms_to_dd(-55, 30, 36.), -55.51);
        assert_eq!(dms_to_dd(0, 30, 0.), 0.5);

        let (d, m, s) = dd_to_dms(55.51, 2);
        assert_eq!((d, m), (55, 30));
        assert_float_eq!(s, 36., abs <= 1e-9);

        // 59.999 seconds rounds up into the next minute
        let (d, m, s) = dd_to_dms(dms_to_dd(1, 59, 59.999), 2);
        assert_eq!((d, m), (2, 0));
        assert_float_eq!(s, 0., abs <= 1e-9);

        // Sign is the caller's business
        assert_eq!(dd_to_dms(-0.5, 2).1, 30);

        assert_eq!(normalize_symmetric_degrees(190.), -170.);
        assert_eq!(normalize_symmetric_degrees(-190.), 170.);
        assert_eq!(normalize_symmetric_degrees(180.), -180.);
        assert_eq!(normalize_symmetric_degrees(12.), 12.);
    }
}
