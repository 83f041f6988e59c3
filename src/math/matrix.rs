/// A 3×3 matrix, row major
pub type Matrix3 = [[f64; 3]; 3];

/// Matrix-vector product, *M·v*
#[must_use]
pub fn mul_vec(m: &Matrix3, v: [f64; 3]) -> [f64; 3] {
    let mut res = [0.; 3];
    for (i, row) in m.iter().enumerate() {
        res[i] = row[0] * v[0] + row[1] * v[1] + row[2] * v[2];
    }
    res
}

/// Matrix product, *A·B*
#[must_use]
pub fn mul(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    let mut res = [[0.; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            res[i][j] = (0..3).map(|k| a[i][k] * b[k][j]).sum();
        }
    }
    res
}

// Row (or column) indices remaining when striking out the row (column) of the index
const MINOR: [[usize; 2]; 3] = [[1, 2], [0, 2], [0, 1]];

/// The signed cofactor of element (row, col)
#[must_use]
pub fn cofactor(m: &Matrix3, row: usize, col: usize) -> f64 {
    let [r1, r2] = MINOR[row];
    let [c1, c2] = MINOR[col];
    let minor = m[r1][c1] * m[r2][c2] - m[r1][c2] * m[r2][c1];
    if (row + col) % 2 == 0 {
        minor
    } else {
        -minor
    }
}

/// Determinant by cofactor expansion along the first row
#[must_use]
pub fn determinant(m: &Matrix3) -> f64 {
    (0..3).map(|j| m[0][j] * cofactor(m, 0, j)).sum()
}

/// The general inverse, as the transposed cofactor matrix divided by the
/// determinant. `None` for singular matrices.
#[must_use]
pub fn inverse(m: &Matrix3) -> Option<Matrix3> {
    let d = determinant(m);
    if d == 0. || !d.is_finite() {
        return None;
    }
    let mut res = [[0.; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            res[j][i] = cofactor(m, i, j) / d;
        }
    }
    Some(res)
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn inversion() {
        let m = [[2., 0., 1.], [1., 3., 2.], [1., 1., 1.]];
        assert_float_eq!(determinant(&m), 1., abs <= 1e-15);

        let inv = inverse(&m).unwrap();
        let id = mul(&m, &inv);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1. } else { 0. };
                assert_float_eq!(id[i][j], expected, abs <= 1e-14);
            }
        }

        let v = mul_vec(&inv, mul_vec(&m, [1., 2., 3.]));
        assert_float_eq!(v, [1., 2., 3.], abs_all <= 1e-14);
    }

    #[test]
    fn singular() {
        let m = [[1., 2., 3.], [2., 4., 6.], [1., 1., 1.]];
        assert_eq!(determinant(&m), 0.);
        assert!(inverse(&m).is_none());
    }
}
