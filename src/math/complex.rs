use std::fmt;

/// Just enough complex arithmetic for evaluating the polynomial and rational
/// series of the orthomorphic projections.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Complex {
        Complex { re, im }
    }

    #[must_use]
    pub fn add(self, other: Complex) -> Complex {
        Complex::new(self.re + other.re, self.im + other.im)
    }

    #[must_use]
    pub fn sub(self, other: Complex) -> Complex {
        Complex::new(self.re - other.re, self.im - other.im)
    }

    #[must_use]
    pub fn mul(self, other: Complex) -> Complex {
        Complex::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Complex {
        Complex::new(self.re * factor, self.im * factor)
    }

    #[must_use]
    pub fn div(self, other: Complex) -> Complex {
        self.mul(other.conjugate()).unscale(other.modulus_squared())
    }

    #[must_use]
    pub fn unscale(self, divisor: f64) -> Complex {
        Complex::new(self.re / divisor, self.im / divisor)
    }

    #[must_use]
    pub fn conjugate(self) -> Complex {
        Complex::new(self.re, -self.im)
    }

    #[must_use]
    pub fn modulus_squared(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    #[must_use]
    pub fn modulus(self) -> f64 {
        self.re.hypot(self.im)
    }

    #[must_use]
    pub fn argument(self) -> f64 {
        self.im.atan2(self.re)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:13.6},{:13.6})", self.re, self.im)
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn arithmetic() {
        let a = Complex::new(1., 2.);
        let b = Complex::new(3., -1.);

        assert_eq!(a.add(b), Complex::new(4., 1.));
        assert_eq!(a.sub(b), Complex::new(-2., 3.));
        assert_eq!(a.mul(b), Complex::new(5., 5.));
        assert_eq!(a.scale(2.), Complex::new(2., 4.));
        assert_eq!(a.unscale(2.), Complex::new(0.5, 1.));
        assert_eq!(a.conjugate(), Complex::new(1., -2.));
        assert_eq!(a.modulus_squared(), 5.);

        // Division undoes multiplication
        let q = a.mul(b).div(b);
        assert_float_eq!(q.re, a.re, abs <= 1e-15);
        assert_float_eq!(q.im, a.im, abs <= 1e-15);

        assert_float_eq!(Complex::new(0., 1.).argument(), std::f64::consts::FRAC_PI_2, abs <= 1e-15);
        assert_eq!(format!("{}", Complex::new(1., -1.)), "(     1.000000,    -1.000000)");
    }
}
