use super::Complex;

/// Evaluate Σ cᵢ · xⁱ using Horner's scheme
pub fn horner(arg: f64, coefficients: &[f64]) -> f64 {
    let mut coefficients = coefficients.iter().rev();
    let Some(first) = coefficients.next() else {
        return 0.;
    };
    let mut value = *first;
    for c in coefficients {
        value = value * arg + *c;
    }
    value
}

/// Evaluate Σ cᵢ · zⁱ for complex coefficients and argument, using Horner's scheme
pub fn horner_complex(arg: Complex, coefficients: &[Complex]) -> Complex {
    let mut coefficients = coefficients.iter().rev();
    let Some(first) = coefficients.next() else {
        return Complex::default();
    };
    let mut value = *first;
    for c in coefficients {
        value = value.mul(arg).add(*c);
    }
    value
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real() {
        // 1 + 2x + 3x²
        assert_eq!(horner(2., &[1., 2., 3.]), 17.);
        assert_eq!(horner(0., &[1., 2., 3.]), 1.);
        assert_eq!(horner(5., &[]), 0.);
    }

    #[test]
    fn complex() {
        // 1 + i·z, evaluated at z = i, gives 1 + i² = 0
        let c = [Complex::new(1., 0.), Complex::new(0., 1.)];
        let v = horner_complex(Complex::new(0., 1.), &c);
        assert_eq!(v, Complex::new(0., 0.));

        // (1 + i)z² at z = 2
        let c = [Complex::default(), Complex::default(), Complex::new(1., 1.)];
        let v = horner_complex(Complex::new(2., 0.), &c);
        assert_eq!(v, Complex::new(4., 4.));
    }
}
