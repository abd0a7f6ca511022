use nalgebra::linalg::Schur;
use nalgebra::linalg::balancing::balance_parlett_reinsch;
use nalgebra::{Complex, DMatrix};

/// Upper bound on implicit double-shift QR sweeps before giving up.
pub const MAX_SCHUR_ITER: usize = 1000;

/// All roots of a real polynomial given highest power first.
///
/// `coeffs = [c0, c1, …, cn]` describes `c0·xⁿ + c1·xⁿ⁻¹ + … + cn`. The roots
/// are the eigenvalues of the balanced companion matrix, computed through
/// `nalgebra`'s real Schur decomposition.
///
/// Leading zeros lower the degree and trailing zeros contribute roots at the
/// origin, so `[0, 1, -1, 0]` yields `{1, 0}`. The order of the returned roots
/// is unspecified.
///
/// Non-finite coefficients do not abort: every root is reported as NaN so
/// the failure surfaces in the caller's numbers. The same happens if the
/// QR iteration fails to converge.
pub fn polynomial_roots(coeffs: &[f64]) -> Vec<Complex<f64>> {
    let Some(start) = coeffs.iter().position(|&c| c != 0.0) else {
        return Vec::new();
    };
    let coeffs = &coeffs[start..];

    let end = coeffs
        .iter()
        .rposition(|&c| c != 0.0)
        .map_or(coeffs.len(), |i| i + 1);
    let zeros_at_origin = coeffs.len() - end;
    let coeffs = &coeffs[..end];
    let degree = coeffs.len() - 1;

    let mut roots = Vec::with_capacity(degree + zeros_at_origin);
    if coeffs.iter().any(|c| !c.is_finite()) {
        roots.resize(degree, nan_root());
    } else if degree > 0 {
        roots.extend(companion_eigenvalues(coeffs));
    }
    roots.resize(roots.len() + zeros_at_origin, Complex::new(0.0, 0.0));
    roots
}

fn nan_root() -> Complex<f64> {
    Complex::new(f64::NAN, f64::NAN)
}

/// Eigenvalues of the companion matrix of a polynomial whose leading and
/// trailing coefficients are both non-zero.
fn companion_eigenvalues(coeffs: &[f64]) -> Vec<Complex<f64>> {
    let degree = coeffs.len() - 1;
    let lead = coeffs[0];

    let mut companion = DMatrix::<f64>::zeros(degree, degree);
    for (j, c) in coeffs[1..].iter().enumerate() {
        companion[(0, j)] = -*c / lead;
    }
    for i in 1..degree {
        companion[(i, i - 1)] = 1.0;
    }

    // Coefficients of the carbonate polynomial span ~40 orders of magnitude;
    // without balancing the small roots lose most of their digits.
    balance_parlett_reinsch(&mut companion);

    match Schur::try_new(companion, f64::EPSILON, MAX_SCHUR_ITER) {
        Some(schur) => schur.complex_eigenvalues().iter().copied().collect(),
        None => {
            log::warn!(
                "Schur decomposition did not converge within {MAX_SCHUR_ITER} iterations (degree {degree})"
            );
            vec![nan_root(); degree]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_real_parts(roots: &[Complex<f64>]) -> Vec<f64> {
        let mut re: Vec<f64> = roots.iter().map(|r| r.re).collect();
        re.sort_by(|a, b| a.total_cmp(b));
        re
    }

    #[test]
    fn cubic_with_real_roots() {
        // (x - 1)(x - 2)(x + 3) = x³ - 7x + 6
        let roots = polynomial_roots(&[1.0, 0.0, -7.0, 6.0]);
        assert_eq!(roots.len(), 3);
        let re = sorted_real_parts(&roots);
        for (got, want) in re.iter().zip([-3.0, 1.0, 2.0]) {
            assert!((got - want).abs() < 1e-10, "{got} vs {want}");
        }
        assert!(roots.iter().all(|r| r.im.abs() < 1e-10));
    }

    #[test]
    fn quadratic_with_complex_pair() {
        // x² + 2x + 5 has roots -1 ± 2i
        let roots = polynomial_roots(&[1.0, 2.0, 5.0]);
        assert_eq!(roots.len(), 2);
        for r in &roots {
            assert!((r.re + 1.0).abs() < 1e-12);
            assert!((r.im.abs() - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn leading_and_trailing_zeros() {
        let roots = polynomial_roots(&[0.0, 2.0, -2.0, 0.0]);
        let re = sorted_real_parts(&roots);
        assert_eq!(re.len(), 2);
        assert!(re[0].abs() < 1e-15);
        assert!((re[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_inputs() {
        assert!(polynomial_roots(&[]).is_empty());
        assert!(polynomial_roots(&[0.0, 0.0]).is_empty());
        assert!(polynomial_roots(&[3.0]).is_empty());
        let linear = polynomial_roots(&[2.0, -1.0]);
        assert_eq!(linear.len(), 1);
        assert!((linear[0].re - 0.5).abs() < 1e-15);
    }

    #[test]
    fn non_finite_coefficients_give_nan_roots() {
        let roots = polynomial_roots(&[1.0, f64::NAN, 1.0]);
        assert_eq!(roots.len(), 2);
        assert!(roots.iter().all(|r| r.re.is_nan()));
    }

    #[test]
    fn badly_scaled_roots_keep_relative_accuracy() {
        // Roots at 1e-8, -2e-9, -1e-6 and -2e-3, similar in spread to seawater.
        let want = [1e-8, -2e-9, -1e-6, -2e-3];
        let mut coeffs = vec![1.0];
        for r in want {
            let mut next = vec![0.0; coeffs.len() + 1];
            for (i, c) in coeffs.iter().enumerate() {
                next[i] += c;
                next[i + 1] -= c * r;
            }
            coeffs = next;
        }
        let roots = polynomial_roots(&coeffs);
        let mut re = sorted_real_parts(&roots);
        re.reverse();
        let mut expected = want.to_vec();
        expected.sort_by(|a, b| b.total_cmp(a));
        for (got, want) in re.iter().zip(expected) {
            assert!(((got - want) / want).abs() < 1e-6, "{got} vs {want}");
        }
    }
}
