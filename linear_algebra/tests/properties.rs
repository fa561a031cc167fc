//! Cross-operation properties of the matrix library.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use ark_std::test_rng;
use dense_algebra::{algebra, AlgebraError, ErrorKind, Matrix, Transpose};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn m(vals: Vec<Vec<f64>>) -> Matrix<f64> {
    Matrix::new(vals).unwrap()
}

fn assert_close(a: &Matrix<f64>, b: &Matrix<f64>, epsilon: f64) {
    assert_eq!(a.shape(), b.shape());
    for (x, y) in a.rows().iter().flatten().zip(b.rows().iter().flatten()) {
        assert_abs_diff_eq!(*x, *y, epsilon = epsilon);
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn zeros_and_ones_have_requested_shape() {
    for n in 0..5 {
        for k in 0..5 {
            let z = algebra::zeros(n, k);
            let o = algebra::ones(n, k);
            if n == 0 || k == 0 {
                assert!(z.is_empty());
                assert!(o.is_empty());
                continue;
            }
            assert_eq!(z.nrows(), n);
            assert!(z.rows().iter().all(|row| row.len() == k));
            assert!(z.rows().iter().flatten().all(|v| *v == 0.0));
            assert!(o.rows().iter().flatten().all(|v| *v == 1.0));
        }
    }
}

#[test]
fn seeded_random_is_reproducible() {
    let a = algebra::random_with_rng(&mut ChaCha8Rng::seed_from_u64(42), 3, 4, -1.0, 1.0).unwrap();
    let b = algebra::random_with_rng(&mut ChaCha8Rng::seed_from_u64(42), 3, 4, -1.0, 1.0).unwrap();
    assert_eq!(a, b);
    assert!(a.rows().iter().flatten().all(|v| (-1.0..1.0).contains(v)));

    let err = algebra::random(2, 2, 5.0, 5.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn show_renders_three_decimals() {
    let a = m(vec![vec![1.0, 2.5], vec![-0.1234, 10.0]]);
    assert_eq!(a.to_string(), "1.000 2.500\n-0.123 10.000\n");
    assert_eq!(algebra::zeros(0, 3).to_string(), "\n");
    algebra::show(&a);
}

// ---------------------------------------------------------------------------
// Algebraic identities
// ---------------------------------------------------------------------------

#[test]
fn transpose_is_an_involution() {
    let rng = &mut test_rng();
    for n in 0..6 {
        let a = algebra::random_with_rng(rng, n, n, -10.0, 10.0).unwrap();
        assert_eq!(a.transpose().transpose(), a);
        assert_eq!(algebra::transpose(&algebra::transpose(&a)), a);
    }
}

#[test]
fn product_is_associative() {
    let rng = &mut test_rng();
    for _ in 0..10 {
        let (p, q, r, s) = (
            rng.gen_range(1..5),
            rng.gen_range(1..5),
            rng.gen_range(1..5),
            rng.gen_range(1..5),
        );
        let a = algebra::random_with_rng(rng, p, q, -1.0, 1.0).unwrap();
        let b = algebra::random_with_rng(rng, q, r, -1.0, 1.0).unwrap();
        let c = algebra::random_with_rng(rng, r, s, -1.0, 1.0).unwrap();

        let left = algebra::multiply(&algebra::multiply(&a, &b).unwrap(), &c).unwrap();
        let right = algebra::multiply(&a, &algebra::multiply(&b, &c).unwrap()).unwrap();
        assert_close(&left, &right, 1e-9);
    }
}

#[test]
fn scalar_identities() {
    let rng = &mut test_rng();
    let a = algebra::random_with_rng(rng, 3, 5, -100.0, 100.0).unwrap();
    assert_eq!(algebra::sum_scalar(&a, 0.0), a);
    assert_eq!(algebra::multiply_scalar(&a, 1.0), a);
    assert!(algebra::sum_scalar(&Matrix::empty(), 3.0).is_empty());
}

#[test]
fn inverse_times_matrix_is_identity() {
    init();
    let rng = &mut test_rng();
    for n in 1..6 {
        let a = algebra::random_with_rng(rng, n, n, -5.0, 5.0).unwrap();
        let inv = algebra::inverse(&a).unwrap();
        let product = algebra::multiply(&a, &inv).unwrap();
        assert_close(&product, &algebra::identity(n), 1e-6);
    }
}

#[test]
fn determinant_identities() {
    for n in 0..7 {
        assert_eq!(algebra::determinant(&algebra::identity(n)), Ok(1.0));
    }

    let rng = &mut test_rng();
    for n in 2..6 {
        let a = algebra::random_with_rng(rng, n, n, -3.0, 3.0).unwrap();
        let zero_row = algebra::ero_multiply(&a, n - 1, 0.0).unwrap();
        assert_eq!(algebra::determinant(&zero_row), Ok(0.0));
    }
}

#[test]
fn upper_triangular_preserves_determinant_magnitude() {
    init();
    let rng = &mut test_rng();
    for n in 1..6 {
        let a = algebra::random_with_rng(rng, n, n, -2.0, 2.0).unwrap();
        let u = algebra::upper_triangular(&a).unwrap();
        for i in 0..n {
            for j in 0..i {
                assert_abs_diff_eq!(u[(i, j)], 0.0, epsilon = 1e-9);
            }
        }
        let diag: f64 = (0..n).map(|i| u[(i, i)]).product();
        assert_relative_eq!(
            diag.abs(),
            algebra::determinant(&a).unwrap().abs(),
            max_relative = 1e-6
        );
    }
}

// ---------------------------------------------------------------------------
// Worked examples
// ---------------------------------------------------------------------------

#[test]
fn worked_examples() {
    let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    let b = m(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
    assert_eq!(
        algebra::multiply(&a, &b).unwrap(),
        m(vec![vec![19.0, 22.0], vec![43.0, 50.0]])
    );

    assert_eq!(algebra::determinant(&a), Ok(-2.0));

    let c = m(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ]);
    assert_eq!(
        algebra::minor(&c, 1, 1).unwrap(),
        m(vec![vec![1.0, 3.0], vec![7.0, 9.0]])
    );

    let inv = algebra::inverse(&m(vec![vec![4.0, 7.0], vec![2.0, 6.0]])).unwrap();
    assert_close(&inv, &m(vec![vec![0.6, -0.7], vec![-0.2, 0.4]]), 1e-3);

    assert_eq!(
        algebra::upper_triangular(&m(vec![vec![0.0, 1.0], vec![1.0, 0.0]])).unwrap(),
        algebra::identity(2)
    );

    assert_eq!(
        algebra::concatenate(&m(vec![vec![1.0, 2.0]]), &m(vec![vec![3.0, 4.0]]), 0).unwrap(),
        m(vec![vec![1.0, 2.0], vec![3.0, 4.0]])
    );
    assert_eq!(
        algebra::concatenate(
            &m(vec![vec![1.0], vec![2.0]]),
            &m(vec![vec![3.0], vec![4.0]]),
            1
        )
        .unwrap(),
        m(vec![vec![1.0, 3.0], vec![2.0, 4.0]])
    );
}

#[test]
fn errors_are_distinguishable() {
    let a23 = algebra::ones(2, 3);
    let a22 = algebra::ones(2, 2);

    let err = algebra::multiply(&a23, &a22).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
    assert_eq!(
        err,
        AlgebraError::DimensionMismatch {
            lhs: (2, 3),
            rhs: (2, 2)
        }
    );
    assert_eq!(
        algebra::sum(&a23, &a22).unwrap_err().kind(),
        ErrorKind::DimensionMismatch
    );

    let singular = m(vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
    assert_eq!(algebra::inverse(&singular), Err(AlgebraError::Singular));
    assert_eq!(
        algebra::determinant(&a23).unwrap_err().kind(),
        ErrorKind::Structural
    );
    assert_eq!(
        algebra::ero_swap(&a22, 0, 2).unwrap_err().kind(),
        ErrorKind::Structural
    );
    assert_eq!(
        algebra::minor(&a22, 2, 0).unwrap_err().kind(),
        ErrorKind::Structural
    );
}

#[test]
fn operations_leave_inputs_untouched() {
    let a = m(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
    let before = a.clone();
    let _ = algebra::upper_triangular(&a).unwrap();
    let _ = algebra::ero_sum(&a, 0, 3.0, 1).unwrap();
    let _ = algebra::inverse(&a).unwrap();
    assert_eq!(a, before);
}
