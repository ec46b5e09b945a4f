use super::*;

fn m(rows: usize, cols: usize, data: &[f32]) -> Matrix {
    Matrix::from_slice(rows, cols, data).expect("test data has rows * cols elements")
}

#[test]
fn test_add() {
    let a = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    let b = m(2, 2, &[5.0, 6.0, 7.0, 8.0]);
    let c = a.add(&b).expect("both matrices have same dimensions: 2x2");

    assert_eq!(c.as_slice(), &[6.0, 8.0, 10.0, 12.0]);
    // inputs untouched
    assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_add_dimension_error() {
    let a = m(2, 2, &[1.0; 4]);
    let b = m(2, 3, &[1.0; 6]);
    let err = a.add(&b).expect_err("shapes differ");
    assert_eq!(err, MatrixError::dimension_mismatch("add", (2, 2), (2, 3)));
}

#[test]
fn test_sub() {
    let a = m(1, 3, &[5.0, 5.0, 5.0]);
    let b = m(1, 3, &[1.0, 2.0, 3.0]);
    let c = a.sub(&b).expect("same shape");
    assert_eq!(c.as_slice(), &[4.0, 3.0, 2.0]);
    assert!(a.sub(&m(3, 1, &[0.0; 3])).is_err());
}

#[test]
fn test_scalar_mul() {
    let a = m(2, 2, &[1.0, -2.0, 3.0, 0.5]);
    let c = a.scalar_mul(2.0).expect("allocation succeeds");
    assert_eq!(c.as_slice(), &[2.0, -4.0, 6.0, 1.0]);
}

#[test]
fn test_scalar_mul_identity_factor() {
    let a = m(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert!(a.scalar_mul(1.0).expect("allocation succeeds").approx_eq(&a));
}

#[test]
fn test_matmul() {
    let a = m(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let b = m(3, 2, &[1.0, 4.0, 2.0, 5.0, 3.0, -6.0]);
    let c = a
        .matmul(&b)
        .expect("matrix dimensions are compatible for multiplication: 2x3 * 3x2");

    assert_eq!(c.shape(), (2, 2));
    // c[0,0] = 1*1 + 2*2 + 3*3 = 14
    // c[0,1] = 1*4 + 2*5 + 3*-6 = -4
    // c[1,0] = 4*1 + 5*2 + 6*3 = 32
    // c[1,1] = 4*4 + 5*5 + 6*-6 = 5
    assert!(c.approx_eq(&m(2, 2, &[14.0, -4.0, 32.0, 5.0])));
}

#[test]
fn test_matmul_dimension_error() {
    let a = m(2, 3, &[1.0; 6]);
    let b = m(2, 2, &[1.0; 4]);
    assert!(matches!(
        a.matmul(&b),
        Err(MatrixError::DimensionMismatch { op: "matmul", .. })
    ));
}

#[test]
fn test_matmul_empty_inner_dimension() {
    let a = Matrix::zeros(2, 0).expect("degenerate allocation");
    let b = Matrix::zeros(0, 3).expect("degenerate allocation");
    let c = a.matmul(&b).expect("inner dimensions agree");
    assert_eq!(c.shape(), (2, 3));
    assert!(c.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_trace() {
    let a = m(3, 3, &[1.0, 9.0, 9.0, 9.0, 2.0, 9.0, 9.0, 9.0, 3.0]);
    assert!((a.trace().expect("square") - 6.0).abs() < 1e-6);
}

#[test]
fn test_trace_non_square() {
    let a = m(2, 3, &[1.0; 6]);
    assert_eq!(
        a.trace(),
        Err(MatrixError::NotSquare {
            op: "trace",
            shape: (2, 3)
        })
    );
}

#[test]
fn test_trace_distinguishes_zero() {
    let a = m(2, 2, &[1.0, 0.0, 0.0, -1.0]);
    assert_eq!(a.trace(), Ok(0.0));
}

#[test]
fn test_norm() {
    let a = m(2, 2, &[3.0, 0.0, 0.0, 4.0]);
    assert!((a.norm() - 5.0).abs() < 1e-6);
    assert_eq!(Matrix::zeros(0, 0).expect("empty").norm(), 0.0);
}

#[test]
fn test_approx_eq() {
    let a = m(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let b = m(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert!(a.approx_eq(&b));

    let c = m(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.01]);
    assert!(!a.approx_eq(&c));

    let d = m(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0005]);
    assert!(a.approx_eq(&d));
}

#[test]
fn test_approx_eq_nan_is_unequal() {
    let a = m(1, 2, &[1.0, f32::NAN]);
    assert!(!a.approx_eq(&a));
}

#[test]
fn test_approx_eq_shape_mismatch_is_unequal() {
    let a = m(2, 3, &[0.0; 6]);
    let b = m(3, 2, &[0.0; 6]);
    assert!(!a.approx_eq(&b));
}

#[test]
fn test_approx_eq_with_custom_tolerance() {
    let a = m(1, 2, &[1.0, 2.0]);
    let b = m(1, 2, &[1.05, 2.0]);
    assert!(!a.approx_eq(&b));
    let loose = Tolerance::new(0.1).expect("valid tolerance");
    assert!(a.approx_eq_with(&b, loose));
}
