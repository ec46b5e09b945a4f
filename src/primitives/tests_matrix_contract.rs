// =========================================================================
// Matrix structural contract
//
// Shape and ownership rules that every transform must keep:
//   - buffer length is always rows * cols
//   - value-producing operations never touch their inputs
//   - removing a row and column shrinks each dimension by one
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::Matrix;

fn sample(rows: usize, cols: usize) -> Matrix {
    let data: Vec<f32> = (0..rows * cols).map(|i| i as f32 - 3.5).collect();
    Matrix::from_vec(rows, cols, data).expect("valid")
}

/// Transpose involution: (A^T)^T = A
#[test]
fn contract_transpose_involution() {
    let a = sample(2, 3);
    let att = a
        .transpose()
        .and_then(|t| t.transpose())
        .expect("allocation succeeds");
    assert_eq!(att, a, "(A^T)^T != A");
}

/// Transpose swaps shape: (m×n)^T = (n×m)
#[test]
fn contract_transpose_swaps_shape() {
    let at = sample(3, 5).transpose().expect("allocation succeeds");
    assert_eq!(at.shape(), (5, 3));
    assert_eq!(at.as_slice().len(), 15);
}

/// Matmul shape: (m×k) * (k×n) = (m×n)
#[test]
fn contract_matmul_shape() {
    let c = sample(2, 3).matmul(&sample(3, 4)).expect("compatible dims");
    assert_eq!(c.shape(), (2, 4));
}

/// Identity matmul: A * I = I * A = A
#[test]
fn contract_identity_matmul() {
    let a = sample(3, 3);
    let eye = Matrix::identity(3).expect("valid");
    assert!(a.matmul(&eye).expect("compatible dims").approx_eq(&a));
    assert!(eye.matmul(&a).expect("compatible dims").approx_eq(&a));
}

/// Submatrix removes exactly one row and one column, down to 0x0
#[test]
fn contract_submatrix_shrinks_shape() {
    let mut m = sample(4, 4);
    for n in (0..4).rev() {
        m = m.submatrix(0, n).expect("indices in range");
        assert_eq!(m.shape(), (n, n));
        assert_eq!(m.as_slice().len(), n * n);
    }
    assert!(m.is_empty());
}

/// Value-producing operations leave their operands unchanged
#[test]
fn contract_operations_do_not_mutate_inputs() {
    let a = sample(3, 3);
    let b = sample(3, 3);
    let (a0, b0) = (a.clone(), b.clone());

    let _ = a.add(&b);
    let _ = a.sub(&b);
    let _ = a.matmul(&b);
    let _ = a.scalar_mul(3.0);
    let _ = a.transpose();
    let _ = a.submatrix(1, 1);
    let _ = a.determinant();
    let _ = a.inverse();

    assert_eq!(a, a0);
    assert_eq!(b, b0);
}

mod matrix_proptest_contract {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn prop_transpose_involution(
            rows in 0..=8usize,
            cols in 0..=8usize,
            seed in 0..500u32,
        ) {
            let data: Vec<f32> = (0..rows * cols)
                .map(|i| ((i as f32 + seed as f32) * 0.37).sin() * 10.0)
                .collect();
            let a = Matrix::from_vec(rows, cols, data).expect("valid");
            let att = a.transpose().and_then(|t| t.transpose()).expect("valid");

            prop_assert_eq!(att, a);
        }

        #[test]
        fn prop_submatrix_shape(
            rows in 1..=8usize,
            cols in 1..=8usize,
            r in 0..8usize,
            c in 0..8usize,
        ) {
            let a = Matrix::zeros(rows, cols).expect("valid");
            let sub = a.submatrix(r, c);
            if r < rows && c < cols {
                prop_assert_eq!(sub.expect("in range").shape(), (rows - 1, cols - 1));
            } else {
                prop_assert!(sub.is_err());
            }
        }

        #[test]
        fn prop_get_matches_row_major_layout(
            rows in 1..=6usize,
            cols in 1..=6usize,
        ) {
            let data: Vec<f32> = (0..rows * cols).map(|i| i as f32).collect();
            let a = Matrix::from_slice(rows, cols, &data).expect("valid");
            for i in 0..rows {
                for j in 0..cols {
                    prop_assert_eq!(a.get(i, j), Some(data[i * cols + j]));
                }
            }
            prop_assert_eq!(a.get(rows, 0), None);
            prop_assert_eq!(a.get(0, cols), None);
        }
    }
}
