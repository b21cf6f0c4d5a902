//! Algebraic properties checked on randomly generated matrices.

use approx::assert_relative_eq;
use typed_linalg::*;

const ROUNDS: usize = 200;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random<const R: usize, const C: usize>(rng: &mut fastrand::Rng) -> Dense<R, C> {
    Dense::from_fn(|_, _| rng.f64() * 200.0 - 100.0)
}

/// Runs `check` against every element position of an `R`x`C` matrix.
fn for_each_position<const R: usize, const C: usize>(mut check: impl FnMut(usize, usize)) {
    for row in 0..R {
        for col in 0..C {
            check(row, col);
        }
    }
}

#[test]
fn elementwise_laws() {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    for _ in 0..ROUNDS {
        let a = random::<3, 4>(&mut rng);
        let b = random::<3, 4>(&mut rng);
        let s = rng.f64() * 10.0 - 5.0;

        let sum = &a + &b;
        let diff = &a - &b;
        let scaled = &a * s;
        let shifted = &a + s;
        let neg = -&a;
        for_each_position::<3, 4>(|r, c| {
            assert_eq!(sum.elem(r, c), a.elem(r, c) + b.elem(r, c));
            assert_eq!(diff.elem(r, c), a.elem(r, c) - b.elem(r, c));
            assert_eq!(scaled.elem(r, c), a.elem(r, c) * s);
            assert_eq!(shifted.elem(r, c), a.elem(r, c) + s);
            assert_eq!(neg.elem(r, c), -a.elem(r, c));
        });
    }
}

#[test]
fn elementwise_laws_across_representations() {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..ROUNDS {
        let a = random::<4, 2>(&mut rng);
        let k = rng.f64();
        let c = fill(S4, S2, k);
        let t = random::<2, 4>(&mut rng);

        assert_eq!(&a + c, &a + k);
        assert_eq!(&a - c, &a - k);
        assert_eq!(c - &a, -(&a - k));
        let with_view = &a + t.transpose();
        for_each_position::<4, 2>(|r, col| {
            assert_eq!(with_view.elem(r, col), a.elem(r, col) + t.elem(col, r));
        });
    }
}

#[test]
fn transpose_involution() {
    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..ROUNDS {
        let a = random::<3, 5>(&mut rng);
        let tt = a.transpose().transpose();
        assert!(std::ptr::eq(tt, &a));
        for_each_position::<3, 5>(|r, c| assert_eq!(tt.get(r, c), a.get(r, c)));

        let copied = a.transpose().to_dense();
        assert_eq!(copied.transpose(), a);
    }
}

#[test]
fn product_matches_nalgebra() {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(1234);
    for _ in 0..ROUNDS {
        let a = random::<2, 3>(&mut rng);
        let b = random::<3, 4>(&mut rng);

        let na_a = nalgebra::SMatrix::<f64, 2, 3>::from_fn(|r, c| a[(r, c)]);
        let na_b = nalgebra::SMatrix::<f64, 3, 4>::from_fn(|r, c| b[(r, c)]);
        let expected = na_a * na_b;

        let product = a * b;
        assert_eq!(product.shape(), (2, 4));
        for_each_position::<2, 4>(|r, c| {
            assert_relative_eq!(product[(r, c)], expected[(r, c)], epsilon = 1e-9);
        });
    }
}

#[test]
fn product_properties() {
    let mut rng = fastrand::Rng::with_seed(99);
    for _ in 0..ROUNDS {
        let a = random::<2, 3>(&mut rng);
        let b = random::<3, 3>(&mut rng);
        let c = random::<3, 2>(&mut rng);

        // Associativity only holds up to rounding.
        assert_relative_eq!(
            (&a * &b) * &c,
            &a * (&b * &c),
            epsilon = 1e-6,
            max_relative = 1e-12
        );
        assert_eq!((&a * &b).transpose(), b.transpose() * a.transpose());
        assert_eq!(&a * Dense::identity(), a);
        assert_eq!(Dense::identity() * &a, a);
    }
}

#[test]
fn documented_product() {
    let a = matrix_of(S2, S3, &[[3.0, 2.0, 1.0], [1.0, 0.0, 2.0]]).unwrap();
    let b = matrix_of(S3, S2, &[[1.0, 2.0], [0.0, 1.0], [4.0, 0.0]]).unwrap();
    let expected = matrix_of(S2, S2, &[[7.0, 8.0], [9.0, 2.0]]).unwrap();
    assert_eq!(a * b, expected);
}

#[test]
fn addition_of_constants() {
    for first in 1..=100 {
        for second in 1..=100 {
            let a = fill(S2, S2, first as f64);
            let b = fill(S2, S2, second as f64);
            assert_eq!(a + b, fill(S2, S2, (first + second) as f64));
        }
    }
}

#[test]
fn vector_contraction() {
    fn contract<const R: usize>() -> f64 {
        let a = fill_vector(Dim::<R>, 1.0);
        let b = fill_vector(Dim::<R>, 2.0);
        (a.transpose() * b).to_scalar()
    }

    assert_eq!(contract::<1>(), 2.0);
    assert_eq!(contract::<3>(), 6.0);
    assert_eq!(contract::<50>(), 100.0);
}

#[test]
fn index_errors() {
    let m = dense(S3, S2, |r, c| (r + c) as f64);
    let err = m.get(3, 0).unwrap_err();
    assert!(err.is_index());
    assert_eq!(
        err.to_string(),
        "index (3, 0) can not be accessed in matrix of size (3, 2)"
    );
    // A wrapped `-1`.
    assert!(m.get(0_usize.wrapping_sub(1), 0).unwrap_err().is_index());
    assert!(fill(S3, S2, 0.0).get(3, 0).is_err());
    assert!(m.transpose().get(2, 0).is_err());
}

#[test]
fn construction_errors() {
    init_logger();
    let too_few: &[&[f64]] = &[&[1.0, 2.0]];
    let too_many: &[&[f64]] = &[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]];
    let ragged: &[&[f64]] = &[&[1.0, 2.0], &[3.0, 4.0, 5.0]];

    for data in [too_few, too_many, ragged] {
        let result = matrix_of(S2, S2, data);
        assert!(result.unwrap_err().is_construction());
    }
}

#[test]
fn representation_independent_equality() {
    let c = fill(S2, S3, 0.25);
    let d = dense(S2, S3, |_, _| 0.25);
    assert_eq!(c, d);
    assert_eq!(d, c);
    assert_ne!(fill(S2, S3, 0.5), d);
    assert_ne!(c, d.plus_scalar(1e-12));
}

#[test]
fn large_shapes() {
    init_logger();
    let c = fill(Dim::<512>, Dim::<512>, 1.0);
    assert_eq!(std::mem::size_of_val(&c), 8);

    let shifted = c + 1.0;
    assert_eq!(shifted, fill(Dim::<512>, Dim::<512>, 2.0));
    assert_eq!(shifted.as_slice().len(), 512 * 512);

    let sum = &shifted + shifted.transpose();
    assert_eq!(sum.get(511, 0), Ok(4.0));
    assert_eq!(-&sum, fill(Dim::<512>, Dim::<512>, -4.0));

    let v = fill_vector(Dim::<100_000>, 0.5);
    let w = dense_vector(Dim::<100_000>, |i| (i % 2) as f64);
    assert_eq!((v.t() * &w).to_scalar(), 25_000.0);
}

#[test]
fn matrices_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Dense<4, 4>>();
    assert_send_sync::<Constant<4, 4>>();
    assert_send_sync::<Transposed<'static, Dense<4, 4>, 4, 4>>();

    let m = Dense::<3, 3>::identity();
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| assert_eq!(m.transpose(), m));
        }
    });
}
