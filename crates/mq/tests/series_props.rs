//! Property tests for the algebraic degree machinery.

use cryptoforge_mq::series::NMonomialSeries;
use cryptoforge_mq::witness::{degree_of_regularity_quadratic, witness_degree_quadratic};
use proptest::prelude::*;

proptest! {
    #[test]
    fn witness_degree_weakly_decreases_with_more_equations(
        n in 2u64..20,
        extra in 1u64..10,
        q in prop::sample::select(vec![2u64, 3, 4, 5, 7, 16]),
    ) {
        let m = n + 1;
        let loose = witness_degree_quadratic(n, m, Some(q));
        let tight = witness_degree_quadratic(n, m + extra, Some(q));
        prop_assert!(loose.is_some() && tight.is_some());
        prop_assert!(tight.unwrap() <= loose.unwrap());
    }

    #[test]
    fn witness_degree_dominates_degree_of_regularity(
        n in 2u64..16,
        extra in 1u64..8,
        q in prop::sample::select(vec![2u64, 3, 5]),
    ) {
        let m = n + extra;
        let dreg = degree_of_regularity_quadratic(n, m, Some(q)).unwrap();
        let wd = witness_degree_quadratic(n, m, Some(q)).unwrap();
        prop_assert!(wd >= dreg);
    }

    #[test]
    fn monomial_counts_accumulate(
        n in 1u64..12,
        q in prop::sample::select(vec![2u64, 3, 4, 5]),
        prec in 3usize..12,
    ) {
        let series = NMonomialSeries::new(n, Some(q), prec);
        let mut acc = 0.0;
        for d in 0..prec {
            acc += series.nmonomials_of_degree(d);
            prop_assert_eq!(series.nmonomials_up_to_degree(d), acc);
        }
    }

    #[test]
    fn monomial_counts_saturate_at_field_size(
        n in 1u64..10,
        q in prop::sample::select(vec![2u64, 3]),
    ) {
        let max_degree = ((q - 1) * n) as usize;
        let series = NMonomialSeries::new(n, Some(q), max_degree + 2);
        prop_assert_eq!(
            series.nmonomials_up_to_degree(max_degree),
            (q as f64).powi(n as i32)
        );
        prop_assert_eq!(series.nmonomials_of_degree(max_degree + 1), 0.0);
    }
}
