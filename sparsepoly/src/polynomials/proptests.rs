//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::polynomials::polynomial_arithmetic::{product, sum};
    use crate::polynomials::Polynomial;
    use crate::test_utils::{nonzero_polynomial, small_polynomial};

    fn small_point() -> impl Strategy<Value = f64> {
        (-2i32..=2).prop_map(f64::from)
    }

    fn assert_ordered_and_nonzero(poly: &Polynomial) -> Result<(), TestCaseError> {
        for pair in poly.iter().collect::<Vec<_>>().windows(2) {
            prop_assert!(pair[0].exponent() > pair[1].exponent());
        }
        for term in poly {
            prop_assert!(term.coefficient() != 0.0);
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn storage_stays_ordered(a in small_polynomial(), b in small_polynomial()) {
            assert_ordered_and_nonzero(&a)?;
            assert_ordered_and_nonzero(&sum(Some(&a), Some(&b)).unwrap())?;
            assert_ordered_and_nonzero(&product(Some(&a), Some(&b)).unwrap())?;
        }

        #[test]
        fn copy_equals_source(a in small_polynomial()) {
            let copy = Polynomial::copy_of(Some(&a)).unwrap();
            prop_assert_eq!(copy, a);
        }

        #[test]
        fn token_string_round_trips(a in small_polynomial()) {
            let reparsed = Polynomial::parse(&a.to_token_string()).unwrap();
            prop_assert_eq!(reparsed.to_string(), a.to_string());
            prop_assert_eq!(reparsed, a);
        }

        #[test]
        fn inverse_term_cancels(a in small_polynomial(), c in 1i32..50, e in 0i64..8) {
            let mut poly = a.clone();
            poly.add_term(f64::from(c), e).unwrap();
            let with_term = poly.terms();
            let coefficient = poly.get_coefficient(e);
            prop_assume!(coefficient != 0.0);
            poly.add_term(-coefficient, e).unwrap();
            prop_assert_eq!(poly.get_coefficient(e), 0.0);
            prop_assert_eq!(poly.terms(), with_term - 1);
        }

        #[test]
        fn deleting_absent_exponent_is_a_no_op(a in small_polynomial()) {
            let mut poly = a.clone();
            prop_assert_eq!(poly.delete_term(1_000), 0.0);
            prop_assert_eq!(poly, a);
        }

        #[test]
        fn sum_commutative(a in small_polynomial(), b in small_polynomial()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn product_commutative(a in small_polynomial(), b in small_polynomial()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn distributive(a in small_polynomial(), b in small_polynomial(), c in small_polynomial()) {
            let left = &a * &(&b + &c);
            let right = &(&a * &b) + &(&a * &c);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn sum_leaves_inputs_alone(a in small_polynomial(), b in small_polynomial()) {
            let (a_before, b_before) = (a.clone(), b.clone());
            let _ = sum(Some(&a), Some(&b)).unwrap();
            let _ = product(Some(&a), Some(&b)).unwrap();
            prop_assert_eq!(a, a_before);
            prop_assert_eq!(b, b_before);
        }

        #[test]
        fn evaluate_respects_sum(a in small_polynomial(), b in small_polynomial(), x in small_point()) {
            prop_assert_eq!((&a + &b).evaluate(x), a.evaluate(x) + b.evaluate(x));
        }

        #[test]
        fn evaluate_respects_product(a in small_polynomial(), b in small_polynomial(), x in small_point()) {
            prop_assert_eq!((&a * &b).evaluate(x), a.evaluate(x) * b.evaluate(x));
        }

        #[test]
        fn derivative_of_sum(a in nonzero_polynomial(), b in nonzero_polynomial()) {
            let total = &a + &b;
            prop_assume!(!total.is_zero());
            let expected = &a.derivative().unwrap() + &b.derivative().unwrap();
            prop_assert_eq!(total.derivative().unwrap(), expected);
        }

        #[test]
        fn derivative_lowers_degree(a in nonzero_polynomial()) {
            let derived = a.derivative().unwrap();
            match a.degree() {
                Some(0) => prop_assert!(derived.is_zero()),
                Some(degree) => prop_assert_eq!(derived.degree(), Some(degree - 1)),
                None => unreachable!("strategy yields non-zero polynomials"),
            }
        }
    }
}
