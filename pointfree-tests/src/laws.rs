//! Property tests for the algebraic laws every combinator must satisfy.

use pointfree::{compose, curry2, curry3, pipe, Either, Identity, Left, Maybe, Right};
use proptest::prelude::*;

fn double(x: i64) -> i64 {
    x.wrapping_mul(2)
}

fn dec(x: i64) -> i64 {
    x.wrapping_sub(1)
}

proptest! {
    #[test]
    fn functor_identity_law(x in any::<i64>()) {
        prop_assert_eq!(Identity::of(x).map(|v| v), Identity::of(x));

        let just: Maybe<i64> = Maybe::of(x);
        prop_assert_eq!(just.map(|v| v), just);
        prop_assert_eq!(Maybe::<i64>::nothing().map(|v| v), Maybe::nothing());

        let right: Either<i64, i64> = Right(x);
        prop_assert_eq!(right.map(|v| v), right);
        let left: Either<i64, i64> = Left(x);
        prop_assert_eq!(left.map(|v| v), left);
    }

    #[test]
    fn functor_composition_law(x in proptest::option::of(any::<i64>())) {
        let maybe: Maybe<i64> = Maybe::from(x);
        prop_assert_eq!(maybe.map(|v| double(dec(v))), maybe.map(dec).map(double));

        prop_assert_eq!(
            Identity::of(x).map(|v| v.map(dec)),
            Identity::of(x).map(|v| v).map(|v| v.map(dec))
        );
    }

    #[test]
    fn either_composition_law(x in any::<i64>(), left in any::<bool>()) {
        let e: Either<i64, i64> = if left { Left(x) } else { Right(x) };
        prop_assert_eq!(e.map(|v| double(dec(v))), e.map(dec).map(double));
    }

    #[test]
    fn curry_prefix_suffix_equivalence(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
        let f = |x: i64, y: i64| x.wrapping_add(y);
        prop_assert_eq!(curry2(f).apply(a).apply(b), f(a, b));
        prop_assert_eq!(curry2(f).apply2(a, b), f(a, b));

        let g = |x: i64, y: i64, z: i64| x.wrapping_mul(31).wrapping_add(y).wrapping_sub(z);
        prop_assert_eq!(curry3(g).apply(a).apply(b).apply(c), g(a, b, c));
        prop_assert_eq!(curry3(g).apply(a).apply2(b, c), g(a, b, c));
        prop_assert_eq!(curry3(g).apply2(a, b).apply(c), g(a, b, c));
        prop_assert_eq!(curry3(g).apply3(a, b, c), g(a, b, c));
    }

    #[test]
    fn compose_associativity(x in any::<i64>()) {
        let h = |v: i64| v.wrapping_add(7);
        let assoc_right = compose(double, compose(dec, h));
        let assoc_left = compose(compose(double, dec), h);
        prop_assert_eq!(assoc_right(x), assoc_left(x));
    }

    #[test]
    fn pipe_is_reversed_compose(x in any::<i64>()) {
        prop_assert_eq!(pipe(dec, double)(x), compose(double, dec)(x));
    }
}
