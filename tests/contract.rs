#![cfg(test)]

mod test_utils;

use pretty_assertions::assert_eq;
use tabfn::{
    EPSILON, FunctionError, Point, StorageKind, TabulatedFunction, Validate, ValidationResult,
    function::OrderingReason,
};
use test_utils::{
    KINDS, assert_ascending, assert_float_eq, from_values_each, init_logging, tabulate_each,
};

mod borders {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_borders_follow_mutations() {
        init_logging();
        for (kind, mut function) in tabulate_each(0.0, 4.0, 5) {
            assert_eq!(function.domain(), (0.0, 4.0), "{kind}");

            function.add_point(Point::new(-2.0, 0.0)).unwrap();
            function.set_point_x(function.count() - 1, 6.0).unwrap();
            assert_eq!(function.domain(), (-2.0, 6.0), "{kind}");

            function.delete_point(0).unwrap();
            assert_eq!(function.left_border(), 0.0, "{kind}");
        }
    }

    #[test]
    fn test_value_at_outside_domain_is_nan() {
        init_logging();
        for (kind, function) in from_values_each(1.0, 3.0, &[5.0, 6.0, 7.0]) {
            assert!(function.value_at(1.0 - 1e-6).is_nan(), "{kind}");
            assert!(function.value_at(3.0 + 1e-6).is_nan(), "{kind}");
            assert!(function.value_at(f64::NEG_INFINITY).is_nan(), "{kind}");
            assert!(function.value_at(f64::NAN).is_nan(), "{kind}");
        }
    }

    #[test]
    fn test_value_at_within_tolerance_of_borders() {
        init_logging();
        for (kind, function) in from_values_each(1.0, 3.0, &[5.0, 6.0, 7.0]) {
            assert_eq!(function.value_at(1.0 - EPSILON / 2.0), 5.0, "{kind}");
            assert_eq!(function.value_at(3.0 + EPSILON / 2.0), 7.0, "{kind}");
        }
    }
}

mod evaluation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_exact_points_are_recalled() {
        init_logging();
        let values = [1.5, -2.0, 0.25, 8.0, 3.0];
        for (kind, function) in from_values_each(-1.0, 1.0, &values) {
            for i in 0..function.count() {
                let x = function.point_x(i).unwrap();
                assert_eq!(function.value_at(x), function.point_y(i).unwrap(), "{kind}");
                assert_eq!(
                    function.value_at(x + EPSILON / 4.0),
                    values[i],
                    "{kind} near point {i}"
                );
            }
        }
    }

    #[test]
    fn test_interpolation_on_irregular_spacing() {
        init_logging();
        for (kind, mut function) in from_values_each(0.0, 10.0, &[0.0, 10.0]) {
            function.add_point(Point::new(2.0, 4.0)).unwrap();
            function.add_point(Point::new(9.0, -1.0)).unwrap();

            assert_float_eq(function.value_at(1.0), 2.0, 1e-12);
            assert_float_eq(function.value_at(5.5), 1.5, 1e-12);
            assert_float_eq(function.value_at(9.5), 4.5, 1e-12);
            assert_eq!(function.count(), 4, "{kind}");
        }
    }
}

mod indexing {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_accessor_rejects_bad_index() {
        init_logging();
        for (kind, mut function) in tabulate_each(0.0, 1.0, 3) {
            let expected = FunctionError::IndexOutOfBounds { index: 3, count: 3 };

            assert_eq!(function.point(3).unwrap_err(), expected, "{kind}");
            assert_eq!(function.point_x(3).unwrap_err(), expected, "{kind}");
            assert_eq!(function.point_y(3).unwrap_err(), expected, "{kind}");
            assert_eq!(
                function.set_point(3, Point::new(5.0, 0.0)).unwrap_err(),
                expected,
                "{kind}"
            );
            assert_eq!(function.set_point_x(3, 5.0).unwrap_err(), expected, "{kind}");
            assert_eq!(function.set_point_y(3, 5.0).unwrap_err(), expected, "{kind}");
            assert_eq!(function.delete_point(3).unwrap_err(), expected, "{kind}");
            assert_eq!(function.count(), 3, "{kind}");
        }
    }

    #[test]
    fn test_set_point_y_never_checks_order() {
        init_logging();
        for (kind, mut function) in tabulate_each(0.0, 1.0, 3) {
            function.set_point_y(1, -1e300).unwrap();
            function.set_point_y(2, f64::INFINITY).unwrap();
            assert_eq!(function.point_y(1).unwrap(), -1e300, "{kind}");
            assert_ascending(&*function);
        }
    }

    #[test]
    fn test_set_point_replaces_both_coordinates() {
        init_logging();
        for (kind, mut function) in tabulate_each(0.0, 2.0, 3) {
            function.set_point(1, Point::new(0.5, 9.0)).unwrap();
            assert_eq!(function.point(1).unwrap(), Point::new(0.5, 9.0), "{kind}");
        }
    }

    #[test]
    fn test_failed_set_point_leaves_point_unchanged() {
        init_logging();
        for (kind, mut function) in tabulate_each(0.0, 2.0, 3) {
            assert!(function.set_point(1, Point::new(0.0, 9.0)).is_err());
            assert!(function.set_point(1, Point::new(f64::NAN, 9.0)).is_err());
            assert_eq!(function.point(1).unwrap(), Point::new(1.0, 0.0), "{kind}");
        }
    }
}

mod insertion {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_point_lands_at_sorted_index() {
        init_logging();
        for (kind, mut function) in tabulate_each(0.0, 4.0, 5) {
            function.add_point(Point::new(2.5, 7.0)).unwrap();

            assert_eq!(function.count(), 6, "{kind}");
            assert_eq!(function.point(3).unwrap(), Point::new(2.5, 7.0), "{kind}");
            assert_eq!(function.point_x(4).unwrap(), 3.0, "{kind}");
            assert_ascending(&*function);
        }
    }

    #[test]
    fn test_many_insertions_keep_order() {
        init_logging();
        for (kind, mut function) in tabulate_each(0.0, 1.0, 2) {
            for k in 1..40 {
                let x = ((k * 17) % 40) as f64 / 40.0 + 0.0125;
                function.add_point(Point::new(x, k as f64)).unwrap();
            }
            assert_eq!(function.count(), 41, "{kind}");
            assert_ascending(&*function);
        }
    }

    #[test]
    fn test_near_duplicate_outside_epsilon_is_accepted() {
        init_logging();
        for (kind, mut function) in tabulate_each(0.0, 2.0, 3) {
            function.add_point(Point::new(1.0 + 1e-6, 3.0)).unwrap();
            assert_eq!(function.count(), 4, "{kind}");
            assert_eq!(function.point_x(2).unwrap(), 1.0 + 1e-6, "{kind}");
        }
    }

    #[test]
    fn test_rejected_insertion_is_an_ordering_error() {
        init_logging();
        for (kind, mut function) in tabulate_each(0.0, 2.0, 3) {
            assert!(
                function
                    .add_point(Point::new(2.0, 1.0))
                    .unwrap_err()
                    .is_ordering_error(),
                "{kind}"
            );
            assert!(
                function
                    .add_point(Point::new(f64::NAN, 1.0))
                    .unwrap_err()
                    .is_ordering_error(),
                "{kind}"
            );
            assert_eq!(function.count(), 3, "{kind}");
        }
    }
}

mod non_finite_x {
    use super::*;
    use pretty_assertions::assert_eq;

    const XS: [f64; 3] = [f64::INFINITY, f64::NEG_INFINITY, f64::NAN];

    fn assert_non_finite(result: tabfn::function::Result<()>, kind: StorageKind) {
        assert!(
            matches!(
                result,
                Err(FunctionError::Ordering {
                    reason: OrderingReason::NonFinite { .. }
                })
            ),
            "{kind}: {result:?}"
        );
    }

    #[test]
    fn test_every_x_mutator_rejects_non_finite_x() {
        init_logging();
        let mut outcomes = Vec::new();

        for (kind, mut function) in tabulate_each(0.0, 2.0, 3) {
            let before = function.points();

            for x in XS {
                assert_non_finite(function.add_point(Point::new(x, 7.0)), kind);
                for index in 0..function.count() {
                    assert_non_finite(function.set_point(index, Point::new(x, 7.0)), kind);
                    assert_non_finite(function.set_point_x(index, x), kind);
                }
            }

            assert_eq!(function.points(), before, "{kind}");
            assert_eq!(function.validate(), ValidationResult::Valid(()), "{kind}");
            outcomes.push(function.points());
        }

        assert_eq!(outcomes[0], outcomes[1]);
    }

    #[test]
    fn test_infinite_last_x_then_infinite_insert_is_refused() {
        init_logging();
        for (kind, mut function) in tabulate_each(0.0, 2.0, 3) {
            assert_non_finite(function.set_point_x(2, f64::INFINITY), kind);
            assert_non_finite(function.add_point(Point::new(f64::INFINITY, 7.0)), kind);

            assert_eq!(function.count(), 3, "{kind}");
            assert_eq!(function.right_border(), 2.0, "{kind}");
            assert_ascending(&*function);
        }
    }

    #[test]
    fn test_infinite_borders_are_rejected() {
        init_logging();
        for kind in KINDS {
            let err = kind.tabulate(0.0, f64::INFINITY, 3).unwrap_err();
            assert!(err.is_construction_error(), "{kind}");
            let err = kind.from_values(f64::NEG_INFINITY, 0.0, &[1.0, 2.0]).unwrap_err();
            assert!(err.is_construction_error(), "{kind}");
        }
    }
}

mod validation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fresh_functions_are_valid() {
        init_logging();
        for (kind, function) in tabulate_each(-5.0, 5.0, 11) {
            assert_eq!(function.validate(), ValidationResult::Valid(()), "{kind}");
        }
    }

    #[test]
    fn test_non_finite_y_is_reported_as_warning() {
        init_logging();
        for (kind, mut function) in tabulate_each(0.0, 1.0, 3) {
            function.set_point_y(1, f64::NAN).unwrap();

            let result = function.validate();
            assert!(result.is_valid(), "{kind}");
            assert_eq!(result.warnings().len(), 1, "{kind}");
        }
    }

    #[test]
    fn test_tight_neighbours_are_reported_as_warning() {
        init_logging();
        for (kind, mut function) in tabulate_each(0.0, 1.0, 3) {
            function.set_point_x(1, 1.0 - EPSILON / 2.0).unwrap();
            assert!(
                matches!(function.validate(), ValidationResult::Warnings(_, _)),
                "{kind}"
            );
        }
    }
}
